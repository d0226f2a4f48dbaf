use serde::{Deserialize, Serialize};

/// The fixed set of profile fields formatted into the scheme
/// recommendation prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitizenProfile {
    pub occupation: String,
    pub annual_income: u64,
    pub age: u32,
    pub location: String,
    pub category: String,
}

impl CitizenProfile {
    /// Renders the profile as the labelled block embedded in prompts.
    pub fn prompt_block(&self) -> String {
        format!(
            "Occupation: {}\nAnnual income (INR): {}\nAge: {}\nLocation: {}\nCategory: {}",
            self.occupation, self.annual_income, self.age, self.location, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_block_lists_all_fields() {
        let profile = CitizenProfile {
            occupation: "Farmer".to_string(),
            annual_income: 120_000,
            age: 45,
            location: "Madurai".to_string(),
            category: "OBC".to_string(),
        };
        let block = profile.prompt_block();
        assert!(block.contains("Farmer"));
        assert!(block.contains("120000"));
        assert!(block.contains("Madurai"));
        assert_eq!(block.lines().count(), 5);
    }
}
