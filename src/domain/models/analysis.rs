use serde::{Deserialize, Serialize};

/// Confidence reported when the model response carries no parseable
/// confidence figure.
pub const DEFAULT_CONFIDENCE: u8 = 85;

/// Recommendations reported when no recommendation-shaped lines are found
/// in the model response.
pub const DEFAULT_RECOMMENDATIONS: [&str; 3] = [
    "Verify the submitted document against the original",
    "Cross-check applicant details with department records",
    "Confirm the document is within its validity period",
];

/// Coarse three-tier risk label assigned by keyword matching against
/// model output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured result of a document analysis, derived entirely from one
/// free-text model response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub analysis: String,
    /// 0–100; heuristically extracted, not independently verified.
    pub confidence: u8,
    /// At most five entries, never empty.
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
}

impl DocumentAnalysis {
    pub fn default_recommendations() -> Vec<String> {
        DEFAULT_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect()
    }
}

/// A document analysis plus the outcome of producing it.
///
/// `success` is false only when the completion call itself failed; parsing
/// shortfalls degrade to field defaults instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub success: bool,
    pub data: DocumentAnalysis,
    pub model: String,
}

impl AnalysisReport {
    pub fn succeeded(data: DocumentAnalysis, model: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            model: model.into(),
        }
    }

    /// Fail-safe report returned when the completion call fails: risk is
    /// forced to HIGH and the only recommendation is manual review.
    pub fn failed() -> Self {
        Self {
            success: false,
            data: DocumentAnalysis {
                analysis: "Analysis failed. The document could not be processed automatically."
                    .to_string(),
                confidence: 0,
                recommendations: vec!["Manual review required".to_string()],
                risk_level: RiskLevel::High,
            },
            model: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_report_is_fail_safe() {
        let report = AnalysisReport::failed();
        assert!(!report.success);
        assert_eq!(report.model, "error");
        assert_eq!(report.data.confidence, 0);
        assert_eq!(report.data.risk_level, RiskLevel::High);
        assert_eq!(report.data.recommendations, vec!["Manual review required"]);
        assert!(report.data.analysis.starts_with("Analysis failed"));
    }

    #[test]
    fn test_risk_level_serializes_upper_case() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
    }
}
