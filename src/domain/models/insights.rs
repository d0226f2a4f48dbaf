use serde::{Deserialize, Serialize};
use tracing::warn;

/// Review state of an application as displayed in the portal. Labels only;
/// transition rules live with the department workflow, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pending" => ApplicationStatus::Pending,
            "under_review" | "review" | "in_review" => ApplicationStatus::UnderReview,
            "approved" => ApplicationStatus::Approved,
            "rejected" => ApplicationStatus::Rejected,
            unknown => {
                warn!("Unknown application status '{}', defaulting to pending", unknown);
                ApplicationStatus::Pending
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ApplicationStatus::Pending | ApplicationStatus::UnderReview)
    }
}

/// A citizen application as seen on an officer's dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub applicant: String,
    pub scheme: String,
    pub status: ApplicationStatus,
    pub urgent: bool,
    pub days_pending: u32,
}

impl Application {
    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }
}

/// The officer whose queue is being summarized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerProfile {
    pub name: String,
    pub designation: String,
    pub district: String,
}

/// AI-generated queue summary for an officer, plus a deterministic
/// workload metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerInsights {
    pub insights: String,
    /// At most three entries.
    pub priorities: Vec<String>,
    /// At most five entries.
    pub recommendations: Vec<String>,
    /// 0–100; computed from the application list, never parsed from
    /// model text.
    pub workload_score: u8,
}

/// `min(100, pending_percent + urgent_count * 10)` where `pending_percent`
/// is the share of pending applications in the list. Empty lists score 0.
pub fn calculate_workload_score(applications: &[Application]) -> u8 {
    if applications.is_empty() {
        return 0;
    }

    let total = applications.len() as u32;
    let pending = applications.iter().filter(|a| a.is_pending()).count() as u32;
    let urgent = applications.iter().filter(|a| a.urgent).count() as u32;

    let pending_percent = pending * 100 / total;
    (pending_percent + urgent * 10).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(status: ApplicationStatus, urgent: bool) -> Application {
        Application {
            id: "APP-1".to_string(),
            applicant: "A. Citizen".to_string(),
            scheme: "Old Age Pension".to_string(),
            status,
            urgent,
            days_pending: 4,
        }
    }

    #[test]
    fn test_workload_score_combines_pending_ratio_and_urgency() {
        // 10 total, 5 pending, 2 urgent -> 50 + 20 = 70
        let mut apps = Vec::new();
        for i in 0..10 {
            let status = if i < 5 {
                ApplicationStatus::Pending
            } else {
                ApplicationStatus::Approved
            };
            apps.push(app(status, i < 2));
        }
        assert_eq!(calculate_workload_score(&apps), 70);
    }

    #[test]
    fn test_workload_score_caps_at_hundred() {
        let apps: Vec<Application> =
            (0..12).map(|_| app(ApplicationStatus::Pending, true)).collect();
        assert_eq!(calculate_workload_score(&apps), 100);
    }

    #[test]
    fn test_workload_score_empty_list_is_zero() {
        assert_eq!(calculate_workload_score(&[]), 0);
    }

    #[test]
    fn test_status_from_str_falls_back_to_pending() {
        assert_eq!(ApplicationStatus::from_str("escalated"), ApplicationStatus::Pending);
        assert_eq!(ApplicationStatus::from_str("APPROVED"), ApplicationStatus::Approved);
    }
}
