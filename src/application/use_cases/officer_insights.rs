use std::sync::Arc;

use tracing::warn;

use crate::application::{ChatClient, CompletionRequest};
use crate::domain::services::{extract_action_items, extract_priorities};
use crate::domain::{
    calculate_workload_score, Application, ChatTurn, OfficerInsights, OfficerProfile,
};

const SYSTEM_PROMPT: &str = "\
You are an assistant for government service officers. Given an officer's
application queue, summarize the state of the queue and point out what
deserves attention.

Respond with:
1. A short narrative summary of the queue.
2. Lines marked \"Priority:\" for the most pressing cases.
3. Lines marked \"Action:\" for concrete next steps.";

const INSIGHTS_TEMPERATURE: f32 = 0.4;
const INSIGHTS_MAX_TOKENS: u32 = 1024;

/// Shown when the completion call fails; the deterministic workload score
/// is still computed and returned.
const FALLBACK_INSIGHTS: &str =
    "Queue insights are temporarily unavailable. Figures below are computed locally.";

/// Summarizes an officer's queue. The narrative, priorities, and action
/// items come from the model; `workload_score` is always computed from
/// the application list itself.
pub struct OfficerInsightsUseCase {
    client: Arc<dyn ChatClient>,
}

impl OfficerInsightsUseCase {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    pub async fn execute(
        &self,
        officer: &OfficerProfile,
        applications: &[Application],
    ) -> OfficerInsights {
        let workload_score = calculate_workload_score(applications);

        let prompt = format!(
            "Officer: {}, {} ({})\n\nApplication queue:\n{}",
            officer.name,
            officer.designation,
            officer.district,
            format_application_table(applications)
        );

        let request = CompletionRequest::new(SYSTEM_PROMPT, vec![ChatTurn::user(prompt)])
            .with_temperature(INSIGHTS_TEMPERATURE)
            .with_max_tokens(INSIGHTS_MAX_TOKENS);

        match self.client.complete(&request).await {
            Ok(raw) => OfficerInsights {
                insights: raw.trim().to_string(),
                priorities: extract_priorities(&raw),
                recommendations: extract_action_items(&raw),
                workload_score,
            },
            Err(e) => {
                warn!("Officer insights failed for {}: {e}", officer.name);
                OfficerInsights {
                    insights: FALLBACK_INSIGHTS.to_string(),
                    priorities: extract_priorities(""),
                    recommendations: extract_action_items(""),
                    workload_score,
                }
            }
        }
    }
}

/// Renders the queue as an aligned text table for the prompt.
fn format_application_table(applications: &[Application]) -> String {
    if applications.is_empty() {
        return "(no applications in queue)".to_string();
    }

    let mut table = String::from("ID | Applicant | Scheme | Status | Urgent | Days pending\n");
    for app in applications {
        table.push_str(&format!(
            "{} | {} | {} | {} | {} | {}\n",
            app.id,
            app.applicant,
            app.scheme,
            app.status.as_str(),
            if app.urgent { "yes" } else { "no" },
            app.days_pending
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApplicationStatus;

    #[test]
    fn test_table_has_header_and_one_row_per_application() {
        let apps = vec![Application {
            id: "APP-7".to_string(),
            applicant: "R. Devi".to_string(),
            scheme: "Widow Pension".to_string(),
            status: ApplicationStatus::Pending,
            urgent: true,
            days_pending: 12,
        }];
        let table = format_application_table(&apps);
        assert_eq!(table.lines().count(), 2);
        assert!(table.contains("APP-7"));
        assert!(table.contains("yes"));
    }

    #[test]
    fn test_empty_queue_renders_placeholder() {
        assert!(format_application_table(&[]).contains("no applications"));
    }
}
