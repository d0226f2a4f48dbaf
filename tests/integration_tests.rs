//! Integration tests for the AI assistance use cases.
//!
//! Everything runs against the mock chat client; its call counter is how
//! we observe whether a path hit the "network".

use std::sync::Arc;

use sevamitra::{
    AnalyzeDocumentUseCase, Application, ApplicationStatus, AssistantChatUseCase, ChatSession,
    CitizenQueryUseCase, HeuristicAnalysisParser, InMemoryTranslationCache, Language,
    MockChatClient, OfficerInsightsUseCase, OfficerProfile, RiskLevel, TranslateTextUseCase,
};

fn sample_queue() -> Vec<Application> {
    (0u32..10)
        .map(|i| Application {
            id: format!("APP-{i}"),
            applicant: format!("Applicant {i}"),
            scheme: "Old Age Pension".to_string(),
            status: if i < 5 {
                ApplicationStatus::Pending
            } else {
                ApplicationStatus::Approved
            },
            urgent: i < 2,
            days_pending: i,
        })
        .collect()
}

#[tokio::test]
async fn translation_is_cached_after_first_call() {
    let client = Arc::new(MockChatClient::new().with_response("விண்ணப்ப நிலை"));
    let cache = Arc::new(InMemoryTranslationCache::new());
    let use_case = TranslateTextUseCase::new(client.clone(), cache);

    let first = use_case.translate("Application status", Language::Tamil).await;
    let second = use_case.translate("Application status", Language::Tamil).await;

    assert_eq!(first, "விண்ணப்ப நிலை");
    assert_eq!(second, first);
    assert_eq!(client.call_count(), 1, "second call must not hit the network");
}

#[tokio::test]
async fn texts_sharing_the_key_prefix_share_a_cache_entry() {
    let client = Arc::new(MockChatClient::new().with_response("übersetzt"));
    let cache = Arc::new(InMemoryTranslationCache::new());
    let use_case = TranslateTextUseCase::new(client.clone(), cache);

    let prefix = "a".repeat(100);
    let long_a = format!("{prefix} tail one");
    let long_b = format!("{prefix} tail two");

    use_case.translate(&long_a, Language::German).await;
    let second = use_case.translate(&long_b, Language::German).await;

    assert_eq!(second, "übersetzt");
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn failed_translation_returns_original_text() {
    let client = Arc::new(MockChatClient::failing());
    let cache = Arc::new(InMemoryTranslationCache::new());
    let use_case = TranslateTextUseCase::new(client, cache.clone());

    let result = use_case.translate("Pension scheme details", Language::Hindi).await;

    assert_eq!(result, "Pension scheme details");
    // A failure must not poison the cache.
    use sevamitra::TranslationCache;
    assert_eq!(cache.len().await.unwrap(), 0);
}

#[tokio::test]
async fn empty_and_english_inputs_skip_the_network() {
    let client = Arc::new(MockChatClient::new());
    let cache = Arc::new(InMemoryTranslationCache::new());
    let use_case = TranslateTextUseCase::new(client.clone(), cache);

    assert_eq!(use_case.translate("   ", Language::Tamil).await, "   ");
    assert_eq!(use_case.translate("hello", Language::English).await, "hello");
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn translate_many_preserves_input_order() {
    let client = Arc::new(
        MockChatClient::new().with_responses(vec!["un".to_string(), "deux".to_string()]),
    );
    let cache = Arc::new(InMemoryTranslationCache::new());
    let use_case = TranslateTextUseCase::new(client, cache);

    let texts = vec!["one".to_string(), "two".to_string()];
    let results = use_case.translate_many(&texts, Language::French).await;

    assert_eq!(results, vec!["un", "deux"]);
}

#[tokio::test]
async fn document_analysis_parses_prompt_shaped_response() {
    let raw = "\
The certificate appears genuine.
Confidence: 92
- Recommend archiving a copy.
- Should confirm the issue date.";
    let client = Arc::new(MockChatClient::new().with_response(raw));
    let use_case = AnalyzeDocumentUseCase::new(client, Arc::new(HeuristicAnalysisParser::new()));

    let report = use_case
        .execute("Income Certificate", "Name: A. Citizen\nIncome: 120000", Language::English)
        .await;

    assert!(report.success);
    assert_eq!(report.model, "mock-chat");
    assert_eq!(report.data.confidence, 92);
    assert_eq!(report.data.risk_level, RiskLevel::Low);
    assert_eq!(report.data.recommendations.len(), 2);
}

#[tokio::test]
async fn document_analysis_fails_safe_on_client_error() {
    let client = Arc::new(MockChatClient::failing());
    let use_case = AnalyzeDocumentUseCase::new(client, Arc::new(HeuristicAnalysisParser::new()));

    let report = use_case
        .execute("Income Certificate", "<ocr text>", Language::English)
        .await;

    assert!(!report.success);
    assert_eq!(report.model, "error");
    assert_eq!(report.data.confidence, 0);
    assert_eq!(report.data.risk_level, RiskLevel::High);
    assert_eq!(report.data.recommendations, vec!["Manual review required"]);
    assert!(report.data.analysis.starts_with("Analysis failed"));
}

#[tokio::test]
async fn officer_insights_computes_workload_locally_even_on_failure() {
    let officer = OfficerProfile {
        name: "S. Kumar".to_string(),
        designation: "Revenue Inspector".to_string(),
        district: "Madurai".to_string(),
    };

    let failing = Arc::new(MockChatClient::failing());
    let use_case = OfficerInsightsUseCase::new(failing);
    let insights = use_case.execute(&officer, &sample_queue()).await;

    // 5/10 pending -> 50, plus 2 urgent -> 70
    assert_eq!(insights.workload_score, 70);
    assert!(!insights.priorities.is_empty());
    assert!(insights.priorities.len() <= 3);
    assert!(!insights.recommendations.is_empty());
    assert!(insights.recommendations.len() <= 5);
}

#[tokio::test]
async fn officer_insights_extracts_priorities_and_actions() {
    let raw = "\
The queue is manageable.
Priority: clear the two urgent pension cases today.
Action: schedule field verification for APP-3.
Action: follow up on the stalled caste certificate.";
    let client = Arc::new(MockChatClient::new().with_response(raw));
    let officer = OfficerProfile {
        name: "S. Kumar".to_string(),
        designation: "Revenue Inspector".to_string(),
        district: "Madurai".to_string(),
    };

    let insights = OfficerInsightsUseCase::new(client).execute(&officer, &sample_queue()).await;

    assert!(insights.insights.contains("manageable"));
    assert_eq!(insights.priorities.len(), 1);
    assert_eq!(insights.recommendations.len(), 2);
    assert_eq!(insights.workload_score, 70);
}

#[tokio::test]
async fn citizen_query_falls_back_to_apology() {
    let client = Arc::new(MockChatClient::failing());
    let answer = CitizenQueryUseCase::new(client)
        .execute("How do I apply for a ration card?", "", Language::English)
        .await;

    assert!(answer.contains("try again"));
}

#[tokio::test]
async fn assistant_chat_records_both_sides_of_the_exchange() {
    let client = Arc::new(MockChatClient::new().with_response("You can track it online."));
    let use_case = AssistantChatUseCase::new(client);
    let mut session = ChatSession::new();

    let reply = use_case
        .send(&mut session, "Where is my application?", "", Language::English)
        .await;

    assert_eq!(reply, "You can track it online.");
    assert_eq!(session.len(), 2);
    assert_eq!(session.turns()[0].content, "Where is my application?");
    assert_eq!(session.turns()[1].content, "You can track it online.");
}

#[tokio::test]
async fn assistant_chat_appends_fallback_reply_on_failure() {
    let client = Arc::new(MockChatClient::failing());
    let use_case = AssistantChatUseCase::new(client);
    let mut session = ChatSession::new();

    let reply = use_case
        .send(&mut session, "hello?", "", Language::English)
        .await;

    assert!(reply.contains("Sorry"));
    assert_eq!(session.len(), 2);
}
