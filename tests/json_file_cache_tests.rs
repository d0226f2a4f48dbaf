use std::sync::Arc;

use tempfile::tempdir;

use sevamitra::{
    JsonFileTranslationCache, Language, MockChatClient, TranslateTextUseCase, TranslationCache,
    TranslationKey,
};

#[tokio::test]
async fn translations_survive_a_process_restart() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("translations.json");

    // First "process": translate once, populating the file.
    {
        let client = Arc::new(MockChatClient::new().with_response("est. 1987"));
        let cache = Arc::new(JsonFileTranslationCache::open(&path, 64).expect("open cache"));
        let use_case = TranslateTextUseCase::new(client, cache);
        use_case.translate("since 1987", Language::French).await;
    }

    // Second "process": the cached value is served with zero API calls.
    let client = Arc::new(MockChatClient::failing());
    let cache = Arc::new(JsonFileTranslationCache::open(&path, 64).expect("reopen cache"));
    let use_case = TranslateTextUseCase::new(client.clone(), cache);

    let result = use_case.translate("since 1987", Language::French).await;

    assert_eq!(result, "est. 1987");
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn capacity_bound_holds_through_the_use_case() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("translations.json");

    let responses: Vec<String> = (0..5).map(|i| format!("translated {i}")).collect();
    let client = Arc::new(MockChatClient::new().with_responses(responses));
    let cache = Arc::new(JsonFileTranslationCache::open(&path, 3).expect("open cache"));
    let use_case = TranslateTextUseCase::new(client, cache.clone());

    for i in 0..5 {
        use_case.translate(&format!("text {i}"), Language::Telugu).await;
    }

    assert_eq!(cache.len().await.unwrap(), 3);
    let oldest = TranslationKey::new(Language::Telugu, "text 0");
    assert_eq!(cache.get(&oldest).await.unwrap(), None);
    let newest = TranslationKey::new(Language::Telugu, "text 4");
    assert_eq!(cache.get(&newest).await.unwrap(), Some("translated 4".to_string()));
}

#[tokio::test]
async fn clearing_the_cache_forces_retranslation() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("translations.json");

    let client = Arc::new(
        MockChatClient::new().with_responses(vec!["first".to_string(), "second".to_string()]),
    );
    let cache = Arc::new(JsonFileTranslationCache::open(&path, 16).expect("open cache"));
    let use_case = TranslateTextUseCase::new(client.clone(), cache.clone());

    use_case.translate("welcome", Language::Hindi).await;
    cache.clear().await.unwrap();
    let after_clear = use_case.translate("welcome", Language::Hindi).await;

    assert_eq!(after_clear, "second");
    assert_eq!(client.call_count(), 2);
}
