pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    AnalysisParser, AnalyzeDocumentUseCase, AssistantChatUseCase, ChatClient, CitizenQueryUseCase,
    CompletionRequest, OfficerInsightsUseCase, SchemeRecommendationsUseCase, TranslateTextUseCase,
    TranslationCache,
};

pub use connector::{
    HeuristicAnalysisParser, InMemoryTranslationCache, JsonAnalysisParser,
    JsonFileTranslationCache, MockChatClient, OpenAiChatClient, RetryPolicy,
    DEFAULT_CACHE_CAPACITY,
};

pub use domain::{
    calculate_workload_score, AnalysisReport, Application, ApplicationStatus, ChatRole,
    ChatSession, ChatTurn, CitizenProfile, DocumentAnalysis, DomainError, Language,
    OfficerInsights, OfficerProfile, RiskLevel, TranslationKey,
};
