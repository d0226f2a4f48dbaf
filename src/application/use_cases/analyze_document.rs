use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{AnalysisParser, ChatClient, CompletionRequest};
use crate::domain::{AnalysisReport, ChatTurn, Language};

/// System prompt for document verification. The response format it asks
/// for is what the heuristic parser expects: a prose assessment, a
/// `Confidence: NN` line, and recommendation bullet points.
const SYSTEM_PROMPT: &str = "\
You are a document verification assistant for government service officers.
You review OCR text of citizen-submitted documents (income certificates,
caste certificates, residence proofs) for completeness and authenticity.

Respond with:
1. A short assessment of the document.
2. A line of the form `Confidence: NN` where NN is 0-100.
3. Bullet points starting with \"Recommend\" or \"Should\" for follow-up checks.
4. If anything looks inconsistent, state the risk plainly, using phrases
   like \"high risk\", \"verify\", or \"caution\" as appropriate.";

/// Low temperature keeps verification output close to deterministic.
const ANALYSIS_TEMPERATURE: f32 = 0.2;
const ANALYSIS_MAX_TOKENS: u32 = 1024;

/// Runs a document through the model and coerces the free-text answer
/// into an [`AnalysisReport`] via the configured parser.
///
/// Infallible by contract: a failed completion yields the fail-safe report
/// (risk HIGH, confidence 0, manual review) instead of an error.
pub struct AnalyzeDocumentUseCase {
    client: Arc<dyn ChatClient>,
    parser: Arc<dyn AnalysisParser>,
}

impl AnalyzeDocumentUseCase {
    pub fn new(client: Arc<dyn ChatClient>, parser: Arc<dyn AnalysisParser>) -> Self {
        Self { client, parser }
    }

    pub async fn execute(
        &self,
        document_type: &str,
        content: &str,
        language: Language,
    ) -> AnalysisReport {
        let mut prompt = format!(
            "Document type: {document_type}\n\nExtracted text:\n{content}"
        );
        if language != Language::English {
            prompt.push_str(&format!("\n\nWrite the assessment in {}.", language.name()));
        }

        let request = CompletionRequest::new(SYSTEM_PROMPT, vec![ChatTurn::user(prompt)])
            .with_temperature(ANALYSIS_TEMPERATURE)
            .with_max_tokens(ANALYSIS_MAX_TOKENS);

        match self.client.complete(&request).await {
            Ok(raw) => {
                debug!("Document analysis raw response: {raw}");
                let data = self.parser.parse(&raw);
                AnalysisReport::succeeded(data, self.client.model_name())
            }
            Err(e) => {
                warn!("Document analysis failed for '{document_type}': {e}");
                AnalysisReport::failed()
            }
        }
    }
}
