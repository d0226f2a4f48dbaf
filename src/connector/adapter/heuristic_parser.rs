use crate::application::AnalysisParser;
use crate::domain::services::{assess_risk_level, extract_confidence, extract_recommendations};
use crate::domain::DocumentAnalysis;

/// The default [`AnalysisParser`]: keyword and regex heuristics over the
/// raw model response, mirroring what the response prompt asks for.
pub struct HeuristicAnalysisParser;

impl HeuristicAnalysisParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicAnalysisParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisParser for HeuristicAnalysisParser {
    fn parse(&self, raw: &str) -> DocumentAnalysis {
        DocumentAnalysis {
            analysis: raw.trim().to_string(),
            confidence: extract_confidence(raw),
            recommendations: extract_recommendations(raw),
            risk_level: assess_risk_level(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskLevel, DEFAULT_CONFIDENCE};

    #[test]
    fn test_parses_prompt_shaped_response() {
        let raw = "\
The income certificate looks consistent.
Confidence: 88
- Recommend verifying the issuing office seal.
- Should confirm the stated annual income.";

        let parser = HeuristicAnalysisParser::new();
        let analysis = parser.parse(raw);

        assert_eq!(analysis.confidence, 88);
        assert_eq!(analysis.recommendations.len(), 2);
        assert_eq!(analysis.risk_level, RiskLevel::Medium); // "verifying" hits the keyword
        assert!(analysis.analysis.contains("income certificate"));
    }

    #[test]
    fn test_degrades_to_defaults_on_freeform_text() {
        let parser = HeuristicAnalysisParser::new();
        let analysis = parser.parse("All fine.");

        assert_eq!(analysis.confidence, DEFAULT_CONFIDENCE);
        assert_eq!(analysis.risk_level, RiskLevel::Low);
        assert!(!analysis.recommendations.is_empty());
    }
}
