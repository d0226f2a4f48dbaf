use serde::Deserialize;
use tracing::warn;

use crate::application::AnalysisParser;
use crate::domain::services::{
    assess_risk_level, extract_confidence, extract_recommendations, MAX_RECOMMENDATIONS,
};
use crate::domain::{DocumentAnalysis, RiskLevel};

/// Fields the model is asked to emit when structured-output prompting is
/// in use. Every field is optional; absences fall back per field.
#[derive(Deserialize)]
struct RawAnalysis {
    analysis: Option<String>,
    confidence: Option<u32>,
    recommendations: Option<Vec<String>>,
    risk_level: Option<String>,
}

/// An [`AnalysisParser`] for models prompted to answer with a JSON object.
///
/// The first `{...}` block in the response is parsed; text around it is
/// ignored to tolerate minor formatting deviations. A missing field — or
/// an entirely unparseable response — falls back to the keyword
/// heuristics, so swapping this parser in never changes the contract.
pub struct JsonAnalysisParser;

impl JsonAnalysisParser {
    pub fn new() -> Self {
        Self
    }

    fn extract_object(text: &str) -> Option<RawAnalysis> {
        let start = text.find('{')?;
        let end = text.rfind('}')?;
        if end < start {
            return None;
        }
        serde_json::from_str(&text[start..=end]).ok()
    }

    fn risk_from_label(label: &str) -> Option<RiskLevel> {
        match label.trim().to_uppercase().as_str() {
            "LOW" => Some(RiskLevel::Low),
            "MEDIUM" => Some(RiskLevel::Medium),
            "HIGH" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

impl Default for JsonAnalysisParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisParser for JsonAnalysisParser {
    fn parse(&self, raw: &str) -> DocumentAnalysis {
        let Some(parsed) = Self::extract_object(raw) else {
            warn!("JsonAnalysisParser: no JSON object in response, using heuristics");
            return DocumentAnalysis {
                analysis: raw.trim().to_string(),
                confidence: extract_confidence(raw),
                recommendations: extract_recommendations(raw),
                risk_level: assess_risk_level(raw),
            };
        };

        let analysis = parsed
            .analysis
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| raw.trim().to_string());

        let confidence = parsed
            .confidence
            .map(|n| n.min(100) as u8)
            .unwrap_or_else(|| extract_confidence(raw));

        let recommendations = parsed
            .recommendations
            .map(|mut recs| {
                recs.retain(|r| !r.trim().is_empty());
                recs.truncate(MAX_RECOMMENDATIONS);
                recs
            })
            .filter(|recs| !recs.is_empty())
            .unwrap_or_else(|| extract_recommendations(raw));

        let risk_level = parsed
            .risk_level
            .as_deref()
            .and_then(Self::risk_from_label)
            .unwrap_or_else(|| assess_risk_level(raw));

        DocumentAnalysis {
            analysis,
            confidence,
            recommendations,
            risk_level,
        }
    }
}
