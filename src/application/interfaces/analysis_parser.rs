use crate::domain::DocumentAnalysis;

/// Turns a raw model response into a [`DocumentAnalysis`].
///
/// This is the seam between "what the model said" and "what the portal
/// shows": the default implementation applies keyword heuristics, and a
/// structured-output parser can replace it without touching callers.
/// Parsing never fails — a field the parser cannot find degrades to its
/// documented default.
pub trait AnalysisParser: Send + Sync {
    fn parse(&self, raw: &str) -> DocumentAnalysis;
}
