//! Keyword and regex heuristics that coerce free-text model output into
//! structured fields.
//!
//! The model is prompted for prose, so every extractor here is best-effort:
//! a miss degrades to a documented default rather than an error.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::models::{DocumentAnalysis, RiskLevel, DEFAULT_CONFIDENCE};

/// Keywords that force a HIGH risk label. Checked before the MEDIUM set,
/// so "fraud" wins even when "verify" also appears.
const HIGH_RISK_KEYWORDS: [&str; 3] = ["high risk", "reject", "fraud"];

const MEDIUM_RISK_KEYWORDS: [&str; 3] = ["medium risk", "caution", "verify"];

const RECOMMENDATION_KEYWORDS: [&str; 3] = ["recommend", "suggest", "should"];

const PRIORITY_KEYWORDS: [&str; 4] = ["priority", "prioritize", "urgent", "immediately"];

const ACTION_KEYWORDS: [&str; 4] = ["action", "next step", "follow up", "schedule"];

pub const MAX_RECOMMENDATIONS: usize = 5;
pub const MAX_PRIORITIES: usize = 3;
pub const MAX_ACTION_ITEMS: usize = 5;

const DEFAULT_PRIORITIES: [&str; 3] = [
    "Clear the oldest pending applications first",
    "Handle urgent cases before routine renewals",
    "Review applications nearing the service deadline",
];

const DEFAULT_ACTION_ITEMS: [&str; 3] = [
    "Review pending applications in order of age",
    "Flag incomplete submissions for citizen follow-up",
    "Escalate cases pending beyond the service guarantee",
];

fn confidence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)confidence[^0-9]*(\d{1,3})").expect("confidence pattern is valid")
    })
}

/// First number following the word "confidence", clamped to 100.
/// Returns [`DEFAULT_CONFIDENCE`] when no such figure is present.
pub fn extract_confidence(text: &str) -> u8 {
    confidence_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map(|n| n.min(100) as u8)
        .unwrap_or(DEFAULT_CONFIDENCE)
}

/// Ordered priority match: HIGH keywords beat MEDIUM keywords beat the
/// LOW default. Not a scored classifier.
pub fn assess_risk_level(text: &str) -> RiskLevel {
    let haystack = text.to_lowercase();

    if HIGH_RISK_KEYWORDS.iter().any(|k| haystack.contains(k)) {
        RiskLevel::High
    } else if MEDIUM_RISK_KEYWORDS.iter().any(|k| haystack.contains(k)) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Lines containing a recommendation keyword, cleaned of list markers,
/// capped at [`MAX_RECOMMENDATIONS`]. Never empty.
pub fn extract_recommendations(text: &str) -> Vec<String> {
    let lines = matching_lines(text, &RECOMMENDATION_KEYWORDS, MAX_RECOMMENDATIONS);
    if lines.is_empty() {
        DocumentAnalysis::default_recommendations()
    } else {
        lines
    }
}

/// Lines containing a priority keyword, capped at [`MAX_PRIORITIES`].
/// Never empty.
pub fn extract_priorities(text: &str) -> Vec<String> {
    let lines = matching_lines(text, &PRIORITY_KEYWORDS, MAX_PRIORITIES);
    if lines.is_empty() {
        DEFAULT_PRIORITIES.iter().map(|s| s.to_string()).collect()
    } else {
        lines
    }
}

/// Lines containing an action keyword, capped at [`MAX_ACTION_ITEMS`].
/// Never empty.
pub fn extract_action_items(text: &str) -> Vec<String> {
    let lines = matching_lines(text, &ACTION_KEYWORDS, MAX_ACTION_ITEMS);
    if lines.is_empty() {
        DEFAULT_ACTION_ITEMS.iter().map(|s| s.to_string()).collect()
    } else {
        lines
    }
}

fn matching_lines(text: &str, keywords: &[&str], cap: usize) -> Vec<String> {
    text.lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            keywords.iter().any(|k| lower.contains(k))
        })
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .take(cap)
        .collect()
}

/// Removes leading bullet or enumeration markers: `- `, `* `, `• `,
/// `1.`, `2)` and surrounding whitespace.
fn strip_list_marker(line: &str) -> String {
    let trimmed = line.trim();
    let without_bullet = trimmed
        .trim_start_matches(['-', '*', '•'])
        .trim_start();

    let without_number = match without_bullet.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) if idx > 0 => {
            let rest = &without_bullet[idx..];
            if let Some(stripped) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
                stripped
            } else {
                without_bullet
            }
        }
        _ => without_bullet,
    };

    without_number.trim().to_string()
}
