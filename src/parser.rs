// src/parser.rs
//! Best-effort decode of the completion service's free-text output. The
//! model is told to answer in JSON only, but nothing enforces that, so the
//! failure mode is explicit rather than papered over.

use crate::error::AnalyzeError;
use crate::types::AnalysisResult;

/// Locate the candidate JSON object: first `{` through last `}`. This is a
/// heuristic, kept behind this one function so the matching strategy can be
/// swapped without touching callers.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse the model output into an [`AnalysisResult`]. Requires a top-level
/// `skills` array; malformed output is reported, never repaired.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, AnalyzeError> {
    let candidate = extract_json_object(raw)
        .ok_or_else(|| AnalyzeError::Parse("no JSON object found in model output".to_string()))?;

    let value: serde_json::Value = serde_json::from_str(candidate)
        .map_err(|e| AnalyzeError::Parse(format!("model output is not valid JSON: {}", e)))?;

    if !value.get("skills").map(|s| s.is_array()).unwrap_or(false) {
        return Err(AnalyzeError::Parse(
            "model output has no skills array".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| AnalyzeError::Parse(format!("unexpected skills shape: {}", e)))
}
