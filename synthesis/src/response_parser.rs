use crate::error::AnalysisError;
use crate::models::AnalysisReport;
use regex::Regex;
use std::sync::OnceLock;

fn json_object_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Greedy: first '{' through the last '}' in the whole response.
    PATTERN.get_or_init(|| Regex::new(r"\{[\s\S]*\}").expect("static regex is valid"))
}

/// Best-effort recovery of the JSON object a model wrapped in prose or code
/// fences. The shape of the object is not checked.
pub fn clean_and_parse_json(response_text: &str) -> Result<AnalysisReport, AnalysisError> {
    let candidate = json_object_pattern()
        .find(response_text)
        .ok_or_else(|| AnalysisError::NoJsonFound {
            raw: response_text.to_string(),
        })?;

    serde_json::from_str::<AnalysisReport>(candidate.as_str().trim()).map_err(|source| {
        AnalysisError::InvalidJson {
            raw: response_text.to_string(),
            source,
        }
    })
}
