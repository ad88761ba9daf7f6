use crate::domain::error::{AppError, Result};
use crate::domain::test_case::TestCase;
use once_cell::sync::Lazy;
use regex::Regex;

static CODE_FENCE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(?:json)?").unwrap());

// Reasoning models sometimes prepend their scratchpad. Only a leading block is
// removed so the tag can still appear inside string values.
static THINK_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:<think>[\s\S]*?</think>|<think\s*/>)").unwrap());

/// Removes Markdown code fences and reasoning blocks around the JSON payload.
pub(crate) fn strip_model_wrappers(output: &str) -> String {
    let without_think = THINK_TAG_PATTERN.replace(output, "");
    CODE_FENCE_PATTERN
        .replace_all(&without_think, "")
        .trim()
        .to_string()
}

/// Decodes the raw completion into test cases.
///
/// Errors keep the untouched completion text in `raw` so callers can show
/// exactly what the model returned.
pub(crate) fn parse_test_cases(raw: &str) -> Result<Vec<TestCase>> {
    let cleaned = strip_model_wrappers(raw);
    serde_json::from_str::<Vec<TestCase>>(&cleaned).map_err(|err| AppError::ParseError {
        detail: err.to_string(),
        raw: raw.to_string(),
    })
}
