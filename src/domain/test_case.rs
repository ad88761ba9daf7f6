use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Separator used when flattening `steps` into a single CSV cell.
pub const STEP_SEPARATOR: &str = " - ";

/// One QA test case as returned by the model.
///
/// The four listed fields are required; a record missing any of them is
/// rejected while decoding the model output rather than when the CSV row is
/// built. `type` is kept exactly as the model wrote it, and any other keys
/// ride along in `extra` so the record serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(rename = "type")]
    pub case_type: String,
    pub name: String,
    pub steps: Vec<String>,
    pub expected_result: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TestCase {
    pub fn joined_steps(&self) -> String {
        self.steps.join(STEP_SEPARATOR)
    }
}
