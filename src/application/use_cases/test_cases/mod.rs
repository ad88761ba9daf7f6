mod generate;
mod llm_output;
mod prompts;

use crate::domain::llm_config::LLMConfig;
use crate::domain::test_case::TestCase;
use crate::infrastructure::llm_clients::LLMClient;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const REQUIREMENT_REQUIRED: &str = "Requirement is required";

/// Result of one generation: the decoded cases and where the CSV was written.
#[derive(Debug, Clone)]
pub struct GeneratedTestCases {
    pub test_cases: Vec<TestCase>,
    pub csv_path: PathBuf,
}

pub struct TestCaseUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
    llm_config: LLMConfig,
    csv_path: PathBuf,
}

impl TestCaseUseCase {
    pub fn new(
        llm_client: Arc<dyn LLMClient + Send + Sync>,
        llm_config: LLMConfig,
        csv_path: PathBuf,
    ) -> Self {
        Self {
            llm_client,
            llm_config,
            csv_path,
        }
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}
