use std::sync::Arc;

use tracing::{error, info};

use crate::application::TestCaseUseCase;
use crate::domain::error::Result;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::llm_clients::{LLMClient, OpenAIClient};
use crate::infrastructure::storage::resolve_artifact_path;
use crate::interfaces::http::HttpState;

pub fn setup(config: &AppConfig) -> Result<HttpState> {
    let csv_path = resolve_artifact_path(&config.csv_path).map_err(|err| {
        error!(
            error = %err,
            csv_path = %config.csv_path.display(),
            "Failed to prepare CSV output location"
        );
        err
    })?;

    info!(
        csv_path = %csv_path.display(),
        model = %config.model,
        base_url = %config.openai_base_url,
        "Configured test case generation"
    );

    let llm_client: Arc<dyn LLMClient + Send + Sync> = Arc::new(OpenAIClient::new());
    let test_case_use_case = TestCaseUseCase::new(llm_client, config.llm_config(), csv_path);

    Ok(HttpState { test_case_use_case })
}
