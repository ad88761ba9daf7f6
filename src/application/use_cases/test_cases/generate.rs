use super::llm_output::parse_test_cases;
use super::prompts::{build_test_case_user_prompt, TEST_CASE_SYSTEM_PROMPT};
use super::{GeneratedTestCases, TestCaseUseCase, REQUIREMENT_REQUIRED};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::csv::write_test_cases;
use tracing::{info, warn};

impl TestCaseUseCase {
    /// Asks the model for test cases covering `requirement` and rewrites the
    /// CSV artifact with them.
    pub async fn generate_test_cases(&self, requirement: &str) -> Result<GeneratedTestCases> {
        if requirement.is_empty() {
            return Err(AppError::ValidationError(REQUIREMENT_REQUIRED.to_string()));
        }

        info!(
            requirement_len = requirement.len(),
            model = %self.llm_config.model,
            "Generating test cases"
        );

        let user_prompt = build_test_case_user_prompt(requirement);
        let raw_output = self
            .llm_client
            .generate(&self.llm_config, TEST_CASE_SYSTEM_PROMPT, &user_prompt)
            .await?;

        let test_cases = parse_test_cases(&raw_output).map_err(|err| {
            warn!(error = %err, raw_len = raw_output.len(), "Model output is not a test case array");
            err
        })?;

        let csv_path = self.csv_path.clone();
        let (written, test_cases) = tokio::task::spawn_blocking(move || {
            write_test_cases(&csv_path, &test_cases).map(|written| (written, test_cases))
        })
        .await
        .map_err(|e| AppError::Internal(format!("CSV writer task failed: {}", e)))??;

        info!(
            path = %self.csv_path.display(),
            rows = written,
            "Wrote test case CSV"
        );

        Ok(GeneratedTestCases {
            test_cases,
            csv_path: self.csv_path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm_config::LLMConfig;
    use crate::infrastructure::csv::UTF8_BOM;
    use crate::infrastructure::llm_clients::LLMClient;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    struct StubClient {
        reply: std::result::Result<String, String>,
        prompts: Mutex<Vec<(String, String)>>,
    }

    impl StubClient {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LLMClient for StubClient {
        async fn generate(&self, _config: &LLMConfig, system: &str, user: &str) -> Result<String> {
            self.prompts
                .lock()
                .unwrap()
                .push((system.to_string(), user.to_string()));
            self.reply.clone().map_err(AppError::LLMError)
        }
    }

    fn llm_config() -> LLMConfig {
        LLMConfig {
            base_url: "http://localhost".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: Some("sk-test".to_string()),
            max_tokens: None,
            temperature: Some(0.2),
        }
    }

    fn use_case(client: Arc<StubClient>, csv_path: &Path) -> TestCaseUseCase {
        TestCaseUseCase::new(client, llm_config(), csv_path.to_path_buf())
    }

    const FENCED_REPLY: &str = "```json\n[{\"type\":\"positive\",\"name\":\"Reset link\",\"steps\":[\"Open forgot password\",\"Submit email\"],\"expected_result\":\"Email sent\"}]\n```";

    #[tokio::test]
    async fn test_generate_writes_csv_and_returns_cases() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("testcases.csv");
        let client = StubClient::replying(FENCED_REPLY);

        let generated = use_case(client.clone(), &path)
            .generate_test_cases("Users can reset their password")
            .await
            .unwrap();

        assert_eq!(generated.csv_path, path);
        assert_eq!(generated.test_cases.len(), 1);
        assert_eq!(generated.test_cases[0].case_type, "positive");

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert!(text.starts_with("Type,Name,Steps,Expected Result\n"));
        assert!(text.contains("positive,Reset link,Open forgot password - Submit email,Email sent"));

        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts[0].0, TEST_CASE_SYSTEM_PROMPT);
        assert!(prompts[0].1.contains("Users can reset their password"));
    }

    #[tokio::test]
    async fn test_empty_requirement_skips_model() {
        let dir = tempfile::tempdir().unwrap();
        let client = StubClient::replying("[]");

        let result = use_case(client.clone(), &dir.path().join("testcases.csv"))
            .generate_test_cases("")
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_unparseable_output_leaves_csv_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("testcases.csv");
        std::fs::write(&path, b"previous").unwrap();
        let client = StubClient::replying("not json at all");

        let result = use_case(client, &path).generate_test_cases("anything").await;

        match result {
            Err(AppError::ParseError { raw, .. }) => assert_eq!(raw, "not json at all"),
            other => panic!("expected parse error, got {:?}", other),
        }
        assert_eq!(std::fs::read(&path).unwrap(), b"previous");
    }

    #[tokio::test]
    async fn test_model_failure_is_propagated() {
        let dir = tempfile::tempdir().unwrap();
        let client = StubClient::failing("connection refused");

        let result = use_case(client, &dir.path().join("testcases.csv"))
            .generate_test_cases("anything")
            .await;

        assert!(matches!(result, Err(AppError::LLMError(_))));
    }

    #[tokio::test]
    async fn test_write_failure_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("testcases.csv");
        let client = StubClient::replying("[]");

        let result = use_case(client, &path).generate_test_cases("anything").await;

        assert!(matches!(result, Err(AppError::IoError(_))));
    }
}
