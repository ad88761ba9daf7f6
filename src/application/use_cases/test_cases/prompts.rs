pub(crate) const TEST_CASE_SYSTEM_PROMPT: &str = "You are a helpful QA engineer.";

pub(crate) fn build_test_case_user_prompt(requirement: &str) -> String {
    format!(
        r#"
You are a QA engineer. Generate test cases for the following requirement:
"{}"

Output a JSON array like this:
[
  {{
    "type": "positive|negative|regression",
    "name": "Test case name",
    "steps": ["Step 1", "Step 2"],
    "expected_result": "Expected result"
  }}
]

Use plain steps, short names, and include regression cases where appropriate.
"#,
        requirement
    )
}
