pub mod use_cases;

pub use use_cases::test_cases::{GeneratedTestCases, TestCaseUseCase, REQUIREMENT_REQUIRED};
