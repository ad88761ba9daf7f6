pub mod test_cases;
