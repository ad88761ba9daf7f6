// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Export of generated test cases to a delimited file

mod test_case_writer;

pub use test_case_writer::{write_test_cases, CSV_HEADERS, UTF8_BOM};
