// ============================================================
// TEST CASE CSV WRITER
// ============================================================
// Spreadsheet-friendly export of generated test cases

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::domain::error::{AppError, Result};
use crate::domain::test_case::TestCase;

/// UTF-8 byte-order marker so spreadsheet tools detect the encoding.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Column titles, in output order
pub const CSV_HEADERS: [&str; 4] = ["Type", "Name", "Steps", "Expected Result"];

/// Writes `test_cases` to `path`, replacing whatever was there.
///
/// The file always starts with the BOM and the header row, even when there
/// are no test cases. Returns the number of data rows written.
pub fn write_test_cases(path: &Path, test_cases: &[TestCase]) -> Result<usize> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| AppError::IoError(format!("Failed to write CSV header: {}", e)))?;

    for (index, test_case) in test_cases.iter().enumerate() {
        let steps = test_case.joined_steps();
        writer
            .write_record([
                test_case.case_type.as_str(),
                test_case.name.as_str(),
                steps.as_str(),
                test_case.expected_result.as_str(),
            ])
            .map_err(|e| {
                AppError::IoError(format!("Failed to write CSV row {}: {}", index + 1, e))
            })?;
    }

    writer.flush()?;
    Ok(test_cases.len())
}
