//! Spreadsheet export: all responses flattened into a single-sheet `.xlsx`
//! workbook built fully in memory.

use crate::db::Response;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

pub const SHEET_NAME: &str = "Users";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Column order is fixed; the header row is always written, so an empty
/// store yields a header-only sheet.
pub const COLUMNS: [&str; 6] = ["Name", "Hobby", "Education", "Interest", "Job", "Happiness"];

pub fn workbook_bytes(responses: &[Response]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, title) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (i, resp) in responses.iter().enumerate() {
        let row = (i + 1) as u32;
        let cells = [
            resp.name.as_deref(),
            resp.hobby.as_deref(),
            resp.education.as_deref(),
            resp.interest.as_deref(),
            resp.job.as_deref(),
        ];
        for (col, cell) in cells.iter().enumerate() {
            if let Some(text) = cell {
                sheet.write_string(row, col as u16, *text)?;
            }
        }
        if let Some(happiness) = resp.happiness {
            sheet.write_number(row, 5, happiness as f64)?;
        }
    }

    workbook.save_to_buffer()
}
