use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;

use crate::error::{LecternError, Result};
use crate::models::{DocumentFormat, ExtractionResult};

pub struct XlsxExtractor;

impl XlsxExtractor {
    /// Every sheet rendered as CSV under a `--- <sheet name> ---` header, in
    /// workbook order.
    pub fn extract(
        bytes: &[u8],
        format: DocumentFormat,
        filename: &str,
        max_rows: usize,
    ) -> Result<ExtractionResult> {
        let cursor = Cursor::new(bytes);
        let mut workbook = open_workbook_auto_from_rs(cursor)
            .map_err(|e| LecternError::extraction(format.file_type(), e))?;

        let mut text = String::new();
        let sheet_names = workbook.sheet_names();
        let sheet_count = sheet_names.len();

        // A sheet that fails to parse fails the whole workbook.
        for name in sheet_names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| LecternError::extraction(format.file_type(), e))?;
            let csv = Self::sheet_to_csv(&range, max_rows)
                .map_err(|e| LecternError::extraction(format.file_type(), e))?;

            text.push_str(&format!("--- {name} ---\n{csv}\n\n"));

            let rows = range.height();
            if rows > max_rows {
                tracing::warn!(filename, sheet = %name, rows, max_rows, "Sheet truncated");
                text.push_str(&format!("... truncated (showing {max_rows} of {rows} rows)\n\n"));
            }
        }

        tracing::debug!(filename, sheets = sheet_count, "Extracted workbook");

        let content = text.trim().to_string();
        Ok(ExtractionResult::new(content, format, filename))
    }

    fn sheet_to_csv(range: &Range<Data>, max_rows: usize) -> std::result::Result<String, String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .flexible(true)
            .from_writer(Vec::new());

        for row in range.rows().take(max_rows) {
            let record: Vec<String> = row.iter().map(Self::format_cell_value).collect();
            writer.write_record(&record).map_err(|e| e.to_string())?;
        }

        let bytes = writer.into_inner().map_err(|e| e.to_string())?;
        let csv = String::from_utf8(bytes).map_err(|e| e.to_string())?;
        Ok(csv.trim_end_matches('\n').to_string())
    }

    fn format_cell_value(cell: &Data) -> String {
        match cell {
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => {
                let s = format!("{f}");
                if s.contains('.') {
                    s.trim_end_matches('0').trim_end_matches('.').to_string()
                } else {
                    s
                }
            }
            Data::Bool(b) => b.to_string(),
            Data::DateTime(dt) => dt.to_string(),
            Data::DateTimeIso(dt) => dt.to_string(),
            Data::DurationIso(d) => d.to_string(),
            Data::Empty | Data::Error(_) => String::new(),
            #[allow(unreachable_patterns)]
            _ => String::new(),
        }
    }
}
