use crate::error::{LecternError, Result};
use crate::models::{DocumentFormat, ExtractionResult};

pub struct DocxExtractor;

impl DocxExtractor {
    /// Raw text of a Word document, one paragraph per block.
    ///
    /// Any failure inside the document reader is a hard error: there is no
    /// useful placeholder for a Word file the library cannot open.
    pub fn extract(bytes: &[u8], format: DocumentFormat, filename: &str) -> Result<ExtractionResult> {
        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| LecternError::extraction(format.file_type(), e))?;

        let mut paragraphs: Vec<String> = Vec::new();

        for child in &docx.document.children {
            match child {
                docx_rs::DocumentChild::Paragraph(paragraph) => {
                    Self::push_non_empty(&mut paragraphs, Self::paragraph_text(paragraph));
                }
                docx_rs::DocumentChild::Table(table) => {
                    for cell_text in Self::table_paragraphs(table) {
                        Self::push_non_empty(&mut paragraphs, cell_text);
                    }
                }
                _ => {}
            }
        }

        tracing::debug!(filename, paragraphs = paragraphs.len(), "Extracted Word document");

        Ok(ExtractionResult::new(paragraphs.join("\n\n"), format, filename))
    }

    fn push_non_empty(paragraphs: &mut Vec<String>, text: String) {
        if !text.trim().is_empty() {
            paragraphs.push(text);
        }
    }

    fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
        let mut content = String::new();
        for para_child in &paragraph.children {
            if let docx_rs::ParagraphChild::Run(run) = para_child {
                for run_child in &run.children {
                    match run_child {
                        docx_rs::RunChild::Text(text) => content.push_str(&text.text),
                        docx_rs::RunChild::Tab(_) => content.push('\t'),
                        docx_rs::RunChild::Break(_) => content.push('\n'),
                        _ => {}
                    }
                }
            }
        }
        content
    }

    // Cells are flattened to paragraphs in row order.
    fn table_paragraphs(table: &docx_rs::Table) -> Vec<String> {
        let mut cells = Vec::new();

        for table_child in &table.rows {
            let docx_rs::TableChild::TableRow(row) = table_child;
            for row_child in &row.cells {
                let docx_rs::TableRowChild::TableCell(cell) = row_child;
                for cell_child in &cell.children {
                    if let docx_rs::TableCellContent::Paragraph(para) = cell_child {
                        cells.push(Self::paragraph_text(para));
                    }
                }
            }
        }

        cells
    }
}
