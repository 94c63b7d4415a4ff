use crate::models::{size_in_kb, DocumentFormat, ExtractionResult};

pub const PDF_DISABLED_NOTE: &str = "PDF text extraction is disabled";
pub const PDF_EXTRACTED_NOTE: &str = "Text extracted from PDF";

pub struct PdfExtractor;

impl PdfExtractor {
    /// PDF text is not extracted by default: the result is a placeholder
    /// naming the file, with `pages = 0` and a note saying so.
    ///
    /// With `text_extraction` enabled, `pdf-extract` is tried first and the
    /// placeholder is only used when it fails or finds no text.
    pub fn extract(bytes: &[u8], filename: &str, text_extraction: bool) -> ExtractionResult {
        if text_extraction {
            match Self::extract_pages(bytes) {
                Ok(pages) if !pages.is_empty() => {
                    let page_count = pages.len() as u32;
                    return ExtractionResult::new(pages.join("\n\n"), DocumentFormat::Pdf, filename)
                        .with_pages(page_count)
                        .with_note(PDF_EXTRACTED_NOTE);
                }
                Ok(_) => {
                    tracing::warn!(filename, "PDF contains no extractable text, using placeholder");
                }
                Err(e) => {
                    tracing::warn!(filename, error = %e, "PDF extraction failed, using placeholder");
                }
            }
        }

        Self::placeholder(bytes, filename)
    }

    pub fn placeholder(bytes: &[u8], filename: &str) -> ExtractionResult {
        let content = format!(
            "PDF Document: {filename}\nFile size: {} KB\n\nText extraction for PDF files is currently disabled. The file has been stored and is available for download.",
            size_in_kb(bytes)
        );

        ExtractionResult::new(content, DocumentFormat::Pdf, filename)
            .with_pages(0)
            .with_note(PDF_DISABLED_NOTE)
    }

    // pdf-extract separates pages with form feeds.
    fn extract_pages(bytes: &[u8]) -> std::result::Result<Vec<String>, String> {
        let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
            .map_err(|_| "PDF parser panicked".to_string())?
            .map_err(|e| e.to_string())?;

        Ok(text
            .split('\x0C')
            .map(str::trim)
            .filter(|page| !page.is_empty())
            .map(String::from)
            .collect())
    }
}
