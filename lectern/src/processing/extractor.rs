use crate::config::ExtractionConfig;
use crate::error::{LecternError, Result};
use crate::models::{DocumentFormat, ExtractionResult};
use crate::processing::extractors::{DocxExtractor, PdfExtractor, PptxExtractor, XlsxExtractor};

/// Routes an uploaded file to the parser for its extension.
#[derive(Debug, Clone, Default)]
pub struct ContentExtractor {
    config: ExtractionConfig,
}

impl ContentExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract plain text and metadata from a fully read file.
    ///
    /// Fails only for unsupported extensions and for Word or Excel files the
    /// underlying library rejects. PDF and PowerPoint problems come back as
    /// placeholder content with an explanatory `metadata.note`.
    pub fn extract(&self, bytes: &[u8], filename: &str) -> Result<ExtractionResult> {
        let format = DocumentFormat::from_filename(filename)?;
        tracing::debug!(filename, %format, size = bytes.len(), "Dispatching extraction");

        match format {
            DocumentFormat::Pdf => Ok(PdfExtractor::extract(
                bytes,
                filename,
                self.config.pdf_text_extraction,
            )),
            DocumentFormat::Doc | DocumentFormat::Docx => {
                DocxExtractor::extract(bytes, format, filename)
            }
            DocumentFormat::Xls | DocumentFormat::Xlsx => {
                XlsxExtractor::extract(bytes, format, filename, self.config.excel_max_rows)
            }
            DocumentFormat::Ppt | DocumentFormat::Pptx => Ok(PptxExtractor::extract(
                bytes,
                format,
                filename,
                &self.config,
            )),
        }
    }

    /// Same as [`extract`](Self::extract), run on the blocking thread pool.
    pub async fn extract_async(&self, bytes: Vec<u8>, filename: String) -> Result<ExtractionResult> {
        let extractor = self.clone();
        tokio::task::spawn_blocking(move || extractor.extract(&bytes, &filename))
            .await
            .map_err(|e| LecternError::Internal(format!("Extraction task panicked: {e}")))?
    }
}

/// Extract with the default configuration.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<ExtractionResult> {
    ContentExtractor::default().extract(bytes, filename)
}
