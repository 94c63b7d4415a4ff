use serde::{Deserialize, Serialize};

use super::DocumentFormat;

/// Plain text recovered from an uploaded file, plus descriptive metadata.
///
/// `content` is always present. A degraded extraction carries placeholder
/// text and explains itself through `metadata.note`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractionResult {
    pub content: String,
    pub metadata: ExtractionMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionMetadata {
    pub word_count: usize,
    pub file_type: String,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ExtractionResult {
    /// Build a result whose word count is derived from `content`.
    pub fn new(content: String, format: DocumentFormat, filename: &str) -> Self {
        let word_count = count_words(&content);
        Self {
            content,
            metadata: ExtractionMetadata {
                word_count,
                file_type: format.file_type().to_string(),
                filename: filename.to_string(),
                pages: None,
                slides: None,
                note: None,
            },
        }
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.metadata.pages = Some(pages);
        self
    }

    pub fn with_slides(mut self, slides: usize) -> Self {
        self.metadata.slides = Some(slides);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.metadata.note = Some(note.into());
        self
    }
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Size in whole kilobytes, rounded to nearest.
pub(crate) fn size_in_kb(bytes: &[u8]) -> u64 {
    (bytes.len() as u64 + 512) / 1024
}
