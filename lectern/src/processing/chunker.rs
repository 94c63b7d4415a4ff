use regex::Regex;
use std::sync::LazyLock;

use crate::config::ProcessingConfig;
use crate::processing::cleaner::clean_text;

pub const DEFAULT_MAX_CHUNK_SIZE: usize = 2000;

static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Splits text into sentence-aligned chunks for AI ingestion.
pub struct TextChunker {
    max_chunk_size: usize,
}

impl TextChunker {
    pub fn new(config: &ProcessingConfig) -> Self {
        Self::with_max_chunk_size(config.chunk_size)
    }

    pub fn with_max_chunk_size(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }

    pub fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    /// Greedily pack sentences into chunks of at most `max_chunk_size`
    /// characters. A sentence longer than the limit becomes its own chunk
    /// rather than being split.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for sentence in Self::split_into_sentences(text) {
            let sentence_len = sentence.chars().count();

            // The flushed chunk keeps the sentence's trailing '.', hence + 1.
            if current_len > 0 && current_len + sentence_len + 1 > self.max_chunk_size {
                Self::flush(&mut chunks, &mut current);
                current_len = 0;
            }

            current.push_str(sentence);
            current.push_str(". ");
            current_len += sentence_len + 2;
        }

        Self::flush(&mut chunks, &mut current);
        chunks
    }

    fn split_into_sentences(text: &str) -> impl Iterator<Item = &str> {
        SENTENCE_BOUNDARY
            .split(text)
            .filter(|sentence| !sentence.trim().is_empty())
    }

    fn flush(chunks: &mut Vec<String>, current: &mut String) {
        let trimmed = current.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }
        current.clear();
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::with_max_chunk_size(DEFAULT_MAX_CHUNK_SIZE)
    }
}

pub fn chunk_text(text: &str, max_chunk_size: usize) -> Vec<String> {
    TextChunker::with_max_chunk_size(max_chunk_size).chunk(text)
}

/// Clean then chunk, the sequence used before handing text to an embedder.
pub fn prepare_for_ingestion(text: &str, max_chunk_size: usize) -> Vec<String> {
    chunk_text(&clean_text(text), max_chunk_size)
}
