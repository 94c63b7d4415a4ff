use serde::Deserialize;
use std::env;

use crate::models::SlideOrder;
use crate::processing::DEFAULT_MAX_CHUNK_SIZE;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub processing: ProcessingConfig,
}

/// Knobs for the format parsers.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    pub slide_order: SlideOrder,
    /// Try real PDF text extraction before falling back to the placeholder.
    pub pdf_text_extraction: bool,
    pub include_speaker_notes: bool,
    pub excel_max_rows: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessingConfig {
    pub chunk_size: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            slide_order: SlideOrder::Numeric,
            pdf_text_extraction: false,
            include_speaker_notes: false,
            excel_max_rows: 100_000,
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}

impl ExtractionConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            slide_order: parse_env_or("SLIDE_ORDER", defaults.slide_order),
            pdf_text_extraction: parse_env_or("PDF_TEXT_EXTRACTION", defaults.pdf_text_extraction),
            include_speaker_notes: parse_env_or(
                "INCLUDE_SPEAKER_NOTES",
                defaults.include_speaker_notes,
            ),
            excel_max_rows: parse_env_or("EXCEL_MAX_ROWS", defaults.excel_max_rows),
        }
    }
}

impl ProcessingConfig {
    pub fn from_env() -> Self {
        let chunk_size = parse_env_or("CHUNK_SIZE", DEFAULT_MAX_CHUNK_SIZE);
        if chunk_size == 0 {
            tracing::warn!("CHUNK_SIZE must be positive. Using default.");
            return Self::default();
        }
        Self { chunk_size }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            extraction: ExtractionConfig::from_env(),
            processing: ProcessingConfig::from_env(),
        }
    }
}
