//! Document text extraction for the learning-center portal.
//!
//! [`extract_text`] turns an uploaded Word, Excel, PDF or PowerPoint buffer
//! into plain text plus metadata; [`clean_text`] and [`chunk_text`] prepare
//! that text for AI ingestion.

pub mod config;
pub mod error;
pub mod models;
pub mod processing;

pub use error::{LecternError, Result};
pub use models::{DocumentFormat, ExtractionMetadata, ExtractionResult, SlideOrder};
pub use processing::{chunk_text, clean_text, extract_text, prepare_for_ingestion, ContentExtractor};
