mod chunker;
mod cleaner;
mod extractor;

pub mod extractors;

pub use chunker::{chunk_text, prepare_for_ingestion, TextChunker, DEFAULT_MAX_CHUNK_SIZE};
pub use cleaner::clean_text;
pub use extractor::{extract_text, ContentExtractor};
