use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lectern::config::Config;
use lectern::processing::{clean_text, TextChunker};
use lectern::{ContentExtractor, ExtractionResult};

#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "Extract, clean and chunk text from course documents")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the extraction result as JSON
    Extract {
        file: PathBuf,
        /// Filename used for format detection (defaults to the file's name)
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the cleaned extracted text
    Clean {
        file: PathBuf,
        #[arg(long)]
        name: Option<String>,
    },
    /// Print the extracted text as a JSON array of chunks
    Chunk {
        file: PathBuf,
        #[arg(long)]
        name: Option<String>,
        /// Overrides CHUNK_SIZE
        #[arg(long)]
        max_chunk_size: Option<usize>,
        /// Skip cleaning before chunking
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env();
    let extractor = ContentExtractor::new(config.extraction.clone());

    match args.command {
        Command::Extract { file, name } => {
            let result = extract(&extractor, &file, name).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Clean { file, name } => {
            let result = extract(&extractor, &file, name).await?;
            println!("{}", clean_text(&result.content));
        }
        Command::Chunk {
            file,
            name,
            max_chunk_size,
            raw,
        } => {
            let result = extract(&extractor, &file, name).await?;
            let chunker = match max_chunk_size {
                Some(0) => anyhow::bail!("--max-chunk-size must be positive"),
                Some(size) => TextChunker::with_max_chunk_size(size),
                None => TextChunker::new(&config.processing),
            };
            let text = if raw {
                result.content
            } else {
                clean_text(&result.content)
            };
            let chunks = chunker.chunk(&text);
            tracing::info!(chunks = chunks.len(), max = chunker.max_chunk_size(), "Chunked text");
            println!("{}", serde_json::to_string_pretty(&chunks)?);
        }
    }

    Ok(())
}

async fn extract(
    extractor: &ContentExtractor,
    file: &Path,
    name: Option<String>,
) -> anyhow::Result<ExtractionResult> {
    let filename = match name {
        Some(name) => name,
        None => file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow::anyhow!("{} has no file name", file.display()))?,
    };

    let bytes = tokio::fs::read(file).await?;
    tracing::info!("Extracting {} ({} bytes)...", filename, bytes.len());

    let result = extractor.extract_async(bytes, filename).await?;
    if let Some(note) = &result.metadata.note {
        tracing::info!("{}", note);
    }
    Ok(result)
}

// Logs go to stderr so stdout stays machine readable.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "lectern=info".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
