use serde::{Deserialize, Serialize};

use crate::error::{LecternError, Result};

/// File formats the extractor accepts, keyed by filename extension.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Doc,
    Docx,
    Xls,
    Xlsx,
    Ppt,
    Pptx,
}

impl DocumentFormat {
    /// Resolve the format from a filename's extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let extension = extension_of(filename)
            .ok_or_else(|| LecternError::UnsupportedFormat(filename.to_string()))?;

        extension.parse()
    }

    /// Lowercase extension without the dot.
    pub fn file_type(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Doc => "doc",
            Self::Docx => "docx",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
            Self::Ppt => "ppt",
            Self::Pptx => "pptx",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_type())
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = LecternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().trim_start_matches('.') {
            "pdf" => Ok(Self::Pdf),
            "doc" => Ok(Self::Doc),
            "docx" => Ok(Self::Docx),
            "xls" => Ok(Self::Xls),
            "xlsx" => Ok(Self::Xlsx),
            "ppt" => Ok(Self::Ppt),
            "pptx" => Ok(Self::Pptx),
            other => Err(LecternError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}

fn extension_of(filename: &str) -> Option<&str> {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let (stem, extension) = name.rsplit_once('.')?;
    if stem.is_empty() || extension.is_empty() {
        return None;
    }
    Some(extension)
}

/// Order in which slide entries of a presentation are emitted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SlideOrder {
    /// Sort by the numeric suffix of `ppt/slides/slideN.xml`.
    #[default]
    Numeric,
    /// Keep the archive's internal entry order.
    Archive,
}

impl std::fmt::Display for SlideOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Archive => write!(f, "archive"),
        }
    }
}

impl std::str::FromStr for SlideOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "numeric" => Ok(Self::Numeric),
            "archive" => Ok(Self::Archive),
            _ => Err(format!("Unknown slide order: {s}")),
        }
    }
}
