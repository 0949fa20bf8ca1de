//! Document structures shared by the extraction pipeline

use crate::error::Result;
use crate::input::file_detector::DocumentFormat;
use serde::{Deserialize, Serialize};

/// An uploaded document as handed over by the caller.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl RawDocument {
    pub fn new(bytes: impl Into<Vec<u8>>, filename: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            filename: filename.into(),
        }
    }

    pub fn format(&self) -> Result<DocumentFormat> {
        DocumentFormat::from_filename(&self.filename)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Text lines in reading order, as produced once per document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    lines: Vec<String>,
}

impl ExtractedText {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(|line| line.trim_end_matches('\r').to_string()).collect(),
        }
    }

    /// Raw lines, blank ones included.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Trimmed, non-empty lines in document order.
    pub fn content_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
    }

    pub fn full_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn character_count(&self) -> usize {
        self.lines.iter().map(|line| line.chars().count()).sum()
    }

    pub fn is_blank(&self) -> bool {
        self.content_lines().next().is_none()
    }
}
