//! Input manager: stages uploads and routes them to the right extractor

use crate::error::Result;
use crate::input::file_detector::DocumentFormat;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use crate::processing::document::{ExtractedText, RawDocument};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;

pub struct InputManager {
    staging_dir: Option<PathBuf>,
}

impl InputManager {
    pub fn new() -> Self {
        Self { staging_dir: None }
    }

    /// Stage uploads under `dir` instead of the OS temp directory.
    pub fn with_staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = Some(dir.into());
        self
    }

    /// Extract the text of an uploaded document.
    ///
    /// The format is resolved before anything touches disk, so an unsupported upload is
    /// rejected without being staged. The staged copy is removed when this returns, on the
    /// error paths too.
    pub async fn extract(&self, document: &RawDocument) -> Result<ExtractedText> {
        let format = document.format()?;

        let staged = self.stage(document, format)?;
        debug!("Staged {} ({} bytes) at {}", document.filename, document.len(), staged.path().display());

        info!("Extracting text from {}: {}", format, document.filename);
        let text = Self::extract_staged(staged.path(), format).await?;
        info!("Extracted {} characters from {}", text.character_count(), document.filename);

        Ok(text)
    }

    async fn extract_staged(path: &Path, format: DocumentFormat) -> Result<ExtractedText> {
        let bytes = fs::read(path).await?;

        tokio::task::spawn_blocking(move || match format {
            DocumentFormat::Pdf => PdfExtractor.extract(&bytes),
            DocumentFormat::Docx => DocxExtractor.extract(&bytes),
        })
        .await?
    }

    fn stage(&self, document: &RawDocument, format: DocumentFormat) -> Result<NamedTempFile> {
        let suffix = format!(".{}", format.extension());
        let mut builder = tempfile::Builder::new();
        builder.prefix("resume-upload-").suffix(&suffix);

        let mut file = match &self.staging_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(&document.bytes)?;
        file.flush()?;

        Ok(file)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
