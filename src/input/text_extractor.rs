//! Text extraction from PDF and Word documents

use crate::error::{Result, ResumeMatcherError};
use crate::processing::document::ExtractedText;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use log::{debug, warn};
use lopdf::Document;
use std::panic::{self, AssertUnwindSafe};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText>;
}

/// Page-by-page PDF extraction with a plain-text fallback for files whose
/// structure cannot be parsed at all.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText> {
        // The default panic hook still prints recovered lopdf panics to stderr.
        let document = match panic::catch_unwind(|| Document::load_mem(bytes)) {
            Ok(Ok(document)) => document,
            Ok(Err(e)) => {
                warn!("PDF reading error: {}, falling back to plain text", e);
                return Ok(ExtractedText::from_text(&Self::decode_plain_text(bytes)));
            }
            Err(_) => {
                warn!("PDF parser panicked, falling back to plain text");
                return Ok(ExtractedText::from_text(&Self::decode_plain_text(bytes)));
            }
        };

        let pages = document.get_pages();
        debug!("PDF has {} pages", pages.len());

        let mut text = String::new();
        for page_number in pages.keys() {
            let page_text = Self::extract_page(&document, *page_number);
            debug!("Page {} extracted {} characters", page_number, page_text.chars().count());
            text.push_str(&page_text);
            text.push('\n');
        }

        Ok(ExtractedText::from_text(&text))
    }
}

impl PdfExtractor {
    /// A failing page contributes nothing; the rest of the document is kept.
    /// A caught panic is still reported on stderr by the panic hook.
    fn extract_page(document: &Document, page_number: u32) -> String {
        match panic::catch_unwind(AssertUnwindSafe(|| document.extract_text(&[page_number]))) {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Error extracting page {}: {}", page_number, e);
                String::new()
            }
            Err(_) => {
                warn!("Extraction of page {} panicked", page_number);
                String::new()
            }
        }
    }

    fn decode_plain_text(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes)
            .chars()
            .filter(|c| *c != char::REPLACEMENT_CHARACTER)
            .collect()
    }
}

/// Paragraph-per-line extraction from Office Open XML documents.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| {
            ResumeMatcherError::ExtractionFailure(format!("Failed to read DOCX document: {}", e))
        })?;

        // Tables are skipped, only top-level paragraphs are read.
        let lines: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        debug!("DOCX has {} paragraphs", lines.len());
        Ok(ExtractedText::from_lines(lines))
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    _ => {}
                }
            }
        }
    }
    text
}
