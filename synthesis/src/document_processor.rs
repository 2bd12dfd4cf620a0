use crate::error::AnalysisError;
use crate::models::{ExtractedText, UploadedDocument};
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};

pub const MIN_PAPERS: usize = 2;
pub const MAX_CHARS_PER_PAPER: usize = 8000;

pub struct DocumentProcessor;

impl DocumentProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_count(&self, documents: &[UploadedDocument]) -> Result<(), AnalysisError> {
        if documents.len() < MIN_PAPERS {
            return Err(AnalysisError::TooFewPapers {
                required: MIN_PAPERS,
                received: documents.len(),
            });
        }
        Ok(())
    }

    /// Extracts every document, keeping upload order. One bad file fails the batch.
    pub fn process_documents(
        &self,
        documents: &[UploadedDocument],
    ) -> Result<Vec<ExtractedText>, AnalysisError> {
        self.validate_count(documents)?;

        let extracted = documents
            .par_iter()
            .map(|doc| self.process_pdf(doc))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("Processed {} documents", extracted.len());
        Ok(extracted)
    }

    pub fn process_pdf(&self, document: &UploadedDocument) -> Result<ExtractedText, AnalysisError> {
        log::info!(
            "Processing PDF: {} ({} bytes)",
            document.filename,
            document.bytes.len()
        );

        let pages = extract_pages(&document.bytes).map_err(|reason| AnalysisError::Ingestion {
            filename: document.filename.clone(),
            reason,
        })?;

        let full_text = pages.concat();
        let text = truncate_chars(&full_text, MAX_CHARS_PER_PAPER);
        log::debug!(
            "{}: {} pages, kept {} of {} characters",
            document.filename,
            pages.len(),
            text.chars().count(),
            full_text.chars().count()
        );

        Ok(ExtractedText {
            filename: document.filename.clone(),
            text,
        })
    }

    pub fn combine(&self, extracts: &[ExtractedText]) -> String {
        let mut combined = String::new();
        for extract in extracts {
            combined.push_str(&format!(
                "--- Paper: {} ---\n{}\n\n",
                extract.filename, extract.text
            ));
        }
        combined
    }
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

// pdf_extract panics on some malformed input instead of returning an error.
fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, String> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));
    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(e.to_string()),
        Err(_) => Err("PDF parser panicked on malformed document".to_string()),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
