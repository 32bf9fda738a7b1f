//! Text extraction from uploaded PDF bytes via pdfium.
//!
//! pdfium is a blocking C library; callers on the async runtime should run
//! [`TextExtractor::extract`] inside `spawn_blocking`.

use crate::{Error, Result, config::PdfConfig};
use pdfium_render::prelude::*;
use std::path::PathBuf;
use tracing::debug;

#[cfg_attr(test, mockall::automock)]
pub trait TextExtractor: Send + Sync {
    /// Concatenates the text of every page in document order, with no separator.
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfiumExtractor {
    library_path: Option<PathBuf>,
}

impl PdfiumExtractor {
    pub fn new(config: &PdfConfig) -> Self {
        Self {
            library_path: config.library_path.as_ref().map(PathBuf::from),
        }
    }

    fn bind(&self) -> Result<Pdfium> {
        let bindings = match &self.library_path {
            Some(path) => Pdfium::bind_to_library(path),
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|e| Error::pdf(format!("Failed to load pdfium library: {:?}", e)))?;
        Ok(Pdfium::new(bindings))
    }
}

impl TextExtractor for PdfiumExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        if bytes.is_empty() {
            return Err(Error::pdf("Uploaded file is empty"));
        }

        let pdfium = self.bind()?;
        let document = pdfium
            .load_pdf_from_byte_slice(bytes, None)
            .map_err(|e| Error::pdf(format!("Could not open PDF: {:?}", e)))?;

        let pages = document.pages();
        debug!("PDF loaded: {} pages", pages.len());

        let mut text = String::new();
        for (idx, page) in pages.iter().enumerate() {
            match page.text() {
                Ok(page_text) => text.push_str(&page_text.all()),
                Err(e) => debug!("No extractable text on page {}: {:?}", idx + 1, e),
            }
        }

        Ok(text)
    }
}
