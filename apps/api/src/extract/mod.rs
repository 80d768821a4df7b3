//! Text extraction from uploaded resume files.
//!
//! PDF goes through `pdf-extract`, Word (.docx) through the `docx` reader, plain text
//! is decoded as lossy UTF-8. Legacy binary `.doc` files are rejected.

pub mod docx;
pub mod handlers;

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("File is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Text,
    Docx,
}

impl DocumentFormat {
    /// Detects the format from the declared MIME type, then from the file extension.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Result<Self, ExtractError> {
        let mime = content_type
            .map(|c| c.split(';').next().unwrap_or(c).trim().to_lowercase())
            .unwrap_or_default();
        match mime.as_str() {
            "application/pdf" => return Ok(Self::Pdf),
            "text/plain" => return Ok(Self::Text),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                return Ok(Self::Docx)
            }
            _ => {}
        }

        let extension = file_name
            .and_then(|n| n.rsplit_once('.'))
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "txt" => Ok(Self::Text),
            "docx" => Ok(Self::Docx),
            _ => Err(ExtractError::UnsupportedFormat(
                file_name.or(content_type).unwrap_or("unknown").to_string(),
            )),
        }
    }
}

/// Extracts plain text from `bytes` of the given format.
pub fn extract(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    let text = match format {
        DocumentFormat::Text => String::from_utf8_lossy(bytes).into_owned(),
        DocumentFormat::Pdf => extract_pdf(bytes)?,
        DocumentFormat::Docx => docx::extract_docx(bytes)?,
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(ExtractError::ExtractionFailed(
            "no text found in the document".to_string(),
        ));
    }
    debug!(?format, chars = text.len(), "Extracted text");
    Ok(text)
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract panics on some malformed files instead of returning an error.
    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractError::ExtractionFailed(e.to_string())),
        Err(_) => Err(ExtractError::ExtractionFailed("malformed PDF".to_string())),
    }
}

/// Upload validator: size limit, format detection, extraction.
#[derive(Debug, Clone, Copy)]
pub struct UploadExtractor {
    pub max_bytes: usize,
}

impl UploadExtractor {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn extract(
        &self,
        bytes: &[u8],
        content_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<(String, DocumentFormat), ExtractError> {
        if bytes.len() > self.max_bytes {
            return Err(ExtractError::TooLarge {
                size: bytes.len(),
                limit: self.max_bytes,
            });
        }
        let format = DocumentFormat::detect(content_type, file_name)?;
        Ok((extract(bytes, format)?, format))
    }
}
