//! Text extraction from uploaded résumé files.
//!
//! Dispatch is on the declared media type, not on sniffed content: a PDF is
//! opened as a paged document and its page texts concatenated, a plain-text
//! file is decoded as UTF-8, anything else is rejected before the pipeline
//! spends an API call on it.

use bytes::Bytes;
use thiserror::Error;

pub const MEDIA_TYPE_PDF: &str = "application/pdf";
pub const MEDIA_TYPE_TEXT: &str = "text/plain";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Could not read the PDF file: {0}")]
    Pdf(String),

    #[error("The uploaded file is not valid UTF-8 text")]
    Encoding,

    #[error("Unsupported file type '{0}' — upload a PDF or plain-text file")]
    UnsupportedType(String),
}

/// An uploaded document: declared media type plus raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub media_type: String,
    pub content: Bytes,
}

/// Returns the plain-text contents of an uploaded file.
///
/// Never panics on malformed input; the error is rendered inline on the
/// Input form and the submit halts before the API call.
pub fn extract_text(file: &UploadedFile) -> Result<String, ExtractError> {
    match file.media_type.as_str() {
        MEDIA_TYPE_PDF => pdf_extract::extract_text_from_mem(&file.content)
            .map_err(|e| ExtractError::Pdf(e.to_string())),
        MEDIA_TYPE_TEXT => std::str::from_utf8(&file.content)
            .map(str::to_owned)
            .map_err(|_| ExtractError::Encoding),
        other => Err(ExtractError::UnsupportedType(other.to_string())),
    }
}
