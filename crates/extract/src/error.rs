#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The extension is not one of pdf, docx, txt. Carries the offending
    /// extension (or the whole filename when there is none).
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Document is not valid UTF-8")]
    InvalidEncoding,

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX: {0}")]
    Docx(String),
}
