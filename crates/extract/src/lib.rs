//! Document text extraction.
//!
//! Turns uploaded contract bytes into plain text. The format is decided by
//! the upload's file extension, never by sniffing content.

mod docx;
mod error;
mod pdf;

pub use error::ExtractError;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Detect the format from a filename's extension, case-insensitive.
    pub fn from_filename(name: &str) -> Result<Self, ExtractError> {
        let ext = std::path::Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| ExtractError::UnsupportedFormat(name.to_string()))?;

        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" => Ok(DocumentFormat::Txt),
            _ => Err(ExtractError::UnsupportedFormat(ext)),
        }
    }

    /// Canonical (lower-case) extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Txt => "txt",
        }
    }
}

/// Extract plain text from a document's raw bytes.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Pdf => pdf::extract(bytes),
        DocumentFormat::Docx => docx::extract(bytes),
        DocumentFormat::Txt => {
            String::from_utf8(bytes.to_vec()).map_err(|_| ExtractError::InvalidEncoding)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn detects_formats_case_insensitively() {
        assert_eq!(
            DocumentFormat::from_filename("contract.PDF").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_filename("contract.docx").unwrap(),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_filename("notes.Txt").unwrap(),
            DocumentFormat::Txt
        );
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert_matches!(
            DocumentFormat::from_filename("contract.exe"),
            Err(ExtractError::UnsupportedFormat(ext)) if ext == "exe"
        );
    }

    #[test]
    fn rejects_missing_extension() {
        assert_matches!(
            DocumentFormat::from_filename("contract"),
            Err(ExtractError::UnsupportedFormat(_))
        );
    }

    #[test]
    fn txt_passes_through_utf8() {
        let text = extract_text("1. The parties agree.".as_bytes(), DocumentFormat::Txt).unwrap();
        assert_eq!(text, "1. The parties agree.");
    }

    #[test]
    fn txt_rejects_invalid_utf8() {
        assert_matches!(
            extract_text(&[0xff, 0xfe, 0x00], DocumentFormat::Txt),
            Err(ExtractError::InvalidEncoding)
        );
    }
}
