//! PDF text extraction via `pdf_extract`.

use crate::error::ExtractError;

/// Extract the text of every page, concatenated in page order.
pub(crate) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
}
