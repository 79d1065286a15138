//! Document language detection.

/// Returned when the detector cannot settle on a language.
pub const LANG_UNKNOWN: &str = "unknown";

/// Detect the dominant language of `text`.
///
/// Returns the ISO 639-3 code of the detected language (e.g. `"eng"`), or
/// [`LANG_UNKNOWN`] when the text is empty or too ambiguous to classify.
pub fn detect_language(text: &str) -> String {
    match whatlang::detect(text) {
        Some(info) => info.lang().code().to_string(),
        None => LANG_UNKNOWN.to_string(),
    }
}
