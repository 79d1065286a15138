//! Extractive summary: the opening sentences of the contract.

/// Number of leading `'.'`-separated segments included in the summary.
const SUMMARY_SEGMENTS: usize = 5;

/// Character cap, beyond which the summary is truncated with an ellipsis.
const SUMMARY_MAX_CHARS: usize = 500;

/// Join the first few sentence segments into a short summary.
///
/// Splitting consumes the periods, so segments are rejoined with single
/// spaces. Truncation counts chars, not bytes, to stay boundary safe.
pub fn summarize(text: &str) -> String {
    let summary = text
        .split('.')
        .take(SUMMARY_SEGMENTS)
        .collect::<Vec<_>>()
        .join(" ");

    if summary.chars().count() > SUMMARY_MAX_CHARS {
        let head: String = summary.chars().take(SUMMARY_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        summary
    }
}
