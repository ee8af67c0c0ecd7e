//! Plain-text extraction backend.

use super::ExtractError;

/// Decode plain-text bytes as a single page.
///
/// Decoding is strict: invalid UTF-8 rejects the upload rather than
/// silently dropping bytes.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let text = std::str::from_utf8(bytes).map_err(|_| ExtractError::InvalidUtf8)?;
    Ok(vec![text.to_string()])
}
