//! PDF text extraction backend.

use super::ExtractError;

/// Extract per-page text from PDF bytes.
///
/// `pdf-extract` walks the page tree on the CPU, so the work runs under
/// `spawn_blocking` to keep the request-handling thread free.
pub async fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let data = bytes.to_vec();
    tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&data)
            .map_err(|e| ExtractError::Pdf(e.to_string()))
    })
    .await
    .map_err(|e| ExtractError::Task(e.to_string()))?
}
