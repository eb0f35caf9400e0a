use tracing::{info, warn};

/// Extract plain text from PDF bytes. Extraction failures degrade to an
/// empty string; the caller skips the file.
pub async fn extract_text(filename: String, bytes: Vec<u8>) -> String {
    tokio::task::spawn_blocking(move || {
        match pdf_extract::extract_text_from_mem(&bytes) {
            Ok(text) => {
                info!(file = %filename, chars = text.len(), "extracted text from PDF");
                text
            }
            Err(e) => {
                warn!(file = %filename, "PDF text extraction failed: {e}");
                String::new()
            }
        }
    })
    .await
    .unwrap_or_default()
}
