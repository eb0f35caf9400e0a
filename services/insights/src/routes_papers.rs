use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, warn};

use discourse::CrossReferencer;
use paperstore::PaperStore;

use crate::state::SharedState;
use crate::{pdftext, upload};

/// Process an upload batch: every previous result and upload is cleared
/// first, then each PDF runs through text extraction and the AI task and
/// lands in the results store. Responds with the refreshed results view.
pub async fn upload_papers(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    clear_previous_data(&state).await?;

    let mut processed = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?
    {
        let Some(raw_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let Some(filename) = upload::sanitize_filename(&raw_name) else {
            warn!(file = %raw_name, "unusable filename, skipping");
            continue;
        };
        if !filename.to_lowercase().ends_with(".pdf") {
            warn!(file = %filename, "non-PDF upload, skipping");
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

        tokio::fs::write(state.upload_dir.join(&filename), &bytes)
            .await
            .map_err(internal)?;

        let text = pdftext::extract_text(filename.clone(), bytes.to_vec()).await;
        if text.is_empty() {
            warn!(file = %filename, "no text extracted, skipping");
            continue;
        }

        info!(file = %filename, "sending text to extraction task");
        let insights = {
            let extractor = state.extractor.lock().await;
            match extractor.extract(&text).await {
                Ok(insights) => insights,
                Err(e) => {
                    // A failed request leaves no phantom record behind.
                    warn!(file = %filename, "extraction failed: {e}");
                    continue;
                }
            }
        };

        processed.push(insights.into_record(filename));
    }

    let total = state
        .store
        .write()
        .await
        .append(&processed)
        .map_err(internal)?;
    info!(added = processed.len(), total, "stored extraction results");

    results_payload(&state).await.map(Json)
}

pub async fn get_papers(
    State(state): State<SharedState>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    results_payload(&state).await.map(Json)
}

/// Results plus cross-references, recomputed fresh on every request.
async fn results_payload(
    state: &SharedState,
) -> Result<serde_json::Value, (StatusCode, String)> {
    let results = state.store.read().await.load_all();
    let cross_references = CrossReferencer::default().build(&results);

    Ok(serde_json::json!({
        "results": results,
        "cross_references": cross_references,
        "count": results.len(),
    }))
}

async fn clear_previous_data(state: &SharedState) -> Result<(), (StatusCode, String)> {
    info!("clearing previous results and uploads");
    state.store.write().await.clear().map_err(internal)?;
    upload::clear_dir(&state.upload_dir).await.map_err(internal)
}

fn internal(e: impl std::fmt::Display) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
