use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use discourse::{DiscourseGraph, GraphBuilder};
use paperstore::PaperStore;

use crate::state::SharedState;

/// The discourse graph over everything currently in the store, rebuilt
/// from scratch per request.
pub async fn get_discourse_graph(
    State(state): State<SharedState>,
) -> Result<Json<DiscourseGraph>, (StatusCode, String)> {
    let results = state.store.read().await.load_all();
    let graph = GraphBuilder::default()
        .build(&results)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))?;
    Ok(Json(graph))
}
