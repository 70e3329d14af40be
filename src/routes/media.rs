use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{error::AppError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(media_import))
}

#[derive(Deserialize)]
struct ImportParams {
    name: String,
}

#[derive(Serialize)]
struct ImportedMedia {
    media_id: String,
    uri: String,
}

async fn media_import(
    State(state): State<AppState>,
    Query(params): Query<ImportParams>,
    body: Bytes,
) -> Result<(StatusCode, Json<ImportedMedia>), AppError> {
    let stored_at = state.storage.save_media(&params.name, &body).await?;
    let media_id = state.media.media_id_for(&stored_at, &params.name);
    let uri = state.media.uri(&media_id).to_string();
    info!("imported media entry {} ({} bytes)", params.name, body.len());
    Ok((
        StatusCode::CREATED,
        Json(ImportedMedia { media_id, uri }),
    ))
}
