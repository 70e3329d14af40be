use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    error::AppError,
    models::trip::{Trip, TripRecord},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trips_list).post(trip_create))
        .route(
            "/:id",
            get(trip_detail).put(trip_update).delete(trip_delete),
        )
}

#[derive(Deserialize)]
struct TripForm {
    title: String,
    description: String,
    media_id: String,
}

impl TripForm {
    fn into_trip(self) -> Trip {
        Trip::new(self.title, self.description, self.media_id)
    }
}

#[derive(Serialize)]
struct TripView {
    id: String,
    title: String,
    description: String,
    media_id: String,
    uri: String,
    created_at: DateTime<Utc>,
}

impl TripView {
    fn from_record(record: TripRecord, state: &AppState) -> Self {
        let uri = record.trip().media_uri(&state.media).to_string();
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            media_id: record.media_id,
            uri,
            created_at: record.created_at,
        }
    }
}

async fn trips_list(State(state): State<AppState>) -> Result<Json<Vec<TripView>>, AppError> {
    let records = TripRecord::list(&state.db).await?;
    let views = records
        .into_iter()
        .map(|record| TripView::from_record(record, &state))
        .collect();
    Ok(Json(views))
}

async fn trip_create(
    State(state): State<AppState>,
    Json(form): Json<TripForm>,
) -> Result<(StatusCode, Json<TripView>), AppError> {
    let record = TripRecord::new(form.into_trip());
    record.insert(&state.db).await?;
    info!("recorded trip {} ({})", record.id, record.title);
    Ok((
        StatusCode::CREATED,
        Json(TripView::from_record(record, &state)),
    ))
}

async fn trip_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TripView>, AppError> {
    let record = TripRecord::find(&state.db, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(TripView::from_record(record, &state)))
}

async fn trip_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<TripForm>,
) -> Result<Json<TripView>, AppError> {
    let trip = form.into_trip();
    if !TripRecord::update(&state.db, &id, &trip).await? {
        return Err(AppError::NotFound);
    }
    let record = TripRecord::find(&state.db, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(TripView::from_record(record, &state)))
}

async fn trip_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let record = TripRecord::find(&state.db, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    TripRecord::delete(&state.db, &record.id).await?;
    match state.storage.remove_media(&record.media_id).await {
        Ok(true) => info!("removed media entry for trip {}", record.id),
        Ok(false) => {}
        Err(err) => warn!("could not remove media for trip {}: {err}", record.id),
    }
    Ok(StatusCode::NO_CONTENT)
}
