pub mod media;
pub mod public;
pub mod trips;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let downloads = ServeDir::new(state.storage.root().to_path_buf());
    Router::new()
        .merge(public::router())
        .nest("/trips", trips::router())
        .nest("/media", media::router())
        .nest_service("/downloads", downloads)
        .with_state(state)
}
