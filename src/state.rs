#![allow(dead_code)]

use crate::{
    config::AppConfig,
    db::DbPool,
    media::MediaResolver,
    services::storage::StorageService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DbPool,
    pub storage: StorageService,
    pub media: MediaResolver,
}

impl AppState {
    pub fn new(config: AppConfig, db: DbPool, storage: StorageService, media: MediaResolver) -> Self {
        Self {
            config,
            db,
            storage,
            media,
        }
    }
}
