#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use url::Url;
use uuid::Uuid;

use crate::{db::DbPool, error::AppError, media::MediaResolver};

/// A recorded trip and its exported media entry. Fields carry whatever the
/// recorder supplied, verbatim and freely mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub title: String,
    pub description: String,
    pub media_id: String,
}

impl Trip {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        media_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            media_id: media_id.into(),
        }
    }

    /// Access URI of the trip's media, derived from `media_id` and the
    /// host's addressing scheme. Read-only.
    pub fn media_uri(&self, resolver: &MediaResolver) -> Url {
        resolver.uri(&self.media_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TripRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub media_id: String,
    pub created_at: DateTime<Utc>,
}

impl TripRecord {
    pub fn new(trip: Trip) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: trip.title,
            description: trip.description,
            media_id: trip.media_id,
            created_at: Utc::now(),
        }
    }

    pub fn trip(&self) -> Trip {
        Trip::new(
            self.title.clone(),
            self.description.clone(),
            self.media_id.clone(),
        )
    }

    pub async fn insert(&self, db: &DbPool) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO trips (id, title, description, media_id, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&self.id)
        .bind(&self.title)
        .bind(&self.description)
        .bind(&self.media_id)
        .bind(self.created_at)
        .execute(db)
        .await?;
        Ok(())
    }

    pub async fn list(db: &DbPool) -> Result<Vec<TripRecord>, AppError> {
        let trips = sqlx::query_as::<_, TripRecord>(
            "SELECT id, title, description, media_id, created_at FROM trips \
             ORDER BY created_at DESC",
        )
        .fetch_all(db)
        .await?;
        Ok(trips)
    }

    pub async fn find(db: &DbPool, id: &str) -> Result<Option<TripRecord>, AppError> {
        let trip = sqlx::query_as::<_, TripRecord>(
            "SELECT id, title, description, media_id, created_at FROM trips WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(trip)
    }

    pub async fn update(db: &DbPool, id: &str, trip: &Trip) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE trips SET title = ?, description = ?, media_id = ? WHERE id = ?")
            .bind(&trip.title)
            .bind(&trip.description)
            .bind(&trip.media_id)
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(db: &DbPool, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM trips WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{DEFAULT_DOWNLOADS_BASE, DOWNLOADS_PROVIDER_LEVEL};

    fn resolver(platform_level: u32) -> MediaResolver {
        MediaResolver::new(platform_level, Url::parse(DEFAULT_DOWNLOADS_BASE).unwrap())
    }

    #[test]
    fn construction_keeps_fields_verbatim() {
        let trip = Trip::new("Morning ride", "Loop around the harbor", "42");
        assert_eq!(trip.title, "Morning ride");
        assert_eq!(trip.description, "Loop around the harbor");
        assert_eq!(trip.media_id, "42");
    }

    #[test]
    fn media_uri_matches_the_worked_examples() {
        let trip = Trip::new("t", "d", "42");
        assert_eq!(
            trip.media_uri(&resolver(DOWNLOADS_PROVIDER_LEVEL - 1)).as_str(),
            "file:///42"
        );
        assert_eq!(
            trip.media_uri(&resolver(DOWNLOADS_PROVIDER_LEVEL)).as_str(),
            "content://media/external/downloads/42"
        );
    }

    #[test]
    fn media_uri_follows_field_mutation() {
        let mut trip = Trip::new("t", "d", "42");
        trip.media_id = "43".into();
        assert_eq!(
            trip.media_uri(&resolver(DOWNLOADS_PROVIDER_LEVEL)).as_str(),
            "content://media/external/downloads/43"
        );
        assert_eq!(trip.title, "t");
        assert_eq!(trip.description, "d");
    }

    #[test]
    fn records_preserve_the_wrapped_trip() {
        let record = TripRecord::new(Trip::new("t", "d", "m"));
        let trip = record.trip();
        assert_eq!(trip.title, "t");
        assert_eq!(trip.description, "d");
        assert_eq!(trip.media_id, "m");
        assert!(!record.id.is_empty());
    }
}
