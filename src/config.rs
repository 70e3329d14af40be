use std::{env, net::SocketAddr, path::PathBuf};

use crate::{error::AppError, media};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub media_root: PathBuf,
    pub media_platform_level: u32,
    pub media_downloads_base: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://triplog.db".to_string());
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let media_root = env::var("MEDIA_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("downloads"));

        let media_platform_level = match env::var("MEDIA_PLATFORM_LEVEL") {
            Ok(raw) => raw
                .parse()
                .map_err(|err| AppError::Config(format!("invalid MEDIA_PLATFORM_LEVEL: {err}")))?,
            Err(_) => media::DOWNLOADS_PROVIDER_LEVEL,
        };

        let media_downloads_base = env::var("MEDIA_DOWNLOADS_BASE")
            .unwrap_or_else(|_| media::DEFAULT_DOWNLOADS_BASE.to_string());

        Ok(Self {
            database_url,
            listen_addr,
            media_root,
            media_platform_level,
            media_downloads_base,
        })
    }
}
