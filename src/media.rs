use std::path::{Path, PathBuf};

use url::Url;

use crate::{config::AppConfig, error::AppError};

/// Platform media generation that introduced the downloads provider
/// collection. Hosts below it address media by raw filesystem path.
pub const DOWNLOADS_PROVIDER_LEVEL: u32 = 29;

/// Well-known downloads collection URI on provider hosts.
pub const DEFAULT_DOWNLOADS_BASE: &str = "content://media/external/downloads";

/// Resolves trip media identifiers to access URIs.
///
/// The platform generation is injected once at construction, so both
/// addressing schemes are testable without touching the environment.
#[derive(Debug, Clone)]
pub struct MediaResolver {
    platform_level: u32,
    downloads_base: Url,
}

impl MediaResolver {
    pub fn new(platform_level: u32, downloads_base: Url) -> Self {
        Self {
            platform_level,
            downloads_base,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let downloads_base = Url::parse(&config.media_downloads_base)
            .map_err(|err| AppError::Config(format!("invalid MEDIA_DOWNLOADS_BASE: {err}")))?;
        if downloads_base.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "MEDIA_DOWNLOADS_BASE must be a hierarchical URL: {downloads_base}"
            )));
        }
        Ok(Self::new(config.media_platform_level, downloads_base))
    }

    /// Whether media ids name entries in the downloads collection rather
    /// than raw filesystem paths.
    pub fn uses_provider(&self) -> bool {
        self.platform_level >= DOWNLOADS_PROVIDER_LEVEL
    }

    /// Access URI for a stored media id. Total: every string resolves to
    /// some URI, there is no failure branch.
    pub fn uri(&self, media_id: &str) -> Url {
        if !self.uses_provider() {
            return file_uri(media_id);
        }
        let mut uri = self.downloads_base.clone();
        if let Ok(mut segments) = uri.path_segments_mut() {
            // Base is hierarchical, checked at construction.
            segments.push(media_id);
        }
        uri
    }

    /// Identifier recorded for a media file just imported into the
    /// collection: direct-path hosts keep the absolute stored path,
    /// provider hosts the collection entry name.
    pub fn media_id_for(&self, stored_at: &Path, entry_name: &str) -> String {
        if self.uses_provider() {
            entry_name.to_string()
        } else {
            stored_at.to_string_lossy().into_owned()
        }
    }
}

fn file_uri(media_id: &str) -> Url {
    let path = Path::new(media_id);
    let absolute: PathBuf = if path.is_absolute() {
        path.to_path_buf()
    } else {
        // Bare ids ("42") resolve as root-relative paths.
        Path::new("/").join(path)
    };
    Url::from_file_path(&absolute).expect("absolute path converts to a file URI")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_resolver() -> MediaResolver {
        MediaResolver::new(
            DOWNLOADS_PROVIDER_LEVEL,
            Url::parse(DEFAULT_DOWNLOADS_BASE).unwrap(),
        )
    }

    fn direct_resolver() -> MediaResolver {
        MediaResolver::new(
            DOWNLOADS_PROVIDER_LEVEL - 1,
            Url::parse(DEFAULT_DOWNLOADS_BASE).unwrap(),
        )
    }

    #[test]
    fn direct_hosts_wrap_bare_ids_as_rooted_file_uris() {
        assert_eq!(direct_resolver().uri("42").as_str(), "file:///42");
    }

    #[test]
    fn direct_hosts_keep_full_paths() {
        assert_eq!(
            direct_resolver().uri("/rides/2024-07-01.csv").as_str(),
            "file:///rides/2024-07-01.csv"
        );
    }

    #[test]
    fn provider_hosts_append_the_id_to_the_downloads_collection() {
        assert_eq!(
            provider_resolver().uri("42").as_str(),
            "content://media/external/downloads/42"
        );
    }

    #[test]
    fn provider_ids_become_a_single_encoded_segment() {
        assert_eq!(
            provider_resolver().uri("ride 01.csv").as_str(),
            "content://media/external/downloads/ride%2001.csv"
        );
        assert_eq!(
            provider_resolver().uri("a/b").as_str(),
            "content://media/external/downloads/a%2Fb"
        );
    }

    #[test]
    fn provider_addressing_starts_at_the_threshold() {
        let base = Url::parse(DEFAULT_DOWNLOADS_BASE).unwrap();
        assert!(!MediaResolver::new(DOWNLOADS_PROVIDER_LEVEL - 1, base.clone()).uses_provider());
        assert!(MediaResolver::new(DOWNLOADS_PROVIDER_LEVEL, base).uses_provider());
    }

    #[test]
    fn imported_media_ids_follow_the_addressing_scheme() {
        let stored = Path::new("/srv/downloads/ride.csv");
        assert_eq!(
            direct_resolver().media_id_for(stored, "ride.csv"),
            "/srv/downloads/ride.csv"
        );
        assert_eq!(
            provider_resolver().media_id_for(stored, "ride.csv"),
            "ride.csv"
        );
    }

    #[test]
    fn custom_collection_bases_are_honored() {
        let base = Url::parse("content://downloads.provider/public").unwrap();
        let resolver = MediaResolver::new(DOWNLOADS_PROVIDER_LEVEL, base);
        assert_eq!(
            resolver.uri("42").as_str(),
            "content://downloads.provider/public/42"
        );
    }
}
