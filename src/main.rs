use tokio::net::TcpListener;
use tracing::{error, info};
use triplog::config::AppConfig;
use triplog::db::init_pool;
use triplog::error::AppError;
use triplog::media::MediaResolver;
use triplog::routes::create_router;
use triplog::services::storage::StorageService;
use triplog::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = AppConfig::from_env()?;
    let db = init_pool(&config.database_url).await?;

    if let Err(err) = sqlx::migrate!("./migrations").run(&db).await {
        error!("migration failed: {err:?}");
        return Err(AppError::Other(err.into()));
    }

    let storage = StorageService::new(config.media_root.clone());
    storage.ensure_structure().await?;

    let media = MediaResolver::from_config(&config)?;

    let state = AppState::new(config.clone(), db.clone(), storage.clone(), media.clone());

    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,triplog=debug".into());

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
