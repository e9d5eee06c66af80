use std::sync::Arc;

use axum::{
    http::header::HeaderName,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use multi_channel_image_tool::application::channel_service::ChannelService;
use multi_channel_image_tool::config::ServerConfig;
use multi_channel_image_tool::infrastructure::axum_handler::{
    combine_handler, health_handler, split_handler, validate_combine_handler, AppState,
};
use multi_channel_image_tool::infrastructure::file_storage::LocalFileStorage;
use multi_channel_image_tool::infrastructure::image_loader::FsImageLoader;
use multi_channel_image_tool::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init();

    let config = ServerConfig::from_env()?;

    let loader = Arc::new(FsImageLoader::new());
    let state = Arc::new(AppState {
        channel_service: Arc::new(ChannelService::new(loader)),
        file_storage: Arc::new(LocalFileStorage::new()),
    });

    let mut app = Router::new()
        .route("/health", get(health_handler))
        .route("/combine", post(combine_handler))
        .route("/combine/validate", post(validate_combine_handler))
        .route("/split", post(split_handler))
        .with_state(state);

    if config.allow_any_origin {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_headers(vec![HeaderName::from_static("content-type")]);
        app = app.layer(cors);
    }

    info!("Listening on {}", config.bind_addr);
    axum::Server::bind(&config.bind_addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
