use crate::application::error::ApplicationError;
use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::application::channel_service::ChannelService;
use crate::domain::channel::Channel;
use crate::domain::channel_source::{ChannelSource, SlotSources};
use crate::domain::error::DomainError;
use crate::domain::pixel_buffer::PixelBuffer;
use crate::infrastructure::file_storage::LocalFileStorage;

#[derive(Clone)]
pub struct AppState {
    pub channel_service: Arc<ChannelService>,
    pub file_storage: Arc<LocalFileStorage>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChannelSourceParams {
    File {
        path: String,
        channel: String,
        #[serde(default)]
        invert: bool,
    },
    Uniform {
        value: u8,
    },
}

impl Default for ChannelSourceParams {
    fn default() -> Self {
        ChannelSourceParams::Uniform { value: 255 }
    }
}

impl ChannelSourceParams {
    fn into_domain(self) -> Result<ChannelSource, DomainError> {
        match self {
            ChannelSourceParams::File { path, channel, invert } => {
                if path.trim().is_empty() {
                    return Err(DomainError::InvalidInput("empty image path".to_string()));
                }
                Ok(ChannelSource::from_file(path, channel.parse::<Channel>()?, invert))
            }
            ChannelSourceParams::Uniform { value } => Ok(ChannelSource::uniform(value)),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct CombineParams {
    #[serde(default)]
    pub r: ChannelSourceParams,
    #[serde(default)]
    pub g: ChannelSourceParams,
    #[serde(default)]
    pub b: ChannelSourceParams,
    #[serde(default)]
    pub a: ChannelSourceParams,
    pub output_path: Option<String>,
}

impl CombineParams {
    fn sources(&self) -> Result<SlotSources, DomainError> {
        Ok(SlotSources {
            r: self.r.clone().into_domain()?,
            g: self.g.clone().into_domain()?,
            b: self.b.clone().into_domain()?,
            a: self.a.clone().into_domain()?,
        })
    }
}

#[derive(Deserialize, Debug)]
pub struct SplitParams {
    pub path: String,
    pub channel: String,
    #[serde(default)]
    pub invert: bool,
    pub output_path: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ImageResponse {
    pub width: u32,
    pub height: u32,
    /// PNG preview as a `data:` URL.
    pub image: String,
    pub warnings: Vec<String>,
    pub saved_to: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct ValidationResponse {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

// ピクセル処理は重いのでブロッキング用スレッドで実行する
async fn run_blocking<T, F>(work: F) -> Result<T, ApplicationError>
where
    F: FnOnce() -> Result<T, ApplicationError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ApplicationError::WorkerFailed(e.to_string()))?
}

async fn respond_with_image(
    state: &AppState,
    image: Arc<PixelBuffer>,
    warnings: Vec<String>,
    output_path: Option<String>,
) -> Result<Json<ImageResponse>, ApplicationError> {
    // プレビューと保存で同じ PNG を使う
    let service = state.channel_service.clone();
    let encoded = {
        let image = image.clone();
        run_blocking(move || service.encode_png(&image)).await?
    };

    let saved_to = match output_path {
        Some(path) => {
            let path = PathBuf::from(path);
            state.file_storage.save_image(&path, &encoded).await?;
            Some(path.display().to_string())
        }
        None => None,
    };

    Ok(Json(ImageResponse {
        width: image.width(),
        height: image.height(),
        image: format!("data:image/png;base64,{}", base64::encode(&encoded)),
        warnings,
        saved_to,
    }))
}

pub async fn combine_handler(
    State(state): State<Arc<AppState>>,
    Json(params): Json<CombineParams>,
) -> Result<Json<ImageResponse>, ApplicationError> {
    let sources = params.sources()?;
    info!("Combine requested: {:?}", sources);

    let service = state.channel_service.clone();
    let output = run_blocking(move || service.combine(&sources)).await?;

    respond_with_image(&state, output.image, output.warnings, params.output_path).await
}

pub async fn validate_combine_handler(
    State(state): State<Arc<AppState>>,
    Json(params): Json<CombineParams>,
) -> Result<Json<ValidationResponse>, ApplicationError> {
    let sources = params.sources()?;
    let service = state.channel_service.clone();
    let report = run_blocking(move || Ok(service.validate(&sources))).await?;

    Ok(Json(ValidationResponse {
        errors: report.errors,
        warnings: report.warnings,
    }))
}

pub async fn split_handler(
    State(state): State<Arc<AppState>>,
    Json(params): Json<SplitParams>,
) -> Result<Json<ImageResponse>, ApplicationError> {
    let channel = params.channel.parse::<Channel>()?;
    let path = PathBuf::from(&params.path);
    info!("Split requested: channel {} of {}", channel, path.display());

    let service = state.channel_service.clone();
    let invert = params.invert;
    let image = run_blocking(move || service.split(&path, channel, invert)).await?;

    respond_with_image(&state, image, Vec::new(), params.output_path).await
}

pub async fn health_handler() -> &'static str {
    "ok"
}
