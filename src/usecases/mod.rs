pub mod locate_config;
pub mod show_config;

pub use locate_config::LocateConfigUseCase;
pub use show_config::ShowConfigUseCase;

use thiserror::Error;

use confusion::LoadError;

#[derive(Debug, Error)]
pub enum ConfusionError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to render config as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
