use mc_core::McError;
use mc_medium::MediumError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] McError),

    #[error("medium error: {0}")]
    Medium(#[from] MediumError),

    #[error("scenario parse error: {0}")]
    Scenario(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
