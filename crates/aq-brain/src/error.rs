use aq_steering::SteeringError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrainError {
    #[error("brain configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Steering(#[from] SteeringError),
}

pub type BrainResult<T> = Result<T, BrainError>;
