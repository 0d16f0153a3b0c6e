use thiserror::Error;

#[derive(Debug, Error)]
pub enum SteeringError {
    #[error("steering configuration error: {0}")]
    Config(String),
}

pub type SteeringResult<T> = Result<T, SteeringError>;
