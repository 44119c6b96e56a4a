use thiserror::Error;

pub type KundaliResult<T> = Result<T, KundaliError>;

#[derive(Debug, Error)]
pub enum KundaliError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid chart payload: {0}")]
    InvalidPayload(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
