use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NgmeshError {
    #[error("Buffer too small: {0}")]
    BufferTooSmall(String),
    #[error("Malformed buffer: {0}")]
    MalformedBuffer(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    IoError(String),
}

pub type Status = Result<(), NgmeshError>;

impl From<std::io::Error> for NgmeshError {
    fn from(err: std::io::Error) -> Self {
        NgmeshError::IoError(err.to_string())
    }
}

pub fn ok_status() -> Status {
    Ok(())
}

pub fn malformed_buffer(msg: impl Into<String>) -> NgmeshError {
    NgmeshError::MalformedBuffer(msg.into())
}
