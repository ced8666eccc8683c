use thiserror::Error;

#[derive(Debug, Error)]
pub enum PointsError {
    #[error("point feed parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PointsResult<T> = Result<T, PointsError>;
