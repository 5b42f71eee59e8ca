use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Length mismatch: {0}")]
    LengthMismatch(String),

    #[error("Regression error: {0}")]
    Regression(String),

    #[error("IO error: {0}")]
    IO(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("General error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IO(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err.to_string())
    }
}
