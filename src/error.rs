use thiserror::Error;

#[derive(Error, Debug)]
pub enum NGramError {
    #[error("Invalid N-gram order {0}: order must be at least 1")]
    InvalidOrder(usize),

    #[error("Empty input: {0} contains no words")]
    EmptyInput(&'static str),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type NgResult<T> = Result<T, NGramError>;
