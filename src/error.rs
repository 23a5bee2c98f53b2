use thiserror::Error;

/// Errors raised by batch components.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("ItemReader error: {0}")]
    ItemReader(String),

    #[error("ItemProcessor error: {0}")]
    ItemProcessor(String),

    #[error("ItemWriter error: {0}")]
    ItemWriter(String),

    #[error("Step failed: {0}")]
    Step(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
