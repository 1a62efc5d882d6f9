use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read recipe file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Recipe file contains no records")]
    Empty,
}
