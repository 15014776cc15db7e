use {
    std::path::PathBuf,
    thiserror::Error,
};

/// Failures that cost one source its records. The batch keeps going.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source {source_name} is unavailable at {}: {cause}", .path.display())]
    SourceUnavailable {
        source_name: String,
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
    #[error("source {source_name} is malformed: {cause}")]
    Malformed {
        source_name: String,
        #[source]
        cause: csv::Error,
    },
    #[error("source {source_name} has no comment column (columns: {columns:?})")]
    SchemaMismatch {
        source_name: String,
        columns: Vec<String>,
    },
}

#[derive(Debug, Error)]
#[error("tokenizer rejected input: {message}")]
pub struct TokenizationError {
    pub message: String,
}

/// The only fatal error of a run.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write output to {}: {cause}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
    #[error("failed to write output row: {0}")]
    Csv(#[from] csv::Error),
}

impl LoadError {
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::SourceUnavailable { .. } => "source_unavailable",
            LoadError::Malformed { .. } => "malformed",
            LoadError::SchemaMismatch { .. } => "schema_mismatch",
        }
    }
}
