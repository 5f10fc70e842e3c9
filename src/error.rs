use arrow::error::ArrowError;
use thiserror::Error;

/// Errors surfaced by the table-level wrapper. Both configuration variants
/// indicate a caller mistake and are raised before any batch is produced.
#[derive(Debug, Error)]
pub enum PartitionError {
    #[error("chunk_size must be positive")]
    InvalidChunkSize,

    #[error("column [{0}] does not exist in batch")]
    MissingColumn(String),

    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),
}
