//! Error types for chart layout, rendering and export.

use thiserror::Error;

/// Result type alias using [`ChartError`].
pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    /// A row does not have the same number of values as the first row.
    #[error("Row {row} has {found} values, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The table has no rows or no columns.
    #[error("Frame time table is empty")]
    EmptyTable,

    #[error("Row {row}, column {column} holds a non-finite frame time ({value})")]
    InvalidValue { row: usize, column: usize, value: f64 },

    /// Labels, colors or bar width disagree with the table.
    #[error("Invalid chart configuration: {0}")]
    Configuration(String),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Failure reported by the drawing backend or the image encoder.
    #[error("Rendering error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChartError {
    pub(crate) fn render(err: impl std::fmt::Display) -> Self {
        ChartError::Render(err.to_string())
    }
}
