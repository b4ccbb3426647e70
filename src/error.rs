use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown chart kind: {0}")]
    UnknownChartKind(String),

    #[error("inconsistent table shape: {0}")]
    InconsistentTableShape(String),

    #[error("{mode} chart requires numeric column {column}")]
    MissingColumn { mode: &'static str, column: usize },

    #[error("missing min/max bounds for numeric column {column}")]
    MissingColumnBounds { column: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
