use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::primitives::format_timestamp;

/// Label hook applied to text-column labels (truncation, escaping, ...).
pub type LabelPreprocessorFn = Arc<dyn Fn(&str) -> String + Send + Sync + 'static>;
/// Timestamp encoding used for labels and time-axis point coordinates.
pub type TimestampFormatterFn = Arc<dyn Fn(DateTime<Utc>) -> String + Send + Sync + 'static>;

/// Caller-supplied formatting hooks shared by label and dataset building.
#[derive(Clone)]
pub struct TokenFormatters {
    pub label_preprocessor: LabelPreprocessorFn,
    pub timestamp_formatter: TimestampFormatterFn,
}

impl Default for TokenFormatters {
    fn default() -> Self {
        Self {
            label_preprocessor: Arc::new(|raw: &str| raw.to_owned()),
            timestamp_formatter: Arc::new(format_timestamp),
        }
    }
}

impl fmt::Debug for TokenFormatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenFormatters").finish_non_exhaustive()
    }
}

impl TokenFormatters {
    #[must_use]
    pub fn with_label_preprocessor(mut self, preprocessor: LabelPreprocessorFn) -> Self {
        self.label_preprocessor = preprocessor;
        self
    }

    #[must_use]
    pub fn with_timestamp_formatter(mut self, formatter: TimestampFormatterFn) -> Self {
        self.timestamp_formatter = formatter;
        self
    }

    #[must_use]
    pub fn label(&self, raw: &str) -> String {
        (self.label_preprocessor)(raw)
    }

    #[must_use]
    pub fn timestamp(&self, time: DateTime<Utc>) -> String {
        (self.timestamp_formatter)(time)
    }
}
