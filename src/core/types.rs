use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Chart kind requested by the caller.
///
/// This is what the user asked for; the mode actually rendered is resolved
/// later from the table shape (see [`crate::core::classify`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
    Scatter,
}

impl ChartKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Scatter => "scatter",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pie" => Ok(Self::Pie),
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "scatter" => Ok(Self::Scatter),
            other => Err(ChartError::UnknownChartKind(other.to_owned())),
        }
    }
}

/// Column counts of a validated [`InputTable`].
///
/// Rows are the logical records shared by every column kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableShape {
    pub rows: usize,
    pub float_columns: usize,
    pub time_columns: usize,
    pub text_columns: usize,
}

impl TableShape {
    #[must_use]
    pub fn has_floats(self) -> bool {
        self.float_columns > 0
    }

    #[must_use]
    pub fn has_times(self) -> bool {
        self.time_columns > 0
    }

    #[must_use]
    pub fn has_text(self) -> bool {
        self.text_columns > 0
    }
}

/// Tabular input for chart assembly.
///
/// Columns are stored row-major per kind: `float_rows[i]`, `time_rows[i]` and
/// `text_rows[i]` describe the same record `i`. A kind with no columns is an
/// empty vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputTable {
    pub chart_kind: ChartKind,
    #[serde(default)]
    pub float_rows: Vec<Vec<f64>>,
    #[serde(default)]
    pub time_rows: Vec<Vec<DateTime<Utc>>>,
    #[serde(default)]
    pub text_rows: Vec<Vec<String>>,
    /// Observed minimum per numeric column. Only read by bubble radius scaling.
    #[serde(default)]
    pub column_min: Vec<f64>,
    /// Observed maximum per numeric column. Only read by bubble radius scaling.
    #[serde(default)]
    pub column_max: Vec<f64>,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_scale_type")]
    pub scale_type: String,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
    #[serde(default)]
    pub zero_based: bool,
}

fn default_scale_type() -> String {
    "linear".to_owned()
}

impl InputTable {
    /// Creates an empty table for the requested chart kind.
    #[must_use]
    pub fn new(chart_kind: ChartKind) -> Self {
        Self {
            chart_kind,
            float_rows: Vec::new(),
            time_rows: Vec::new(),
            text_rows: Vec::new(),
            column_min: Vec::new(),
            column_max: Vec::new(),
            title: String::new(),
            scale_type: default_scale_type(),
            x_label: String::new(),
            y_label: String::new(),
            zero_based: false,
        }
    }

    #[must_use]
    pub fn with_float_rows(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.float_rows = rows;
        self
    }

    #[must_use]
    pub fn with_time_rows(mut self, rows: Vec<Vec<DateTime<Utc>>>) -> Self {
        self.time_rows = rows;
        self
    }

    #[must_use]
    pub fn with_text_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.text_rows = rows;
        self
    }

    /// Sets per-column numeric bounds used by bubble radius scaling.
    #[must_use]
    pub fn with_column_bounds(mut self, min: Vec<f64>, max: Vec<f64>) -> Self {
        self.column_min = min;
        self.column_max = max;
        self
    }

    /// Fills `column_min`/`column_max` from the numeric data itself.
    ///
    /// NaN samples are ignored; a column holding only NaN gets NaN bounds.
    #[must_use]
    pub fn with_observed_bounds(mut self) -> Self {
        let columns = self.float_rows.first().map_or(0, Vec::len);
        let mut min = Vec::with_capacity(columns);
        let mut max = Vec::with_capacity(columns);
        for column in 0..columns {
            let values = || {
                self.float_rows
                    .iter()
                    .filter_map(move |row| row.get(column).copied())
                    .filter(|value| !value.is_nan())
                    .map(OrderedFloat)
            };
            min.push(values().min().map_or(f64::NAN, |v| v.0));
            max.push(values().max().map_or(f64::NAN, |v| v.0));
        }
        self.column_min = min;
        self.column_max = max;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_scale_type(mut self, scale_type: impl Into<String>) -> Self {
        self.scale_type = scale_type.into();
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    #[must_use]
    pub fn with_zero_based(mut self, zero_based: bool) -> Self {
        self.zero_based = zero_based;
        self
    }

    /// Validates row alignment across column kinds and returns the table shape.
    ///
    /// Every non-empty column kind must have the same number of rows, and
    /// every row within a kind must have the same number of columns.
    pub fn shape(&self) -> ChartResult<TableShape> {
        let float_columns = uniform_width("numeric", &self.float_rows)?;
        let time_columns = uniform_width("time", &self.time_rows)?;
        let text_columns = uniform_width("text", &self.text_rows)?;

        let counts = [
            ("numeric", self.float_rows.len()),
            ("time", self.time_rows.len()),
            ("text", self.text_rows.len()),
        ];
        let mut rows: Option<(&str, usize)> = None;
        for (kind, len) in counts.into_iter().filter(|(_, len)| *len > 0) {
            match rows {
                None => rows = Some((kind, len)),
                Some((first_kind, first_len)) if first_len != len => {
                    return Err(ChartError::InconsistentTableShape(format!(
                        "{first_kind} columns have {first_len} rows but {kind} columns have {len}"
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(TableShape {
            rows: rows.map_or(0, |(_, len)| len),
            float_columns,
            time_columns,
            text_columns,
        })
    }
}

fn uniform_width<T>(kind: &str, rows: &[Vec<T>]) -> ChartResult<usize> {
    let Some(first) = rows.first() else {
        return Ok(0);
    };
    let width = first.len();
    if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(ChartError::InconsistentTableShape(format!(
            "{kind} row {index} has {} columns, expected {width}",
            row.len()
        )));
    }
    Ok(width)
}
