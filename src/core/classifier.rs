use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, TableShape};

/// Rendering strategy resolved from the requested kind and the table shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartMode {
    Pie,
    Bar,
    /// Each numeric column is a series over the row labels.
    Line,
    /// Each numeric column is a series of explicit `(x, y)` points.
    ScatterLine,
    /// Each row is one point, grouped into series by its first text value.
    DenormalisedScatterLine,
    BubbleScatter,
}

/// Chart type name understood by the target charting library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryChartType {
    Pie,
    Bar,
    Line,
    Bubble,
}

impl LibraryChartType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Bubble => "bubble",
        }
    }
}

impl fmt::Display for LibraryChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ChartMode {
    #[must_use]
    pub fn library_chart_type(self) -> LibraryChartType {
        match self {
            Self::Pie => LibraryChartType::Pie,
            Self::Bar => LibraryChartType::Bar,
            Self::Line | Self::ScatterLine | Self::DenormalisedScatterLine => {
                LibraryChartType::Line
            }
            Self::BubbleScatter => LibraryChartType::Bubble,
        }
    }

    /// Mode name handed to renderers.
    ///
    /// Both scatter-line variants share `"scatterline"` since they render with
    /// the same linear x axis; bubble charts report `"scatter"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::ScatterLine | Self::DenormalisedScatterLine => "scatterline",
            Self::BubbleScatter => "scatter",
        }
    }

    /// Whether datasets carry per-row labels rather than explicit points.
    #[must_use]
    pub fn uses_labels(self) -> bool {
        matches!(self, Self::Pie | Self::Bar | Self::Line)
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the rendering mode for a requested chart kind.
///
/// A line chart becomes a scatter-line when there is no text column to label
/// rows with, or when rows carry timestamps. If text is present as well and
/// there are at least two numeric/time columns, each row becomes a point
/// tagged by its category instead.
#[must_use]
pub fn classify(kind: ChartKind, shape: TableShape) -> ChartMode {
    match kind {
        ChartKind::Pie => ChartMode::Pie,
        ChartKind::Bar => ChartMode::Bar,
        ChartKind::Scatter => ChartMode::BubbleScatter,
        ChartKind::Line if !shape.has_text() || shape.has_times() => {
            if shape.has_text() && shape.float_columns + shape.time_columns >= 2 {
                ChartMode::DenormalisedScatterLine
            } else {
                ChartMode::ScatterLine
            }
        }
        ChartKind::Line => ChartMode::Line,
    }
}
