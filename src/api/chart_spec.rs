use serde::{Deserialize, Serialize};

use crate::core::{ChartMode, ColorSpec, Dataset, DatasetData, LibraryChartType};
use crate::error::{ChartError, ChartResult};

/// Renderer-ready chart description.
///
/// Every value is already a text token; renderers only decide quoting,
/// axis types and boilerplate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart type name for the target library (`bubble` for scatter charts).
    pub chart_type: LibraryChartType,
    /// Mode the datasets were built with; drives axis selection.
    pub actual_mode: ChartMode,
    pub title: String,
    pub scale_type: String,
    pub x_label: String,
    pub y_label: String,
    pub zero_based: bool,
    /// Row labels, only filled for pie, bar and line modes.
    #[serde(default)]
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub tooltip_callback: String,
    pub uses_time_scale: bool,
}

impl ChartSpec {
    /// Mode name as renderers expect it (`scatterline`, `scatter`, ...).
    #[must_use]
    pub fn actual_mode_name(&self) -> &'static str {
        self.actual_mode.as_str()
    }

    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Legends are only worth showing with more than one series.
    #[must_use]
    pub fn shows_legend(&self) -> bool {
        self.chart_type != LibraryChartType::Pie && self.datasets.len() > 1
    }

    /// Checks dataset invariants a renderer relies on.
    pub fn validate(&self) -> ChartResult<()> {
        if self.chart_type != self.actual_mode.library_chart_type() {
            return Err(ChartError::InvalidData(format!(
                "chart type {} does not match mode {}",
                self.chart_type, self.actual_mode
            )));
        }

        let uses_labels = self.actual_mode.uses_labels();
        let bubble = self.actual_mode == ChartMode::BubbleScatter;
        for (index, dataset) in self.datasets.iter().enumerate() {
            match &dataset.data {
                DatasetData::Simple(values) => {
                    if !uses_labels {
                        return Err(ChartError::InvalidData(format!(
                            "dataset {index} has scalar data in {} mode",
                            self.actual_mode
                        )));
                    }
                    if values.len() != self.labels.len() {
                        return Err(ChartError::InvalidData(format!(
                            "dataset {index} has {} values for {} labels",
                            values.len(),
                            self.labels.len()
                        )));
                    }
                }
                DatasetData::Complex(points) => {
                    if uses_labels {
                        return Err(ChartError::InvalidData(format!(
                            "dataset {index} has point data in {} mode",
                            self.actual_mode
                        )));
                    }
                    if let Some(point) = points.iter().find(|p| p.r.is_some() != bubble) {
                        return Err(ChartError::InvalidData(format!(
                            "dataset {index} point ({}, {}) radius does not match {} mode",
                            point.x, point.y, self.actual_mode
                        )));
                    }
                }
            }

            for color in [&dataset.background_color, &dataset.border_color]
                .into_iter()
                .flatten()
            {
                if let ColorSpec::Many(colors) = color {
                    if colors.len() != dataset.data.len() {
                        return Err(ChartError::InvalidData(format!(
                            "dataset {index} has {} colors for {} values",
                            colors.len(),
                            dataset.data.len()
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
