use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::primitives::{format_number, format_radius, quote_time_token};
use crate::core::{
    BubbleRadiusBehavior, ChartMode, ColorPalette, ColorSpec, InputTable, TableShape,
    TokenFormatters,
};
use crate::error::{ChartError, ChartResult};

/// Series name used by bubble charts when rows carry no category text.
const IMPLICIT_CATEGORY: &str = "category 0";

/// Explicit coordinate with pre-formatted tokens.
///
/// `r` is only set for bubble charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: String,
    pub y: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
}

impl Point {
    #[must_use]
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            r: None,
        }
    }

    #[must_use]
    pub fn with_radius(mut self, r: impl Into<String>) -> Self {
        self.r = Some(r.into());
        self
    }
}

/// Dataset values: either scalars aligned with the chart labels, or points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetData {
    Simple(Vec<String>),
    Complex(Vec<Point>),
}

impl DatasetData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Simple(values) => values.len(),
            Self::Complex(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn as_simple(&self) -> Option<&[String]> {
        match self {
            Self::Simple(values) => Some(values),
            Self::Complex(_) => None,
        }
    }

    #[must_use]
    pub fn as_complex(&self) -> Option<&[Point]> {
        match self {
            Self::Simple(_) => None,
            Self::Complex(points) => Some(points),
        }
    }
}

/// One plotted series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub fill: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    pub data: DatasetData,
}

/// Datasets produced for one resolved mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatasetBuild {
    pub datasets: Vec<Dataset>,
    /// True once any point was placed on a time x axis.
    pub uses_time_scale: bool,
}

/// Decomposes an input table into datasets for a resolved [`ChartMode`].
///
/// The table is expected to be validated already; `shape` must be the value
/// returned by [`InputTable::shape`].
#[derive(Debug, Clone, Copy)]
pub struct DatasetBuilder<'a> {
    table: &'a InputTable,
    shape: TableShape,
    palette: &'a ColorPalette,
    formatters: &'a TokenFormatters,
    bubble_radius: BubbleRadiusBehavior,
}

impl<'a> DatasetBuilder<'a> {
    #[must_use]
    pub fn new(
        table: &'a InputTable,
        shape: TableShape,
        palette: &'a ColorPalette,
        formatters: &'a TokenFormatters,
    ) -> Self {
        Self {
            table,
            shape,
            palette,
            formatters,
            bubble_radius: BubbleRadiusBehavior::default(),
        }
    }

    #[must_use]
    pub fn with_bubble_radius(mut self, behavior: BubbleRadiusBehavior) -> Self {
        self.bubble_radius = behavior;
        self
    }

    pub fn build(&self, mode: ChartMode) -> ChartResult<DatasetBuild> {
        let build = match mode {
            ChartMode::Pie => DatasetBuild {
                datasets: vec![self.per_row_colored(mode)?],
                uses_time_scale: false,
            },
            ChartMode::Bar => DatasetBuild {
                datasets: self.bar()?,
                uses_time_scale: false,
            },
            ChartMode::Line => DatasetBuild {
                datasets: self.line(),
                uses_time_scale: false,
            },
            ChartMode::ScatterLine => self.scatter_line(),
            ChartMode::DenormalisedScatterLine => self.denormalised_scatter_line()?,
            ChartMode::BubbleScatter => self.bubble_scatter()?,
        };
        debug!(
            mode = %mode,
            rows = self.shape.rows,
            datasets = build.datasets.len(),
            uses_time_scale = build.uses_time_scale,
            "built datasets"
        );
        Ok(build)
    }

    /// Fails when rows exist but fewer than `needed` numeric columns do.
    fn require_columns(&self, mode: ChartMode, needed: usize) -> ChartResult<()> {
        if self.shape.rows > 0 && self.shape.float_columns < needed {
            return Err(ChartError::MissingColumn {
                mode: mode.as_str(),
                column: self.shape.float_columns,
            });
        }
        Ok(())
    }

    fn number(&self, row: usize, column: usize) -> String {
        format_number(self.table.float_rows[row][column])
    }

    fn time(&self, row: usize) -> String {
        quote_time_token(&self.formatters.timestamp(self.table.time_rows[row][0]))
    }

    fn column(&self, column: usize) -> Vec<String> {
        (0..self.shape.rows)
            .map(|row| self.number(row, column))
            .collect()
    }

    /// Single series over column 0 with one color per row.
    fn per_row_colored(&self, mode: ChartMode) -> ChartResult<Dataset> {
        self.require_columns(mode, 1)?;
        Ok(Dataset {
            label: None,
            fill: true,
            border_color: None,
            background_color: Some(self.palette.first_n(self.shape.rows)),
            data: DatasetData::Simple(self.column(0)),
        })
    }

    fn bar(&self) -> ChartResult<Vec<Dataset>> {
        if self.shape.float_columns <= 1 {
            return Ok(vec![self.per_row_colored(ChartMode::Bar)?]);
        }
        Ok((0..self.shape.float_columns)
            .map(|i| Dataset {
                label: Some(format!("category {i}")),
                fill: true,
                border_color: None,
                background_color: Some(self.palette.repeat(i, self.shape.rows)),
                data: DatasetData::Simple(self.column(i)),
            })
            .collect())
    }

    fn line(&self) -> Vec<Dataset> {
        (0..self.shape.float_columns)
            .map(|i| Dataset {
                label: Some(format!("category {i}")),
                fill: false,
                border_color: Some(self.palette.single(i)),
                background_color: Some(self.palette.single(i)),
                data: DatasetData::Simple(self.column(i)),
            })
            .collect()
    }

    fn point_series(&self, index: usize, points: Vec<Point>) -> Dataset {
        Dataset {
            label: Some(format!("category {index}")),
            fill: false,
            border_color: Some(self.palette.single(index)),
            background_color: Some(self.palette.single(index)),
            data: DatasetData::Complex(points),
        }
    }

    /// With timestamps every numeric column is a series against time;
    /// otherwise column 0 is x and each further column a series.
    fn scatter_line(&self) -> DatasetBuild {
        let rows = self.shape.rows;
        let columns = self.shape.float_columns;

        if self.shape.has_times() {
            let datasets: Vec<Dataset> = (0..columns)
                .map(|n| {
                    let points = (0..rows)
                        .map(|row| Point::new(self.time(row), self.number(row, n)))
                        .collect();
                    self.point_series(n, points)
                })
                .collect();
            return DatasetBuild {
                uses_time_scale: datasets.iter().any(|ds| !ds.data.is_empty()),
                datasets,
            };
        }

        if columns == 1 && rows > 0 {
            warn!("scatter-line needs a second numeric column for y values; no series built");
        }
        let datasets = (0..columns.saturating_sub(1))
            .map(|n| {
                let points = (0..rows)
                    .map(|row| Point::new(self.number(row, 0), self.number(row, n + 1)))
                    .collect();
                self.point_series(n, points)
            })
            .collect();
        DatasetBuild {
            datasets,
            uses_time_scale: false,
        }
    }

    /// One point per row, grouped into series by first-seen category text.
    fn denormalised_scatter_line(&self) -> ChartResult<DatasetBuild> {
        let mode = ChartMode::DenormalisedScatterLine;
        let has_times = self.shape.has_times();
        self.require_columns(mode, if has_times { 1 } else { 2 })?;
        if self.shape.rows > 0 && !self.shape.has_text() {
            return Err(ChartError::InvalidData(
                "denormalised scatter-line requires a text column to group rows".to_owned(),
            ));
        }

        let mut groups: IndexMap<&str, Vec<Point>> = IndexMap::new();
        for row in 0..self.shape.rows {
            let point = if has_times {
                Point::new(self.time(row), self.number(row, 0))
            } else {
                Point::new(self.number(row, 0), self.number(row, 1))
            };
            let category = self.table.text_rows[row][0].as_str();
            trace!(row, category, "group denormalised point");
            groups.entry(category).or_default().push(point);
        }

        let datasets = groups
            .into_iter()
            .enumerate()
            .map(|(i, (category, points))| Dataset {
                label: Some(category.to_owned()),
                fill: false,
                border_color: Some(self.palette.single(i)),
                background_color: Some(self.palette.single(i)),
                data: DatasetData::Complex(points),
            })
            .collect();
        Ok(DatasetBuild {
            datasets,
            uses_time_scale: has_times && self.shape.rows > 0,
        })
    }

    /// Points with radius, grouped by first-seen category text.
    ///
    /// Without categories all rows land in a single `category 0` series,
    /// which is emitted even when the table has no rows.
    fn bubble_scatter(&self) -> ChartResult<DatasetBuild> {
        let mode = ChartMode::BubbleScatter;
        let has_times = self.shape.has_times();
        let has_text = self.shape.has_text();
        self.require_columns(mode, 1)?;

        let mut groups: IndexMap<&str, Vec<Point>> = IndexMap::new();
        if has_text {
            for row in &self.table.text_rows {
                groups.entry(row[0].as_str()).or_default();
            }
        }
        if groups.is_empty() {
            groups.insert(IMPLICIT_CATEGORY, Vec::new());
        }
        trace!(categories = groups.len(), "seeded bubble categories");

        let (y_column, radius_column) = if has_times { (0, 1) } else { (1, 2) };
        let bounds = if self.shape.float_columns > radius_column {
            Some(self.column_bounds(radius_column)?)
        } else {
            None
        };
        let default_radius = format_radius(self.bubble_radius.default_radius);

        for row in 0..self.shape.rows {
            let x = if has_times {
                self.time(row)
            } else {
                self.number(row, 0)
            };
            let y = if self.shape.float_columns > y_column {
                self.number(row, y_column)
            } else {
                "0".to_owned()
            };
            let r = match bounds {
                Some((min, max)) => format_radius(self.bubble_radius.radius(
                    self.table.float_rows[row][radius_column],
                    min,
                    max,
                )),
                None => default_radius.clone(),
            };

            let category = if has_text {
                self.table.text_rows[row][0].as_str()
            } else {
                IMPLICIT_CATEGORY
            };
            groups
                .entry(category)
                .or_default()
                .push(Point::new(x, y).with_radius(r));
        }

        let datasets = groups
            .into_iter()
            .enumerate()
            .map(|(i, (category, points))| Dataset {
                label: Some(category.to_owned()),
                fill: true,
                border_color: Some(self.palette.single(i)),
                background_color: Some(self.palette.single(i)),
                data: DatasetData::Complex(points),
            })
            .collect();
        Ok(DatasetBuild {
            datasets,
            uses_time_scale: has_times && self.shape.rows > 0,
        })
    }

    fn column_bounds(&self, column: usize) -> ChartResult<(f64, f64)> {
        let min = self.table.column_min.get(column).copied();
        let max = self.table.column_max.get(column).copied();
        let (Some(min), Some(max)) = (min, max) else {
            return Err(ChartError::MissingColumnBounds { column });
        };
        if min == max {
            warn!(column, min, "radius column has equal bounds; using offset radius");
        }
        Ok((min, max))
    }
}
