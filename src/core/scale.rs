use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Bubble radius mapping for scatter charts.
///
/// Columns whose observed range is narrower than `small_range_threshold`
/// are offset rather than scaled, so small-range data keeps visibly distinct
/// radii. Wider columns are mapped linearly into
/// `[min_radius, min_radius + radius_span]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleRadiusBehavior {
    /// Radius used when the table has no magnitude column.
    pub default_radius: f64,
    pub min_radius: f64,
    pub radius_span: f64,
    pub small_range_threshold: f64,
}

impl Default for BubbleRadiusBehavior {
    fn default() -> Self {
        Self {
            default_radius: 4.0,
            min_radius: 4.0,
            radius_span: 50.0,
            small_range_threshold: 50.0,
        }
    }
}

impl BubbleRadiusBehavior {
    pub fn validate(self) -> ChartResult<Self> {
        let fields = [
            ("default_radius", self.default_radius),
            ("min_radius", self.min_radius),
            ("radius_span", self.radius_span),
            ("small_range_threshold", self.small_range_threshold),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "bubble radius {name} must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }

    /// Maps `value` from a column observed over `[min, max]` to a radius.
    ///
    /// Equal bounds always take the offset branch, so no division by a zero
    /// range can happen whatever the threshold.
    #[must_use]
    pub fn radius(self, value: f64, min: f64, max: f64) -> f64 {
        let range = max - min;
        if range < self.small_range_threshold || range == 0.0 {
            return value - min + self.min_radius;
        }
        self.min_radius + (value - min) / range * self.radius_span
    }
}

/// Bubble radius with the default mapping: offset by 4 below a range of 50,
/// otherwise scaled into `[4, 54]`.
#[must_use]
pub fn scatter_radius(value: f64, min: f64, max: f64) -> f64 {
    BubbleRadiusBehavior::default().radius(value, min, max)
}
