use serde::{Deserialize, Serialize};

use crate::core::{BubbleRadiusBehavior, ColorPalette};
use crate::error::{ChartError, ChartResult};

/// Spec assembler configuration.
///
/// This type is serializable so hosts can keep palette and radius tuning in
/// their own config files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecAssemblerConfig {
    #[serde(default)]
    pub palette: ColorPalette,
    #[serde(default)]
    pub bubble_radius: BubbleRadiusBehavior,
}

impl SpecAssemblerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the series color palette.
    #[must_use]
    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets bubble radius mapping for scatter charts.
    #[must_use]
    pub fn with_bubble_radius(mut self, behavior: BubbleRadiusBehavior) -> Self {
        self.bubble_radius = behavior;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.palette.validate()?;
        self.bubble_radius.validate()?;
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse assembler config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize assembler config: {e}"))
        })
    }
}
