mod assembler_config;
mod chart_spec;
mod json_contract;

pub use assembler_config::SpecAssemblerConfig;
pub use chart_spec::ChartSpec;
pub use json_contract::{CHART_SPEC_JSON_SCHEMA_V1, ChartSpecJsonContractV1};

use tracing::debug;

use crate::core::{
    DatasetBuilder, InputTable, LabelPreprocessorFn, TimestampFormatterFn, TokenFormatters,
    classify, marshal_labels, tooltip_callback,
};
use crate::error::ChartResult;
use crate::render::SpecRenderer;

/// Turns input tables into [`ChartSpec`] values.
///
/// The assembler holds only configuration and formatting hooks, so one
/// instance can serve any number of tables; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct SpecAssembler {
    config: SpecAssemblerConfig,
    formatters: TokenFormatters,
}

impl SpecAssembler {
    pub fn new(config: SpecAssemblerConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            formatters: TokenFormatters::default(),
        })
    }

    /// Installs the hook applied to text-column labels.
    #[must_use]
    pub fn with_label_preprocessor(mut self, preprocessor: LabelPreprocessorFn) -> Self {
        self.formatters = self.formatters.with_label_preprocessor(preprocessor);
        self
    }

    /// Installs the timestamp encoding used for labels and time coordinates.
    #[must_use]
    pub fn with_timestamp_formatter(mut self, formatter: TimestampFormatterFn) -> Self {
        self.formatters = self.formatters.with_timestamp_formatter(formatter);
        self
    }

    #[must_use]
    pub fn config(&self) -> &SpecAssemblerConfig {
        &self.config
    }

    /// Classifies the table, builds its datasets and fills display metadata.
    pub fn assemble(&self, table: &InputTable) -> ChartResult<ChartSpec> {
        let shape = table.shape()?;
        let mode = classify(table.chart_kind, shape);
        debug!(
            requested = %table.chart_kind,
            mode = %mode,
            rows = shape.rows,
            float_columns = shape.float_columns,
            time_columns = shape.time_columns,
            text_columns = shape.text_columns,
            "resolved chart mode"
        );

        let build = DatasetBuilder::new(table, shape, &self.config.palette, &self.formatters)
            .with_bubble_radius(self.config.bubble_radius)
            .build(mode)?;
        let labels = if mode.uses_labels() {
            marshal_labels(table, shape, &self.formatters)
        } else {
            Vec::new()
        };

        Ok(ChartSpec {
            chart_type: mode.library_chart_type(),
            actual_mode: mode,
            title: table.title.clone(),
            scale_type: table.scale_type.clone(),
            x_label: table.x_label.clone(),
            y_label: table.y_label.clone(),
            zero_based: table.zero_based,
            labels,
            datasets: build.datasets,
            tooltip_callback: tooltip_callback(mode).to_owned(),
            uses_time_scale: build.uses_time_scale,
        })
    }

    /// Assembles a spec and hands it to `renderer`.
    pub fn assemble_and_render<R: SpecRenderer>(
        &self,
        table: &InputTable,
        renderer: &mut R,
    ) -> ChartResult<String> {
        let spec = self.assemble(table)?;
        renderer.render(&spec)
    }
}

/// Assembles a spec with the default palette, radius mapping and formatters.
pub fn assemble_chart_spec(table: &InputTable) -> ChartResult<ChartSpec> {
    SpecAssembler::default().assemble(table)
}
