use crate::api::ChartSpec;
use crate::error::ChartResult;
use crate::render::SpecRenderer;

/// Emits the versioned JSON contract of a spec.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSpecRenderer {
    /// Skip the schema envelope and emit the bare spec.
    pub bare: bool,
}

impl SpecRenderer for JsonSpecRenderer {
    fn render(&mut self, spec: &ChartSpec) -> ChartResult<String> {
        spec.validate()?;
        if self.bare {
            spec.to_json_pretty()
        } else {
            spec.to_json_contract_v1_pretty()
        }
    }
}
