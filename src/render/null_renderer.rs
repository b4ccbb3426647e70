use crate::api::ChartSpec;
use crate::error::ChartResult;
use crate::render::SpecRenderer;

/// Renderer that produces no text, used by tests and headless callers.
///
/// It still validates each `ChartSpec` so tests catch broken datasets before a real
/// template backend sees them.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_dataset_count: usize,
    pub last_point_count: usize,
    pub last_label_count: usize,
}

impl SpecRenderer for NullRenderer {
    fn render(&mut self, spec: &ChartSpec) -> ChartResult<String> {
        spec.validate()?;
        self.last_dataset_count = spec.datasets.len();
        self.last_point_count = spec.datasets.iter().map(|ds| ds.data.len()).sum();
        self.last_label_count = spec.labels.len();
        Ok(String::new())
    }
}
