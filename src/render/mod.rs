mod json_renderer;
mod null_renderer;

pub use json_renderer::JsonSpecRenderer;
pub use null_renderer::NullRenderer;

use crate::api::ChartSpec;
use crate::error::ChartResult;

/// Contract implemented by anything that turns a spec into library config text.
///
/// Renderers receive a fully materialized, deterministic `ChartSpec`, so
/// quoting and axis boilerplate stay isolated from dataset construction.
pub trait SpecRenderer {
    fn render(&mut self, spec: &ChartSpec) -> ChartResult<String>;
}
