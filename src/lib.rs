//! chart-spec: turns tabular data into chart specifications.
//!
//! The crate decides, from the shape of a table alone, which chart mode is
//! valid and how to split the table into plotted series. The resulting
//! [`ChartSpec`] carries pre-formatted tokens only and is handed to a
//! [`render::SpecRenderer`] that emits the charting library's config text.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartSpec, SpecAssembler, SpecAssemblerConfig, assemble_chart_spec};
pub use crate::core::{ChartKind, ChartMode, InputTable};
pub use error::{ChartError, ChartResult};
