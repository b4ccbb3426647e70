pub mod classifier;
pub mod color;
pub mod datasets;
pub mod formatter_context;
pub mod labels;
pub mod primitives;
pub mod scale;
pub mod tooltip;
pub mod types;

pub use classifier::{ChartMode, LibraryChartType, classify};
pub use color::{ColorPalette, ColorSpec};
pub use datasets::{Dataset, DatasetBuild, DatasetBuilder, DatasetData, Point};
pub use formatter_context::{LabelPreprocessorFn, TimestampFormatterFn, TokenFormatters};
pub use labels::marshal_labels;
pub use primitives::{format_number, format_radius, format_timestamp};
pub use scale::{BubbleRadiusBehavior, scatter_radius};
pub use tooltip::{tooltip_callback, tooltip_callback_for_name};
pub use types::{ChartKind, InputTable, TableShape};
