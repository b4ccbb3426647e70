use crate::core::ChartMode;

const PIE_TOOLTIP: &str = r"
var value = data.datasets[0].data[tti.index];
var total = data.datasets[0].data.reduce((a, b) => a + b, 0);
var label = data.labels[tti.index];
var percentage = Math.round(value / total * 100);
return label + ': ' + percentage + '%';
";

const LINE_TOOLTIP: &str = r"
var value = data.datasets[tti.datasetIndex].data[tti.index];
if (value.y) {
    value = value.y;
}
return value;
";

const SCATTER_TOOLTIP: &str = r"
var value = data.datasets[tti.datasetIndex].data[tti.index];
var label = data.datasets[tti.datasetIndex].label;
return (label ? label + ': ' : '') + '(' + value.x + ', ' + value.y + ')';
";

const BAR_TOOLTIP: &str = r"
var value = data.datasets[tti.datasetIndex].data[tti.index];
return value;
";

/// Body of the tooltip label callback `function(tti, data) { ... }`.
///
/// Pie shows a share of the total, line variants the y value, bubbles the
/// `(x, y)` pair prefixed with the series label, and bar the raw value.
#[must_use]
pub fn tooltip_callback(mode: ChartMode) -> &'static str {
    match mode {
        ChartMode::Pie => PIE_TOOLTIP,
        ChartMode::Line | ChartMode::ScatterLine | ChartMode::DenormalisedScatterLine => {
            LINE_TOOLTIP
        }
        ChartMode::BubbleScatter => SCATTER_TOOLTIP,
        ChartMode::Bar => BAR_TOOLTIP,
    }
}

/// Tooltip body for a mode given by name, as renderers receive it.
///
/// Unknown names give an empty body.
#[must_use]
pub fn tooltip_callback_for_name(mode: &str) -> &'static str {
    match mode {
        "pie" => PIE_TOOLTIP,
        "line" | "scatterline" => LINE_TOOLTIP,
        "scatter" => SCATTER_TOOLTIP,
        "bar" => BAR_TOOLTIP,
        _ => "",
    }
}
