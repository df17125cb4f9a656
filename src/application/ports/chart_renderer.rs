use crate::domain::{ChartKind, ChartSeries};

/// Draws a series as an HTML fragment. One implementation is chosen at
/// startup and shared by every view.
pub trait ChartRenderer: Send + Sync {
    fn name(&self) -> &'static str;
    fn render(&self, series: &ChartSeries, kind: ChartKind) -> String;
}
