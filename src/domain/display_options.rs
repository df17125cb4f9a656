use serde::{Deserialize, Serialize};

use super::chart::ChartKind;

/// Sidebar toggles controlling which optional parts of a result are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub show_confidence: bool,
    pub show_stats: bool,
    pub show_visualizations: bool,
    pub chart_kind: ChartKind,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_confidence: true,
            show_stats: true,
            show_visualizations: true,
            chart_kind: ChartKind::Bar,
        }
    }
}
