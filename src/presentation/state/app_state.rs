use std::sync::Arc;

use crate::application::ports::ChartRenderer;
use crate::application::services::{AnalysisService, InputCollector};

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub input_collector: Arc<InputCollector>,
    pub chart_renderer: Arc<dyn ChartRenderer>,
    pub body_limit_bytes: usize,
}
