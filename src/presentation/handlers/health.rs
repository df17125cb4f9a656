use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::ModelAvailability;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub models: ModelAvailability,
    pub chart_backend: String,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let models = state.analysis_service.models().availability();
    let status = if models.classifier && models.summarizer && models.extractor {
        "healthy"
    } else {
        "degraded"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            models,
            chart_backend: state.chart_renderer.name().to_string(),
        }),
    )
}
