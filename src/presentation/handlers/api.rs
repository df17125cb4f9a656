use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::AnalysisReport;
use crate::domain::{AnalysisMode, DisplayOptions, TextMetrics};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct MetricsRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct MetricsResponse {
    pub metrics: Option<TextMetrics>,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub mode: AnalysisMode,
    #[serde(default)]
    pub options: DisplayOptions,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub metrics: Option<TextMetrics>,
    pub report: AnalysisReport,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn metrics_handler(Json(request): Json<MetricsRequest>) -> impl IntoResponse {
    let metrics = TextMetrics::from_text(&request.text);
    (StatusCode::OK, Json(MetricsResponse { metrics }))
}

#[tracing::instrument(skip(state, request), fields(mode = %request.mode))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    tracing::debug!(text = %preview_text(&request.text), "Processing analysis request");

    let report = state
        .analysis_service
        .analyze(&request.text, request.mode, request.options)
        .await;

    match report {
        Some(report) => (
            StatusCode::OK,
            Json(AnalyzeResponse {
                metrics: TextMetrics::from_text(&request.text),
                report,
            }),
        )
            .into_response(),
        None => {
            tracing::warn!("Analysis requested without text");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Text is required for analysis".to_string(),
                }),
            )
                .into_response()
        }
    }
}
