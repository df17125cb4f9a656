use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};

use super::dashboard_form::{DashboardForm, FormState};
use crate::domain::{Notice, TextMetrics};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;
use crate::presentation::views::DashboardPage;

pub async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    let page = DashboardPage {
        form: FormState::default(),
        notices: state.analysis_service.models().load_failures().to_vec(),
        metrics: None,
        report: None,
    };
    Html(page.render(state.chart_renderer.as_ref()))
}

/// Re-runs the whole page for one interaction: collect input, compute quick
/// metrics, and analyse only when the trigger was pressed with text present.
#[tracing::instrument(skip(state, multipart))]
pub async fn submit_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut notices = state.analysis_service.models().load_failures().to_vec();

    let mut form = match DashboardForm::from_multipart(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read dashboard form");
            notices.push(Notice::error(format!("تعذر قراءة النموذج: {}", e)));
            let page = DashboardPage {
                form: FormState::default(),
                notices,
                metrics: None,
                report: None,
            };
            return (
                StatusCode::BAD_REQUEST,
                Html(page.render(state.chart_renderer.as_ref())),
            );
        }
    };

    let collected = state.input_collector.collect(form.input_request()).await;
    notices.extend(collected.notices);

    tracing::debug!(
        method = %form.state.method,
        mode = %form.state.mode,
        analyze = form.analyze,
        text = %preview_text(&collected.text),
        "Dashboard interaction"
    );

    let metrics = TextMetrics::from_text(&collected.text);
    let report = if form.analyze {
        state
            .analysis_service
            .analyze(&collected.text, form.state.mode, form.state.options)
            .await
    } else {
        None
    };

    // Decoded upload text is previewed under the file picker.
    let mut form_state = form.state;
    form_state.text = collected.text;

    let page = DashboardPage {
        form: form_state,
        notices,
        metrics,
        report,
    };
    (StatusCode::OK, Html(page.render(state.chart_renderer.as_ref())))
}
