use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;

use crate::application::services::{InputRequest, Upload};
use crate::domain::{AnalysisMode, ChartKind, DisplayOptions, InputMethod, UploadedFile};

/// Hidden field holding the decoded text of an earlier upload.
pub const UPLOADED_TEXT_FIELD: &str = "uploaded_text";

/// Widget values that survive a round trip so the page re-renders with the
/// user's selections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub mode: AnalysisMode,
    pub method: InputMethod,
    pub options: DisplayOptions,
    pub text: String,
    pub url: String,
}

/// One submission of the dashboard form.
#[derive(Default)]
pub struct DashboardForm {
    pub state: FormState,
    pub upload: Option<Upload>,
    /// Text decoded from a file sent in an earlier submission.
    pub carried_text: String,
    pub fetch_url: bool,
    pub analyze: bool,
}

impl DashboardForm {
    /// Checkboxes that are absent from a submission are off.
    pub async fn from_multipart(multipart: &mut Multipart) -> Result<Self, MultipartError> {
        let mut form = DashboardForm::default();
        form.state.options = DisplayOptions {
            show_confidence: false,
            show_stats: false,
            show_visualizations: false,
            chart_kind: ChartKind::Bar,
        };

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if name == "file" {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await?;
                if !filename.is_empty() {
                    let file = UploadedFile::new(filename, content_type, data.len() as u64);
                    form.upload = Some(Upload {
                        file,
                        data: data.to_vec(),
                    });
                }
                continue;
            }

            let value = field.text().await?;
            match name.as_str() {
                "mode" => form.state.mode = parse_or_default(&value, "mode"),
                "input_method" => form.state.method = parse_or_default(&value, "input_method"),
                "chart_kind" => form.state.options.chart_kind = parse_or_default(&value, "chart_kind"),
                "text" => form.state.text = value,
                "url" => form.state.url = value,
                UPLOADED_TEXT_FIELD => form.carried_text = value,
                "show_confidence" => form.state.options.show_confidence = true,
                "show_stats" => form.state.options.show_stats = true,
                "show_visualizations" => form.state.options.show_visualizations = true,
                "fetch_url" => form.fetch_url = true,
                "analyze" => form.analyze = true,
                other => tracing::debug!(field = other, "Ignoring unknown form field"),
            }
        }

        Ok(form)
    }

    /// Upload mode has no textarea, so the text it hands on is whatever an
    /// earlier upload decoded.
    pub fn input_request(&mut self) -> InputRequest {
        let text = match self.state.method {
            InputMethod::Upload => self.carried_text.clone(),
            _ => self.state.text.clone(),
        };
        InputRequest {
            method: self.state.method,
            text,
            upload: self.upload.take(),
            url: self.state.url.clone(),
            fetch_url: self.fetch_url,
        }
    }
}

fn parse_or_default<T>(value: &str, field: &str) -> T
where
    T: std::str::FromStr<Err = String> + Default,
{
    value.parse().unwrap_or_else(|e: String| {
        tracing::warn!(field, error = %e, "Invalid form value, using default");
        T::default()
    })
}
