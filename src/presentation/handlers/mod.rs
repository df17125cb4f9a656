mod api;
mod dashboard;
mod dashboard_form;
mod health;

pub use api::{analyze_handler, metrics_handler};
pub use dashboard::{dashboard_handler, submit_handler};
pub use dashboard_form::{DashboardForm, FormState, UPLOADED_TEXT_FIELD};
pub use health::health_handler;
