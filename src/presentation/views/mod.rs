mod input_panel;
mod metrics_panel;
mod notices;
mod page;
mod results;
mod sidebar;
mod styles;

pub use page::DashboardPage;
