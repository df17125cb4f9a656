pub mod charts;
pub mod models;
pub mod observability;
pub mod text_processing;
