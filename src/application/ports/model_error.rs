/// Failure of a single call into an analysis collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model request failed: {0}")]
    RequestFailed(String),
    #[error("invalid model response: {0}")]
    InvalidResponse(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
}
