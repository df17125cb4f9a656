use async_trait::async_trait;

use super::ModelError;
use crate::domain::Entity;

#[async_trait]
pub trait EntityExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<Vec<Entity>, ModelError>;
}
