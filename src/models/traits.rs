use async_trait::async_trait;

use super::types::ModelResponse;
use crate::utils::MentorError;

/// Core trait that all mentor backends must implement
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Model: Send + Sync {
    /// Send one fully rendered prompt and get a single completion back.
    /// No retries, no caching; any transport or provider error surfaces
    /// as `MentorError::Upstream`.
    async fn complete(&self, prompt: &str) -> Result<ModelResponse, MentorError>;

    /// Get the name of the model
    fn name(&self) -> &str;
}
