use super::openai::OpenAiModel;
use super::traits::Model;
use crate::app::Config;
use crate::utils::MentorError;

/// Factory for creating mentor backend instances
pub struct ModelFactory;

impl ModelFactory {
    /// Create the backend named by the configuration. All configured models
    /// speak the OpenAI chat-completions format, so the model id is passed
    /// straight through to the endpoint.
    pub fn create(config: &Config) -> Result<Box<dyn Model>, MentorError> {
        let model = OpenAiModel::new(config)?;
        Ok(Box::new(model))
    }
}
