use anyhow::{bail, Result};

use crate::models::Model;
use crate::session::Session;

/// One-shot runner: answer a single question for a module and exit.
/// Mirrors the interactive path exactly - same session machinery, same
/// prompt template, same backend - so an answer here matches what the REPL
/// would have produced.
pub struct OneShotRunner {
    model: Box<dyn Model>,
}

impl OneShotRunner {
    pub fn new(model: Box<dyn Model>) -> Self {
        Self { model }
    }

    /// Execute a single question and return the mentor's reply
    pub async fn execute(&self, module: &str, question: &str) -> Result<String> {
        let mut session = Session::new();
        session.select_module(module)?;

        match session
            .submit_question(self.model.as_ref(), question)
            .await?
        {
            Some(reply) => Ok(reply),
            None => bail!("question is empty"),
        }
    }
}
