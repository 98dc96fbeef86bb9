use tracing::debug;

use super::memory::ConversationMemory;
use super::transcript::{Exchange, Role, Transcript};
use crate::catalog::{self, Module};
use crate::models::Model;
use crate::prompt::MentorPrompt;
use crate::utils::MentorError;

/// Everything that exists only while a module is selected. Dropped as one
/// unit on reset, so the transcript and the memory buffer can never get out
/// of step with each other.
struct ActiveModule {
    module: &'static Module,
    prompt: MentorPrompt,
    transcript: Transcript,
    memory: ConversationMemory,
}

/// One user's mentoring session.
///
/// Cycles between unselected and active for its whole lifetime: selecting a
/// module starts a fresh conversation, reset returns to the module picker.
/// One instance per logical user; every action runs to completion before the
/// next is accepted.
#[derive(Default)]
pub struct Session {
    active: Option<ActiveModule>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The currently selected module, if any
    pub fn module(&self) -> Option<&'static Module> {
        self.active.as_ref().map(|a| a.module)
    }

    /// Select a module and start a fresh conversation. Only valid while no
    /// module is selected; the name must exist in the catalog.
    pub fn select_module(&mut self, name: &str) -> Result<&'static Module, MentorError> {
        if let Some(active) = &self.active {
            return Err(MentorError::ModuleAlreadySelected(
                active.module.name.to_string(),
            ));
        }

        let module = catalog::lookup(name)?;
        debug!(module = module.name, "module selected");

        self.active = Some(ActiveModule {
            module,
            prompt: MentorPrompt::new(module.domain),
            transcript: Transcript::new(),
            memory: ConversationMemory::new(),
        });
        Ok(module)
    }

    /// Drop the conversation and return to the module picker. Only valid
    /// while a module is selected.
    pub fn reset(&mut self) -> Result<(), MentorError> {
        match self.active.take() {
            Some(active) => {
                debug!(module = active.module.name, "session reset");
                Ok(())
            }
            None => Err(MentorError::NoModuleSelected),
        }
    }

    /// Ask the mentor one question.
    ///
    /// Whitespace-only input is ignored without touching any state. On a
    /// successful completion the user and mentor exchanges are appended to
    /// the transcript and the pair is retained for future prompts; on an
    /// upstream failure nothing is recorded and the question can simply be
    /// resubmitted.
    pub async fn submit_question(
        &mut self,
        model: &dyn Model,
        text: &str,
    ) -> Result<Option<String>, MentorError> {
        let active = self.active.as_mut().ok_or(MentorError::NoModuleSelected)?;

        let question = text.trim();
        if question.is_empty() {
            return Ok(None);
        }

        let prompt = active.prompt.render(&active.memory.render(), question);
        let response = model.complete(&prompt).await?;
        let reply = response.content;

        active.transcript.append(Exchange::new(Role::User, question));
        active.transcript.append(Exchange::new(Role::Mentor, reply.clone()));
        active.memory.remember(question, reply.clone());

        Ok(Some(reply))
    }

    /// The conversation so far, oldest first. Empty while unselected.
    pub fn history(&self) -> &[Exchange] {
        self.active
            .as_ref()
            .map(|a| a.transcript.entries())
            .unwrap_or(&[])
    }

    /// Number of question/answer pairs retained for prompt replay
    pub fn memory_len(&self) -> usize {
        self.active.as_ref().map(|a| a.memory.len()).unwrap_or(0)
    }

    /// Export the transcript as a flat text blob
    pub fn export(&self) -> Result<String, MentorError> {
        match &self.active {
            Some(active) => active.transcript.export(),
            None => Err(MentorError::EmptyTranscript),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REFUSAL_REPLY;
    use crate::models::{MockModel, ModelResponse};
    use pretty_assertions::assert_eq;

    fn reply(text: &str) -> ModelResponse {
        ModelResponse {
            content: text.to_string(),
            usage: None,
            model_name: "mock".to_string(),
        }
    }

    #[test]
    fn test_new_session_is_unselected() {
        let session = Session::new();
        assert!(!session.is_active());
        assert!(session.module().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_select_unknown_module_leaves_state_unchanged() {
        let mut session = Session::new();
        let err = session.select_module("Rust").unwrap_err();
        assert!(matches!(err, MentorError::InvalidModule(_)));
        assert!(!session.is_active());
    }

    #[test]
    fn test_select_module_starts_empty_conversation() {
        let mut session = Session::new();
        let module = session.select_module("Python").unwrap();
        assert_eq!(module.name, "Python");
        assert!(session.is_active());
        assert!(session.history().is_empty());
        assert_eq!(session.memory_len(), 0);
    }

    #[test]
    fn test_select_while_active_is_rejected() {
        let mut session = Session::new();
        session.select_module("Python").unwrap();
        let err = session.select_module("SQL").unwrap_err();
        assert!(matches!(err, MentorError::ModuleAlreadySelected(_)));
        assert_eq!(session.module().unwrap().name, "Python");
    }

    #[test]
    fn test_reset_while_unselected_is_rejected() {
        let mut session = Session::new();
        assert!(matches!(
            session.reset(),
            Err(MentorError::NoModuleSelected)
        ));
    }

    #[tokio::test]
    async fn test_submit_while_unselected_is_rejected() {
        let mut session = Session::new();
        let model = MockModel::new();
        let err = session
            .submit_question(&model, "What is a JOIN?")
            .await
            .unwrap_err();
        assert!(matches!(err, MentorError::NoModuleSelected));
    }

    #[tokio::test]
    async fn test_blank_question_is_a_no_op() {
        let mut session = Session::new();
        session.select_module("Python").unwrap();

        let mut model = MockModel::new();
        model.expect_complete().never();

        assert!(session.submit_question(&model, "").await.unwrap().is_none());
        assert!(session
            .submit_question(&model, "   ")
            .await
            .unwrap()
            .is_none());
        assert!(session.history().is_empty());
        assert_eq!(session.memory_len(), 0);
    }

    #[tokio::test]
    async fn test_successful_submission_appends_one_pair() {
        let mut session = Session::new();
        session.select_module("SQL").unwrap();

        let mut model = MockModel::new();
        model
            .expect_complete()
            .withf(|prompt| prompt.contains("User Question:\nWhat is a JOIN?"))
            .returning(|_| Ok(reply("A JOIN combines rows...")));

        let answer = session
            .submit_question(&model, "What is a JOIN?")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(answer, "A JOIN combines rows...");

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], Exchange::new(Role::User, "What is a JOIN?"));
        assert_eq!(
            history[1],
            Exchange::new(Role::Mentor, "A JOIN combines rows...")
        );
        assert_eq!(session.memory_len(), 1);
    }

    #[tokio::test]
    async fn test_memory_is_replayed_into_later_prompts() {
        let mut session = Session::new();
        session.select_module("Python").unwrap();

        let mut model = MockModel::new();
        model
            .expect_complete()
            .withf(|prompt| {
                prompt.contains("User Question:\nWhat is a list?")
                    && prompt.contains("Conversation History:\n\n")
            })
            .returning(|_| Ok(reply("An ordered collection.")));
        model
            .expect_complete()
            .withf(|prompt| {
                prompt.contains(
                    "Conversation History:\nUser: What is a list?\nMentor: An ordered collection.\n",
                ) && prompt.contains("User Question:\nAnd a tuple?")
            })
            .returning(|_| Ok(reply("An immutable sequence.")));

        session
            .submit_question(&model, "What is a list?")
            .await
            .unwrap();
        session
            .submit_question(&model, "And a tuple?")
            .await
            .unwrap();

        assert_eq!(session.history().len(), 4);
        assert_eq!(session.memory_len(), 2);
    }

    #[tokio::test]
    async fn test_upstream_failure_records_nothing() {
        let mut session = Session::new();
        session.select_module("Python").unwrap();

        let mut model = MockModel::new();
        model
            .expect_complete()
            .times(1)
            .returning(|_| Err(MentorError::Upstream("rate limited".to_string())));

        let err = session
            .submit_question(&model, "What is a dict?")
            .await
            .unwrap_err();
        assert!(matches!(err, MentorError::Upstream(_)));
        assert!(session.history().is_empty());
        assert_eq!(session.memory_len(), 0);
        assert!(session.is_active());

        // The same question can be resubmitted once the backend recovers.
        let mut recovered = MockModel::new();
        recovered
            .expect_complete()
            .returning(|_| Ok(reply("A mapping type.")));
        let answer = session
            .submit_question(&recovered, "What is a dict?")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(answer, "A mapping type.");
        assert_eq!(session.history().len(), 2);
    }

    #[tokio::test]
    async fn test_refusal_reply_lands_verbatim_in_history() {
        let mut session = Session::new();
        session.select_module("Python").unwrap();

        let mut model = MockModel::new();
        model
            .expect_complete()
            .returning(|_| Ok(reply(REFUSAL_REPLY)));

        session
            .submit_question(&model, "What's the capital of France?")
            .await
            .unwrap();

        assert_eq!(session.history()[1].text, REFUSAL_REPLY);
    }

    #[tokio::test]
    async fn test_reset_clears_history_and_memory_together() {
        let mut session = Session::new();
        session.select_module("Power BI").unwrap();

        let mut model = MockModel::new();
        model
            .expect_complete()
            .times(2)
            .returning(|_| Ok(reply("DAX answer.")));

        session.submit_question(&model, "What is DAX?").await.unwrap();
        session
            .submit_question(&model, "What is Power Query?")
            .await
            .unwrap();
        assert_eq!(session.history().len(), 4);

        session.reset().unwrap();
        assert!(!session.is_active());
        assert!(session.history().is_empty());
        assert_eq!(session.memory_len(), 0);
        assert!(matches!(
            session.export(),
            Err(MentorError::EmptyTranscript)
        ));
    }

    #[tokio::test]
    async fn test_export_round_trip() {
        let mut session = Session::new();
        session.select_module("SQL").unwrap();

        let mut model = MockModel::new();
        model
            .expect_complete()
            .returning(|_| Ok(reply("A JOIN combines rows...")));

        session
            .submit_question(&model, "What is a JOIN?")
            .await
            .unwrap();

        assert_eq!(
            session.export().unwrap(),
            "user: What is a JOIN?\n\nmentor: A JOIN combines rows...\n\n"
        );
    }

    #[tokio::test]
    async fn test_history_stays_even_after_submissions() {
        let mut session = Session::new();
        session.select_module("Python").unwrap();

        let mut model = MockModel::new();
        model
            .expect_complete()
            .returning(|_| Ok(reply("answer")));

        for question in ["one", "two", "three"] {
            session.submit_question(&model, question).await.unwrap();
            assert_eq!(session.history().len() % 2, 0);
        }
    }
}
