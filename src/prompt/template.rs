use crate::constants::REFUSAL_REPLY;

/// Instruction template for a domain-restricted mentor.
///
/// The domain description is spliced into the literal instruction text when
/// the template is built, so the restriction travels inside the prompt itself
/// rather than as a separate request parameter. A new template is built every
/// time the selected module changes. Two slots stay open until render time:
/// the replayed conversation history and the new question.
#[derive(Debug, Clone)]
pub struct MentorPrompt {
    instructions: String,
}

impl MentorPrompt {
    /// Build the fixed instruction text for one domain description
    pub fn new(domain: &str) -> Self {
        let instructions = format!(
            "You are an AI mentor strictly limited to the following domain:\n\
             \n\
             {domain}\n\
             \n\
             STRICT RULES:\n\
             - Answer ONLY questions related to this domain.\n\
             - If the question is outside this domain, respond EXACTLY with:\n\
             \"{REFUSAL_REPLY}\""
        );
        Self { instructions }
    }

    /// Fill the history and question slots and return the full prompt text
    pub fn render(&self, history: &str, question: &str) -> String {
        format!(
            "{}\n\nConversation History:\n{}\n\nUser Question:\n{}\n\nAnswer:\n",
            self.instructions, history, question
        )
    }

    /// The fixed instruction text (without the render-time slots)
    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}
