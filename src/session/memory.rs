/// Buffer of prior question/answer pairs, replayed verbatim into the history
/// slot of every subsequent prompt.
#[derive(Debug, Clone, Default)]
pub struct ConversationMemory {
    pairs: Vec<(String, String)>,
}

impl ConversationMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain one completed question/answer pair
    pub fn remember(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.pairs.push((question.into(), answer.into()));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render the buffer for the prompt's history slot
    pub fn render(&self) -> String {
        let mut history = String::new();
        for (question, answer) in &self.pairs {
            history.push_str(&format!("User: {question}\nMentor: {answer}\n"));
        }
        history
    }
}
