use chrono::{DateTime, Local};
use std::fmt;

use crate::constants::EXPORT_TIMESTAMP_FORMAT;
use crate::utils::MentorError;

/// Who said a line in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Mentor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Mentor => write!(f, "mentor"),
        }
    }
}

/// One line of conversation. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub role: Role,
    pub text: String,
}

impl Exchange {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Ordered, append-only conversation log
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<Exchange>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one exchange, preserving insertion order
    pub fn append(&mut self, exchange: Exchange) {
        self.entries.push(exchange);
    }

    pub fn entries(&self) -> &[Exchange] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the whole log as a flat text blob, one `role: text` line per
    /// exchange separated by blank lines, in insertion order. Pure read; the
    /// log is left untouched. Exporting an empty log is an error.
    pub fn export(&self) -> Result<String, MentorError> {
        if self.entries.is_empty() {
            return Err(MentorError::EmptyTranscript);
        }

        let mut blob = String::new();
        for exchange in &self.entries {
            blob.push_str(&format!("{}: {}\n\n", exchange.role, exchange.text));
        }
        Ok(blob)
    }
}

/// Download filename for an exported transcript
pub fn export_filename(module: &str, timestamp: DateTime<Local>) -> String {
    format!(
        "{}_Chat_{}.txt",
        module,
        timestamp.format(EXPORT_TIMESTAMP_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_empty_transcript_fails() {
        let transcript = Transcript::new();
        assert!(matches!(
            transcript.export(),
            Err(MentorError::EmptyTranscript)
        ));
    }

    #[test]
    fn test_export_format_and_order() {
        let mut transcript = Transcript::new();
        transcript.append(Exchange::new(Role::User, "What is a JOIN?"));
        transcript.append(Exchange::new(Role::Mentor, "A JOIN combines rows..."));

        let blob = transcript.export().unwrap();
        assert_eq!(
            blob,
            "user: What is a JOIN?\n\nmentor: A JOIN combines rows...\n\n"
        );
    }

    #[test]
    fn test_export_is_a_pure_read() {
        let mut transcript = Transcript::new();
        transcript.append(Exchange::new(Role::User, "hi"));

        let first = transcript.export().unwrap();
        let second = transcript.export().unwrap();
        assert_eq!(first, second);
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_export_line_count_matches_entries() {
        let mut transcript = Transcript::new();
        for i in 0..3 {
            transcript.append(Exchange::new(Role::User, format!("q{i}")));
            transcript.append(Exchange::new(Role::Mentor, format!("a{i}")));
        }

        let blob = transcript.export().unwrap();
        let lines: Vec<&str> = blob.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "user: q0");
        assert_eq!(lines[5], "mentor: a2");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Mentor.to_string(), "mentor");
    }

    #[test]
    fn test_export_filename_shape() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 7, 14, 30, 5).unwrap();
        assert_eq!(
            export_filename("SQL", timestamp),
            "SQL_Chat_20240307_143005.txt"
        );
    }
}
