use thiserror::Error;

/// Main error type for Mentor
#[derive(Error, Debug)]
pub enum MentorError {
    #[error("unknown module: {0}")]
    InvalidModule(String),

    #[error("a module is already selected: {0}")]
    ModuleAlreadySelected(String),

    #[error("no module selected")]
    NoModuleSelected,

    #[error("transcript is empty, nothing to export")]
    EmptyTranscript,

    #[error("mentor backend error: {0}")]
    Upstream(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
