use thiserror::Error;

/// Failures while loading or checking a catalog bundle.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("download catalog: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("invalid catalog ({} problems): {}", .0.len(), .0.join("; "))]
    Invalid(Vec<String>),
}

/// A filter value that does not name anything in its field's domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} `{value}`")]
pub struct SelectionError {
    pub field: &'static str,
    pub value: String,
}

impl SelectionError {
    pub fn new(field: &'static str, value: &str) -> Self {
        SelectionError {
            field,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("quiz is already finished")]
    Finished,
    #[error("option {0} is out of range")]
    OptionOutOfRange(usize),
    #[error("question {0} already answered")]
    AlreadyAnswered(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("unknown topic `{0}`")]
    UnknownTopic(String),
    #[error("topic `{topic}` is locked until `{missing}` is completed")]
    Locked { topic: String, missing: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid CHEMREF_ADDR `{value}`: {source}")]
    Addr {
        value: String,
        source: std::net::AddrParseError,
    },
}
