//! Chat-completion collaborator
//!
//! Setup code depends only on [`CompletionClient`]; [`openai::OpenAiClient`] is
//! the HTTP implementation used by the CLI.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod openai;

/// Chat message author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Transport-level completion failure
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("missing API key: {env_var} not found in environment or {env_file}")]
    MissingApiKey { env_var: String, env_file: String },

    #[error("completion request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("failed to read API key file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode completion response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("completion response contained no text")]
    EmptyResponse,
}

/// Produces a text completion for a message list
pub trait CompletionClient {
    fn complete(&self, messages: &[Message], model: &str) -> Result<String, CompletionError>;
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Returns a canned response and records every request
    #[derive(Debug)]
    pub struct CannedClient {
        response: Option<String>,
        pub requests: RefCell<Vec<(Vec<Message>, String)>>,
    }

    impl CannedClient {
        pub fn responding(text: &str) -> Self {
            Self {
                response: Some(text.to_string()),
                requests: RefCell::new(Vec::new()),
            }
        }

        /// Every call fails as if the transport were down
        pub fn failing() -> Self {
            Self {
                response: None,
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl CompletionClient for CannedClient {
        fn complete(&self, messages: &[Message], model: &str) -> Result<String, CompletionError> {
            self.requests.borrow_mut().push((messages.to_vec(), model.to_string()));
            self.response.clone().ok_or(CompletionError::EmptyResponse)
        }
    }

    #[test]
    fn test_message_serializes_lowercase_role() {
        let json = serde_json::to_string(&Message::system("hi")).unwrap();
        assert_eq!(json, r#"{"role":"system","content":"hi"}"#);
    }
}
