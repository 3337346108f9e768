//! Provider identifiers and the provider-agnostic message model.
//!
//! ```rust
//! use pprovider::{Message, Provider, Role};
//!
//! let provider: Provider = "Mistral Ai".parse().expect("display names parse");
//! assert_eq!(provider, Provider::MistralAi);
//! assert_eq!(provider.to_string(), "mistral");
//!
//! let turn = Message::user("Summarize this paragraph");
//! assert_eq!(turn.role, Role::User);
//! ```

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provider {
    OpenAi,
    Gemini,
    #[default]
    MistralAi,
}

impl Provider {
    /// Menu order used by front ends.
    pub const ALL: [Provider; 3] = [Provider::OpenAi, Provider::Gemini, Provider::MistralAi];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::OpenAi => "Open Ai",
            Self::Gemini => "Gemini",
            Self::MistralAi => "Mistral Ai",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
            Self::MistralAi => "mistral",
        }
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown provider '{0}'")]
pub struct ParseProviderError(pub String);

impl FromStr for Provider {
    type Err = ParseProviderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value
            .trim()
            .to_ascii_lowercase()
            .replace([' ', '_', '-'], "");

        match normalized.as_str() {
            "openai" | "gpt" | "chatgpt" => Ok(Self::OpenAi),
            "gemini" | "google" | "vertex" => Ok(Self::Gemini),
            "mistral" | "mistralai" => Ok(Self::MistralAi),
            _ => Err(ParseProviderError(value.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}
