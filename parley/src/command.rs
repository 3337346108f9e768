//! Terminal input parsing.
//!
//! ```rust
//! use parley::{Command, parse_command};
//! use pprovider::Provider;
//!
//! assert_eq!(
//!     parse_command("/provider openai").expect("valid command"),
//!     Command::SelectProvider(Provider::OpenAi)
//! );
//! assert_eq!(
//!     parse_command("Summarize this").expect("prompt"),
//!     Command::Prompt("Summarize this".to_string())
//! );
//! ```

use pprovider::{ParseProviderError, Provider};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Prompt(String),
    SelectProvider(Provider),
    ListProviders,
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '/{0}'; type /help for a list")]
    Unknown(String),
    #[error("usage: /provider <openai|gemini|mistral>")]
    MissingProvider,
    #[error(transparent)]
    InvalidProvider(#[from] ParseProviderError),
}

/// Lines starting with `/` are commands; everything else is a prompt.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }

    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Command::Prompt(line.to_string()));
    };

    let (name, argument) = match rest.split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (rest, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "provider" | "use" => {
            if argument.is_empty() {
                return Err(CommandError::MissingProvider);
            }
            Ok(Command::SelectProvider(argument.parse()?))
        }
        "providers" => Ok(Command::ListProviders),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use pprovider::Provider;

    use super::{Command, CommandError, parse_command};

    #[test]
    fn provider_command_accepts_display_names() {
        assert_eq!(
            parse_command("/provider Mistral Ai").expect("valid"),
            Command::SelectProvider(Provider::MistralAi)
        );
        assert_eq!(
            parse_command("  /use gemini ").expect("valid"),
            Command::SelectProvider(Provider::Gemini)
        );
    }

    #[test]
    fn provider_command_errors() {
        assert_eq!(
            parse_command("/provider"),
            Err(CommandError::MissingProvider)
        );
        assert!(matches!(
            parse_command("/provider claude"),
            Err(CommandError::InvalidProvider(_))
        ));
        assert_eq!(
            parse_command("/bogus"),
            Err(CommandError::Unknown("bogus".to_string()))
        );
    }

    #[test]
    fn plain_lines_are_trimmed_prompts() {
        assert_eq!(parse_command("   ").expect("empty"), Command::Empty);
        assert_eq!(
            parse_command("  hello there \n").expect("prompt"),
            Command::Prompt("hello there".to_string())
        );
        assert_eq!(parse_command("/QUIT").expect("quit"), Command::Quit);
        assert_eq!(parse_command("/providers").expect("list"), Command::ListProviders);
    }
}
