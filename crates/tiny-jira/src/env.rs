//! Process inputs behind traits: environment variables and stdin.
//!
//! [`crate::config`] resolves credentials through [`EnvReader`], and
//! [`crate::source::JsonSource`] reads `--input -` through [`StdinReader`].
//! Tests pass [`MockEnv`] and [`MockStdin`] instead of the real process.

use std::collections::HashMap;
use std::io::{self, IsTerminal, Read};

pub trait StdinReader: Send + Sync {
    /// True when nothing is piped in.
    fn is_terminal(&self) -> bool;

    fn read_to_string(&self) -> io::Result<String>;
}

pub trait EnvReader: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdin;

impl StdinReader for RealStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_to_string(&self) -> io::Result<String> {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text)?;
        Ok(text)
    }
}

/// Reads `std::env`. Values that are not valid unicode count as unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Stdin with fixed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockStdin {
    /// An interactive terminal; reads yield nothing.
    Terminal,
    /// Piped input.
    Piped(String),
}

impl MockStdin {
    pub fn terminal() -> Self {
        MockStdin::Terminal
    }

    pub fn piped(content: impl Into<String>) -> Self {
        MockStdin::Piped(content.into())
    }
}

impl StdinReader for MockStdin {
    fn is_terminal(&self) -> bool {
        matches!(self, MockStdin::Terminal)
    }

    fn read_to_string(&self) -> io::Result<String> {
        match self {
            MockStdin::Terminal => Ok(String::new()),
            MockStdin::Piped(content) => Ok(content.clone()),
        }
    }
}

/// A fixed set of environment variables.
#[derive(Debug, Clone, Default)]
pub struct MockEnv(HashMap<String, String>);

impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MockEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MockEnv(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_stdin_reads_nothing() {
        let stdin = MockStdin::terminal();
        assert!(stdin.is_terminal());
        assert_eq!(stdin.read_to_string().unwrap(), "");
    }

    #[test]
    fn piped_stdin_returns_content() {
        let stdin = MockStdin::piped(r#"{"issues": []}"#);
        assert!(!stdin.is_terminal());
        assert_eq!(stdin.read_to_string().unwrap(), r#"{"issues": []}"#);
    }

    #[test]
    fn mock_env_lookup() {
        let env: MockEnv = [("JIRA_EMAIL", "ada@example.com")].into_iter().collect();
        assert_eq!(env.var("JIRA_EMAIL").as_deref(), Some("ada@example.com"));
        assert_eq!(env.var("JIRA_API_TOKEN"), None);

        let env = env.with_var("JIRA_API_TOKEN", "t");
        assert_eq!(env.var("JIRA_API_TOKEN").as_deref(), Some("t"));
    }
}
