//! Configuration: a YAML file with environment-variable fallback.
//!
//! ```yaml
//! endpoint: "https://your-domain.atlassian.net"
//! user: "you@example.com"
//! token: "file:/home/you/.jira-token"   # or the token itself
//! project: "PROJ"
//! columns: "key,summary,status"
//! theme: "theme.yml"
//! ```
//!
//! Values left unset (missing or empty) in the file are taken from
//! `JIRA_BASE_URL`, `JIRA_EMAIL` and `JIRA_API_TOKEN`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::env::EnvReader;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".config.yml";

pub const ENV_ENDPOINT: &str = "JIRA_BASE_URL";
pub const ENV_USER: &str = "JIRA_EMAIL";
pub const ENV_TOKEN: &str = "JIRA_API_TOKEN";

const TOKEN_FILE_PREFIX: &str = "file:";

const HELP: &str = "\
Please provide them via .config.yml or environment variables:
  .config.yml format:
    endpoint: \"https://your-domain.atlassian.net\"
    user: \"you@example.com\"
    token: \"your_api_token\"
  OR set environment variables:
    export JIRA_BASE_URL=\"https://your-domain.atlassian.net\"
    export JIRA_EMAIL=\"you@example.com\"
    export JIRA_API_TOKEN=\"your_api_token\"";

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("token file not found: {path}")]
    TokenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing configuration: {}\n{}", .0.join(", "), HELP)]
    Missing(Vec<String>),
}

/// The file as written. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    endpoint: Option<String>,
    user: Option<String>,
    token: Option<String>,
    project: Option<String>,
    columns: Option<String>,
    theme: Option<PathBuf>,
}

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL, without a trailing `/`.
    pub endpoint: Option<String>,
    pub user: Option<String>,
    pub token: Option<String>,
    pub project: Option<String>,
    /// Default column list for `list`.
    pub columns: Option<String>,
    /// Optional theme file layered over the built-in styles.
    pub theme: Option<PathBuf>,
}

/// Everything needed to talk to the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub endpoint: String,
    pub user: String,
    pub token: String,
}

impl Config {
    /// Loads `path` if it exists, then fills gaps from the environment.
    ///
    /// A missing file is not an error; a file that cannot be read or parsed is.
    pub fn load(path: &Path, env: &dyn EnvReader) -> Result<Config, ConfigError> {
        let file = if path.exists() {
            debug!(path = %path.display(), "reading config file");
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse_file(&content, path)?
        } else {
            debug!(path = %path.display(), "no config file, using environment only");
            ConfigFile::default()
        };
        Config::resolve(file, env)
    }

    /// Parses YAML content and fills gaps from the environment.
    pub fn from_yaml(yaml: &str, env: &dyn EnvReader) -> Result<Config, ConfigError> {
        let file = parse_file(yaml, Path::new("<inline>"))?;
        Config::resolve(file, env)
    }

    fn resolve(file: ConfigFile, env: &dyn EnvReader) -> Result<Config, ConfigError> {
        let token = match non_empty(file.token) {
            Some(value) => match value.strip_prefix(TOKEN_FILE_PREFIX) {
                Some(path) => Some(read_token_file(Path::new(path))?),
                None => Some(value),
            },
            None => None,
        };

        let endpoint = non_empty(file.endpoint)
            .or_else(|| non_empty(env.var(ENV_ENDPOINT)))
            .map(|url| url.trim_end_matches('/').to_string());

        Ok(Config {
            endpoint,
            user: non_empty(file.user).or_else(|| non_empty(env.var(ENV_USER))),
            token: non_empty(token).or_else(|| non_empty(env.var(ENV_TOKEN))),
            project: non_empty(file.project),
            columns: non_empty(file.columns),
            theme: file.theme,
        })
    }

    /// Returns the credentials, or lists every missing one.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        if let (Some(endpoint), Some(user), Some(token)) = (&self.endpoint, &self.user, &self.token)
        {
            return Ok(Credentials {
                endpoint: endpoint.clone(),
                user: user.clone(),
                token: token.clone(),
            });
        }

        let missing = [
            ("JIRA_BASE_URL/endpoint", &self.endpoint),
            ("JIRA_EMAIL/user", &self.user),
            ("JIRA_API_TOKEN/token", &self.token),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name.to_string())
        .collect();
        Err(ConfigError::Missing(missing))
    }

    /// The token for display: eight asterisks, or `(not set)`.
    pub fn masked_token(&self) -> &'static str {
        if self.token.is_some() {
            "********"
        } else {
            "(not set)"
        }
    }

    /// A human-readable dump. The token is never shown.
    pub fn describe(&self) -> String {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "(not set)".to_string());
        let mut lines = vec![
            format!("Endpoint: {}", show(&self.endpoint)),
            format!("User: {}", show(&self.user)),
            format!("Token: {}", self.masked_token()),
        ];
        if let Some(project) = &self.project {
            lines.push(format!("Project: {project}"));
        }
        if let Some(columns) = &self.columns {
            lines.push(format!("Columns: {columns}"));
        }
        if let Some(theme) = &self.theme {
            lines.push(format!("Theme: {}", theme.display()));
        }
        lines.join("\n")
    }
}

fn parse_file(content: &str, path: &Path) -> Result<ConfigFile, ConfigError> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read_token_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path)
        .map(|t| t.trim().to_string())
        .map_err(|source| ConfigError::TokenFile {
            path: path.to_path_buf(),
            source,
        })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
