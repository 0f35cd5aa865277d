//! Run configuration loaded from TOML and overridden from the command line.

use crate::error::{ConfigError, Result};
use crate::proximity::DEFAULT_WINDOW;
use crate::token::Token;
use anyhow::Context;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Names tracked for proximity when the configuration does not list any.
pub const DEFAULT_TRACKED: &[&str] = &[
    "frodo", "sam", "bilbo", "gandalf", "boromir", "aragorn", "legolas", "gollum", "pippin",
    "merry", "gimli", "sauron", "saruman", "faramir", "denethor", "treebeard", "elrond",
    "galadriel",
];

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Reference word list, one word per whitespace-separated entry
    pub dictionary: PathBuf,
    /// Corpus text to analyze
    pub corpus: PathBuf,
    /// Token that proximity is measured against
    pub anchor: String,
    /// Tokens scored for proximity, in reporting tie-break order
    pub tracked: Vec<String>,
    /// Maximum token distance for a pair to count as close
    pub window: usize,
    /// Number of most frequent words to report
    pub top: usize,
    /// Report every word seen exactly this many times
    pub exact_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("US.txt"),
            corpus: PathBuf::from("TheLordOfTheRings.txt"),
            anchor: "ring".to_string(),
            tracked: DEFAULT_TRACKED.iter().map(ToString::to_string).collect(),
            window: DEFAULT_WINDOW,
            top: 10,
            exact_count: 64,
        }
    }
}

impl Config {
    /// Parses a TOML configuration file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let path = PathBuf::from(expand_tilde(&path.to_string_lossy()).as_ref());
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;

        config.dictionary = expand_path(&config.dictionary);
        config.corpus = expand_path(&config.corpus);
        Ok(config)
    }

    /// Rejects configurations the analysis cannot honor.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let anchor = self.anchor_token();
        if anchor.is_empty() {
            return Err(ConfigError::EmptyAnchor);
        }
        let tracked = self.tracked_tokens();
        if tracked.iter().any(Token::is_empty) {
            return Err(ConfigError::EmptyTracked);
        }
        if tracked.contains(&anchor) {
            return Err(ConfigError::AnchorTracked(anchor.to_string()));
        }
        if self.top == 0 {
            return Err(ConfigError::ZeroLimit("top"));
        }
        Ok(())
    }

    pub fn anchor_token(&self) -> Token {
        Token::normalize(&self.anchor)
    }

    /// Tracked names as tokens, first occurrence wins on duplicates.
    pub fn tracked_tokens(&self) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::with_capacity(self.tracked.len());
        for name in &self.tracked {
            let token = Token::normalize(name);
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        tokens
    }
}

fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(expand_tilde(&path.to_string_lossy()).as_ref())
}

/// Expand tilde (`~`) in paths to the user's home directory.
///
/// Returns `Cow::Borrowed` if no expansion needed, `Cow::Owned` if expanded.
pub(crate) fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
