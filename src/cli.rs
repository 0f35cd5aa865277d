use crate::config::Config;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "lexiscan")]
#[command(
    about = "Compare dictionary lookup strategies and rank tokens by proximity to an anchor word",
    long_about = None
)]
pub struct Cli {
    /// TOML file with run settings; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,
    #[arg(long)]
    pub corpus: Option<PathBuf>,
    #[arg(short, long)]
    pub anchor: Option<String>,
    /// Tracked token, repeatable; replaces the configured list
    #[arg(short, long = "track")]
    pub tracked: Vec<String>,
    #[arg(short, long)]
    pub window: Option<usize>,
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
    #[arg(short, long)]
    pub exact_count: Option<usize>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Loads the config file, if any, and applies flag overrides.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(dictionary) = &self.dictionary {
            config.dictionary.clone_from(dictionary);
        }
        if let Some(corpus) = &self.corpus {
            config.corpus.clone_from(corpus);
        }
        if let Some(anchor) = &self.anchor {
            config.anchor.clone_from(anchor);
        }
        if !self.tracked.is_empty() {
            config.tracked.clone_from(&self.tracked);
        }
        if let Some(window) = self.window {
            config.window = window;
        }
        if let Some(top) = self.top {
            config.top = top;
        }
        if let Some(exact_count) = self.exact_count {
            config.exact_count = exact_count;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "lexiscan", "--corpus", "hobbit.txt", "-a", "Sword", "-t", "bilbo", "-t", "thorin",
            "-w", "10", "--json",
        ]);
        let config = cli.resolve_config().unwrap();

        check!(cli.json);
        check!(config.corpus == PathBuf::from("hobbit.txt"));
        check!(config.dictionary == PathBuf::from("US.txt"));
        check!(config.anchor == "Sword");
        check!(config.tracked == ["bilbo", "thorin"]);
        check!(config.window == 10);
        check!(config.top == 10);
    }

    #[test]
    fn test_no_flags_yield_defaults() {
        let cli = Cli::parse_from(["lexiscan"]);
        check!(cli.resolve_config().unwrap() == Config::default());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
