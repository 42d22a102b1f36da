//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::lookup::StalePolicy;

/// Look up Pokémon from the terminal.
#[derive(Debug, Parser)]
#[command(name = "pokemon-info", version, about)]
pub struct Cli {
    /// Name to look up on startup.
    pub name: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the GraphQL endpoint from the config file.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override what happens to a lookup that finishes after a newer one started.
    #[arg(long, value_enum, value_name = "POLICY")]
    pub stale_completions: Option<StalePolicy>,

    /// Override the log file location.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Path of the config file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Applies command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.api.endpoint = endpoint.clone();
        }
        if let Some(policy) = self.stale_completions {
            config.lookup.stale_completions = policy;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }

    /// Initial name, trimmed; empty when none was given.
    pub fn initial_name(&self) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_overrides() {
        let cli = Cli::parse_from([
            "pokemon-info",
            " pikachu ",
            "--endpoint",
            "http://127.0.0.1:4000/",
            "--stale-completions",
            "apply",
        ]);
        assert_eq!(cli.initial_name(), "pikachu");

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.api.endpoint, "http://127.0.0.1:4000/");
        assert_eq!(config.lookup.stale_completions, StalePolicy::Apply);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn no_args_keeps_config() {
        let cli = Cli::parse_from(["pokemon-info"]);
        assert_eq!(cli.initial_name(), "");

        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn rejects_unknown_policy() {
        let result = Cli::try_parse_from(["pokemon-info", "--stale-completions", "sometimes"]);
        assert!(result.is_err());
    }
}
