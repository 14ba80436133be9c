use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use recipe_core::SearchScope;

use crate::platform::config::AppConfig;
use crate::platform::logging::LogDestination;

/// Browse, search and read recipes served by a recipe directory server
#[derive(Debug, Parser)]
#[command(name = "recipe-viewer")]
#[command(version)]
#[command(
    long_about = "Loads the recipe directory from the server, then reads commands from stdin: \
a number selects a recipe, /keyword searches, r reloads, q quits."
)]
pub struct Cli {
    /// Server root, e.g. http://localhost:8080
    #[arg(long)]
    pub base_url: Option<String>,

    /// RON configuration file (defaults to ./recipe_viewer.ron when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What a search keyword is matched against
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,

    /// How the queue and recipe detail are printed
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(scope) = self.scope {
            config.search_scope = scope.into();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Titles only
    Title,
    /// Titles, then ingredients (fetches unseen recipes one by one)
    Ingredients,
}

impl From<ScopeArg> for SearchScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Title => SearchScope::TitleOnly,
            ScopeArg::Ingredients => SearchScope::TitleAndIngredients,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Terminal,
    File,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}
