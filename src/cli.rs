use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, TranslatorProvider};
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(author, version, about = "Translate Korean text in source/header files in place", long_about = None)]
pub struct Args {
    /// Root directory to scan
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// File extensions to include (default: .cpp .h)
    #[arg(short, long, num_args = 0..)]
    pub extensions: Option<Vec<String>>,

    /// Show files that would change without writing modifications
    #[arg(long)]
    pub dry_run: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Translation backend
    #[arg(short, long, value_enum)]
    pub provider: Option<Provider>,

    /// Language of the embedded text
    #[arg(long)]
    pub source_lang: Option<String>,

    /// Language to translate into
    #[arg(long)]
    pub target_lang: Option<String>,

    /// Write the effective configuration to this file and exit
    #[arg(long, value_name = "PATH")]
    pub save_config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Google,
    Ollama,
}

impl From<Provider> for TranslatorProvider {
    fn from(provider: Provider) -> Self {
        match provider {
            Provider::Google => TranslatorProvider::Google,
            Provider::Ollama => TranslatorProvider::Ollama,
        }
    }
}

impl Args {
    /// Load the configuration file (or defaults) with command line overrides applied
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        self.apply_to(&mut config);
        Ok(config)
    }

    /// Apply command line overrides on top of the loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(extensions) = &self.extensions {
            config.scan.extensions = extensions.clone();
        }
        if let Some(provider) = self.provider {
            config.translate.provider = provider.into();
        }
        if let Some(source) = &self.source_lang {
            config.translate.source_language = source.clone();
        }
        if let Some(target) = &self.target_lang {
            config.translate.target_language = target.clone();
        }
    }
}
