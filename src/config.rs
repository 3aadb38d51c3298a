//! Command line arguments and the resolved run configuration

use clap::Parser;
use std::path::PathBuf;

use crate::error::{RasifyError, RasifyResult};

/// Generate missing colors.rasi from walker.css for each theme folder.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Directory containing theme folders
    #[arg(long, default_value = ".")]
    pub themes_dir: PathBuf,

    /// Walker stylesheet filename inside each theme folder
    #[arg(long, default_value = "walker.css")]
    pub walker_css: String,

    /// Rofi palette filename to create inside each theme folder
    #[arg(long, default_value = "colors.rasi")]
    pub colors_rasi: String,

    /// Show what would be done without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Log filter directive implied by `--verbose`
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Resolves the themes directory and freezes the run configuration.
    pub fn into_config(self) -> RasifyResult<Config> {
        let expanded = expand_home(self.themes_dir);
        if !expanded.is_dir() {
            return Err(RasifyError::themes_dir(expanded).into());
        }
        let themes_dir = expanded
            .canonicalize()
            .map_err(|_| RasifyError::themes_dir(&expanded))?;

        Ok(Config {
            themes_dir,
            walker_css: self.walker_css,
            colors_rasi: self.colors_rasi,
            dry_run: self.dry_run,
        })
    }
}

/// Expands a leading `~`; other paths, including non-UTF-8 ones, pass through.
fn expand_home(path: PathBuf) -> PathBuf {
    if !path.to_string_lossy().starts_with('~') {
        return path;
    }
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

/// Resolved settings for one run over a themes directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub themes_dir: PathBuf,
    pub walker_css: String,
    pub colors_rasi: String,
    pub dry_run: bool,
}

impl Config {
    /// Configuration with default filenames for the given themes directory
    pub fn new(themes_dir: impl Into<PathBuf>) -> Self {
        Self {
            themes_dir: themes_dir.into(),
            walker_css: "walker.css".to_string(),
            colors_rasi: "colors.rasi".to_string(),
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
