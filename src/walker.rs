//! Theme directory walker
//!
//! Visits every theme folder under the themes root in sorted order and
//! creates the missing palette file from the folder's stylesheet. Failures
//! are confined to the folder that raised them.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use miette::Report;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::{RasifyError, RasifyResult},
    palette::Palette,
    stylesheet,
};

/// What happened to a single theme folder
#[derive(Debug)]
pub enum Outcome {
    /// Palette file written
    Created { path: PathBuf },
    /// Palette rendered but not written (dry run)
    WouldCreate { path: PathBuf },
    /// Palette file already present; left untouched
    SkippedExisting { path: PathBuf },
    /// No stylesheet to derive from
    SkippedNoStylesheet { path: PathBuf },
    /// Reading, rendering or writing failed
    Failed { theme: String, error: Report },
}

/// Per-run counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub created: usize,
    pub skipped_existing: usize,
    pub skipped_no_walker: usize,
    pub errors: usize,
}

impl Summary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Created { .. } | Outcome::WouldCreate { .. } => self.created += 1,
            Outcome::SkippedExisting { .. } => self.skipped_existing += 1,
            Outcome::SkippedNoStylesheet { .. } => self.skipped_no_walker += 1,
            Outcome::Failed { .. } => self.errors += 1,
        }
    }

    /// `0` when every folder succeeded or was skipped, `2` otherwise
    pub fn exit_code(&self) -> u8 {
        if self.errors == 0 {
            0
        } else {
            2
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "created={}, skipped_existing={}, skipped_no_walker={}, errors={}",
            self.created, self.skipped_existing, self.skipped_no_walker, self.errors
        )
    }
}

pub struct Walker {
    config: Config,
}

impl Walker {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Theme folders under the root, sorted by path. Non-directories are ignored.
    pub fn theme_dirs(&self) -> RasifyResult<Vec<PathBuf>> {
        let root = &self.config.themes_dir;
        let entries = fs::read_dir(root).map_err(|e| RasifyError::scan(root, e))?;

        let mut dirs: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();
        Ok(dirs)
    }

    /// Processes every theme folder, passing each outcome to `report`.
    ///
    /// Only a failure to list the themes root is returned as an error.
    pub fn run(&self, mut report: impl FnMut(&Outcome)) -> RasifyResult<Summary> {
        let mut summary = Summary::default();
        for theme_dir in self.theme_dirs()? {
            let outcome = self.process(&theme_dir);
            summary.record(&outcome);
            report(&outcome);
        }
        info!(%summary, "run complete");
        Ok(summary)
    }

    /// Applies the skip rules and, when they pass, derives the palette.
    pub fn process(&self, theme_dir: &Path) -> Outcome {
        let walker_css = theme_dir.join(&self.config.walker_css);
        let colors_rasi = theme_dir.join(&self.config.colors_rasi);

        if colors_rasi.exists() {
            debug!(path = %colors_rasi.display(), "palette exists, skipping");
            return Outcome::SkippedExisting { path: colors_rasi };
        }
        if !walker_css.exists() {
            debug!(path = %walker_css.display(), "no stylesheet, skipping");
            return Outcome::SkippedNoStylesheet { path: walker_css };
        }

        let theme = theme_name(theme_dir);
        match self.generate(&walker_css, &colors_rasi, &theme) {
            Ok(()) if self.config.dry_run => Outcome::WouldCreate { path: colors_rasi },
            Ok(()) => {
                info!(path = %colors_rasi.display(), "palette created");
                Outcome::Created { path: colors_rasi }
            }
            Err(error) => {
                warn!(%theme, %error, "theme failed");
                Outcome::Failed { theme, error }
            }
        }
    }

    fn generate(&self, walker_css: &Path, colors_rasi: &Path, theme: &str) -> RasifyResult<()> {
        let declared = stylesheet::extract(walker_css)?;
        let rendered = Palette::from_declarations(&declared).render(theme);

        if self.config.dry_run {
            return Ok(());
        }
        fs::write(colors_rasi, rendered).map_err(|e| RasifyError::write(colors_rasi, e))?;
        Ok(())
    }
}

fn theme_name(theme_dir: &Path) -> String {
    theme_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const CSS: &str = "\
@define-color background #111111;
@define-color text rgba(205, 214, 244, 1.0);
";

    fn theme(root: &TempDir, name: &str, css: Option<&str>) -> PathBuf {
        let dir = root.path().join(name);
        fs::create_dir(&dir).unwrap();
        if let Some(css) = css {
            fs::write(dir.join("walker.css"), css).unwrap();
        }
        dir
    }

    fn run(config: Config) -> (Summary, Vec<String>) {
        let mut seen = Vec::new();
        let summary = Walker::new(config)
            .run(|outcome| {
                let label = match outcome {
                    Outcome::Created { path } | Outcome::WouldCreate { path } => {
                        format!("create {}", path.parent().unwrap().file_name().unwrap().to_string_lossy())
                    }
                    Outcome::SkippedExisting { .. } => "existing".to_string(),
                    Outcome::SkippedNoStylesheet { .. } => "no-stylesheet".to_string(),
                    Outcome::Failed { theme, .. } => format!("failed {theme}"),
                };
                seen.push(label);
            })
            .unwrap();
        (summary, seen)
    }

    #[test]
    fn test_creates_missing_palette() {
        let root = tempfile::tempdir().unwrap();
        let dir = theme(&root, "mocha", Some(CSS));

        let (summary, seen) = run(Config::new(root.path()));
        assert_eq!(summary.created, 1);
        assert_eq!(summary.exit_code(), 0);
        assert_eq!(seen, vec!["create mocha"]);

        let written = fs::read_to_string(dir.join("colors.rasi")).unwrap();
        assert!(written.starts_with("/* Auto-generated from walker.css for theme: mocha */\n"));
        assert!(written.contains("    background:     #111111FF;\n"));
        assert!(written.contains("    foreground:     #CDD6F4FF;\n"));
        assert!(written.contains("    urgent:         #F28FADFF;\n"));
    }

    #[test]
    fn test_second_run_never_overwrites() {
        let root = tempfile::tempdir().unwrap();
        let dir = theme(&root, "mocha", Some(CSS));

        run(Config::new(root.path()));
        fs::write(dir.join("colors.rasi"), "hand edited").unwrap();

        let (summary, _) = run(Config::new(root.path()));
        assert_eq!(
            summary,
            Summary {
                created: 0,
                skipped_existing: 1,
                skipped_no_walker: 0,
                errors: 0,
            }
        );
        assert_eq!(fs::read_to_string(dir.join("colors.rasi")).unwrap(), "hand edited");
    }

    #[test]
    fn test_existing_palette_checked_before_stylesheet() {
        let root = tempfile::tempdir().unwrap();
        let dir = theme(&root, "bare", None);
        fs::write(dir.join("colors.rasi"), "").unwrap();

        let (summary, _) = run(Config::new(root.path()));
        assert_eq!(summary.skipped_existing, 1);
        assert_eq!(summary.skipped_no_walker, 0);
    }

    #[test]
    fn test_missing_stylesheet_is_a_skip() {
        let root = tempfile::tempdir().unwrap();
        theme(&root, "empty", None);

        let (summary, seen) = run(Config::new(root.path()));
        assert_eq!(summary.skipped_no_walker, 1);
        assert_eq!(summary.errors, 0);
        assert_eq!(seen, vec!["no-stylesheet"]);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let dir = theme(&root, "mocha", Some(CSS));

        let (summary, seen) = run(Config::new(root.path()).dry_run(true));
        assert_eq!(summary.created, 1);
        assert_eq!(seen, vec!["create mocha"]);
        assert!(!dir.join("colors.rasi").exists());
    }

    #[test]
    fn test_failure_is_isolated() {
        let root = tempfile::tempdir().unwrap();
        let broken = theme(&root, "a-broken", None);
        // a directory where the stylesheet should be cannot be read as a file
        fs::create_dir(broken.join("walker.css")).unwrap();
        theme(&root, "b-good", Some(CSS));

        let (summary, seen) = run(Config::new(root.path()));
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.created, 1);
        assert_eq!(summary.exit_code(), 2);
        assert_eq!(seen, vec!["failed a-broken", "create b-good"]);
    }

    #[test]
    fn test_sorted_order_and_files_ignored() {
        let root = tempfile::tempdir().unwrap();
        theme(&root, "zenburn", Some(CSS));
        theme(&root, "dracula", Some(CSS));
        theme(&root, "nord", Some(CSS));
        fs::write(root.path().join("README.md"), "not a theme").unwrap();

        let (summary, seen) = run(Config::new(root.path()));
        assert_eq!(summary.created, 3);
        assert_eq!(seen, vec!["create dracula", "create nord", "create zenburn"]);
    }

    #[test]
    fn test_custom_filenames() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("custom");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("style.css"), CSS).unwrap();

        let config = Config {
            walker_css: "style.css".to_string(),
            colors_rasi: "palette.rasi".to_string(),
            ..Config::new(root.path())
        };
        let (summary, _) = run(config);
        assert_eq!(summary.created, 1);
        assert!(dir.join("palette.rasi").exists());
    }

    #[test]
    fn test_summary_display() {
        let summary = Summary {
            created: 2,
            skipped_existing: 1,
            skipped_no_walker: 3,
            errors: 0,
        };
        assert_eq!(
            summary.to_string(),
            "created=2, skipped_existing=1, skipped_no_walker=3, errors=0"
        );
    }
}
