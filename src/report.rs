//! Console reporting for a walker run

use std::fmt::Display;

use crate::{
    colors::ThemeColorize,
    walker::{Outcome, Summary},
};

/// Formats walker outcomes as console lines
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    styled: bool,
}

impl Reporter {
    pub fn new(styled: bool) -> Self {
        Self { styled }
    }

    /// Styled only when stdout is a terminal and color was not disabled
    pub fn for_stdout(no_color: bool) -> Self {
        Self::new(!no_color && atty::is(atty::Stream::Stdout))
    }

    /// Console line for an outcome; skips produce none
    pub fn line(&self, outcome: &Outcome) -> Option<String> {
        match outcome {
            Outcome::Created { path } => Some(format!(
                "{} {}",
                self.paint("created:", ThemeColorize::success),
                path.display()
            )),
            Outcome::WouldCreate { path } => Some(format!(
                "{} {}",
                self.paint("[DRY] would create:", ThemeColorize::info),
                path.display()
            )),
            Outcome::Failed { theme, error } => Some(format!(
                "{} {}: {}",
                self.paint("ERROR:", ThemeColorize::error),
                theme,
                error
            )),
            Outcome::SkippedExisting { .. } | Outcome::SkippedNoStylesheet { .. } => None,
        }
    }

    pub fn summary(&self, summary: &Summary) -> String {
        format!("{} {}", self.paint("Done.", ThemeColorize::muted), summary)
    }

    fn paint<T: Display>(&self, text: T, style: impl FnOnce(T) -> String) -> String {
        if self.styled {
            style(text)
        } else {
            text.to_string()
        }
    }
}
