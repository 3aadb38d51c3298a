use miette::Diagnostic;
use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
    path::PathBuf,
};

#[derive(Debug, Diagnostic)]
pub enum RasifyError {
    #[diagnostic(
        code(rasify::themes_dir),
        help("pass a directory holding one folder per theme with --themes-dir")
    )]
    ThemesDir { path: PathBuf },

    #[diagnostic(code(rasify::scan))]
    ScanDir { path: PathBuf, msg: String },

    #[diagnostic(code(rasify::read))]
    ReadStylesheet { path: PathBuf, msg: String },

    #[diagnostic(code(rasify::write))]
    WritePalette { path: PathBuf, msg: String },
}

pub type RasifyResult<T> = miette::Result<T>;

impl Display for RasifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RasifyError::ThemesDir { path } => {
                write!(f, "Themes dir not found: {}", path.display())
            }
            RasifyError::ScanDir { path, msg } => {
                write!(f, "Failed to list {}: {}", path.display(), msg)
            }
            RasifyError::ReadStylesheet { path, msg } => {
                write!(f, "Failed to read {}: {}", path.display(), msg)
            }
            RasifyError::WritePalette { path, msg } => {
                write!(f, "Failed to write {}: {}", path.display(), msg)
            }
        }
    }
}

impl Error for RasifyError {}

impl RasifyError {
    pub fn themes_dir(path: impl Into<PathBuf>) -> Self {
        Self::ThemesDir { path: path.into() }
    }

    pub fn scan(path: impl Into<PathBuf>, msg: impl Display) -> Self {
        Self::ScanDir {
            path: path.into(),
            msg: msg.to_string(),
        }
    }

    pub fn read(path: impl Into<PathBuf>, msg: impl Display) -> Self {
        Self::ReadStylesheet {
            path: path.into(),
            msg: msg.to_string(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, msg: impl Display) -> Self {
        Self::WritePalette {
            path: path.into(),
            msg: msg.to_string(),
        }
    }
}
