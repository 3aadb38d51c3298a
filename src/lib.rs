#![forbid(unsafe_code)]

//! # Rasify
//!
//! Derives rofi `colors.rasi` palettes from walker `walker.css` stylesheets.
//!
//! ## Overview
//!
//! Each theme folder under a themes root is expected to hold a walker
//! stylesheet declaring colors with `@define-color`. For every folder that
//! has the stylesheet but no palette yet, rasify:
//!
//! 1. extracts the color declarations ([`stylesheet::extract`])
//! 2. maps them onto the six rofi slots ([`Palette::from_declarations`]),
//!    normalizing each value to `#RRGGBBAA` ([`colors::normalize`])
//! 3. renders and writes the palette ([`Palette::render`])
//!
//! Existing palettes are never overwritten, so runs are repeatable.
//!
//! ## Example Usage
//!
//! ```rust
//! use rasify::{stylesheet, Palette, Slot};
//!
//! let declared = stylesheet::extract_str(
//!     "@define-color background #1e1e2e;\n@define-color urgent hotpink;\n",
//! );
//! let palette = Palette::from_declarations(&declared);
//!
//! assert_eq!(palette.get(Slot::Background).to_string(), "#1E1E2EFF");
//! // unrecognized values are kept verbatim
//! assert_eq!(palette.get(Slot::Urgent).to_string(), "hotpink");
//! ```
//!
//! Walking a whole themes directory:
//!
//! ```rust,no_run
//! use rasify::{Config, Walker};
//!
//! fn main() -> rasify::RasifyResult<()> {
//!     let walker = Walker::new(Config::new("/usr/share/walker/themes").dry_run(true));
//!     let summary = walker.run(|outcome| println!("{outcome:?}"))?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses [`RasifyResult`] and [`RasifyError`] with diagnostics via
//! `miette`. Only a missing or unreadable themes root is fatal; anything that
//! goes wrong inside a theme folder is reported as [`Outcome::Failed`].

pub use colors::{normalize, Color, ThemeColorize};
pub use config::{Args, Config};
pub use error::{RasifyError, RasifyResult};
pub use palette::{Palette, Slot, SlotValue};
pub use report::Reporter;
pub use walker::{Outcome, Summary, Walker};

/// Color parsing, normalization and console theming
pub mod colors;
/// Command line arguments and run configuration
pub mod config;
/// Error types and handling
pub mod error;
/// Slot mapping and palette rendering
pub mod palette;
/// Console reporting
pub mod report;
/// Stylesheet declaration extraction
pub mod stylesheet;
/// Theme directory traversal
pub mod walker;
