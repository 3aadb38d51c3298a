//! Color normalization for palette generation.
//!
//! Provides:
//! - RGBA color representation
//! - Parsing of the textual forms found in theme stylesheets
//!   (`#RRGGBB`, `#RRGGBBAA`, `rgb(...)`, `rgba(...)`)
//! - Canonical `#RRGGBBAA` rendering
//! - Console color theming through owo-colors

use owo_colors::OwoColorize;
use regex::Regex;
use std::{
    fmt::{self, Display},
    sync::LazyLock,
};

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("hex pattern is valid")
});

static FUNCTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^rgba?\(\s*
            (?P<r>-?[0-9]+)\s*,\s*
            (?P<g>-?[0-9]+)\s*,\s*
            (?P<b>-?[0-9]+)\s*
            (?:,\s*(?P<a>[0-9]*\.?[0-9]+)\s*)?
        \)\s*$",
    )
    .expect("functional pattern is valid")
});

/// Represents an RGBA color with optional alpha channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    /// Create a new RGB color with full opacity
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new RGBA color with specified alpha
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// The whole string must match; six-digit input is treated as opaque.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = HEX_RE.captures(hex)?.get(1)?.as_str();
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

        let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Some(Self::rgba(r, g, b, a))
    }

    /// Parses `rgb(r, g, b)` or `rgba(r, g, b, a)`, keyword case-insensitive.
    ///
    /// Channels are clamped into `0..=255`. An alpha of at most `1.0` is a
    /// fraction of full opacity; anything larger is already on the byte scale.
    pub fn from_functional(value: &str) -> Option<Self> {
        let caps = FUNCTIONAL_RE.captures(value)?;

        let r = clamp_channel(&caps["r"]);
        let g = clamp_channel(&caps["g"]);
        let b = clamp_channel(&caps["b"]);
        let a = match caps.name("a") {
            Some(alpha) => scale_alpha(alpha.as_str().parse().ok()?),
            None => 255,
        };

        Some(Self::rgba(r, g, b, a))
    }

    /// Canonical `#RRGGBBAA` form, uppercase
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Get the RGB components
    pub fn rgb_components(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Normalizes a stylesheet color value.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is not
/// one of the four recognized forms; callers keep the raw text in that case.
pub fn normalize(value: &str) -> Option<Color> {
    let value = value.trim();
    Color::from_hex(value).or_else(|| Color::from_functional(value))
}

fn clamp_channel(digits: &str) -> u8 {
    match digits.parse::<i64>() {
        Ok(n) => n.clamp(0, 255) as u8,
        Err(_) if digits.starts_with('-') => 0,
        Err(_) => 255,
    }
}

fn scale_alpha(alpha: f64) -> u8 {
    let scaled = if alpha <= 1.0 { alpha * 255.0 } else { alpha };
    scaled.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Extension trait for applying report colors to strings with owo-colors
pub trait ThemeColorize: OwoColorize {
    /// Apply success status color
    #[inline]
    fn success(self) -> String
    where
        Self: Sized + Display,
    {
        let (r, g, b) = theme::status::SUCCESS.rgb_components();
        format!("{}", self.truecolor(r, g, b))
    }

    /// Apply info status color
    #[inline]
    fn info(self) -> String
    where
        Self: Sized + Display,
    {
        let (r, g, b) = theme::status::INFO.rgb_components();
        format!("{}", self.truecolor(r, g, b))
    }

    /// Apply error status color
    #[inline]
    fn error(self) -> String
    where
        Self: Sized + Display,
    {
        let (r, g, b) = theme::status::ERROR.rgb_components();
        format!("{}", self.truecolor(r, g, b))
    }

    /// Apply muted text color
    #[inline]
    fn muted(self) -> String
    where
        Self: Sized + Display,
    {
        let (r, g, b) = theme::text::SECONDARY.rgb_components();
        format!("{}", self.truecolor(r, g, b))
    }
}

impl<T: OwoColorize + Display> ThemeColorize for T {}

/// Theme color constants
pub mod theme {
    /// Fallback palette used when a stylesheet names no candidate for a slot
    pub mod defaults {
        use super::super::Color;

        pub const BACKGROUND: Color = Color::rgb(30, 29, 47); // #1E1D2F
        pub const BACKGROUND_ALT: Color = Color::rgb(40, 40, 57); // #282839
        pub const FOREGROUND: Color = Color::rgb(217, 224, 238); // #D9E0EE
        pub const SELECTED: Color = Color::rgb(122, 162, 247); // #7AA2F7
        pub const ACTIVE: Color = Color::rgb(171, 233, 179); // #ABE9B3
        pub const URGENT: Color = Color::rgb(242, 143, 173); // #F28FAD
    }

    /// Console status colors
    pub mod status {
        use super::super::Color;

        pub const INFO: Color = Color::rgb(41, 187, 255); // #29BBFF
        pub const SUCCESS: Color = Color::rgb(35, 209, 139); // #23D18B
        pub const ERROR: Color = Color::rgb(255, 46, 95); // #FF2E5F
    }

    /// Text hierarchy
    pub mod text {
        use super::super::Color;

        pub const SECONDARY: Color = Color::rgb(139, 148, 158); // #8B949E
    }
}
