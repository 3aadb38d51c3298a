//! Rofi palette resolution and rendering.
//!
//! A [`Palette`] always has all six rofi slots filled. Each slot probes an
//! ordered list of stylesheet names; the first one present wins and is
//! normalized, falling back to a built-in default when none is present.

use std::fmt::{self, Display};

use crate::{
    colors::{normalize, theme::defaults, Color},
    stylesheet::Declarations,
};

/// One of the six named colors of the generated palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Background,
    BackgroundAlt,
    Foreground,
    Selected,
    Active,
    Urgent,
}

impl Slot {
    /// All slots in render order
    pub const ALL: [Slot; 6] = [
        Slot::Background,
        Slot::BackgroundAlt,
        Slot::Foreground,
        Slot::Selected,
        Slot::Active,
        Slot::Urgent,
    ];

    /// Rofi variable name
    pub const fn name(self) -> &'static str {
        match self {
            Slot::Background => "background",
            Slot::BackgroundAlt => "background-alt",
            Slot::Foreground => "foreground",
            Slot::Selected => "selected",
            Slot::Active => "active",
            Slot::Urgent => "urgent",
        }
    }

    /// Stylesheet names probed for this slot, highest priority first
    pub const fn candidates(self) -> &'static [&'static str] {
        match self {
            Slot::Background => &["background"],
            Slot::BackgroundAlt => &["base", "background-alt", "background"],
            Slot::Foreground => &["foreground", "text"],
            Slot::Selected => &["selected-text", "border", "selected"],
            Slot::Active => &["active", "border", "selected-text"],
            Slot::Urgent => &["urgent", "selected-text", "border"],
        }
    }

    pub const fn default_color(self) -> Color {
        match self {
            Slot::Background => defaults::BACKGROUND,
            Slot::BackgroundAlt => defaults::BACKGROUND_ALT,
            Slot::Foreground => defaults::FOREGROUND,
            Slot::Selected => defaults::SELECTED,
            Slot::Active => defaults::ACTIVE,
            Slot::Urgent => defaults::URGENT,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved value of a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotValue {
    /// A recognized or default color
    Color(Color),
    /// A stylesheet value the normalizer did not recognize, kept verbatim
    Raw(String),
}

impl SlotValue {
    fn resolve(raw: &str) -> Self {
        match normalize(raw) {
            Some(color) => SlotValue::Color(color),
            None => SlotValue::Raw(raw.to_string()),
        }
    }
}

impl Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Color(color) => Display::fmt(color, f),
            SlotValue::Raw(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    values: [SlotValue; 6],
}

impl Palette {
    /// Maps stylesheet declarations onto the six slots. Never fails.
    ///
    /// A matched candidate with an empty value counts as unset for its slot.
    pub fn from_declarations(declared: &Declarations) -> Self {
        let values = Slot::ALL.map(|slot| {
            slot.candidates()
                .iter()
                .find_map(|name| declared.get(*name))
                .filter(|raw| !raw.is_empty())
                .map(|raw| SlotValue::resolve(raw))
                .unwrap_or(SlotValue::Color(slot.default_color()))
        });
        Self { values }
    }

    pub fn get(&self, slot: Slot) -> &SlotValue {
        &self.values[slot.index()]
    }

    /// Slots paired with their values, in render order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &SlotValue)> {
        Slot::ALL.into_iter().zip(self.values.iter())
    }

    /// Renders the `colors.rasi` text for a theme.
    pub fn render(&self, theme_name: &str) -> String {
        let body: String = self
            .iter()
            .map(|(slot, value)| format!("    {:<16}{value};\n", format!("{slot}:")))
            .collect();
        format!("/* Auto-generated from walker.css for theme: {theme_name} */\n* {{\n{body}}}\n")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_declarations(&Declarations::new())
    }
}
