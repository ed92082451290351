use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }
}

impl FromStr for ThemeKind {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeKind::Light),
            "dark" => Ok(ThemeKind::Dark),
            other => Err(CalendarError::UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub background: Rgb,
    pub text: Rgb,
    pub highlight: Rgb,
    /// Text color of the highlighted day, drawn on top of `highlight`.
    pub highlight_text: Rgb,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            background: Rgb::new(250, 250, 250),
            text: Rgb::new(20, 20, 20),
            highlight: Rgb::new(100, 149, 237),
            highlight_text: Rgb::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            background: Rgb::new(34, 34, 34),
            text: Rgb::new(220, 220, 220),
            highlight: Rgb::new(255, 165, 0),
            highlight_text: Rgb::WHITE,
        }
    }
}

/// Fixed, ordered, non-empty list of themes. Selection is an index into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    themes: Vec<Theme>,
}

impl ThemeSet {
    pub fn new(themes: Vec<Theme>) -> Result<Self, CalendarError> {
        if themes.is_empty() {
            return Err(CalendarError::EmptyThemeSet);
        }
        Ok(Self { themes })
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Wraps out-of-range indices.
    pub fn get(&self, index: usize) -> &Theme {
        &self.themes[index % self.themes.len()]
    }

    pub fn index_of(&self, kind: ThemeKind) -> Option<usize> {
        self.themes.iter().position(|theme| theme.kind == kind)
    }
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self {
            themes: vec![Theme::light(), Theme::dark()],
        }
    }
}
