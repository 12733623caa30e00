//! Named cell styles
//!
//! A document carries a registry of named styles ("Normal", "Heading 1",
//! "Good", ...). Clients apply them by name; lookup is case-insensitive, as
//! spreadsheet applications treat style names.

use crate::error::{Error, Result};
use crate::style::{Color, Style, Underline};
use std::collections::HashMap;

/// Registry of named cell styles
#[derive(Debug, Clone)]
pub struct NamedStyles {
    /// Styles keyed by lowercase name, with the display name kept alongside
    styles: HashMap<String, (String, Style)>,
}

impl NamedStyles {
    /// Create a registry holding the built-in styles
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (name, style) in builtin_styles() {
            registry.register(name, style);
        }
        registry
    }

    /// Create a registry with no styles at all
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Define or replace a named style
    pub fn register(&mut self, name: impl Into<String>, style: Style) {
        let name = name.into();
        self.styles.insert(name.to_lowercase(), (name, style));
    }

    /// Look up a style by name
    pub fn get(&self, name: &str) -> Result<&Style> {
        self.styles
            .get(&name.to_lowercase())
            .map(|(_, style)| style)
            .ok_or_else(|| Error::UnknownStyle(name.to_string()))
    }

    /// Check whether a style name is known
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(&name.to_lowercase())
    }

    /// Iterate over display names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.values().map(|(name, _)| name.as_str())
    }

    /// Number of registered styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for NamedStyles {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_styles() -> Vec<(&'static str, Style)> {
    let heading_blue = Color::rgb(31, 73, 125);
    let accent = |r, g, b| Style::new().fill_color(Color::rgb(r, g, b)).font_color(Color::WHITE);

    vec![
        ("Normal", Style::new()),
        ("Title", Style::new().bold(true).font_size(18.0).font_color(heading_blue)),
        ("Heading 1", Style::new().bold(true).font_size(15.0).font_color(heading_blue)),
        ("Heading 2", Style::new().bold(true).font_size(13.0).font_color(heading_blue)),
        ("Heading 3", Style::new().bold(true).font_color(heading_blue)),
        ("Heading 4", Style::new().bold(true).font_color(heading_blue)),
        (
            "Good",
            Style::new()
                .fill_color(Color::rgb(198, 239, 206))
                .font_color(Color::rgb(0, 97, 0)),
        ),
        (
            "Bad",
            Style::new()
                .fill_color(Color::rgb(255, 199, 206))
                .font_color(Color::rgb(156, 0, 6)),
        ),
        (
            "Neutral",
            Style::new()
                .fill_color(Color::rgb(255, 235, 156))
                .font_color(Color::rgb(156, 101, 0)),
        ),
        ("Note", Style::new().fill_color(Color::rgb(255, 255, 204))),
        ("Total", Style::new().bold(true)),
        ("Explanatory Text", Style::new().italic(true).font_color(Color::GRAY)),
        ("Hyperlink", {
            let mut style = Style::new().font_color(Color::rgb(5, 99, 193));
            style.font.underline = Underline::Single;
            style
        }),
        ("Accent1", accent(79, 129, 189)),
        ("Accent2", accent(192, 80, 77)),
        ("Accent3", accent(155, 187, 89)),
        ("Accent4", accent(128, 100, 162)),
        ("Accent5", accent(75, 172, 198)),
        ("Accent6", accent(247, 150, 70)),
    ]
}
