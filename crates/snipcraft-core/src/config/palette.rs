//! Per-type display colors

use colored::{Color, ColoredString, Colorize};
use std::collections::BTreeMap;

/// Color used for types without an entry
const DEFAULT_COLOR: Color = Color::Magenta;

const BUILTIN: &[(&str, Color)] = &[
    ("html", Color::Red),
    ("css", Color::Blue),
    ("scss", Color::BrightMagenta),
    ("js", Color::Yellow),
    ("ts", Color::Cyan),
    ("json", Color::Green),
];

/// Type → color lookup
#[derive(Debug, Clone)]
pub struct Palette {
    colors: BTreeMap<String, Color>,
}

impl Palette {
    /// Built-in colors overlaid with `overrides`; unknown color names are skipped.
    pub fn new(overrides: &BTreeMap<String, String>) -> Self {
        let mut colors: BTreeMap<String, Color> = BUILTIN
            .iter()
            .map(|(kind, color)| (kind.to_string(), *color))
            .collect();

        for (kind, name) in overrides {
            match name.parse::<Color>() {
                Ok(color) => {
                    colors.insert(kind.to_lowercase(), color);
                }
                Err(()) => {
                    tracing::warn!(kind = %kind, color = %name, "unknown color name, ignoring");
                }
            }
        }

        Self { colors }
    }

    pub fn color(&self, kind: &str) -> Color {
        self.colors.get(kind).copied().unwrap_or(DEFAULT_COLOR)
    }

    /// `text` painted in the color of `kind`
    pub fn paint(&self, kind: &str, text: &str) -> ColoredString {
        text.color(self.color(kind))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(&BTreeMap::new())
    }
}
