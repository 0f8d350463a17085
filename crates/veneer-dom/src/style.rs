//! Inline Style
//!
//! Declarations set through `element.style`, with box shorthands expanded
//! into their longhands, and the length values the engine resolves them to.

use std::collections::HashMap;

/// Font size used when nothing on the ancestor chain sets one
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Inline style declaration block
#[derive(Debug, Clone, Default)]
pub struct StyleDeclaration {
    properties: HashMap<String, String>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property. `margin`, `padding` and `border-width` expand to
    /// their four sides following the CSS 1-to-4 value rule.
    pub fn set(&mut self, property: &str, value: &str) {
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim();

        let sides = match property.as_str() {
            "margin" => Some(["margin-top", "margin-right", "margin-bottom", "margin-left"]),
            "padding" => Some(["padding-top", "padding-right", "padding-bottom", "padding-left"]),
            "border-width" => Some([
                "border-top-width",
                "border-right-width",
                "border-bottom-width",
                "border-left-width",
            ]),
            _ => None,
        };

        match sides {
            Some(longhands) => {
                let values = expand_sides(value);
                for (longhand, v) in longhands.iter().zip(values) {
                    self.properties.insert(longhand.to_string(), v.to_string());
                }
            }
            None => {
                self.properties.insert(property, value.to_string());
            }
        }
    }

    /// Get a longhand property
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .get(&property.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.properties.remove(&property.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Top, right, bottom, left from a 1-4 value shorthand
fn expand_sides(value: &str) -> [&str; 4] {
    let parts: Vec<&str> = value.split_whitespace().collect();
    match parts[..] {
        [] => ["0", "0", "0", "0"],
        [all] => [all, all, all, all],
        [vertical, horizontal] => [vertical, horizontal, vertical, horizontal],
        [top, horizontal, bottom] => [top, horizontal, bottom, horizontal],
        [top, right, bottom, left, ..] => [top, right, bottom, left],
    }
}

/// Initial value of a property that has not been set
pub fn initial_value(property: &str) -> &'static str {
    match property {
        "width" | "height" | "top" | "left" | "right" | "bottom" => "auto",
        "position" => "static",
        "display" => "inline",
        "font-size" => "medium",
        _ => "0",
    }
}

/// A CSS length
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    Pt(f64),
    Pc(f64),
    In(f64),
    Cm(f64),
    Mm(f64),
    Em(f64),
    Rem(f64),
    Percent(f64),
    Auto,
}

impl Length {
    /// Parse a length. Unitless numbers are pixels; keywords other than
    /// `auto` and malformed values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        if value == "auto" {
            return Some(Length::Auto);
        }

        let split = value
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(value.len());
        let (number, unit) = value.split_at(split);
        let n: f64 = number.parse().ok()?;

        let length = match unit {
            "" | "px" => Length::Px(n),
            "pt" => Length::Pt(n),
            "pc" => Length::Pc(n),
            "in" => Length::In(n),
            "cm" => Length::Cm(n),
            "mm" => Length::Mm(n),
            "em" => Length::Em(n),
            "rem" => Length::Rem(n),
            "%" => Length::Percent(n),
            _ => return None,
        };
        Some(length)
    }

    /// Resolve to pixels. `auto` resolves to `None`.
    pub fn to_px(self, font_size: f64, root_font_size: f64, percent_base: f64) -> Option<f64> {
        let px = match self {
            Length::Px(n) => n,
            Length::Pt(n) => n * 96.0 / 72.0,
            Length::Pc(n) => n * 16.0,
            Length::In(n) => n * 96.0,
            Length::Cm(n) => n * 96.0 / 2.54,
            Length::Mm(n) => n * 96.0 / 25.4,
            Length::Em(n) => n * font_size,
            Length::Rem(n) => n * root_font_size,
            Length::Percent(n) => n * percent_base / 100.0,
            Length::Auto => return None,
        };
        Some(px)
    }
}
