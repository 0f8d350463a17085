//! Box-model properties

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LayoutError;

/// A named pixel metric of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoxProperty {
    Height,
    Width,
    Top,
    Left,
    Right,
    Bottom,
    BorderLeft,
    BorderRight,
    BorderTop,
    BorderBottom,
    PaddingLeft,
    PaddingRight,
    PaddingTop,
    PaddingBottom,
    MarginTop,
    MarginBottom,
    MarginLeft,
    MarginRight,
    PaddingBoxWidth,
    PaddingBoxHeight,
    BorderBoxWidth,
    BorderBoxHeight,
    MarginBoxWidth,
    MarginBoxHeight,
}

impl BoxProperty {
    /// Number of properties
    pub const COUNT: usize = 24;

    pub const ALL: [BoxProperty; Self::COUNT] = [
        Self::Height,
        Self::Width,
        Self::Top,
        Self::Left,
        Self::Right,
        Self::Bottom,
        Self::BorderLeft,
        Self::BorderRight,
        Self::BorderTop,
        Self::BorderBottom,
        Self::PaddingLeft,
        Self::PaddingRight,
        Self::PaddingTop,
        Self::PaddingBottom,
        Self::MarginTop,
        Self::MarginBottom,
        Self::MarginLeft,
        Self::MarginRight,
        Self::PaddingBoxWidth,
        Self::PaddingBoxHeight,
        Self::BorderBoxWidth,
        Self::BorderBoxHeight,
        Self::MarginBoxWidth,
        Self::MarginBoxHeight,
    ];

    /// Hyphenated name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Width => "width",
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::BorderLeft => "border-left",
            Self::BorderRight => "border-right",
            Self::BorderTop => "border-top",
            Self::BorderBottom => "border-bottom",
            Self::PaddingLeft => "padding-left",
            Self::PaddingRight => "padding-right",
            Self::PaddingTop => "padding-top",
            Self::PaddingBottom => "padding-bottom",
            Self::MarginTop => "margin-top",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::MarginRight => "margin-right",
            Self::PaddingBoxWidth => "padding-box-width",
            Self::PaddingBoxHeight => "padding-box-height",
            Self::BorderBoxWidth => "border-box-width",
            Self::BorderBoxHeight => "border-box-height",
            Self::MarginBoxWidth => "margin-box-width",
            Self::MarginBoxHeight => "margin-box-height",
        }
    }

    /// Slot in a memo table
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Longhand style property the value is read from, for properties
    /// taken straight from style
    pub(crate) fn style_property(self) -> Option<&'static str> {
        let name = match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::BorderLeft => "border-left-width",
            Self::BorderRight => "border-right-width",
            Self::BorderTop => "border-top-width",
            Self::BorderBottom => "border-bottom-width",
            Self::PaddingLeft => "padding-left",
            Self::PaddingRight => "padding-right",
            Self::PaddingTop => "padding-top",
            Self::PaddingBottom => "padding-bottom",
            Self::MarginTop => "margin-top",
            Self::MarginBottom => "margin-bottom",
            Self::MarginLeft => "margin-left",
            Self::MarginRight => "margin-right",
            _ => return None,
        };
        Some(name)
    }
}

impl fmt::Display for BoxProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoxProperty {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| LayoutError::UnknownProperty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for property in BoxProperty::ALL {
            assert_eq!(property.as_str().parse::<BoxProperty>(), Ok(property));
        }
        assert_eq!("Margin-Box-Width".parse(), Ok(BoxProperty::MarginBoxWidth));
        assert_eq!(
            "outline".parse::<BoxProperty>(),
            Err(LayoutError::UnknownProperty("outline".into()))
        );
    }

    #[test]
    fn test_memo_slots_are_distinct() {
        for (i, property) in BoxProperty::ALL.into_iter().enumerate() {
            assert_eq!(property.index(), i);
        }
    }
}
