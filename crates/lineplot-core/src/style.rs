// File: crates/lineplot-core/src/style.rs
// Summary: Per-series draw style parsed from compact format strings ("o--", "r-", "x").
// Notes:
// - Grammar: optional color letter, optional marker, optional line, any order.
// - With neither line nor marker the series draws a solid line.

use std::str::FromStr;

use serde::Deserialize;
use skia_safe as skia;

use crate::error::StyleError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Point,
    Square,
    TriangleUp,
    TriangleDown,
    Cross,
    Plus,
    Star,
}

impl Marker {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'o' => Marker::Circle,
            '.' => Marker::Point,
            's' => Marker::Square,
            '^' => Marker::TriangleUp,
            'v' => Marker::TriangleDown,
            'x' => Marker::Cross,
            '+' => Marker::Plus,
            '*' => Marker::Star,
            _ => return None,
        })
    }

    /// Outline-only markers are stroked; the others are filled.
    pub fn is_stroked(self) -> bool {
        matches!(self, Marker::Cross | Marker::Plus)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineKind {
    /// On/off dash intervals in multiples of the stroke width; `None` for solid.
    pub fn dash_pattern(self) -> Option<&'static [f32]> {
        const DASHED: &[f32] = &[3.7, 1.6];
        const DOTTED: &[f32] = &[1.0, 1.65];
        const DASH_DOT: &[f32] = &[6.4, 1.6, 1.0, 1.6];
        match self {
            LineKind::Solid => None,
            LineKind::Dashed => Some(DASHED),
            LineKind::Dotted => Some(DOTTED),
            LineKind::DashDot => Some(DASH_DOT),
        }
    }
}

/// Named single-letter colors.
pub fn color_for_letter(c: char) -> Option<skia::Color> {
    Some(match c {
        'b' => skia::Color::from_rgb(0, 0, 255),
        'g' => skia::Color::from_rgb(0, 128, 0),
        'r' => skia::Color::from_rgb(255, 0, 0),
        'c' => skia::Color::from_rgb(0, 191, 191),
        'm' => skia::Color::from_rgb(191, 0, 191),
        'y' => skia::Color::from_rgb(191, 191, 0),
        'k' => skia::Color::from_rgb(0, 0, 0),
        'w' => skia::Color::from_rgb(255, 255, 255),
        _ => return None,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Style {
    /// Explicit color; `None` takes the next palette color.
    pub color: Option<skia::Color>,
    pub marker: Option<Marker>,
    pub line: Option<LineKind>,
}

impl Style {
    /// Markers joined by dashed connectors.
    pub const MARKERS_DASHED: Style = Style {
        color: None,
        marker: Some(Marker::Circle),
        line: Some(LineKind::Dashed),
    };
}

impl Default for Style {
    fn default() -> Self {
        Self::MARKERS_DASHED
    }
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = Style { color: None, marker: None, line: None };
        let chars: Vec<char> = s.trim().chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();
            let line = match (c, next) {
                ('-', Some('-')) => Some((LineKind::Dashed, 2)),
                ('-', Some('.')) => Some((LineKind::DashDot, 2)),
                ('-', _) => Some((LineKind::Solid, 1)),
                (':', _) => Some((LineKind::Dotted, 1)),
                _ => None,
            };
            if let Some((kind, width)) = line {
                set_once(&mut style.line, kind, s, "line")?;
                i += width;
                continue;
            }
            if let Some(marker) = Marker::from_char(c) {
                set_once(&mut style.marker, marker, s, "marker")?;
            } else if let Some(color) = color_for_letter(c) {
                set_once(&mut style.color, color, s, "color")?;
            } else {
                return Err(StyleError::UnknownChar(c));
            }
            i += 1;
        }
        if style.line.is_none() && style.marker.is_none() {
            style.line = Some(LineKind::Solid);
        }
        Ok(style)
    }
}

impl TryFrom<String> for Style {
    type Error = StyleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, src: &str, what: &'static str) -> Result<(), StyleError> {
    if slot.is_some() {
        return Err(StyleError::Duplicate(src.to_string(), what));
    }
    *slot = Some(value);
    Ok(())
}
