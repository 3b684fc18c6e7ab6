//! Colour schemes, font scales, backgrounds and layouts.
//!
//! Style settings are stored as plain identifiers so that a preference file
//! written by an older or newer build still loads: unknown identifiers fall
//! back to the defaults when they are resolved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InfographicError, Result};

/// A named palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub id: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub colors: [&'static str; 3],
    pub text_color: &'static str,
    pub light_bg: &'static str,
}

pub const COLOR_SCHEMES: [ColorScheme; 6] = [
    ColorScheme {
        id: "blue",
        primary: "#3B82F6",
        secondary: "#1E40AF",
        colors: ["#EBF8FF", "#3B82F6", "#1E40AF"],
        text_color: "#1E40AF",
        light_bg: "#EBF8FF",
    },
    ColorScheme {
        id: "green",
        primary: "#10B981",
        secondary: "#047857",
        colors: ["#ECFDF5", "#10B981", "#047857"],
        text_color: "#047857",
        light_bg: "#ECFDF5",
    },
    ColorScheme {
        id: "purple",
        primary: "#8B5CF6",
        secondary: "#7C3AED",
        colors: ["#F3E8FF", "#8B5CF6", "#7C3AED"],
        text_color: "#7C3AED",
        light_bg: "#F3E8FF",
    },
    ColorScheme {
        id: "orange",
        primary: "#F59E0B",
        secondary: "#D97706",
        colors: ["#FEF3C7", "#F59E0B", "#D97706"],
        text_color: "#D97706",
        light_bg: "#FEF3C7",
    },
    ColorScheme {
        id: "red",
        primary: "#EF4444",
        secondary: "#DC2626",
        colors: ["#FEE2E2", "#EF4444", "#DC2626"],
        text_color: "#DC2626",
        light_bg: "#FEE2E2",
    },
    ColorScheme {
        id: "gray",
        primary: "#6B7280",
        secondary: "#374151",
        colors: ["#F9FAFB", "#6B7280", "#374151"],
        text_color: "#374151",
        light_bg: "#F9FAFB",
    },
];

/// Look up a colour scheme, falling back to blue.
pub fn color_scheme(id: &str) -> &'static ColorScheme {
    COLOR_SCHEMES
        .iter()
        .find(|scheme| scheme.id == id)
        .unwrap_or(&COLOR_SCHEMES[0])
}

impl ColorScheme {
    /// Colours for chart datasets: translucent fills and opaque borders.
    pub fn chart_colors(&self) -> ChartColors {
        ChartColors {
            background_color: self
                .colors
                .iter()
                .filter_map(|hex| hex_to_rgba(hex, 0.8))
                .collect(),
            border_color: self.colors.iter().map(|hex| hex.to_string()).collect(),
            primary_color: self.primary.to_string(),
            secondary_color: self.secondary.to_string(),
        }
    }
}

/// Dataset colours derived from a [`ColorScheme`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartColors {
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
    pub primary_color: String,
    pub secondary_color: String,
}

impl ChartColors {
    /// Cycle the fill colours over `n` data points.
    pub fn backgrounds(&self, n: usize) -> Vec<String> {
        cycle(&self.background_color, n)
    }

    /// Cycle the border colours over `n` data points.
    pub fn borders(&self, n: usize) -> Vec<String> {
        cycle(&self.border_color, n)
    }
}

fn cycle(colors: &[String], n: usize) -> Vec<String> {
    if colors.is_empty() {
        return Vec::new();
    }
    colors.iter().cycle().take(n).cloned().collect()
}

/// Convert `#RRGGBB` to `rgba(r, g, b, alpha)`.
///
/// Returns `None` when the string is not six hex digits (the leading `#` is
/// optional).
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Option<String> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);
    Some(format!("rgba({r}, {g}, {b}, {alpha})"))
}

/// CSS font sizes for one scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontSizes {
    pub id: &'static str,
    pub base: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub small: &'static str,
}

pub const FONT_SIZES: [FontSizes; 4] = [
    FontSizes {
        id: "sm",
        base: "0.875rem",
        title: "1.25rem",
        subtitle: "1rem",
        small: "0.75rem",
    },
    FontSizes {
        id: "base",
        base: "1rem",
        title: "1.5rem",
        subtitle: "1.125rem",
        small: "0.875rem",
    },
    FontSizes {
        id: "lg",
        base: "1.125rem",
        title: "1.875rem",
        subtitle: "1.25rem",
        small: "1rem",
    },
    FontSizes {
        id: "xl",
        base: "1.25rem",
        title: "2.25rem",
        subtitle: "1.5rem",
        small: "1.125rem",
    },
];

/// Look up a font scale, falling back to `base`.
pub fn font_sizes(id: &str) -> &'static FontSizes {
    FONT_SIZES
        .iter()
        .find(|sizes| sizes.id == id)
        .unwrap_or(&FONT_SIZES[1])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Solid,
    Gradient,
    Pattern,
}

impl Background {
    pub const ALL: [Background; 3] = [Background::Solid, Background::Gradient, Background::Pattern];

    pub fn id(&self) -> &'static str {
        match self {
            Background::Solid => "solid",
            Background::Gradient => "gradient",
            Background::Pattern => "pattern",
        }
    }

    /// Resolve an identifier, falling back to a gradient.
    pub fn from_id(id: &str) -> Self {
        id.parse().unwrap_or(Background::Gradient)
    }

    /// CSS declarations for this background under `scheme`.
    pub fn css(&self, scheme: &ColorScheme) -> String {
        match self {
            Background::Solid => "background-color: #ffffff".to_string(),
            Background::Gradient => format!(
                "background: linear-gradient(135deg, {} 0%, #ffffff 100%)",
                scheme.light_bg
            ),
            Background::Pattern => format!(
                "background-color: #ffffff; background-image: radial-gradient({} 1px, transparent 1px); background-size: 20px 20px",
                scheme.colors[0]
            ),
        }
    }
}

impl FromStr for Background {
    type Err = InfographicError;

    fn from_str(s: &str) -> Result<Self> {
        Background::ALL
            .into_iter()
            .find(|background| background.id() == s)
            .ok_or_else(|| InfographicError::invalid_input(format!("unknown background: {s}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Grid,
    Column,
    Flow,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Grid, Layout::Column, Layout::Flow];

    pub fn id(&self) -> &'static str {
        match self {
            Layout::Grid => "grid",
            Layout::Column => "column",
            Layout::Flow => "flow",
        }
    }

    /// Resolve an identifier, falling back to the grid.
    pub fn from_id(id: &str) -> Self {
        id.parse().unwrap_or(Layout::Grid)
    }

    /// Utility classes arranging the infographic blocks.
    pub fn classes(&self) -> &'static str {
        match self {
            Layout::Grid => "grid grid-cols-1 md:grid-cols-2 gap-6",
            Layout::Column => "flex flex-col space-y-6",
            Layout::Flow => "flex flex-wrap gap-6",
        }
    }
}

impl FromStr for Layout {
    type Err = InfographicError;

    fn from_str(s: &str) -> Result<Self> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.id() == s)
            .ok_or_else(|| InfographicError::invalid_input(format!("unknown layout: {s}")))
    }
}

/// The four user-selectable style settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSettings {
    pub color_scheme: String,
    pub font_size: String,
    pub layout: String,
    pub background_style: String,
}

impl Default for StyleSettings {
    fn default() -> Self {
        StyleSettings {
            color_scheme: "blue".to_string(),
            font_size: "base".to_string(),
            layout: "grid".to_string(),
            background_style: "gradient".to_string(),
        }
    }
}

impl StyleSettings {
    /// Setting names accepted by [`StyleSettings::set`].
    pub const KEYS: [&'static str; 4] = ["colorScheme", "fontSize", "layout", "backgroundStyle"];

    /// Change one setting by its serialized name, rejecting unknown values.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "colorScheme" => {
                if !COLOR_SCHEMES.iter().any(|scheme| scheme.id == value) {
                    return Err(InfographicError::invalid_input(format!(
                        "unknown color scheme: {value}"
                    )));
                }
                self.color_scheme = value.to_string();
            }
            "fontSize" => {
                if !FONT_SIZES.iter().any(|sizes| sizes.id == value) {
                    return Err(InfographicError::invalid_input(format!(
                        "unknown font size: {value}"
                    )));
                }
                self.font_size = value.to_string();
            }
            "layout" => self.layout = value.parse::<Layout>()?.id().to_string(),
            "backgroundStyle" => {
                self.background_style = value.parse::<Background>()?.id().to_string()
            }
            _ => {
                return Err(InfographicError::invalid_input(format!(
                    "unknown style setting: {key} (expected one of {})",
                    Self::KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }

    pub fn scheme(&self) -> &'static ColorScheme {
        color_scheme(&self.color_scheme)
    }

    pub fn fonts(&self) -> &'static FontSizes {
        font_sizes(&self.font_size)
    }

    pub fn background(&self) -> Background {
        Background::from_id(&self.background_style)
    }

    pub fn layout(&self) -> Layout {
        Layout::from_id(&self.layout)
    }

    /// Resolve every identifier into concrete values.
    pub fn resolve(&self) -> ResolvedStyle {
        let scheme = self.scheme();
        ResolvedStyle {
            scheme,
            fonts: self.fonts(),
            background: self.background().css(scheme),
            layout: self.layout().classes(),
        }
    }
}

impl fmt::Display for StyleSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "colorScheme={} fontSize={} layout={} backgroundStyle={}",
            self.color_scheme, self.font_size, self.layout, self.background_style
        )
    }
}

/// Concrete style values applied to a rendered infographic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStyle {
    pub scheme: &'static ColorScheme,
    pub fonts: &'static FontSizes,
    pub background: String,
    pub layout: &'static str,
}
