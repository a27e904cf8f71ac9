//! Canvas element text and ellipse configuration.
//!
//! `*Config` types describe what a panel author configured (dimension
//! references for text and colors). `*Data` types are the resolved values an
//! element renders with. Sizes of `0` or missing mean "auto size".

use std::fmt;
use std::str::FromStr;

use ratatui::layout::{Alignment, Rect};
use serde::{Deserialize, Serialize};

/// Shortcut positions for placing an element inside its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuickPlacement {
    #[serde(rename = "top")]
    Top,
    #[serde(rename = "bottom")]
    Bottom,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "hcenter")]
    HorizontalCenter,
    #[serde(rename = "vcenter")]
    VerticalCenter,
}

impl QuickPlacement {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuickPlacement::Top => "top",
            QuickPlacement::Bottom => "bottom",
            QuickPlacement::Left => "left",
            QuickPlacement::Right => "right",
            QuickPlacement::HorizontalCenter => "hcenter",
            QuickPlacement::VerticalCenter => "vcenter",
        }
    }

    /// Place a `width` x `height` box inside `area`
    ///
    /// The placement pins one axis; the other axis is centered. The box is
    /// shrunk to fit when it is larger than the area.
    pub fn place(&self, area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        let centered_x = area.x + (area.width - width) / 2;
        let centered_y = area.y + (area.height - height) / 2;

        let (x, y) = match self {
            QuickPlacement::Top => (centered_x, area.y),
            QuickPlacement::Bottom => (centered_x, area.bottom() - height),
            QuickPlacement::Left => (area.x, centered_y),
            QuickPlacement::Right => (area.right() - width, centered_y),
            QuickPlacement::HorizontalCenter | QuickPlacement::VerticalCenter => {
                (centered_x, centered_y)
            }
        };
        Rect::new(x, y, width, height)
    }
}

impl fmt::Display for QuickPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuickPlacement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(QuickPlacement::Top),
            "bottom" => Ok(QuickPlacement::Bottom),
            "left" => Ok(QuickPlacement::Left),
            "right" => Ok(QuickPlacement::Right),
            "hcenter" => Ok(QuickPlacement::HorizontalCenter),
            "vcenter" => Ok(QuickPlacement::VerticalCenter),
            other => Err(format!("Unknown placement: {}", other)),
        }
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl From<Align> for Alignment {
    fn from(align: Align) -> Self {
        match align {
            Align::Left => Alignment::Left,
            Align::Center => Alignment::Center,
            Align::Right => Alignment::Right,
        }
    }
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VAlign {
    /// Row offset of a block of `lines` rows inside a box of `height` rows
    pub fn offset(&self, height: u16, lines: u16) -> u16 {
        let free = height.saturating_sub(lines);
        match self {
            VAlign::Top => 0,
            VAlign::Middle => free / 2,
            VAlign::Bottom => free,
        }
    }
}

/// Link attached to a text element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkData {
    pub title: String,
    pub href: String,
}

/// Resolved text for a canvas element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextData {
    pub text: Option<String>,
    pub color: Option<String>,
    pub size: Option<f64>,
    pub align: Align,
    pub valign: VAlign,
    pub links: Option<Vec<LinkData>>,
}

impl TextData {
    pub fn is_auto_sized(&self) -> bool {
        self.size.map_or(true, |size| size == 0.0)
    }
}

/// Configured text for a canvas element
///
/// `T` is the text dimension reference and `C` the color dimension
/// reference; both are resolved against live data by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>, C: Deserialize<'de>"))]
pub struct TextConfig<T, C> {
    #[serde(default)]
    pub text: Option<T>,
    #[serde(default)]
    pub color: Option<C>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub align: Align,
    #[serde(default)]
    pub valign: VAlign,
}

impl<T, C> Default for TextConfig<T, C> {
    fn default() -> Self {
        Self {
            text: None,
            color: None,
            size: None,
            align: Align::default(),
            valign: VAlign::default(),
        }
    }
}

impl<T, C> TextConfig<T, C> {
    /// Resolve dimension references into renderable text data
    pub fn resolve<FT, FC>(&self, resolve_text: FT, resolve_color: FC) -> TextData
    where
        FT: Fn(&T) -> Option<String>,
        FC: Fn(&C) -> Option<String>,
    {
        TextData {
            text: self.text.as_ref().and_then(resolve_text),
            color: self.color.as_ref().and_then(resolve_color),
            size: self.size,
            align: self.align,
            valign: self.valign,
            links: None,
        }
    }
}

/// Configured ellipse element: text plus fill, border and width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>, C: Deserialize<'de>"))]
pub struct EllipseConfig<T, C> {
    #[serde(flatten)]
    pub text: TextConfig<T, C>,
    #[serde(default)]
    pub background_color: Option<C>,
    #[serde(default)]
    pub border_color: Option<C>,
    #[serde(default)]
    pub width: Option<f64>,
}

impl<T, C> EllipseConfig<T, C> {
    pub fn resolve<FT, FC>(&self, resolve_text: FT, resolve_color: FC) -> EllipseData
    where
        FT: Fn(&T) -> Option<String>,
        FC: Fn(&C) -> Option<String>,
    {
        EllipseData {
            background_color: self.background_color.as_ref().and_then(&resolve_color),
            border_color: self.border_color.as_ref().and_then(&resolve_color),
            width: self.width,
            text: self.text.resolve(resolve_text, resolve_color),
        }
    }
}

/// Resolved ellipse element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipseData {
    #[serde(flatten)]
    pub text: TextData,
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub width: Option<f64>,
}
