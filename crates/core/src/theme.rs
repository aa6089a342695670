//! Colour palettes and composite-shape geometry for the two deck themes.
//!
//! A theme only carries colours and the small offsets used by composite
//! helpers (cards, flow steps). Slide layout itself lives with the content.

use crate::color::RgbColor;
use serde::{Deserialize, Serialize};

/// Named colour roles used by the drawing helpers and slide content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: RgbColor,
    pub card_fill: RgbColor,
    pub card_border: RgbColor,
    pub purple: RgbColor,
    pub blue: RgbColor,
    pub teal: RgbColor,
    pub pink: RgbColor,
    pub gold: RgbColor,
    pub green: RgbColor,
    /// Headings and default single-line text.
    pub text_primary: RgbColor,
    /// Body copy and default multi-line text.
    pub text_secondary: RgbColor,
    /// Captions and de-emphasised labels.
    pub text_muted: RgbColor,
    /// Text drawn on top of accent or banner fills.
    pub on_accent: RgbColor,
    /// Fill of "before" comparison panels.
    pub before_fill: RgbColor,
    /// Fill of "after" comparison panels.
    pub after_fill: RgbColor,
    pub banner_primary: RgbColor,
    pub banner_secondary: RgbColor,
    pub banner_caption: RgbColor,
}

/// Offset of one text line inside a composite, in inches relative to the
/// composite's origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSlot {
    /// Horizontal inset from the left edge; also trimmed from the right for
    /// cards, whose width is the card width minus twice the inset.
    pub inset: f64,
    pub top: f64,
    pub height: f64,
    pub font_size: f64,
}

/// Geometry of `add_card`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardLayout {
    pub icon: LineSlot,
    pub title: LineSlot,
    pub description: LineSlot,
    pub corner_radius: f64,
}

/// Geometry of `add_flow_step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowLayout {
    pub width: f64,
    pub height: f64,
    pub icon: LineSlot,
    pub title: LineSlot,
    pub description: LineSlot,
    pub arrow_top: f64,
    pub arrow_width: f64,
    pub corner_radius: f64,
}

/// Everything theme-dependent the canvas needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub palette: Palette,
    pub card: CardLayout,
    pub flow: FlowLayout,
}

impl Theme {
    /// Dark navy background with bright accents.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            palette: Palette {
                background: RgbColor::new(0x0B, 0x0D, 0x17),
                card_fill: RgbColor::new(0x16, 0x18, 0x2D),
                card_border: RgbColor::new(0x25, 0x28, 0x45),
                purple: RgbColor::new(0x7C, 0x6A, 0xFF),
                blue: RgbColor::new(0x4D, 0xA8, 0xFF),
                teal: RgbColor::new(0x3E, 0xDD, 0xC6),
                pink: RgbColor::new(0xFF, 0x6B, 0x9D),
                gold: RgbColor::new(0xFF, 0xB7, 0x4D),
                green: RgbColor::new(0x66, 0xDE, 0x93),
                text_primary: RgbColor::new(0xFF, 0xFF, 0xFF),
                text_secondary: RgbColor::new(0xB0, 0xB0, 0xC0),
                text_muted: RgbColor::new(0x70, 0x70, 0x90),
                on_accent: RgbColor::new(0xFF, 0xFF, 0xFF),
                before_fill: RgbColor::new(0x40, 0x1A, 0x28),
                after_fill: RgbColor::new(0x14, 0x3A, 0x30),
                banner_primary: RgbColor::new(0x3A, 0x35, 0x7A),
                banner_secondary: RgbColor::new(0x24, 0x5A, 0x5A),
                banner_caption: RgbColor::new(0xDD, 0xDD, 0xEE),
            },
            card: CardLayout {
                icon: LineSlot { inset: 0.25, top: 0.2, height: 0.5, font_size: 28.0 },
                title: LineSlot { inset: 0.15, top: 0.7, height: 0.4, font_size: 13.0 },
                description: LineSlot { inset: 0.15, top: 1.1, height: 0.8, font_size: 10.0 },
                corner_radius: 0.04,
            },
            flow: FlowLayout {
                width: 1.6,
                height: 1.5,
                icon: LineSlot { inset: 0.0, top: 0.1, height: 0.45, font_size: 24.0 },
                title: LineSlot { inset: 0.05, top: 0.55, height: 0.35, font_size: 10.0 },
                description: LineSlot { inset: 0.05, top: 0.9, height: 0.5, font_size: 8.0 },
                arrow_top: 0.4,
                arrow_width: 0.4,
                corner_radius: 0.06,
            },
        }
    }

    /// White background with deeper accents.
    pub fn white() -> Self {
        Self {
            name: "white".to_string(),
            palette: Palette {
                background: RgbColor::new(0xFF, 0xFF, 0xFF),
                card_fill: RgbColor::new(0xF5, 0xF5, 0xF9),
                card_border: RgbColor::new(0xE0, 0xE0, 0xE8),
                purple: RgbColor::new(0x5B, 0x4C, 0xDB),
                blue: RgbColor::new(0x2E, 0x86, 0xDE),
                teal: RgbColor::new(0x0F, 0xA3, 0x8E),
                pink: RgbColor::new(0xE0, 0x40, 0x6E),
                gold: RgbColor::new(0xD4, 0x8A, 0x20),
                green: RgbColor::new(0x28, 0xA7, 0x5B),
                text_primary: RgbColor::new(0x22, 0x22, 0x33),
                text_secondary: RgbColor::new(0x55, 0x55, 0x70),
                text_muted: RgbColor::new(0x88, 0x88, 0x9A),
                on_accent: RgbColor::new(0xFF, 0xFF, 0xFF),
                before_fill: RgbColor::new(0xFD, 0xED, 0xF0),
                after_fill: RgbColor::new(0xE8, 0xF8, 0xF0),
                banner_primary: RgbColor::new(0x5B, 0x4C, 0xDB),
                banner_secondary: RgbColor::new(0x0F, 0xA3, 0x8E),
                banner_caption: RgbColor::new(0xE8, 0xE8, 0xF0),
            },
            card: CardLayout {
                icon: LineSlot { inset: 0.2, top: 0.15, height: 0.45, font_size: 26.0 },
                title: LineSlot { inset: 0.12, top: 0.6, height: 0.4, font_size: 12.0 },
                description: LineSlot { inset: 0.12, top: 0.95, height: 0.8, font_size: 10.0 },
                corner_radius: 0.04,
            },
            flow: FlowLayout {
                width: 1.6,
                height: 1.5,
                icon: LineSlot { inset: 0.0, top: 0.1, height: 0.4, font_size: 22.0 },
                title: LineSlot { inset: 0.05, top: 0.5, height: 0.35, font_size: 10.0 },
                description: LineSlot { inset: 0.05, top: 0.85, height: 0.5, font_size: 8.0 },
                arrow_top: 0.35,
                arrow_width: 0.45,
                corner_radius: 0.06,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
