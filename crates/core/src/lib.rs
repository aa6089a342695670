//! Core deck model, units, themes and the drawing helpers used to populate
//! slides before they are serialized.

pub mod canvas;
pub mod color;
pub mod error;
pub mod theme;
pub mod types;
pub mod units;

pub use canvas::{Canvas, MultilineOptions, TextOptions};
pub use color::RgbColor;
pub use error::{Error, Result};
pub use theme::{CardLayout, FlowLayout, LineSlot, Palette, Theme};
pub use types::{
    Alignment, Anchor, Border, Deck, DocumentProperties, Paragraph, RectangleStyle, RunStyle,
    Shape, ShapeId, ShapeKind, Slide, TextFrame,
};
pub use units::{inches, pt, Bounds, Emu};
