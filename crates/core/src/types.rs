//! Domain types for a slide deck and the shapes placed on it.

use crate::color::RgbColor;
use crate::units::{inches, Bounds, Emu};
use serde::{Deserialize, Serialize};

/// Default slide width: 13.333 inches (16:9 widescreen).
pub const DEFAULT_SLIDE_WIDTH_IN: f64 = 13.333;

/// Default slide height: 7.5 inches.
pub const DEFAULT_SLIDE_HEIGHT_IN: f64 = 7.5;

/// Font used when a call site does not name one.
pub const DEFAULT_FONT: &str = "Calibri";

/// An entire deck: page size, document properties and slides in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// Page width.
    pub slide_width: Emu,

    /// Page height.
    pub slide_height: Emu,

    /// Properties written to `docProps/core.xml`.
    pub properties: DocumentProperties,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty 13.333 x 7.5 inch deck.
    pub fn new() -> Self {
        Self {
            slide_width: inches(DEFAULT_SLIDE_WIDTH_IN),
            slide_height: inches(DEFAULT_SLIDE_HEIGHT_IN),
            properties: DocumentProperties::default(),
            slides: Vec::new(),
        }
    }

    /// Set the document properties.
    pub fn with_properties(mut self, properties: DocumentProperties) -> Self {
        self.properties = properties;
        self
    }

    /// Append a blank slide and return it for population.
    pub fn add_slide(&mut self) -> &mut Slide {
        let number = self.slides.len() + 1;
        log::debug!("Adding slide {}", number);
        self.slides.push(Slide::new(number));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Descriptive metadata stored in the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProperties {
    pub title: String,
    pub creator: String,
    pub subject: String,
}

impl Default for DocumentProperties {
    fn default() -> Self {
        Self {
            title: "Presentation".to_string(),
            creator: String::new(),
            subject: String::new(),
        }
    }
}

/// A single slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// 1-based slide number.
    pub number: usize,

    /// Solid background fill, if set.
    pub background: Option<RgbColor>,

    /// Shapes in insertion order, which is also z-order.
    pub shapes: Vec<Shape>,

    /// Next id to hand out. Id 1 belongs to the slide's shape tree.
    next_id: u32,
}

impl Slide {
    /// Create an empty slide with the given number.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            background: None,
            shapes: Vec::new(),
            next_id: 2,
        }
    }

    /// Place a shape on top of everything already on the slide.
    pub fn push_shape(&mut self, bounds: Bounds, kind: ShapeKind) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;

        let name = match &kind {
            ShapeKind::RoundedRectangle(_) => format!("Rounded Rectangle {}", id - 1),
            ShapeKind::TextBox(_) => format!("TextBox {}", id - 1),
        };
        log::trace!("Slide {}: placing {} at {:?}", self.number, name, bounds);

        self.shapes.push(Shape {
            id,
            name,
            bounds,
            kind,
        });
        ShapeId(id)
    }

    /// Look up a shape by id.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id.0)
    }

    /// Text of every text box on this slide, in z-order.
    pub fn texts(&self) -> Vec<String> {
        self.shapes.iter().filter_map(Shape::text).collect()
    }

    /// Fill colours of every rectangle on this slide, in z-order.
    pub fn rectangle_fills(&self) -> Vec<RgbColor> {
        self.shapes
            .iter()
            .filter_map(|s| match &s.kind {
                ShapeKind::RoundedRectangle(style) => Some(style.fill),
                ShapeKind::TextBox(_) => None,
            })
            .collect()
    }
}

/// Handle to a placed shape. Only useful for lookups; shapes are immutable once placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub u32);

/// A rectangle or text box with position, size and style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: u32,
    pub name: String,
    pub bounds: Bounds,
    pub kind: ShapeKind,
}

impl Shape {
    /// Paragraph texts joined by newlines, for text boxes.
    pub fn text(&self) -> Option<String> {
        match &self.kind {
            ShapeKind::TextBox(frame) => Some(frame.text()),
            ShapeKind::RoundedRectangle(_) => None,
        }
    }
}

/// What a shape draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeKind {
    RoundedRectangle(RectangleStyle),
    TextBox(TextFrame),
}

/// Fill and outline of a rounded rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleStyle {
    pub fill: RgbColor,

    /// Outline; `None` suppresses the outline entirely.
    pub border: Option<Border>,

    /// Corner rounding as a fraction of the shorter side (0.0 - 0.5).
    /// `None` keeps the preset default.
    pub corner_radius: Option<f64>,
}

/// A solid outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    pub color: RgbColor,
    pub width: Emu,
}

/// Content of a text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
    pub anchor: Anchor,
    pub word_wrap: bool,
}

impl TextFrame {
    /// Paragraph texts joined by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One paragraph with uniform run styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Literal text; `\n` is a soft line break inside the paragraph.
    pub text: String,
    pub style: RunStyle,
    pub alignment: Alignment,
    /// Space before, in points.
    pub space_before: f64,
    /// Space after, in points.
    pub space_after: f64,
}

/// Character formatting applied to every run of a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStyle {
    /// Size in points.
    pub font_size: f64,
    pub color: RgbColor,
    pub bold: bool,
    pub font_name: String,
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// `algn` attribute value.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// Vertical anchoring of text inside its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl Anchor {
    /// `anchor` attribute value.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}
