//! Drawing helpers layered on top of the deck model.
//!
//! A [`Canvas`] borrows one slide plus the active [`Theme`] and places
//! primitives (rectangles, text boxes) and composites (cards, flow steps,
//! banner metrics) on it. Every call appends shapes; nothing is ever moved or
//! removed, so call order is z-order.

use crate::color::RgbColor;
use crate::theme::{LineSlot, Palette, Theme};
use crate::types::{
    Alignment, Anchor, Border, Deck, Paragraph, RectangleStyle, RunStyle, ShapeId, ShapeKind,
    Slide, TextFrame, DEFAULT_FONT,
};
use crate::units::{inches, pt, Bounds, Emu};

/// Outline width used whenever a border colour is given.
pub const BORDER_WIDTH_PT: f64 = 1.0;

/// Height of a metric banner item, in inches.
pub const BANNER_HEIGHT_IN: f64 = 1.1;

/// Glyph drawn between flow steps.
pub const FLOW_ARROW: &str = "→";

/// Styling for a single-paragraph text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    font_size: f64,
    color: Option<RgbColor>,
    bold: bool,
    alignment: Alignment,
    font_name: Option<String>,
    anchor: Anchor,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self::new(18.0)
    }
}

impl TextOptions {
    /// Left-aligned, top-anchored, regular weight, theme primary colour.
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            color: None,
            bold: false,
            alignment: Alignment::Left,
            font_name: None,
            anchor: Anchor::Top,
        }
    }

    pub fn color(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Shorthand for `align(Alignment::Center)`.
    pub fn centered(self) -> Self {
        self.align(Alignment::Center)
    }

    pub fn font(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// Styling for a text box holding one paragraph per line.
#[derive(Debug, Clone, PartialEq)]
pub struct MultilineOptions {
    font_size: f64,
    color: Option<RgbColor>,
    spacing: f64,
    alignment: Alignment,
    bold: bool,
}

impl Default for MultilineOptions {
    fn default() -> Self {
        Self::new(14.0)
    }
}

impl MultilineOptions {
    /// Theme secondary colour, 6pt before each paragraph.
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            color: None,
            spacing: 6.0,
            alignment: Alignment::Left,
            bold: false,
        }
    }

    pub fn color(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Space before each paragraph, in points.
    pub fn spacing(mut self, points: f64) -> Self {
        self.spacing = points;
        self
    }

    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Space after each paragraph of a multi-line block, in points.
const MULTILINE_SPACE_AFTER: f64 = 2.0;

/// Drawing surface for one slide.
pub struct Canvas<'a> {
    slide: &'a mut Slide,
    theme: &'a Theme,
    page: (Emu, Emu),
}

impl Deck {
    /// Append a blank slide and return a canvas drawing onto it.
    pub fn new_slide<'a>(&'a mut self, theme: &'a Theme) -> Canvas<'a> {
        let page = (self.slide_width, self.slide_height);
        Canvas {
            slide: self.add_slide(),
            theme,
            page,
        }
    }
}

impl<'a> Canvas<'a> {
    /// The palette of the active theme.
    pub fn palette(&self) -> &'a Palette {
        &self.theme.palette
    }

    /// Fill the slide background with a solid colour.
    pub fn set_background(&mut self, color: RgbColor) {
        self.slide.background = Some(color);
    }

    /// Place a rounded rectangle. Without a border colour the outline is hidden.
    pub fn add_rectangle(
        &mut self,
        bounds: Bounds,
        fill: RgbColor,
        border: Option<RgbColor>,
        corner_radius: Option<f64>,
    ) -> ShapeId {
        let style = RectangleStyle {
            fill,
            border: border.map(|color| Border {
                color,
                width: pt(BORDER_WIDTH_PT),
            }),
            corner_radius,
        };
        self.place(bounds, ShapeKind::RoundedRectangle(style))
    }

    /// Place a single-paragraph text box with word wrap and no autofit.
    pub fn add_text(&mut self, bounds: Bounds, text: &str, options: TextOptions) -> ShapeId {
        let paragraph = Paragraph {
            text: text.to_string(),
            style: RunStyle {
                font_size: options.font_size,
                color: options.color.unwrap_or(self.theme.palette.text_primary),
                bold: options.bold,
                font_name: options.font_name.unwrap_or_else(|| DEFAULT_FONT.to_string()),
            },
            alignment: options.alignment,
            space_before: 0.0,
            space_after: 0.0,
        };

        let frame = TextFrame {
            paragraphs: vec![paragraph],
            anchor: options.anchor,
            word_wrap: true,
        };
        self.place(bounds, ShapeKind::TextBox(frame))
    }

    /// Place one text box containing one identically styled paragraph per line.
    pub fn add_multiline_text<S: AsRef<str>>(
        &mut self,
        bounds: Bounds,
        lines: &[S],
        options: MultilineOptions,
    ) -> ShapeId {
        let style = RunStyle {
            font_size: options.font_size,
            color: options.color.unwrap_or(self.theme.palette.text_secondary),
            bold: options.bold,
            font_name: DEFAULT_FONT.to_string(),
        };

        let paragraphs = lines
            .iter()
            .map(|line| Paragraph {
                text: line.as_ref().to_string(),
                style: style.clone(),
                alignment: options.alignment,
                space_before: options.spacing,
                space_after: MULTILINE_SPACE_AFTER,
            })
            .collect();

        let frame = TextFrame {
            paragraphs,
            anchor: Anchor::Top,
            word_wrap: true,
        };
        self.place(bounds, ShapeKind::TextBox(frame))
    }

    /// Bordered card with a centred icon, bold title and description.
    pub fn add_card(
        &mut self,
        bounds: Bounds,
        icon: &str,
        title: &str,
        description: &str,
        border: Option<RgbColor>,
    ) {
        let layout = self.theme.card;
        let palette = &self.theme.palette;
        let (fill, default_border, heading, body) = (
            palette.card_fill,
            palette.card_border,
            palette.text_primary,
            palette.text_secondary,
        );

        self.add_rectangle(
            bounds,
            fill,
            Some(border.unwrap_or(default_border)),
            Some(layout.corner_radius),
        );

        let slot = |s: LineSlot| {
            Bounds::new(
                bounds.left + inches(s.inset),
                bounds.top + inches(s.top),
                bounds.width - inches(s.inset * 2.0),
                inches(s.height),
            )
        };

        self.add_text(
            slot(layout.icon),
            icon,
            TextOptions::new(layout.icon.font_size).centered(),
        );
        self.add_text(
            slot(layout.title),
            title,
            TextOptions::new(layout.title.font_size)
                .bold()
                .color(heading)
                .centered(),
        );
        self.add_text(
            slot(layout.description),
            description,
            TextOptions::new(layout.description.font_size)
                .color(body)
                .centered(),
        );
    }

    /// Small fixed-size card for one step of a left-to-right pipeline,
    /// optionally followed by an arrow pointing at the next step.
    pub fn add_flow_step(
        &mut self,
        left: Emu,
        top: Emu,
        icon: &str,
        title: &str,
        description: &str,
        draw_arrow: bool,
    ) {
        let layout = self.theme.flow;
        let palette = &self.theme.palette;
        let (fill, border, heading, muted, accent) = (
            palette.card_fill,
            palette.card_border,
            palette.text_primary,
            palette.text_muted,
            palette.purple,
        );
        let width = inches(layout.width);

        self.add_rectangle(
            Bounds::new(left, top, width, inches(layout.height)),
            fill,
            Some(border),
            Some(layout.corner_radius),
        );

        let slot = |s: LineSlot| {
            Bounds::new(
                left + inches(s.inset),
                top + inches(s.top),
                width - inches(s.inset * 2.0),
                inches(s.height),
            )
        };

        self.add_text(
            slot(layout.icon),
            icon,
            TextOptions::new(layout.icon.font_size).centered(),
        );
        self.add_text(
            slot(layout.title),
            title,
            TextOptions::new(layout.title.font_size)
                .bold()
                .color(heading)
                .centered(),
        );
        self.add_text(
            slot(layout.description),
            description,
            TextOptions::new(layout.description.font_size)
                .color(muted)
                .centered(),
        );

        if draw_arrow {
            self.add_text(
                Bounds::new(
                    left + width,
                    top + inches(layout.arrow_top),
                    inches(layout.arrow_width),
                    inches(0.4),
                ),
                FLOW_ARROW,
                TextOptions::new(18.0).color(accent).bold().centered(),
            );
        }
    }

    /// Coloured block showing a large value over a caption.
    pub fn add_metric_banner_item(
        &mut self,
        left: Emu,
        top: Emu,
        width: Emu,
        value: &str,
        label: &str,
        background: RgbColor,
    ) {
        let (on_accent, caption) = (
            self.theme.palette.on_accent,
            self.theme.palette.banner_caption,
        );

        self.add_rectangle(
            Bounds::new(left, top, width, inches(BANNER_HEIGHT_IN)),
            background,
            None,
            Some(0.08),
        );
        self.add_text(
            Bounds::new(left, top + inches(0.1), width, inches(0.5)),
            value,
            TextOptions::new(30.0).bold().color(on_accent).centered(),
        );
        self.add_text(
            Bounds::new(left, top + inches(0.6), width, inches(0.4)),
            label,
            TextOptions::new(10.0).color(caption).centered(),
        );
    }

    fn place(&mut self, bounds: Bounds, kind: ShapeKind) -> ShapeId {
        if !bounds.fits_within(self.page.0, self.page.1) {
            log::debug!(
                "Slide {}: shape at ({:.2}in, {:.2}in) extends past the page",
                self.slide.number,
                bounds.left.as_inches(),
                bounds.top.as_inches()
            );
        }
        self.slide.push_shape(bounds, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_frame(slide: &Slide, id: ShapeId) -> &TextFrame {
        match &slide.shape(id).unwrap().kind {
            ShapeKind::TextBox(frame) => frame,
            other => panic!("expected text box, got {:?}", other),
        }
    }

    #[test]
    fn test_set_background() {
        let theme = Theme::dark();
        let mut deck = Deck::new();
        let mut canvas = deck.new_slide(&theme);
        canvas.set_background(theme.palette.background);
        assert_eq!(deck.slides[0].background, Some(RgbColor::new(0x0B, 0x0D, 0x17)));
    }

    #[test]
    fn test_rectangle_border_and_radius() {
        let theme = Theme::dark();
        let mut deck = Deck::new();
        let mut canvas = deck.new_slide(&theme);
        let bordered = canvas.add_rectangle(
            Bounds::inches(0.6, 2.3, 5.8, 4.5),
            theme.palette.before_fill,
            Some(theme.palette.pink),
            Some(0.03),
        );
        let plain = canvas.add_rectangle(
            Bounds::inches(0.6, 0.4, 0.7, 0.7),
            theme.palette.purple,
            None,
            None,
        );

        let slide = &deck.slides[0];
        match &slide.shape(bordered).unwrap().kind {
            ShapeKind::RoundedRectangle(style) => {
                assert_eq!(style.fill, theme.palette.before_fill);
                assert_eq!(
                    style.border,
                    Some(Border {
                        color: theme.palette.pink,
                        width: Emu(12_700)
                    })
                );
                assert_eq!(style.corner_radius, Some(0.03));
            }
            other => panic!("unexpected {:?}", other),
        }
        match &slide.shape(plain).unwrap().kind {
            ShapeKind::RoundedRectangle(style) => {
                assert!(style.border.is_none());
                assert!(style.corner_radius.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_add_text_defaults_follow_theme() {
        let theme = Theme::white();
        let mut deck = Deck::new();
        let mut canvas = deck.new_slide(&theme);
        let id = canvas.add_text(Bounds::inches(1.0, 1.0, 2.0, 0.5), "Hello", TextOptions::default());

        let frame = text_frame(&deck.slides[0], id);
        assert!(frame.word_wrap);
        assert_eq!(frame.anchor, Anchor::Top);
        let p = &frame.paragraphs[0];
        assert_eq!(p.text, "Hello");
        assert_eq!(p.style.font_size, 18.0);
        assert_eq!(p.style.color, theme.palette.text_primary);
        assert_eq!(p.style.font_name, "Calibri");
        assert!(!p.style.bold);
        assert_eq!(p.alignment, Alignment::Left);
        assert_eq!((p.space_before, p.space_after), (0.0, 0.0));
    }

    #[test]
    fn test_add_text_preserves_literal() {
        let theme = Theme::dark();
        let mut deck = Deck::new();
        let mut canvas = deck.new_slide(&theme);
        let literal = "👨‍💻 Developer asks: \"What went wrong?\"\n→ <fix> & 'retry'";
        let id = canvas.add_text(
            Bounds::inches(0.0, 0.0, 1.0, 1.0),
            literal,
            TextOptions::new(10.0).anchor(Anchor::Middle).font("Segoe UI"),
        );

        let frame = text_frame(&deck.slides[0], id);
        assert_eq!(frame.text(), literal);
        assert_eq!(frame.anchor, Anchor::Middle);
        assert_eq!(frame.paragraphs[0].style.font_name, "Segoe UI");
    }

    #[test]
    fn test_multiline_one_paragraph_per_line() {
        let theme = Theme::dark();
        let mut deck = Deck::new();
        let mut canvas = deck.new_slide(&theme);
        let lines = ["📄  first", "🔧  second", "🐛  third"];
        let id = canvas.add_multiline_text(
            Bounds::inches(1.0, 3.1, 5.0, 3.5),
            &lines,
            MultilineOptions::new(12.0).spacing(10.0),
        );

        let frame = text_frame(&deck.slides[0], id);
        assert_eq!(frame.paragraphs.len(), 3);
        for (p, line) in frame.paragraphs.iter().zip(lines) {
            assert_eq!(p.text, line);
            assert_eq!(p.style.font_size, 12.0);
            assert_eq!(p.style.color, theme.palette.text_secondary);
            assert_eq!(p.space_before, 10.0);
            assert_eq!(p.space_after, 2.0);
        }
    }

    #[test]
    fn test_card_composite() {
        let theme = Theme::dark();
        let mut deck = Deck::new();
        let mut canvas = deck.new_slide(&theme);
        canvas.add_card(
            Bounds::inches(0.6, 1.8, 3.8, 2.1),
            "🤖",
            "Working with AI",
            "Gained hands-on experience",
            None,
        );

        let slide = &deck.slides[0];
        assert_eq!(slide.shapes.len(), 4);
        assert_eq!(slide.rectangle_fills(), vec![theme.palette.card_fill]);
        assert_eq!(
            slide.texts(),
            vec!["🤖", "Working with AI", "Gained hands-on experience"]
        );

        let icon = &slide.shapes[1];
        assert_eq!(icon.bounds.left, inches(0.6) + inches(0.25));
        assert_eq!(icon.bounds.width, inches(3.8) - inches(0.5));
        let title = &slide.shapes[2];
        assert_eq!(title.bounds.top, inches(1.8) + inches(0.7));
        match &title.kind {
            ShapeKind::TextBox(frame) => {
                assert!(frame.paragraphs[0].style.bold);
                assert_eq!(frame.paragraphs[0].alignment, Alignment::Center);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_card_custom_border() {
        let theme = Theme::white();
        let mut deck = Deck::new();
        let mut canvas = deck.new_slide(&theme);
        canvas.add_card(Bounds::inches(0.0, 0.0, 2.0, 2.0), "a", "b", "c", Some(theme.palette.teal));

        match &deck.slides[0].shapes[0].kind {
            ShapeKind::RoundedRectangle(style) => {
                assert_eq!(style.border.map(|b| b.color), Some(theme.palette.teal));
                assert_eq!(style.corner_radius, Some(0.04));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_flow_step_arrow_is_optional() {
        let theme = Theme::dark();
        let mut deck = Deck::new();
        let mut canvas = deck.new_slide(&theme);
        canvas.add_flow_step(inches(0.6), inches(2.2), "🔍", "Quality Check", "Checks for errors", true);
        canvas.add_flow_step(inches(2.8), inches(2.2), "🔔", "Team Notified", "Email & Slack alerts", false);

        let slide = &deck.slides[0];
        assert_eq!(slide.shapes.len(), 5 + 4);
        let arrow = &slide.shapes[4];
        assert_eq!(arrow.text().as_deref(), Some(FLOW_ARROW));
        assert_eq!(arrow.bounds.left, inches(0.6) + inches(1.6));
        assert_eq!(arrow.bounds.top, inches(2.2) + inches(0.4));

        let title = &slide.shapes[2];
        assert_eq!(title.bounds.width, inches(1.5));
        assert_eq!(slide.texts().iter().filter(|t| *t == FLOW_ARROW).count(), 1);
    }

    #[test]
    fn test_metric_banner_item() {
        let theme = Theme::dark();
        let mut deck = Deck::new();
        let mut canvas = deck.new_slide(&theme);
        canvas.add_metric_banner_item(
            inches(0.6),
            inches(4.6),
            inches(2.8),
            "90%",
            "Faster Setup",
            theme.palette.banner_primary,
        );

        let slide = &deck.slides[0];
        assert_eq!(slide.rectangle_fills(), vec![theme.palette.banner_primary]);
        assert_eq!(slide.shapes[0].bounds.height, inches(1.1));
        match &slide.shapes[2].kind {
            ShapeKind::TextBox(frame) => {
                assert_eq!(frame.paragraphs[0].text, "Faster Setup");
                assert_eq!(frame.paragraphs[0].style.color, theme.palette.banner_caption);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_out_of_page_shape_is_still_placed() {
        let theme = Theme::dark();
        let mut deck = Deck::new();
        let mut canvas = deck.new_slide(&theme);
        canvas.add_rectangle(Bounds::inches(12.0, 7.0, 3.0, 3.0), theme.palette.gold, None, None);
        assert_eq!(deck.slides[0].shapes.len(), 1);
    }
}
