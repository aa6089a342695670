//! Content of the quarterly review decks.
//!
//! Every string, coordinate and colour here is literal; the two variants
//! share the drawing helpers in `deck-core` and a handful of slide pieces,
//! but each keeps its own slide list.

mod common;
mod dark;
mod white;

use deck_core::{Deck, DocumentProperties, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which deck to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 11 slides on a dark navy background.
    #[default]
    Dark,
    /// Compact 8-slide version on white.
    White,
}

impl Variant {
    /// Colours and composite offsets for this variant.
    pub fn theme(self) -> Theme {
        match self {
            Variant::Dark => Theme::dark(),
            Variant::White => Theme::white(),
        }
    }

    /// File name used when no output path is given.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Variant::Dark => "Q3_Review_Manprit_Singh_Panesar.pptx",
            Variant::White => "Q3_Review_White_Theme.pptx",
        }
    }

    /// Document title stored in the package properties.
    pub fn title(self) -> &'static str {
        match self {
            Variant::Dark => "Q3 Review - Manprit Singh Panesar",
            Variant::White => "Q3 Review - White Theme",
        }
    }

    /// Lowercase name used in log output.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Dark => "dark",
            Variant::White => "white",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the deck for a variant.
pub fn build(variant: Variant) -> Deck {
    build_with_theme(variant, &variant.theme())
}

/// Build a variant's slides with an arbitrary theme.
pub fn build_with_theme(variant: Variant, theme: &Theme) -> Deck {
    let mut deck = Deck::new().with_properties(DocumentProperties {
        title: variant.title().to_string(),
        creator: common::PRESENTER.to_string(),
        subject: "Quarter 3 Performance Review".to_string(),
    });

    match variant {
        Variant::Dark => dark::build(&mut deck, theme),
        Variant::White => white::build(&mut deck, theme),
    }

    log::debug!(
        "Built {} deck with {} slides using the {} theme",
        variant,
        deck.slide_count(),
        theme.name
    );
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{inches, Palette, RectangleStyle, RgbColor, ShapeKind, Slide};
    use deck_pptx::{PptxReader, PptxWriter};
    use std::io::Cursor;

    #[test]
    fn test_slide_counts() {
        assert_eq!(build(Variant::Dark).slide_count(), 11);
        assert_eq!(build(Variant::White).slide_count(), 8);
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(Variant::Dark.to_string(), "dark");
        assert_eq!(Variant::White.to_string(), "white");
        assert_eq!(Variant::default(), Variant::Dark);
        assert_eq!(Variant::White.default_file_name(), "Q3_Review_White_Theme.pptx");
        assert_eq!(build(Variant::White).properties.title, "Q3 Review - White Theme");
    }

    #[test]
    fn test_build_is_deterministic() {
        for variant in [Variant::Dark, Variant::White] {
            let first = serde_json::to_string(&build(variant)).unwrap();
            let second = serde_json::to_string(&build(variant)).unwrap();
            assert_eq!(first, second);

            let writer = PptxWriter::new();
            let a = writer.to_bytes(&build(variant)).unwrap();
            let b = writer.to_bytes(&build(variant)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_literals_survive_round_trip() {
        let deck = build(Variant::Dark);
        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
        let summary = PptxReader::new().read(Cursor::new(bytes)).unwrap();

        assert_eq!(summary.slide_count(), 11);
        assert_eq!(summary.slide_width, inches(13.333));
        assert_eq!(summary.slide_height, inches(7.5));

        for (built, read) in deck.slides.iter().zip(&summary.slides) {
            assert_eq!(built.texts(), read.texts());
            assert_eq!(built.background, read.background);
        }

        let title = &summary.slides[0];
        assert_eq!(title.texts()[1], "Making Teams Work\nFaster & Smarter");
        assert!(summary.slides[3].texts().contains(&"👨‍💻"));
        assert_eq!(
            summary.slides[10].texts().last().copied(),
            Some("Manprit Singh Panesar · Quarter 3 Review")
        );
    }

    /// Palette roles a rectangle fill or outline can take. None of these
    /// share a value in the dark palette.
    fn shape_roles(p: &Palette) -> [(&'static str, RgbColor); 14] {
        [
            ("background", p.background),
            ("card_fill", p.card_fill),
            ("card_border", p.card_border),
            ("purple", p.purple),
            ("blue", p.blue),
            ("teal", p.teal),
            ("pink", p.pink),
            ("gold", p.gold),
            ("green", p.green),
            ("before_fill", p.before_fill),
            ("after_fill", p.after_fill),
            ("banner_primary", p.banner_primary),
            ("banner_secondary", p.banner_secondary),
            ("banner_caption", p.banner_caption),
        ]
    }

    fn role_of(p: &Palette, color: RgbColor) -> &'static str {
        let matches: Vec<_> = shape_roles(p)
            .into_iter()
            .filter(|(_, c)| *c == color)
            .map(|(name, _)| name)
            .collect();
        assert_eq!(matches.len(), 1, "{} matches roles {:?}", color, matches);
        matches[0]
    }

    fn value_of(p: &Palette, role: &str) -> RgbColor {
        shape_roles(p)
            .into_iter()
            .find(|(name, _)| *name == role)
            .map(|(_, c)| c)
            .unwrap()
    }

    fn rectangles(slide: &Slide) -> Vec<&RectangleStyle> {
        slide
            .shapes
            .iter()
            .filter_map(|s| match &s.kind {
                ShapeKind::RoundedRectangle(style) => Some(style),
                ShapeKind::TextBox(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_rectangle_colours_keep_their_role_across_themes() {
        let white = Theme::white().palette;
        let dark = Theme::dark().palette;
        let native = build(Variant::White);
        let swapped = build_with_theme(Variant::White, &Theme::dark());

        for (a, b) in native.slides.iter().zip(&swapped.slides) {
            let (ra, rb) = (rectangles(a), rectangles(b));
            assert_eq!(ra.len(), rb.len());
            for (x, y) in ra.into_iter().zip(rb) {
                let role = role_of(&dark, y.fill);
                assert_eq!(x.fill, value_of(&white, role), "slide {} {}", a.number, role);
                assert_eq!(y.fill, value_of(&dark, role));

                let border = y.border.map(|b| value_of(&white, role_of(&dark, b.color)));
                assert_eq!(x.border.map(|b| b.color), border, "slide {} outline", a.number);
            }
        }

        for slide in &build(Variant::Dark).slides {
            for style in rectangles(slide) {
                role_of(&dark, style.fill);
            }
        }
    }

    #[test]
    fn test_comparison_slide_colours() {
        for variant in [Variant::Dark, Variant::White] {
            let p = variant.theme().palette;
            let deck = build(variant);
            let rects = rectangles(&deck.slides[2]);

            assert_eq!(rects[0].fill, p.purple);
            assert_eq!(rects[0].border, None);
            assert_eq!(rects[1].fill, p.before_fill);
            assert_eq!(rects[1].border.map(|b| b.color), Some(p.pink));
            assert_eq!(rects[2].fill, p.after_fill);
            assert_eq!(rects[2].border.map(|b| b.color), Some(p.teal));

            match variant {
                Variant::Dark => assert_eq!(rects.len(), 3),
                Variant::White => {
                    assert_eq!(rects.len(), 7);
                    assert!(rects[3..].iter().all(|r| r.fill == p.banner_primary && r.border.is_none()));
                }
            }
        }
    }

    #[test]
    fn test_theme_swap_changes_colours_only() {
        let white = build(Variant::White);
        let swapped = build_with_theme(Variant::White, &Theme::dark());

        assert_eq!(white.slide_count(), swapped.slide_count());
        for (a, b) in white.slides.iter().zip(&swapped.slides) {
            assert_eq!(a.texts(), b.texts());
            assert_eq!(a.shapes.len(), b.shapes.len());
            for (x, y) in a.shapes.iter().zip(&b.shapes) {
                assert_eq!(x.name, y.name);
                if let (ShapeKind::RoundedRectangle(_), ShapeKind::RoundedRectangle(_)) =
                    (&x.kind, &y.kind)
                {
                    // Composite offsets are part of the theme, rectangles are not.
                    assert_eq!(x.bounds.width, y.bounds.width);
                }
            }
            assert_ne!(a.background, b.background);
        }
    }
}
