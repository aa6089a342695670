//! PPTX read-back: recovers slide order, backgrounds and shapes from a package.
//!
//! This is not a general PPTX parser; it understands the subset of
//! PresentationML that [`PptxWriter`](crate::PptxWriter) emits, which is
//! enough to inspect and verify generated decks.

use deck_core::{Emu, Error, Result, RgbColor};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// What was found in a package.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckSummary {
    pub slide_width: Emu,
    pub slide_height: Emu,
    pub slides: Vec<SlideSummary>,
}

impl DeckSummary {
    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// One slide as read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideSummary {
    /// 1-based slide number.
    pub number: usize,
    pub background: Option<RgbColor>,
    pub shapes: Vec<ShapeSummary>,
}

impl SlideSummary {
    /// Text of every shape that has a text body, in z-order.
    pub fn texts(&self) -> Vec<&str> {
        self.shapes.iter().filter_map(|s| s.text.as_deref()).collect()
    }
}

/// One shape as read back.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShapeSummary {
    pub name: String,
    pub x: Emu,
    pub y: Emu,
    pub cx: Emu,
    pub cy: Emu,
    /// Shape fill, ignoring outline and text colours.
    pub fill: Option<RgbColor>,
    /// Paragraphs joined by `\n`; soft breaks also read as `\n`.
    pub text: Option<String>,
}

/// Reader for PPTX (Office Open XML) files.
pub struct PptxReader;

impl PptxReader {
    /// Create a new PPTX reader.
    pub fn new() -> Self {
        Self
    }

    /// Read a PPTX package from a reader.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<DeckSummary> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| Error::Zip(format!("Failed to open ZIP: {}", e)))?;

        // Page size, then slides in presentation order
        let (slide_width, slide_height) = self.get_slide_size(&mut archive)?;
        let slide_order = self.get_slide_order(&mut archive)?;
        log::debug!("Package lists {} slides", slide_order.len());

        let mut slides = Vec::with_capacity(slide_order.len());
        for (idx, slide_path) in slide_order.iter().enumerate() {
            slides.push(self.parse_slide(&mut archive, slide_path, idx + 1)?);
        }

        Ok(DeckSummary {
            slide_width,
            slide_height,
            slides,
        })
    }

    /// Read `p:sldSz` from `presentation.xml`.
    fn get_slide_size<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<(Emu, Emu)> {
        let content = self.read_file_from_archive(archive, "ppt/presentation.xml")?;
        let mut reader = Reader::from_str(&content);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if local_name(e.name().as_ref()) == b"sldSz" =>
                {
                    let cx = emu_attr(e, b"cx").unwrap_or_default();
                    let cy = emu_attr(e, b"cy").unwrap_or_default();
                    return Ok((cx, cy));
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml(format!("Error parsing presentation: {}", e)));
                }
                _ => {}
            }
        }

        Err(Error::MissingPart("p:sldSz in ppt/presentation.xml".to_string()))
    }

    /// Get the ordered list of slide paths from the presentation relationships.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_content = self.read_file_from_archive(archive, "ppt/_rels/presentation.xml.rels")?;
        let mut slides: Vec<(String, Option<usize>)> = Vec::new();

        let mut reader = Reader::from_str(&rels_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let rel_type = string_attr(e, b"Type").unwrap_or_default();
                    let target = string_attr(e, b"Target").unwrap_or_default();
                    let id = string_attr(e, b"Id").unwrap_or_default();

                    if rel_type.ends_with("/slide") {
                        let order_num = extract_number(&id).or_else(|| extract_number(&target));
                        let full_path = match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("ppt/{}", target),
                        };
                        slides.push((full_path, order_num));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml(format!("Error parsing relationships: {}", e)));
                }
                _ => {}
            }
        }

        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    /// Parse a single slide from the archive.
    fn parse_slide<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
        slide_number: usize,
    ) -> Result<SlideSummary> {
        let content = self.read_file_from_archive(archive, slide_path)?;
        let mut slide = SlideSummary {
            number: slide_number,
            background: None,
            shapes: Vec::new(),
        };

        let mut reader = Reader::from_str(&content);
        let mut state = ParseState::default();

        // Walk the slide, tracking which element the text and colours belong to
        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    state.open(local_name(e.name().as_ref()), e, &mut slide);
                }
                Ok(Event::Empty(ref e)) => {
                    let qname = e.name();
                    let name = local_name(qname.as_ref());
                    state.open(name, e, &mut slide);
                    state.close(name, &mut slide);
                }
                Ok(Event::Text(ref e)) => {
                    if state.in_text_run {
                        // Keep the raw text rather than dropping the run
                        let text = match e.unescape() {
                            Ok(text) => text.into_owned(),
                            Err(err) => {
                                log::warn!(
                                    "Unreadable text on slide {}, keeping it raw: {}",
                                    slide_number,
                                    err
                                );
                                String::from_utf8_lossy(e).into_owned()
                            }
                        };
                        if let Some(paragraph) = state.paragraphs.last_mut() {
                            paragraph.push_str(&text);
                        }
                    }
                }
                Ok(Event::End(ref e)) => {
                    state.close(local_name(e.name().as_ref()), &mut slide);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    log::warn!("XML parsing error in {} (continuing): {}", slide_path, e);
                }
                _ => {}
            }
        }

        Ok(slide)
    }

    /// Read a file from the ZIP archive.
    fn read_file_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingPart(path.to_string()))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::Zip(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}

impl Default for PptxReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Element nesting the slide walk cares about.
#[derive(Debug, Default)]
struct ParseState {
    current: Option<ShapeSummary>,
    paragraphs: Vec<String>,
    has_text_body: bool,
    in_background: bool,
    in_shape_props: bool,
    in_line: bool,
    in_text_run: bool,
}

impl ParseState {
    fn open(&mut self, name: &[u8], e: &BytesStart<'_>, slide: &mut SlideSummary) {
        match name {
            b"sp" => {
                self.current = Some(ShapeSummary::default());
                self.paragraphs.clear();
                self.has_text_body = false;
            }
            b"bg" => self.in_background = true,
            b"spPr" => self.in_shape_props = true,
            b"ln" => self.in_line = true,
            b"cNvPr" => {
                if let Some(shape) = self.current.as_mut() {
                    shape.name = string_attr(e, b"name").unwrap_or_default();
                }
            }
            b"off" if self.in_shape_props => {
                if let Some(shape) = self.current.as_mut() {
                    shape.x = emu_attr(e, b"x").unwrap_or_default();
                    shape.y = emu_attr(e, b"y").unwrap_or_default();
                }
            }
            b"ext" if self.in_shape_props => {
                if let Some(shape) = self.current.as_mut() {
                    shape.cx = emu_attr(e, b"cx").unwrap_or_default();
                    shape.cy = emu_attr(e, b"cy").unwrap_or_default();
                }
            }
            b"srgbClr" => {
                let color = string_attr(e, b"val").and_then(|v| match RgbColor::from_hex(&v) {
                    Ok(c) => Some(c),
                    Err(err) => {
                        log::warn!("Ignoring colour on slide {}: {}", slide.number, err);
                        None
                    }
                });
                if self.in_background {
                    slide.background = color;
                } else if self.in_shape_props && !self.in_line {
                    if let Some(shape) = self.current.as_mut() {
                        shape.fill = color;
                    }
                }
            }
            b"txBody" => self.has_text_body = true,
            b"p" if self.has_text_body => self.paragraphs.push(String::new()),
            b"br" => {
                if let Some(paragraph) = self.paragraphs.last_mut() {
                    paragraph.push('\n');
                }
            }
            b"t" => self.in_text_run = true,
            _ => {}
        }
    }

    fn close(&mut self, name: &[u8], slide: &mut SlideSummary) {
        match name {
            b"sp" => {
                if let Some(mut shape) = self.current.take() {
                    if self.has_text_body {
                        shape.text = Some(self.paragraphs.join("\n"));
                    }
                    slide.shapes.push(shape);
                }
                self.paragraphs.clear();
                self.has_text_body = false;
            }
            b"bg" => self.in_background = false,
            b"spPr" => self.in_shape_props = false,
            b"ln" => self.in_line = false,
            b"t" => self.in_text_run = false,
            _ => {}
        }
    }
}

fn string_attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

fn emu_attr(e: &BytesStart<'_>, key: &[u8]) -> Option<Emu> {
    string_attr(e, key).and_then(|v| v.parse::<i64>().ok()).map(Emu)
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a trailing number from a string like "rId7" or "slide3.xml".
fn extract_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PptxWriter;
    use deck_core::{inches, Bounds, Deck, MultilineOptions, TextOptions, Theme};
    use std::io::{Cursor, Write};

    #[test]
    fn test_extract_number() {
        assert_eq!(extract_number("rId1"), Some(1));
        assert_eq!(extract_number("rId12"), Some(12));
        assert_eq!(extract_number("slides/slide1.xml"), Some(1));
        assert_eq!(extract_number("slide123.xml"), Some(123));
        assert_eq!(extract_number("nodigits"), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }

    #[test]
    fn test_round_trip_shapes_and_text() {
        let theme = Theme::white();
        let mut deck = Deck::new();
        let mut canvas = deck.new_slide(&theme);
        canvas.set_background(theme.palette.background);
        canvas.add_card(
            Bounds::inches(0.6, 5.6, 3.8, 1.6),
            "👨‍💻",
            "Developers",
            "\"Why did my project fail?\"\n→ Instant answer + fix",
            None,
        );
        canvas.add_multiline_text(
            Bounds::inches(1.0, 2.5, 5.0, 2.5),
            &["🖥️  Log into the system manually", "⏰  Took hours"],
            MultilineOptions::new(12.0),
        );
        deck.new_slide(&theme).add_text(
            Bounds::inches(1.0, 2.2, 11.3, 1.5),
            "Thank You",
            TextOptions::new(60.0).bold().centered(),
        );

        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
        let summary = PptxReader::new().read(Cursor::new(bytes)).unwrap();

        assert_eq!(summary.slide_count(), 2);
        assert_eq!(summary.slide_width, inches(13.333));

        let first = &summary.slides[0];
        assert_eq!(first.background, Some(theme.palette.background));
        assert_eq!(
            first.texts(),
            vec![
                "👨‍💻",
                "Developers",
                "\"Why did my project fail?\"\n→ Instant answer + fix",
                "🖥️  Log into the system manually\n⏰  Took hours",
            ]
        );

        let card = &first.shapes[0];
        assert_eq!(card.name, "Rounded Rectangle 1");
        assert_eq!(card.fill, Some(theme.palette.card_fill));
        assert_eq!(card.x, inches(0.6));
        assert_eq!(card.cy, inches(1.6));
        assert_eq!(card.text, None);

        assert_eq!(summary.slides[1].texts(), vec!["Thank You"]);
        assert_eq!(summary.slides[1].background, None);
    }

    #[test]
    fn test_empty_deck_reads_back() {
        let bytes = PptxWriter::new().to_bytes(&Deck::new()).unwrap();
        let summary = PptxReader::new().read(Cursor::new(bytes)).unwrap();
        assert_eq!(summary.slide_count(), 0);
        assert_eq!(summary.slide_height, inches(7.5));
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let theme = Theme::dark();
        let mut deck = Deck::new();
        deck.new_slide(&theme).add_text(
            Bounds::inches(0.5, 0.4, 12.0, 0.8),
            "Q3 Review",
            TextOptions::new(36.0),
        );
        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
        let summary = PptxReader::new().read(Cursor::new(bytes)).unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["slide_width"], 12191695);
        assert_eq!(json["slides"][0]["number"], 1);
        assert_eq!(json["slides"][0]["shapes"][0]["name"], "TextBox 1");
        assert_eq!(json["slides"][0]["shapes"][0]["text"], "Q3 Review");
        assert!(json["slides"][0]["background"].is_null());
    }

    #[test]
    fn test_unknown_entity_keeps_raw_text() {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let files = [
            (
                "ppt/presentation.xml",
                r#"<p:presentation xmlns:p="p"><p:sldSz cx="12191695" cy="6858000"/></p:presentation>"#,
            ),
            (
                "ppt/_rels/presentation.xml.rels",
                r#"<Relationships><Relationship Id="rId6" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml"/></Relationships>"#,
            ),
            (
                "ppt/slides/slide1.xml",
                r#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree><p:sp><p:nvSpPr><p:cNvPr id="2" name="TextBox 1"/></p:nvSpPr><p:txBody><a:p><a:r><a:t>Fix &bogus; now</a:t></a:r></a:p></p:txBody></p:sp></p:spTree></p:cSld></p:sld>"#,
            ),
        ];
        for (name, content) in files {
            zip.start_file(name, zip::write::FileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        let bytes = zip.finish().unwrap().into_inner();

        let summary = PptxReader::new().read(Cursor::new(bytes)).unwrap();
        assert_eq!(summary.slide_count(), 1);
        assert_eq!(summary.slides[0].shapes[0].name, "TextBox 1");
        assert_eq!(summary.slides[0].texts(), vec!["Fix &bogus; now"]);
    }

    #[test]
    fn test_not_a_zip() {
        let err = PptxReader::new().read(Cursor::new(b"not a zip".to_vec())).unwrap_err();
        assert!(matches!(err, Error::Zip(_)));
    }
}
