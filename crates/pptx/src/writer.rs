//! PPTX package writer.
//!
//! Serializes a [`Deck`] into an Office Open XML package. The output is
//! deterministic: zip entries carry a fixed timestamp and no part contains a
//! wall-clock date, so the same deck always produces the same bytes.

use crate::parts::{self, content_types, rel_types};
use crate::xml::XmlBuilder;
use deck_core::{
    Deck, Error, Paragraph, RectangleStyle, Result, Shape, ShapeKind, Slide, TextFrame,
};
use std::fs;
use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Name recorded as the producing application in `docProps/app.xml`.
const APPLICATION_NAME: &str = "q3-deck";

/// Writer for PPTX (Office Open XML) files.
pub struct PptxWriter;

impl PptxWriter {
    /// Create a new PPTX writer.
    pub fn new() -> Self {
        Self
    }

    /// Write a complete package to a seekable writer and return the writer.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<W> {
        let mut zip = ZipWriter::new(writer);

        // Package-level parts
        self.add_part(&mut zip, parts::CONTENT_TYPES_PATH, &content_types_xml(deck)?)?;
        self.add_part(&mut zip, parts::ROOT_RELS_PATH, &root_rels_xml()?)?;
        self.add_part(&mut zip, parts::CORE_PROPS_PATH, &core_props_xml(deck)?)?;
        self.add_part(&mut zip, parts::APP_PROPS_PATH, &self.app_props_xml(deck)?)?;
        self.add_part(&mut zip, parts::PRESENTATION_PATH, &presentation_xml(deck)?)?;
        self.add_part(&mut zip, parts::PRESENTATION_RELS_PATH, &presentation_rels_xml(deck)?)?;

        // Fixed master, layout and theme
        self.add_part(&mut zip, parts::SLIDE_MASTER_PATH, &parts::slide_master_xml())?;
        self.add_part(&mut zip, parts::SLIDE_MASTER_RELS_PATH, parts::SLIDE_MASTER_RELS)?;
        self.add_part(&mut zip, parts::SLIDE_LAYOUT_PATH, &parts::slide_layout_xml())?;
        self.add_part(&mut zip, parts::SLIDE_LAYOUT_RELS_PATH, parts::SLIDE_LAYOUT_RELS)?;
        self.add_part(&mut zip, parts::THEME_PATH, parts::THEME_XML)?;
        self.add_part(&mut zip, parts::PRES_PROPS_PATH, parts::PRES_PROPS_XML)?;
        self.add_part(&mut zip, parts::VIEW_PROPS_PATH, parts::VIEW_PROPS_XML)?;
        self.add_part(&mut zip, parts::TABLE_STYLES_PATH, parts::TABLE_STYLES_XML)?;

        // One part and one rels file per slide
        for slide in &deck.slides {
            log::debug!("Writing slide {} ({} shapes)", slide.number, slide.shapes.len());
            self.add_part(&mut zip, &parts::slide_path(slide.number), &slide_xml(slide)?)?;
            self.add_part(&mut zip, &parts::slide_rels_path(slide.number), parts::SLIDE_RELS)?;
        }

        zip.finish()
            .map_err(|e| Error::Zip(format!("Failed to finalize archive: {}", e)))
    }

    /// Serialize a deck to an in-memory package.
    pub fn to_bytes(&self, deck: &Deck) -> Result<Vec<u8>> {
        let cursor = self.write(deck, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Write a deck to `path`.
    ///
    /// The package is assembled in memory, written next to the destination
    /// under a temporary name, then renamed over it. If anything fails the
    /// temporary file is removed, so a failed write never leaves partial output.
    pub fn write_to_path(&self, deck: &Deck, path: &Path) -> Result<()> {
        let bytes = self.to_bytes(deck)?;
        let staging = staging_path(path);

        let result = fs::write(&staging, &bytes).and_then(|_| fs::rename(&staging, path));
        if let Err(e) = result {
            if staging.exists() {
                if let Err(cleanup) = fs::remove_file(&staging) {
                    log::warn!("Failed to remove {}: {}", staging.display(), cleanup);
                }
            }
            return Err(Error::Io(e));
        }

        log::info!(
            "Wrote {} slides ({} bytes) to {}",
            deck.slide_count(),
            bytes.len(),
            path.display()
        );
        Ok(())
    }

    fn add_part<W: Write + Seek>(&self, zip: &mut ZipWriter<W>, name: &str, xml: &str) -> Result<()> {
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        zip.start_file(name, options)
            .map_err(|e| Error::Zip(format!("Failed to start '{}': {}", name, e)))?;
        zip.write_all(xml.as_bytes())
            .map_err(|e| Error::Zip(format!("Failed to write '{}': {}", name, e)))?;

        log::trace!("Added part {} ({} bytes)", name, xml.len());
        Ok(())
    }

    fn app_props_xml(&self, deck: &Deck) -> Result<String> {
        let slides = deck.slide_count().to_string();
        let mut xml = XmlBuilder::new()?;
        xml.start(
            "Properties",
            &[
                (
                    "xmlns",
                    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
                ),
                (
                    "xmlns:vt",
                    "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes",
                ),
            ],
        )?;
        xml.element("Application", APPLICATION_NAME)?;
        xml.element("PresentationFormat", "Custom")?;
        xml.element("Slides", slides.as_str())?;
        xml.end("Properties")?;
        xml.finish()
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Sibling path used while the package is being written.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "deck.pptx".into());
    name.push(".partial");
    path.with_file_name(name)
}

fn content_types_xml(deck: &Deck) -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start("Types", &[("xmlns", parts::NS_CONTENT_TYPES)])?;
    xml.empty(
        "Default",
        &[("Extension", "rels"), ("ContentType", content_types::RELATIONSHIPS)],
    )?;
    xml.empty("Default", &[("Extension", "xml"), ("ContentType", content_types::XML)])?;

    let fixed = [
        (parts::PRESENTATION_PATH, content_types::PRESENTATION),
        (parts::SLIDE_MASTER_PATH, content_types::SLIDE_MASTER),
        (parts::SLIDE_LAYOUT_PATH, content_types::SLIDE_LAYOUT),
        (parts::THEME_PATH, content_types::THEME),
        (parts::PRES_PROPS_PATH, content_types::PRES_PROPS),
        (parts::VIEW_PROPS_PATH, content_types::VIEW_PROPS),
        (parts::TABLE_STYLES_PATH, content_types::TABLE_STYLES),
        (parts::CORE_PROPS_PATH, content_types::CORE_PROPERTIES),
        (parts::APP_PROPS_PATH, content_types::EXTENDED_PROPERTIES),
    ];
    for (path, content_type) in fixed {
        let part_name = format!("/{}", path);
        xml.empty("Override", &[("PartName", part_name.as_str()), ("ContentType", content_type)])?;
    }

    for slide in &deck.slides {
        let part_name = format!("/{}", parts::slide_path(slide.number));
        xml.empty("Override", &[("PartName", part_name.as_str()), ("ContentType", content_types::SLIDE)])?;
    }

    xml.end("Types")?;
    xml.finish()
}

fn root_rels_xml() -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start("Relationships", &[("xmlns", parts::NS_PKG_RELS)])?;
    relationship(&mut xml, "rId1", rel_types::OFFICE_DOCUMENT, parts::PRESENTATION_PATH)?;
    relationship(&mut xml, "rId2", rel_types::CORE_PROPERTIES, parts::CORE_PROPS_PATH)?;
    relationship(&mut xml, "rId3", rel_types::EXTENDED_PROPERTIES, parts::APP_PROPS_PATH)?;
    xml.end("Relationships")?;
    xml.finish()
}

fn core_props_xml(deck: &Deck) -> Result<String> {
    let props = &deck.properties;
    let mut xml = XmlBuilder::new()?;
    xml.start(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    xml.element("dc:title", props.title.as_str())?;
    xml.element("dc:subject", props.subject.as_str())?;
    xml.element("dc:creator", props.creator.as_str())?;
    xml.element("cp:revision", "1")?;
    xml.end("cp:coreProperties")?;
    xml.finish()
}

/// Relationship id of the `index`-th slide (0-based) in `presentation.xml.rels`.
fn slide_rel_id(index: usize) -> String {
    format!("rId{}", parts::PRESENTATION_FIXED_RELS + index + 1)
}

fn presentation_xml(deck: &Deck) -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start(
        "p:presentation",
        &[
            ("xmlns:a", parts::NS_A),
            ("xmlns:r", parts::NS_R),
            ("xmlns:p", parts::NS_P),
            ("saveSubsetFonts", "1"),
        ],
    )?;

    xml.start("p:sldMasterIdLst", &[])?;
    xml.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    xml.end("p:sldMasterIdLst")?;

    // Zero-slide decks omit sldIdLst.
    if !deck.slides.is_empty() {
        xml.start("p:sldIdLst", &[])?;
        for index in 0..deck.slides.len() {
            let id = (parts::FIRST_SLIDE_ID + index as u32).to_string();
            let rel_id = slide_rel_id(index);
            xml.empty("p:sldId", &[("id", id.as_str()), ("r:id", rel_id.as_str())])?;
        }
        xml.end("p:sldIdLst")?;
    }

    let cx = deck.slide_width.value().to_string();
    let cy = deck.slide_height.value().to_string();
    xml.empty("p:sldSz", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    xml.empty("p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;
    xml.end("p:presentation")?;
    xml.finish()
}

fn presentation_rels_xml(deck: &Deck) -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start("Relationships", &[("xmlns", parts::NS_PKG_RELS)])?;
    relationship(&mut xml, "rId1", rel_types::SLIDE_MASTER, "slideMasters/slideMaster1.xml")?;
    relationship(&mut xml, "rId2", rel_types::PRES_PROPS, "presProps.xml")?;
    relationship(&mut xml, "rId3", rel_types::VIEW_PROPS, "viewProps.xml")?;
    relationship(&mut xml, "rId4", rel_types::THEME, "theme/theme1.xml")?;
    relationship(&mut xml, "rId5", rel_types::TABLE_STYLES, "tableStyles.xml")?;

    for (index, slide) in deck.slides.iter().enumerate() {
        let target = format!("slides/slide{}.xml", slide.number);
        relationship(&mut xml, &slide_rel_id(index), rel_types::SLIDE, &target)?;
    }

    xml.end("Relationships")?;
    xml.finish()
}

fn relationship(xml: &mut XmlBuilder, id: &str, rel_type: &str, target: &str) -> Result<()> {
    xml.empty("Relationship", &[("Id", id), ("Type", rel_type), ("Target", target)])?;
    Ok(())
}

/// Generate `slideN.xml` for one slide.
pub(crate) fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = XmlBuilder::new()?;
    xml.start(
        "p:sld",
        &[("xmlns:a", parts::NS_A), ("xmlns:r", parts::NS_R), ("xmlns:p", parts::NS_P)],
    )?;
    xml.start("p:cSld", &[])?;

    // Background
    if let Some(color) = slide.background {
        xml.start("p:bg", &[])?;
        xml.start("p:bgPr", &[])?;
        solid_fill(&mut xml, &color.hex())?;
        xml.empty("a:effectLst", &[])?;
        xml.end("p:bgPr")?;
        xml.end("p:bg")?;
    }

    // Group shape header of the tree
    xml.start("p:spTree", &[])?;
    xml.start("p:nvGrpSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    xml.empty("p:cNvGrpSpPr", &[])?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvGrpSpPr")?;
    xml.start("p:grpSpPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.empty("a:off", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:ext", &[("cx", "0"), ("cy", "0")])?;
    xml.empty("a:chOff", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:chExt", &[("cx", "0"), ("cy", "0")])?;
    xml.end("a:xfrm")?;
    xml.end("p:grpSpPr")?;

    // Shapes in z-order
    for shape in &slide.shapes {
        shape_xml(&mut xml, shape)?;
    }

    xml.end("p:spTree")?;
    xml.end("p:cSld")?;
    xml.start("p:clrMapOvr", &[])?;
    xml.empty("a:masterClrMapping", &[])?;
    xml.end("p:clrMapOvr")?;
    xml.end("p:sld")?;
    xml.finish()
}

fn shape_xml(xml: &mut XmlBuilder, shape: &Shape) -> Result<()> {
    let id = shape.id.to_string();
    xml.start("p:sp", &[])?;

    xml.start("p:nvSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", id.as_str()), ("name", shape.name.as_str())])?;
    match shape.kind {
        ShapeKind::TextBox(_) => xml.empty("p:cNvSpPr", &[("txBox", "1")])?,
        ShapeKind::RoundedRectangle(_) => xml.empty("p:cNvSpPr", &[])?,
    };
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvSpPr")?;

    xml.start("p:spPr", &[])?;
    let (x, y) = (shape.bounds.left.value().to_string(), shape.bounds.top.value().to_string());
    let (cx, cy) = (
        shape.bounds.width.value().to_string(),
        shape.bounds.height.value().to_string(),
    );
    xml.start("a:xfrm", &[])?;
    xml.empty("a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
    xml.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    xml.end("a:xfrm")?;

    match &shape.kind {
        ShapeKind::RoundedRectangle(style) => rectangle_properties(xml, style)?,
        ShapeKind::TextBox(_) => {
            xml.start("a:prstGeom", &[("prst", "rect")])?;
            xml.empty("a:avLst", &[])?;
            xml.end("a:prstGeom")?;
            xml.empty("a:noFill", &[])?;
        }
    }
    xml.end("p:spPr")?;

    if let ShapeKind::TextBox(frame) = &shape.kind {
        text_body(xml, frame)?;
    }

    xml.end("p:sp")?;
    Ok(())
}

/// Preset geometry, fill and outline of a rounded rectangle.
fn rectangle_properties(xml: &mut XmlBuilder, style: &RectangleStyle) -> Result<()> {
    xml.start("a:prstGeom", &[("prst", "roundRect")])?;
    match style.corner_radius {
        Some(radius) => {
            // Adjustments are stored in 1/100000ths.
            let formula = format!("val {}", (radius * 100_000.0).round() as i64);
            xml.start("a:avLst", &[])?;
            xml.empty("a:gd", &[("name", "adj"), ("fmla", formula.as_str())])?;
            xml.end("a:avLst")?;
        }
        None => {
            xml.empty("a:avLst", &[])?;
        }
    }
    xml.end("a:prstGeom")?;

    solid_fill(xml, &style.fill.hex())?;

    match &style.border {
        Some(border) => {
            let width = border.width.value().to_string();
            xml.start("a:ln", &[("w", width.as_str())])?;
            solid_fill(xml, &border.color.hex())?;
            xml.end("a:ln")?;
        }
        None => {
            xml.start("a:ln", &[])?;
            xml.empty("a:noFill", &[])?;
            xml.end("a:ln")?;
        }
    }
    Ok(())
}

fn text_body(xml: &mut XmlBuilder, frame: &TextFrame) -> Result<()> {
    xml.start("p:txBody", &[])?;
    let wrap = if frame.word_wrap { "square" } else { "none" };
    xml.empty(
        "a:bodyPr",
        &[("wrap", wrap), ("rtlCol", "0"), ("anchor", frame.anchor.as_ooxml())],
    )?;
    xml.empty("a:lstStyle", &[])?;

    for paragraph in &frame.paragraphs {
        paragraph_xml(xml, paragraph)?;
    }

    xml.end("p:txBody")?;
    Ok(())
}

/// One `a:p`. Newlines inside the text become `a:br` soft breaks between runs.
fn paragraph_xml(xml: &mut XmlBuilder, paragraph: &Paragraph) -> Result<()> {
    xml.start("a:p", &[])?;

    xml.start("a:pPr", &[("algn", paragraph.alignment.as_ooxml())])?;
    spacing(xml, "a:spcBef", paragraph.space_before)?;
    spacing(xml, "a:spcAft", paragraph.space_after)?;
    xml.end("a:pPr")?;

    for (i, line) in paragraph.text.split('\n').enumerate() {
        if i > 0 {
            xml.start("a:br", &[])?;
            run_properties(xml, paragraph)?;
            xml.end("a:br")?;
        }
        xml.start("a:r", &[])?;
        run_properties(xml, paragraph)?;
        xml.element("a:t", line)?;
        xml.end("a:r")?;
    }

    xml.end("a:p")?;
    Ok(())
}

/// `a:spcBef` / `a:spcAft` in hundredths of a point.
fn spacing(xml: &mut XmlBuilder, name: &str, points: f64) -> Result<()> {
    let val = ((points * 100.0).round() as i64).to_string();
    xml.start(name, &[])?;
    xml.empty("a:spcPts", &[("val", val.as_str())])?;
    xml.end(name)?;
    Ok(())
}

fn run_properties(xml: &mut XmlBuilder, paragraph: &Paragraph) -> Result<()> {
    let style = &paragraph.style;
    let size = ((style.font_size * 100.0).round() as i64).to_string();
    let bold = if style.bold { "1" } else { "0" };

    xml.start(
        "a:rPr",
        &[("lang", "en-US"), ("sz", size.as_str()), ("b", bold), ("dirty", "0")],
    )?;
    solid_fill(xml, &style.color.hex())?;
    xml.empty("a:latin", &[("typeface", style.font_name.as_str())])?;
    xml.end("a:rPr")?;
    Ok(())
}

fn solid_fill(xml: &mut XmlBuilder, hex: &str) -> Result<()> {
    xml.start("a:solidFill", &[])?;
    xml.empty("a:srgbClr", &[("val", hex)])?;
    xml.end("a:solidFill")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{inches, Bounds, MultilineOptions, TextOptions, Theme};
    use std::io::Read;
    use zip::ZipArchive;

    fn sample_deck() -> Deck {
        let theme = Theme::dark();
        let mut deck = Deck::new();
        let mut canvas = deck.new_slide(&theme);
        canvas.set_background(theme.palette.background);
        canvas.add_rectangle(
            Bounds::inches(0.6, 2.3, 5.8, 4.5),
            theme.palette.before_fill,
            Some(theme.palette.pink),
            Some(0.03),
        );
        canvas.add_text(
            Bounds::inches(1.0, 1.6, 11.3, 1.5),
            "Making Teams Work\nFaster & Smarter",
            TextOptions::new(44.0).bold().centered(),
        );
        canvas.add_multiline_text(
            Bounds::inches(1.0, 3.1, 5.0, 3.5),
            &["📦  One", "🎯  Two"],
            MultilineOptions::new(12.0).spacing(10.0),
        );
        deck.new_slide(&theme)
            .add_rectangle(Bounds::inches(0.6, 0.4, 0.7, 0.7), theme.palette.teal, None, Some(0.1));
        deck
    }

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_contains_required_parts() {
        let bytes = PptxWriter::new().to_bytes(&sample_deck()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();

        for required in [
            parts::CONTENT_TYPES_PATH,
            parts::ROOT_RELS_PATH,
            parts::PRESENTATION_PATH,
            parts::PRESENTATION_RELS_PATH,
            parts::SLIDE_MASTER_PATH,
            parts::SLIDE_LAYOUT_PATH,
            parts::THEME_PATH,
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
        ] {
            assert!(names.contains(&required), "missing {}", required);
        }
        assert!(!names.contains(&"ppt/slides/slide3.xml"));
    }

    #[test]
    fn test_presentation_lists_slides_and_size() {
        let bytes = PptxWriter::new().to_bytes(&sample_deck()).unwrap();
        let xml = read_part(&bytes, parts::PRESENTATION_PATH);
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId6"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId7"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));

        let rels = read_part(&bytes, parts::PRESENTATION_RELS_PATH);
        assert!(rels.contains(r#"Id="rId7""#));
        assert!(rels.contains(r#"Target="slides/slide2.xml""#));

        let types = read_part(&bytes, parts::CONTENT_TYPES_PATH);
        assert!(types.contains(r#"PartName="/ppt/slides/slide2.xml""#));
    }

    #[test]
    fn test_slide_xml_shapes() {
        let deck = sample_deck();
        let xml = slide_xml(&deck.slides[0]).unwrap();

        assert!(xml.contains(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="0B0D17"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect"><a:avLst><a:gd name="adj" fmla="val 3000"/>"#));
        assert!(xml.contains(r#"<a:ln w="12700"><a:solidFill><a:srgbClr val="FF6B9D"/>"#));
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr">"#));
        assert!(xml.contains(r#"sz="4400" b="1""#));
        assert!(xml.contains("<a:t>Making Teams Work</a:t></a:r><a:br>"));
        assert!(xml.contains("<a:t>Faster &amp; Smarter</a:t>"));
        assert!(xml.contains(r#"<a:spcBef><a:spcPts val="1000"/></a:spcBef>"#));
        assert!(xml.contains("<a:t>📦  One</a:t>"));
    }

    #[test]
    fn test_borderless_rectangle_hides_outline() {
        let deck = sample_deck();
        let xml = slide_xml(&deck.slides[1]).unwrap();
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
        assert!(xml.contains(r#"fmla="val 10000""#));
        assert!(!xml.contains("<p:bg>"));
    }

    #[test]
    fn test_empty_deck_is_valid_package() {
        let deck = Deck::new();
        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
        let xml = read_part(&bytes, parts::PRESENTATION_PATH);
        assert!(!xml.contains("sldIdLst"));
        assert!(xml.contains(&format!(r#"cx="{}""#, inches(13.333).value())));
        assert!(xml.contains(r#"cy="6858000""#));
        let app = read_part(&bytes, parts::APP_PROPS_PATH);
        assert!(app.contains("<Application>q3-deck</Application>"));
        assert!(app.contains("<Slides>0</Slides>"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let deck = sample_deck();
        let writer = PptxWriter::new();
        assert_eq!(writer.to_bytes(&deck).unwrap(), writer.to_bytes(&deck).unwrap());
    }

    #[test]
    fn test_staging_path_is_sibling() {
        let staged = staging_path(Path::new("/tmp/out/deck.pptx"));
        assert_eq!(staged, PathBuf::from("/tmp/out/deck.pptx.partial"));
    }

    #[test]
    fn test_write_to_unwritable_path_leaves_nothing() {
        let dir = std::env::temp_dir().join(format!("q3-deck-missing-{}", std::process::id()));
        let path = dir.join("deck.pptx");

        let err = PptxWriter::new().write_to_path(&sample_deck(), &path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_write_to_path_round_trip() {
        let path = std::env::temp_dir().join(format!("q3-deck-writer-{}.pptx", std::process::id()));
        let deck = sample_deck();

        PptxWriter::new().write_to_path(&deck, &path).unwrap();
        let on_disk = fs::read(&path).unwrap();
        assert_eq!(on_disk, PptxWriter::new().to_bytes(&deck).unwrap());
        assert!(!staging_path(&path).exists());

        fs::remove_file(&path).unwrap();
    }
}
