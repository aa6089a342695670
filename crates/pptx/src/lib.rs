//! PPTX (Office Open XML) backend for decks built with `deck-core`.
//!
//! A .pptx file is a ZIP archive of XML parts. [`PptxWriter`] serializes a
//! [`deck_core::Deck`] into one; [`PptxReader`] reads the slides back for
//! inspection.

mod parts;
pub mod reader;
pub mod writer;
mod xml;

pub use reader::{DeckSummary, PptxReader, ShapeSummary, SlideSummary};
pub use writer::PptxWriter;
