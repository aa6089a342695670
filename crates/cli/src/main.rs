//! CLI tool for generating and inspecting the quarter 3 review decks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use deck_pptx::{DeckSummary, PptxReader, PptxWriter};
use q3_review::Variant;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Generate the quarter 3 review deck as a PowerPoint file.
#[derive(Parser, Debug)]
#[command(name = "q3-deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a deck and write it to disk
    Generate {
        /// Colour theme and slide set
        #[arg(short, long, value_enum, default_value_t = ThemeArg::Dark)]
        theme: ThemeArg,

        /// Output file (default: the theme's file name in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the slides and shapes of a written deck
    Inspect {
        /// Input .pptx file
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ThemeArg {
    /// 11 slides, dark background
    Dark,
    /// 8 slides, white background
    White,
}

impl From<ThemeArg> for Variant {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => Variant::Dark,
            ThemeArg::White => Variant::White,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    match args.command {
        Command::Generate { theme, output } => generate(theme.into(), output.as_deref()),
        Command::Inspect { input, json } => inspect(&input, json),
    }
}

/// Build the deck for `variant` and write it to `output`.
fn generate(variant: Variant, output: Option<&Path>) -> Result<()> {
    let output_path = get_output_path(variant, output);
    log::debug!("Generating {} deck into {}", variant, output_path.display());

    let deck = q3_review::build(variant);
    PptxWriter::new()
        .write_to_path(&deck, &output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("\n✅ PowerPoint saved to: {}", output_path.display());
    println!("   Total slides: {}", deck.slide_count());

    Ok(())
}

/// Determine where the deck is written.
fn get_output_path(variant: Variant, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(variant.default_file_name()),
    }
}

/// Read a deck back and print what it contains.
fn inspect(input_path: &Path, json: bool) -> Result<()> {
    let file = File::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;

    let summary = PptxReader::new()
        .read(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    if json {
        let output =
            serde_json::to_string_pretty(&summary).with_context(|| "Failed to serialize summary")?;
        println!("{}", output);
    } else {
        print!("{}", format_summary(&summary));
    }

    Ok(())
}

/// Plain-text listing: one block per slide, one line per shape.
fn format_summary(summary: &DeckSummary) -> String {
    let mut out = format!(
        "{} slides, {:.3} x {:.3} in\n",
        summary.slide_count(),
        summary.slide_width.as_inches(),
        summary.slide_height.as_inches()
    );

    for slide in &summary.slides {
        let background = slide
            .background
            .map(|c| c.to_string())
            .unwrap_or_else(|| "none".to_string());
        out.push_str(&format!(
            "\nSlide {} (background {}, {} shapes)\n",
            slide.number,
            background,
            slide.shapes.len()
        ));

        for shape in &slide.shapes {
            let mut line = format!(
                "  {:<22} @ {:.2},{:.2} {:.2}x{:.2}",
                shape.name,
                shape.x.as_inches(),
                shape.y.as_inches(),
                shape.cx.as_inches(),
                shape.cy.as_inches()
            );
            if let Some(fill) = shape.fill {
                line.push_str(&format!(" fill {}", fill));
            }
            if let Some(text) = &shape.text {
                line.push_str(&format!(" {:?}", text));
            }
            out.push_str(&line);
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Cursor;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let args = Args::try_parse_from(["q3-deck", "generate"]).unwrap();
        match args.command {
            Command::Generate { theme, output } => {
                assert_eq!(theme, ThemeArg::Dark);
                assert!(output.is_none());
            }
            Command::Inspect { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn test_theme_flag() {
        let args = Args::try_parse_from(["q3-deck", "generate", "--theme", "white", "-v"]).unwrap();
        assert!(args.verbose);
        match args.command {
            Command::Generate { theme, .. } => assert_eq!(Variant::from(theme), Variant::White),
            Command::Inspect { .. } => panic!("expected generate"),
        }
        assert!(Args::try_parse_from(["q3-deck", "generate", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            get_output_path(Variant::White, None),
            PathBuf::from("Q3_Review_White_Theme.pptx")
        );
        assert_eq!(
            get_output_path(Variant::Dark, Some(Path::new("out/deck.pptx"))),
            PathBuf::from("out/deck.pptx")
        );
    }

    #[test]
    fn test_format_summary() {
        let bytes = PptxWriter::new()
            .to_bytes(&q3_review::build(Variant::White))
            .unwrap();
        let summary = PptxReader::new().read(Cursor::new(bytes)).unwrap();
        let text = format_summary(&summary);

        assert!(text.starts_with("8 slides, 13.333 x 7.500 in\n"));
        assert!(text.contains("Slide 1 (background #FFFFFF"));
        assert!(text.contains("\"Thank You\""));
    }
}
