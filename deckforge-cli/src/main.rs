use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deckforge::deck::{self, SlideOutline};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "deckforge",
    about = "Builds the 94Cram product deck as a PDF",
    version,
    author
)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble the deck and save it (default)
    Build {
        /// Output file path [default: next to the executable]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write content streams without Flate compression
        #[arg(long)]
        uncompressed: bool,
    },

    /// Print one line per slide without writing a file
    Outline {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct OutlineReport {
    pages: usize,
    slides: Vec<SlideOutline>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Build {
        output: None,
        uncompressed: false,
    }) {
        Commands::Build {
            output,
            uncompressed,
        } => {
            let path = match output {
                Some(path) => path,
                None => default_output_path()?,
            };
            let pages = build(&path, !uncompressed)?;

            println!("✅ 簡報已生成：{}", path.display());
            println!("📊 共 {pages} 頁投影片");
        }

        Commands::Outline { json } => {
            let slides = deck::outline(&deck::reference_slides())?;
            if json {
                let report = OutlineReport {
                    pages: slides.len(),
                    slides,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_outline(&slides);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "deckforge=debug,deckforge_cli=debug"
    } else {
        "deckforge=info,deckforge_cli=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// The directory holding the running executable, joined with the deck file name.
fn default_output_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Could not locate the running executable")?;
    let dir = exe
        .parent()
        .context("The executable path has no parent directory")?;
    Ok(dir.join(deck::OUTPUT_FILE_NAME))
}

fn build(path: &Path, compress: bool) -> Result<usize> {
    let mut doc = deck::build_reference_deck().context("Failed to assemble the deck")?;
    doc.set_compress(compress);
    debug!(compress = doc.compress(), "assembled reference deck");

    doc.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "deck written");
    Ok(doc.page_count())
}

fn print_outline(slides: &[SlideOutline]) {
    println!("{:>3}  {:<15} {:<10} {:>6}  First text", "#", "Layout", "Background", "Shapes");
    println!("{}", "-".repeat(64));
    for slide in slides {
        let background = slide
            .background
            .map(|palette| format!("{palette:?}"))
            .unwrap_or_else(|| "-".to_string());
        let first_text = slide
            .first_text
            .as_deref()
            .and_then(|text| text.lines().next())
            .unwrap_or("");
        println!(
            "{:>3}  {:<15} {:<10} {:>6}  {}",
            slide.number, slide.kind, background, slide.shapes, first_text
        );
    }
}
