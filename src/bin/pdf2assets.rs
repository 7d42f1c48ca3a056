//! CLI binary for pdf2assets.
//!
//! A thin shim over the library crate: one subcommand per operation, flags
//! mapped onto `ConversionConfig`, results printed as a human summary or as
//! JSON with `--json`.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use pdf2assets::{
    convert_pdf, inspect, resize_directory, resize_in_place, write_placeholder, ConversionConfig,
    PageSelection, PdfInfo, ProgressCallback, SharedProgress,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress: a live bar plus one log line per page or file written.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// The bar starts as a spinner; `on_start` resizes it once the page or
    /// file count is known.
    fn new(prefix: &'static str) -> Arc<Self> {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_prefix(prefix);
        bar.enable_steady_tick(Duration::from_millis(80));
        Arc::new(Self { bar })
    }
}

impl ProgressCallback for CliProgress {
    fn on_start(&self, total_items: usize) {
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  [{bar:40.green/238}] {pos:>3}/{len}  ⏱ {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");

        self.bar.set_length(total_items as u64);
        self.bar.set_style(style);
    }

    fn on_item_done(&self, item_num: usize, total_items: usize, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.bar.println(format!(
            "  {} {:>3}/{:<3}  {}",
            green("✓"),
            item_num,
            total_items,
            name
        ));
        self.bar.inc(1);
    }

    fn on_complete(&self, _total_items: usize) {
        self.bar.finish_and_clear();
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # One trimmed JPEG per page → public/assets/deck_page_<n>.jpg
  pdf2assets convert deck.pdf

  # Higher density, custom directory, pages 1-5 only
  pdf2assets convert --dpi 400 --pages 1-5 -o site/img deck.pdf

  # Placeholder text file (deck.txt) for a PDF
  pdf2assets placeholder deck.pdf

  # Normalise every .jpg in the asset directory to 1024x768
  pdf2assets resize

  # Resize one file to a different slot size
  pdf2assets resize --size 800x600 hero.jpg

  # Page count and metadata, no conversion
  pdf2assets inspect deck.pdf

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Directory containing the pdfium shared library.
                    Falls back to the system library when unset.
                    Only the convert and inspect commands need pdfium.
"#;

/// Convert PDF pages to trimmed JPEG assets and resize JPEGs in place.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2assets",
    version,
    about = "Convert PDF pages to trimmed JPEG assets and resize JPEGs to a fixed resolution",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output structured JSON instead of a human summary.
    #[arg(long, global = true)]
    json: bool,

    /// Disable the progress bar.
    #[arg(long, global = true)]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert each page of a PDF into a trimmed JPEG.
    Convert {
        /// Path to the source PDF.
        pdf: PathBuf,

        /// Directory the page JPEGs are written into.
        #[arg(short, long, default_value = "public/assets")]
        output: PathBuf,

        /// Rasterisation density in pixels per inch.
        #[arg(long, default_value_t = 300,
              value_parser = clap::value_parser!(u32).range(72..=600))]
        dpi: u32,

        /// JPEG encoder quality.
        #[arg(long, default_value_t = 95,
              value_parser = clap::value_parser!(u8).range(1..=100))]
        quality: u8,

        /// Page selection: all, 5, 3-15, or 1,3,5,7.
        #[arg(long, default_value = "all")]
        pages: String,

        /// Keep full rendered pages; skip white-border trimming.
        #[arg(long)]
        no_trim: bool,

        /// PDF user password for encrypted documents.
        #[arg(long)]
        password: Option<String>,
    },

    /// Write the `<basename>.txt` placeholder file for a PDF.
    Placeholder {
        /// Path to the source PDF.
        pdf: PathBuf,

        /// Directory the text file is written into.
        #[arg(short, long, default_value = "public/assets")]
        output: PathBuf,
    },

    /// Resize JPEGs to a fixed resolution, overwriting them in place.
    Resize {
        /// A .jpg file, or a directory whose .jpg files are all resized.
        #[arg(default_value = "public/assets")]
        path: PathBuf,

        /// Target resolution as WIDTHxHEIGHT.
        #[arg(long, default_value = "1024x768")]
        size: String,

        /// JPEG encoder quality.
        #[arg(long, default_value_t = 95,
              value_parser = clap::value_parser!(u8).range(1..=100))]
        quality: u8,
    },

    /// Print PDF metadata without converting anything.
    Inspect {
        /// Path to the source PDF.
        pdf: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Suppress INFO-level library logs when the progress bar is active; the
    // bar provides all the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Convert {
            ref pdf,
            ref output,
            dpi,
            quality,
            ref pages,
            no_trim,
            ref password,
        } => {
            let mut builder = ConversionConfig::builder()
                .dpi(dpi)
                .jpeg_quality(quality)
                .trim(!no_trim)
                .pages(parse_pages(pages)?);
            if let Some(pw) = password {
                builder = builder.password(pw.clone());
            }
            if show_progress {
                builder = builder.progress(CliProgress::new("Converting") as SharedProgress);
            }
            let config = builder.build().context("invalid configuration")?;

            let result = convert_pdf(pdf, output, &config).context("conversion failed")?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if !cli.quiet {
                eprintln!(
                    "{} {} page(s) → {}  {}",
                    green("✔"),
                    bold(&result.stats.pages_written.to_string()),
                    output.display(),
                    dim(&format!("{}ms", result.stats.total_ms)),
                );
            }
        }

        Command::Placeholder { ref pdf, ref output } => {
            let path = write_placeholder(pdf, output).context("placeholder creation failed")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&path)?);
            } else if !cli.quiet {
                eprintln!("{} created {}", green("✔"), bold(&path.display().to_string()));
            }
        }

        Command::Resize {
            ref path,
            ref size,
            quality,
        } => {
            let (width, height) = parse_size(size)?;
            let mut builder = ConversionConfig::builder()
                .target_size(width, height)
                .jpeg_quality(quality);
            if show_progress && path.is_dir() {
                builder = builder.progress(CliProgress::new("Resizing") as SharedProgress);
            }
            let config = builder.build().context("invalid configuration")?;

            if path.is_dir() {
                let batch = resize_directory(path, &config).context("resize batch failed")?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&batch)?);
                } else if !cli.quiet {
                    eprintln!(
                        "{} {} file(s) resized to {}x{}  {}",
                        green("✔"),
                        bold(&batch.files.len().to_string()),
                        width,
                        height,
                        dim(&format!("{}ms", batch.total_ms)),
                    );
                }
            } else {
                let out = resize_in_place(path, &config).context("resize failed")?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&out)?);
                } else if !cli.quiet {
                    eprintln!(
                        "{} {} {}x{} → {}x{}",
                        green("✔"),
                        bold(&out.path.display().to_string()),
                        out.original_width,
                        out.original_height,
                        out.width,
                        out.height,
                    );
                }
            }
        }

        Command::Inspect { ref pdf } => {
            let info = inspect(pdf).context("failed to inspect PDF")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print_info(pdf, &info);
            }
        }
    }

    Ok(())
}

fn print_info(pdf: &Path, info: &PdfInfo) {
    println!("File:         {}", pdf.display());
    if let Some(ref t) = info.title {
        println!("Title:        {}", t);
    }
    if let Some(ref a) = info.author {
        println!("Author:       {}", a);
    }
    if let Some(ref p) = info.producer {
        println!("Producer:     {}", p);
    }
    println!("Pages:        {}", info.page_count);
    println!("PDF Version:  {}", info.pdf_version);
}

/// Parse `--pages` into a `PageSelection`.
fn parse_pages(s: &str) -> Result<PageSelection> {
    let s = s.trim().to_lowercase();

    if s == "all" {
        return Ok(PageSelection::All);
    }

    // Range: "3-15"
    if let Some((start, end)) = s.split_once('-') {
        let start: usize = start.trim().parse().context("invalid start page in range")?;
        let end: usize = end.trim().parse().context("invalid end page in range")?;
        if start < 1 {
            bail!("pages are 1-indexed, minimum is 1 (got {start})");
        }
        if start > end {
            bail!("invalid page range '{start}-{end}': start must be <= end");
        }
        return Ok(PageSelection::Range(start, end));
    }

    // Set: "1,3,5,7"
    if s.contains(',') {
        let pages: Vec<usize> = s
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<usize>()
                    .with_context(|| format!("invalid page number: '{}'", p.trim()))
            })
            .collect::<Result<Vec<_>>>()?;
        if pages.iter().any(|&p| p < 1) {
            bail!("pages are 1-indexed, minimum is 1");
        }
        return Ok(PageSelection::Set(pages));
    }

    // Single page: "5"
    let page: usize = s.parse().context("invalid page number")?;
    if page < 1 {
        bail!("pages are 1-indexed, minimum is 1 (got {page})");
    }
    Ok(PageSelection::Single(page))
}

/// Parse `--size` strings like "1024x768".
fn parse_size(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s
        .trim()
        .to_lowercase()
        .split_once('x')
        .map(|(w, h)| (w.to_string(), h.to_string()))
        .with_context(|| format!("invalid size '{s}': expected WIDTHxHEIGHT, e.g. 1024x768"))?;
    let width: u32 = w.trim().parse().with_context(|| format!("invalid width in '{s}'"))?;
    let height: u32 = h.trim().parse().with_context(|| format!("invalid height in '{s}'"))?;
    if width == 0 || height == 0 {
        bail!("size dimensions must be non-zero (got {s})");
    }
    Ok((width, height))
}
