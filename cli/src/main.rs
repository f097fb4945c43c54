//! mdinline CLI - Markdown to inline-styled HTML

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use mdinline::{JsonFormat, MdInline, PunctuationOptions, RenderStats, StyleConfig};

#[derive(Parser)]
#[command(name = "mdinline")]
#[command(version)]
#[command(about = "Turn Markdown into inline-styled HTML for rich-text editors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format Markdown into inline-styled HTML
    Html {
        /// Input Markdown file (stdin if omitted or "-")
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: StyleArgs,

        /// Skip punctuation normalization
        #[arg(long)]
        no_normalize: bool,

        /// Apply Unicode NFC before the punctuation passes
        #[arg(long)]
        nfc: bool,

        /// Print element statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Dump parsed blocks as JSON
    Blocks {
        /// Input Markdown file (stdin if omitted or "-")
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the text after punctuation normalization
    Normalize {
        /// Input Markdown file (stdin if omitted or "-")
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct StyleArgs {
    /// JSON style file; keys present there override the flags below
    #[arg(long, value_name = "JSON")]
    style: Option<PathBuf>,

    /// Body text color
    #[arg(long, env = "MDINLINE_TEXT_COLOR", default_value = "#333333")]
    text_color: String,

    /// Accent color for headings, rules, bold text and checkboxes
    #[arg(long, env = "MDINLINE_ACCENT_COLOR", default_value = "#07c160")]
    accent_color: String,

    /// Base font size in px
    #[arg(long, default_value = "15")]
    font_size: f64,

    /// Unitless line height
    #[arg(long, default_value = "1.75")]
    line_height: f64,

    /// Letter spacing in px
    #[arg(long, default_value = "0.5")]
    letter_spacing: f64,

    /// Paragraph bottom margin in px
    #[arg(long, default_value = "16")]
    paragraph_margin: f64,
}

impl StyleArgs {
    fn resolve(&self) -> mdinline::Result<StyleConfig> {
        let style = StyleConfig::new(
            self.text_color.as_str(),
            self.accent_color.as_str(),
            self.font_size,
            self.line_height,
            self.letter_spacing,
            self.paragraph_margin,
        );

        match &self.style {
            Some(path) => {
                log::debug!("Loading style overrides from {}", path.display());
                style.merge_path(path)
            }
            None => Ok(style),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html {
            input,
            output,
            style,
            no_normalize,
            nfc,
            stats,
        }) => cmd_html(
            input.as_deref(),
            output.as_deref(),
            &style,
            no_normalize,
            nfc,
            stats,
        ),
        Some(Commands::Blocks { input, compact }) => cmd_blocks(input.as_deref(), compact),
        Some(Commands::Normalize { input }) => cmd_normalize(input.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: mdinline html [FILE] [-o OUTPUT]".yellow());
            println!("       mdinline --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_html(
    input: Option<&Path>,
    output: Option<&Path>,
    style: &StyleArgs,
    no_normalize: bool,
    nfc: bool,
    stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let mut formatter = MdInline::new(style.resolve()?)
        .with_punctuation(PunctuationOptions::standard().with_unicode_nfc(nfc))
        .with_stats(stats);
    if no_normalize {
        formatter = formatter.without_normalization();
    }

    let result = formatter.format(&text);

    write_output(output, &result.content)?;
    if stats {
        print_stats(&result.stats)?;
    }

    Ok(())
}

fn cmd_blocks(input: Option<&Path>, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    let doc = mdinline::parse_text(&text);

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = mdinline::render::to_json(&doc, format)?;
    println!("{}", json);

    Ok(())
}

fn cmd_normalize(input: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(input)?;
    print!("{}", mdinline::normalize::normalize(&text));
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdinline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to inline-styled HTML formatter");
    println!();
    println!("License: MIT");
}

fn read_input(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            log::debug!("Reading {}", path.display());
            fs::read_to_string(path)
        }
        _ => {
            log::debug!("Reading stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> io::Result<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn print_stats(stats: &RenderStats) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("{}", "Render Statistics".cyan().bold());
    eprintln!("{}", "─".repeat(40).dimmed());
    eprintln!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}
