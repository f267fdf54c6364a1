//! mindscan CLI - image to mind-map outline tool

mod server;

use std::fs;
use std::io::Read;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use mindscan::{JsonFormat, Mindscan};

#[derive(Parser)]
#[command(name = "mindscan")]
#[command(version)]
#[command(about = "Turn photographed notes into mind-map outlines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan an image and print the recognized text and outline
    Scan {
        /// Input image file (png, jpg, jpeg, gif, bmp, tiff)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "outline")]
        format: OutputMode,

        /// OCR traineddata language
        #[arg(long, env = "MINDSCAN_LANG", default_value = "eng")]
        lang: String,

        /// Skip image preprocessing before OCR
        #[arg(long)]
        no_preprocess: bool,
    },

    /// Build an outline from a text file (or stdin), skipping OCR
    Outline {
        /// Input text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "outline")]
        format: OutputMode,
    },

    /// Run the HTTP intake service
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// OCR traineddata language
        #[arg(long, env = "MINDSCAN_LANG", default_value = "eng")]
        lang: String,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// Indented bulleted outline
    Outline,
    /// Pretty JSON
    Json,
    /// Compact JSON
    JsonCompact,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan {
            input,
            output,
            format,
            lang,
            no_preprocess,
        } => cmd_scan(&input, output.as_deref(), format, &lang, no_preprocess),
        Commands::Outline { input, format } => cmd_outline(input.as_deref(), format),
        Commands::Serve { host, port, lang } => server::run(host, port, &lang),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_scan(
    input: &Path,
    output: Option<&Path>,
    format: OutputMode,
    lang: &str,
    no_preprocess: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut scanner = Mindscan::new().with_language(lang);
    if no_preprocess {
        scanner = scanner.without_preprocessing();
    }

    let result = scanner.scan_file(input)?;

    let rendered = match format {
        OutputMode::Outline => result.outline(),
        OutputMode::Json => result.to_json(JsonFormat::Pretty)?,
        OutputMode::JsonCompact => result.to_json(JsonFormat::Compact)?,
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        if format == OutputMode::Outline {
            println!("{}", "Extracted text".cyan().bold());
            println!("{}", "─".repeat(40).dimmed());
            println!("{}", result.text.trim());
            println!();
            println!("{}", "Mind map".cyan().bold());
            println!("{}", "─".repeat(40).dimmed());
        }
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_outline(
    input: Option<&Path>,
    format: OutputMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let map = mindscan::mind_map(&text);
    let rendered = match format {
        OutputMode::Outline => map.render(),
        OutputMode::Json => map.to_json(JsonFormat::Pretty)?,
        OutputMode::JsonCompact => map.to_json(JsonFormat::Compact)?,
    };

    println!("{}", rendered);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mindscan".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Image to mind-map outline tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/mindscan-rs/mindscan".dimmed()
    );
    println!("License: MIT");
}
