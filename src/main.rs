//! Shoes Layout CLI
//!
//! Usage:
//!   shoes-layout [OPTIONS] <FILE>
//!
//! Options:
//!   -W, --width <PX>       Override the app window width
//!   -H, --height <PX>      Override the app window height
//!   -f, --format <FORMAT>  Output format: json, tree or svg [default: tree]
//!   --apply-margins        Offset boxes by their margins
//!   --names                Label named boxes in SVG output
//!   --compact              Single-line SVG without the XML declaration
//!   -d, --debug            Also print the layout tree to stderr
//!   -h, --help             Print help

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use shoes_layout::{
    render_result, render_tree, Document, Error, LayoutConfig, OutputFormat, RenderConfig,
    SvgConfig,
};

#[derive(Parser)]
#[command(name = "shoes-layout")]
#[command(about = "Compute the layout of a Shoes drawable document")]
struct Cli {
    /// Document file (.toml or .json)
    input: PathBuf,

    /// Override the app window width
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Override the app window height
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Tree)]
    format: Format,

    /// Offset boxes by their margins
    #[arg(long)]
    apply_margins: bool,

    /// Label named boxes in SVG output
    #[arg(long)]
    names: bool,

    /// Single-line SVG without the XML declaration
    #[arg(long)]
    compact: bool,

    /// Debug mode: also print the layout tree to stderr
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Tree,
    Svg,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Tree => OutputFormat::Tree,
            Format::Svg => OutputFormat::Svg,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut doc = match Document::from_file(&cli.input) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(width) = cli.width {
        doc.app.width = width;
    }
    if let Some(height) = cli.height {
        doc.app.height = height;
    }

    let mut svg = SvgConfig::default().with_names(cli.names);
    if cli.compact {
        svg = svg.compact();
    }
    let config = RenderConfig::new()
        .with_layout(LayoutConfig::new().with_margins(cli.apply_margins))
        .with_svg(svg)
        .with_format(cli.format.into());

    let result = match doc.layout(&config.layout) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", Error::from(e));
            std::process::exit(1);
        }
    };

    if cli.debug {
        eprintln!("=== Layout Debug ===");
        eprint!("{}", render_tree(&result));
        eprintln!("====================");
    }

    match render_result(&result, &config) {
        Ok(output) => {
            println!("{}", output.trim_end());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
