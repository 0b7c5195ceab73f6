use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "sectoc")]
#[command(about = "Number document headings and build a table of contents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to _toc.yml, _toc.yaml, _toc.toml or _toc.json in ./)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<Vec<PathBuf>>,

    /// Root section id, used when the TOC container has no data-section-id
    #[arg(short, long, value_name = "ID", global = true)]
    pub root_section: Option<String>,

    /// Deepest TOC level listed (deeper headings are still numbered)
    #[arg(short, long, value_name = "DEPTH", global = true)]
    pub max_depth: Option<usize>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Number the headings of a document and install its table of contents
    #[command(alias = "g")]
    Generate {
        /// HTML or Markdown file, or a directory of them
        input: PathBuf,

        /// Output file or directory (defaults to rewriting HTML in place; Markdown gets a .html sibling)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print only the rendered table of contents
    #[command(alias = "t")]
    Toc {
        /// HTML, Markdown or JSON heading list
        input: PathBuf,
    },

    /// Print the section number of every heading
    #[command(alias = "o")]
    Outline {
        /// HTML, Markdown or JSON heading list
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutlineFormat::Text)]
        format: OutlineFormat,
    },
}

/// Formats accepted by the outline command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutlineFormat {
    Text,
    Json,
}
