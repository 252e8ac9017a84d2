use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mindz")]
#[command(about = "A fast, project-aware mind map for the command line", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global map
    #[arg(short, long, global = true)]
    pub global: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the mind map (the default)
    #[command(alias = "ls")]
    Show {
        /// Flat outline-numbered listing instead of the tree view
        #[arg(long)]
        flat: bool,

        /// ASCII connectors instead of box-drawing glyphs
        #[arg(long)]
        ascii: bool,
    },

    /// Add a topic under a parent
    #[command(alias = "a")]
    Add {
        /// Parent topic (outline position like 1.2, a topic text, or "root")
        parent: String,

        /// Text of the new topic (defaults to the configured new-text)
        #[arg(required = false)]
        text: Option<String>,
    },

    /// Delete one or more topics, each with its whole subtree
    #[command(alias = "rm")]
    Delete {
        /// Topics (e.g. 1 2.1 "Research")
        #[arg(required = true, num_args = 1..)]
        nodes: Vec<String>,
    },

    /// Rename a topic
    #[command(alias = "mv")]
    Rename {
        /// Topic to rename
        node: String,

        /// New text (opens the editor if not provided)
        #[arg(required = false)]
        text: Option<String>,
    },

    /// Export the map as a Markdown outline or JSON
    Export {
        /// Output file (default: mindz-<timestamp>.md)
        #[arg(required = false)]
        output: Option<PathBuf>,

        /// Force a format instead of detecting it from the extension
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Import a Markdown outline
    Import {
        /// File to import
        path: PathBuf,

        /// Graft under this topic instead of replacing the map
        #[arg(long)]
        into: Option<String>,

        /// Replace a non-empty map without asking
        #[arg(long)]
        force: bool,
    },

    /// Print the path of the map file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., new-text)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Verify and repair the stored map
    Doctor,

    /// Initialize the map store
    Init,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    Md,
    Json,
}
