use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "markdown-sitegen")]
#[command(author, version)]
#[command(about = "Build a static HTML site from a tree of markdown documents")]
#[command(after_help = "\
EXAMPLES:

    # Build ./content into ./public using ./template.html and ./static
    markdown-sitegen build

    # Build for a site served from https://example.github.io/my-repo/
    markdown-sitegen build --base-path /my-repo/

    # Print the HTML for one document
    markdown-sitegen render content/index.md

CONFIGURATION:

Settings are read from sitegen.toml in the current directory, or from --config.
Relative paths are resolved against the config file's directory.

    static_dir = \"static\"
    content_dir = \"content\"
    template_path = \"template.html\"
    output_dir = \"public\"
    base_path = \"/\"
    on_error = \"abort\"   # or \"skip\"
")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log every copied and generated file
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Publish static assets and generate every page
    Build {
        /// URL prefix for root-relative links (overrides the config)
        #[arg(long)]
        base_path: Option<String>,

        /// Skip pages that fail to convert instead of stopping
        #[arg(long)]
        keep_going: bool,
    },

    /// Render one markdown file to an HTML fragment on stdout
    Render {
        /// Markdown file to render
        file: PathBuf,
    },

    /// Write a default sitegen.toml
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
