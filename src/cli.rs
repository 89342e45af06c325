//! Command-line interface for Briefmark.

use clap::Parser;
use std::path::PathBuf;

/// Briefmark - renders the legal assistant's markdown subset to HTML.
///
/// Understands `#`-`###` headings, `**bold**`, `-` and `1.` list items,
/// paragraphs and line breaks. Output is not escaped.
#[derive(Parser, Debug)]
#[command(
    name = "briefmark",
    author = "Briefmark Contributors",
    version,
    about = "Renders a small markdown subset to HTML",
    after_help = "Examples:\n  \
                  cat answer.md | briefmark\n  \
                  briefmark petition.md -o petition.html --wrap\n  \
                  briefmark -c '[markup]\\nParagraph = \"\"' notes.md"
)]
pub struct Cli {
    /// Input files to render (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Write the HTML to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Wrap each document in the container div
    #[arg(long = "wrap")]
    pub wrap: bool,

    /// Emit bare tags (list item classes are kept)
    #[arg(long = "no-classes")]
    pub no_classes: bool,

    /// Log the output of every rewrite pass at debug level
    #[arg(long = "trace-passes")]
    pub trace_passes: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Print the default configuration and exit
    #[arg(long = "default-config")]
    pub default_config: bool,

    /// Create the config file with defaults if it is missing, then exit
    #[arg(long = "init-config")]
    pub init_config: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use briefmark_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
