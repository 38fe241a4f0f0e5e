//! Command-line interface for mathtext.

use clap::Parser;
use std::path::PathBuf;

/// mathtext - render prose with embedded LaTeX math to HTML.
///
/// Text outside `$...$` and `$$...$$` is escaped and newlines become line
/// breaks; math is typeset by the configured backend.
#[derive(Parser, Debug)]
#[command(
    name = "mathtext",
    author = "Mathtext Contributors",
    version,
    about = "Render prose with embedded LaTeX math to safe HTML",
    after_help = "Examples:\n  \
                  echo 'Energy: $E = mc^2$' | mathtext\n  \
                  mathtext notes.txt --class 'prose text-lg'\n  \
                  mathtext -c '[features]\\nCurrency = false' input.txt\n  \
                  mathtext --json explanation.json"
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

    /// Wrap the output in a container with this extra class
    #[arg(long = "class", value_name = "CLASSES", conflicts_with_all = ["json", "segments"])]
    pub class: Option<String>,

    /// Math typesetter backend (overrides the config)
    #[arg(short = 't', long = "typesetter", value_name = "NAME")]
    pub typesetter: Option<String>,

    /// Treat input as an explanation JSON payload and render every field
    #[arg(long = "json", conflicts_with = "segments")]
    pub json: bool,

    /// Print the segment list instead of markup
    #[arg(long = "segments")]
    pub segments: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

/// Show paths information.
pub fn show_paths() {
    use mathtext_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
    println!(
        "  typesetters           {}",
        mathtext_typeset::available_backends().join(", ")
    );
}
