//! mathtext - render prose with embedded LaTeX math to HTML.
//!
//! This binary provides the CLI interface to the mathtext libraries,
//! reading raw content from files or stdin and printing markup.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::io::{self, Read, Write};

use mathtext_config::Config;
use mathtext_core::{Position, Result};
use mathtext_explain::{render_payload, Payload};
use mathtext_render::Renderer;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("mathtext v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    let renderer = Renderer::with_config(&config)?;
    info!("Using typesetter `{}`", renderer.typesetter().name());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for content in read_inputs(cli)? {
        let rendered = if cli.json {
            render_json(&renderer, &content)?
        } else if cli.segments {
            describe_segments(&renderer, &content)
        } else {
            match cli.class {
                Some(ref class) => renderer.render_with_class(&content, Some(class)),
                None => renderer.render(&content),
            }
        };
        writeln!(out, "{}", rendered)?;
    }

    out.flush()?;
    Ok(())
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;

    if let Some(ref name) = cli.typesetter {
        debug!("Typesetter overridden on the command line: {}", name);
        config.typeset.backend.clone_from(name);
    }

    Ok(config)
}

/// Read every input as one raw content string.
fn read_inputs(cli: &Cli) -> Result<Vec<String>> {
    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(vec![content]);
    }

    cli.files
        .iter()
        .map(|path| -> Result<String> {
            info!("Reading file: {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        })
        .collect()
}

/// Render an explanation payload and serialize it back to JSON.
fn render_json(renderer: &Renderer, content: &str) -> Result<String> {
    let payload = Payload::from_json(content)?;
    render_payload(renderer, &payload).to_json_pretty()
}

/// One line per segment: position, kind and value.
fn describe_segments(renderer: &Renderer, content: &str) -> String {
    renderer
        .segmenter()
        .segment(content)
        .iter()
        .map(|segment| {
            format!(
                "{}\t{}\t{:?}",
                Position::locate(content, segment.span.start),
                segment.kind,
                segment.value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
