//! Briefmark - renders the legal assistant's markdown subset to HTML.
//!
//! This binary provides the CLI interface to the briefmark library,
//! rendering files or stdin and writing the markup to stdout or a file.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, trace, LevelFilter};
use std::fs::File;
use std::io::{self, Read, Write};

use briefmark_config::Config;
use briefmark_core::Result;
use briefmark_render::{Markup, MarkupClasses, Renderer};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    if cli.show_paths {
        cli::show_paths();
        return;
    }

    if cli.default_config {
        print!("{}", Config::default_toml());
        return;
    }

    if cli.init_config {
        match Config::ensure_config_file() {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                eprintln!("Failed to create config file: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    setup_logging(&cli.log_level);
    info!("Briefmark v{}", env!("CARGO_PKG_VERSION"));

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
    let config = load_config(cli);
    let renderer = create_renderer(cli, &config)?;
    let wrap = cli.wrap || config.output.wrap();
    debug!("Markup: {:?}, wrap: {}", renderer.markup().classes(), wrap);

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => {
            info!("Writing to {}", path.display());
            Box::new(File::create(path)?)
        }
        None => Box::new(io::stdout().lock()),
    };

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        writeln!(out, "{}", render_document(&renderer, &input, wrap, cli.trace_passes))?;
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let input = std::fs::read_to_string(path)?;
            writeln!(out, "{}", render_document(&renderer, &input, wrap, cli.trace_passes))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Load configuration with optional overrides.
///
/// A broken override is reported and skipped; rendering goes on with
/// the base configuration.
fn load_config(cli: &Cli) -> Config {
    match Config::load_with_override(cli.config.as_deref()) {
        Ok(config) => {
            if let Some(ref config_arg) = cli.config {
                debug!("Merged config override: {}", config_arg);
            }
            config
        }
        Err(e) => {
            error!("Failed to load config: {}", e);
            Config::load().unwrap_or_else(|e| {
                error!("Failed to load base config: {}", e);
                Config::defaults()
            })
        }
    }
}

/// Build the renderer from config and CLI options.
fn create_renderer(cli: &Cli, config: &Config) -> Result<Renderer> {
    let mut classes = MarkupClasses::from_config(&config.markup);
    if cli.no_classes {
        classes = classes.bare();
    }
    Ok(Renderer::with_markup(Markup::new(classes)?))
}

/// Render one document, optionally logging every intermediate pass.
fn render_document(renderer: &Renderer, input: &str, wrap: bool, trace_passes: bool) -> String {
    trace!("Input: {} bytes", input.len());

    if trace_passes {
        for (pass, html) in renderer.render_traced(input) {
            debug!("after {}: {}", pass, html);
        }
    }

    if wrap {
        renderer.render_wrapped(input)
    } else {
        renderer.render(input)
    }
}
