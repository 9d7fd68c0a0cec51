//! Blogmark - render pre-parsed markdown blog documents.
//!
//! This binary provides the CLI interface to the blogmark crates: it loads
//! configuration and the JSON document library, renders the requested
//! documents, and writes them as terminal text, HTML or JSON.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, Command, Format};
use log::{debug, error, info, warn, LevelFilter};
use std::io::{self, Write};
use std::path::PathBuf;

use blogmark_config::Config;
use blogmark_core::{BlockNode, DataAccess, Result};
use blogmark_library::JsonLibrary;
use blogmark_render::{to_html, BlockRenderer, RenderNode, TerminalRenderer};

/// Library file used when neither the config nor the command line names one.
const DEFAULT_LIBRARY: &str = "blog-lang.json";

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("blogmark v{}", env!("CARGO_PKG_VERSION"));

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
    let config = load_config(cli)?;
    debug!("Loaded config: {:?}", config);

    let renderer = BlockRenderer::from_features(&config.features);
    let features: Vec<String> = renderer
        .scanner()
        .features()
        .iter()
        .map(ToString::to_string)
        .collect();
    debug!("Inline features: {}", features.join(", "));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command() {
        Command::Languages => {
            let library = open_library(&config)?;
            for language in library.list_languages() {
                writeln!(out, "{}", language)?;
            }
        }

        Command::Titles { language } => {
            let library = open_library(&config)?;
            let titles = library.list_titles(&language);
            if titles.is_empty() {
                warn!("no titles under language {:?}", language);
            }
            for title in titles {
                writeln!(out, "{}", title)?;
            }
        }

        Command::Show { language, title } => {
            let library = open_library(&config)?;
            let nodes = renderer.render_document(&library, &language, &title);
            if nodes.is_empty() {
                warn!("no document {:?} under language {:?}", title, language);
            }
            emit(cli, &config, &nodes, &mut out)?;
        }

        Command::Hub => {
            let library = open_library(&config)?;
            let nodes = renderer.render_hub(&library);
            emit(cli, &config, &nodes, &mut out)?;
        }

        Command::Render { file } => {
            let text = std::fs::read_to_string(&file)?;
            let blocks = BlockNode::list_from_json(serde_json::from_str(&text)?);
            debug!("Read {} blocks from {}", blocks.len(), file.display());
            let nodes = renderer.render(&blocks);
            emit(cli, &config, &nodes, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Load configuration and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;

    if let Some(ref library) = cli.library {
        config.library.path = Some(library.clone());
    }
    if cli.width > 0 {
        config.style.width = cli.width as usize;
    }
    if cli.no_pretty_pad {
        config.style.pretty_pad = false;
    }

    Ok(config)
}

fn open_library(config: &Config) -> Result<JsonLibrary> {
    let path = config
        .library
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY));
    debug!("Opening library {}", path.display());
    JsonLibrary::load(&path)
}

/// Write rendered nodes in the requested format.
fn emit<W: Write>(cli: &Cli, config: &Config, nodes: &[RenderNode], out: &mut W) -> Result<()> {
    match cli.format {
        Format::Ansi => {
            let mut terminal = TerminalRenderer::from_config(out, &config.style);
            terminal.write_nodes(nodes)?;
        }
        Format::Html => {
            write!(out, "{}", to_html(nodes))?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, nodes)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
