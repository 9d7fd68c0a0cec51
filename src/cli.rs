//! Command-line interface for blogmark.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Blogmark - render pre-parsed markdown blog documents.
///
/// Documents are read from a JSON library grouped by language and title,
/// and written to the terminal, as HTML, or as JSON.
#[derive(Parser, Debug)]
#[command(
    name = "blogmark",
    author = "Blogmark Contributors",
    version,
    about = "Render pre-parsed markdown blog documents to the terminal, HTML or JSON",
    after_help = "Examples:\n  \
                  blogmark languages\n  \
                  blogmark titles Rust\n  \
                  blogmark show Rust Ownership\n  \
                  blogmark -f html hub > hub.html\n  \
                  blogmark -w 100 render blocks.json"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn", global = true)]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Path to the JSON document library (overrides the config)
    #[arg(long = "library", value_name = "PATH", global = true)]
    pub library: Option<PathBuf>,

    /// Set the output width (0 = use config, then the terminal)
    #[arg(short = 'w', long = "width", default_value = "0", global = true)]
    pub width: u16,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Ansi, global = true)]
    pub format: Format,

    /// Disable pretty code block borders (use spaces instead)
    #[arg(long = "no-pretty-pad", global = true)]
    pub no_pretty_pad: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the languages in the library
    Languages,
    /// List the titles written under a language
    Titles {
        language: String,
    },
    /// Render one document
    Show {
        language: String,
        title: String,
    },
    /// Render every document, grouped by language
    Hub,
    /// Render a JSON array of blocks from a file
    Render {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Styled terminal text
    Ansi,
    /// An HTML fragment
    Html,
    /// Presentation nodes as JSON
    Json,
}

impl Cli {
    /// The subcommand to run; listing languages when none is given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Languages)
    }
}

/// Show paths information.
pub fn show_paths() {
    use blogmark_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());
    let library_path = Config::load()
        .ok()
        .and_then(|c| c.library.path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
    println!("  library               {}", library_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["blogmark"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.command(), Command::Languages);
        assert_eq!(cli.width, 0);
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.format, Format::Ansi);
        assert!(!cli.show_paths);
    }

    #[test]
    fn test_cli_parse_titles() {
        let cli = Cli::parse_from(["blogmark", "titles", "C++"]);
        assert_eq!(
            cli.command(),
            Command::Titles {
                language: "C++".to_string()
            }
        );
    }

    #[test]
    fn test_cli_parse_show() {
        let cli = Cli::parse_from(["blogmark", "show", "Bash", "Prompt strings"]);
        assert_eq!(
            cli.command(),
            Command::Show {
                language: "Bash".to_string(),
                title: "Prompt strings".to_string(),
            }
        );
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "blogmark",
            "-w", "100",
            "-l", "debug",
            "-f", "html",
            "--library", "/srv/blog-lang.json",
            "--no-pretty-pad",
            "hub",
        ]);
        assert_eq!(cli.width, 100);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.format, Format::Html);
        assert_eq!(cli.library, Some(PathBuf::from("/srv/blog-lang.json")));
        assert!(cli.no_pretty_pad);
        assert_eq!(cli.command(), Command::Hub);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from(["blogmark", "render", "blocks.json", "-f", "json"]);
        assert_eq!(cli.format, Format::Json);
        assert_eq!(
            cli.command(),
            Command::Render {
                file: PathBuf::from("blocks.json")
            }
        );
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["blogmark", "-f", "pdf"]).is_err());
    }

    #[test]
    fn test_cli_parse_paths() {
        let cli = Cli::parse_from(["blogmark", "--paths"]);
        assert!(cli.show_paths);
    }
}
