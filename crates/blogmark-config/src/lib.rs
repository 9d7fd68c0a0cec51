//! Configuration for blogmark.
//!
//! Settings live in one TOML file with three sections: `[features]` switches
//! inline markup on and off, `[style]` controls terminal layout and colours,
//! and `[library]` points at the JSON document library. Keys are PascalCase.
//!
//! The file is looked up in the platform config directory
//! (`~/.config/blogmark/config.toml` on Linux). Without one, the built-in
//! defaults from [`Config::default_toml`] apply.
//!
//! ```no_run
//! use blogmark_config::Config;
//!
//! let config = Config::load_with_override(Some("[style]\nWidth = 100")).unwrap();
//! assert_eq!(config.style.width, 100);
//! ```

mod features;
mod library;
mod style;

pub use features::FeaturesConfig;
pub use library::LibraryConfig;
pub use style::StyleConfig;

use blogmark_core::{BlogmarkError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Built-in configuration.
const DEFAULT_TOML: &str = r##"[features]
Links = true
Code  = true
Bold  = true

[style]
Margin     = 2
ListIndent = 2
PrettyPad  = true
Width      = 0
Bright = "#87ceeb"
Head   = "#98fb98"
Symbol = "#dda0dd"
Grey   = "#808080"
Dark   = "#1a1a2e"
Mid    = "#2d2d44"

[library]
Path = "blog-lang.json"
"##;

/// Everything blogmark reads from its config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Inline feature flags
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Terminal style
    #[serde(default)]
    pub style: StyleConfig,

    /// Where documents are read from
    #[serde(default)]
    pub library: LibraryConfig,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_TOML).expect("built-in config is valid TOML")
    }
}

impl Config {
    /// The built-in configuration as TOML text.
    ///
    /// ```
    /// use blogmark_config::Config;
    /// assert!(Config::default_toml().contains("[library]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// `config.toml` inside [`Config::config_dir`].
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// The platform config directory for blogmark, if the platform has one.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "blogmark")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Read the user's config file, or the defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Read one TOML file. Missing sections and keys take their defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| BlogmarkError::Config(format!("{}: {}", path.display(), e)))
    }

    /// [`Config::load`], then layer the `-c/--config` argument on top.
    ///
    /// The argument is either a path to a TOML file or TOML text.
    pub fn load_with_override(extra: Option<&str>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(extra) = extra {
            config.layer(&read_override(extra)?)?;
        }
        Ok(config)
    }

    /// Overwrite only the keys that `overlay` sets; everything else is kept.
    ///
    /// ```
    /// use blogmark_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.layer("[features]\nLinks = false").unwrap();
    /// config.layer("[style]\nWidth = 100").unwrap();
    /// assert!(!config.features.links);
    /// assert_eq!(config.style.width, 100);
    /// ```
    pub fn layer(&mut self, overlay: &str) -> Result<()> {
        let overlay: toml::Table = toml::from_str(overlay)
            .map_err(|e| BlogmarkError::Config(format!("--config: {}", e)))?;

        let mut table = match toml::Value::try_from(&*self) {
            Ok(toml::Value::Table(table)) => table,
            Ok(_) => toml::Table::new(),
            Err(e) => return Err(BlogmarkError::Config(format!("cannot serialise config: {}", e))),
        };
        merge_tables(&mut table, overlay);

        *self = toml::Value::Table(table)
            .try_into()
            .map_err(|e| BlogmarkError::Config(format!("--config: {}", e)))?;
        Ok(())
    }

    /// Write this configuration as TOML.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self)
            .map_err(|e| BlogmarkError::Config(format!("cannot serialise config: {}", e)))?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

/// `-c/--config` names a file if one exists at that path, otherwise it is TOML text.
fn read_override(extra: &str) -> Result<String> {
    let path = Path::new(extra);
    if path.is_file() {
        Ok(std::fs::read_to_string(path)?)
    } else {
        Ok(extra.to_string())
    }
}

/// Copy every key of `overlay` into `base`, descending into tables both sides have.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        let value = match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(inner)), toml::Value::Table(overlay)) => {
                merge_tables(inner, overlay);
                continue;
            }
            (_, value) => value,
        };
        base.insert(key, value);
    }
}
