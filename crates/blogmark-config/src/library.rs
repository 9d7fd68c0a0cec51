//! Library location configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the JSON document library lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LibraryConfig {
    /// Path to the library file. Relative paths resolve against the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_path_is_not_serialised() {
        let text = toml::to_string(&LibraryConfig::default()).unwrap();
        assert!(text.is_empty());
    }
}
