use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Stores user-configurable preferences for a Daftar installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Identity this installation records entries for. Authorization is a
    /// concern of the surrounding transport, not of the core.
    #[serde(default = "Config::default_owner")]
    pub owner: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the ledger data file. Defaults to
    /// `<base>/ledger`.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: Self::default_owner(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn default_owner() -> String {
        "owner".into()
    }

    pub fn resolve_data_root(&self, base: &Path) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }
        base.join("ledger")
    }
}

/// Default base directory for config and ledger data:
/// `~/Documents/Daftar`, falling back to the home directory.
pub fn default_base_dir() -> PathBuf {
    let base = dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("Daftar")
}
