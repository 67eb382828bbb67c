//! Application wiring: config, store, and clock for one installation.

use std::path::PathBuf;

use daftar_config::{default_base_dir, Config, ConfigManager};
use daftar_domain::OwnerId;
use daftar_storage_json::JsonLedgerStore;

use crate::{errors::CliError, system_clock::SystemClock};

/// Environment override for the base directory holding config and ledger
/// data. Used by tests and portable installs.
pub const DATA_DIR_ENV: &str = "DAFTAR_DATA_DIR";

pub struct App {
    pub config: Config,
    pub store: JsonLedgerStore,
    pub clock: SystemClock,
}

impl App {
    /// Loads config and opens the ledger store under the resolved base
    /// directory.
    pub fn bootstrap() -> Result<Self, CliError> {
        let base = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_base_dir);
        let manager = ConfigManager::with_base_dir(&base)?;
        let config = manager.load()?;
        let store = JsonLedgerStore::open(config.resolve_data_root(&base))?;
        Ok(Self {
            config,
            store,
            clock: SystemClock,
        })
    }

    /// Identity this installation records entries for.
    pub fn owner(&self) -> OwnerId {
        OwnerId::new(self.config.owner.clone())
    }
}
