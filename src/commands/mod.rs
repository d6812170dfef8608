mod aliases;
mod config;

pub use aliases::{cmd_add, cmd_list, cmd_open};
pub use config::{cmd_config, ConfigAction};

use anyhow::Result;
use std::path::PathBuf;

use opn::{locate, AliasStore, Config};

/// Everything a command needs, resolved once from the environment.
struct Session {
    home: PathBuf,
    config: Config,
}

impl Session {
    fn load() -> Result<Self> {
        let home = locate::locate()?;
        log::debug!("Home directory: {}", home.display());
        let config = Config::load_from(&Config::path_in(&home))?;
        Ok(Self { home, config })
    }

    fn config_path(&self) -> PathBuf {
        Config::path_in(&self.home)
    }

    /// The alias file, created empty if missing.
    fn store(&self) -> Result<AliasStore> {
        let store = AliasStore::in_dir(&self.home);
        store.ensure_exists()?;
        Ok(store)
    }
}
