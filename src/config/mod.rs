//! Configuration types and path resolution for koda.
//!
//! Koda stores its settings as TOML at the platform's XDG config path
//! (e.g. `~/.config/koda/config.toml` on Linux) and ephemeral data under
//! the XDG cache directory (`~/.cache/koda/`).

mod loader;
mod paths;
mod resolve;
mod types;

pub use types::Config;
#[allow(unused_imports)]
pub use types::ProviderEntry;

use anyhow::Result;

impl Config {
    /// Load config with precedence: project > global > defaults.
    /// Creates default config file if none exists.
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project = Self::load_project()?;

        let mut config = global;
        if let Some(proj) = project {
            config = Self::merge(config, proj);
        }

        config.resolve_substitutions();
        Ok(config)
    }
}
