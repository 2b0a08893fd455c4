pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use config::target::Environment;
pub use config::toml_config::SettingsFile;
pub use config::InstallConfig;
pub use core::{installer::Installer, selection::SelectionRules};
pub use utils::error::{InstallError, Result};
