#[cfg(feature = "cli")]
pub mod cli;
pub mod target;
pub mod toml_config;

use crate::core::selection::SelectionRules;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use std::path::{Path, PathBuf};
use target::{absolutize, expand_tilde, resolve_target, Environment};
use toml_config::SettingsFile;

/// Prompt sources shipped with the crate under `.codex/commands`.
pub fn default_source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join(".codex")
        .join("commands")
}

/// Fully resolved options for one run. Built once, then handed to the installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub force: bool,
    pub dry_run: bool,
    pub rules: SelectionRules,
}

impl InstallConfig {
    /// 合併命令列與設定檔：命令列的路徑優先，布林旗標取聯集
    pub fn resolve<C: ConfigProvider>(
        flags: &C,
        settings: Option<&SettingsFile>,
        env: &Environment,
    ) -> Result<Self> {
        if let Some(settings) = settings {
            settings.validate()?;
        }

        let target = flags
            .target()
            .or_else(|| settings.and_then(|s| s.target()));
        if let Some(target) = target {
            validate_path("target", target)?;
        }
        let target_dir = resolve_target(target, env)?;

        let source_dir = match flags.source().or_else(|| settings.and_then(|s| s.source())) {
            Some(source) => {
                validate_path("source", source)?;
                absolutize(
                    &expand_tilde(Path::new(source), env.home_dir.as_deref())?,
                    &env.current_dir,
                )
            }
            None => default_source_dir(),
        };

        let config = Self {
            source_dir,
            target_dir,
            force: flags.force() || settings.is_some_and(|s| s.force()),
            dry_run: flags.dry_run() || settings.is_some_and(|s| s.dry_run()),
            rules: settings.map(SettingsFile::selection_rules).unwrap_or_default(),
        };
        tracing::debug!("resolved install config: {:?}", config);
        Ok(config)
    }
}
