use crate::utils::error::{InstallError, Result};
use std::path::{Component, Path, PathBuf};

pub const CODEX_HOME_VAR: &str = "CODEX_HOME";
pub const DEFAULT_CODEX_DIR: &str = ".codex";
pub const PROMPTS_DIR: &str = "prompts";

/// Process environment captured once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub codex_home: Option<PathBuf>,
    pub home_dir: Option<PathBuf>,
    pub current_dir: PathBuf,
}

impl Environment {
    pub fn from_process() -> Result<Self> {
        Ok(Self {
            codex_home: std::env::var_os(CODEX_HOME_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            home_dir: dirs::home_dir(),
            current_dir: std::env::current_dir()?,
        })
    }
}

/// 目標目錄優先順序: 明確指定 > $CODEX_HOME/prompts > ~/.codex/prompts
pub fn resolve_target(explicit: Option<&str>, env: &Environment) -> Result<PathBuf> {
    let raw = if let Some(target) = explicit {
        tracing::debug!("target from explicit path: {}", target);
        expand_tilde(Path::new(target), env.home_dir.as_deref())?
    } else if let Some(codex_home) = &env.codex_home {
        tracing::debug!("target from {}: {}", CODEX_HOME_VAR, codex_home.display());
        expand_tilde(codex_home, env.home_dir.as_deref())?.join(PROMPTS_DIR)
    } else {
        let home = env
            .home_dir
            .as_deref()
            .ok_or(InstallError::HomeDirUnavailable)?;
        tracing::debug!("target from home directory default");
        home.join(DEFAULT_CODEX_DIR).join(PROMPTS_DIR)
    };

    Ok(absolutize(&raw, &env.current_dir))
}

/// Expands a leading `~` component. `~user` forms are left alone.
pub fn expand_tilde(path: &Path, home: Option<&Path>) -> Result<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };

    let home = home.ok_or(InstallError::HomeDirUnavailable)?;
    Ok(if rest.as_os_str().is_empty() {
        home.to_path_buf()
    } else {
        home.join(rest)
    })
}

/// Joins relative paths onto `base` and folds `.`/`..` lexically. The path need not exist.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
