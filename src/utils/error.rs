use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("source directory not found: {}", path.display())]
    SourceMissing { path: PathBuf },

    #[error("no matching Bee/Learn prompt files found in {}", path.display())]
    NoMatchingFiles { path: PathBuf },

    #[error("Cannot determine home directory")]
    HomeDirUnavailable,

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl InstallError {
    /// 所有錯誤都以 1 結束；略過的檔案不是錯誤。
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// 給使用者的下一步建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InstallError::SourceMissing { .. } => {
                "Check that .codex/commands ships with this installation or pass --source"
            }
            InstallError::NoMatchingFiles { .. } => {
                "Only .md files named bee*, learn* or CODEX_COMPATIBILITY.md are installed"
            }
            InstallError::HomeDirUnavailable => "Pass --target or set CODEX_HOME",
            InstallError::CopyFailed { .. } | InstallError::IoError(_) => {
                "Check permissions and free space on the target, then rerun"
            }
            InstallError::TomlError(_)
            | InstallError::ConfigError { .. }
            | InstallError::InvalidConfigValue { .. } => "Fix the settings file and rerun",
        }
    }

    /// Only a failed copy can leave earlier files installed.
    pub fn may_leave_partial_install(&self) -> bool {
        matches!(self, InstallError::CopyFailed { .. })
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;
