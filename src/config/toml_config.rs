use crate::core::selection::SelectionRules;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // ${VAR_NAME}
    Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub install: InstallSection,
    #[serde(default)]
    pub selection: SelectionSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InstallSection {
    pub target: Option<String>,
    pub source: Option<String>,
    #[serde(default)]
    pub force: bool,
    #[serde(default)]
    pub dry_run: bool,
}

/// Any list left out keeps its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SelectionSection {
    pub prefixes: Option<Vec<String>>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

impl SettingsFile {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        let settings: SettingsFile = toml::from_str(&processed)?;
        Ok(settings)
    }

    /// 替換環境變數 (例如 ${CODEX_HOME})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn selection_rules(&self) -> SelectionRules {
        let mut rules = SelectionRules::default();
        if let Some(prefixes) = &self.selection.prefixes {
            rules.prefixes = prefixes.clone();
        }
        if let Some(include) = &self.selection.include {
            rules.include = include.clone();
        }
        if let Some(exclude) = &self.selection.exclude {
            rules.exclude = exclude.clone();
        }
        rules
    }
}

impl ConfigProvider for SettingsFile {
    fn target(&self) -> Option<&str> {
        self.install.target.as_deref()
    }

    fn source(&self) -> Option<&str> {
        self.install.source.as_deref()
    }

    fn force(&self) -> bool {
        self.install.force
    }

    fn dry_run(&self) -> bool {
        self.install.dry_run
    }
}

impl Validate for SettingsFile {
    fn validate(&self) -> Result<()> {
        if let Some(target) = &self.install.target {
            validate_path("install.target", target)?;
        }
        if let Some(source) = &self.install.source {
            validate_path("install.source", source)?;
        }
        self.selection_rules().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::InstallError;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = SettingsFile::from_toml_str("").unwrap();
        assert_eq!(settings, SettingsFile::default());
        assert_eq!(settings.selection_rules(), SelectionRules::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_full_file() {
        let settings = SettingsFile::from_toml_str(
            r#"
[install]
target = "~/agents/prompts"
force = true

[selection]
prefixes = ["team-"]
exclude = ["README.md", "team-draft.md"]
"#,
        )
        .unwrap();

        assert_eq!(settings.target(), Some("~/agents/prompts"));
        assert_eq!(settings.source(), None);
        assert!(settings.force());
        assert!(!settings.dry_run());

        let rules = settings.selection_rules();
        assert_eq!(rules.prefixes, vec!["team-"]);
        assert_eq!(rules.include, vec!["CODEX_COMPATIBILITY.md"]);
        assert!(rules.matches("team-review.md"));
        assert!(!rules.matches("team-draft.md"));
        assert!(!rules.matches("bee-foo.md"));
    }

    #[test]
    fn test_env_var_substitution() {
        let home = std::env::var("HOME").unwrap_or_default();
        let settings = SettingsFile::from_toml_str(
            r#"
[install]
target = "${HOME}/prompts"
source = "${PROMPT_INSTALL_SURELY_UNSET_VAR}/src"
"#,
        )
        .unwrap();

        if !home.is_empty() {
            assert_eq!(settings.target(), Some(format!("{home}/prompts").as_str()));
        }
        assert_eq!(
            settings.source(),
            Some("${PROMPT_INSTALL_SURELY_UNSET_VAR}/src")
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = SettingsFile::from_toml_str("[install]\ntarge = \"x\"\n").unwrap_err();
        assert!(matches!(err, InstallError::TomlError(_)));
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let settings = SettingsFile::from_toml_str("[selection]\nprefixes = [\"\"]\n").unwrap();
        assert!(settings.validate().is_err());
    }
}
