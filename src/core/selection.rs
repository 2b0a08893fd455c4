use crate::domain::model::SourceFile;
use crate::domain::ports::Storage;
use crate::utils::error::{InstallError, Result};
use crate::utils::validation::{validate_file_name, validate_prefix, Validate};
use std::path::Path;

pub const DEFAULT_PREFIXES: &[&str] = &["bee", "learn"];
pub const COMPATIBILITY_DOC: &str = "CODEX_COMPATIBILITY.md";
pub const EXCLUDED_README: &str = "README.md";
pub const MARKDOWN_EXTENSION: &str = "md";

/// 決定來源目錄中哪些檔案要安裝
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRules {
    pub prefixes: Vec<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for SelectionRules {
    fn default() -> Self {
        Self {
            prefixes: DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect(),
            include: vec![COMPATIBILITY_DOC.to_string()],
            exclude: vec![EXCLUDED_README.to_string()],
        }
    }
}

impl SelectionRules {
    /// Case-sensitive. Exclusion wins over both prefix and include matches.
    pub fn matches(&self, file_name: &str) -> bool {
        let is_markdown = Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext == MARKDOWN_EXTENSION);
        if !is_markdown {
            return false;
        }

        if self.exclude.iter().any(|name| name == file_name) {
            return false;
        }

        self.include.iter().any(|name| name == file_name)
            || self.prefixes.iter().any(|p| file_name.starts_with(p.as_str()))
    }

    /// Returns the matching files of `source_dir` sorted by name.
    pub fn select<S: Storage>(&self, storage: &S, source_dir: &Path) -> Result<Vec<SourceFile>> {
        if !storage.is_dir(source_dir) {
            return Err(InstallError::SourceMissing {
                path: source_dir.to_path_buf(),
            });
        }

        let mut selected: Vec<SourceFile> = storage
            .list_files(source_dir)?
            .into_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?.to_string();
                if self.matches(&name) {
                    Some(SourceFile { name, path })
                } else {
                    tracing::debug!("ignoring {}", path.display());
                    None
                }
            })
            .collect();

        if selected.is_empty() {
            return Err(InstallError::NoMatchingFiles {
                path: source_dir.to_path_buf(),
            });
        }

        selected.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::debug!("selected {} source files", selected.len());
        Ok(selected)
    }
}

impl Validate for SelectionRules {
    fn validate(&self) -> Result<()> {
        for prefix in &self.prefixes {
            validate_prefix("selection.prefixes", prefix)?;
        }
        for name in &self.include {
            validate_file_name("selection.include", name)?;
        }
        for name in &self.exclude {
            validate_file_name("selection.exclude", name)?;
        }
        Ok(())
    }
}
