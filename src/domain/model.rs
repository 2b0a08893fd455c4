use std::fmt;
use std::path::PathBuf;

/// A candidate markdown file in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyAction {
    /// Destination did not exist.
    Copy,
    /// Destination existed and `force` was set.
    Update,
    /// Destination existed and `force` was not set.
    Skip,
}

impl CopyAction {
    pub fn label(&self) -> &'static str {
        match self {
            CopyAction::Copy => "copy",
            CopyAction::Update => "update",
            CopyAction::Skip => "skip",
        }
    }

    pub fn writes(&self) -> bool {
        !matches!(self, CopyAction::Skip)
    }
}

impl fmt::Display for CopyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub source: SourceFile,
    pub destination: PathBuf,
    pub action: CopyAction,
}

/// Ordered by source file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyPlan {
    pub entries: Vec<PlanEntry>,
}

impl CopyPlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_writes(&self) -> bool {
        self.entries.iter().any(|e| e.action.writes())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallSummary {
    pub copied: usize,
    pub skipped: usize,
    pub total: usize,
    pub dry_run: bool,
    pub force: bool,
}

impl InstallSummary {
    pub fn needs_force_hint(&self) -> bool {
        self.skipped > 0 && !self.force
    }
}
