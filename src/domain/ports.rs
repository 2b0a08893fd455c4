use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Filesystem operations the installer depends on.
pub trait Storage {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Regular files directly inside `dir`, in whatever order the backend yields them.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    fn create_dir_all(&self, dir: &Path) -> Result<()>;

    /// Copy bytes, permissions and timestamps from `from` to `to`.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<()>;
}

/// A layer of install options: command-line flags or a settings file.
pub trait ConfigProvider {
    fn target(&self) -> Option<&str>;
    fn source(&self) -> Option<&str>;
    fn force(&self) -> bool;
    fn dry_run(&self) -> bool;
}
