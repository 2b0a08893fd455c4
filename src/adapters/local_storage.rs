use crate::domain::ports::Storage;
use crate::utils::error::{InstallError, Result};
use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn create_dir_all(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        let wrap = |source: std::io::Error| InstallError::CopyFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        };

        // fs::copy 會一併複製權限位元
        fs::copy(from, to).map_err(wrap)?;

        let metadata = fs::metadata(from).map_err(wrap)?;
        let mut times = FileTimes::new().set_modified(metadata.modified().map_err(wrap)?);
        if let Ok(accessed) = metadata.accessed() {
            times = times.set_accessed(accessed);
        }

        // A read-only handle is enough for the owner to set explicit timestamps.
        let dest = File::open(to).map_err(wrap)?;
        dest.set_times(times).map_err(wrap)?;
        Ok(())
    }
}
