//! Per-project exclusive lock
//!
//! Lock files live in the models root (`.<name>.lock`), never inside the
//! project directory, so packaging cannot sweep them into `__compile__`.

use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::value_objects::ProjectName;
use crate::error::BfgResult;

/// Held for the duration of a create/package step; released on drop
#[derive(Debug)]
pub struct ProjectLock {
    file: fs::File,
    path: PathBuf,
}

impl ProjectLock {
    /// Block until the lock for `name` under `root_dir` is acquired
    pub fn acquire(root_dir: &Path, name: &ProjectName) -> BfgResult<Self> {
        fs::create_dir_all(root_dir)?;

        let path = lock_path(root_dir, name);
        let file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)?;
        file.lock_exclusive()?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ProjectLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

pub fn lock_path(root_dir: &Path, name: &ProjectName) -> PathBuf {
    root_dir.join(format!(".{}.lock", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lock_file_lives_in_root_dir() {
        let dir = tempdir().unwrap();
        let name = ProjectName::new("demo").unwrap();

        let lock = ProjectLock::acquire(dir.path(), &name).unwrap();

        assert_eq!(lock.path(), dir.path().join(".demo.lock"));
        assert!(lock.path().exists());
    }

    #[test]
    fn lock_can_be_reacquired_after_drop() {
        let dir = tempdir().unwrap();
        let name = ProjectName::new("demo").unwrap();

        drop(ProjectLock::acquire(dir.path(), &name).unwrap());
        let again = ProjectLock::acquire(dir.path(), &name);

        assert!(again.is_ok());
    }

    #[test]
    fn held_lock_blocks_other_handles() {
        let dir = tempdir().unwrap();
        let name = ProjectName::new("demo").unwrap();

        let _held = ProjectLock::acquire(dir.path(), &name).unwrap();
        let other = fs::File::open(lock_path(dir.path(), &name)).unwrap();

        assert!(other.try_lock_exclusive().is_err());
    }

    #[test]
    fn acquire_creates_missing_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("models");
        let name = ProjectName::new("demo").unwrap();

        let _lock = ProjectLock::acquire(&root, &name).unwrap();

        assert!(root.is_dir());
    }
}
