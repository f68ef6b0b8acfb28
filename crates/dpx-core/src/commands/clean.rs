use std::{fs, path::Path};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Recursively delete byte-cache artifacts under `root`: `*.pyc` files and
/// whole `__pycache__` directories. Unconditional, no confirmation. Returns
/// the number of files removed.
pub(crate) fn sweep_bytecode(root: &Path) -> Result<usize> {
    let mut removed = 0;
    let mut walker = WalkDir::new(root).into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry.context("failed to walk project tree")?;
        let path = entry.path();
        if entry.file_type().is_dir() && entry.file_name() == "__pycache__" {
            removed += count_files(path)?;
            walker.skip_current_dir();
            fs::remove_dir_all(path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
        } else if entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == "pyc")
        {
            fs::remove_file(path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
            removed += 1;
        }
    }
    Ok(removed)
}

fn count_files(dir: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in WalkDir::new(dir) {
        let entry = entry.context("failed to walk bytecode cache")?;
        if entry.file_type().is_file() {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir");
        }
        fs::write(path, b"\0").expect("write");
    }

    #[test]
    fn sweep_removes_pyc_files_anywhere_in_the_tree() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(&temp.path().join("pkg/mod.pyc"));
        touch(&temp.path().join("pkg/sub/deep.pyc"));
        touch(&temp.path().join("top.pyc"));

        let removed = sweep_bytecode(temp.path()).expect("sweep");

        assert_eq!(removed, 3);
        assert!(!temp.path().join("pkg/mod.pyc").exists());
        assert!(!temp.path().join("pkg/sub/deep.pyc").exists());
    }

    #[test]
    fn sweep_removes_pycache_directories_wholesale() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(&temp.path().join("pkg/__pycache__/mod.cpython-311.pyc"));
        touch(&temp.path().join("pkg/__pycache__/other.cpython-311.pyc"));

        let removed = sweep_bytecode(temp.path()).expect("sweep");

        assert_eq!(removed, 2);
        assert!(!temp.path().join("pkg/__pycache__").exists());
        assert!(temp.path().join("pkg").exists());
    }

    #[test]
    fn sweep_leaves_non_matching_files_alone() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(&temp.path().join("pkg/mod.py"));
        touch(&temp.path().join("pkg/data.pyconfig"));
        touch(&temp.path().join("pkg/mod.pyc"));

        let removed = sweep_bytecode(temp.path()).expect("sweep");

        assert_eq!(removed, 1);
        assert!(temp.path().join("pkg/mod.py").exists());
        assert!(temp.path().join("pkg/data.pyconfig").exists());
    }

    #[test]
    fn sweep_of_a_clean_tree_is_a_no_op() {
        let temp = tempfile::tempdir().expect("tempdir");
        touch(&temp.path().join("setup.py"));
        assert_eq!(sweep_bytecode(temp.path()).expect("sweep"), 0);
    }
}
