use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};

/// The packaging entry point every operation drives.
pub const SETUP_SCRIPT: &str = "setup.py";

/// Fixed test-target reference handed to the test-discovery tool.
pub const TEST_TARGET: &str = "tests";

#[derive(Clone, Debug)]
pub struct ProjectSnapshot {
    pub root: PathBuf,
    pub setup_script: PathBuf,
    pub name: Option<String>,
}

impl ProjectSnapshot {
    pub fn read_current() -> Result<Self> {
        let root = current_project_root()?;
        Self::read_from(&root)
    }

    pub fn read_from(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let setup_script = root.join(SETUP_SCRIPT);
        ensure_setup_script_exists(&setup_script)?;
        let name = package_name_from_setup(&setup_script)?;
        Ok(Self {
            root: root.to_path_buf(),
            setup_script,
            name,
        })
    }
}

pub fn current_project_root() -> Result<PathBuf> {
    let dir = env::current_dir().context("unable to determine project root")?;
    if dir.join(SETUP_SCRIPT).exists() {
        Ok(dir)
    } else {
        Err(anyhow!(
            "No Python package found. Run dpx from a directory containing setup.py."
        ))
    }
}

pub fn ensure_setup_script_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(anyhow!("setup.py not found at {}", path.display()))
    }
}

/// Best-effort scrape of `name='...'` from the setup script. Used only for
/// status messages; `None` is fine.
fn package_name_from_setup(path: &Path) -> Result<Option<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    for line in contents.lines() {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix("name") else {
            continue;
        };
        let Some(value) = rest.trim_start().strip_prefix('=') else {
            continue;
        };
        let value = value.trim().trim_end_matches(',').trim();
        let unquoted = value
            .strip_prefix('\'')
            .and_then(|v| v.strip_suffix('\''))
            .or_else(|| value.strip_prefix('"').and_then(|v| v.strip_suffix('"')));
        if let Some(name) = unquoted {
            return Ok(Some(name.to_string()));
        }
    }
    Ok(None)
}

#[derive(Clone, Debug)]
pub struct MissingProjectGuidance {
    pub message: String,
    pub hint: String,
}

pub fn missing_project_guidance() -> MissingProjectGuidance {
    MissingProjectGuidance {
        message: "No Python package found".to_string(),
        hint: "Run dpx from the package root, next to setup.py.".to_string(),
    }
}

pub fn is_missing_project_error(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| cause.to_string().contains("No Python package found"))
}
