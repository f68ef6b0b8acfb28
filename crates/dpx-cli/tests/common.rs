#![allow(dead_code)]

use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

/// Lay out a fake package root: a setup.py, a tests/ directory, and a bin/
/// directory holding fake python2/python3 interpreters. The fakes append
/// their argv to `invocations.log` in the working directory and exit with the
/// code stored in `<name>.exit` (default 0), so tests can script failures and
/// observe sequencing.
pub fn prepare_fixture(prefix: &str) -> (TempDir, PathBuf, PathBuf) {
    let temp = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .expect("tempdir");
    let project = temp.path().join("pkg");
    fs::create_dir_all(project.join("tests")).expect("tests dir");
    fs::write(
        project.join("setup.py"),
        "from setuptools import setup\n\nsetup(\n    name='pytest-data',\n    version='0.5',\n)\n",
    )
    .expect("setup.py");

    let bin = temp.path().join("bin");
    fs::create_dir_all(&bin).expect("bin dir");
    write_fake_interpreter(&bin, "python2");
    write_fake_interpreter(&bin, "python3");

    (temp, project, bin)
}

/// An interpreter directory with nothing in it, for unresolved-interpreter
/// scenarios.
pub fn prepare_empty_bin(temp: &TempDir) -> PathBuf {
    let bin = temp.path().join("empty-bin");
    fs::create_dir_all(&bin).expect("empty bin dir");
    bin
}

pub fn write_fake_interpreter(bin: &Path, name: &str) {
    let script = format!(
        "#!/bin/sh\nprintf '%s %s\\n' \"{name}\" \"$*\" >> invocations.log\nif [ -f {name}.exit ]; then\n  exit \"$(cat {name}.exit)\"\nfi\nexit 0\n"
    );
    let path = bin.join(name);
    fs::write(&path, script).expect("write fake interpreter");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
    }
}

/// PATH value putting the fake bin directory first.
pub fn path_with(bin: &Path) -> OsString {
    let mut paths = vec![bin.to_path_buf()];
    if let Some(existing) = env::var_os("PATH") {
        paths.extend(env::split_paths(&existing));
    }
    env::join_paths(paths).expect("join PATH")
}

pub fn set_exit_code(project: &Path, name: &str, code: i32) {
    fs::write(project.join(format!("{name}.exit")), code.to_string()).expect("write exit file");
}

pub fn recorded_invocations(project: &Path) -> Vec<String> {
    let log = project.join("invocations.log");
    if !log.exists() {
        return Vec::new();
    }
    fs::read_to_string(log)
        .expect("read invocation log")
        .lines()
        .map(ToString::to_string)
        .collect()
}
