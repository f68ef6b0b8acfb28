use assert_cmd::cargo::cargo_bin_cmd;

mod common;

use common::{path_with, prepare_fixture, recorded_invocations, set_exit_code};

#[cfg(unix)]
#[test]
fn build_invokes_sdist_under_the_primary_interpreter_only() {
    let (_temp, project, bin) = prepare_fixture("dpx-build");

    cargo_bin_cmd!("dpx")
        .current_dir(&project)
        .env("PATH", path_with(&bin))
        .args(["build"])
        .assert()
        .success();

    let calls = recorded_invocations(&project);
    assert_eq!(calls, vec!["python2 setup.py sdist"]);
}

#[cfg(unix)]
#[test]
fn build_exits_with_the_packaging_tool_exit_code() {
    let (_temp, project, bin) = prepare_fixture("dpx-build-fail");
    set_exit_code(&project, "python2", 5);

    cargo_bin_cmd!("dpx")
        .current_dir(&project)
        .env("PATH", path_with(&bin))
        .args(["build"])
        .assert()
        .code(5);

    let calls = recorded_invocations(&project);
    assert_eq!(calls.len(), 1, "no retry and no secondary attempt");
}

#[cfg(unix)]
#[test]
fn build_reports_the_package_name_on_success() {
    let (_temp, project, bin) = prepare_fixture("dpx-build-msg");

    let assert = cargo_bin_cmd!("dpx")
        .current_dir(&project)
        .env("PATH", path_with(&bin))
        .args(["build"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("dpx build: pytest-data sdist built"), "{stdout}");
}
