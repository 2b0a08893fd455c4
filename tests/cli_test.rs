//! End-to-end tests for the `prompt-install` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_sources(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::write(dir.join(name), format!("# {name}\n")).unwrap();
    }
}

/// Binary with HOME and CODEX_HOME pinned inside `root`.
fn prompt_install(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prompt-install").unwrap();
    cmd.env("HOME", root.join("home"))
        .env_remove("CODEX_HOME")
        .env_remove("RUST_LOG")
        .current_dir(root);
    cmd
}

fn scenario_source(root: &Path) -> std::path::PathBuf {
    let source = root.join("prompts");
    write_sources(
        &source,
        &[
            "bee-foo.md",
            "learn-bar.md",
            "CODEX_COMPATIBILITY.md",
            "README.md",
            "other.md",
        ],
    );
    source
}

#[test]
fn test_install_into_explicit_target() {
    let temp_dir = TempDir::new().unwrap();
    let source = scenario_source(temp_dir.path());
    let target = temp_dir.path().join("out");

    prompt_install(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .arg("--target")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("mode: install\n"))
        .stdout(predicate::str::contains("\ncopy   CODEX_COMPATIBILITY.md\n"))
        .stdout(predicate::str::contains(
            "\n\nsummary: copied=3, skipped=0, total=3\n",
        ))
        .stdout(predicate::str::contains("other.md").not())
        .stderr(predicate::str::is_empty());

    assert!(target.join("bee-foo.md").exists());
    assert!(!target.join("README.md").exists());
}

#[test]
fn test_skip_is_success_with_hint() {
    let temp_dir = TempDir::new().unwrap();
    let source = scenario_source(temp_dir.path());
    let target = temp_dir.path().join("out");
    write_sources(&target, &["bee-foo.md"]);

    prompt_install(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .arg("--target")
        .arg(&target)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("skip   bee-foo.md"))
        .stdout(predicate::str::contains("summary: copied=2, skipped=1, total=3"))
        .stdout(predicate::str::contains(
            "note: rerun with --force to overwrite existing prompts",
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_codex_home_is_used_without_target() {
    let temp_dir = TempDir::new().unwrap();
    let source = scenario_source(temp_dir.path());
    let codex_home = temp_dir.path().join("codex");

    prompt_install(temp_dir.path())
        .env("CODEX_HOME", &codex_home)
        .arg("--source")
        .arg(&source)
        .assert()
        .success();

    assert!(codex_home.join("prompts/learn-bar.md").exists());
    assert!(!temp_dir.path().join("home/.codex").exists());
}

#[test]
fn test_home_default_without_codex_home() {
    let temp_dir = TempDir::new().unwrap();
    let source = scenario_source(temp_dir.path());

    prompt_install(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .assert()
        .success();

    assert!(temp_dir
        .path()
        .join("home/.codex/prompts/CODEX_COMPATIBILITY.md")
        .exists());
}

#[test]
fn test_dry_run_leaves_target_absent() {
    let temp_dir = TempDir::new().unwrap();
    let source = scenario_source(temp_dir.path());
    let target = temp_dir.path().join("out");

    prompt_install(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .arg("--target")
        .arg(&target)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("mode: dry-run"))
        .stdout(predicate::str::contains("copy   bee-foo.md"));

    assert!(!target.exists());
}

#[test]
fn test_missing_source_exits_one() {
    let temp_dir = TempDir::new().unwrap();

    prompt_install(temp_dir.path())
        .arg("--source")
        .arg(temp_dir.path().join("missing"))
        .arg("--target")
        .arg(temp_dir.path().join("out"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: source directory not found"))
        .stderr(predicate::str::contains("ERROR").not())
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_no_matching_files_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("prompts");
    write_sources(&source, &["other.md", "README.md"]);

    prompt_install(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .arg("--target")
        .arg(temp_dir.path().join("out"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "error: no matching Bee/Learn prompt files found in",
        ));

    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_settings_file_overrides_selection() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("prompts");
    write_sources(&source, &["team-a.md", "bee-foo.md"]);
    let settings = temp_dir.path().join("install.toml");
    fs::write(
        &settings,
        format!(
            "[install]\nsource = \"{}\"\ntarget = \"~/team\"\n\n[selection]\nprefixes = [\"team-\"]\n",
            source.display()
        ),
    )
    .unwrap();

    prompt_install(temp_dir.path())
        .arg("--config")
        .arg(&settings)
        .assert()
        .success()
        .stdout(predicate::str::contains("summary: copied=1, skipped=0, total=1"));

    assert!(temp_dir.path().join("home/team/team-a.md").exists());
    assert!(!temp_dir.path().join("home/team/bee-foo.md").exists());
}

#[test]
fn test_bad_settings_file_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    let settings = temp_dir.path().join("install.toml");
    fs::write(&settings, "[install\n").unwrap();

    prompt_install(temp_dir.path())
        .arg("--config")
        .arg(&settings)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load settings"));
}

#[test]
fn test_shipped_prompts_dry_run() {
    let temp_dir = TempDir::new().unwrap();

    prompt_install(temp_dir.path())
        .arg("--target")
        .arg(temp_dir.path().join("out"))
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("CODEX_COMPATIBILITY.md"))
        .stdout(predicate::str::contains("README.md").not());
}

#[test]
fn test_target_flag_beats_codex_home() {
    let temp_dir = TempDir::new().unwrap();
    let source = scenario_source(temp_dir.path());
    let codex_home = temp_dir.path().join("codex");
    let target = temp_dir.path().join("explicit");

    prompt_install(temp_dir.path())
        .env("CODEX_HOME", &codex_home)
        .arg("--source")
        .arg(&source)
        .arg("--target")
        .arg(&target)
        .assert()
        .success();

    assert!(target.join("bee-foo.md").exists());
    assert!(!codex_home.join("prompts").exists());
    assert!(!temp_dir.path().join("home/.codex").exists());
}

#[test]
fn test_skips_are_not_logged_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("prompts");
    write_sources(&source, &["bee-a.md"]);
    let target = temp_dir.path().join("out");
    write_sources(&target, &["bee-a.md"]);

    prompt_install(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .arg("--target")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("skip   bee-a.md"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_target_that_is_a_file_fails_without_partial_note() {
    let temp_dir = TempDir::new().unwrap();
    let source = scenario_source(temp_dir.path());
    let target = temp_dir.path().join("out");
    fs::write(&target, "not a directory").unwrap();

    prompt_install(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .arg("--target")
        .arg(&target)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("earlier files").not());
}

#[test]
fn test_tilde_user_target_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let source = scenario_source(temp_dir.path());

    prompt_install(temp_dir.path())
        .arg("--source")
        .arg(&source)
        .arg("--target")
        .arg("~someone/prompts")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("~user paths are not supported"));

    assert!(!temp_dir.path().join("~someone").exists());
}
