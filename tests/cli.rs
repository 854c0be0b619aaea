//! Command line behavior of the `inno_bundle` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn inno_bundle() -> Command {
    let mut cmd = Command::cargo_bin("inno_bundle").unwrap();
    cmd.env("RUST_LOG", "warn");
    cmd
}

/// Copy the demo project fixture and fake its release build output.
fn demo_project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("Cargo.toml");
    std::fs::copy(fixture, dir.path().join("Cargo.toml")).unwrap();

    let app_dir = dir.path().join("target").join("release");
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(app_dir.join("demo.exe"), b"MZ").unwrap();
    dir
}

#[test]
fn test_id_prints_uuid() {
    let output = inno_bundle().arg("id").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let id = uuid::Uuid::try_parse(text.trim()).unwrap();
    assert_eq!(id.get_version_num(), 4);
}

#[test]
fn test_id_with_name_is_deterministic() {
    let run = || {
        inno_bundle()
            .args(["id", "--ns", "com.example.demo"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_build_with_missing_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    inno_bundle()
        .args(["build", "--no-app", "--no-installer", "--manifest-path"])
        .arg(dir.path().join("Cargo.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_build_without_bundle_section_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nname = \"demo\"\nversion = \"1.0.0\"\n",
    )
    .unwrap();

    inno_bundle()
        .args(["build", "--no-app", "--no-installer", "--manifest-path"])
        .arg(dir.path().join("Cargo.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("[package.metadata.inno_bundle]"));
}

#[test]
fn test_build_writes_script() {
    let project = demo_project();

    inno_bundle()
        .args(["build", "--no-app", "--no-installer", "--manifest-path"])
        .arg(project.path().join("Cargo.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("inno-script.iss"));

    let script_path = project
        .path()
        .join("target")
        .join("installer")
        .join("Release")
        .join("inno-script.iss");
    let bytes = std::fs::read(script_path).unwrap();
    let script = String::from_utf8(bytes[3..].to_vec()).unwrap();

    assert!(script.contains("AppName=Demo App"));
    assert!(script.contains("PrivilegesRequiredOverridesAllowed=dialog commandline"));
    assert!(script.contains("DestName: \"Demo App.exe\""));
    assert!(script.contains("Name: \"german\""));
    assert!(script.contains("Flags: nowait postinstall skipifsilent"));
}

#[test]
fn test_relative_app_dir_is_resolved_from_working_directory() {
    let workspace = tempfile::tempdir().unwrap();
    let app = workspace.path().join("app");
    std::fs::create_dir_all(&app).unwrap();
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("Cargo.toml");
    std::fs::copy(fixture, app.join("Cargo.toml")).unwrap();

    let dist = workspace.path().join("dist");
    std::fs::create_dir_all(&dist).unwrap();
    std::fs::write(dist.join("demo.exe"), b"MZ").unwrap();
    std::fs::write(dist.join("readme.txt"), b"hello").unwrap();

    inno_bundle()
        .current_dir(workspace.path())
        .args([
            "build",
            "--no-app",
            "--no-installer",
            "--manifest-path",
            "app/Cargo.toml",
            "--app-dir",
            "dist",
        ])
        .assert()
        .success();

    let script_path = app
        .join("target")
        .join("installer")
        .join("Release")
        .join("inno-script.iss");
    let script = String::from_utf8(std::fs::read(script_path).unwrap()[3..].to_vec()).unwrap();
    let readme = script
        .lines()
        .find(|line| line.contains("readme.txt"))
        .unwrap();
    assert!(readme.contains("dist"));
}

#[test]
fn test_build_rejects_conflicting_variants() {
    inno_bundle()
        .args(["build", "--debug", "--release"])
        .assert()
        .failure();
}
