//! End-to-end runs of the `abyss-sprite` binary in a scratch directory.

use std::path::Path;
use std::process::{Command, Output};

const OUTPUT: &str = "abyss_meteorite_6.png";

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_abyss-sprite"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn zero_argument_run_writes_a_128_rgba_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &[]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout}");
    assert!(stdout.contains("Abyss meteorite generated"));

    let img = image::open(dir.path().join(OUTPUT)).unwrap();
    assert!(img.color().has_alpha());
    assert_eq!((img.width(), img.height()), (128, 128));
}

#[test]
fn same_seed_produces_byte_identical_files() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    assert!(run_in(a.path(), &["--seed", "4242"]).status.success());
    assert!(run_in(b.path(), &["--seed", "4242"]).status.success());

    let bytes_a = std::fs::read(a.path().join(OUTPUT)).unwrap();
    let bytes_b = std::fs::read(b.path().join(OUTPUT)).unwrap();
    assert_eq!(bytes_a, bytes_b);
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(OUTPUT), b"stale").unwrap();
    assert!(run_in(dir.path(), &["--seed", "1"]).status.success());
    assert!(image::open(dir.path().join(OUTPUT)).is_ok());
}

#[test]
fn json_summary_reports_seed_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["--seed", "99", "--json"]);
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["seed"]["seed"], 99);
    assert_eq!(v["seed"]["width"], 128);
    assert_eq!(v["vertices"], 24);
    assert_eq!(v["output"], OUTPUT);
}

#[test]
fn unwritable_output_path_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    // A directory squatting on the output name makes the write fail.
    std::fs::create_dir(dir.path().join(OUTPUT)).unwrap();

    let out = run_in(dir.path(), &["--seed", "5"]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(11));
    assert!(String::from_utf8_lossy(&out.stderr).contains("error:"));
    assert!(out.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn deleted_output_directory_exits_non_zero() {
    let parent = tempfile::tempdir().unwrap();
    let gone = parent.path().join("gone");
    std::fs::create_dir(&gone).unwrap();

    // `Command::current_dir` refuses a missing directory, so the shell enters it,
    // removes it, then execs the binary with the dead directory as its cwd.
    let out = Command::new("sh")
        .arg("-c")
        .arg(r#"cd "$1" && rmdir "$1" && exec "$2" --seed 5"#)
        .arg("sh")
        .arg(&gone)
        .arg(env!("CARGO_BIN_EXE_abyss-sprite"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!gone.exists());
    assert_eq!(out.status.code(), Some(11), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stderr).contains("error:"));
    assert!(out.stdout.is_empty());
}
