//! Integration tests for the veneer CLI.
//!
//! Spawns the built binary against manifest fixtures and checks exit
//! status, emitted files, and failure isolation.

use std::path::PathBuf;
use std::process::{Command, Output};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn veneer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_veneer"))
        .args(["--color", "never"])
        .args(args)
        .output()
        .expect("failed to spawn veneer binary")
}

// ────────────────────────────────────────────────────────────────────────────
// gen
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_gen_writes_proxies_and_module() {
    let out_dir = tempfile::tempdir().unwrap();
    let manifest = fixtures_dir().join("ifaces.toml");

    let output = veneer(&[
        "gen",
        manifest.to_str().unwrap(),
        "--out-dir",
        out_dir.path().to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let calc = std::fs::read_to_string(out_dir.path().join("calc_proxy.rs")).unwrap();
    assert!(calc.contains("pub struct CalcProxy {"));
    assert!(calc.contains("pub fn register_calc_proxy()"));

    let svc = std::fs::read_to_string(out_dir.path().join("svc_proxy.rs")).unwrap();
    assert!(svc.contains("impl crate::ifaces::Audit for SvcProxy {"));

    let module = std::fs::read_to_string(out_dir.path().join("mod.rs")).unwrap();
    assert!(module.contains("pub mod calc_proxy;"));
    assert!(module.contains("pub mod svc_proxy;"));
    assert!(module.contains("svc_proxy::register_svc_proxy();"));
}

#[test]
fn test_gen_is_deterministic_across_runs() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let manifest = fixtures_dir().join("ifaces.toml");

    for dir in [&first, &second] {
        let output = veneer(&[
            "gen",
            manifest.to_str().unwrap(),
            "--out-dir",
            dir.path().to_str().unwrap(),
        ]);
        assert!(output.status.success());
    }
    for name in ["calc_proxy.rs", "svc_proxy.rs", "mod.rs"] {
        let a = std::fs::read_to_string(first.path().join(name)).unwrap();
        let b = std::fs::read_to_string(second.path().join(name)).unwrap();
        assert_eq!(a, b, "nondeterministic output for {name}");
    }
}

#[test]
fn test_gen_explicit_dispatch_omits_public_aliases() {
    let out_dir = tempfile::tempdir().unwrap();
    let manifest = fixtures_dir().join("ifaces.toml");

    let output = veneer(&[
        "gen",
        manifest.to_str().unwrap(),
        "--out-dir",
        out_dir.path().to_str().unwrap(),
        "--dispatch",
        "explicit",
    ]);
    assert!(output.status.success());

    let calc = std::fs::read_to_string(out_dir.path().join("calc_proxy.rs")).unwrap();
    assert!(!calc.contains("pub fn add5_to"));
    assert!(calc.contains("fn add5_to(&self, start_val: i32) -> i32 {"));
}

#[test]
fn test_gen_isolates_per_interface_failures() {
    let out_dir = tempfile::tempdir().unwrap();
    let manifest = fixtures_dir().join("broken.toml");

    let output = veneer(&[
        "gen",
        manifest.to_str().unwrap(),
        "--out-dir",
        out_dir.path().to_str().unwrap(),
    ]);
    // Svc's merge list names a record, so the run fails overall...
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("crate::ifaces::Svc"));
    assert!(stderr.contains("Plain"));

    // ...but the valid interface still generated.
    assert!(out_dir.path().join("calc_proxy.rs").exists());
    assert!(!out_dir.path().join("svc_proxy.rs").exists());
}

#[test]
fn test_gen_rejects_cross_module_name_collision() {
    let out_dir = tempfile::tempdir().unwrap();
    let manifest = fixtures_dir().join("collide.toml");

    let output = veneer(&[
        "gen",
        manifest.to_str().unwrap(),
        "--out-dir",
        out_dir.path().to_str().unwrap(),
    ]);
    // billing::Calc and reporting::Calc both map to CalcProxy.
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reporting::Calc"));
    assert!(stderr.contains("billing::Calc"));
    assert!(stderr.contains("CalcProxy"));

    // The first interface wins; nothing overwrites its output and the
    // module lists it exactly once.
    let calc = std::fs::read_to_string(out_dir.path().join("calc_proxy.rs")).unwrap();
    assert!(calc.contains("// Source interface: billing::Calc"));
    let module = std::fs::read_to_string(out_dir.path().join("mod.rs")).unwrap();
    assert_eq!(module.matches("pub mod calc_proxy;").count(), 1);
}

#[test]
fn test_gen_missing_manifest_fails() {
    let out_dir = tempfile::tempdir().unwrap();
    let output = veneer(&[
        "gen",
        "no-such-manifest.toml",
        "--out-dir",
        out_dir.path().to_str().unwrap(),
    ]);
    assert!(!output.status.success());
}

// ────────────────────────────────────────────────────────────────────────────
// check
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_check_accepts_valid_manifest() {
    let manifest = fixtures_dir().join("ifaces.toml");
    let output = veneer(&["check", manifest.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("crate::ifaces::Calc"));
    assert!(stdout.contains("checked 2 proxied interface(s)"));
}

#[test]
fn test_check_accepts_json_manifest() {
    let manifest = fixtures_dir().join("ifaces.json");
    let output = veneer(&["check", manifest.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("crate::ifaces::Ping"));
}

#[test]
fn test_check_rejects_cross_module_name_collision() {
    let manifest = fixtures_dir().join("collide.toml");
    let output = veneer(&["check", manifest.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reporting::Calc"));
    assert!(stderr.contains("CalcProxy"));
}

#[test]
fn test_check_rejects_broken_manifest_without_writing() {
    let manifest = fixtures_dir().join("broken.toml");
    let output = veneer(&["check", manifest.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("crate::ifaces::Svc"));
}
