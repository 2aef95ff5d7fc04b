//! Custom cargo commands for gleaner.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests, with and without default features
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask wasm      - Type-check the browser build
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz <t>  - Run one fuzz target for a minute

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["highlight", "search_queries", "date_parsing", "record_loading"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("wasm") => wasm()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (fixtures + tests + clippy + wasm)
  test      Run all Rust tests, default features and --no-default-features
  check     Quick check (cargo test + clippy)
  wasm      cargo check for wasm32-unknown-unknown with --features wasm
  bench     Run benchmarks
  fuzz <t>  Run a fuzz target for 60s ({})
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("gleaner verification suite");
    println!("==========================================\n");

    println!("[1/5] Checking fixtures...");
    check_fixtures()?;
    println!("✓ Fixtures well-formed\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running tests without rayon...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ Sequential build passes\n");

    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[5/5] Checking wasm build...");
    wasm()?;
    println!("✓ wasm build checks\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])?;
    run_cargo(&["test", "--no-default-features"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn wasm() -> Result<()> {
    run_cargo(&[
        "check",
        "--lib",
        "--no-default-features",
        "--features",
        "wasm",
        "--target",
        "wasm32-unknown-unknown",
    ])
}

fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("fuzz needs a target: {}", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target '{}' (expected one of {})", target, FUZZ_TARGETS.join(", "));
    }
    run_cargo(&["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The JSON fixtures must be arrays of objects; the loader refuses anything else.
fn check_fixtures() -> Result<()> {
    let dir = project_root()?.join("tests/fixtures");

    for name in ["posts.json", "donors.json"] {
        let path = dir.join(name);
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("{} is not valid JSON", name))?;

        let Some(records) = value.as_array() else {
            bail!("{} must be a JSON array", name);
        };
        if let Some(i) = records.iter().position(|r| !r.is_object()) {
            bail!("{} record {} is not an object", name, i);
        }
        println!("  {} ({} records)", name, records.len());
    }

    let csv = dir.join("posts.csv");
    if !csv.exists() {
        bail!("missing {}", csv.display());
    }
    Ok(())
}
