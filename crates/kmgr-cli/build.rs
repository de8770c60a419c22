//! Embeds the version reported by `kmgr --version`.
//!
//! Resolution order: `KMGR_BUILD_VERSION` from the build environment (for
//! packagers building from a tarball), then `git describe`, then the crate
//! version.

use std::env;
use std::process::Command;

const OVERRIDE_VAR: &str = "KMGR_BUILD_VERSION";

fn main() {
    println!("cargo:rerun-if-env-changed={OVERRIDE_VAR}");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let version = env::var(OVERRIDE_VAR)
        .ok()
        .and_then(|v| normalize(&v))
        .or_else(describe)
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=KMGR_VERSION={version}");
}

fn describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|out| out.status.success())?;

    normalize(std::str::from_utf8(&output.stdout).ok()?)
}

// Tags are written `v1.2.3`; the binary reports `1.2.3`.
fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let version = trimmed.strip_prefix('v').unwrap_or(trimmed);
    (!version.is_empty()).then(|| version.to_string())
}
