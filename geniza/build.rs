use std::env;
use std::process::Command;

fn main() {
    // Version of the compiler building this crate, reported in User-Agent.
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .and_then(|s| rustc_release(&s))
        .or_else(|| env::var("CARGO_PKG_RUST_VERSION").ok())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=GENIZA_RUSTC_VERSION={version}");
    println!("cargo:rerun-if-env-changed=RUSTC");
}

/// `rustc 1.80.1 (3f5fd8dd4 2024-08-06)` => `1.80.1`
fn rustc_release(output: &str) -> Option<String> {
    output
        .split_whitespace()
        .nth(1)
        .filter(|v| v.starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_string)
}
