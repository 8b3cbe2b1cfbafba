use std::{env, process::Command};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let hash = command_stdout("git", &["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".to_string());
    let status = match command_stdout("git", &["status", "--porcelain"]) {
        Some(changes) if changes.is_empty() => "clean",
        Some(_) => "dirty",
        None => "unknown",
    };

    emit("HASH", &hash);
    emit("STATUS", status);
    emit("TARGET", &env::var("TARGET").unwrap_or_else(|_| "unknown".to_string()));
    emit("PROFILE", &env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string()));
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env=BEEHIVE_CORE_BUILD_{key}={value}");
}

/// Trimmed stdout of a successful command, `None` if it could not run.
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|stdout| stdout.trim().to_string())
}
