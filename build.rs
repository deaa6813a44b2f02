//! Stamps the CLI banner with the build date and commit.

use std::process::Command;

/// Trimmed stdout of a successful command
fn stdout_of(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}

fn main() {
    let date = stdout_of("date", &["+%Y-%m-%d"]).unwrap_or_else(|| "unknown".into());
    let commit =
        stdout_of("git", &["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());

    println!("cargo:rustc-env=BUILD_DATE={date}");
    println!("cargo:rustc-env=GIT_HASH={commit}");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
