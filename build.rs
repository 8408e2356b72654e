// SPDX-License-Identifier: Apache-2.0

fn main() {
    // builds from a source tarball have no git metadata
    let hash = std::process::Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_else(|| String::from("unknown"));
    println!("cargo:rustc-env=NOTTY_COMMIT_HASH={}", hash);
    println!(
        "cargo:rustc-env=NOTTY_TARGET={}",
        std::env::var("TARGET").unwrap_or_else(|_| String::from("unknown"))
    );
}
