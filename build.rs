//! Build script for the Decimal Equivalent Calculator
//!
//! Bumps the local build counter and embeds build metadata. A `version.txt`
//! next to Cargo.toml overrides the release label shown in the banner.

use std::fs;
use std::path::Path;

fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=version.txt");

    let build_number_path = Path::new("build_number.txt");
    let previous: u64 = read_trimmed(build_number_path)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    let build_number = previous + 1;

    // Read-only source trees still build; the counter just doesn't advance
    if let Err(e) = fs::write(build_number_path, build_number.to_string()) {
        println!("cargo:warning=Could not persist build number: {}", e);
    }

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

    println!("cargo:rustc-env=DECIMAL_CONVERTER_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=DECIMAL_CONVERTER_BUILD_TIMESTAMP={}", timestamp);

    if let Some(label) = read_trimmed(Path::new("version.txt")) {
        println!("cargo:rustc-env=DECIMAL_CONVERTER_VERSION_LABEL={}", label);
    }
}
