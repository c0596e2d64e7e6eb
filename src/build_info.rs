//! Build metadata
//!
//! `build.rs` stamps the build counter, timestamp and optional release label
//! into the environment; this module reads them back for the about panel and
//! the startup banner.

use serde::Serialize;

/// Human-facing application title
pub const APP_TITLE: &str = "Decimal Equivalent Calculator";

const RAW_BUILD_NUMBER: Option<&str> = option_env!("DECIMAL_CONVERTER_BUILD_NUMBER");
const RAW_BUILD_TIMESTAMP: Option<&str> = option_env!("DECIMAL_CONVERTER_BUILD_TIMESTAMP");
const RAW_VERSION_LABEL: Option<&str> = option_env!("DECIMAL_CONVERTER_VERSION_LABEL");

/// Counter text from build.rs; anything unparseable counts as build 0
fn build_number(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// What this binary was built from
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub title: &'static str,
    /// version.txt label if present, else the Cargo version
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            title: APP_TITLE,
            version: RAW_VERSION_LABEL.unwrap_or(env!("CARGO_PKG_VERSION")),
            build_number: build_number(RAW_BUILD_NUMBER),
            build_timestamp: RAW_BUILD_TIMESTAMP.unwrap_or("unknown"),
            description: env!("CARGO_PKG_DESCRIPTION"),
        }
    }

    /// Window-title style heading, e.g. "Decimal Equivalent Calculator v1.0.0"
    pub fn heading(&self) -> String {
        format!("{} v{}", self.title, self.version)
    }

    /// One-line build stamp, e.g. "build 12 (2026-01-01T00:00:00Z)"
    pub fn stamp(&self) -> String {
        format!("build {} ({})", self.build_number, self.build_timestamp)
    }
}

/// Print the heading and build stamp to stderr before the CLI starts
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    let heading = info.heading();
    eprintln!("{}", heading);
    eprintln!("{}", "-".repeat(heading.chars().count()));
    eprintln!("{}", info.stamp());
}
