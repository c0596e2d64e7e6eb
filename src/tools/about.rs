//! About tool
//!
//! Version and environment details shown by the About screen.

use std::path::Path;

use serde::Serialize;

use crate::build_info::BuildInfo;

/// Attribution line from the About screen
pub const CREDIT: &str = "Simple tool by CodingAttempts";

/// About screen contents
#[derive(Debug, Clone, Serialize)]
pub struct AboutResponse {
    pub title: String,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub credit: &'static str,

    /// Settings file in effect and whether it exists yet
    pub settings_path: String,
    pub settings_file_exists: bool,
}

/// Collect the About screen contents
pub fn about(settings_path: &Path) -> AboutResponse {
    let info = BuildInfo::current();

    AboutResponse {
        title: info.heading(),
        version: info.version,
        build_number: info.build_number,
        build_timestamp: info.build_timestamp,
        credit: CREDIT,
        settings_path: settings_path.display().to_string(),
        settings_file_exists: settings_path.is_file(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_reports_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let response = about(&path);
        assert!(!response.settings_file_exists);
        assert_eq!(response.credit, CREDIT);
        assert!(response.title.contains(response.version));

        std::fs::write(&path, "{}").unwrap();
        assert!(about(&path).settings_file_exists);
    }
}
