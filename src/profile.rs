use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Verdict and preview thresholds. Defaults match the Windows driver's
/// rejection rules and libfprint's SIGFM minimum.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AnalysisProfile {
    pub min_std: f64,
    pub min_coverage_pct: f64,
    pub min_keypoints: u32,
    pub preview_scale: u32,
}

impl Default for AnalysisProfile {
    fn default() -> Self {
        AnalysisProfile {
            min_std: 15.0,
            min_coverage_pct: 65.0,
            min_keypoints: 25,
            preview_scale: 8,
        }
    }
}

impl AnalysisProfile {
    pub fn validate(&self) -> Result<()> {
        if self.preview_scale == 0 {
            Err(anyhow!("Invalid profile: preview_scale must be at least 1"))
        } else {
            Ok(())
        }
    }
}

pub fn parse_profile(s: &str) -> Result<AnalysisProfile> {
    let profile: AnalysisProfile = toml::from_str(s)?;
    profile.validate()?;
    Ok(profile)
}

pub fn load_profile(file_path: &str) -> Result<AnalysisProfile> {
    if !Path::new(file_path).exists() {
        Err(anyhow!("File not found: {}", file_path))
    } else {
        info!("Loading analysis profile: {}", file_path);
        let t = std::fs::read_to_string(file_path)?;
        parse_profile(&t)
    }
}
