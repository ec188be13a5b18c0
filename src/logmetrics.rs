use anyhow::Result;
use regex::Regex;
use serde::Serialize;
use std::path::Path;

/// Quality metrics emitted by libfprint's SIGFM matcher in its debug log.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct LogMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_time_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keypoints: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_scores: Option<Vec<(u32, u32)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
}

pub const REJECTED_NOT_ENOUGH_KEYPOINTS: &str = "not enough keypoints (<25)";
pub const REJECTED_EXTRACTION_FAILED: &str = "extraction failed";

lazy_static! {
    static ref EXTRACT_TIME: Regex =
        Regex::new(r"sigfm extract completed in ([0-9.]+) secs").unwrap();
    static ref KEYPOINTS: Regex = Regex::new(r"sigfm keypoints: (\d+)").unwrap();
    static ref SCORE: Regex = Regex::new(r"sigfm score (\d+)/(\d+)").unwrap();
}

impl LogMetrics {
    pub fn is_empty(&self) -> bool {
        self.extract_time_ms.is_none()
            && self.keypoints.is_none()
            && self.match_scores.is_none()
            && self.rejected.is_none()
    }
}

fn find_extract_time_ms(text: &str) -> Option<f64> {
    EXTRACT_TIME
        .captures(text)
        .and_then(|c| c[1].parse::<f64>().ok())
        .map(|secs| secs * 1000.0)
}

fn find_keypoints(text: &str) -> Option<u32> {
    KEYPOINTS
        .captures(text)
        .and_then(|c| c[1].parse::<u32>().ok())
}

fn find_match_scores(text: &str) -> Option<Vec<(u32, u32)>> {
    let scores: Vec<(u32, u32)> = SCORE
        .captures_iter(text)
        .filter_map(|c| Some((c[1].parse::<u32>().ok()?, c[2].parse::<u32>().ok()?)))
        .collect();
    if scores.is_empty() {
        None
    } else {
        Some(scores)
    }
}

fn find_rejection(text: &str) -> Option<String> {
    if text.contains("Not enough keypoints") {
        Some(REJECTED_NOT_ENOUGH_KEYPOINTS.to_owned())
    } else if text.contains("SIGFM extraction failed") || text.contains("SIGFM scan failed") {
        Some(REJECTED_EXTRACTION_FAILED.to_owned())
    } else {
        None
    }
}

/// Scans log text for SIGFM metrics. Returns `None` when nothing was recognized.
pub fn extract(text: &str) -> Option<LogMetrics> {
    let metrics = LogMetrics {
        extract_time_ms: find_extract_time_ms(text),
        keypoints: find_keypoints(text),
        match_scores: find_match_scores(text),
        rejected: find_rejection(text),
    };

    if metrics.is_empty() {
        None
    } else {
        Some(metrics)
    }
}

/// Stray non-UTF-8 bytes are replaced rather than failing the whole log.
pub fn read_log(file_path: &str) -> Result<String> {
    let bytes = std::fs::read(file_path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads and scans a log file. A missing or unreadable log only means there
/// are no metrics to report.
pub fn load(file_path: &str) -> Option<LogMetrics> {
    if !Path::new(file_path).exists() {
        warn!("Log file not found: {}", file_path);
        return None;
    }
    match read_log(file_path) {
        Ok(text) => {
            info!("Scanning log file: {}", file_path);
            let metrics = extract(&text);
            if metrics.is_none() {
                info!("No SIGFM metrics found in {}", file_path);
            }
            metrics
        }
        Err(why) => {
            warn!("Unable to read log file {}: {}", file_path, why);
            None
        }
    }
}
