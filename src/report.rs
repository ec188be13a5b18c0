use crate::logmetrics::LogMetrics;
use crate::profile::AnalysisProfile;
use crate::stats::StatsReport;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Verdict {
    LowContrast,
    LowCoverage,
    Reasonable,
}

impl Verdict {
    /// First match wins: contrast, then coverage.
    pub fn from_stats(stats: &StatsReport, profile: &AnalysisProfile) -> Verdict {
        if stats.std < profile.min_std {
            Verdict::LowContrast
        } else if stats.coverage_pct < profile.min_coverage_pct {
            Verdict::LowCoverage
        } else {
            Verdict::Reasonable
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::LowContrast => "⚠ LOW CONTRAST - image may be blank or no finger present",
            Verdict::LowCoverage => "⚠ LOW COVERAGE - Windows driver would reject",
            Verdict::Reasonable => "✓ Image statistics look reasonable",
        }
    }

    pub fn is_warning(&self) -> bool {
        *self != Verdict::Reasonable
    }
}

pub fn keypoint_status(keypoints: u32, min_keypoints: u32) -> String {
    if keypoints >= min_keypoints {
        "✓".to_owned()
    } else {
        format!("✗ (<{}, rejected)", min_keypoints)
    }
}

pub fn score_status(score: u32, threshold: u32) -> &'static str {
    if score >= threshold {
        "✓ match"
    } else {
        "✗ no match"
    }
}

fn render_log_metrics(
    out: &mut String,
    metrics: &LogMetrics,
    profile: &AnalysisProfile,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "  ── libfprint SIGFM metrics (from debug log) ──")?;
    if let Some(kp) = metrics.keypoints {
        writeln!(
            out,
            "  Keypoints:   {}  {}",
            kp,
            keypoint_status(kp, profile.min_keypoints)
        )?;
    }
    if let Some(ms) = metrics.extract_time_ms {
        writeln!(out, "  Extract:     {:.1} ms", ms)?;
    }
    if let Some(scores) = &metrics.match_scores {
        for (score, threshold) in scores {
            writeln!(
                out,
                "  Score:       {}/{}  {}",
                score,
                threshold,
                score_status(*score, *threshold)
            )?;
        }
    }
    if let Some(reason) = &metrics.rejected {
        writeln!(out, "  Rejected:    {}", reason)?;
    }
    Ok(())
}

/// Everything above the verdict line.
pub fn render_body(
    image_name: &str,
    stats: &StatsReport,
    log_metrics: Option<&LogMetrics>,
    profile: &AnalysisProfile,
) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "  Image:       {}×{} pixels  ({})",
        stats.width, stats.height, image_name
    )?;
    writeln!(
        out,
        "  Pixel range: {}–{}  (dynamic range {:.0}%)",
        stats.min, stats.max, stats.dynamic_range_pct
    )?;
    writeln!(out, "  Mean / Std:  {:.1} / {:.1}", stats.mean, stats.std)?;
    writeln!(out, "  Contrast:    {:.3}", stats.contrast)?;
    writeln!(
        out,
        "  Local var:   {:.1}  (higher = sharper)",
        stats.local_var_3x3
    )?;
    writeln!(
        out,
        "  Coverage:    {:.0}%  (Windows rejects <{:.0}%)",
        stats.coverage_pct, profile.min_coverage_pct
    )?;

    if let Some(metrics) = log_metrics {
        render_log_metrics(&mut out, metrics, profile)?;
    }
    Ok(out)
}

pub fn render(
    image_name: &str,
    stats: &StatsReport,
    log_metrics: Option<&LogMetrics>,
    profile: &AnalysisProfile,
) -> Result<String> {
    let mut out = render_body(image_name, stats, log_metrics, profile)?;
    let verdict = Verdict::from_stats(stats, profile);
    writeln!(out)?;
    writeln!(out, "  {}", verdict.message())?;
    Ok(out)
}

/// Machine-readable form of a run, written with `--report`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord<'a> {
    pub image: &'a str,
    pub stats: &'a StatsReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_metrics: Option<&'a LogMetrics>,
    pub verdict: Verdict,
}

impl<'a> AnalysisRecord<'a> {
    pub fn new(
        image: &'a str,
        stats: &'a StatsReport,
        log_metrics: Option<&'a LogMetrics>,
        profile: &AnalysisProfile,
    ) -> Self {
        AnalysisRecord {
            image,
            stats,
            log_metrics,
            verdict: Verdict::from_stats(stats, profile),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
