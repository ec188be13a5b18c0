use anyhow::Result;
use fpanalyze::grid::IntensityGrid;
use fpanalyze::logmetrics::{self, LogMetrics};
use fpanalyze::profile::AnalysisProfile;
use fpanalyze::report::{self, AnalysisRecord, Verdict};
use fpanalyze::stats::{self, StatsReport};

fn stats_with(std: f64, coverage_pct: f64) -> StatsReport {
    StatsReport {
        std,
        coverage_pct,
        width: 64,
        height: 80,
        ..Default::default()
    }
}

#[test]
fn test_verdict_order() {
    let profile = AnalysisProfile::default();
    assert_eq!(
        Verdict::from_stats(&stats_with(10.0, 20.0), &profile),
        Verdict::LowContrast
    );
    assert_eq!(
        Verdict::from_stats(&stats_with(15.0, 64.9), &profile),
        Verdict::LowCoverage
    );
    assert_eq!(
        Verdict::from_stats(&stats_with(15.0, 65.0), &profile),
        Verdict::Reasonable
    );
}

#[test]
fn test_verdict_follows_profile() {
    let profile = AnalysisProfile {
        min_std: 40.0,
        ..Default::default()
    };
    assert_eq!(
        Verdict::from_stats(&stats_with(30.0, 90.0), &profile),
        Verdict::LowContrast
    );
}

#[test]
fn test_keypoint_and_score_marks() {
    assert_eq!(report::keypoint_status(25, 25), "✓");
    assert_eq!(report::keypoint_status(24, 25), "✗ (<25, rejected)");
    assert_eq!(report::score_status(40, 40), "✓ match");
    assert_eq!(report::score_status(15, 40), "✗ no match");
}

#[test]
fn test_render_with_log_metrics() -> Result<()> {
    let grid = IntensityGrid::open("tests/testdata/capture.pgm")?;
    let s = stats::compute(&grid);
    let m = logmetrics::load("tests/testdata/capture.log");
    let out = report::render("capture.pgm", &s, m.as_ref(), &AnalysisProfile::default())?;

    assert!(out.contains("  Image:       8×6 pixels  (capture.pgm)"));
    assert!(out.contains("  Pixel range: 40–200"));
    assert!(out.contains("  Mean / Std:  132.5 /"));
    assert!(out.contains("  Coverage:    50%"));
    assert!(out.contains("  Keypoints:   42  ✓"));
    assert!(out.contains("  Extract:     1.2 ms"));
    assert!(out.contains("  Score:       15/40  ✗ no match"));
    assert!(out.contains("  Score:       40/40  ✓ match"));
    assert_eq!(
        out.lines().last(),
        Some("  ⚠ LOW COVERAGE - Windows driver would reject")
    );

    let score_15 = out.find("15/40").unwrap();
    let score_40 = out.find("40/40").unwrap();
    assert!(score_15 < score_40);
    Ok(())
}

#[test]
fn test_render_without_log_metrics() -> Result<()> {
    let s = stats_with(30.0, 80.0);
    let out = report::render("x.pgm", &s, None, &AnalysisProfile::default())?;
    assert!(!out.contains("SIGFM"));
    assert!(out.ends_with("  ✓ Image statistics look reasonable\n"));
    Ok(())
}

#[test]
fn test_render_rejection_line() -> Result<()> {
    let m = LogMetrics {
        keypoints: Some(12),
        rejected: Some(logmetrics::REJECTED_NOT_ENOUGH_KEYPOINTS.to_owned()),
        ..Default::default()
    };
    let out = report::render_body(
        "x.pgm",
        &stats_with(1.0, 0.0),
        Some(&m),
        &AnalysisProfile::default(),
    )?;
    assert!(out.contains("  Keypoints:   12  ✗ (<25, rejected)"));
    assert!(out.contains("  Rejected:    not enough keypoints (<25)"));
    assert!(!out.contains("Score:"));
    Ok(())
}

#[test]
fn test_render_is_deterministic() -> Result<()> {
    let s = stats_with(20.0, 70.0);
    let profile = AnalysisProfile::default();
    assert_eq!(
        report::render("a.pgm", &s, None, &profile)?,
        report::render("a.pgm", &s, None, &profile)?
    );
    Ok(())
}

#[test]
fn test_analysis_record_json() -> Result<()> {
    let s = stats_with(5.0, 10.0);
    let record = AnalysisRecord::new("a.pgm", &s, None, &AnalysisProfile::default());
    let v: serde_json::Value = serde_json::from_str(&record.to_json()?)?;
    assert_eq!(v["image"], "a.pgm");
    assert_eq!(v["verdict"], "LowContrast");
    assert_eq!(v["stats"]["width"], 64);
    assert!(v.get("log_metrics").is_none());
    Ok(())
}
