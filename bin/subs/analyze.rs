use crate::subs::runnable::RunnableSubcommand;
use anyhow::{anyhow, Result};
use clap::Parser;
use colored::Colorize;
use fpanalyze::grid::IntensityGrid;
use fpanalyze::logmetrics;
use fpanalyze::paths;
use fpanalyze::preview;
use fpanalyze::profile::{self, AnalysisProfile};
use fpanalyze::report::{self, AnalysisRecord, Verdict};
use fpanalyze::stats;

#[derive(Parser)]
#[command(
    name = "fpanalyze",
    author,
    version,
    about = "Fingerprint capture image statistics & visual output",
    long_about = None
)]
pub struct Analyze {
    #[clap(
        default_value = "capture-test.pgm",
        help = "Capture image (PGM or any grayscale raster)"
    )]
    input_file: String,

    #[clap(long, short, help = "libfprint debug log file (default: <input>.log if present)")]
    log: Option<String>,

    #[clap(long, short, help = "Analysis profile (TOML)")]
    profile: Option<String>,

    #[clap(long, short, help = "Preview upscale factor (default=8)")]
    scale: Option<u32>,

    #[clap(long, short, help = "Write statistics as JSON")]
    report: Option<String>,

    #[clap(long, short, help = "Verbose output")]
    pub verbose: bool,
}

impl Analyze {
    fn load_profile(&self) -> Result<AnalysisProfile> {
        let mut profile = if let Some(profile_path) = &self.profile {
            profile::load_profile(profile_path)?
        } else {
            AnalysisProfile::default()
        };
        if let Some(scale) = self.scale {
            profile.preview_scale = scale;
        }
        profile.validate()?;
        Ok(profile)
    }

    fn resolve_log_path(&self) -> Option<String> {
        match &self.log {
            Some(log_path) => Some(log_path.to_owned()),
            None => paths::auto_log_path(&self.input_file),
        }
    }
}

fn print_verdict(verdict: Verdict) {
    if verdict.is_warning() {
        println!("  {}", verdict.message().yellow());
    } else {
        println!("  {}", verdict.message().green());
    }
}

impl RunnableSubcommand for Analyze {
    fn run(&self) -> Result<()> {
        let profile = self.load_profile()?;

        let grid = IntensityGrid::open(&self.input_file)?;
        let stats = stats::compute(&grid);

        let log_metrics = self.resolve_log_path().and_then(|p| logmetrics::load(&p));

        let image_name = paths::file_name(&self.input_file);
        println!();
        print!(
            "{}",
            report::render_body(&image_name, &stats, log_metrics.as_ref(), &profile)?
        );
        println!();
        print_verdict(Verdict::from_stats(&stats, &profile));

        let base = paths::base_path(&self.input_file);
        let (plain, enhanced) = preview::save_previews(&grid, &base, profile.preview_scale)?;

        println!();
        println!(
            "  Visuals ({}× nearest-neighbour, for viewing only):",
            profile.preview_scale
        );
        println!("    {}", paths::file_name(&plain));
        println!("    {}", paths::file_name(&enhanced));

        if let Some(report_path) = &self.report {
            info!("Writing analysis report to {}", report_path);
            let record = AnalysisRecord::new(&image_name, &stats, log_metrics.as_ref(), &profile);
            std::fs::write(report_path, record.to_json()?)
                .map_err(|e| anyhow!("Unable to write report {}: {}", report_path, e))?;
        }

        println!();
        Ok(())
    }
}
