use crate::grid::IntensityGrid;
use itertools::iproduct;
use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub min: u8,
    pub max: u8,
    pub mean: f64,
    pub std: f64,
    pub dynamic_range_pct: f64,
    pub contrast: f64,
    pub local_var_3x3: f64,
    pub coverage_pct: f64,
    pub height: usize,
    pub width: usize,
}

/// Population mean and standard deviation (divisor N).
pub fn mean_and_std<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = u8> + Clone,
{
    let (sum, count) = values
        .clone()
        .into_iter()
        .fold((0.0, 0usize), |(s, n), v| (s + v as f64, n + 1));
    if count == 0 {
        return (0.0, 0.0);
    }
    let mean = sum / count as f64;
    let var = values
        .into_iter()
        .map(|v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / count as f64;
    (mean, var.sqrt())
}

/// Mean of the population variances of every unpadded 3x3 window.
pub fn local_variance_3x3(grid: &IntensityGrid) -> f64 {
    let out_w = grid.width() - 2;
    let out_h = grid.height() - 2;

    let total: f64 = iproduct!(0..out_h, 0..out_w)
        .map(|(y, x)| {
            let window = iproduct!(0..3, 0..3).map(|(wy, wx)| grid.get(x + wx, y + wy));
            let (_, std) = mean_and_std(window);
            std * std
        })
        .sum();

    total / (out_w * out_h) as f64
}

/// Top row, bottom row, left column, right column. Corners appear twice.
pub fn border_samples(grid: &IntensityGrid) -> Vec<u8> {
    let last_row = grid.height() - 1;
    let last_col = grid.width() - 1;

    let mut border = Vec::with_capacity(2 * grid.width() + 2 * grid.height());
    border.extend_from_slice(grid.row(0));
    border.extend_from_slice(grid.row(last_row));
    border.extend(grid.column(0));
    border.extend(grid.column(last_col));
    border
}

/// Percentage of pixels deviating from the border mean by more than twice
/// the border standard deviation (floored at 1).
pub fn coverage_pct(grid: &IntensityGrid) -> f64 {
    let (bg_mean, bg_std) = mean_and_std(border_samples(grid));
    let bg_std = bg_std.max(1.0);

    let foreground = grid
        .samples()
        .iter()
        .filter(|v| (**v as f64 - bg_mean).abs() > 2.0 * bg_std)
        .count();

    foreground as f64 / grid.pixel_count() as f64 * 100.0
}

pub fn compute(grid: &IntensityGrid) -> StatsReport {
    let samples = grid.samples();
    let min = samples.iter().copied().min().unwrap_or(0);
    let max = samples.iter().copied().max().unwrap_or(0);
    let (mean, std) = mean_and_std(samples.iter().copied());

    info!("Computing statistics for {}x{} grid", grid.width(), grid.height());

    StatsReport {
        min,
        max,
        mean,
        std,
        dynamic_range_pct: (max - min) as f64 / 255.0 * 100.0,
        contrast: std / mean.max(1.0),
        local_var_3x3: local_variance_3x3(grid),
        coverage_pct: coverage_pct(grid),
        height: grid.height(),
        width: grid.width(),
    }
}
