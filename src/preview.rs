use crate::grid::IntensityGrid;
use crate::paths;
use anyhow::{anyhow, Result};
use image::{GrayImage, Luma};

/// Each source pixel becomes a `scale` x `scale` block.
pub fn upscale_nearest(image: &GrayImage, scale: u32) -> GrayImage {
    GrayImage::from_fn(image.width() * scale, image.height() * scale, |x, y| {
        *image.get_pixel(x / scale, y / scale)
    })
}

/// Remaps the image's [min, max] onto [0, 255]. Flat images are returned unchanged.
pub fn autocontrast(image: &GrayImage) -> GrayImage {
    let lo = image.pixels().map(|p| p.0[0]).min().unwrap_or(0);
    let hi = image.pixels().map(|p| p.0[0]).max().unwrap_or(0);

    if hi <= lo {
        return image.clone();
    }

    let span = (hi - lo) as u32;
    let lut: Vec<u8> = (0..=255u8)
        .map(|v| (v.saturating_sub(lo) as u32 * 255 / span).min(255) as u8)
        .collect();

    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([lut[image.get_pixel(x, y).0[0] as usize]])
    })
}

/// Writes the plain and contrast-stretched upscales next to the capture and
/// returns their paths.
pub fn save_previews(grid: &IntensityGrid, base: &str, scale: u32) -> Result<(String, String)> {
    if scale == 0 {
        return Err(anyhow!("Preview scale must be at least 1"));
    }
    let (plain_path, enhanced_path) = paths::preview_paths(base, scale);

    info!(
        "Creating {}x previews of size {}x{}",
        scale,
        grid.width() * scale as usize,
        grid.height() * scale as usize
    );

    upscale_nearest(grid.as_image(), scale)
        .save(&plain_path)
        .map_err(|e| anyhow!("Unable to write {}: {}", plain_path, e))?;

    upscale_nearest(&autocontrast(grid.as_image()), scale)
        .save(&enhanced_path)
        .map_err(|e| anyhow!("Unable to write {}: {}", enhanced_path, e))?;

    Ok((plain_path, enhanced_path))
}
