use anyhow::{anyhow, Result};
use image::{DynamicImage, GrayImage};
use std::path::Path;

/// The 3x3 local variance window cannot be placed on anything smaller.
pub const MIN_GRID_DIMENSION: usize = 3;

/// Immutable H x W matrix of 8-bit intensity samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    image: GrayImage,
}

fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width < MIN_GRID_DIMENSION || height < MIN_GRID_DIMENSION {
        Err(anyhow!(
            "Invalid input: image is {}x{}, must be at least {}x{}",
            width,
            height,
            MIN_GRID_DIMENSION,
            MIN_GRID_DIMENSION
        ))
    } else {
        Ok(())
    }
}

impl IntensityGrid {
    /// Builds a grid from row-major samples.
    pub fn new(width: usize, height: usize, samples: Vec<u8>) -> Result<Self> {
        if samples.len() != width * height {
            return Err(anyhow!(
                "Invalid input: sample buffer is of a non-matching length: {} != {}",
                samples.len(),
                width * height
            ));
        }
        validate_dimensions(width, height)?;
        let image = GrayImage::from_raw(width as u32, height as u32, samples)
            .ok_or_else(|| anyhow!("Invalid input: unable to wrap sample buffer"))?;
        Ok(IntensityGrid { image })
    }

    pub fn new_with_fill(width: usize, height: usize, value: u8) -> Result<Self> {
        IntensityGrid::new(width, height, vec![value; width * height])
    }

    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.iter().any(|r| r.len() != width) {
            return Err(anyhow!("Invalid input: rows are of non-matching lengths"));
        }
        IntensityGrid::new(width, height, rows.concat())
    }

    /// Converts any decoded image to 8-bit luma.
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        let luma = image.to_luma8();
        validate_dimensions(luma.width() as usize, luma.height() as usize)?;
        Ok(IntensityGrid { image: luma })
    }

    pub fn open(file_path: &str) -> Result<Self> {
        if !Path::new(file_path).exists() {
            return Err(anyhow!("File not found: {}", file_path));
        }
        info!("Loading capture image: {}", file_path);
        let image = image::open(file_path)
            .map_err(|e| anyhow!("Unable to decode image {}: {}", file_path, e))?;
        let grid = IntensityGrid::from_image(&image)?;
        info!("Capture image is {}x{}", grid.width(), grid.height());
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.image.get_pixel(x as u32, y as u32).0[0]
    }

    /// Row-major samples.
    pub fn samples(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let w = self.width();
        &self.samples()[y * w..(y + 1) * w]
    }

    pub fn column(&self, x: usize) -> Vec<u8> {
        (0..self.height()).map(|y| self.get(x, y)).collect()
    }

    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }
}
