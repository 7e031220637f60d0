//! Icon renderer
//!
//! Draws the artwork on a supersampled canvas and reduces it to the requested
//! base size with a Lanczos filter.

pub mod layout;
pub mod paint;
pub mod raster;

use image::{imageops, GrayImage, Luma, RgbaImage};
use log::debug;

use crate::{Error, Result};
use layout::IconLayout;
use paint::IconStyle;

/// Largest working canvas edge the renderer will allocate (1 GiB of RGBA).
pub const MAX_WORKING_SIZE: u32 = 16_384;

/// Output size and supersampling for a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Edge length of the final square image
    pub base_size: u32,
    /// Working-resolution multiplier, at least 1
    pub supersample: u32,
}

impl RenderOptions {
    /// Create options, flooring `supersample` to 1.
    pub fn new(base_size: u32, supersample: u32) -> Self {
        Self {
            base_size,
            supersample: supersample.max(1),
        }
    }

    /// Edge length of the working canvas.
    ///
    /// Fails when the canvas would exceed [`MAX_WORKING_SIZE`] or its RGBA
    /// buffer could not be addressed on this platform.
    pub fn working_size(&self) -> Result<u32> {
        if self.base_size == 0 {
            return Err(Error::InvalidSize("base size must be at least 1".to_string()));
        }
        let too_large = || {
            Error::InvalidSize(format!(
                "{} x {} supersample exceeds the {MAX_WORKING_SIZE}px working canvas limit",
                self.base_size, self.supersample
            ))
        };
        let size = self
            .base_size
            .checked_mul(self.supersample.max(1))
            .filter(|&s| s <= MAX_WORKING_SIZE)
            .ok_or_else(too_large)?;

        let buffer_len = u64::from(size)
            .checked_mul(u64::from(size))
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(too_large)?;
        if buffer_len > isize::MAX as u64 {
            return Err(too_large());
        }
        Ok(size)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            base_size: 1024,
            supersample: 4,
        }
    }
}

/// Render the icon and return a `base_size x base_size` RGBA image.
///
/// Output is fully determined by `options` and `style`.
pub fn render_icon(options: &RenderOptions, style: &IconStyle) -> Result<RgbaImage> {
    let size = options.working_size()?;
    let supersample = options.supersample.max(1);
    let l = IconLayout::compute(size, supersample, &style.geometry);
    debug!("rendering {size}px working canvas ({supersample}x supersample)");

    let mut canvas = RgbaImage::from_pixel(size, size, style.background);

    let mut ring_mask = GrayImage::new(size, size);
    raster::fill_disc(&mut ring_mask, l.center, l.center, l.outer_radius, Luma([255]));
    raster::fill_disc(&mut ring_mask, l.center, l.center, l.inner_radius, Luma([0]));
    let ring_mask = imageops::blur(&ring_mask, l.ring_blur_sigma);

    let gradient = raster::vertical_gradient(size, size, style.ring_top, style.ring_bottom);
    raster::composite_masked(&mut canvas, &gradient, &ring_mask);
    drop(gradient);
    drop(ring_mask);

    raster::fill_disc(&mut canvas, l.center, l.center, l.fill_radius, style.inner);

    let (hx, hy) = l.highlight_center;
    raster::soft_disc(
        &mut canvas,
        hx,
        hy,
        l.highlight_radius,
        l.highlight_blur_sigma,
        style.highlight,
    );

    // Same-size Lanczos is an identity copy, so supersample 1 skips it.
    if size == options.base_size {
        return Ok(canvas);
    }
    debug!("downsampling to {0}x{0}", options.base_size);
    Ok(imageops::resize(
        &canvas,
        options.base_size,
        options.base_size,
        imageops::FilterType::Lanczos3,
    ))
}
