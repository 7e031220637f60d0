/// Pixel layout of the icon shapes on the working canvas

use crate::rendering::paint::RingGeometry;

/// Concrete radii, centres and blur strengths for one canvas size.
///
/// Radii and offsets are truncated to whole pixels so that the artwork
/// lines up the same way at every supersample factor.
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    /// Working canvas edge length in pixels
    pub size: u32,
    /// Canvas centre (same on both axes)
    pub center: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// Radius of the opaque disc drawn inside the ring
    pub fill_radius: f64,
    pub highlight_radius: f64,
    pub highlight_center: (f64, f64),
    pub ring_blur_sigma: f32,
    pub highlight_blur_sigma: f32,
}

fn whole(fraction: f64, size: f64) -> f64 {
    (fraction * size).trunc()
}

impl IconLayout {
    pub fn compute(size: u32, supersample: u32, geometry: &RingGeometry) -> Self {
        let s = f64::from(size);
        let center = s / 2.0;
        let outer_radius = whole(geometry.outer_radius, s);
        let inner_radius = whole(geometry.inner_radius, s);
        let fill_radius = (inner_radius - whole(geometry.inner_inset, s)).max(0.0);
        let (dx, dy) = geometry.highlight_offset;

        Self {
            size,
            center,
            outer_radius,
            inner_radius,
            fill_radius,
            highlight_radius: whole(geometry.highlight_radius, s),
            highlight_center: (center + whole(dx, s), center - whole(dy, s)),
            ring_blur_sigma: (geometry.ring_blur * f64::from(supersample)) as f32,
            highlight_blur_sigma: (geometry.highlight_blur * s) as f32,
        }
    }
}
