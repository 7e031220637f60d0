/// Colors and proportions of the icon artwork

use image::Rgba;

/// Fixed palette plus geometry used by the renderer.
///
/// ```
/// let style = oxidate_icon::IconStyle::default();
/// assert_eq!(style.background.0, [20, 24, 30, 255]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    /// Opaque fill behind everything
    pub background: Rgba<u8>,
    /// Disc painted inside the ring
    pub inner: Rgba<u8>,
    /// Ring gradient color at the top row
    pub ring_top: Rgba<u8>,
    /// Ring gradient color at the bottom row
    pub ring_bottom: Rgba<u8>,
    /// Semi-transparent highlight dot
    pub highlight: Rgba<u8>,
    pub geometry: RingGeometry,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            background: Rgba([20, 24, 30, 255]),
            inner: Rgba([34, 40, 52, 255]),
            ring_top: Rgba([245, 150, 45, 255]),
            ring_bottom: Rgba([205, 120, 35, 255]),
            highlight: Rgba([255, 230, 160, 180]),
            geometry: RingGeometry::default(),
        }
    }
}

/// Shape proportions, expressed as fractions of the working canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// How far the inner disc sits inside the ring's inner edge
    pub inner_inset: f64,
    pub highlight_radius: f64,
    /// Highlight centre offset from the canvas centre (x right, y up)
    pub highlight_offset: (f64, f64),
    /// Ring mask blur sigma per unit of supersampling
    pub ring_blur: f64,
    /// Highlight blur sigma as a fraction of the canvas size
    pub highlight_blur: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            outer_radius: 0.41,
            inner_radius: 0.295,
            inner_inset: 0.01,
            highlight_radius: 0.05,
            highlight_offset: (0.23, 0.21),
            ring_blur: 1.2,
            highlight_blur: 0.012,
        }
    }
}
