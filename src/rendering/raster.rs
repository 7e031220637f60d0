/// Pixel-level drawing primitives used by the icon renderer

use image::{imageops, GrayImage, ImageBuffer, Pixel, Rgba, RgbaImage};

/// Fill every pixel whose centre lies within `radius` of `(cx, cy)`.
///
/// No antialiasing happens here; smooth edges come from supersampling and
/// the blur passes applied by the caller.
pub fn fill_disc<P>(img: &mut ImageBuffer<P, Vec<P::Subpixel>>, cx: f64, cy: f64, radius: f64, value: P)
where
    P: Pixel,
{
    if radius <= 0.0 {
        return;
    }
    let (w, h) = img.dimensions();
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil().max(0.0) as u32).min(w);
    let y1 = ((cy + radius).ceil().max(0.0) as u32).min(h);
    let r2 = radius * radius;

    for y in y0..y1 {
        let dy = f64::from(y) + 0.5 - cy;
        for x in x0..x1 {
            let dx = f64::from(x) + 0.5 - cx;
            if dx * dx + dy * dy <= r2 {
                img.put_pixel(x, y, value);
            }
        }
    }
}

/// Color of row `y` in a vertical gradient of `height` rows.
///
/// Each channel, alpha included, is interpolated linearly and truncated.
pub fn gradient_row(top: Rgba<u8>, bottom: Rgba<u8>, y: u32, height: u32) -> Rgba<u8> {
    let t = f64::from(y) / f64::from(height.saturating_sub(1).max(1));
    let mut out = [0u8; 4];
    for (c, slot) in out.iter_mut().enumerate() {
        let a = f64::from(top.0[c]);
        let b = f64::from(bottom.0[c]);
        *slot = (a + (b - a) * t) as u8;
    }
    Rgba(out)
}

/// Build a `width x height` image holding a top-to-bottom two-color gradient.
pub fn vertical_gradient(width: u32, height: u32, top: Rgba<u8>, bottom: Rgba<u8>) -> RgbaImage {
    let rows: Vec<Rgba<u8>> = (0..height).map(|y| gradient_row(top, bottom, y, height)).collect();
    RgbaImage::from_fn(width, height, |_, y| rows[y as usize])
}

/// Scale an 8-bit channel by an 8-bit coverage value, rounding like Pillow's
/// mask blend against a zero background.
fn scale_channel(value: u8, coverage: u8) -> u8 {
    let t = u32::from(value) * u32::from(coverage) + 128;
    ((t + (t >> 8)) >> 8) as u8
}

/// Blend `layer` onto `canvas` (source-over) through `mask`.
///
/// The layer is first masked against transparent black, so every channel
/// (RGB and alpha) is scaled by the mask value; soft mask edges therefore
/// darken as well as fade. Where the mask is zero the canvas is untouched.
/// All three images must share dimensions.
pub fn composite_masked(canvas: &mut RgbaImage, layer: &RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(canvas.dimensions(), layer.dimensions());
    debug_assert_eq!(canvas.dimensions(), mask.dimensions());

    for ((dst, src), m) in canvas.pixels_mut().zip(layer.pixels()).zip(mask.pixels()) {
        let coverage = m.0[0];
        if coverage == 0 {
            continue;
        }
        let px = Rgba(src.0.map(|c| scale_channel(c, coverage)));
        if px.0[3] == 255 {
            *dst = px;
        } else if px.0[3] > 0 {
            dst.blend(&px);
        }
    }
}

/// Draw a blurred disc onto `canvas` with source-over blending.
///
/// Only a square window around the disc (radius plus three sigma) is
/// rasterized and blurred; outside it the blurred disc is transparent.
/// Channels are blurred independently against a transparent black
/// background, so the halo tints toward black as it fades out.
pub fn soft_disc(canvas: &mut RgbaImage, cx: f64, cy: f64, radius: f64, sigma: f32, color: Rgba<u8>) {
    if radius <= 0.0 {
        return;
    }
    let margin = (3.0 * f64::from(sigma.max(0.0))).ceil() + 1.0;
    let half = radius + margin;
    let left = (cx - half).floor();
    let top = (cy - half).floor();
    let side = (2.0 * half).ceil() as u32 + 1;

    // Transparent black around the dot: the blur fades RGB along with alpha.
    let mut layer = RgbaImage::new(side, side);
    fill_disc(&mut layer, cx - left, cy - top, radius, color);

    let layer = if sigma > 0.0 {
        imageops::blur(&layer, sigma)
    } else {
        layer
    };
    imageops::overlay(canvas, &layer, left as i64, top as i64);
}
