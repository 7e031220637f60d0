//! Oxidate icon generator
//!
//! Procedurally renders the Oxidate application icon (an orange gradient ring
//! over a dark disc with a soft highlight) and produces the assets a macOS
//! application bundle needs.
//!
//! # Pipeline
//!
//! 1. **Render**: draw on a supersampled canvas, downsample with Lanczos3
//!    ([`rendering::render_icon`]).
//! 2. **Export**: write the base PNG and a fresh `.iconset` directory with the
//!    ten standard sizes ([`export::export_iconset`]).
//! 3. **Package**: hand the iconset to a [`Packager`] that builds the `.icns`
//!    container ([`IconutilPackager`] by default).
//!
//! Every stage runs to completion or returns an error; nothing is retried and
//! files written by earlier stages are left in place.
//!
//! # Example
//!
//! ```no_run
//! use oxidate_icon::{AssetLayout, IconStyle, IconutilPackager, RenderOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = AssetLayout::new("assets");
//! let options = RenderOptions::new(1024, 4);
//! let generated = oxidate_icon::generate_assets(
//!     &layout,
//!     &options,
//!     &IconStyle::default(),
//!     &IconutilPackager::new(),
//! )?;
//! println!("base png sha256: {}", generated.base_png_sha256);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::info;

pub mod digest;
pub mod error;
pub mod export;
pub mod logging;
pub mod package;
pub mod rendering;

pub use error::{Error, Result};
pub use package::{IconutilPackager, Packager};
pub use rendering::paint::{IconStyle, RingGeometry};
pub use rendering::{render_icon, RenderOptions};

/// Output locations under an assets directory.
///
/// ```
/// let layout = oxidate_icon::AssetLayout::new("assets");
/// assert!(layout.icns_path.ends_with("oxidate.icns"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    /// Root directory all outputs are written under
    pub assets_dir: PathBuf,
    /// Base raster (`oxidate.png`)
    pub base_png: PathBuf,
    /// Staging directory for the iconset (`oxidate.iconset/`)
    pub iconset_dir: PathBuf,
    /// Packaged container (`oxidate.icns`)
    pub icns_path: PathBuf,
}

impl AssetLayout {
    pub fn new(assets_dir: impl AsRef<Path>) -> Self {
        let assets_dir = assets_dir.as_ref().to_path_buf();
        Self {
            base_png: assets_dir.join("oxidate.png"),
            iconset_dir: assets_dir.join("oxidate.iconset"),
            icns_path: assets_dir.join("oxidate.icns"),
            assets_dir,
        }
    }
}

/// What a successful run wrote.
#[derive(Debug, Clone)]
pub struct GeneratedAssets {
    pub base_png: PathBuf,
    /// Hex SHA-256 of the encoded base PNG
    pub base_png_sha256: String,
    /// Iconset files in table order
    pub iconset_files: Vec<PathBuf>,
    pub icns_path: PathBuf,
}

/// Run render, export and packaging in order.
///
/// Any failure aborts immediately. Outputs of completed stages remain on disk,
/// so a packaging failure still leaves the base PNG and the iconset behind.
pub fn generate_assets(
    layout: &AssetLayout,
    options: &RenderOptions,
    style: &IconStyle,
    packager: &dyn Packager,
) -> Result<GeneratedAssets> {
    let base = render_icon(options, style)?;
    info!(
        "rendered {0}x{0} icon ({1}x supersample)",
        options.base_size, options.supersample
    );

    export::write_png(&base, &layout.base_png)?;
    let base_png_sha256 = digest::sha256_file(&layout.base_png)?;
    info!("wrote {} (sha256 {base_png_sha256})", layout.base_png.display());

    let iconset_files = export::export_iconset(&base, &layout.iconset_dir)?;
    info!(
        "exported {} files to {}",
        iconset_files.len(),
        layout.iconset_dir.display()
    );

    packager.build(&layout.iconset_dir, &layout.icns_path)?;

    Ok(GeneratedAssets {
        base_png: layout.base_png.clone(),
        base_png_sha256,
        iconset_files,
        icns_path: layout.icns_path.clone(),
    })
}
