//! PNG output and iconset staging

use std::fs;
use std::path::{Path, PathBuf};

use image::{imageops, RgbaImage};
use log::debug;

use crate::{Error, Result};

/// File names and pixel sizes of a macOS iconset, in the order they are written.
pub const ICONSET_ENTRIES: [(&str, u32); 10] = [
    ("icon_16x16.png", 16),
    ("icon_16x16@2x.png", 32),
    ("icon_32x32.png", 32),
    ("icon_32x32@2x.png", 64),
    ("icon_128x128.png", 128),
    ("icon_128x128@2x.png", 256),
    ("icon_256x256.png", 256),
    ("icon_256x256@2x.png", 512),
    ("icon_512x512.png", 512),
    ("icon_512x512@2x.png", 1024),
];

/// Delete `dir` with everything in it, then create it again empty.
///
/// This is destructive and unconditional: whatever lived at `dir` before is
/// gone, which is how a fresh export guarantees no stale files survive.
/// Missing parents are created.
pub fn replace_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        debug!("removing {}", dir.display());
        fs::remove_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Encode `image` as PNG at `path`, creating parent directories as needed.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })
}

/// Recreate `dir` and fill it with every [`ICONSET_ENTRIES`] size of `base`.
///
/// Each file is resampled straight from `base` with Lanczos3, up or down as
/// needed. Returns the written paths in table order.
pub fn export_iconset(base: &RgbaImage, dir: &Path) -> Result<Vec<PathBuf>> {
    replace_dir(dir)?;

    let mut written = Vec::with_capacity(ICONSET_ENTRIES.len());
    for (name, px) in ICONSET_ENTRIES {
        let out = dir.join(name);
        let resized = imageops::resize(base, px, px, imageops::FilterType::Lanczos3);
        write_png(&resized, &out)?;
        debug!("wrote {} ({px}x{px})", out.display());
        written.push(out);
    }
    Ok(written)
}
