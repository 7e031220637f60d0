//! End-to-end runs of the render -> export -> package pipeline

mod common;

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use oxidate_icon::{
    generate_assets, AssetLayout, Error, IconStyle, IconutilPackager, Packager, RenderOptions,
    Result,
};

/// Records calls and writes a placeholder container.
#[derive(Default)]
struct RecordingPackager {
    calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl Packager for RecordingPackager {
    fn build(&self, iconset_dir: &Path, output: &Path) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((iconset_dir.to_path_buf(), output.to_path_buf()));
        fs::write(output, b"icns").map_err(|e| Error::Io {
            path: output.to_path_buf(),
            source: e,
        })
    }
}

struct FailingPackager;

impl Packager for FailingPackager {
    fn build(&self, _iconset_dir: &Path, _output: &Path) -> Result<()> {
        Err(Error::PackagerSpawn {
            program: "iconutil".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
        })
    }
}

#[test]
fn successful_run_writes_all_outputs() {
    let layout = AssetLayout::new(common::scratch_dir("pipeline-ok").join("assets"));
    let packager = RecordingPackager::default();

    let generated = generate_assets(
        &layout,
        &RenderOptions::new(64, 1),
        &IconStyle::default(),
        &packager,
    )
    .expect("pipeline");

    assert_eq!(generated.base_png, layout.base_png);
    assert_eq!(generated.icns_path, layout.icns_path);
    assert_eq!(generated.iconset_files.len(), 10);
    assert_eq!(generated.base_png_sha256.len(), 64);

    let base = image::open(&layout.base_png).expect("decode base");
    assert_eq!((base.width(), base.height()), (64, 64));

    let calls = packager.calls.borrow();
    assert_eq!(calls.as_slice(), &[(layout.iconset_dir.clone(), layout.icns_path.clone())]);
    assert!(layout.icns_path.exists());
}

#[test]
fn packaging_failure_keeps_earlier_outputs() {
    let layout = AssetLayout::new(common::scratch_dir("pipeline-fail").join("assets"));

    let err = generate_assets(
        &layout,
        &RenderOptions::new(32, 1),
        &IconStyle::default(),
        &FailingPackager,
    )
    .unwrap_err();

    assert!(matches!(err, Error::PackagerSpawn { .. }));
    assert!(layout.base_png.is_file());
    assert!(layout.iconset_dir.is_dir());
    assert_eq!(fs::read_dir(&layout.iconset_dir).unwrap().count(), 10);
    assert!(!layout.icns_path.exists());
}

#[test]
fn missing_packaging_utility_is_fatal() {
    let layout = AssetLayout::new(common::scratch_dir("pipeline-missing").join("assets"));
    let packager = IconutilPackager::with_program("oxidate-icon-missing-iconutil");

    let err = generate_assets(
        &layout,
        &RenderOptions::new(16, 2),
        &IconStyle::default(),
        &packager,
    )
    .unwrap_err();

    assert!(matches!(err, Error::PackagerSpawn { .. }), "{err}");
    assert!(layout.base_png.is_file());
    assert!(layout.iconset_dir.is_dir());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let options = RenderOptions::new(48, 2);
    let a = AssetLayout::new(common::scratch_dir("pipeline-repeat-a"));
    let b = AssetLayout::new(common::scratch_dir("pipeline-repeat-b"));

    let ga = generate_assets(&a, &options, &IconStyle::default(), &RecordingPackager::default())
        .expect("first run");
    let gb = generate_assets(&b, &options, &IconStyle::default(), &RecordingPackager::default())
        .expect("second run");

    assert_eq!(ga.base_png_sha256, gb.base_png_sha256);
    assert_eq!(
        fs::read(&a.base_png).expect("read a"),
        fs::read(&b.base_png).expect("read b")
    );
}
