//! Iconset export behaviour

mod common;

use std::collections::BTreeSet;
use std::fs;

use oxidate_icon::export::{export_iconset, replace_dir, ICONSET_ENTRIES};
use oxidate_icon::{render_icon, IconStyle, RenderOptions};

fn listing(dir: &std::path::Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .expect("read iconset dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn iconset_has_ten_files_with_documented_sizes() {
    let dir = common::scratch_dir("iconset-sizes").join("oxidate.iconset");
    let base = render_icon(&RenderOptions::new(64, 1), &IconStyle::default()).expect("render");
    assert_eq!(base.dimensions(), (64, 64));

    let written = export_iconset(&base, &dir).expect("export");
    assert_eq!(written.len(), 10);

    let expected: BTreeSet<String> = ICONSET_ENTRIES.iter().map(|(n, _)| n.to_string()).collect();
    assert_eq!(listing(&dir), expected);

    for (name, px) in ICONSET_ENTRIES {
        let img = image::open(dir.join(name)).expect("decode png");
        assert_eq!((img.width(), img.height()), (px, px), "{name}");
    }

    // Upsampled from the 64px base; still a full 1024px image.
    let big = image::open(dir.join("icon_512x512@2x.png")).expect("decode");
    assert_eq!(big.width(), 1024);
}

#[test]
fn re_export_removes_stale_files() {
    let dir = common::scratch_dir("iconset-stale").join("oxidate.iconset");
    fs::create_dir_all(dir.join("nested")).expect("nested");
    fs::write(dir.join("stale.png"), b"old").expect("stale file");
    fs::write(dir.join("icon_16x16.png"), b"not a png").expect("clobbered entry");
    fs::write(dir.join("nested").join("deep.txt"), b"x").expect("deep file");

    let base = render_icon(&RenderOptions::new(32, 1), &IconStyle::default()).expect("render");
    export_iconset(&base, &dir).expect("export");

    let names = listing(&dir);
    assert_eq!(names.len(), 10);
    assert!(!names.contains("stale.png"));
    assert!(!names.contains("nested"));
    assert!(image::open(dir.join("icon_16x16.png")).is_ok());
}

#[test]
fn replace_dir_creates_missing_parents_and_empties_existing() {
    let root = common::scratch_dir("replace-dir");
    let dir = root.join("a").join("b");
    replace_dir(&dir).expect("create");
    assert!(dir.is_dir());

    fs::write(dir.join("leftover"), b"1").expect("write");
    replace_dir(&dir).expect("replace");
    assert!(listing(&dir).is_empty());
}
