use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use oxidate_icon::logging::{init_logging, LoggingConfig};
use oxidate_icon::{AssetLayout, IconStyle, IconutilPackager, RenderOptions};

#[derive(Debug, Parser)]
#[command(
    name = "oxidate-icon",
    about = "Generate Oxidate app icon assets (PNG + iconset + ICNS)"
)]
struct Args {
    /// Assets output directory
    #[arg(long, value_name = "DIR", default_value = "assets")]
    assets_dir: PathBuf,

    /// Base PNG size in pixels
    #[arg(long, value_name = "PX", default_value_t = 1024,
          value_parser = clap::value_parser!(u32).range(1..))]
    base_size: u32,

    /// Supersample factor for antialiasing (values below 1 mean 1)
    #[arg(long, value_name = "N", default_value_t = 4, allow_negative_numbers = true,
          value_parser = clap::value_parser!(i64).range(..=i64::from(u32::MAX)))]
    supersample: i64,

    /// Packaging program invoked as `<PROGRAM> -c icns <iconset> -o <icns>`
    #[arg(long, value_name = "PROGRAM", default_value = "iconutil")]
    iconutil: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(LoggingConfig::from_verbosity(args.verbose));

    let supersample = u32::try_from(args.supersample.max(1))
        .with_context(|| format!("--supersample {} is out of range", args.supersample))?;
    let options = RenderOptions::new(args.base_size, supersample);
    let layout = AssetLayout::new(&args.assets_dir);
    let packager = IconutilPackager::with_program(&args.iconutil);

    let generated = oxidate_icon::generate_assets(&layout, &options, &IconStyle::default(), &packager)
        .with_context(|| format!("generating icon assets in {}", layout.assets_dir.display()))?;

    println!("wrote {}", generated.base_png.display());
    println!("wrote {}", generated.icns_path.display());
    Ok(())
}
