//! Render every illustration to SVG.
//!
//!     cargo run --example gallery [out_dir] [config.ron ...]
//!
//! With config files, only those sketches are rendered.
use std::path::PathBuf;

use log::info;
use sacred_plotty_rs::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "gallery".to_string()));
    std::fs::create_dir_all(&out_dir)?;

    let configs: Vec<PathBuf> = args.map(PathBuf::from).collect();
    let sketches: Vec<Sketch> = if configs.is_empty() {
        Illustration::all()
            .into_iter()
            .map(|illustration| Sketch::new(&illustration.name().to_string(), illustration))
            .collect()
    } else {
        configs
            .iter()
            .map(|path| Ok(SketchConfig::from_file(path)?.to_sketch()))
            .collect::<anyhow::Result<_>>()?
    };

    for mut sketch in sketches {
        sketch.setup(true)?;
        let path = sketch.save_svg(&out_dir)?;
        info!(
            "{}: {} path(s) -> {}",
            sketch.name(),
            sketch.root().path_count(),
            path.display()
        );
        // Keep the settings next to the svg so the render can be tweaked later.
        SketchConfig::from_sketch(&sketch).to_file(&path)?;
    }
    Ok(())
}
