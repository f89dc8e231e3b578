mod args;
mod sketch;

use anyhow::{Context, Result};
use clap::Parser;
use easel_engine::coords::Rect;
use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::paint::Color;
use easel_engine::render::Canvas;
use easel_engine::shape::ShapeKind;
use easel_engine::{Graphics, GraphicsConfig};

use args::StudioArgs;

/// Columns used when every kind is rendered at once.
const GRID_COLUMNS: usize = 4;

fn main() -> Result<()> {
    let args = StudioArgs::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    let config = GraphicsConfig {
        width: args.size.width,
        height: args.size.height,
        background: Some(Color::from_srgb_u8(250, 248, 242, 255)),
        ..GraphicsConfig::default()
    };
    let mut g = Graphics::with_canvas(&config).context("failed to create canvas")?;
    attach_font(&mut g);

    let (w, h) = (args.size.width as f32, args.size.height as f32);
    match args.kind {
        Some(kind) => sketch::draw_kind(&mut g, kind, Rect::new(0.0, 0.0, w, h)),
        None => {
            let rows = ShapeKind::ALL.len().div_ceil(GRID_COLUMNS);
            let cw = w / GRID_COLUMNS as f32;
            let ch = h / rows as f32;
            for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
                let col = (i % GRID_COLUMNS) as f32;
                let row = (i / GRID_COLUMNS) as f32;
                sketch::draw_kind(&mut g, kind, Rect::new(col * cw, row * ch, cw, ch));
            }
        }
    }

    g.save_png(&args.out)
        .with_context(|| format!("failed to save {}", args.out.display()))?;
    Ok(())
}

/// Loads the first system font found; labels are skipped without one.
fn attach_font(g: &mut Graphics<Canvas>) {
    let bytes = [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok());

    let Some(bytes) = bytes else {
        log::info!("no system font found; labels disabled");
        return;
    };
    match g.load_font(&bytes) {
        Ok(font) => {
            g.text_font(font);
            g.text_size(14.0);
        }
        Err(e) => log::warn!("{e}"),
    }
}
