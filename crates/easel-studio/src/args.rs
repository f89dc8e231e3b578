use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use easel_engine::shape::ShapeKind;

/// Canvas size in pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(version, about = "Render easel shape-kind demos to a PNG")]
pub struct StudioArgs {
    /// Shape kind to draw: polygon, points, lines, triangles, triangle_strip,
    /// triangle_fan, quads or quad_strip (default: every kind, in a grid)
    #[arg(long, value_name = "TAG", value_parser = ShapeKind::from_str)]
    pub kind: Option<ShapeKind>,

    /// PNG file to write
    #[arg(long, value_name = "PATH", default_value = "easel.png")]
    pub out: PathBuf,

    /// Canvas size in pixels
    #[arg(long, value_name = "WxH", default_value = "640x320", value_parser = parse_size)]
    pub size: Size,

    /// env_logger filter, e.g. easel_engine=debug
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("size \"{s}\" is not WIDTHxHEIGHT"))?;
    let width: u32 = w.trim().parse().map_err(|e| format!("bad width in \"{s}\": {e}"))?;
    let height: u32 = h.trim().parse().map_err(|e| format!("bad height in \"{s}\": {e}"))?;
    if width == 0 || height == 0 {
        return Err(format!("size \"{s}\" must be non-zero"));
    }
    Ok(Size { width, height })
}
