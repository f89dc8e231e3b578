//! Rendering subsystem.
//!
//! The shape core and the facade talk to a [`PathSink`]. Two sinks ship with
//! the crate: [`crate::scene::CmdList`] records calls, [`Canvas`] rasterizes
//! them with tiny-skia.
//!
//! Convention:
//! - geometry is in logical pixels (top-left origin, +Y down)
//! - colours handed to sinks are premultiplied [`crate::paint::Color`]s

mod canvas;
mod image;
pub mod primitives;
mod sink;
mod state;

pub use canvas::{Canvas, PixelRegion, PixelValue};
pub use image::Image;
pub use primitives::ArcMode;
pub use sink::PathSink;
pub use state::{DrawState, StrokeCap, StrokeJoin, StrokeStyle, HAIRLINE_EPSILON};
