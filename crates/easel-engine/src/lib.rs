//! Easel engine crate.
//!
//! An immediate-mode 2D renderer: shapes are described vertex by vertex,
//! interpreted by kind when the shape closes, and painted through a
//! [`render::PathSink`]. The [`graphics::Graphics`] facade is the usual entry
//! point; [`render::Canvas`] rasterizes, [`scene::CmdList`] records.

pub mod coords;
pub mod graphics;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod shape;
pub mod text;

pub use graphics::{Graphics, GraphicsConfig};
