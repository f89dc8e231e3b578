//! Vertex-shape recording and dispatch.
//!
//! A shape is built vertex by vertex through [`ShapeBuilder`], then handed
//! to [`close`], which interprets the buffer according to its
//! [`ShapeDescriptor`] and emits path and paint calls on a
//! [`PathSink`](crate::render::PathSink).

mod builder;
mod curve;
mod dispatch;
mod error;
mod kind;
mod vertex;

pub use builder::ShapeBuilder;
pub use curve::catmull_rom_to_bezier;
pub use dispatch::close;
pub use error::ShapeError;
pub use kind::{CloseMode, ShapeDescriptor, ShapeKind, ShapePlan};
pub use vertex::{OnCurve, Vertex, VertexBuffer};
