//! Software rasterization: pixel canvas, fill primitives, draw commands.
//!
//! Data flows one way: a scene composes a `Vec<PaintCommand>`, `paint`
//! replays it onto a `Canvas`, and the serializer reads the canvas back out.

pub mod canvas;
pub mod paint;
pub mod raster;

pub use canvas::{Canvas, Color};
pub use paint::{paint, PaintCommand};
