//! Draw commands and the painter that replays them

use super::canvas::{Canvas, Color};
use super::raster;

/// One drawing operation.
///
/// A scene is an ordered `Vec<PaintCommand>`; `paint` replays the list front
/// to back with no blending, so later commands overwrite earlier ones
/// wherever they overlap. Boxes are half-open on both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintCommand {
    /// Solid axis-aligned box
    Rect {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    },
    /// Solid triangle between three vertices
    Triangle {
        vertices: [(i32, i32); 3],
        color: Color,
    },
    /// Rectangular frame drawn just inside a box
    Outline {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
        thickness: i32,
    },
}

/// Replay `commands` onto `canvas` in order (painter's algorithm).
pub fn paint(canvas: &mut Canvas, commands: &[PaintCommand]) {
    for command in commands {
        match *command {
            PaintCommand::Rect { x0, y0, x1, y1, color } => {
                raster::fill_rect(canvas, x0, y0, x1, y1, color);
            }
            PaintCommand::Triangle { vertices: [p0, p1, p2], color } => {
                raster::fill_triangle(canvas, p0, p1, p2, color);
            }
            PaintCommand::Outline { x0, y0, x1, y1, color, thickness } => {
                raster::fill_outline(canvas, x0, y0, x1, y1, color, thickness);
            }
        }
    }
}
