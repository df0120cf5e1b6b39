//! The fixed village scene: palette and draw script.
//!
//! Shape measurements are fractions of the canvas dimension so the same
//! scene renders at any size; grass band spacing and outline thicknesses
//! are absolute pixel values, matching the shipped 1024px icon.

use crate::rendering::{Color, PaintCommand};

/// Flat colors shared with the game's sprite work.
pub mod palette {
    use crate::rendering::Color;

    pub const GRASS: Color = Color::rgb(201, 246, 183);
    pub const GRASS_DARK: Color = Color::rgb(182, 234, 166);
    pub const PATH: Color = Color::rgb(242, 215, 166);
    pub const ROOF: Color = Color::rgb(255, 178, 200);
    pub const HOUSE: Color = Color::rgb(255, 242, 248);
    pub const TRIM: Color = Color::rgb(255, 211, 231);
    pub const DOOR: Color = Color::rgb(217, 160, 107);
    pub const WINDOW: Color = Color::rgb(143, 211, 255);
    pub const TREE: Color = Color::rgb(140, 216, 165);
    pub const TRUNK: Color = Color::rgb(179, 122, 84);
    pub const OUTLINE: Color = Color::rgb(166, 107, 69);
}

/// Background the canvas is cleared to before the script runs.
pub const BACKGROUND: Color = palette::GRASS;

/// Truncating fraction of the canvas dimension.
fn frac(n: i32, f: f64) -> i32 {
    (n as f64 * f) as i32
}

/// Build the ordered draw list for an `n` x `n` icon.
///
/// Later entries paint over earlier ones, which is the entire layout
/// mechanism: ground bands, path, house body and trim, roof, door, window,
/// tree trunk and canopy.
pub fn compose(n: i32) -> Vec<PaintCommand> {
    let mut commands = Vec::new();

    // Subtle darker bands over the base grass coat
    for y in (0..n).step_by(28) {
        if (y / 28) % 2 == 0 {
            commands.push(PaintCommand::Rect {
                x0: 0,
                y0: y,
                x1: n,
                y1: (y + 12).min(n),
                color: palette::GRASS_DARK,
            });
        }
    }

    // Path
    commands.push(PaintCommand::Rect {
        x0: 0,
        y0: frac(n, 0.72),
        x1: n,
        y1: frac(n, 0.82),
        color: palette::PATH,
    });

    // House body
    let house_w = frac(n, 0.46);
    let house_h = frac(n, 0.30);
    let house_x = (n - house_w) / 2;
    let house_y = frac(n, 0.38);
    commands.push(PaintCommand::Rect {
        x0: house_x,
        y0: house_y,
        x1: house_x + house_w,
        y1: house_y + house_h,
        color: palette::HOUSE,
    });
    commands.push(PaintCommand::Outline {
        x0: house_x,
        y0: house_y,
        x1: house_x + house_w,
        y1: house_y + house_h,
        color: palette::TRIM,
        thickness: 8,
    });

    // Roof
    commands.push(PaintCommand::Triangle {
        vertices: [
            (house_x - frac(n, 0.02), house_y),
            (house_x + house_w + frac(n, 0.02), house_y),
            (n / 2, frac(n, 0.22)),
        ],
        color: palette::ROOF,
    });

    // Door
    let door_w = frac(n, 0.10);
    let door_h = frac(n, 0.17);
    let door_x = n / 2 - door_w / 2;
    let door_y = house_y + house_h - door_h;
    commands.push(PaintCommand::Rect {
        x0: door_x,
        y0: door_y,
        x1: door_x + door_w,
        y1: door_y + door_h,
        color: palette::DOOR,
    });
    commands.push(PaintCommand::Outline {
        x0: door_x,
        y0: door_y,
        x1: door_x + door_w,
        y1: door_y + door_h,
        color: palette::OUTLINE,
        thickness: 4,
    });

    // Window
    let win_w = frac(n, 0.09);
    let win_h = frac(n, 0.09);
    let win_x = house_x + frac(n, 0.12);
    let win_y = house_y + frac(n, 0.10);
    commands.push(PaintCommand::Rect {
        x0: win_x,
        y0: win_y,
        x1: win_x + win_w,
        y1: win_y + win_h,
        color: palette::WINDOW,
    });
    commands.push(PaintCommand::Outline {
        x0: win_x,
        y0: win_y,
        x1: win_x + win_w,
        y1: win_y + win_h,
        color: palette::OUTLINE,
        thickness: 4,
    });

    // Tree trunk
    let trunk_w = frac(n, 0.06);
    let trunk_h = frac(n, 0.16);
    let trunk_x = house_x - frac(n, 0.12);
    let trunk_y = house_y + house_h - trunk_h;
    commands.push(PaintCommand::Rect {
        x0: trunk_x,
        y0: trunk_y,
        x1: trunk_x + trunk_w,
        y1: trunk_y + trunk_h,
        color: palette::TRUNK,
    });
    commands.push(PaintCommand::Outline {
        x0: trunk_x,
        y0: trunk_y,
        x1: trunk_x + trunk_w,
        y1: trunk_y + trunk_h,
        color: palette::OUTLINE,
        thickness: 3,
    });

    // Tree canopy
    let canopy_w = frac(n, 0.18);
    let canopy_h = frac(n, 0.14);
    let canopy_x = trunk_x - frac(n, 0.06);
    let canopy_y = trunk_y - frac(n, 0.10);
    commands.push(PaintCommand::Rect {
        x0: canopy_x,
        y0: canopy_y,
        x1: canopy_x + canopy_w,
        y1: canopy_y + canopy_h,
        color: palette::TREE,
    });
    commands.push(PaintCommand::Outline {
        x0: canopy_x,
        y0: canopy_y,
        x1: canopy_x + canopy_w,
        y1: canopy_y + canopy_h,
        color: palette::OUTLINE,
        thickness: 3,
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_emits_the_full_script_in_order() {
        let commands = compose(1024);

        // 19 grass bands (every other 28px step of 1024), then path, house
        // body + trim, roof, door + outline, window + outline, trunk +
        // outline, canopy + outline
        let bands = (0..1024).step_by(28).filter(|y| (y / 28) % 2 == 0).count();
        assert_eq!(bands, 19);
        assert_eq!(commands.len(), bands + 12);

        assert!(matches!(
            commands[bands],
            PaintCommand::Rect { color, .. } if color == palette::PATH
        ));
        assert!(matches!(
            commands.last(),
            Some(PaintCommand::Outline { thickness: 3, color, .. }) if *color == palette::OUTLINE
        ));
    }

    #[test]
    fn roof_peak_sits_on_the_vertical_centerline() {
        let commands = compose(1024);
        let roof = commands
            .iter()
            .find_map(|c| match c {
                PaintCommand::Triangle { vertices, color } if *color == palette::ROOF => {
                    Some(*vertices)
                }
                _ => None,
            })
            .expect("scene has a roof");
        assert_eq!(roof[2], (512, 225));
        // eaves extend past the house walls on both sides
        assert!(roof[0].0 < roof[2].0 && roof[1].0 > roof[2].0);
        assert_eq!(roof[0].1, roof[1].1);
    }

    #[test]
    fn grass_bands_alternate_from_the_top_edge() {
        let commands = compose(256);
        match commands[0] {
            PaintCommand::Rect { x0, y0, x1, y1, color } => {
                assert_eq!((x0, y0, x1, y1), (0, 0, 256, 12));
                assert_eq!(color, palette::GRASS_DARK);
            }
            _ => panic!("first command should be the top grass band"),
        }
        match commands[1] {
            PaintCommand::Rect { y0, .. } => assert_eq!(y0, 56),
            _ => panic!("second command should be a grass band"),
        }
    }
}
