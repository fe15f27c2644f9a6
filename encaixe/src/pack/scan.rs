use crate::geometry::Rect;
use crate::geometry::geo_traits::CollidesWith;
use crate::pack::PackConfig;

/// Scans candidate origins in row-major order (increasing y, then increasing x,
/// at `config.step` granularity) and returns the first position where a
/// `w` by `h` footprint fits within the roll width without intersecting any
/// occupied region.
///
/// Returns `None` when the piece is wider than the roll or the scan reaches
/// the height ceiling, leaving the orientation swap (or failure) to the caller.
pub fn find_position(
    occupied: &[Rect],
    strip_width: f32,
    w: f32,
    h: f32,
    config: PackConfig,
    scan_counter: &mut usize,
) -> Option<(f32, f32)> {
    if w > strip_width {
        return None;
    }

    let mut y = 0.0;
    while y < config.height_ceiling {
        let mut x = 0.0;
        while x + w <= strip_width {
            *scan_counter += 1;
            let candidate = Rect {
                x_min: x,
                y_min: y,
                x_max: x + w,
                y_max: y + h,
            };
            if !occupied.iter().any(|r| r.collides_with(&candidate)) {
                return Some((x, y));
            }
            x += config.step;
        }
        y += config.step;
    }
    None
}
