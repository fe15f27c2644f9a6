use crate::entities::{MarkerLayout, PlacedPiece};
use crate::geometry::geo_traits::CollidesWith;

/// No pair of margin-inflated footprints may intersect.
pub fn layout_is_collision_free(layout: &MarkerLayout) -> bool {
    let occupied = layout.occupied();
    occupied
        .iter()
        .enumerate()
        .all(|(i, a)| occupied[i + 1..].iter().all(|b| !a.collides_with(b)))
}

/// Every placed piece must lie within the roll width.
pub fn pieces_within_strip(layout: &MarkerLayout) -> bool {
    layout
        .placed()
        .iter()
        .all(|p| p.x >= 0.0 && p.x + p.width <= layout.strip_width())
}

pub fn layout_is_feasible(layout: &MarkerLayout) -> bool {
    layout_is_collision_free(layout) && pieces_within_strip(layout)
}

/// Checks a candidate placement against the current layout before it is
/// committed.
pub fn placement_is_feasible(layout: &MarkerLayout, placed: &PlacedPiece) -> bool {
    let footprint = placed.footprint();
    placed.x >= 0.0
        && placed.x + placed.width <= layout.strip_width()
        && !layout.occupied().iter().any(|r| r.collides_with(&footprint))
}
