use crate::entities::{MarkerInstance, MarkerLayout, MarkerSolution, PieceInstance, PlacedPiece};
use crate::errors::PieceDoesNotFitError;
use crate::pack::{PackConfig, expand, find_position};
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use thousands::Separable;

/// First-fit-decreasing packer: places the largest pieces first, each at the
/// first feasible position scanned bottom-to-top, left-to-right, and never
/// revisits a placement. Larger pieces first reduces fragmentation at the cost
/// of any optimality guarantee.
pub struct Packer {
    pub instance: MarkerInstance,
    pub layout: MarkerLayout,
    pub config: PackConfig,
    /// Number of candidate positions tested so far
    pub scan_counter: usize,
}

impl Packer {
    pub fn new(instance: MarkerInstance, config: PackConfig) -> Self {
        assert!(config.step > 0.0);
        assert!(config.height_ceiling > 0.0);
        let layout = MarkerLayout::new(instance.strip_width, instance.margin);
        Self {
            instance,
            layout,
            config,
            scan_counter: 0,
        }
    }

    /// Places every demanded piece. On failure the pieces placed before the
    /// offending one remain available through [`Packer::layout`].
    pub fn solve(&mut self) -> Result<MarkerSolution, PieceDoesNotFitError> {
        for piece_instance in placement_order(&self.instance) {
            self.place_piece(&piece_instance)?;
        }
        debug_assert!(assertions::layout_is_feasible(&self.layout));

        let solution = self.layout.save();
        info!(
            "[FFD] placed {} pieces, extent {:.1}, material length {:.2}m ({} positions scanned)",
            solution.placed.len(),
            solution.extent,
            solution.material_length_m(),
            self.scan_counter.separate_with_commas()
        );
        Ok(solution)
    }

    fn place_piece(&mut self, pi: &PieceInstance) -> Result<(), PieceDoesNotFitError> {
        let placement = self
            .find_placement(pi.width, pi.length)
            .map(|(x, y)| (x, y, false))
            .or_else(|| {
                // retry with the piece rotated 90 degrees
                self.find_placement(pi.length, pi.width)
                    .map(|(x, y)| (x, y, true))
            });

        match placement {
            Some((x, y, rotated)) => {
                let placed = PlacedPiece::new(pi, x, y, rotated);
                debug!(
                    "[FFD] placing '{}' ({}x{}) at ({x}, {y}){}",
                    self.instance.piece(pi.piece_id).label,
                    placed.length,
                    placed.width,
                    if rotated { " rotated" } else { "" },
                );
                self.layout.place(placed);
                Ok(())
            }
            None => Err(PieceDoesNotFitError {
                piece_id: pi.piece_id,
                label: self.instance.piece(pi.piece_id).label.clone(),
            }),
        }
    }

    fn find_placement(&mut self, w: f32, h: f32) -> Option<(f32, f32)> {
        find_position(
            self.layout.occupied(),
            self.instance.strip_width,
            w,
            h,
            self.config,
            &mut self.scan_counter,
        )
    }
}

/// Expands the instance into individual piece instances and orders them by
/// area descending, ties keeping input order (stable sort).
pub fn placement_order(instance: &MarkerInstance) -> Vec<PieceInstance> {
    expand(&instance.pieces)
        .into_iter()
        .sorted_by_key(|pi| Reverse(OrderedFloat(pi.area)))
        .collect()
}
