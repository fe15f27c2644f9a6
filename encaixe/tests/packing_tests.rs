use encaixe::entities::{MarkerInstance, MarkerLayout, Piece, PieceInstance, PlacedPiece};
use encaixe::geometry::geo_traits::CollidesWith;
use encaixe::pack::{PackConfig, Packer, expand, placement_order};
use encaixe::util::assertions;
use float_cmp::approx_eq;

fn piece(id: usize, length: f32, width: f32, label: &str) -> Piece {
    Piece {
        id,
        length,
        width,
        label: label.to_string(),
    }
}

fn instance(pieces: Vec<(Piece, usize)>, strip_width: f32, margin: f32) -> MarkerInstance {
    MarkerInstance::new(pieces, strip_width, margin).unwrap()
}

#[test]
fn single_piece_lands_at_origin() {
    // strip 160, one 100x50 piece: placed unrotated at (0,0), 2.00m of material
    let instance = instance(vec![(piece(0, 100.0, 50.0, "A"), 1)], 160.0, 2.0);
    let mut packer = Packer::new(instance, PackConfig::default());
    let solution = packer.solve().unwrap();

    assert_eq!(solution.placed.len(), 1);
    let p = &solution.placed[0];
    assert_eq!((p.x, p.y), (0.0, 0.0));
    assert_eq!((p.width, p.length), (50.0, 100.0));
    assert!(!p.rotated);
    assert!(approx_eq!(f32, solution.material_length_m(), 2.0));
}

#[test]
fn oversized_piece_fails_in_both_orientations() {
    // strip 60: 80 wide fails, rotating makes it 100 wide and still fails
    let instance = instance(vec![(piece(0, 100.0, 80.0, "B"), 1)], 60.0, 2.0);
    let mut packer = Packer::new(instance, PackConfig::default());
    let err = packer.solve().unwrap_err();

    assert_eq!(err.piece_id, 0);
    assert_eq!(err.label, "B");
    assert!(packer.layout.placed().is_empty());
}

#[test]
fn margin_pushes_second_piece_sideways() {
    // two 50x50 pieces, margin 2: the inflated region of the first blocks
    // x in 0..52, so the second lands at (52, 0)
    let pieces = vec![
        (piece(0, 50.0, 50.0, "P1"), 1),
        (piece(1, 50.0, 50.0, "P2"), 1),
    ];
    let instance = instance(pieces, 160.0, 2.0);
    let mut packer = Packer::new(instance.clone(), PackConfig::default());
    let solution = packer.solve().unwrap();

    assert_eq!(solution.placed.len(), 2);
    assert_eq!((solution.placed[0].x, solution.placed[0].y), (0.0, 0.0));
    assert_eq!((solution.placed[1].x, solution.placed[1].y), (52.0, 0.0));
    assert!(assertions::layout_is_feasible(&packer.layout));
}

#[test]
fn margin_is_trailing_edge_only() {
    // roll exactly wide enough for two pieces plus one margin gap between them
    let pieces = vec![
        (piece(0, 50.0, 50.0, "L"), 1),
        (piece(1, 50.0, 50.0, "R"), 1),
    ];
    let instance = instance(pieces, 102.0, 2.0);
    let mut packer = Packer::new(instance, PackConfig::default());
    let solution = packer.solve().unwrap();

    assert_eq!((solution.placed[1].x, solution.placed[1].y), (52.0, 0.0));
}

#[test]
fn too_wide_piece_is_rotated() {
    // 50 long x 100 wide does not fit across a 60 roll, but does once rotated
    let instance = instance(vec![(piece(0, 50.0, 100.0, "C"), 1)], 60.0, 2.0);
    let mut packer = Packer::new(instance, PackConfig::default());
    let solution = packer.solve().unwrap();

    let p = &solution.placed[0];
    assert!(p.rotated);
    // stored extents are swapped relative to the piece type
    assert_eq!((p.width, p.length), (50.0, 100.0));
    assert_eq!(solution.extent, 100.0);
}

#[test]
fn height_ceiling_is_a_hard_failure() {
    // two pieces too wide to sit side by side; the second needs y >= 22 but
    // the ceiling cuts the scan off at 20
    let pieces = vec![
        (piece(0, 20.0, 25.0, "first"), 1),
        (piece(1, 20.0, 25.0, "second"), 1),
    ];
    let instance = instance(pieces, 30.0, 2.0);
    let config = PackConfig {
        step: 1.0,
        height_ceiling: 20.0,
    };
    let mut packer = Packer::new(instance, config);
    let err = packer.solve().unwrap_err();

    assert_eq!(err.label, "second");
    // partial result: the first piece stays placed
    assert_eq!(packer.layout.placed().len(), 1);
    assert!(assertions::layout_is_feasible(&packer.layout));
}

#[test]
fn quantities_are_preserved() {
    let pieces = vec![
        (piece(0, 40.0, 30.0, "frente"), 2),
        (piece(1, 42.0, 32.0, "costas"), 1),
        (piece(2, 30.0, 20.0, "manga"), 4),
        (piece(3, 12.0, 8.0, "bolso"), 3),
    ];
    let instance = instance(pieces, 160.0, 2.0);
    let mut packer = Packer::new(instance.clone(), PackConfig::default());
    let solution = packer.solve().unwrap();

    assert_eq!(solution.placed.len(), instance.total_piece_qty());
    assert!(assertions::layout_is_feasible(&packer.layout));
}

#[test]
fn no_pair_of_inflated_footprints_intersects() {
    let pieces = vec![
        (piece(0, 70.0, 55.0, "a"), 2),
        (piece(1, 60.0, 45.0, "b"), 3),
        (piece(2, 25.0, 15.0, "c"), 5),
        (piece(3, 8.0, 40.0, "d"), 2),
    ];
    let instance = instance(pieces, 100.0, 3.0);
    let mut packer = Packer::new(instance.clone(), PackConfig::default());
    let solution = packer.solve().unwrap();

    let margin = instance.margin;
    for (i, a) in solution.placed.iter().enumerate() {
        assert!(a.x >= 0.0 && a.x + a.width <= instance.strip_width);
        for b in &solution.placed[i + 1..] {
            assert!(
                !a.inflated_footprint(margin)
                    .collides_with(&b.inflated_footprint(margin)),
                "{a:?} and {b:?} overlap"
            );
        }
    }
}

#[test]
fn identical_runs_produce_identical_layouts() {
    let pieces = vec![
        (piece(0, 33.0, 21.0, "x"), 3),
        (piece(1, 33.0, 21.0, "y"), 3),
        (piece(2, 57.0, 44.0, "z"), 2),
    ];
    let instance = instance(pieces, 120.0, 2.0);

    let first = Packer::new(instance.clone(), PackConfig::default())
        .solve()
        .unwrap();
    let second = Packer::new(instance, PackConfig::default())
        .solve()
        .unwrap();

    assert_eq!(first.placed, second.placed);
    assert_eq!(first.extent, second.extent);
}

#[test]
fn extent_grows_monotonically() {
    let mut layout = MarkerLayout::new(160.0, 2.0);
    let dims = [(30.0, 30.0), (20.0, 20.0), (10.0, 10.0)];

    let mut prev_extent = 0.0;
    let mut y = 0.0;
    for (i, (w, h)) in dims.iter().enumerate() {
        let pi = PieceInstance {
            piece_id: i,
            width: *w,
            length: *h,
            area: w * h,
        };
        layout.place(PlacedPiece::new(&pi, 0.0, y, false));
        assert!(layout.extent() >= prev_extent);
        prev_extent = layout.extent();
        y += h + 2.0;
    }
    assert_eq!(layout.extent(), 64.0);
}

#[test]
fn expansion_duplicates_by_quantity() {
    let pieces = vec![(piece(0, 10.0, 5.0, "a"), 3), (piece(1, 4.0, 4.0, "b"), 0)];
    let instances = expand(&pieces);

    assert_eq!(instances.len(), 3);
    assert!(instances.iter().all(|pi| pi.piece_id == 0));
    assert!(instances.iter().all(|pi| pi.area == 50.0));
}

#[test]
fn placement_order_is_area_descending_and_stable() {
    let pieces = vec![
        (piece(0, 10.0, 10.0, "small"), 1),
        (piece(1, 20.0, 20.0, "big"), 1),
        (piece(2, 10.0, 10.0, "small_too"), 2),
    ];
    let instance = instance(pieces, 160.0, 2.0);
    let order = placement_order(&instance);

    let ids: Vec<usize> = order.iter().map(|pi| pi.piece_id).collect();
    assert_eq!(ids, vec![1, 0, 2, 2]);
}

#[test]
fn strip_width_out_of_bounds_is_rejected() {
    assert!(MarkerInstance::new(vec![], 5.0, 2.0).is_err());
    assert!(MarkerInstance::new(vec![], 1200.0, 2.0).is_err());
    assert!(MarkerInstance::new(vec![], 160.0, -1.0).is_err());
    assert!(MarkerInstance::new(vec![], 160.0, 0.0).is_ok());
}
