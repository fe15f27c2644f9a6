use encaixe::entities::{MarkerInstance, MarkerSolution, PlacedPiece};

/// Text height of the piece labels, in drawing units.
const TEXT_HEIGHT: f32 = 5.0;

/// Writes the layout as a minimal DXF document: one closed 4-point polyline
/// and one centered text label per placed piece, all on layer 0.
/// The y axis is flipped so the marker reads top-down in CAD viewers.
pub fn solution_to_dxf(solution: &MarkerSolution, instance: &MarkerInstance) -> String {
    let mut dxf = String::new();
    push_pairs(&mut dxf, &[("0", "SECTION"), ("2", "ENTITIES")]);

    for placed in &solution.placed {
        let label = &instance.piece(placed.piece_id).label;
        push_piece(&mut dxf, placed, label);
    }

    push_pairs(&mut dxf, &[("0", "ENDSEC"), ("0", "EOF")]);
    dxf
}

fn push_piece(dxf: &mut String, placed: &PlacedPiece, label: &str) {
    let (x0, y0) = (placed.x, -placed.y);
    let (x1, y1) = (placed.x + placed.width, -(placed.y + placed.length));

    push_pairs(
        dxf,
        &[
            ("0", "LWPOLYLINE"),
            ("8", "0"),
            ("90", "4"),
            ("70", "1"), // closed
        ],
    );
    for (x, y) in [(x0, y0), (x1, y0), (x1, y1), (x0, y1)] {
        push_coord(dxf, "10", x);
        push_coord(dxf, "20", y);
    }

    let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    push_pairs(dxf, &[("0", "TEXT"), ("8", "0")]);
    push_coord(dxf, "10", cx);
    push_coord(dxf, "20", cy);
    push_coord(dxf, "40", TEXT_HEIGHT);
    push_pairs(dxf, &[("1", label)]);
    // center the text on its alignment point
    push_pairs(dxf, &[("72", "1"), ("73", "2")]);
    push_coord(dxf, "11", cx);
    push_coord(dxf, "21", cy);
}

fn push_pairs(dxf: &mut String, pairs: &[(&str, &str)]) {
    for (code, value) in pairs {
        dxf.push_str(code);
        dxf.push('\n');
        dxf.push_str(value);
        dxf.push('\n');
    }
}

fn push_coord(dxf: &mut String, code: &str, value: f32) {
    dxf.push_str(&format!("{code}\n{value}\n"));
}
