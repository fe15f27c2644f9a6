use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use encaixe::entities::{MarkerInstance, MarkerSolution};

use crate::io::svg_util::SvgDrawOptions;

/// Renders a solved marker: the strip outline plus one rectangle and one
/// centered label per placed piece. Pure consumer of the placed layout; no
/// placement decisions happen here.
pub fn solution_to_svg(
    solution: &MarkerSolution,
    instance: &MarkerInstance,
    options: SvgDrawOptions,
) -> Document {
    let theme = options.theme.get_theme();
    let strip_width = solution.strip_width;
    let strip_height = f32::max(solution.extent, 1.0);

    let stroke_width =
        f32::min(strip_width, strip_height) * 0.001 * theme.stroke_width_multiplier;

    // 5% padding around the strip
    let pad = 0.05 * f32::min(strip_width, strip_height);
    let vbox_svg = (
        -pad,
        -pad,
        strip_width + 2.0 * pad,
        strip_height + 2.0 * pad,
    );

    let strip_group = Group::new()
        .set("id", "strip")
        .add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", strip_width)
                .set("height", strip_height)
                .set("fill", theme.strip_fill)
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        )
        .add(Title::new(format!(
            "strip, width: {strip_width:.1}, extent: {:.1}, density: {:.1}%",
            solution.extent,
            solution.density(instance) * 100.0
        )));

    let mut pieces_group = Group::new().set("id", "pieces");
    for placed in &solution.placed {
        let piece = instance.piece(placed.piece_id);
        let fill = match placed.rotated {
            false => theme.piece_fill,
            true => theme.rotated_piece_fill,
        };
        let font_size = 0.18 * f32::min(placed.width, placed.length);

        let group = Group::new()
            .add(
                Rectangle::new()
                    .set("x", placed.x)
                    .set("y", placed.y)
                    .set("width", placed.width)
                    .set("height", placed.length)
                    .set("fill", fill)
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width),
            )
            .add(
                Text::new(piece.label.clone())
                    .set("x", placed.x + placed.width / 2.0)
                    .set("y", placed.y + placed.length / 2.0)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-size", font_size)
                    .set("font-family", "monospace"),
            )
            .add(Title::new(format!(
                "{}, {:.0}x{:.0}{}",
                piece.label,
                placed.length,
                placed.width,
                if placed.rotated { ", rotated" } else { "" }
            )));
        pieces_group = pieces_group.add(group);
    }

    let mut document = Document::new()
        .set("viewBox", vbox_svg)
        .add(strip_group)
        .add(pieces_group);

    if options.draw_occupied {
        let mut occupied_group = Group::new().set("id", "occupied");
        for placed in &solution.placed {
            let region = placed.inflated_footprint(instance.margin);
            occupied_group = occupied_group.add(
                Rectangle::new()
                    .set("x", region.x_min)
                    .set("y", region.y_min)
                    .set("width", region.width())
                    .set("height", region.height())
                    .set("fill", "none")
                    .set("stroke", "black")
                    .set("stroke-width", 0.5 * stroke_width)
                    .set("stroke-dasharray", format!("{}", 5.0 * stroke_width)),
            );
        }
        document = document.add(occupied_group);
    }

    document
}
