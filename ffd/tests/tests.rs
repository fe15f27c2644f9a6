#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use encaixe::pack::{PackConfig, Packer};
    use encaixe::util::assertions;
    use ffd::io;
    use ffd::io::dxf_export::solution_to_dxf;
    use ffd::io::layout_to_svg::solution_to_svg;
    use ffd::io::svg_util::SvgDrawOptions;

    #[test_case("../assets/camisa.json"; "camisa")]
    #[test_case("../assets/vestido.json"; "vestido")]
    #[test_case("../assets/infantil.json"; "infantil")]
    fn test_instance(instance_path: &str) {
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = encaixe::io::import(&ext_instance).unwrap();

        let mut packer = Packer::new(instance.clone(), PackConfig::default());
        let solution = packer.solve().unwrap();

        assert!(assertions::layout_is_feasible(&packer.layout));
        assert_eq!(solution.placed.len(), instance.total_piece_qty());

        // rendering and export consume the layout without touching it
        let svg = solution_to_svg(&solution, &instance, SvgDrawOptions::default());
        assert!(svg.to_string().contains("<svg"));

        let dxf = solution_to_dxf(&solution, &instance);
        assert!(dxf.starts_with("0\nSECTION"));
        assert!(dxf.ends_with("0\nEOF\n"));
        // one closed polyline and one label per placed piece
        assert_eq!(
            dxf.matches("LWPOLYLINE").count(),
            instance.total_piece_qty()
        );
        assert_eq!(dxf.matches("\nTEXT").count(), instance.total_piece_qty());
    }

    #[test_case("../assets/infantil.json"; "infantil")]
    fn pieces_wider_than_the_roll_get_rotated(instance_path: &str) {
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = encaixe::io::import(&ext_instance).unwrap();

        let solution = Packer::new(instance.clone(), PackConfig::default())
            .solve()
            .unwrap();

        // 'faixa' is 130 wide on a 120 roll, only fits rotated
        let faixa_id = instance
            .pieces
            .iter()
            .position(|(p, _)| p.label == "faixa")
            .unwrap();
        let placed = solution
            .placed
            .iter()
            .find(|p| p.piece_id == faixa_id)
            .unwrap();
        assert!(placed.rotated);
        assert_eq!((placed.width, placed.length), (30.0, 130.0));
    }
}
