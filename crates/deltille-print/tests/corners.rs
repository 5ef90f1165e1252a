use approx::assert_relative_eq;
use deltille_print::{
    designs, parse_descriptions, render_board, BoardSpec, CellCode, CellGrid, CodeTable,
    ConfigurationError, LatticeKind, RenderError, SquareBoardRenderer, TagFamily,
    TriangularBoardRenderer,
};

fn board_spec(lattice: LatticeKind, family: &str, rows: &[&[u8]]) -> BoardSpec {
    let grid = CellGrid::from_codes(rows).expect("grid");
    BoardSpec::new(lattice, family, grid, 10.0)
}

/// Vertices claimed by exactly `multiplicity` filled cells, counted straight from the grid.
fn independent_corner_count(spec: &BoardSpec) -> usize {
    let grid = &spec.grid;
    let filled = |i: i64, j: i64| {
        i >= 0
            && j >= 0
            && grid
                .get(i as usize, j as usize)
                .is_some_and(CellCode::is_filled)
    };
    let mut count = 0;
    for a in 0..=grid.rows() as i64 {
        for b in 0..=grid.cols() as i64 {
            let touches = match spec.board_type {
                LatticeKind::Square => [(a, b), (a - 1, b), (a, b - 1), (a - 1, b - 1)]
                    .iter()
                    .filter(|&&(i, j)| filled(i, j))
                    .count(),
                LatticeKind::Triangular => [(a, b), (a, b - 1), (a - 1, b)]
                    .iter()
                    .filter(|&&(i, j)| filled(i, j))
                    .count(),
            };
            if touches == spec.board_type.corner_multiplicity() as usize {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn isolated_marker_shares_one_corner_with_each_diagonal_neighbour() {
    let table = CodeTable::builtin();
    let board = board_spec(
        LatticeKind::Square,
        "aprilTag16h5",
        &[&[1, 0, 1], &[0, 2, 0], &[1, 0, 1]],
    );
    let rendered = SquareBoardRenderer::new(&table)
        .render(0, &board, 0)
        .expect("render");

    assert_eq!(rendered.marker_count, 1);
    // The marker's own corner carries its id; the other shared corners do not.
    assert_eq!(
        rendered.description_text(),
        "0,2,2,10.0\naprilTag16h5,2.0\n\
         0,0,0,0.0,0.0,0\n\
         -1,1,0,10.0,0.0,0\n\
         -1,0,1,0.0,10.0,0\n\
         -1,1,1,10.0,10.0,0\n"
    );
    // Outer vertices are touched by a single cell.
    assert_eq!(rendered.corners.get(0, 0).map(|v| v.count), Some(1));
    assert_eq!(rendered.corners.get(3, 3).map(|v| v.count), Some(1));
}

#[test]
fn diagonal_pair_yields_exactly_the_shared_vertex() {
    let table = CodeTable::builtin();
    let board = board_spec(LatticeKind::Square, "aprilTag16h5", &[&[1, 0], &[0, 1]]);
    let rendered = render_board(&table, 0, &board, 0).expect("render");
    assert_eq!(rendered.description.corners.len(), 1);
    assert_eq!(
        rendered.description.corners[0].to_string(),
        "-1,0,0,0.0,0.0,0"
    );
}

#[test]
fn boards_without_markers_emit_background_corners() {
    let table = CodeTable::builtin();
    let board = board_spec(
        LatticeKind::Square,
        "aprilTag36h11",
        &[&[1, 0, 1], &[0, 1, 0]],
    );
    let rendered = render_board(&table, 4, &board, 0).expect("render");
    assert_eq!(rendered.marker_count, 0);
    assert!(rendered.foreground.0.is_empty());
    assert_eq!(rendered.description.tagged_corner_count(), 0);
    assert_eq!(rendered.description.corners.len(), 2);
    assert!(rendered.description_text().starts_with("4,2,1,10.0\n"));
}

#[test]
fn full_triangular_patch_has_interior_corners_only() {
    let table = CodeTable::builtin();
    let board = board_spec(
        LatticeKind::Triangular,
        "delTag16h5",
        &[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]],
    );
    let rendered = TriangularBoardRenderer::new(&table)
        .render(0, &board, 0)
        .expect("render");

    let corners = &rendered.description.corners;
    let indices: Vec<(i32, i32)> = corners.iter().map(|c| (c.x_index, c.y_index)).collect();
    assert_eq!(indices, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);

    let s60 = 3f64.sqrt() / 2.0;
    assert_relative_eq!(corners[2].x, 5.0, epsilon = 1e-9);
    assert_relative_eq!(corners[2].y, 10.0 * s60, epsilon = 1e-9);
    assert_relative_eq!(corners[3].x, 15.0, epsilon = 1e-9);

    // No vertex is ever claimed more than three times.
    assert!(rendered.corners.iter().all(|(_, v)| v.count <= 3));
}

#[test]
fn triangular_marker_owns_its_base_left_corner() {
    let table = CodeTable::builtin();
    let board = board_spec(
        LatticeKind::Triangular,
        "delTag25h9",
        &[&[1, 1, 1], &[1, 2, 1], &[1, 1, 1]],
    )
    .with_tag_id_offset(5);
    let rendered = render_board(&table, 0, &board, 2).expect("render");
    let owned: Vec<_> = rendered
        .description
        .corners
        .iter()
        .filter_map(|c| c.tag_id.map(|id| (id, c.x_index, c.y_index)))
        .collect();
    assert_eq!(owned, vec![(7, 0, 0)]);
    assert!(!rendered.foreground.0.is_empty());
}

#[test]
fn wrong_renderer_is_a_configuration_error() {
    let table = CodeTable::builtin();
    let board = board_spec(LatticeKind::Triangular, "delTag16h5", &[&[1]]);
    let err = SquareBoardRenderer::new(&table)
        .render(0, &board, 0)
        .expect_err("must fail");
    assert_eq!(
        err,
        RenderError::Configuration(ConfigurationError::WrongBoardType {
            expected: LatticeKind::Square,
            actual: LatticeKind::Triangular,
        })
    );
}

#[test]
fn family_must_match_lattice() {
    let table = CodeTable::builtin();
    let board = board_spec(LatticeKind::Square, "delTag25h9", &[&[2]]);
    match render_board(&table, 0, &board, 0) {
        Err(RenderError::Configuration(ConfigurationError::UnknownFamily {
            family,
            lattice,
            available,
        })) => {
            assert_eq!(family, "delTag25h9");
            assert_eq!(lattice, LatticeKind::Square);
            assert_eq!(
                available,
                vec!["aprilTag16h5", "aprilTag25h9", "aprilTag36h11"]
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn running_out_of_codes_is_a_range_error() {
    static CODES: [u64; 2] = [0x0f0f, 0xf0f0];
    let table = CodeTable::new([TagFamily {
        name: "tiny16",
        lattice: LatticeKind::Square,
        bit_count: 16,
        min_hamming: 1,
        codes: &CODES,
    }]);

    let board = board_spec(LatticeKind::Square, "tiny16", &[&[2, 0, 2]]);
    assert!(render_board(&table, 0, &board, 0).is_ok());
    assert_eq!(
        render_board(&table, 0, &board, 1).expect_err("out of range"),
        RenderError::TagIdOutOfRange {
            family: "tiny16".to_string(),
            id: 2,
            available: 2,
        }
    );
}

#[test]
fn rendering_is_deterministic() {
    let table = CodeTable::builtin();
    for name in designs::design_names() {
        let boards = designs::design_by_name(name).expect("design");
        let first = render_board(&table, 1, &boards[1], 0).expect("render");
        let second = render_board(&table, 1, &boards[1], 0).expect("render");
        assert_eq!(first.description_text(), second.description_text(), "{name}");
        assert_eq!(first.background, second.background, "{name}");
    }
}

#[test]
fn descriptions_parse_back_to_the_grid_corner_count() {
    let table = CodeTable::builtin();
    for name in designs::design_names() {
        let boards = designs::design_by_name(name).expect("design");
        let board = &boards[0];
        let rendered = render_board(&table, 0, board, 0).expect("render");
        let parsed = parse_descriptions(&rendered.description_text()).expect("parse");
        assert_eq!(parsed.len(), 1);
        assert_eq!(
            parsed[0].corners.len(),
            independent_corner_count(board),
            "{name}"
        );
        assert_eq!(parsed[0], rendered.description, "{name}");
    }
}
