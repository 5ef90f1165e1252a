use std::fs;

use deltille_print::{
    designs, parse_descriptions, render_board, write_design_outputs, BoardSpec, CellGrid,
    CodeTable, DesignReport, LatticeKind, OutputError, OutputOptions, PageLayout, PaperFormat,
    RenderError,
};

#[test]
fn writes_pages_and_description() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("pattern.svg");
    let table = CodeTable::builtin();
    let boards = designs::a4_checkerboard().expect("design");

    let opts = OutputOptions {
        paper: PaperFormat::A4,
        tag_id_offset: 0,
        png_dpi: Some(20.0),
        json: true,
    };
    let written = write_design_outputs(&table, &boards, &out, &opts).expect("write");

    assert_eq!(written.pages.len(), 3);
    assert_eq!(written.previews.len(), 3);
    assert_eq!(written.pages[2], dir.path().join("pattern-2.svg"));
    assert_eq!(written.description, dir.path().join("pattern.dsc"));

    let svg = fs::read_to_string(&written.pages[0]).expect("svg");
    assert!(svg.contains("width=\"297mm\" height=\"210mm\""));
    assert!(svg.contains("<path"));

    let png = fs::read(&written.previews[0]).expect("png");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let dsc = fs::read_to_string(&written.description).expect("dsc");
    let parsed = parse_descriptions(&dsc).expect("parse");
    let ids: Vec<usize> = parsed.iter().map(|b| b.board_id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert!(parsed.iter().all(|b| b.tag_family == "aprilTag25h9"));

    let report_path = written.report.expect("report");
    let report: DesignReport =
        serde_json::from_str(&fs::read_to_string(report_path).expect("json")).expect("report");
    assert_eq!(report.boards, parsed);
}

#[test]
fn global_offset_shifts_every_tag_id() {
    let dir = tempfile::tempdir().expect("tempdir");
    let table = CodeTable::builtin();
    let boards = designs::a4_deltille().expect("design");

    let read_ids = |offset: u32, name: &str| -> Vec<u32> {
        let opts = OutputOptions {
            tag_id_offset: offset,
            ..OutputOptions::default()
        };
        let written =
            write_design_outputs(&table, &boards, dir.path().join(name), &opts).expect("write");
        let dsc = fs::read_to_string(written.description).expect("dsc");
        parse_descriptions(&dsc)
            .expect("parse")
            .iter()
            .flat_map(|b| b.corners.iter().filter_map(|c| c.tag_id))
            .collect()
    };

    let base = read_ids(0, "base.svg");
    let shifted = read_ids(5, "shifted.svg");
    assert!(!base.is_empty());
    assert_eq!(
        shifted,
        base.iter().map(|id| id + 5).collect::<Vec<_>>()
    );
}

#[test]
fn failing_board_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let table = CodeTable::builtin();
    let mut boards = designs::a4_checkerboard().expect("design");
    let grid = CellGrid::from_codes(&[[1u8, 2]]).expect("grid");
    boards.push(BoardSpec::new(LatticeKind::Square, "delTag16h5", grid, 20.0));

    let err = write_design_outputs(
        &table,
        &boards,
        dir.path().join("pattern.svg"),
        &OutputOptions::default(),
    )
    .expect_err("must fail");
    assert!(matches!(err, OutputError::Render(RenderError::Configuration(_))));
    assert_eq!(fs::read_dir(dir.path()).expect("dir").count(), 0);
}

#[test]
fn unusable_preview_resolution_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let boards = designs::a4_checkerboard().expect("design");
    for dpi in [0.0, f64::NAN, 1.0e5] {
        let opts = OutputOptions {
            png_dpi: Some(dpi),
            ..OutputOptions::default()
        };
        let err = write_design_outputs(
            &CodeTable::builtin(),
            &boards,
            dir.path().join("pattern.svg"),
            &opts,
        )
        .expect_err("must fail");
        assert!(matches!(err, OutputError::Dpi(_)), "{dpi}");
    }
    assert_eq!(fs::read_dir(dir.path()).expect("dir").count(), 0);
}

#[test]
fn boards_are_centered_on_landscape_pages() {
    let table = CodeTable::builtin();
    let boards = designs::a4_checkerboard().expect("design");
    let board = render_board(&table, 0, &boards[0], 0).expect("render");
    let layout = PageLayout::centered(PaperFormat::A4, &board);

    let rect = board.bounds().expect("bounds");
    let (x0, y0) = layout.to_page(rect.min().x, rect.min().y);
    let (x1, y1) = layout.to_page(rect.max().x, rect.max().y);
    approx::assert_relative_eq!(x0, 297.0 - x1, epsilon = 1e-9);
    approx::assert_relative_eq!(y0, 210.0 - y1, epsilon = 1e-9);
}
