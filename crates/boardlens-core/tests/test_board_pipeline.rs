use boardlens_core::{
    classify, compose, extract, BoardSpec, ComponentKind, ComponentPlacement, ExtractedFile,
    FileCategory, GerberInterpreter, LayerKind, ParseError, Primitive,
};
use futures::executor::block_on;

#[test]
fn ic_placement_end_to_end() {
    let spec = BoardSpec::new("test", 60.0, 60.0, 1.6);
    let placements = vec![ComponentPlacement::new(ComponentKind::Ic, "IC1", 15.0, 10.0)];
    let board = compose(&spec, &placements);

    // Body box lands centered on the placement position in top copper.
    let copper = board.layer(LayerKind::CopperTop).unwrap();
    let body = copper.primitives.iter().find(|p| {
        matches!(p, Primitive::Pad { x, y, width, .. }
            if *x == 15.0 && *y == 10.0 && *width == 12.0)
    });
    assert!(body.is_some(), "no body box at (15, 10)");

    // Refdes lettered on the top silkscreen.
    let silk = board.layer(LayerKind::SilkscreenTop).unwrap();
    assert!(silk
        .primitives
        .iter()
        .any(|p| matches!(p, Primitive::Label { text, .. } if text == "IC1")));

    // Flipping the board mirrors the body to x = 45, and the bottom-side
    // layers come nearest the viewer.
    let bottom = board.bottom_view();
    assert_eq!(bottom.layers[0].kind, LayerKind::SilkscreenBottom);
    let mirrored_copper = bottom
        .layers
        .iter()
        .find(|l| l.kind == LayerKind::CopperTop)
        .unwrap();
    assert!(mirrored_copper.primitives.iter().any(|p| {
        matches!(p, Primitive::Pad { x, y, width, .. }
            if *x == 45.0 && *y == 10.0 && *width == 12.0)
    }));
}

#[test]
fn extraction_feeds_the_file_listing() {
    let files = block_on(extract(b"RAR payload", "board.rar")).unwrap();
    assert!(files.iter().all(|f| f.name.starts_with("board")));
    assert!(files
        .iter()
        .any(|f| classify(&f.name) == FileCategory::Gerber));
}

/// Test double for the external Gerber interpreter: treats every line of a
/// drill-like file as one plated hole and rejects anything else.
struct FixtureInterpreter;

impl GerberInterpreter for FixtureInterpreter {
    fn parse(&self, file: &ExtractedFile) -> Result<Vec<Primitive>, ParseError> {
        if !file.name.ends_with(".DRL") {
            return Err(ParseError::UnknownAperture(file.name.clone()));
        }
        Ok(vec![
            Primitive::Hole {
                x: 25.4,
                y: 25.4,
                radius: 1.6,
                plated: true,
            },
            Primitive::Hole {
                x: 152.4,
                y: 25.4,
                radius: 1.6,
                plated: true,
            },
        ])
    }
}

#[test]
fn interpreter_output_seeds_a_board() {
    let files = block_on(extract(b"RAR payload", "board.rar")).unwrap();
    let drill = files.iter().find(|f| f.name.ends_with(".DRL")).unwrap();

    let interpreter = FixtureInterpreter;
    let holes = interpreter.parse(drill).unwrap();

    let mut spec = BoardSpec::new("from-archive", 177.8, 177.8, 1.6);
    for hole in holes {
        spec = spec.with_primitive(LayerKind::Substrate, hole);
    }
    let board = compose(&spec, &[]);
    assert_eq!(board.layer(LayerKind::Substrate).unwrap().primitives.len(), 2);
}

#[test]
fn parse_failure_degrades_to_existing_board_data() {
    let files = block_on(extract(b"RAR payload", "board.rar")).unwrap();
    let top = files.iter().find(|f| f.name.ends_with(".GTL")).unwrap();

    let interpreter = FixtureInterpreter;
    let result = interpreter.parse(top);
    assert!(matches!(result, Err(ParseError::UnknownAperture(_))));

    // The failure is fatal to that file only; composing with no placements
    // still yields a complete (empty) stackup.
    let board = compose(&BoardSpec::new("degraded", 60.0, 60.0, 1.6), &[]);
    assert_eq!(board.layers.len(), 7);
    assert_eq!(board.primitive_count(), 0);
}
