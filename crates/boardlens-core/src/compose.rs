//! Layer composition: resolve component placements against the footprint
//! catalog and flatten everything into the fixed board stackup.

use std::collections::HashSet;

use crate::board::{Board, BoardSpec, CompositionWarning, Layer};
use crate::footprint::{ComponentPlacement, FootprintCatalog, FootprintTemplate, DEFAULT_CATALOG};
use crate::layers::LayerKind;

/// Compose a board from its spec and placements using the built-in catalog.
pub fn compose(spec: &BoardSpec, placements: &[ComponentPlacement]) -> Board {
    compose_with_catalog(spec, placements, &DEFAULT_CATALOG)
}

/// Compose against an explicit catalog. Never fails: unknown kinds render
/// as placeholders, out-of-board placements compose unclamped, and every
/// issue is collected as a warning on the resulting board.
pub fn compose_with_catalog(
    spec: &BoardSpec,
    placements: &[ComponentPlacement],
    catalog: &FootprintCatalog,
) -> Board {
    log::info!(
        "Composing board '{}' ({}x{} mm): {} placements, {} seeded primitives",
        spec.name,
        spec.width,
        spec.height,
        placements.len(),
        spec.seeded.len()
    );

    let mut layers: Vec<Layer> = LayerKind::stackup()
        .into_iter()
        .map(|kind| Layer::empty(kind, spec.thickness))
        .collect();
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    let placeholder = FootprintTemplate::placeholder();

    for placement in placements {
        if !seen.insert(placement.reference.clone()) {
            log::warn!("Duplicate reference designator {}", placement.reference);
            warnings.push(CompositionWarning::DuplicateReference {
                reference: placement.reference.clone(),
            });
        }

        if !spec.contains(placement.x, placement.y) {
            log::warn!(
                "{} at ({:.2}, {:.2}) is outside the {}x{} board",
                placement.reference,
                placement.x,
                placement.y,
                spec.width,
                spec.height
            );
            warnings.push(CompositionWarning::OutOfBounds {
                reference: placement.reference.clone(),
                x: placement.x,
                y: placement.y,
            });
        }

        let template = match catalog.footprint_for(placement.kind) {
            Some(template) => template,
            None => {
                log::warn!(
                    "No footprint for {:?} ({}); substituting placeholder",
                    placement.kind,
                    placement.reference
                );
                warnings.push(CompositionWarning::UnknownComponentKind {
                    reference: placement.reference.clone(),
                    kind: placement.kind,
                });
                &placeholder
            }
        };

        for (kind, primitive) in template.instantiate(placement) {
            push_primitive(&mut layers, kind, primitive);
        }
    }

    for (kind, primitive) in &spec.seeded {
        push_primitive(&mut layers, *kind, primitive.clone());
    }

    let board = Board {
        name: spec.name.clone(),
        width: spec.width,
        height: spec.height,
        thickness: spec.thickness,
        layers,
        warnings,
    };

    for layer in &board.layers {
        log::debug!("{}: {} primitives", layer.name, layer.primitives.len());
    }
    log::info!(
        "Composed {} primitives across {} layers ({} warnings)",
        board.primitive_count(),
        board.layers.len(),
        board.warnings.len()
    );

    board
}

fn push_primitive(layers: &mut [Layer], kind: LayerKind, primitive: crate::primitives::Primitive) {
    if let Some(layer) = layers.iter_mut().find(|l| l.kind == kind) {
        layer.primitives.push(primitive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::ComponentKind;
    use crate::primitives::Primitive;

    fn sixty_mm_spec() -> BoardSpec {
        BoardSpec::new("test-board", 60.0, 60.0, 1.6)
    }

    #[test]
    fn every_declared_layer_receives_primitives() {
        let placements = vec![ComponentPlacement::new(ComponentKind::Ic, "IC1", 30.0, 30.0)];
        let board = compose(&sixty_mm_spec(), &placements);

        // The IC touches top copper (body + pins) and top silkscreen (refdes).
        assert!(!board.layer(LayerKind::CopperTop).unwrap().primitives.is_empty());
        assert!(!board
            .layer(LayerKind::SilkscreenTop)
            .unwrap()
            .primitives
            .is_empty());
        assert!(board.warnings.is_empty());
    }

    #[test]
    fn unknown_kind_substitutes_placeholder_with_warning() {
        let catalog = FootprintCatalog::empty();
        let placements = vec![ComponentPlacement::new(
            ComponentKind::Crystal,
            "X1",
            20.0,
            20.0,
        )];
        let board = compose_with_catalog(&sixty_mm_spec(), &placements, &catalog);

        assert_eq!(board.warnings.len(), 1);
        assert!(matches!(
            board.warnings[0],
            CompositionWarning::UnknownComponentKind {
                kind: ComponentKind::Crystal,
                ..
            }
        ));
        // Placeholder still contributes geometry; the composition never drops
        // a placement silently.
        assert_eq!(board.layer(LayerKind::CopperTop).unwrap().primitives.len(), 1);
        assert_eq!(
            board.layer(LayerKind::SilkscreenTop).unwrap().primitives.len(),
            1
        );
    }

    #[test]
    fn out_of_bounds_composes_unclamped_with_warning() {
        let placements = vec![ComponentPlacement::new(
            ComponentKind::Resistor,
            "R1",
            75.0,
            30.0,
        )];
        let board = compose(&sixty_mm_spec(), &placements);

        assert!(matches!(
            board.warnings[0],
            CompositionWarning::OutOfBounds { x, .. } if x == 75.0
        ));
        // No clamping: the body pad stays where the caller put it.
        let copper = board.layer(LayerKind::CopperTop).unwrap();
        assert!(copper
            .primitives
            .iter()
            .any(|p| p.position() == (75.0, 30.0)));
    }

    #[test]
    fn duplicate_reference_is_flagged() {
        let placements = vec![
            ComponentPlacement::new(ComponentKind::Resistor, "R1", 10.0, 10.0),
            ComponentPlacement::new(ComponentKind::Resistor, "R1", 20.0, 10.0),
        ];
        let board = compose(&sixty_mm_spec(), &placements);
        assert_eq!(
            board
                .warnings
                .iter()
                .filter(|w| matches!(w, CompositionWarning::DuplicateReference { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn compose_is_idempotent() {
        let spec = sixty_mm_spec()
            .with_hole(5.0, 5.0, 2.0, true)
            .with_trace(LayerKind::CopperTop, vec![(5.0, 5.0), (55.0, 5.0)], 0.25);
        let placements = vec![
            ComponentPlacement::new(ComponentKind::Ic, "IC1", 30.0, 30.0).rotated(90.0),
            ComponentPlacement::new(ComponentKind::Capacitor, "C1", 10.0, 50.0),
        ];
        let first = compose(&spec, &placements);
        let second = compose(&spec, &placements);
        assert_eq!(first, second);
    }

    #[test]
    fn bottom_view_mirrors_every_x() {
        let spec = sixty_mm_spec().with_hole(5.0, 5.0, 2.0, true);
        let placements = vec![ComponentPlacement::new(ComponentKind::Ic, "IC1", 15.0, 10.0)];
        let board = compose(&spec, &placements);

        let top = board.top_view();
        let bottom = board.bottom_view();
        assert_eq!(bottom.layers[0].kind, LayerKind::SilkscreenBottom);

        // Every substrate primitive mirrors exactly: x' = width - x.
        let top_substrate = top
            .layers
            .iter()
            .find(|l| l.kind == LayerKind::Substrate)
            .unwrap();
        let bottom_substrate = bottom
            .layers
            .iter()
            .find(|l| l.kind == LayerKind::Substrate)
            .unwrap();
        for (a, b) in top_substrate
            .primitives
            .iter()
            .zip(bottom_substrate.primitives.iter())
        {
            let (ax, ay) = a.position();
            let (bx, by) = b.position();
            assert_eq!(bx, 60.0 - ax);
            assert_eq!(by, ay);
        }
    }

    #[test]
    fn seeded_traces_land_on_their_layer() {
        let spec = sixty_mm_spec().with_trace(
            LayerKind::CopperBottom,
            vec![(10.0, 10.0), (50.0, 10.0)],
            0.3,
        );
        let board = compose(&spec, &[]);
        let bottom_copper = board.layer(LayerKind::CopperBottom).unwrap();
        assert_eq!(bottom_copper.primitives.len(), 1);
        assert!(matches!(bottom_copper.primitives[0], Primitive::Trace { .. }));
    }
}
