//! The built-in demo board: a 60x60 mm two-layer design with the component
//! population of the original PCB-RAR mock, expressed as placement data
//! instead of hand-authored geometry.

use crate::board::BoardSpec;
use crate::footprint::{ComponentKind, ComponentPlacement};
use crate::layers::LayerKind;
use crate::primitives::Primitive;

pub const DEMO_BOARD_NAME: &str = "PCB-RAR v1.0";

/// Board outline, mounting holes, routed traces and free silkscreen text.
pub fn demo_board_spec() -> BoardSpec {
    BoardSpec::new(DEMO_BOARD_NAME, 60.0, 60.0, 1.6)
        // Plated mounting holes, 5 mm in from each corner.
        .with_hole(5.0, 5.0, 2.0, true)
        .with_hole(55.0, 5.0, 2.0, true)
        .with_hole(5.0, 55.0, 2.0, true)
        .with_hole(55.0, 55.0, 2.0, true)
        // Perimeter ring and inner power ring on the top copper.
        .with_trace(
            LayerKind::CopperTop,
            vec![(2.0, 2.0), (58.0, 2.0), (58.0, 58.0), (2.0, 58.0), (2.0, 2.0)],
            0.5,
        )
        .with_trace(
            LayerKind::CopperTop,
            vec![
                (15.0, 15.0),
                (45.0, 15.0),
                (45.0, 45.0),
                (15.0, 45.0),
                (15.0, 15.0),
            ],
            0.5,
        )
        // Diamond interconnect on the bottom copper.
        .with_trace(
            LayerKind::CopperBottom,
            vec![
                (22.5, 30.0),
                (30.0, 37.5),
                (37.5, 30.0),
                (30.0, 22.5),
                (22.5, 30.0),
            ],
            0.6,
        )
        .with_primitive(
            LayerKind::SilkscreenTop,
            Primitive::label(30.0, 50.0, "PCB-RAR v1.0 © 2024", 2.0),
        )
        .with_primitive(
            LayerKind::SilkscreenBottom,
            Primitive::label(30.0, 5.0, DEMO_BOARD_NAME, 2.0),
        )
}

/// The mock's component population in corner-origin coordinates.
pub fn demo_placements() -> Vec<ComponentPlacement> {
    vec![
        // STM32 QFP and LM358 SOIC.
        ComponentPlacement::new(ComponentKind::Ic, "IC1", 45.0, 40.0),
        ComponentPlacement::new(ComponentKind::Ic, "U2", 18.0, 30.0),
        // SOT-23 next to the crystal.
        ComponentPlacement::new(ComponentKind::Diode, "D1", 15.0, 45.0),
        ComponentPlacement::new(ComponentKind::Crystal, "X1", 15.0, 25.0),
        // Small and electrolytic capacitors.
        ComponentPlacement::new(ComponentKind::Capacitor, "C1", 15.0, 15.0),
        ComponentPlacement::new(ComponentKind::Capacitor, "C2", 30.0, 15.0),
        // USB receptacle at the board edge, rotated to face outward.
        ComponentPlacement::new(ComponentKind::Connector, "J1", 50.0, 30.0),
        // Resistor row with the LED in the middle.
        ComponentPlacement::new(ComponentKind::Resistor, "R1", 45.0, 10.0),
        ComponentPlacement::new(ComponentKind::Resistor, "R2", 39.0, 10.0),
        ComponentPlacement::new(ComponentKind::Diode, "LED1", 33.0, 10.0),
        ComponentPlacement::new(ComponentKind::Resistor, "R3", 27.0, 10.0),
        ComponentPlacement::new(ComponentKind::Resistor, "R4", 21.0, 10.0),
    ]
}
