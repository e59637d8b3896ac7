//! Data-driven footprint templates. Each component kind maps to a template
//! describing the primitives it contributes per layer, relative to the
//! footprint origin, so adding a kind is a data addition rather than new
//! rendering code.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::layers::LayerKind;
use crate::primitives::Primitive;

/// Component categories known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Ic,
    Resistor,
    Capacitor,
    Crystal,
    Connector,
    Diode,
}

impl ComponentKind {
    pub fn all() -> [Self; 6] {
        [
            Self::Ic,
            Self::Resistor,
            Self::Capacitor,
            Self::Crystal,
            Self::Connector,
            Self::Diode,
        ]
    }
}

/// A component to lay out: the placement itself owns no primitives, it is a
/// lookup key into the catalog plus a transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentPlacement {
    pub kind: ComponentKind,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees, counter-clockwise about the footprint origin.
    pub rotation: f64,
    /// Reference designator, unique within a board.
    pub reference: String,
}

impl ComponentPlacement {
    pub fn new(kind: ComponentKind, reference: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            kind,
            x,
            y,
            rotation: 0.0,
            reference: reference.into(),
        }
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

/// Footprint geometry relative to the origin, plus the silkscreen anchor
/// where the reference designator is lettered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintTemplate {
    pub name: String,
    /// Primitives per layer the footprint touches.
    pub layers: Vec<(LayerKind, Vec<Primitive>)>,
    pub label_anchor: (f64, f64),
    pub label_size: f64,
}

impl FootprintTemplate {
    /// Resolve the template into placed primitives: rotate about the origin,
    /// translate to the placement position, and letter the refdes on the
    /// top silkscreen at the label anchor.
    pub fn instantiate(&self, placement: &ComponentPlacement) -> Vec<(LayerKind, Primitive)> {
        let mut out = Vec::new();
        for (layer, primitives) in &self.layers {
            for primitive in primitives {
                out.push((
                    *layer,
                    primitive.placed(placement.x, placement.y, placement.rotation),
                ));
            }
        }
        let (ax, ay) = self.label_anchor;
        let label = Primitive::label(ax, ay, placement.reference.clone(), self.label_size)
            .placed(placement.x, placement.y, placement.rotation);
        out.push((LayerKind::SilkscreenTop, label));
        out
    }

    /// Generic stand-in rendered when a kind has no registered template.
    pub fn placeholder() -> Self {
        Self {
            name: "placeholder".to_string(),
            layers: vec![(
                LayerKind::CopperTop,
                vec![Primitive::rect_pad(0.0, 0.0, 2.0, 2.0)],
            )],
            label_anchor: (0.0, 2.0),
            label_size: 1.0,
        }
    }
}

/// Registry mapping component kinds to footprint templates. Pure lookup,
/// no side effects.
#[derive(Debug, Clone, Default)]
pub struct FootprintCatalog {
    templates: HashMap<ComponentKind, FootprintTemplate>,
}

impl FootprintCatalog {
    /// An empty catalog; every lookup falls back to the placeholder.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in catalog covering all six component kinds.
    pub fn standard() -> Self {
        let mut catalog = Self::default();
        catalog.register(ComponentKind::Ic, qfp_template());
        catalog.register(ComponentKind::Resistor, smd_resistor_template());
        catalog.register(ComponentKind::Capacitor, capacitor_template());
        catalog.register(ComponentKind::Crystal, crystal_template());
        catalog.register(ComponentKind::Connector, usb_connector_template());
        catalog.register(ComponentKind::Diode, sot23_template());
        catalog
    }

    pub fn register(&mut self, kind: ComponentKind, template: FootprintTemplate) {
        self.templates.insert(kind, template);
    }

    pub fn footprint_for(&self, kind: ComponentKind) -> Option<&FootprintTemplate> {
        self.templates.get(&kind)
    }
}

/// Shared default catalog used by [`crate::compose::compose`].
pub static DEFAULT_CATALOG: Lazy<FootprintCatalog> = Lazy::new(FootprintCatalog::standard);

/// QFP package: 12x12 mm body, 8 gull-wing pins per side.
fn qfp_template() -> FootprintTemplate {
    let body = 12.0;
    let pins_per_side = 8;
    let spacing = body / (pins_per_side + 1) as f64;
    let pin_offset = body / 2.0 + 0.6;

    let mut copper = vec![Primitive::rect_pad(0.0, 0.0, body, body)];
    for i in 0..pins_per_side {
        let offset = -body / 2.0 + spacing * (i + 1) as f64;
        copper.push(Primitive::rect_pad(offset, -pin_offset, 0.5, 1.2));
        copper.push(Primitive::rect_pad(offset, pin_offset, 0.5, 1.2));
        copper.push(Primitive::rect_pad(-pin_offset, offset, 1.2, 0.5));
        copper.push(Primitive::rect_pad(pin_offset, offset, 1.2, 0.5));
    }

    FootprintTemplate {
        name: "QFP-32".to_string(),
        layers: vec![(LayerKind::CopperTop, copper)],
        label_anchor: (0.0, 7.5),
        label_size: 1.5,
    }
}

/// Two-terminal SMD chip: 2x1 mm body.
fn smd_resistor_template() -> FootprintTemplate {
    FootprintTemplate {
        name: "R-0805".to_string(),
        layers: vec![(
            LayerKind::CopperTop,
            vec![
                Primitive::rect_pad(0.0, 0.0, 2.0, 1.0),
                Primitive::rect_pad(-1.2, 0.0, 0.6, 1.2),
                Primitive::rect_pad(1.2, 0.0, 0.6, 1.2),
            ],
        )],
        label_anchor: (0.0, 1.5),
        label_size: 1.0,
    }
}

/// Radial capacitor: circular body with two terminal pads.
fn capacitor_template() -> FootprintTemplate {
    FootprintTemplate {
        name: "CP-Radial-4mm".to_string(),
        layers: vec![(
            LayerKind::CopperTop,
            vec![
                Primitive::circle_pad(0.0, 0.0, 4.0),
                Primitive::circle_pad(-1.0, 0.0, 0.8),
                Primitive::circle_pad(1.0, 0.0, 0.8),
            ],
        )],
        label_anchor: (0.0, 2.8),
        label_size: 1.0,
    }
}

/// HC-49 style crystal: 7x3 mm can with two leads.
fn crystal_template() -> FootprintTemplate {
    FootprintTemplate {
        name: "HC-49".to_string(),
        layers: vec![(
            LayerKind::CopperTop,
            vec![
                Primitive::rect_pad(0.0, 0.0, 7.0, 3.0),
                Primitive::circle_pad(-2.4, 0.0, 0.9),
                Primitive::circle_pad(2.4, 0.0, 0.9),
            ],
        )],
        label_anchor: (0.0, 2.2),
        label_size: 1.0,
    }
}

/// USB-A receptacle: 15x8 mm shield box with an opening slot at the board
/// edge side.
fn usb_connector_template() -> FootprintTemplate {
    FootprintTemplate {
        name: "USB-A".to_string(),
        layers: vec![(
            LayerKind::CopperTop,
            vec![
                Primitive::rect_pad(0.0, 0.0, 15.0, 8.0),
                Primitive::rect_pad(7.5, 0.0, 0.5, 5.0),
                Primitive::rect_pad(-6.0, -4.5, 1.5, 1.0),
                Primitive::rect_pad(6.0, -4.5, 1.5, 1.0),
            ],
        )],
        label_anchor: (0.0, 5.0),
        label_size: 1.2,
    }
}

/// SOT-23 package: 3x3 mm body with a two-plus-one pin layout.
fn sot23_template() -> FootprintTemplate {
    FootprintTemplate {
        name: "SOT-23".to_string(),
        layers: vec![(
            LayerKind::CopperTop,
            vec![
                Primitive::rect_pad(0.0, 0.0, 3.0, 3.0),
                Primitive::rect_pad(-1.0, -1.5, 0.8, 0.5),
                Primitive::rect_pad(1.0, -1.5, 0.8, 0.5),
                Primitive::rect_pad(0.0, 1.5, 0.8, 0.5),
            ],
        )],
        label_anchor: (0.0, 2.5),
        label_size: 1.0,
    }
}
