use serde::{Deserialize, Serialize};

use crate::footprint::ComponentKind;
use crate::layers::{LayerKind, Side};
use crate::primitives::Primitive;

/// Input to the composer: board metadata plus the caller-supplied primitives
/// (traces, holes, free silkscreen text). Routing is out of scope — the
/// composer lays out exactly what it is told.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSpec {
    pub name: String,
    /// Board width in mm; x coordinates run 0..width.
    pub width: f64,
    /// Board height in mm; y coordinates run 0..height.
    pub height: f64,
    /// Total board thickness in mm.
    pub thickness: f64,
    /// Primitives supplied directly by the caller, each targeted at a layer.
    pub seeded: Vec<(LayerKind, Primitive)>,
}

impl BoardSpec {
    pub fn new(name: impl Into<String>, width: f64, height: f64, thickness: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            thickness,
            seeded: Vec::new(),
        }
    }

    pub fn with_primitive(mut self, layer: LayerKind, primitive: Primitive) -> Self {
        self.seeded.push((layer, primitive));
        self
    }

    pub fn with_trace(self, layer: LayerKind, points: Vec<(f64, f64)>, width: f64) -> Self {
        self.with_primitive(layer, Primitive::Trace { points, width })
    }

    /// A plated or unplated drill hit. Holes pass through the whole stack;
    /// they are recorded on the substrate layer.
    pub fn with_hole(self, x: f64, y: f64, radius: f64, plated: bool) -> Self {
        self.with_primitive(
            LayerKind::Substrate,
            Primitive::Hole {
                x,
                y,
                radius,
                plated,
            },
        )
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }
}

/// One layer of a composed board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub kind: LayerKind,
    pub name: String,
    pub side: Side,
    pub thickness: f64,
    pub primitives: Vec<Primitive>,
}

impl Layer {
    pub fn empty(kind: LayerKind, board_thickness: f64) -> Self {
        Self {
            kind,
            name: kind.display_name().to_string(),
            side: kind.side(),
            thickness: kind.thickness(board_thickness),
            primitives: Vec::new(),
        }
    }
}

/// Non-fatal diagnostics collected during composition. A partial render is
/// preferable to no render, so these never abort a compose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum CompositionWarning {
    #[error("no footprint registered for {kind:?} ({reference}); placeholder substituted")]
    UnknownComponentKind {
        reference: String,
        kind: ComponentKind,
    },
    #[error("{reference} placed at ({x:.2}, {y:.2}), outside the board outline")]
    OutOfBounds { reference: String, x: f64, y: f64 },
    #[error("duplicate reference designator {reference}")]
    DuplicateReference { reference: String },
}

/// A composed board: the fixed seven-layer stackup populated with
/// primitives, plus any warnings raised while composing. Read-only for a
/// given render cycle; new inputs produce a new Board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub layers: Vec<Layer>,
    pub warnings: Vec<CompositionWarning>,
}

/// A per-side projection of a board, layers listed nearest-to-viewer first.
/// The bottom view has every x coordinate mirrored across the vertical
/// board axis, the way a physical board looks when flipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub side: Side,
    pub width: f64,
    pub height: f64,
    pub layers: Vec<Layer>,
}

impl Board {
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    pub fn primitive_count(&self) -> usize {
        self.layers.iter().map(|l| l.primitives.len()).sum()
    }

    /// Projection seen from the top face.
    pub fn top_view(&self) -> BoardView {
        BoardView {
            side: Side::Top,
            width: self.width,
            height: self.height,
            layers: self.view_layers(Side::Top, false),
        }
    }

    /// Projection seen from the bottom face: bottom-side layers first,
    /// x coordinates reflected as exactly `width - x`.
    pub fn bottom_view(&self) -> BoardView {
        BoardView {
            side: Side::Bottom,
            width: self.width,
            height: self.height,
            layers: self.view_layers(Side::Bottom, true),
        }
    }

    fn view_layers(&self, side: Side, mirror: bool) -> Vec<Layer> {
        LayerKind::view_order(side)
            .into_iter()
            .filter_map(|kind| self.layer(kind))
            .map(|layer| {
                if mirror {
                    Layer {
                        primitives: layer
                            .primitives
                            .iter()
                            .map(|p| p.mirrored_x(self.width))
                            .collect(),
                        ..layer.clone()
                    }
                } else {
                    layer.clone()
                }
            })
            .collect()
    }
}
