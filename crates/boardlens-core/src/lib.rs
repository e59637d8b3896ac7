// Boardlens core library
// Layer composition, footprint catalog and view state for board previews

pub mod board;
pub mod classify;
pub mod compose;
pub mod demo;
pub mod display;
pub mod extract;
pub mod footprint;
pub mod interpreter;
pub mod layers;
pub mod primitives;

pub use board::{Board, BoardSpec, BoardView, CompositionWarning, Layer};
pub use classify::{classify, FileCategory};
pub use compose::{compose, compose_with_catalog};
pub use display::{CameraPose, ViewMode, ViewState};
pub use extract::{extract, ExtractError, ExtractedFile};
pub use footprint::{ComponentKind, ComponentPlacement, FootprintCatalog, FootprintTemplate};
pub use interpreter::{GerberInterpreter, ParseError};
pub use layers::{LayerKind, Side};
pub use primitives::{PadShape, Primitive};
