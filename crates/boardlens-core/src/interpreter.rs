//! Collaborator seam for real Gerber/Excellon interpretation. The core
//! consumes structured layer data; it never interprets Gerber syntax
//! itself. Implementations live outside this crate (or in tests).

use crate::extract::ExtractedFile;
use crate::primitives::Primitive;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed coordinate data at line {line}: {detail}")]
    MalformedCoordinate { line: usize, detail: String },
    #[error("unknown aperture or tool code: {0}")]
    UnknownAperture(String),
}

/// Turns one extracted file into the primitives it describes. A failure is
/// fatal to that file only; callers degrade to whatever board data they
/// already have.
pub trait GerberInterpreter {
    fn parse(&self, file: &ExtractedFile) -> Result<Vec<Primitive>, ParseError>;
}
