use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// Pad outline shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PadShape {
    Circle,
    Rect,
}

/// A single drawable element on a layer. Immutable once placed; transforms
/// produce new primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Pad {
        x: f64,
        y: f64,
        shape: PadShape,
        width: f64,
        height: f64,
    },
    Trace {
        points: Vec<(f64, f64)>,
        width: f64,
    },
    Hole {
        x: f64,
        y: f64,
        radius: f64,
        plated: bool,
    },
    Label {
        x: f64,
        y: f64,
        text: String,
        size: f64,
    },
}

impl Primitive {
    pub fn rect_pad(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::Pad {
            x,
            y,
            shape: PadShape::Rect,
            width,
            height,
        }
    }

    pub fn circle_pad(x: f64, y: f64, diameter: f64) -> Self {
        Self::Pad {
            x,
            y,
            shape: PadShape::Circle,
            width: diameter,
            height: diameter,
        }
    }

    pub fn label(x: f64, y: f64, text: impl Into<String>, size: f64) -> Self {
        Self::Label {
            x,
            y,
            text: text.into(),
            size,
        }
    }

    /// Anchor position of the primitive (first point for traces).
    pub fn position(&self) -> (f64, f64) {
        match self {
            Self::Pad { x, y, .. } | Self::Hole { x, y, .. } | Self::Label { x, y, .. } => {
                (*x, *y)
            }
            Self::Trace { points, .. } => points.first().copied().unwrap_or((0.0, 0.0)),
        }
    }

    /// Rotate about the origin by `degrees`, then translate by `(dx, dy)`.
    /// This is the placement transform: templates are authored relative to
    /// their footprint origin. Rect pads stay axis-aligned; rotation moves
    /// their centers only.
    pub fn placed(&self, dx: f64, dy: f64, degrees: f64) -> Self {
        let rot = Rotation2::new(degrees.to_radians());
        let map = |x: f64, y: f64| {
            let p = rot * Vector2::new(x, y);
            (p.x + dx, p.y + dy)
        };
        match self {
            Self::Pad {
                x,
                y,
                shape,
                width,
                height,
            } => {
                let (x, y) = map(*x, *y);
                Self::Pad {
                    x,
                    y,
                    shape: *shape,
                    width: *width,
                    height: *height,
                }
            }
            Self::Trace { points, width } => Self::Trace {
                points: points.iter().map(|&(x, y)| map(x, y)).collect(),
                width: *width,
            },
            Self::Hole {
                x,
                y,
                radius,
                plated,
            } => {
                let (x, y) = map(*x, *y);
                Self::Hole {
                    x,
                    y,
                    radius: *radius,
                    plated: *plated,
                }
            }
            Self::Label { x, y, text, size } => {
                let (x, y) = map(*x, *y);
                Self::Label {
                    x,
                    y,
                    text: text.clone(),
                    size: *size,
                }
            }
        }
    }

    /// Reflect across the vertical board axis: `x' = board_width - x`.
    /// Used by the bottom projection; must be bit-reproducible.
    pub fn mirrored_x(&self, board_width: f64) -> Self {
        match self {
            Self::Pad {
                x,
                y,
                shape,
                width,
                height,
            } => Self::Pad {
                x: board_width - x,
                y: *y,
                shape: *shape,
                width: *width,
                height: *height,
            },
            Self::Trace { points, width } => Self::Trace {
                points: points.iter().map(|&(x, y)| (board_width - x, y)).collect(),
                width: *width,
            },
            Self::Hole {
                x,
                y,
                radius,
                plated,
            } => Self::Hole {
                x: board_width - x,
                y: *y,
                radius: *radius,
                plated: *plated,
            },
            Self::Label { x, y, text, size } => Self::Label {
                x: board_width - x,
                y: *y,
                text: text.clone(),
                size: *size,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placed_translates_without_rotation() {
        let pad = Primitive::circle_pad(1.0, 2.0, 0.5);
        let placed = pad.placed(10.0, 20.0, 0.0);
        assert_eq!(placed.position(), (11.0, 22.0));
    }

    #[test]
    fn placed_rotates_about_origin() {
        let pad = Primitive::circle_pad(1.0, 0.0, 0.5);
        let placed = pad.placed(0.0, 0.0, 90.0);
        let (x, y) = placed.position();
        assert!(x.abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mirror_is_exact_reflection() {
        let hole = Primitive::Hole {
            x: 15.0,
            y: 10.0,
            radius: 2.0,
            plated: true,
        };
        match hole.mirrored_x(60.0) {
            Primitive::Hole { x, y, .. } => {
                assert_eq!(x, 45.0);
                assert_eq!(y, 10.0);
            }
            other => panic!("unexpected primitive: {:?}", other),
        }
    }

    #[test]
    fn mirror_applies_to_every_trace_point() {
        let trace = Primitive::Trace {
            points: vec![(0.0, 0.0), (60.0, 0.0), (60.0, 60.0)],
            width: 0.25,
        };
        match trace.mirrored_x(60.0) {
            Primitive::Trace { points, .. } => {
                assert_eq!(points, vec![(60.0, 0.0), (0.0, 0.0), (0.0, 60.0)]);
            }
            other => panic!("unexpected primitive: {:?}", other),
        }
    }
}
