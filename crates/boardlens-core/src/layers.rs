use serde::{Deserialize, Serialize};

/// Which face of the board a layer (or a view) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Top,
    Bottom,
    Internal,
}

/// The layers of a standard 2-layer board preview.
///
/// The stackup order is fixed and immutable once a board is composed:
/// silkscreen-top, mask-top, copper-top, substrate, copper-bottom,
/// mask-bottom, silkscreen-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    SilkscreenTop,
    MaskTop,
    CopperTop,
    Substrate,
    CopperBottom,
    MaskBottom,
    SilkscreenBottom,
}

// Nominal layer thicknesses in mm, matching a 1 oz HASL stackup.
pub const SILKSCREEN_THICKNESS: f64 = 0.01;
pub const MASK_THICKNESS: f64 = 0.015;
pub const COPPER_THICKNESS: f64 = 0.035;

impl LayerKind {
    /// The full stackup in top-to-bottom order.
    pub fn stackup() -> [Self; 7] {
        [
            Self::SilkscreenTop,
            Self::MaskTop,
            Self::CopperTop,
            Self::Substrate,
            Self::CopperBottom,
            Self::MaskBottom,
            Self::SilkscreenBottom,
        ]
    }

    pub fn side(&self) -> Side {
        match self {
            Self::SilkscreenTop | Self::MaskTop | Self::CopperTop => Side::Top,
            Self::Substrate => Side::Internal,
            Self::CopperBottom | Self::MaskBottom | Self::SilkscreenBottom => Side::Bottom,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SilkscreenTop => "Top Silkscreen",
            Self::MaskTop => "Top Solder Mask",
            Self::CopperTop => "Top Copper (L1)",
            Self::Substrate => "FR4 Substrate",
            Self::CopperBottom => "Bottom Copper (L2)",
            Self::MaskBottom => "Bottom Solder Mask",
            Self::SilkscreenBottom => "Bottom Silkscreen",
        }
    }

    /// Layer thickness in mm. The substrate absorbs whatever remains of the
    /// board thickness after the six outer layers, so the stackup always
    /// sums to the board thickness.
    pub fn thickness(&self, board_thickness: f64) -> f64 {
        match self {
            Self::SilkscreenTop | Self::SilkscreenBottom => SILKSCREEN_THICKNESS,
            Self::MaskTop | Self::MaskBottom => MASK_THICKNESS,
            Self::CopperTop | Self::CopperBottom => COPPER_THICKNESS,
            Self::Substrate => {
                let outer = 2.0 * (SILKSCREEN_THICKNESS + MASK_THICKNESS + COPPER_THICKNESS);
                (board_thickness - outer).max(0.0)
            }
        }
    }

    /// Layers of a projection in nearest-to-viewer order. The whole stackup
    /// takes part in both projections; flipping the board puts the
    /// bottom-side layers nearest the viewer.
    pub fn view_order(side: Side) -> Vec<Self> {
        let mut order = Self::stackup().to_vec();
        if side == Side::Bottom {
            order.reverse();
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stackup_order_is_fixed() {
        let stackup = LayerKind::stackup();
        assert_eq!(stackup[0], LayerKind::SilkscreenTop);
        assert_eq!(stackup[3], LayerKind::Substrate);
        assert_eq!(stackup[6], LayerKind::SilkscreenBottom);
    }

    #[test]
    fn stackup_thickness_sums_to_board_thickness() {
        let total: f64 = LayerKind::stackup()
            .iter()
            .map(|k| k.thickness(1.6))
            .sum();
        assert!((total - 1.6).abs() < 1e-12);
    }

    #[test]
    fn bottom_view_order_lists_bottom_layers_first() {
        let order = LayerKind::view_order(Side::Bottom);
        assert_eq!(order[0], LayerKind::SilkscreenBottom);
        assert_eq!(order[1], LayerKind::MaskBottom);
        assert_eq!(order[2], LayerKind::CopperBottom);
        assert_eq!(order.last(), Some(&LayerKind::SilkscreenTop));
    }

    #[test]
    fn top_view_order_matches_stackup() {
        let order = LayerKind::view_order(Side::Top);
        assert_eq!(order, LayerKind::stackup().to_vec());
    }
}
