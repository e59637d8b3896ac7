//! Presentation state for the viewer. A `ViewState` value is passed
//! explicitly through render calls; it never touches board data and board
//! data never touches it.

use serde::{Deserialize, Serialize};

use crate::layers::Side;

/// 2D layer diagram or interactive 3D model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    TwoD,
    ThreeD,
}

/// Camera preset for the 3D view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraPose {
    Top,
    Bottom,
    Angle,
}

/// Transient UI state, mutated only by explicit user intents. Every
/// transition is a total function; none can fail and there is no terminal
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub mode: ViewMode,
    /// Which face the 2D diagram shows. Only observable when `mode` is 2D.
    pub active_side: Side,
    /// Camera preset. Only observable when `mode` is 3D.
    pub camera_pose: CameraPose,
    /// Continuous turntable rotation in the 3D view.
    pub rotating: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            mode: ViewMode::TwoD,
            active_side: Side::Top,
            camera_pose: CameraPose::Angle,
            rotating: true,
        }
    }
}

impl ViewState {
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Camera presets only apply to the 3D view; in 2D this is a no-op.
    pub fn set_camera_pose(&mut self, pose: CameraPose) {
        if self.mode == ViewMode::ThreeD {
            self.camera_pose = pose;
        }
    }

    /// Toggle between the top and bottom face in the 2D diagram.
    pub fn flip_side(&mut self) {
        self.active_side = match self.active_side {
            Side::Top => Side::Bottom,
            _ => Side::Top,
        };
    }

    pub fn toggle_rotation(&mut self) {
        self.rotating = !self.rotating;
    }

    pub fn view_description(&self) -> &'static str {
        match (self.mode, self.active_side, self.camera_pose) {
            (ViewMode::TwoD, Side::Top, _) => "2D Top View",
            (ViewMode::TwoD, _, _) => "2D Bottom View",
            (ViewMode::ThreeD, _, CameraPose::Top) => "3D Top View",
            (ViewMode::ThreeD, _, CameraPose::Bottom) => "3D Bottom View",
            (ViewMode::ThreeD, _, CameraPose::Angle) => "3D Angle View",
        }
    }
}
