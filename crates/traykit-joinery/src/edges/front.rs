//! Sloped retainer edges.
//!
//! The profile rises away from the panel over `L·(1 - f)`, then comes back
//! down at 45 degrees over `L·f` with male fingers for the retainer panel.

use std::f64::consts::SQRT_2;

use traykit_core::PathBuilder;

use super::{Edge, EdgeKind, FingerJointEdge};
use crate::settings::{FrontSettings, JointSettings};

#[derive(Debug, Clone, Copy)]
pub struct FrontEdge {
    kind: EdgeKind,
    front: FrontSettings,
    fingers: FingerJointEdge,
}

impl FrontEdge {
    /// Divider edge; the profile spans the whole side.
    pub fn inner(front: FrontSettings, joint: JointSettings) -> Self {
        Self {
            kind: EdgeKind::FrontInner,
            front: front.with_inset(0.0),
            fingers: FingerJointEdge::male(joint),
        }
    }

    /// Outer wall edge; the profile spans the side minus the inset, which
    /// follows as a straight run.
    pub fn outer(front: FrontSettings, joint: JointSettings) -> Self {
        Self {
            kind: EdgeKind::FrontOuter,
            front,
            fingers: FingerJointEdge::male(joint),
        }
    }

    pub fn front(&self) -> &FrontSettings {
        &self.front
    }

    /// Length of the sloped straight run for a profile of `length`.
    pub fn slope_length(&self, length: f64) -> f64 {
        let f = self.front.front;
        length * (f * f + (1.0 - f) * (1.0 - f)).sqrt()
    }

    /// Length of the 45 degree finger run for a profile of `length`.
    pub fn finger_run(&self, length: f64) -> f64 {
        length * self.front.front * SQRT_2
    }
}

impl Edge for FrontEdge {
    fn kind(&self) -> EdgeKind {
        self.kind
    }

    fn draw(&self, path: &mut PathBuilder, length: f64) {
        let profile = (length - self.front.inset).max(0.0);
        let a1 = self.front.slope_angle();

        path.corner(-a1, 0.0);
        path.line_forward(self.slope_length(profile));
        path.corner(45.0 + a1, 0.0);
        self.fingers.draw(path, self.finger_run(profile));
        path.corner(-45.0, 0.0);
        path.line_forward(length - profile);
    }

    /// Slope peak plus the finger tips on the 45 degree run.
    fn margin(&self) -> f64 {
        if self.front.front <= 0.0 {
            return 0.0;
        }
        self.front.span * self.front.front + self.fingers.margin() / SQRT_2
    }
}
