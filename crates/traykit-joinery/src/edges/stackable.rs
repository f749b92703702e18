//! Stacking lip edges.
//!
//! The top edge of a tray wall bulges out so the tray above can sit on it;
//! the bottom edge has the matching recess.

use traykit_core::PathBuilder;

use super::{Edge, EdgeKind};
use crate::settings::StackableSettings;

#[derive(Debug, Clone, Copy)]
pub struct StackableEdge {
    kind: EdgeKind,
    /// Flank angle in degrees
    angle: f64,
    height: f64,
    width: f64,
}

impl StackableEdge {
    pub fn top(thickness: f64, settings: &StackableSettings) -> Self {
        Self {
            kind: EdgeKind::StackableTop,
            angle: settings.angle,
            height: settings.height * thickness,
            width: settings.width * thickness,
        }
    }

    pub fn bottom(thickness: f64, settings: &StackableSettings) -> Self {
        Self {
            kind: EdgeKind::StackableBottom,
            ..Self::top(thickness, settings)
        }
    }

    /// Radius of the four flank arcs.
    pub fn radius(&self) -> f64 {
        self.height / (2.0 * (1.0 - self.angle.to_radians().cos()))
    }

    /// Run of one flank arc along the edge.
    pub fn flank_length(&self) -> f64 {
        self.radius() * self.angle.to_radians().sin()
    }

    fn bulges_out(&self) -> bool {
        self.kind == EdgeKind::StackableTop
    }
}

impl Edge for StackableEdge {
    fn kind(&self) -> EdgeKind {
        self.kind
    }

    fn draw(&self, path: &mut PathBuilder, length: f64) {
        let r = self.radius();
        let l = self.flank_length();
        let a = if self.bulges_out() {
            -self.angle
        } else {
            self.angle
        };

        path.line_forward(self.width);
        path.corner(a, r);
        path.corner(-a, r);
        path.line_forward(length - 2.0 * self.width - 4.0 * l);
        path.corner(-a, r);
        path.corner(a, r);
        path.line_forward(self.width);
    }

    fn margin(&self) -> f64 {
        if self.bulges_out() {
            self.height
        } else {
            0.0
        }
    }

    fn min_length(&self) -> f64 {
        2.0 * self.width + 4.0 * self.flank_length()
    }
}
