use traykit_core::PathBuilder;

use super::{Edge, EdgeKind};

/// Plain straight edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightEdge;

impl Edge for StraightEdge {
    fn kind(&self) -> EdgeKind {
        EdgeKind::Straight
    }

    fn draw(&self, path: &mut PathBuilder, length: f64) {
        path.line_forward(length);
    }
}
