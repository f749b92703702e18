//! Slotted edge: one inner edge per section with wall gaps between them.

use std::sync::Arc;

use traykit_core::PathBuilder;

use super::{Edge, EdgeKind};

#[derive(Debug, Clone)]
pub struct SlottedEdge {
    sections: Vec<f64>,
    thickness: f64,
    slot_depth: f64,
    inner: Arc<dyn Edge>,
}

impl SlottedEdge {
    pub fn new(sections: Vec<f64>, thickness: f64, inner: Arc<dyn Edge>) -> Self {
        Self {
            sections,
            thickness,
            slot_depth: 0.0,
            inner,
        }
    }

    /// Cuts a slot of `depth` into the panel at every gap.
    pub fn with_slots(self, depth: f64) -> Self {
        Self {
            slot_depth: depth,
            ..self
        }
    }

    pub fn sections(&self) -> &[f64] {
        &self.sections
    }

    pub fn inner(&self) -> &Arc<dyn Edge> {
        &self.inner
    }

    /// Centre of each gap, measured from the start of the edge.
    pub fn gap_centers(&self) -> Vec<f64> {
        let mut centers = Vec::with_capacity(self.sections.len().saturating_sub(1));
        let mut position = 0.0;
        if let Some((_, head)) = self.sections.split_last() {
            for width in head {
                position += width;
                centers.push(position + 0.5 * self.thickness);
                position += self.thickness;
            }
        }
        centers
    }
}

impl Edge for SlottedEdge {
    fn kind(&self) -> EdgeKind {
        EdgeKind::Slotted
    }

    fn draw(&self, path: &mut PathBuilder, _length: f64) {
        let t = self.thickness;
        let last = self.sections.len().saturating_sub(1);
        for (i, width) in self.sections.iter().enumerate() {
            self.inner.draw(path, *width);
            if i == last {
                break;
            }
            if self.slot_depth > 0.0 {
                let d = self.slot_depth;
                path.polyline(&[0.0, 90.0, d, -90.0, t, -90.0, d, 90.0]);
            } else {
                path.line_forward(t);
            }
        }
    }

    fn margin(&self) -> f64 {
        self.inner.margin()
    }

    fn min_length(&self) -> f64 {
        self.inner.min_length()
    }

    fn fixed_length(&self) -> Option<f64> {
        let n = self.sections.len();
        let sum: f64 = self.sections.iter().sum();
        Some(sum + n.saturating_sub(1) as f64 * self.thickness)
    }
}
