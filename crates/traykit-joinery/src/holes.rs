//! Finger hole planner.
//!
//! A panel that another panel slots through gets a row of rectangular holes
//! instead of an edge profile. The holes follow the notch layout of a female
//! finger joint of the same length, so they register with the male fingers
//! of the mating panel.

use traykit_core::{Contour, GeometryResult, PathBuilder, Point};

use crate::edges::FingerLayout;
use crate::settings::JointSettings;

/// One line of finger holes in panel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerHoleRow {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    /// Direction of the row in degrees; 90 runs along the panel's y axis.
    pub angle: f64,
}

impl FingerHoleRow {
    pub fn new(x: f64, y: f64, length: f64, angle: f64) -> Self {
        Self {
            x,
            y,
            length,
            angle,
        }
    }

    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self::new(x, y, length, 90.0)
    }

    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::new(x, y, length, 0.0)
    }

    /// Closed hole rectangles for this row.
    pub fn contours(&self, settings: &JointSettings) -> GeometryResult<Vec<Contour>> {
        let layout = FingerLayout::new(settings, self.length, true);
        let along = layout.finger;
        let across = settings.thickness + settings.play;

        let origin = Point::new(self.x, self.y);
        let direction = Point::from_heading(self.angle);
        let normal = direction.perp();

        let mut contours = Vec::with_capacity(layout.fingers);
        for start in layout.finger_starts() {
            let corner = origin + direction * start - normal * (across / 2.0);
            let mut path = PathBuilder::starting_at(corner, self.angle);
            for side in [along, across, along, across] {
                path.line_forward(side);
                path.corner(90.0, 0.0);
            }
            contours.push(path.close()?);
        }
        Ok(contours)
    }
}

/// Positions of the walls between sections, measured from the start of the
/// slot layout.
pub fn divider_centerlines(sections: &[f64], thickness: f64) -> Vec<f64> {
    let mut position = -0.5 * thickness;
    let mut lines = Vec::with_capacity(sections.len().saturating_sub(1));
    if let Some((_, head)) = sections.split_last() {
        for width in head {
            position += width + thickness;
            lines.push(position);
        }
    }
    lines
}

/// Start of every section, measured from the start of the slot layout.
pub fn section_offsets(sections: &[f64], thickness: f64) -> Vec<f64> {
    let mut position = 0.0;
    sections
        .iter()
        .map(|width| {
            let offset = position;
            position += width + thickness;
            offset
        })
        .collect()
}
