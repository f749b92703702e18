//! Path commands and closed contours.

use crate::geometry::{Bounds, Point};

/// A single drawing command with absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Lift the pen and move to a point.
    MoveTo(Point),
    /// Straight cut to a point.
    LineTo(Point),
    /// Circular arc ending at `end`.
    ArcTo {
        end: Point,
        center: Point,
        radius: f64,
        /// Swept angle in degrees, positive counter-clockwise.
        sweep: f64,
    },
}

impl PathCommand {
    pub fn end_point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::ArcTo { end, .. } => end,
        }
    }

    fn translated(&self, offset: Point) -> PathCommand {
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p + offset),
            PathCommand::LineTo(p) => PathCommand::LineTo(p + offset),
            PathCommand::ArcTo {
                end,
                center,
                radius,
                sweep,
            } => PathCommand::ArcTo {
                end: end + offset,
                center: center + offset,
                radius,
                sweep,
            },
        }
    }
}

/// A closed outline produced by the path builder.
///
/// The first command is always a `MoveTo`; the last end point coincides with
/// it.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    commands: Vec<PathCommand>,
}

impl Contour {
    pub(crate) fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn start(&self) -> Point {
        self.commands
            .first()
            .map(PathCommand::end_point)
            .unwrap_or_default()
    }

    pub fn end(&self) -> Point {
        self.commands
            .last()
            .map(PathCommand::end_point)
            .unwrap_or_default()
    }

    /// Number of arc commands in the contour.
    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
            .count()
    }

    /// Copy of the contour shifted by `offset`.
    pub fn translated(&self, offset: Point) -> Contour {
        Contour {
            commands: self.commands.iter().map(|c| c.translated(offset)).collect(),
        }
    }

    /// Tight bounding box, including arc bulges.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        let mut current = Point::ORIGIN;
        for cmd in &self.commands {
            if let PathCommand::ArcTo {
                center,
                radius,
                sweep,
                ..
            } = *cmd
            {
                let start_angle = (current.y - center.y).atan2(current.x - center.x).to_degrees();
                for quadrant in [0.0, 90.0, 180.0, 270.0] {
                    if angle_within_sweep(start_angle, sweep, quadrant) {
                        bounds.include(center + Point::from_heading(quadrant) * radius);
                    }
                }
            }
            current = cmd.end_point();
            bounds.include(current);
        }
        bounds
    }
}

/// True when travelling `sweep` degrees from `start` passes through `target`.
fn angle_within_sweep(start: f64, sweep: f64, target: f64) -> bool {
    let offset = if sweep >= 0.0 {
        (target - start).rem_euclid(360.0)
    } else {
        (start - target).rem_euclid(360.0)
    };
    offset <= sweep.abs()
}
