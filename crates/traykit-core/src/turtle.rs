//! Turtle path builder.
//!
//! Edges are drawn relative to the pen: "go forward this far, turn this
//! much". The builder turns those moves into absolute path commands and
//! checks, when a contour is closed, that the moves really came back to the
//! start.
//!
//! Positive corner angles turn counter-clockwise (left). Panels are drawn
//! counter-clockwise, so left is towards the panel interior and right is
//! outward.

use crate::error::{GeometryError, GeometryResult};
use crate::geometry::{Point, Pose};
use crate::path::{Contour, PathCommand};

/// Maximum distance between the first and last point of a closed contour.
pub const CLOSE_TOLERANCE: f64 = 1e-6;

/// Maximum deviation of the turn sum from ±360 degrees.
pub const TURN_TOLERANCE: f64 = 1e-9;

/// Segments shorter than this are not emitted.
const MIN_SEGMENT: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct PathBuilder {
    pose: Pose,
    start: Point,
    commands: Vec<PathCommand>,
    turned: f64,
}

impl PathBuilder {
    /// Builder with the pen at the origin, heading along +x.
    pub fn new() -> Self {
        Self::starting_at(Point::ORIGIN, 0.0)
    }

    pub fn starting_at(start: Point, heading: f64) -> Self {
        let mut builder = Self {
            pose: Pose::default(),
            start,
            commands: Vec::new(),
            turned: 0.0,
        };
        builder.begin(start, heading);
        builder
    }

    /// Starts a new contour, discarding anything not yet closed.
    pub fn begin(&mut self, start: Point, heading: f64) {
        self.pose = Pose::new(start, heading);
        self.start = start;
        self.turned = 0.0;
        self.commands.clear();
        self.commands.push(PathCommand::MoveTo(start));
    }

    /// Repositions the pen without drawing, keeping the heading.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let heading = self.pose.heading;
        self.begin(Point::new(x, y), heading);
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Signed sum of all corners since the contour began.
    pub fn turned(&self) -> f64 {
        self.turned
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Draws a straight segment along the current heading.
    pub fn line_forward(&mut self, length: f64) {
        debug_assert!(length.is_finite(), "non-finite segment length {length}");
        if length.abs() < MIN_SEGMENT {
            return;
        }
        let end = self.pose.position + self.pose.direction() * length;
        self.commands.push(PathCommand::LineTo(end));
        self.pose.position = end;
    }

    /// Turns by `angle` degrees. A non-zero `radius` draws the turn as an
    /// arc whose centre lies on the turning side.
    pub fn corner(&mut self, angle: f64, radius: f64) {
        debug_assert!(angle.is_finite(), "non-finite corner angle {angle}");
        if angle == 0.0 {
            return;
        }
        let from = self.pose.heading;
        let to = from + angle;
        self.turned += angle;

        if radius > 0.0 {
            let side = angle.signum();
            let position = self.pose.position;
            let center = position + Point::from_heading(from).perp() * (radius * side);
            let (sin_from, cos_from) = from.to_radians().sin_cos();
            let (sin_to, cos_to) = to.to_radians().sin_cos();
            let end = position + Point::new(sin_to - sin_from, cos_from - cos_to) * (radius * side);
            self.commands.push(PathCommand::ArcTo {
                end,
                center,
                radius,
                sweep: angle,
            });
            self.pose.position = end;
        }

        self.pose.heading = to.rem_euclid(360.0);
    }

    /// Alternating `length, angle, length, angle, ...` moves.
    pub fn polyline(&mut self, moves: &[f64]) {
        for (i, value) in moves.iter().enumerate() {
            if i % 2 == 0 {
                self.line_forward(*value);
            } else {
                self.corner(*value, 0.0);
            }
        }
    }

    /// Finishes the contour and checks that it closed.
    ///
    /// An open contour is a bug in whatever drew it; debug builds panic with
    /// the full builder state.
    pub fn close(&mut self) -> GeometryResult<Contour> {
        if self.commands.len() < 2 {
            return Err(GeometryError::EmptyContour);
        }

        let gap = self.pose.position.distance(&self.start);
        let turn_error = (self.turned.abs() - 360.0).abs();
        if !(gap <= CLOSE_TOLERANCE && turn_error <= TURN_TOLERANCE) {
            let err = GeometryError::OpenContour {
                start: self.start,
                pose: self.pose,
                gap,
                turned: self.turned,
                commands: self.commands.len(),
            };
            tracing::error!(commands = ?self.commands, "{}", err);
            debug_assert!(false, "{err}; commands: {:?}", self.commands);
            return Err(err);
        }

        // Snap the final point onto the start so writers see an exact loop.
        if let Some(last) = self.commands.last_mut() {
            match last {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p = self.start,
                PathCommand::ArcTo { end, .. } => *end = self.start,
            }
        }

        let contour = Contour::new(std::mem::take(&mut self.commands));
        let heading = self.pose.heading;
        self.begin(self.start, heading);
        Ok(contour)
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn draw_rectangle(b: &mut PathBuilder, w: f64, h: f64) {
        for side in [w, h, w, h] {
            b.line_forward(side);
            b.corner(90.0, 0.0);
        }
    }

    #[test]
    fn test_rectangle_closes() {
        let mut b = PathBuilder::new();
        draw_rectangle(&mut b, 30.0, 20.0);
        assert_eq!(b.turned(), 360.0);
        let contour = b.close().expect("rectangle should close");
        assert_eq!(contour.commands().len(), 5);
        assert_eq!(contour.start(), contour.end());
        let bounds = contour.bounds();
        assert!((bounds.width() - 30.0).abs() < 1e-9);
        assert!((bounds.height() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_left_turn_goes_up() {
        let mut b = PathBuilder::new();
        b.line_forward(10.0);
        b.corner(90.0, 0.0);
        b.line_forward(5.0);
        let p = b.pose().position;
        assert!((p.x - 10.0).abs() < 1e-12);
        assert!((p.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_arc_corner_end_point() {
        let mut b = PathBuilder::new();
        b.corner(90.0, 10.0);
        let p = b.pose().position;
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y - 10.0).abs() < 1e-9);
        assert_eq!(b.pose().heading, 90.0);
        match b.commands()[1] {
            PathCommand::ArcTo { center, sweep, .. } => {
                assert!((center.y - 10.0).abs() < 1e-9);
                assert_eq!(sweep, 90.0);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_right_arc_curves_down() {
        let mut b = PathBuilder::new();
        b.corner(-60.0, 6.0);
        let p = b.pose().position;
        // r*sin(60), -r*(1 - cos(60))
        assert!((p.x - 6.0 * 60f64.to_radians().sin()).abs() < 1e-9);
        assert!((p.y + 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounded_rectangle_closes() {
        let mut b = PathBuilder::starting_at(Point::new(5.0, 0.0), 0.0);
        for side in [40.0, 20.0, 40.0, 20.0] {
            b.line_forward(side);
            b.corner(90.0, 5.0);
        }
        let contour = b.close().expect("rounded rectangle should close");
        assert_eq!(contour.arc_count(), 4);
    }

    #[test]
    fn test_zero_length_lines_are_skipped() {
        let mut b = PathBuilder::new();
        b.polyline(&[0.0, 90.0, 0.0]);
        assert_eq!(b.commands().len(), 1);
        assert_eq!(b.turned(), 90.0);
    }

    #[test]
    fn test_move_to_keeps_heading() {
        let mut b = PathBuilder::new();
        b.corner(90.0, 0.0);
        b.move_to(3.0, 4.0);
        assert_eq!(b.pose().heading, 90.0);
        assert_eq!(b.pose().position, Point::new(3.0, 4.0));
        assert_eq!(b.turned(), 0.0);
    }

    #[test]
    fn test_empty_contour_is_rejected() {
        let mut b = PathBuilder::new();
        assert_eq!(b.close(), Err(GeometryError::EmptyContour));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Contour did not close")]
    fn test_open_contour_panics_in_debug() {
        let mut b = PathBuilder::new();
        b.line_forward(10.0);
        b.corner(90.0, 0.0);
        b.line_forward(10.0);
        let _ = b.close();
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_open_contour_is_reported_in_release() {
        let mut b = PathBuilder::new();
        b.line_forward(10.0);
        b.corner(90.0, 0.0);
        b.line_forward(10.0);
        assert!(matches!(
            b.close(),
            Err(GeometryError::OpenContour { commands: 3, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_any_rectangle_closes(w in 0.1f64..1000.0, h in 0.1f64..1000.0, r in 0.0f64..0.05) {
            let mut b = PathBuilder::new();
            for side in [w, h, w, h] {
                b.line_forward(side);
                b.corner(90.0, r);
            }
            let contour = b.close().unwrap();
            prop_assert!(contour.start().distance(&contour.end()) <= CLOSE_TOLERANCE);
        }
    }
}
