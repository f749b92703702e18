//! Error types for the geometry layer.
//!
//! A geometry error always means an edge implementation produced a contour
//! that does not close. It carries the full builder state so the offending
//! edge can be found from the message alone.

use crate::geometry::{Point, Pose};
use thiserror::Error;

/// Errors raised by the path builder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The contour did not return to its starting pose.
    #[error(
        "Contour did not close: start {start}, pen at {pose}, gap {gap:.9}, \
         turned {turned:.9}° over {commands} commands"
    )]
    OpenContour {
        /// Where the contour started.
        start: Point,
        /// Where the pen ended up.
        pose: Pose,
        /// Distance between the pen and the start point.
        gap: f64,
        /// Signed sum of all corner angles.
        turned: f64,
        /// Number of path commands emitted so far.
        commands: usize,
    },

    /// `close` was called before anything was drawn.
    #[error("Contour is empty")]
    EmptyContour,

    /// A length or angle became NaN or infinite.
    #[error("Non-finite value in {operation}: {value}")]
    NonFinite {
        /// The builder operation that received the value.
        operation: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_error_display() {
        let err = GeometryError::EmptyContour;
        assert_eq!(err.to_string(), "Contour is empty");

        let err = GeometryError::NonFinite {
            operation: "line_forward",
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "Non-finite value in line_forward: inf");
    }

    #[test]
    fn test_open_contour_reports_state() {
        let err = GeometryError::OpenContour {
            start: Point::new(0.0, 0.0),
            pose: Pose::new(Point::new(1.0, 0.0), 90.0),
            gap: 1.0,
            turned: 270.0,
            commands: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("gap 1.000000000"));
        assert!(msg.contains("turned 270.000000000°"));
        assert!(msg.contains("over 4 commands"));
    }
}
