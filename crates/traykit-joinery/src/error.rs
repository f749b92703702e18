//! Error types for the joinery crate.
//!
//! This module provides structured error types for parameter validation,
//! edge lookup and panel rendering.

use thiserror::Error;
use traykit_core::GeometryError;

use crate::edges::EdgeKind;

/// Errors that can occur while generating panels.
#[derive(Error, Debug)]
pub enum JoineryError {
    /// Invalid parameters were provided to a generator.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// An edge code has no registered edge.
    #[error("Unknown edge code '{code}' on panel '{label}'")]
    UnknownEdge { code: char, label: String },

    /// A side is shorter than its edge profile needs.
    #[error("Edge '{kind}' on panel '{label}' needs at least {min:.3} mm, side is {length:.3} mm")]
    EdgeTooShort {
        kind: EdgeKind,
        label: String,
        length: f64,
        min: f64,
    },

    /// A slot layout does not add up to the side it is drawn on.
    #[error("Slot layout on panel '{label}' spans {expected:.3} mm, side is {length:.3} mm")]
    LayoutMismatch {
        label: String,
        expected: f64,
        length: f64,
    },

    /// A contour failed to close.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

/// Errors related to parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type alias for joinery operations.
pub type JoineryResult<T> = Result<T, JoineryError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use traykit_core::Point;

    #[test]
    fn test_joinery_error_display() {
        let err = JoineryError::UnknownEdge {
            code: 'X',
            label: "left".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown edge code 'X' on panel 'left'");

        let err = JoineryError::EdgeTooShort {
            kind: EdgeKind::StackableTop,
            label: "back".to_string(),
            length: 20.0,
            min: 44.784,
        };
        assert_eq!(
            err.to_string(),
            "Edge 'S' on panel 'back' needs at least 44.784 mm, side is 20.000 mm"
        );

        let err = JoineryError::LayoutMismatch {
            label: "bottom".to_string(),
            expected: 103.0,
            length: 100.0,
        };
        assert_eq!(
            err.to_string(),
            "Slot layout on panel 'bottom' spans 103.000 mm, side is 100.000 mm"
        );
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::OutOfRange {
            name: "front".to_string(),
            value: 1.5,
            min: 0.0,
            max: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'front' out of range: 1.5 (valid: 0..1)"
        );

        let err = ParameterError::InvalidValue {
            name: "sx".to_string(),
            reason: "slot layout must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'sx': slot layout must not be empty"
        );
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::InvalidDimensions("y must be positive".to_string());
        let err: JoineryError = param_err.into();
        assert!(matches!(err, JoineryError::Parameter(_)));

        let geo_err = GeometryError::OpenContour {
            start: Point::ORIGIN,
            pose: Default::default(),
            gap: 1.0,
            turned: 0.0,
            commands: 2,
        };
        let err: JoineryError = geo_err.into();
        assert!(matches!(err, JoineryError::Geometry(_)));
    }
}
