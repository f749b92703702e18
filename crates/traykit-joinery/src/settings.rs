//! Joint settings.
//!
//! `FingerJointSettings` and `StackableSettings` are the user-facing values,
//! expressed in multiples of the material thickness so they scale with the
//! stock. `JointSettings` is the resolved form in millimetres that the edges
//! draw with. Variants (angled joints, extra play) are derived with the
//! `with_*` builders and never modify the base value.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Largest usable front fraction; the slope angle diverges at 1.0.
pub const MAX_FRONT_FRACTION: f64 = 0.999;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerJointSettings {
    /// Width of fingers in multiples of thickness
    pub finger: f64,
    /// Space between fingers in multiples of thickness
    pub space: f64,
    /// Space at start and end in multiples of normal spaces
    pub surrounding_spaces: f64,
    /// Extra space to allow fingers to move in/out (multiples of thickness)
    pub play: f64,
    /// Extra material for burn marks (multiples of thickness)
    pub extra_length: f64,
}

impl Default for FingerJointSettings {
    fn default() -> Self {
        Self {
            finger: 2.0,
            space: 2.0,
            surrounding_spaces: 2.0,
            play: 0.0,
            extra_length: 0.0,
        }
    }
}

/// Finger joint settings resolved to millimetres for one material thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointSettings {
    pub thickness: f64,
    pub finger: f64,
    pub space: f64,
    /// Multiples of `space` left at each end.
    pub surrounding_spaces: f64,
    pub play: f64,
    pub extra_length: f64,
    /// Angle between the joined panels in degrees; 90 is a square corner.
    pub angle: f64,
}

impl JointSettings {
    pub fn resolve(thickness: f64, settings: &FingerJointSettings) -> Self {
        Self {
            thickness,
            finger: settings.finger * thickness,
            space: settings.space * thickness,
            surrounding_spaces: settings.surrounding_spaces,
            play: settings.play * thickness,
            extra_length: settings.extra_length * thickness,
            angle: 90.0,
        }
    }

    pub fn with_angle(self, angle: f64) -> Self {
        Self { angle, ..self }
    }

    pub fn with_surrounding_spaces(self, surrounding_spaces: f64) -> Self {
        Self {
            surrounding_spaces,
            ..self
        }
    }

    /// Calculate number of fingers and leftover space for a given length
    pub fn calc_fingers(&self, length: f64) -> (usize, f64) {
        let space = self.space;
        let finger = self.finger;

        if finger <= 0.0 || space + finger <= 0.0 {
            return (0, length);
        }

        let mut fingers = ((length - (self.surrounding_spaces - 1.0) * space) / (space + finger))
            .floor()
            .max(0.0) as usize;

        // Shrink surrounding space if a single finger still fits
        if fingers == 0 && length > finger + self.thickness {
            fingers = 1;
        }

        let leftover = if fingers > 0 {
            length - (fingers as f64) * (space + finger) + space
        } else {
            length
        };

        (fingers, leftover)
    }

    /// How deep fingers reach into the mating panel.
    ///
    /// At an angle the finger crosses the mating plate obliquely, so the
    /// path through it grows to `t / sin(angle)`.
    pub fn finger_depth(&self) -> f64 {
        if self.angle > 0.0 && self.angle < 90.0 {
            self.thickness / self.angle.to_radians().sin()
        } else {
            self.thickness
        }
    }
}

/// Stacking lip settings, in multiples of thickness except the angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackableSettings {
    /// Inclination of the lip flanks in degrees
    pub angle: f64,
    /// Height of the lip
    pub height: f64,
    /// Length of the flat part at each end
    pub width: f64,
    /// Distance from the lip to the finger holes of the floor
    pub hole_distance: f64,
}

impl Default for StackableSettings {
    fn default() -> Self {
        Self {
            angle: 60.0,
            height: 2.0,
            width: 4.0,
            hole_distance: 1.0,
        }
    }
}

impl StackableSettings {
    /// Clearance reserved above a stacking lip: half a wall plus the hole
    /// distance.
    pub fn bottom_offset(&self, thickness: f64) -> f64 {
        0.5 * thickness + self.hole_distance * thickness
    }
}

/// Geometry of the sloped retainer profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontSettings {
    /// Fraction of the sloped length covered by the 45 degree face.
    pub front: f64,
    /// Length the slope is laid out over; sets the margin.
    pub span: f64,
    /// Straight run drawn after the profile (outer walls only).
    pub inset: f64,
}

impl FrontSettings {
    /// Front fractions outside `[0, MAX_FRONT_FRACTION]` are clamped.
    pub fn new(front: f64, span: f64) -> Self {
        let clamped = front.clamp(0.0, MAX_FRONT_FRACTION);
        if clamped != front {
            warn!(front, clamped, "front fraction clamped");
        }
        Self {
            front: clamped,
            span,
            inset: 0.0,
        }
    }

    pub fn with_inset(self, inset: f64) -> Self {
        Self { inset, ..self }
    }

    /// Angle of the sloped run against the edge, in degrees.
    pub fn slope_angle(&self) -> f64 {
        (self.front / (1.0 - self.front)).atan().to_degrees()
    }
}
