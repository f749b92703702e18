//! Type definitions for the stackable tray

use std::f64::consts::SQRT_2;

use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterResult};
use crate::settings::{FingerJointSettings, StackableSettings, MAX_FRONT_FRACTION};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrayParameters {
    /// Section widths along x, left to right
    pub sx: Vec<f64>,
    /// Depth of the tray
    pub y: f64,
    /// Height of the tray
    pub h: f64,
    /// Inner depth used for the dividers instead of `y`
    pub hi: Option<f64>,
    pub thickness: f64,
    /// Treat `sx`, `y` and `h` as outside dimensions
    pub outside: bool,
    /// Fraction of the depth covered by the sloped front
    pub front: f64,
    pub finger_joint: FingerJointSettings,
    pub stackable: StackableSettings,
}

impl Default for TrayParameters {
    fn default() -> Self {
        Self {
            sx: vec![50.0, 50.0],
            y: 100.0,
            h: 100.0,
            hi: None,
            thickness: 3.0,
            outside: false,
            front: 0.4,
            finger_joint: FingerJointSettings {
                surrounding_spaces: 0.5,
                ..Default::default()
            },
            stackable: StackableSettings::default(),
        }
    }
}

fn out_of_range(name: &str, value: f64, min: f64, max: f64) -> ParameterError {
    ParameterError::OutOfRange {
        name: name.to_string(),
        value,
        min,
        max,
    }
}

fn positive(name: &str, value: f64) -> ParameterResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidDimensions(format!(
            "{} must be positive, got {}",
            name, value
        )))
    }
}

impl TrayParameters {
    pub fn validate(&self) -> ParameterResult<()> {
        if self.sx.is_empty() {
            return Err(ParameterError::InvalidValue {
                name: "sx".to_string(),
                reason: "slot layout must not be empty".to_string(),
            });
        }
        for width in &self.sx {
            positive("sx section", *width)?;
        }
        positive("y", self.y)?;
        positive("h", self.h)?;
        if let Some(hi) = self.hi {
            positive("hi", hi)?;
            if hi > self.y {
                return Err(ParameterError::InvalidDimensions(format!(
                    "hi ({}) must not exceed y ({})",
                    hi, self.y
                )));
            }
        }

        if !(1.0..=20.0).contains(&self.thickness) {
            return Err(out_of_range("thickness", self.thickness, 1.0, 20.0));
        }
        if !(0.0..=1.0).contains(&self.front) {
            return Err(out_of_range("front", self.front, 0.0, 1.0));
        }

        let fj = &self.finger_joint;
        if !(fj.finger + fj.space).is_finite() || (fj.finger + fj.space).abs() < 0.1 {
            return Err(ParameterError::InvalidValue {
                name: "finger_joint".to_string(),
                reason: "finger + space must not be close to zero".to_string(),
            });
        }
        for (name, value) in [
            ("finger", fj.finger),
            ("space", fj.space),
            ("surrounding_spaces", fj.surrounding_spaces),
            ("play", fj.play),
            ("extra_length", fj.extra_length),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: format!("must be a non-negative number, got {}", value),
                });
            }
        }

        let st = &self.stackable;
        if !(st.angle > 0.0 && st.angle < 90.0) {
            return Err(out_of_range("stackable.angle", st.angle, 0.0, 90.0));
        }
        for (name, value) in [
            ("stackable.height", st.height),
            ("stackable.width", st.width),
            ("stackable.hole_distance", st.hole_distance),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ParameterError::InvalidValue {
                    name: name.to_string(),
                    reason: format!("must be a non-negative number, got {}", value),
                });
            }
        }
        if st.height <= 0.0 {
            return Err(ParameterError::InvalidValue {
                name: "stackable.height".to_string(),
                reason: "lip height must be positive".to_string(),
            });
        }

        Ok(())
    }
}

/// Sizes derived from the parameters, in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrayDimensions {
    /// Inner section widths
    pub sections: Vec<f64>,
    /// Inner width: sections plus the walls between them
    pub x: f64,
    pub y: f64,
    pub h: f64,
    pub thickness: f64,
    /// Clearance above the stacking lip
    pub bottom_offset: f64,
    /// Length of the dividers and of the slope
    pub yi: f64,
    /// Height of the dividers
    pub divider_height: f64,
    /// Front fraction after clamping
    pub front: f64,
    pub retainer_height: f64,
}

impl TrayDimensions {
    pub fn resolve(params: &TrayParameters) -> ParameterResult<Self> {
        params.validate()?;

        let t = params.thickness;
        let mut sections = params.sx.clone();
        let mut y = params.y;
        let mut h = params.h;

        if params.outside {
            let total: f64 = sections.iter().sum();
            let inner = total - (sections.len() as f64 + 1.0) * t;
            if inner <= 0.0 {
                return Err(ParameterError::InvalidDimensions(format!(
                    "outside width {} leaves no room for {} walls",
                    total,
                    sections.len() + 1
                )));
            }
            let factor = inner / total;
            for width in sections.iter_mut() {
                *width *= factor;
            }
            y -= 2.0 * t;
            h -= t;
            positive("inner y", y)?;
            positive("inner h", h)?;
        }

        let x = sections.iter().sum::<f64>() + t * (sections.len() as f64 - 1.0);
        let bottom_offset = params.stackable.bottom_offset(t);
        let yi = params.hi.unwrap_or(y) - bottom_offset;
        if yi <= 0.0 {
            return Err(ParameterError::InvalidDimensions(format!(
                "depth {} leaves no room above the {} mm stacking lip",
                params.hi.unwrap_or(y),
                bottom_offset
            )));
        }
        let front = params.front.min(MAX_FRONT_FRACTION);

        Ok(Self {
            sections,
            x,
            y,
            h,
            thickness: t,
            bottom_offset,
            yi,
            divider_height: h,
            front,
            retainer_height: yi * front * SQRT_2,
        })
    }

    /// Straight run after the slope on the outer walls.
    pub fn outer_inset(&self) -> f64 {
        self.y - self.yi
    }

    /// A flat front has no slope for a retainer to sit on.
    pub fn has_retainer(&self) -> bool {
        self.retainer_height > 0.0
    }
}
