//! Per-run generation context.

use crate::settings::{FingerJointSettings, JointSettings, StackableSettings};

/// Immutable values shared by every panel of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationContext {
    pub thickness: f64,
    pub finger: JointSettings,
    pub stackable: StackableSettings,
    /// Gap left between panels on the output canvas.
    pub spacing: f64,
}

impl GenerationContext {
    pub fn new(thickness: f64, finger: &FingerJointSettings, stackable: StackableSettings) -> Self {
        Self {
            thickness,
            finger: JointSettings::resolve(thickness, finger),
            stackable,
            spacing: 0.5 * thickness,
        }
    }

    pub fn with_spacing(self, spacing: f64) -> Self {
        Self { spacing, ..self }
    }

    pub fn bottom_offset(&self) -> f64 {
        self.stackable.bottom_offset(self.thickness)
    }
}
