//! Finger joint edges.

use traykit_core::PathBuilder;

use super::{Edge, EdgeKind};
use crate::settings::JointSettings;

/// Finger/space widths and end leftover actually drawn on one side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerLayout {
    pub fingers: usize,
    pub finger: f64,
    pub space: f64,
    pub leftover: f64,
}

impl FingerLayout {
    /// Layout of a side of `length`. The female side widens the notches by
    /// the play and takes it from the spaces and the leftover.
    pub fn new(settings: &JointSettings, length: f64, female: bool) -> Self {
        let (fingers, mut leftover) = settings.calc_fingers(length);
        let mut finger = settings.finger;
        let mut space = settings.space;

        // Adjust for play
        if female && fingers > 0 {
            finger += settings.play;
            space -= settings.play;
            leftover -= settings.play;
        }

        Self {
            fingers,
            finger,
            space,
            leftover,
        }
    }

    /// Offsets of the finger starts along the side.
    pub fn finger_starts(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.fingers).map(move |i| self.leftover / 2.0 + i as f64 * (self.finger + self.space))
    }
}

/// Finger joint along a side. Male fingers stick out of the panel, the
/// female side cuts matching notches into it.
#[derive(Debug, Clone, Copy)]
pub struct FingerJointEdge {
    kind: EdgeKind,
    settings: JointSettings,
    male: bool,
}

impl FingerJointEdge {
    pub fn male(settings: JointSettings) -> Self {
        Self {
            kind: EdgeKind::FingerMale,
            settings,
            male: true,
        }
    }

    pub fn female(settings: JointSettings) -> Self {
        Self {
            kind: EdgeKind::FingerFemale,
            settings,
            male: false,
        }
    }

    pub fn angled_male(settings: JointSettings) -> Self {
        Self {
            kind: EdgeKind::AngledMale,
            ..Self::male(settings)
        }
    }

    pub fn angled_female(settings: JointSettings) -> Self {
        Self {
            kind: EdgeKind::AngledFemale,
            ..Self::female(settings)
        }
    }

    pub fn settings(&self) -> &JointSettings {
        &self.settings
    }

    pub fn depth(&self) -> f64 {
        if self.male {
            self.settings.finger_depth() + self.settings.extra_length
        } else {
            self.settings.finger_depth()
        }
    }

    pub fn layout(&self, length: f64) -> FingerLayout {
        FingerLayout::new(&self.settings, length, !self.male)
    }
}

impl Edge for FingerJointEdge {
    fn kind(&self) -> EdgeKind {
        self.kind
    }

    fn draw(&self, path: &mut PathBuilder, length: f64) {
        let layout = self.layout(length);
        let depth = self.depth();

        if layout.fingers == 0 {
            path.line_forward(length);
            return;
        }

        // Male fingers turn outward (right) first, female notches inward.
        let turn = if self.male { -90.0 } else { 90.0 };

        path.line_forward(layout.leftover / 2.0);
        for i in 0..layout.fingers {
            if i > 0 {
                path.line_forward(layout.space);
            }
            path.polyline(&[0.0, turn, depth, -turn, layout.finger, -turn, depth, turn]);
        }
        path.line_forward(layout.leftover / 2.0);
    }

    fn margin(&self) -> f64 {
        if self.male {
            self.depth()
        } else {
            0.0
        }
    }
}
