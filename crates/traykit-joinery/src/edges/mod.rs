//! Edge capabilities.
//!
//! An edge draws one side of a panel with the turtle, starting at the side's
//! start corner heading along the side and finishing at its end corner with
//! the same heading. Panels are traversed counter-clockwise, so a right turn
//! leaves the nominal rectangle and a left turn cuts into the panel.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use traykit_core::PathBuilder;

use crate::context::GenerationContext;
use crate::error::{JoineryError, JoineryResult};
use crate::settings::FrontSettings;

mod finger;
mod front;
mod slotted;
mod stackable;
mod straight;

pub use finger::{FingerJointEdge, FingerLayout};
pub use front::FrontEdge;
pub use slotted::SlottedEdge;
pub use stackable::StackableEdge;
pub use straight::StraightEdge;

/// Joint angle of the angled finger joints (`g`, `G`).
pub const ANGLED_JOINT_ANGLE: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Straight,
    FingerMale,
    FingerFemale,
    AngledMale,
    AngledFemale,
    StackableTop,
    StackableBottom,
    FrontInner,
    FrontOuter,
    /// Built per panel from a slot layout; has no single-character code.
    Slotted,
}

impl EdgeKind {
    pub const ALL_CODED: [EdgeKind; 9] = [
        EdgeKind::Straight,
        EdgeKind::FingerMale,
        EdgeKind::FingerFemale,
        EdgeKind::AngledMale,
        EdgeKind::AngledFemale,
        EdgeKind::StackableTop,
        EdgeKind::StackableBottom,
        EdgeKind::FrontInner,
        EdgeKind::FrontOuter,
    ];

    pub fn code(&self) -> Option<char> {
        match self {
            EdgeKind::Straight => Some('e'),
            EdgeKind::FingerMale => Some('f'),
            EdgeKind::FingerFemale => Some('F'),
            EdgeKind::AngledMale => Some('g'),
            EdgeKind::AngledFemale => Some('G'),
            EdgeKind::StackableTop => Some('S'),
            EdgeKind::StackableBottom => Some('š'),
            EdgeKind::FrontInner => Some('B'),
            EdgeKind::FrontOuter => Some('b'),
            EdgeKind::Slotted => None,
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL_CODED
            .into_iter()
            .find(|kind| kind.code() == Some(code))
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{}", code),
            None => write!(f, "slotted"),
        }
    }
}

pub trait Edge: fmt::Debug + Send + Sync {
    fn kind(&self) -> EdgeKind;

    /// Draws the profile over `length`, ending with the starting heading.
    fn draw(&self, path: &mut PathBuilder, length: f64);

    /// How far the profile reaches outside the nominal side.
    fn margin(&self) -> f64 {
        0.0
    }

    /// Shortest side the profile fits on.
    fn min_length(&self) -> f64 {
        0.0
    }

    /// Side length the edge was laid out for, if it only fits one.
    fn fixed_length(&self) -> Option<f64> {
        None
    }
}

/// Shared edge instances keyed by kind, built once per generation run.
#[derive(Debug, Clone, Default)]
pub struct EdgeTable {
    edges: HashMap<EdgeKind, Arc<dyn Edge>>,
}

impl EdgeTable {
    /// Straight, finger joint and stacking lip edges.
    pub fn standard(ctx: &GenerationContext) -> Self {
        let mut table = Self::default();
        table.insert(Arc::new(StraightEdge));
        table.insert(Arc::new(FingerJointEdge::male(ctx.finger)));
        table.insert(Arc::new(FingerJointEdge::female(ctx.finger)));
        table.insert(Arc::new(StackableEdge::top(ctx.thickness, &ctx.stackable)));
        table.insert(Arc::new(StackableEdge::bottom(ctx.thickness, &ctx.stackable)));
        table
    }

    /// Adds the angled finger joints (`g`, `G`).
    pub fn with_angled(mut self, ctx: &GenerationContext, angle: f64) -> Self {
        let settings = ctx.finger.with_angle(angle);
        self.insert(Arc::new(FingerJointEdge::angled_male(settings)));
        self.insert(Arc::new(FingerJointEdge::angled_female(settings)));
        self
    }

    /// Adds the sloped retainer edges; `b` gets a straight run of
    /// `outer_inset` after its profile.
    pub fn with_front(
        mut self,
        ctx: &GenerationContext,
        front: FrontSettings,
        outer_inset: f64,
    ) -> Self {
        self.insert(Arc::new(FrontEdge::inner(front, ctx.finger)));
        self.insert(Arc::new(FrontEdge::outer(
            front.with_inset(outer_inset),
            ctx.finger,
        )));
        self
    }

    pub fn insert(&mut self, edge: Arc<dyn Edge>) {
        self.edges.insert(edge.kind(), edge);
    }

    pub fn get(&self, kind: EdgeKind) -> Option<Arc<dyn Edge>> {
        self.edges.get(&kind).cloned()
    }

    pub fn resolve(&self, code: char, label: &str) -> JoineryResult<Arc<dyn Edge>> {
        EdgeKind::from_code(code)
            .and_then(|kind| self.get(kind))
            .ok_or_else(|| JoineryError::UnknownEdge {
                code,
                label: label.to_string(),
            })
    }

    /// Resolves a four character code string, bottom, right, top, left.
    pub fn resolve_codes(&self, codes: &str, label: &str) -> JoineryResult<[Arc<dyn Edge>; 4]> {
        let chars: Vec<char> = codes.chars().collect();
        let [bottom, right, top, left] = chars.as_slice() else {
            return Err(JoineryError::InvalidParameters(format!(
                "panel '{}' needs four edge codes, got '{}'",
                label, codes
            )));
        };
        Ok([
            self.resolve(*bottom, label)?,
            self.resolve(*right, label)?,
            self.resolve(*top, label)?,
            self.resolve(*left, label)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{FingerJointSettings, StackableSettings};

    fn ctx() -> GenerationContext {
        GenerationContext::new(
            3.0,
            &FingerJointSettings::default(),
            StackableSettings::default(),
        )
    }

    #[test]
    fn test_codes_round_trip() {
        for kind in EdgeKind::ALL_CODED {
            let code = kind.code().unwrap();
            assert_eq!(EdgeKind::from_code(code), Some(kind));
        }
        assert_eq!(EdgeKind::from_code('x'), None);
        assert_eq!(EdgeKind::Slotted.code(), None);
        assert_eq!(EdgeKind::StackableBottom.to_string(), "š");
        assert_eq!(EdgeKind::Slotted.to_string(), "slotted");
    }

    #[test]
    fn test_standard_table() {
        let ctx = ctx();
        let table = EdgeTable::standard(&ctx);
        for code in ['e', 'f', 'F', 'S', 'š'] {
            let edge = table.resolve(code, "test").unwrap();
            assert_eq!(edge.kind().code(), Some(code));
        }
        assert!(table.get(EdgeKind::AngledMale).is_none());
        assert!(table.get(EdgeKind::FrontInner).is_none());
    }

    #[test]
    fn test_extended_table() {
        let ctx = ctx();
        let table = EdgeTable::standard(&ctx)
            .with_angled(&ctx, ANGLED_JOINT_ANGLE)
            .with_front(&ctx, FrontSettings::new(0.4, 95.5), 4.5);
        let edges = table.resolve_codes("gGBb", "test").unwrap();
        assert_eq!(edges[0].kind(), EdgeKind::AngledMale);
        assert_eq!(edges[3].kind(), EdgeKind::FrontOuter);
    }

    #[test]
    fn test_unknown_code() {
        let ctx = ctx();
        let table = EdgeTable::standard(&ctx);
        match table.resolve_codes("FSbš", "left") {
            Err(JoineryError::UnknownEdge { code, label }) => {
                assert_eq!(code, 'b');
                assert_eq!(label, "left");
            }
            other => panic!("expected unknown edge, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_code_count() {
        let ctx = ctx();
        let table = EdgeTable::standard(&ctx);
        assert!(matches!(
            table.resolve_codes("FF", "x"),
            Err(JoineryError::InvalidParameters(_))
        ));
    }
}
