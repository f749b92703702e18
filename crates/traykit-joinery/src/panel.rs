//! Panel renderer.
//!
//! A panel is a rectangle with an edge on each side, walked counter-clockwise
//! from the lower-left corner: bottom, right, top, left. Outlines and holes
//! are drawn in panel-local coordinates with the nominal corner at the
//! origin; the layout cursor only decides the placement.

use std::sync::Arc;

use tracing::debug;
use traykit_core::{Bounds, Contour, PathBuilder, Point};

use crate::context::GenerationContext;
use crate::cursor::{LayoutCursor, Move};
use crate::edges::Edge;
use crate::error::{JoineryError, JoineryResult, ParameterError};
use crate::holes::FingerHoleRow;

/// Side lengths may differ from a slot layout by this much.
const LENGTH_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone)]
pub struct Panel {
    pub label: String,
    pub width: f64,
    pub height: f64,
    /// Bottom, right, top, left.
    pub edges: [Arc<dyn Edge>; 4],
    pub holes: Vec<FingerHoleRow>,
    pub movement: Move,
}

impl Panel {
    pub fn new(label: impl Into<String>, width: f64, height: f64, edges: [Arc<dyn Edge>; 4]) -> Self {
        Self {
            label: label.into(),
            width,
            height,
            edges,
            holes: Vec::new(),
            movement: Move::STAY,
        }
    }

    pub fn with_holes(self, holes: Vec<FingerHoleRow>) -> Self {
        Self { holes, ..self }
    }

    pub fn with_move(self, movement: Move) -> Self {
        Self { movement, ..self }
    }

    /// Nominal length of each side, in drawing order.
    pub fn side_lengths(&self) -> [f64; 4] {
        [self.width, self.height, self.width, self.height]
    }

    /// Size of the box the panel occupies including edge margins.
    pub fn bounding_size(&self) -> (f64, f64) {
        let [bottom, right, top, left] = &self.edges;
        (
            left.margin() + self.width + right.margin(),
            bottom.margin() + self.height + top.margin(),
        )
    }

    fn validate(&self) -> JoineryResult<()> {
        if !(self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0)
        {
            return Err(ParameterError::InvalidDimensions(format!(
                "panel '{}' is {} x {} mm",
                self.label, self.width, self.height
            ))
            .into());
        }

        for (edge, length) in self.edges.iter().zip(self.side_lengths()) {
            if let Some(expected) = edge.fixed_length() {
                if (expected - length).abs() > LENGTH_TOLERANCE {
                    return Err(JoineryError::LayoutMismatch {
                        label: self.label.clone(),
                        expected,
                        length,
                    });
                }
            }
            let min = edge.min_length();
            if length < min {
                return Err(JoineryError::EdgeTooShort {
                    kind: edge.kind(),
                    label: self.label.clone(),
                    length,
                    min,
                });
            }
        }
        Ok(())
    }
}

/// Finished geometry of one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPath {
    pub label: String,
    pub width: f64,
    pub height: f64,
    pub outline: Contour,
    pub holes: Vec<Contour>,
    /// Translation from panel-local coordinates to the canvas.
    pub placement: Point,
}

impl PanelPath {
    /// Outline followed by holes, in local coordinates.
    pub fn contours(&self) -> impl Iterator<Item = &Contour> {
        std::iter::once(&self.outline).chain(self.holes.iter())
    }

    /// Outline followed by holes, on the canvas.
    pub fn placed_contours(&self) -> Vec<Contour> {
        self.contours()
            .map(|c| c.translated(self.placement))
            .collect()
    }

    pub fn local_bounds(&self) -> Bounds {
        self.contours()
            .fold(Bounds::empty(), |acc, c| acc.union(&c.bounds()))
    }

    pub fn placed_bounds(&self) -> Bounds {
        self.local_bounds().translate(self.placement)
    }
}

pub struct PanelRenderer<'a> {
    ctx: &'a GenerationContext,
    cursor: LayoutCursor,
}

impl<'a> PanelRenderer<'a> {
    pub fn new(ctx: &'a GenerationContext) -> Self {
        Self {
            ctx,
            cursor: LayoutCursor::new(ctx.spacing),
        }
    }

    pub fn cursor(&self) -> &LayoutCursor {
        &self.cursor
    }

    /// Renders a panel and advances the cursor. Panels with an `only` move
    /// reserve their space and produce nothing.
    pub fn render(&mut self, panel: &Panel) -> JoineryResult<Option<PanelPath>> {
        panel.validate()?;

        let (box_width, box_height) = panel.bounding_size();
        let Some(cell) = self.cursor.place(panel.movement, box_width, box_height) else {
            debug!(label = %panel.label, movement = %panel.movement, "panel space reserved");
            return Ok(None);
        };

        let outline = draw_outline(panel)?;
        let mut holes = Vec::new();
        for row in &panel.holes {
            holes.extend(row.contours(&self.ctx.finger)?);
        }

        let [bottom, _, _, left] = &panel.edges;
        let placement = cell + Point::new(left.margin(), bottom.margin());

        debug!(
            label = %panel.label,
            width = panel.width,
            height = panel.height,
            holes = holes.len(),
            x = placement.x,
            y = placement.y,
            "rendered panel"
        );

        Ok(Some(PanelPath {
            label: panel.label.clone(),
            width: panel.width,
            height: panel.height,
            outline,
            holes,
            placement,
        }))
    }
}

fn draw_outline(panel: &Panel) -> JoineryResult<Contour> {
    let mut path = PathBuilder::new();
    for (edge, length) in panel.edges.iter().zip(panel.side_lengths()) {
        edge.draw(&mut path, length);
        path.corner(90.0, 0.0);
    }
    Ok(path.close()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Direction;
    use crate::edges::{EdgeKind, EdgeTable, SlottedEdge};
    use crate::settings::{FingerJointSettings, StackableSettings};

    fn ctx() -> GenerationContext {
        GenerationContext::new(
            3.0,
            &FingerJointSettings::default(),
            StackableSettings::default(),
        )
    }

    fn panel(ctx: &GenerationContext, codes: &str, width: f64, height: f64) -> Panel {
        let table = EdgeTable::standard(ctx);
        Panel::new("test", width, height, table.resolve_codes(codes, "test").unwrap())
    }

    #[test]
    fn test_plain_rectangle() {
        let ctx = ctx();
        let mut renderer = PanelRenderer::new(&ctx);
        let path = renderer
            .render(&panel(&ctx, "eeee", 40.0, 20.0))
            .unwrap()
            .unwrap();
        assert_eq!(path.outline.commands().len(), 5);
        assert!(path.holes.is_empty());
        assert_eq!(path.placement, Point::ORIGIN);
        let bounds = path.local_bounds();
        assert!((bounds.width() - 40.0).abs() < 1e-9);
        assert!((bounds.height() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_margins_shift_placement() {
        let ctx = ctx();
        let mut renderer = PanelRenderer::new(&ctx);
        let p = panel(&ctx, "ffff", 100.0, 60.0);
        assert_eq!(p.bounding_size(), (106.0, 66.0));
        let path = renderer.render(&p).unwrap().unwrap();
        assert_eq!(path.placement, Point::new(3.0, 3.0));
        let placed = path.placed_bounds();
        assert!(placed.min.x.abs() < 1e-9);
        assert!(placed.min.y.abs() < 1e-9);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let ctx = ctx();
        let mut renderer = PanelRenderer::new(&ctx);
        let p = panel(&ctx, "FSfš", 100.0, 80.0)
            .with_holes(vec![FingerHoleRow::vertical(50.0, 0.0, 80.0)])
            .with_move(Move::to(Direction::Right));
        let first = renderer.render(&p).unwrap().unwrap();
        let second = renderer.render(&p).unwrap().unwrap();
        assert_eq!(first.outline, second.outline);
        assert_eq!(first.holes, second.holes);
        assert_ne!(first.placement, second.placement);
    }

    #[test]
    fn test_only_move_draws_nothing() {
        let ctx = ctx();
        let mut renderer = PanelRenderer::new(&ctx);
        let p = panel(&ctx, "eeee", 10.0, 10.0).with_move("up only".parse().unwrap());
        assert!(renderer.render(&p).unwrap().is_none());
        assert_eq!(renderer.cursor().position(), Point::new(0.0, 11.5));
    }

    #[test]
    fn test_invalid_dimensions() {
        let ctx = ctx();
        let mut renderer = PanelRenderer::new(&ctx);
        let p = panel(&ctx, "eeee", 0.0, 10.0);
        assert!(matches!(
            renderer.render(&p),
            Err(JoineryError::Parameter(ParameterError::InvalidDimensions(_)))
        ));
        let p = panel(&ctx, "eeee", f64::NAN, 10.0);
        assert!(renderer.render(&p).is_err());
    }

    #[test]
    fn test_stacking_lip_needs_room() {
        let ctx = ctx();
        let mut renderer = PanelRenderer::new(&ctx);
        let p = panel(&ctx, "eSee", 40.0, 30.0);
        match renderer.render(&p) {
            Err(JoineryError::EdgeTooShort { kind, length, .. }) => {
                assert_eq!(kind, EdgeKind::StackableTop);
                assert_eq!(length, 30.0);
            }
            other => panic!("expected EdgeTooShort, got {:?}", other),
        }
    }

    #[test]
    fn test_slot_layout_must_match_side() {
        let ctx = ctx();
        let table = EdgeTable::standard(&ctx);
        let straight = table.resolve('e', "test").unwrap();
        let slotted: Arc<dyn Edge> =
            Arc::new(SlottedEdge::new(vec![50.0, 50.0], 3.0, straight.clone()));
        let p = Panel::new(
            "bottom",
            100.0,
            50.0,
            [slotted, straight.clone(), straight.clone(), straight],
        );
        let mut renderer = PanelRenderer::new(&ctx);
        assert!(matches!(
            renderer.render(&p),
            Err(JoineryError::LayoutMismatch { expected, .. }) if expected == 103.0
        ));
    }
}
