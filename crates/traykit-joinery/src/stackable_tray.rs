//! Stackable Tray
//!
//! A tray with stacking lips on the side walls, a row of sections divided by
//! inner walls and a sloped retainer in front so parts can be grabbed out of
//! a tray that sits in a shelf.

pub mod types;

use std::sync::Arc;

use tracing::info;
use traykit_core::Bounds;

pub use self::types::{TrayDimensions, TrayParameters};
use crate::context::GenerationContext;
use crate::cursor::{Direction, Move};
use crate::edges::{Edge, EdgeKind, EdgeTable, SlottedEdge, ANGLED_JOINT_ANGLE};
use crate::error::{JoineryError, JoineryResult};
use crate::export::{self, GcodeOptions};
use crate::holes::{divider_centerlines, section_offsets, FingerHoleRow};
use crate::panel::{Panel, PanelPath, PanelRenderer};
use crate::settings::FrontSettings;

pub struct StackableTray {
    params: TrayParameters,
    dims: TrayDimensions,
    ctx: GenerationContext,
}

impl StackableTray {
    pub fn new(params: TrayParameters) -> JoineryResult<Self> {
        let dims = TrayDimensions::resolve(&params)?;
        let ctx = GenerationContext::new(
            params.thickness,
            &params.finger_joint,
            params.stackable.clone(),
        );
        Ok(Self { params, dims, ctx })
    }

    pub fn parameters(&self) -> &TrayParameters {
        &self.params
    }

    pub fn dimensions(&self) -> &TrayDimensions {
        &self.dims
    }

    pub fn context(&self) -> &GenerationContext {
        &self.ctx
    }

    pub fn edge_table(&self) -> EdgeTable {
        let front = FrontSettings::new(self.dims.front, self.dims.yi);
        EdgeTable::standard(&self.ctx)
            .with_angled(&self.ctx, ANGLED_JOINT_ANGLE)
            .with_front(&self.ctx, front, self.dims.outer_inset())
    }

    fn slotted(&self, table: &EdgeTable, sections: Vec<f64>, inner: EdgeKind) -> JoineryResult<Arc<dyn Edge>> {
        let inner = table.get(inner).ok_or_else(|| {
            JoineryError::InvalidParameters(format!("edge '{}' is not registered", inner))
        })?;
        Ok(Arc::new(SlottedEdge::new(sections, self.dims.thickness, inner)))
    }

    /// Vertical hole rows where the dividers meet a panel.
    fn divider_holes(&self, y: f64, length: f64) -> Vec<FingerHoleRow> {
        divider_centerlines(&self.dims.sections, self.dims.thickness)
            .into_iter()
            .map(|x| FingerHoleRow::vertical(x, y, length))
            .collect()
    }

    /// Panels in placement order.
    pub fn panels(&self) -> JoineryResult<Vec<Panel>> {
        let d = &self.dims;
        let table = self.edge_table();
        let f = || table.resolve('f', "tray");
        let sections = d.sections.clone();
        let reversed: Vec<f64> = sections.iter().rev().copied().collect();

        let mut panels = Vec::with_capacity(5 + sections.len());

        // outer walls
        panels.push(
            Panel::new(
                "bottom",
                d.x,
                d.h,
                [
                    self.slotted(&table, sections.clone(), EdgeKind::FingerMale)?,
                    f()?,
                    if d.has_retainer() {
                        self.slotted(&table, reversed, EdgeKind::AngledFemale)?
                    } else {
                        table.resolve('e', "bottom")?
                    },
                    f()?,
                ],
            )
            .with_holes(self.divider_holes(0.0, d.h))
            .with_move(Move::to(Direction::Right)),
        );

        let side_holes = vec![FingerHoleRow::vertical(d.bottom_offset, 0.0, d.h)];
        panels.push(
            Panel::new("left", d.y, d.h, table.resolve_codes("FSbš", "left")?)
                .with_holes(side_holes.clone())
                .with_move(Move::to(Direction::Up)),
        );
        panels.push(
            Panel::new("right", d.y, d.h, table.resolve_codes("FSbš", "right")?)
                .with_holes(side_holes),
        );

        let mut back_holes = self.divider_holes(d.bottom_offset, d.yi);
        back_holes.extend(
            section_offsets(&sections, d.thickness)
                .into_iter()
                .zip(&sections)
                .map(|(x, width)| FingerHoleRow::horizontal(x, d.bottom_offset, *width)),
        );
        panels.push(
            Panel::new("back", d.x, d.y, table.resolve_codes("šfSf", "back")?)
                .with_holes(back_holes)
                .with_move(Move::to(Direction::Left)),
        );

        panels.push(
            Panel::new("spacer", d.y, d.h, table.resolve_codes("FFBF", "spacer")?)
                .with_move(Move::only(Direction::Up)),
        );

        // front wall; a flat front leaves the tray open
        if d.has_retainer() {
            panels.push(
                Panel::new(
                    "retainer",
                    d.x,
                    d.retainer_height,
                    [
                        self.slotted(&table, sections.clone(), EdgeKind::AngledMale)?,
                        table.resolve('F', "retainer")?,
                        table.resolve('e', "retainer")?,
                        table.resolve('F', "retainer")?,
                    ],
                )
                .with_holes(self.divider_holes(0.0, d.retainer_height))
                .with_move(Move::to(Direction::Up)),
            );
        }

        // inner walls
        for i in 1..sections.len() {
            let label = format!("inner vertical {}", i);
            let edges = table.resolve_codes("feBf", &label)?;
            panels.push(
                Panel::new(label, d.yi, d.divider_height, edges).with_move(Move::to(Direction::Up)),
            );
        }

        Ok(panels)
    }

    /// Renders every panel. Nothing is returned unless all panels succeed.
    pub fn generate(&self) -> JoineryResult<TrayLayout> {
        let plan = self.panels()?;
        let mut renderer = PanelRenderer::new(&self.ctx);
        let mut panels = Vec::with_capacity(plan.len());
        for panel in &plan {
            if let Some(path) = renderer.render(panel)? {
                panels.push(path);
            }
        }

        info!(
            panels = panels.len(),
            sections = self.dims.sections.len(),
            x = self.dims.x,
            y = self.dims.y,
            h = self.dims.h,
            "generated stackable tray"
        );

        Ok(TrayLayout {
            parameters: self.params.clone(),
            dimensions: self.dims.clone(),
            panels,
        })
    }
}

/// Rendered panels of one tray, in placement order.
#[derive(Debug, Clone)]
pub struct TrayLayout {
    pub parameters: TrayParameters,
    pub dimensions: TrayDimensions,
    pub panels: Vec<PanelPath>,
}

impl TrayLayout {
    pub fn panel(&self, label: &str) -> Option<&PanelPath> {
        self.panels.iter().find(|p| p.label == label)
    }

    pub fn bounds(&self) -> Bounds {
        self.panels
            .iter()
            .fold(Bounds::empty(), |acc, p| acc.union(&p.placed_bounds()))
    }

    pub fn to_svg(&self) -> String {
        export::svg::write_svg(&self.panels)
    }

    pub fn to_gcode(&self, options: &GcodeOptions) -> String {
        export::gcode::write_gcode(&self.panels, &self.header(options), options)
    }

    fn header(&self, options: &GcodeOptions) -> Vec<String> {
        let p = &self.parameters;
        let d = &self.dimensions;
        let t = p.thickness;
        let fj = &p.finger_joint;
        let sections: Vec<String> = d.sections.iter().map(|w| format!("{:.3}", w)).collect();

        vec![
            "Stackable Tray G-code".to_string(),
            String::new(),
            "--- Tray Dimensions ---".to_string(),
            format!("Sections: {} mm", sections.join(", ")),
            format!("Dimensions: {:.3}x{:.3}x{:.3} mm", d.x, d.y, d.h),
            format!("Outside Dimensions: {}", p.outside),
            format!("Divider length: {:.3} mm", d.yi),
            format!("Front: {} (slope {:.2} deg)", d.front, FrontSettings::new(d.front, d.yi).slope_angle()),
            format!("Retainer height: {:.3} mm", d.retainer_height),
            String::new(),
            "--- Material Settings ---".to_string(),
            format!("Material thickness: {} mm", t),
            format!("Stacking lip offset: {} mm", d.bottom_offset),
            String::new(),
            "--- Finger Joint Settings ---".to_string(),
            format!("Finger width: {} * thickness = {} mm", fj.finger, fj.finger * t),
            format!("Space width: {} * thickness = {} mm", fj.space, fj.space * t),
            format!("Surrounding spaces: {}", fj.surrounding_spaces),
            format!("Play: {} mm", fj.play * t),
            format!("Extra length: {} mm", fj.extra_length * t),
            String::new(),
            "--- Laser Settings ---".to_string(),
            format!("Laser passes: {}", options.laser_passes),
            format!("Laser power: S{}", options.laser_power),
            format!("Feed rate: {:.0} mm/min", options.feed_rate),
            String::new(),
            "--- Work Origin Offsets ---".to_string(),
            format!("Offset X: {} mm", options.offset_x),
            format!("Offset Y: {} mm", options.offset_y),
        ]
    }
}
