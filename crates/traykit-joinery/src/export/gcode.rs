//! G-code writer for laser cutters.

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use traykit_core::{ArcExpander, Bounds, Contour, PathCommand, Point};

use crate::panel::PanelPath;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcodeOptions {
    pub laser_passes: u32,
    pub laser_power: u32,
    /// Feed rate in mm/min
    pub feed_rate: f64,
    /// Z lowered per pass
    pub z_step_down: f64,
    /// Minimum X of the emitted coordinates
    pub offset_x: f64,
    /// Minimum Y of the emitted coordinates
    pub offset_y: f64,
    /// Emit arcs as G1 segments instead of G2/G3
    pub expand_arcs: bool,
    /// Home the machine before cutting
    pub home: bool,
    pub safe_z: f64,
}

impl Default for GcodeOptions {
    fn default() -> Self {
        Self {
            laser_passes: 3,
            laser_power: 1000,
            feed_rate: 500.0,
            z_step_down: 0.5,
            offset_x: 10.0,
            offset_y: 10.0,
            expand_arcs: false,
            home: true,
            safe_z: 5.0,
        }
    }
}

/// Writes every panel contour, `header` lines first as comments.
pub fn write_gcode(panels: &[PanelPath], header: &[String], options: &GcodeOptions) -> String {
    let mut gcode = String::new();

    for line in header {
        if line.is_empty() {
            gcode.push_str(";\n");
        } else {
            let _ = writeln!(gcode, "; {}", line);
        }
    }
    gcode.push_str(";\n");

    gcode.push_str("; Initialization\n");
    gcode.push_str("G21 ; Set units to millimeters\n");
    gcode.push_str("G90 ; Absolute positioning\n");
    gcode.push_str("G17 ; XY plane selection\n\n");

    if options.home {
        gcode.push_str("; Home and set work coordinate system\n");
        gcode.push_str("$H ; Home all axes\n");
        gcode.push_str("G10 L2 P1 X0 Y0 Z0 ; Clear G54 offset\n");
        gcode.push_str("G54 ; Select work coordinate system 1\n");
    }
    let _ = writeln!(
        gcode,
        "G0 Z{:.2} F{:.0} ; Move to safe height\n",
        options.safe_z, options.feed_rate
    );

    // Shift so the minimum XY lands on the configured offset.
    let bounds = panels
        .iter()
        .fold(Bounds::empty(), |acc, p| acc.union(&p.placed_bounds()));
    let shift = if bounds.is_empty() {
        Point::ORIGIN
    } else {
        Point::new(options.offset_x - bounds.min.x, options.offset_y - bounds.min.y)
    };

    let expander = ArcExpander::default();
    for (i, panel) in panels.iter().enumerate() {
        let _ = writeln!(gcode, "; Panel {}: {}", i + 1, panel.label);
        for contour in panel.placed_contours() {
            let contour = contour.translated(shift);
            write_contour(&mut gcode, &contour, options, &expander);
        }
        gcode.push('\n');
    }

    gcode.push_str("M5 ; Ensure laser off\n");
    let _ = writeln!(gcode, "G0 Z{:.2} ; Move to safe height", options.safe_z);
    gcode.push_str("G0 X0 Y0 ; Return to origin\n");
    gcode.push_str("M2 ; Program end\n");

    gcode
}

fn write_contour(gcode: &mut String, contour: &Contour, options: &GcodeOptions, expander: &ArcExpander) {
    let start = contour.start();
    let _ = writeln!(gcode, "G0 X{:.3} Y{:.3} ; Rapid to start", start.x, start.y);

    let passes = options.laser_passes.max(1);
    for pass in 1..=passes {
        let z_depth = -(pass as f64 - 1.0) * options.z_step_down;
        let _ = writeln!(gcode, "; Pass {}/{} at Z{:.2}", pass, passes, z_depth);
        if pass > 1 {
            let _ = writeln!(gcode, "G0 Z{:.2} ; Move to pass depth", z_depth);
        }

        let _ = writeln!(gcode, "M3 S{} ; Laser on", options.laser_power);
        let _ = writeln!(gcode, "G1 F{:.0}", options.feed_rate);

        let mut current = start;
        for cmd in contour.commands().iter().skip(1) {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    let _ = writeln!(gcode, "G0 X{:.3} Y{:.3}", p.x, p.y);
                }
                PathCommand::LineTo(p) => {
                    let _ = writeln!(gcode, "G1 X{:.3} Y{:.3}", p.x, p.y);
                }
                PathCommand::ArcTo {
                    end, center, sweep, ..
                } => {
                    if options.expand_arcs {
                        for p in expander.expand_arc(current, end, center, sweep) {
                            let _ = writeln!(gcode, "G1 X{:.3} Y{:.3}", p.x, p.y);
                        }
                    } else {
                        let code = if sweep > 0.0 { "G3" } else { "G2" };
                        let _ = writeln!(
                            gcode,
                            "{} X{:.3} Y{:.3} I{:.3} J{:.3}",
                            code,
                            end.x,
                            end.y,
                            center.x - current.x,
                            center.y - current.y
                        );
                    }
                }
            }
            current = cmd.end_point();
        }

        gcode.push_str("M5 ; Laser off\n");

        if pass < passes {
            let _ = writeln!(gcode, "G0 X{:.3} Y{:.3} ; Return to start", start.x, start.y);
        }
    }
}
