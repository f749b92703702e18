//! SVG writer.
//!
//! Each panel becomes a `<g>` with its label as `<title>` and one stroked
//! path per contour. Coordinates are millimetres; y is flipped so the
//! drawing is upright in the SVG screen frame.

use std::fmt::Write;

use traykit_core::{Bounds, Contour, PathCommand, Point};

use crate::panel::PanelPath;

const STROKE_WIDTH: f64 = 0.1;

pub fn write_svg(panels: &[PanelPath]) -> String {
    let bounds = panels
        .iter()
        .fold(Bounds::empty(), |acc, p| acc.union(&p.placed_bounds()));
    let (width, height) = (bounds.width(), bounds.height());
    // Map canvas coordinates into the SVG frame: origin at the top-left.
    let to_svg = |p: Point| Point::new(p.x - bounds.min.x, bounds.max.y - p.y);

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.3}mm\" height=\"{h:.3}mm\" viewBox=\"0 0 {w:.3} {h:.3}\">",
        w = width,
        h = height
    );

    for panel in panels {
        svg.push_str("  <g>\n");
        let _ = writeln!(svg, "    <title>{}</title>", escape(&panel.label));
        for contour in panel.placed_contours() {
            let _ = writeln!(
                svg,
                "    <path d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"{}\"/>",
                path_data(&contour, &to_svg),
                STROKE_WIDTH
            );
        }
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

fn path_data(contour: &Contour, to_svg: &impl Fn(Point) -> Point) -> String {
    let mut d = String::new();
    for cmd in contour.commands() {
        if !d.is_empty() {
            d.push(' ');
        }
        match *cmd {
            PathCommand::MoveTo(p) => {
                let p = to_svg(p);
                let _ = write!(d, "M {:.3} {:.3}", p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                let p = to_svg(p);
                let _ = write!(d, "L {:.3} {:.3}", p.x, p.y);
            }
            PathCommand::ArcTo {
                end, radius, sweep, ..
            } => {
                let p = to_svg(end);
                let large_arc = u8::from(sweep.abs() > 180.0);
                // Counter-clockwise in y-up is clockwise on screen.
                let sweep_flag = u8::from(sweep > 0.0);
                let _ = write!(
                    d,
                    "A {r:.3} {r:.3} 0 {} {} {:.3} {:.3}",
                    large_arc,
                    sweep_flag,
                    p.x,
                    p.y,
                    r = radius
                );
            }
        }
    }
    d.push_str(" Z");
    d
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
