//! Writers for rendered panels.

pub mod gcode;
pub mod svg;

pub use gcode::{write_gcode, GcodeOptions};
pub use svg::write_svg;
