//! # traykit Core
//!
//! Geometry primitives shared by the traykit crates:
//!
//! - **Geometry**: points, turtle poses and bounding boxes
//! - **Path**: absolute path commands grouped into closed contours
//! - **Turtle**: the relative-move path builder edges draw with
//! - **Arc Expander**: arc to line-segment conversion for writers

pub mod arc_expander;
pub mod error;
pub mod geometry;
pub mod path;
pub mod turtle;

pub use arc_expander::{ArcExpander, ArcExpanderConfig};
pub use error::{GeometryError, GeometryResult};
pub use geometry::{Bounds, Point, Pose};
pub use path::{Contour, PathCommand};
pub use turtle::{PathBuilder, CLOSE_TOLERANCE, TURN_TOLERANCE};
