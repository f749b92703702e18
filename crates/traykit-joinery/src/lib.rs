//! # traykit Joinery
//!
//! Cutting layouts for trays assembled from flat panels with finger joints.
//!
//! - **Settings**: finger joint, stacking lip and sloped front settings
//! - **Edges**: the profiles drawn along a panel side, keyed by edge kind
//! - **Holes**: finger hole rows for panels that slot through each other
//! - **Panel Renderer**: walks a panel's four edges and places the result
//! - **Stackable Tray**: the complete tray design
//! - **Export**: SVG and laser G-code writers

pub mod context;
pub mod cursor;
pub mod edges;
pub mod error;
pub mod export;
pub mod holes;
pub mod panel;
pub mod settings;
pub mod stackable_tray;

pub use context::GenerationContext;
pub use cursor::{Direction, LayoutCursor, Move};
pub use edges::{Edge, EdgeKind, EdgeTable};
pub use error::{JoineryError, JoineryResult, ParameterError, ParameterResult};
pub use export::GcodeOptions;
pub use holes::{divider_centerlines, section_offsets, FingerHoleRow};
pub use panel::{Panel, PanelPath, PanelRenderer};
pub use settings::{FingerJointSettings, FrontSettings, JointSettings, StackableSettings};
pub use stackable_tray::{StackableTray, TrayDimensions, TrayLayout, TrayParameters};
