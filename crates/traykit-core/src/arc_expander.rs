//! Arc Expander
//!
//! Converts arc commands to linear segments, for writers and controllers
//! without native arc support.

use crate::geometry::Point;

/// Arc expansion configuration
#[derive(Debug, Clone)]
pub struct ArcExpanderConfig {
    /// Maximum segment length
    pub segment_length: f64,
    /// Minimum number of segments per arc
    pub num_segments: usize,
}

impl Default for ArcExpanderConfig {
    fn default() -> Self {
        Self {
            segment_length: 0.5,
            num_segments: 8,
        }
    }
}

/// Converts arc commands to line segments
#[derive(Debug, Clone)]
pub struct ArcExpander {
    config: ArcExpanderConfig,
}

impl ArcExpander {
    /// Create a new arc expander
    pub fn new(config: ArcExpanderConfig) -> Self {
        Self { config }
    }

    /// Expand an arc into line segments.
    ///
    /// Returns the intermediate points and the exact end point, but not the
    /// start point. `sweep` is in degrees, positive counter-clockwise.
    pub fn expand_arc(&self, start: Point, end: Point, center: Point, sweep: f64) -> Vec<Point> {
        let radius = start.distance(&center);
        let start_angle = (start.y - center.y).atan2(start.x - center.x);
        let sweep_rad = sweep.to_radians();

        let arc_length = radius * sweep_rad.abs();
        let by_length = if self.config.segment_length > 0.0 {
            (arc_length / self.config.segment_length).ceil() as usize
        } else {
            0
        };
        let num_segments = by_length.max(self.config.num_segments).max(1);

        let mut segments = Vec::with_capacity(num_segments);
        for i in 1..num_segments {
            let fraction = i as f64 / num_segments as f64;
            let angle = start_angle + sweep_rad * fraction;
            segments.push(Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }
        segments.push(end);

        segments
    }
}

impl Default for ArcExpander {
    fn default() -> Self {
        Self::new(ArcExpanderConfig::default())
    }
}
