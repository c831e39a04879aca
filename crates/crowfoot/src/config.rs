//! Configuration types for Crowfoot draw planning.
//!
//! This module provides configuration structures that control how ordered
//! relations are turned into node placements. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Example
//!
//! ```
//! # use crowfoot::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().horizontal_spacing(), 200.0);
//! ```

use serde::Deserialize;

use crowfoot_core::{geometry::Point, semantic::Direction};

/// Spacing applied between consecutive node placements, matching the step the
/// original incremental layout used.
const DEFAULT_SPACING: f32 = 200.0;

fn default_spacing() -> f32 {
    DEFAULT_SPACING
}

/// Top-level application configuration.
///
/// Currently groups a single [`LayoutConfig`] section; kept as a root type so
/// configuration files have a stable shape as sections are added.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout configuration.
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

/// Placement configuration for the orchestration layer.
///
/// Controls the direction the diagram grows in and the spacing between
/// consecutively placed nodes. Exact geometry is a free choice of this layer;
/// the ordering guarantees themselves never depend on these values.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal build [`Direction`] for target nodes.
    #[serde(default)]
    direction: Direction,

    /// Horizontal distance between a source node and its stepped targets.
    #[serde(default = "default_spacing")]
    horizontal_spacing: f32,

    /// Vertical distance between consecutive source placements.
    #[serde(default = "default_spacing")]
    vertical_spacing: f32,

    /// X coordinate of the first placed node.
    #[serde(default)]
    origin_x: f32,

    /// Y coordinate of the first placed node.
    #[serde(default)]
    origin_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            horizontal_spacing: DEFAULT_SPACING,
            vertical_spacing: DEFAULT_SPACING,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

impl LayoutConfig {
    /// Returns the horizontal build direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the horizontal spacing between placements.
    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    /// Returns the vertical spacing between placements.
    pub fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }

    /// Returns the origin point for the first placement.
    pub fn origin(&self) -> Point {
        Point::new(self.origin_x, self.origin_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_incremental_step() {
        let config = AppConfig::default();
        assert_eq!(config.layout().horizontal_spacing(), 200.0);
        assert_eq!(config.layout().vertical_spacing(), 200.0);
        assert_eq!(config.layout().direction(), Direction::RightToLeft);
        assert_eq!(config.layout().origin(), Point::new(0.0, 0.0));
    }
}
