//! Semantic model types shared between the core pipeline and configuration.

use serde::Deserialize;

/// Horizontal direction in which a diagram is built out.
///
/// The ordering algorithm always emits relations for incremental drawing; the
/// direction only controls which way the orchestration layer steps target
/// nodes when assigning positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Build the diagram from right to left (target nodes step leftward).
    #[default]
    RightToLeft,
    /// Build the diagram from left to right (target nodes step rightward).
    LeftToRight,
}

impl Direction {
    /// Sign applied to horizontal offsets when stepping target nodes.
    pub fn horizontal_sign(self) -> f32 {
        match self {
            Direction::RightToLeft => -1.0,
            Direction::LeftToRight => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_direction_is_right_to_left() {
        assert_eq!(Direction::default(), Direction::RightToLeft);
    }

    #[test]
    fn signs_oppose() {
        assert_eq!(Direction::RightToLeft.horizontal_sign(), -1.0);
        assert_eq!(Direction::LeftToRight.horizontal_sign(), 1.0);
    }
}
