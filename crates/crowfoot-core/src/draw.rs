//! The drawing-collaborator contract.
//!
//! The core never draws anything itself. It guarantees an order in which
//! entities and connectors should be materialized; an implementation of
//! [`Surface`] supplied by the host performs the actual drawing. Canvas
//! specifics such as shape construction, fonts, and viewport handling live
//! entirely behind this trait.

use crate::geometry::Point;

/// A host drawing surface consumed by the orchestration layer.
///
/// Implementations must make [`ensure_node`](Surface::ensure_node) idempotent
/// per distinct name within one drawing session: repeated calls with the same
/// name return a handle to the same visual node, so each entity is
/// materialized exactly once no matter how many relations mention it.
pub trait Surface {
    /// Handle to a visual node on this surface.
    type Node: Copy;

    /// Returns the node for `name`, creating it on first use.
    fn ensure_node(&mut self, name: &str) -> Self::Node;

    /// Assigns an absolute position to a node.
    fn place_node(&mut self, node: Self::Node, position: Point);

    /// Creates a directed connector between two nodes.
    fn connect(&mut self, from: Self::Node, to: Self::Node);
}
