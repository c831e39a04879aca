//! Text plan surface.
//!
//! [`PlanSurface`] records the operations the orchestration layer performs as
//! deterministic text lines, one per operation:
//!
//! ```text
//! node CUSTOMER (0, 0)
//! node ORDER (-200, 0)
//! edge ORDER -> CUSTOMER
//! ```
//!
//! Node lines are emitted once per distinct entity, at its first placement;
//! later placements of the same node are ignored. This mirrors the
//! incremental-drawing guarantee the ordering exists to provide: a node that
//! is already on the surface never moves.

use indexmap::IndexMap;

use crowfoot_core::{draw::Surface, geometry::Point};

/// Handle to a node recorded on a [`PlanSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanNode(usize);

/// A [`Surface`] implementation that serializes operations as text.
#[derive(Debug, Default)]
pub struct PlanSurface {
    /// Entity name to node handle, in creation order.
    nodes: IndexMap<String, PlanNode>,
    /// Nodes that already received a position.
    placed: Vec<bool>,
    /// Accumulated plan lines in operation order.
    lines: Vec<String>,
}

impl PlanSurface {
    /// Creates an empty plan surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct nodes recorded so far.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consumes the surface and returns the plan text.
    ///
    /// Lines appear in operation order with a trailing newline; an empty plan
    /// is the empty string.
    pub fn into_plan(self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut plan = self.lines.join("\n");
        plan.push('\n');
        plan
    }

    fn name(&self, node: PlanNode) -> &str {
        self.nodes
            .get_index(node.0)
            .map(|(name, _)| name.as_str())
            .unwrap_or("")
    }
}

impl Surface for PlanSurface {
    type Node = PlanNode;

    fn ensure_node(&mut self, name: &str) -> PlanNode {
        if let Some(node) = self.nodes.get(name) {
            return *node;
        }
        let node = PlanNode(self.nodes.len());
        self.nodes.insert(name.to_string(), node);
        self.placed.push(false);
        node
    }

    fn place_node(&mut self, node: PlanNode, position: Point) {
        if self.placed.get(node.0).copied().unwrap_or(true) {
            return;
        }
        self.placed[node.0] = true;
        let line = format!(
            "node {} ({}, {})",
            self.name(node),
            position.x(),
            position.y()
        );
        self.lines.push(line);
    }

    fn connect(&mut self, from: PlanNode, to: PlanNode) {
        let line = format!("edge {} -> {}", self.name(from), self.name(to));
        self.lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_node_is_idempotent_per_name() {
        let mut surface = PlanSurface::new();
        let a = surface.ensure_node("A");
        let b = surface.ensure_node("B");
        assert_eq!(a, surface.ensure_node("A"));
        assert_ne!(a, b);
        assert_eq!(surface.node_count(), 2);
    }

    #[test]
    fn first_placement_wins() {
        let mut surface = PlanSurface::new();
        let a = surface.ensure_node("A");
        surface.place_node(a, Point::new(0.0, 0.0));
        surface.place_node(a, Point::new(100.0, 100.0));
        assert_eq!(surface.into_plan(), "node A (0, 0)\n");
    }

    #[test]
    fn plan_lines_follow_operation_order() {
        let mut surface = PlanSurface::new();
        let a = surface.ensure_node("A");
        surface.place_node(a, Point::new(0.0, 0.0));
        let b = surface.ensure_node("B");
        surface.place_node(b, Point::new(-200.0, 0.0));
        surface.connect(a, b);

        assert_eq!(
            surface.into_plan(),
            "node A (0, 0)\nnode B (-200, 0)\nedge A -> B\n"
        );
    }

    #[test]
    fn empty_plan_is_empty_string() {
        assert_eq!(PlanSurface::new().into_plan(), "");
    }
}
