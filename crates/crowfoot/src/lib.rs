//! Crowfoot - crow's-foot ERD text to a deterministic incremental draw order.
//!
//! Parsing, ordering, and draw planning for text-based entity-relationship
//! diagrams. Relationship lines in a crow's-foot dialect are extracted into a
//! deduplicated set of directed relations, ordered so the diagram can be
//! drawn incrementally without moving already-placed nodes, and handed to a
//! host drawing collaborator through the [`draw::Surface`] trait.

pub mod config;
pub mod export;
pub mod order;

mod error;

pub use crowfoot_core::{draw, geometry, identifier, relation, semantic};

pub use error::CrowfootError;

use log::{debug, info, trace};

use crowfoot_core::draw::Surface;
use crowfoot_core::relation::{Relation, RelationSet};

use config::AppConfig;
use export::plan::PlanSurface;

/// Builder for parsing, ordering, and draw-planning ERD diagrams.
///
/// # Examples
///
/// ```rust
/// use crowfoot::{DiagramBuilder, config::AppConfig};
///
/// let source = "CUSTOMER ||--o{ ORDER : places";
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let relations = builder.parse(source);
/// let ordered = builder.order(relations);
/// assert_eq!(ordered.len(), 1);
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse ERD source text into a deduplicated relation set.
    ///
    /// Total: lines that match neither crow's-foot fragment are skipped, and
    /// unparseable input yields an empty set rather than an error.
    pub fn parse(&self, source: &str) -> RelationSet {
        info!("Parsing diagram source");
        let relations = crowfoot_parser::parse(source);
        debug!(count = relations.len(); "Diagram parsed");
        relations
    }

    /// Compute the draw order for a relation set.
    ///
    /// Returns a permutation of the input as defined by the peel ordering:
    /// at each step, the relations whose source is the least-referenced
    /// remaining entity come next. See [`order::draw_order`].
    pub fn order(&self, relations: RelationSet) -> Vec<Relation> {
        info!(count = relations.len(); "Ordering relations");
        let ordered = order::draw_order(relations);
        trace!(ordered:?; "Computed draw order");
        ordered
    }

    /// Walk the ordered relations, materializing them on a drawing surface.
    ///
    /// For each relation, the source node is ensured and placed, then the
    /// target node, then the connector between them. Positions step by the
    /// configured spacings: sources move down the vertical axis, targets are
    /// offset horizontally in the configured direction. Whether a surface
    /// honors repeated placements of the same node is its own choice; the
    /// order of calls is the only guarantee this layer provides.
    pub fn draw<S: Surface>(&self, ordered: &[Relation], surface: &mut S) {
        let layout = self.config.layout();
        let origin = layout.origin();
        let sign = layout.direction().horizontal_sign();

        info!(count = ordered.len(); "Drawing ordered relations");

        for (i, relation) in ordered.iter().enumerate() {
            let step = i as f32;
            trace!(relation:%, index = i; "Materializing relation");

            let from = surface.ensure_node(&relation.from().to_string());
            surface.place_node(from, origin.translate(0.0, layout.vertical_spacing() * step));

            let to = surface.ensure_node(&relation.to().to_string());
            surface.place_node(
                to,
                origin.translate(
                    sign * layout.horizontal_spacing() * (step + 1.0),
                    layout.vertical_spacing() * step,
                ),
            );

            surface.connect(from, to);
        }
    }

    /// Run the full pipeline and return the plan text.
    ///
    /// Convenience for parse, order, and draw onto a [`PlanSurface`].
    pub fn plan(&self, source: &str) -> String {
        let relations = self.parse(source);
        let ordered = self.order(relations);

        let mut surface = PlanSurface::new();
        self.draw(&ordered, &mut surface);
        surface.into_plan()
    }
}
