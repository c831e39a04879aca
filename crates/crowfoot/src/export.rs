//! Exporters for computed draw plans.
//!
//! The core hands ordered relations to a drawing collaborator; exporters in
//! this module are collaborator implementations that serialize the resulting
//! operations instead of drawing them on a host canvas.

pub mod plan;
