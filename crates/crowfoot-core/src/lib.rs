//! Crowfoot Core Types and Definitions
//!
//! This crate provides the foundational types for the Crowfoot ERD tooling.
//! It includes:
//!
//! - **Identifiers**: Efficient string-interned entity names ([`identifier::EntityName`])
//! - **Relations**: Directed entity relations and ordered sets ([`relation`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Semantic**: Semantic model types such as layout direction ([`semantic`] module)
//! - **Draw**: The drawing-collaborator contract ([`draw`] module)

pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod relation;
pub mod semantic;
