//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the domain model and the
//! collaborators that consume it. Implementations live outside this crate.

use crate::{Connection, Place};

/// Receiver for a place network
///
/// Implemented by the graph-assembly collaborator. The corpus calls
/// `add_node` once per place and `add_edge` once per connection whose target
/// is part of the same corpus.
pub trait GraphSink {
    /// Error type for graph operations
    type Error;

    /// Add a place as a node
    fn add_node(&mut self, place: &Place) -> Result<(), Self::Error>;

    /// Add a directed edge between two places already added as nodes
    fn add_edge(
        &mut self,
        from_id: &str,
        to_id: &str,
        connection: &Connection,
    ) -> Result<(), Self::Error>;
}
