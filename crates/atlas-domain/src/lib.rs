//! Classical Atlas Domain Layer
//!
//! This crate contains the normalized data model for the Pleiades gazetteer.
//! It has no external dependencies and defines the places, locations and names
//! that every other crate in the workspace produces or consumes.
//!
//! ## Key Concepts
//!
//! - **Place**: An abstract, conceptual locus of human attention
//! - **Location**: A spatial/temporal instantiation of a place
//! - **Name**: An attested textual designation of a place
//! - **Attestation**: A (time period, confidence) pair from the sources
//! - **Association certainty**: How sure the gazetteer is that a location or
//!   name belongs to its place
//! - **Connection**: A documented relationship to another place, held by id
//!
//! ## Ownership
//!
//! A `Place` owns its locations and names outright. Connections only store the
//! target place id plus cached display metadata; resolving them is left to the
//! corpus index and the graph collaborator behind [`traits::GraphSink`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attestation;
pub mod certainty;
pub mod connection;
pub mod coordinate;
pub mod location;
pub mod name;
pub mod place;
pub mod traits;

// Re-exports for convenience
pub use attestation::Attestation;
pub use certainty::{AssociationCertainty, UNKNOWN_CERTAINTY};
pub use connection::Connection;
pub use coordinate::Coordinate;
pub use location::{Location, LocationType};
pub use name::Name;
pub use place::{LocationEntry, NameEntry, Place, EARLIEST_DATE_SENTINEL, LATEST_DATE_SENTINEL};
