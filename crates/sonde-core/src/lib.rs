//! Core data model for the Sonde observation encoding library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the entities shared across the Sonde workspace: CRS identifiers,
//! geometry value types, observation records, time types, and the
//! error enums surfaced by encoding and axis-order operations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod id;
pub mod record;
pub mod time;

pub use error::{EncodeError, SchemaError, TransformError};
pub use geometry::{Coordinate, Geometry, Shape};
pub use id::CrsId;
pub use record::{
    DatasetRef, ObservationRecord, ObservationValue, ParameterValue, VerticalExtent,
};
pub use time::{format_instant, TimePeriod};
