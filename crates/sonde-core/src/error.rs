//! Error types for schema resolution, encoding, and CRS operations.
//!
//! Missing values are not represented here: a record that lacks a value
//! for a slot resolves locally to the configured placeholder or an
//! empty token and never aborts an encode call. These enums cover the
//! structural failures that do.

use std::error::Error;
use std::fmt;

use crate::id::CrsId;

/// A schema tree failed validation before any encoding began.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// Two children of one record share a name.
    DuplicateFieldName {
        /// Definition of the owning record, or `"<anonymous>"`.
        record: String,
        /// The duplicated child name.
        name: String,
    },
    /// A vector slot was resolved but its schema declares no components.
    EmptyVectorComponents {
        /// Definition of the offending vector.
        definition: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFieldName { record, name } => {
                write!(f, "record '{record}' declares field '{name}' twice")
            }
            Self::EmptyVectorComponents { definition } => {
                write!(f, "vector '{definition}' has no coordinate components")
            }
        }
    }
}

impl Error for SchemaError {}

/// A CRS transformation inside the axis-order policy failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// The projection capability rejected the transformation.
    ProjectionFailed {
        /// CRS the geometry was expressed in.
        from: CrsId,
        /// CRS the geometry was being projected to.
        to: CrsId,
        /// Description from the projection capability.
        reason: String,
    },
    /// The projection capability does not know the CRS.
    UnknownCrs {
        /// The unrecognized identifier.
        crs: CrsId,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProjectionFailed { from, to, reason } => {
                write!(f, "projection {from} -> {to} failed: {reason}")
            }
            Self::UnknownCrs { crs } => write!(f, "unknown CRS {crs}"),
        }
    }
}

impl Error for TransformError {}

/// An encode call aborted. Partial output is discarded, never returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// The schema failed validation.
    Schema(SchemaError),
    /// A slot definition matches no known encoder and has no fallback.
    UnsupportedDefinition {
        /// The definition that could not be dispatched.
        definition: String,
    },
    /// A geometry transformation failed while rendering a spatial slot.
    Transform(TransformError),
    /// Profile levels nest deeper than the supported bound.
    ProfileDepthExceeded {
        /// The configured maximum nesting depth.
        max: usize,
    },
    /// The encoding configuration is unusable.
    InvalidConfig {
        /// What is wrong with it.
        reason: String,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(err) => write!(f, "schema validation failed: {err}"),
            Self::UnsupportedDefinition { definition } => {
                write!(f, "no encoder for definition '{definition}'")
            }
            Self::Transform(err) => write!(f, "geometry transform failed: {err}"),
            Self::ProfileDepthExceeded { max } => {
                write!(f, "profile levels nest deeper than {max}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid encoding config: {reason}"),
        }
    }
}

impl Error for EncodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Schema(err) => Some(err),
            Self::Transform(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SchemaError> for EncodeError {
    fn from(err: SchemaError) -> Self {
        Self::Schema(err)
    }
}

impl From<TransformError> for EncodeError {
    fn from(err: TransformError) -> Self {
        Self::Transform(err)
    }
}
