//! Schema-driven observation result encoding.
//!
//! The encoder renders a collection of observation records into a flat,
//! delimiter-separated text matrix. Column order is derived from a
//! recursively nested schema tree by the field-order resolver; each
//! column ("slot") is rendered by the encoder matching its semantic
//! definition; spatial slots consult the CRS axis-order policy from
//! `sonde-geom` to place northing and easting correctly.
//!
//! # Quick start
//!
//! ```
//! use sonde_core::CrsId;
//! use sonde_encode::{definitions, EncodingConfig, ResultEncoder};
//! use sonde_encode::schema::{NamedNode, RecordSchema, SchemaNode, SimpleField};
//! use sonde_geom::AxisOrderPolicy;
//!
//! let schema = SchemaNode::Record(RecordSchema {
//!     definition: None,
//!     fields: vec![NamedNode {
//!         name: "phenomenonTime".into(),
//!         node: SchemaNode::Field(SimpleField {
//!             definition: Some(definitions::PHENOMENON_TIME.into()),
//!             unit: None,
//!         }),
//!     }],
//! });
//!
//! let policy = AxisOrderPolicy::new([CrsId::WGS84], CrsId::WGS84, true);
//! let encoder = ResultEncoder::new(policy);
//! let encoded = encoder.encode(&[], &schema, &EncodingConfig::default()).unwrap();
//! assert!(encoded.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod definitions;
pub mod encode;
pub mod resolve;
pub mod schema;

mod encoders;

pub use config::EncodingConfig;
pub use encode::{ResultEncoder, MAX_PROFILE_DEPTH};
pub use resolve::{resolve, Slot};
pub use schema::{ArraySchema, NamedNode, RecordSchema, SchemaNode, SimpleField, VectorSchema};
