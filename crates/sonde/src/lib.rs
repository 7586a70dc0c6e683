//! Sonde: schema-driven observation result encoding.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Sonde sub-crates. For most users, adding `sonde` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use sonde::prelude::*;
//! use sonde::encode::definitions;
//! use sonde::encode::schema::{NamedNode, RecordSchema, SchemaNode, SimpleField};
//!
//! // A two-column result structure: sampling time and temperature.
//! let schema = SchemaNode::Record(RecordSchema {
//!     definition: None,
//!     fields: vec![
//!         NamedNode {
//!             name: "phenomenonTime".into(),
//!             node: SchemaNode::Field(SimpleField {
//!                 definition: Some(definitions::PHENOMENON_TIME.into()),
//!                 unit: None,
//!             }),
//!         },
//!         NamedNode {
//!             name: "temperature".into(),
//!             node: SchemaNode::Field(SimpleField {
//!                 definition: Some("http://example.org/property/temperature".into()),
//!                 unit: Some("degC".into()),
//!             }),
//!         },
//!     ],
//! });
//!
//! // One record sampled at a known instant.
//! let mut record = ObservationRecord::new(DatasetRef {
//!     procedure: "thermometer-1".into(),
//!     feature_of_interest: "station-a".into(),
//!     observed_property: "http://example.org/property/temperature".into(),
//! });
//! record.phenomenon_time =
//!     TimePeriod::instant(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
//! record.value = Some(ObservationValue::Quantity(21.5));
//!
//! let policy = AxisOrderPolicy::new([CrsId::WGS84], CrsId::WGS84, true);
//! let encoder = ResultEncoder::new(policy);
//! let encoded = encoder
//!     .encode(&[record], &schema, &EncodingConfig::default())
//!     .unwrap();
//! assert_eq!(encoded, "1;2024-01-01T00:00:00Z,21.5");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `sonde-core` | Records, values, geometry data, time, errors |
//! | [`geom`] | `sonde-geom` | Axis-order policy, WKT, the projection trait |
//! | [`encode`] | `sonde-encode` | Schema tree, resolver, result encoder |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data model. The main types are re-exported in the [`prelude`].
pub use sonde_core as core;

/// Geometry operations and the axis-order policy.
pub use sonde_geom as geom;

/// Schema resolution and result encoding.
pub use sonde_encode as encode;

/// The types most applications need.
///
/// ```
/// use sonde::prelude::*;
/// ```
pub mod prelude {
    pub use sonde_core::{
        Coordinate, CrsId, DatasetRef, EncodeError, Geometry, ObservationRecord,
        ObservationValue, ParameterValue, SchemaError, Shape, TimePeriod, TransformError,
        VerticalExtent,
    };

    pub use sonde_geom::{switch_axis_order, to_wkt, AxisOrderPolicy, CrsProjection};

    pub use sonde_encode::{EncodingConfig, ResultEncoder, SchemaNode, Slot};
}
