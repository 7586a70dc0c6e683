//! Geometry operations for Sonde: CRS axis-order policy, axis
//! switching, WKT rendering, and the projection trait seam.
//!
//! The data types themselves ([`Geometry`](sonde_core::Geometry) and
//! friends) live in `sonde-core`; this crate owns every operation over
//! them. Nothing here mutates its input: axis switching and projection
//! return fresh geometries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod projection;
pub mod wkt;

pub use axis::{switch_axis_order, AxisOrderPolicy};
pub use projection::CrsProjection;
pub use wkt::to_wkt;
