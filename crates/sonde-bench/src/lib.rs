//! Shared fixtures for the Sonde benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use chrono::{TimeZone, Utc};

use sonde_core::{CrsId, DatasetRef, Geometry, ObservationRecord, ObservationValue, TimePeriod};
use sonde_encode::definitions;
use sonde_encode::schema::{NamedNode, RecordSchema, SchemaNode, SimpleField, VectorSchema};
use sonde_geom::AxisOrderPolicy;

/// The reference result structure: time, identifiers, geometry, value.
pub fn reference_schema() -> SchemaNode {
    let field = |name: &str, definition: &str| NamedNode {
        name: name.into(),
        node: SchemaNode::Field(SimpleField {
            definition: Some(definition.into()),
            unit: None,
        }),
    };
    SchemaNode::Record(RecordSchema {
        definition: None,
        fields: vec![
            field("phenomenonTime", definitions::PHENOMENON_TIME),
            field("procedure", definitions::PROCEDURE),
            field("featureOfInterest", definitions::FEATURE_OF_INTEREST),
            NamedNode {
                name: "geometry".into(),
                node: SchemaNode::Vector(VectorSchema {
                    definition: Some(definitions::SAMPLING_GEOMETRY.into()),
                    reference_frame: Some(CrsId::WGS84),
                    coordinates: vec![
                        field("Latitude", definitions::NORTHING),
                        field("Longitude", definitions::EASTING),
                    ],
                }),
            },
            field("temperature", "urn:temp"),
        ],
    })
}

/// The reference axis-order policy: WGS 84 storage, northing-first.
pub fn reference_policy() -> AxisOrderPolicy {
    AxisOrderPolicy::new([CrsId::WGS84, CrsId(4258)], CrsId::WGS84, true)
}

/// `n` records one minute apart, every fourth one a two-level profile.
pub fn reference_records(n: usize) -> Vec<ObservationRecord> {
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            let mut record = ObservationRecord::new(DatasetRef {
                procedure: "urn:procedure:ctd".into(),
                feature_of_interest: format!("urn:feature:station-{}", i % 8),
                observed_property: "urn:temp".into(),
            });
            record.phenomenon_time =
                TimePeriod::instant(epoch + chrono::TimeDelta::seconds(i as i64 * 60));
            record.sampling_geometry =
                Some(Geometry::point(CrsId::WGS84, 52.0 + i as f64 * 0.001, 7.0));
            record.value = Some(ObservationValue::Quantity(10.0 + i as f64 * 0.25));
            if i % 4 == 0 {
                record.levels = (0..2)
                    .map(|level| {
                        let mut child = record.clone();
                        child.levels = Vec::new();
                        child.value = Some(ObservationValue::Quantity(4.0 + f64::from(level)));
                        child
                    })
                    .collect();
            }
            record
        })
        .collect()
}
