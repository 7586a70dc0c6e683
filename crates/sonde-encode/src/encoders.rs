//! Per-definition slot encoders.
//!
//! Each encoder turns one record + one slot definition into a token.
//! Missing values never abort an encode: identifier slots render the
//! empty token on a miss, time/geometry slots render the configured
//! placeholder, and parameter sub-slots render the empty token unless a
//! vertical-extent alias supplies a bound. Only structural problems
//! (malformed vector schema, undispatchable vector slots) return
//! errors.

use smallvec::SmallVec;

use sonde_core::geometry::Coordinate;
use sonde_core::{
    format_instant, EncodeError, ObservationRecord, ObservationValue, SchemaError,
};
use sonde_geom::{to_wkt, AxisOrderPolicy};

use crate::config::EncodingConfig;
use crate::definitions::{self, axis_kind, AxisKind};
use crate::resolve::resolve_children;
use crate::schema::{SchemaNode, VectorSchema};

/// Shared read-only state for one encode call.
pub(crate) struct EncodeContext<'a> {
    /// Axis-order policy consulted for spatial slots.
    pub policy: &'a AxisOrderPolicy,
    /// The full schema, for recovering sub-trees behind slots.
    pub schema: &'a SchemaNode,
}

/// Render one slot of one record.
pub(crate) fn render_slot(
    record: &ObservationRecord,
    definition: &str,
    config: &EncodingConfig,
    ctx: &EncodeContext<'_>,
) -> Result<String, EncodeError> {
    match definition {
        definitions::PHENOMENON_TIME => Ok(render_phenomenon_time(record, config)),
        definitions::RESULT_TIME => Ok(render_result_time(record, config)),
        definitions::PROCEDURE => Ok(record.dataset.procedure.clone()),
        definitions::FEATURE_OF_INTEREST => Ok(record.dataset.feature_of_interest.clone()),
        definitions::SAMPLING_GEOMETRY => render_sampling_geometry(record, config, ctx),
        definitions::PARAMETERS => render_parameter_block(record, config, ctx),
        other => {
            // Vectors are only renderable as sampling geometry; a vector
            // slot under any other tag has no encoder.
            if let Some(SchemaNode::Vector(_)) = ctx.schema.find_by_definition(other) {
                return Err(EncodeError::UnsupportedDefinition {
                    definition: other.to_string(),
                });
            }
            Ok(render_observed_property(record, other))
        }
    }
}

/// Start absent: placeholder. End absent or equal to start: one
/// instant. Otherwise a slash-separated interval, both ends UTC.
fn render_phenomenon_time(record: &ObservationRecord, config: &EncodingConfig) -> String {
    let period = &record.phenomenon_time;
    match period.start {
        None => config.no_data.clone(),
        Some(start) => match period.end {
            Some(end) if end != start => {
                format!("{}/{}", format_instant(start), format_instant(end))
            }
            _ => format_instant(start),
        },
    }
}

fn render_result_time(record: &ObservationRecord, config: &EncodingConfig) -> String {
    record
        .result_time
        .map(format_instant)
        .unwrap_or_else(|| config.no_data.clone())
}

/// Emit the point's components in the vector's own resolved sub-slot
/// order, axis placement decided by the policy. Every missing piece
/// (no geometry, non-point shape, absent elevation, unclassifiable
/// component) renders the placeholder for that component.
fn render_sampling_geometry(
    record: &ObservationRecord,
    config: &EncodingConfig,
    ctx: &EncodeContext<'_>,
) -> Result<String, EncodeError> {
    let vector = match ctx.schema.find_by_definition(definitions::SAMPLING_GEOMETRY) {
        Some(SchemaNode::Vector(vector)) => vector,
        // Scalar samplingGeometry slot: the whole point as WKT.
        _ => {
            return Ok(record
                .sampling_geometry
                .as_ref()
                .map(to_wkt)
                .unwrap_or_else(|| config.no_data.clone()))
        }
    };

    let sub_slots = resolve_children(&vector.coordinates)?;
    if sub_slots.is_empty() {
        return Err(SchemaError::EmptyVectorComponents {
            definition: definitions::SAMPLING_GEOMETRY.to_string(),
        }
        .into());
    }

    let geometry = record.sampling_geometry.as_ref();
    let point = geometry.and_then(|g| g.shape.as_point());
    let northing_first = geometry.map_or(false, |g| ctx.policy.is_northing_first(g.crs));

    let mut tokens: SmallVec<[String; 4]> = SmallVec::new();
    for slot in &sub_slots {
        let component = component_value(point, northing_first, vector, &slot.definition);
        tokens.push(component.map_or_else(|| config.no_data.clone(), |v| v.to_string()));
    }
    Ok(tokens.join(config.token_separator.as_str()))
}

/// The numeric value for one vector component, or `None` when missing.
fn component_value(
    point: Option<Coordinate>,
    northing_first: bool,
    vector: &VectorSchema,
    definition: &str,
) -> Option<f64> {
    let name = vector
        .coordinates
        .iter()
        .find(|c| c.node.definition() == Some(definition))
        .map(|c| c.name.as_str())
        .unwrap_or_default();
    let point = point?;
    match axis_kind(name, definition)? {
        AxisKind::Northing => Some(if northing_first { point.x } else { point.y }),
        AxisKind::Easting => Some(if northing_first { point.y } else { point.x }),
        AxisKind::Altitude => point.z,
    }
}

/// Resolve the parameter record's own slot order, then look up each
/// definition as a named parameter; a miss falls back to the record's
/// vertical-extent aliases before rendering the empty token.
fn render_parameter_block(
    record: &ObservationRecord,
    config: &EncodingConfig,
    ctx: &EncodeContext<'_>,
) -> Result<String, EncodeError> {
    let fields = match ctx.schema.find_by_definition(definitions::PARAMETERS) {
        Some(SchemaNode::Record(rec)) => &rec.fields,
        _ => return Ok(String::new()),
    };
    let sub_slots = resolve_children(fields)?;

    let mut tokens: Vec<String> = Vec::with_capacity(sub_slots.len());
    for slot in &sub_slots {
        let token = match record.parameter(&slot.definition) {
            Some(value) => value.render(),
            None => vertical_alias(record, &slot.definition).unwrap_or_default(),
        };
        tokens.push(token);
    }
    Ok(tokens.join(config.token_separator.as_str()))
}

fn vertical_alias(record: &ObservationRecord, definition: &str) -> Option<String> {
    let vertical = record.vertical.as_ref()?;
    if vertical.from_name == definition {
        Some(vertical.from.to_string())
    } else if vertical.to_name == definition {
        Some(vertical.to.to_string())
    } else {
        None
    }
}

/// The default encoder: treat the definition as an observed-property
/// identifier. Composite values are searched depth-first for the first
/// sub-record that renders non-empty; otherwise the record's own value
/// is formatted when its observed property matches. Everything else is
/// the empty token.
fn render_observed_property(record: &ObservationRecord, definition: &str) -> String {
    if let Some(ObservationValue::Complex(subs)) = &record.value {
        for sub in subs {
            let rendered = render_observed_property(sub, definition);
            if !rendered.is_empty() {
                return rendered;
            }
        }
        return String::new();
    }
    if record.dataset.observed_property == definition {
        if let Some(value) = &record.value {
            return format_value(value);
        }
    }
    String::new()
}

fn format_value(value: &ObservationValue) -> String {
    match value {
        ObservationValue::Quantity(v) => v.to_string(),
        ObservationValue::Count(v) => v.to_string(),
        ObservationValue::Boolean(v) => v.to_string(),
        ObservationValue::Category(s) | ObservationValue::Text(s) => s.clone(),
        ObservationValue::Geometry(g) => to_wkt(g),
        ObservationValue::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ObservationValue::Array(pre_serialized) => pre_serialized.clone(),
        // Composite values never format directly; they are searched
        // member-wise above.
        ObservationValue::Complex(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonde_core::{CrsId, DatasetRef, Geometry, ParameterValue, TimePeriod, VerticalExtent};
    use sonde_test_utils::{dataset, quantity_record, utc};

    use crate::schema::{NamedNode, RecordSchema, SimpleField};

    fn policy() -> AxisOrderPolicy {
        AxisOrderPolicy::new([CrsId::WGS84], CrsId::WGS84, true)
    }

    fn empty_schema() -> SchemaNode {
        SchemaNode::Record(RecordSchema {
            definition: None,
            fields: vec![],
        })
    }

    fn geometry_schema() -> SchemaNode {
        SchemaNode::Record(RecordSchema {
            definition: None,
            fields: vec![NamedNode {
                name: "geometry".into(),
                node: SchemaNode::Vector(VectorSchema {
                    definition: Some(definitions::SAMPLING_GEOMETRY.into()),
                    reference_frame: Some(CrsId::WGS84),
                    coordinates: vec![
                        NamedNode {
                            name: "Latitude".into(),
                            node: SchemaNode::Field(SimpleField {
                                definition: Some(definitions::NORTHING.into()),
                                unit: Some("deg".into()),
                            }),
                        },
                        NamedNode {
                            name: "Longitude".into(),
                            node: SchemaNode::Field(SimpleField {
                                definition: Some(definitions::EASTING.into()),
                                unit: Some("deg".into()),
                            }),
                        },
                        NamedNode {
                            name: "Altitude".into(),
                            node: SchemaNode::Field(SimpleField {
                                definition: Some(definitions::ALTITUDE.into()),
                                unit: Some("m".into()),
                            }),
                        },
                    ],
                }),
            }],
        })
    }

    fn render(
        record: &ObservationRecord,
        definition: &str,
        config: &EncodingConfig,
        schema: &SchemaNode,
    ) -> String {
        let policy = policy();
        let ctx = EncodeContext {
            policy: &policy,
            schema,
        };
        render_slot(record, definition, config, &ctx).unwrap()
    }

    // ── Time slots ───────────────────────────────────────────

    #[test]
    fn phenomenon_time_interval_and_instant() {
        let config = EncodingConfig::default();
        let schema = empty_schema();
        let mut record = quantity_record("urn:temp", 1.0, utc(2024, 1, 1, 0, 0, 0));

        record.phenomenon_time =
            TimePeriod::between(utc(2024, 1, 1, 0, 0, 0), utc(2024, 1, 1, 1, 0, 0));
        assert_eq!(
            render(&record, definitions::PHENOMENON_TIME, &config, &schema),
            "2024-01-01T00:00:00Z/2024-01-01T01:00:00Z"
        );

        record.phenomenon_time =
            TimePeriod::between(utc(2024, 1, 1, 0, 0, 0), utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(
            render(&record, definitions::PHENOMENON_TIME, &config, &schema),
            "2024-01-01T00:00:00Z"
        );

        record.phenomenon_time = TimePeriod::default();
        assert_eq!(
            render(&record, definitions::PHENOMENON_TIME, &config, &schema),
            "noData"
        );
    }

    #[test]
    fn result_time_placeholder_on_miss() {
        let config = EncodingConfig::default();
        let schema = empty_schema();
        let mut record = quantity_record("urn:temp", 1.0, utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(
            render(&record, definitions::RESULT_TIME, &config, &schema),
            "noData"
        );
        record.result_time = Some(utc(2024, 3, 4, 5, 6, 7));
        assert_eq!(
            render(&record, definitions::RESULT_TIME, &config, &schema),
            "2024-03-04T05:06:07Z"
        );
    }

    // ── Identifier slots ─────────────────────────────────────

    #[test]
    fn identifier_miss_renders_empty_not_placeholder() {
        let config = EncodingConfig::default();
        let schema = empty_schema();
        let record = ObservationRecord::new(DatasetRef::default());
        assert_eq!(render(&record, definitions::PROCEDURE, &config, &schema), "");
        assert_eq!(
            render(&record, definitions::FEATURE_OF_INTEREST, &config, &schema),
            ""
        );
    }

    #[test]
    fn identifier_present_renders_identifier() {
        let config = EncodingConfig::default();
        let schema = empty_schema();
        let record = ObservationRecord::new(dataset("proc-1", "feat-1", "urn:temp"));
        assert_eq!(
            render(&record, definitions::PROCEDURE, &config, &schema),
            "proc-1"
        );
        assert_eq!(
            render(&record, definitions::FEATURE_OF_INTEREST, &config, &schema),
            "feat-1"
        );
    }

    // ── Geometry slot ────────────────────────────────────────

    #[test]
    fn geometry_components_follow_northing_first_crs() {
        let config = EncodingConfig::default();
        let schema = geometry_schema();
        let mut record = quantity_record("urn:temp", 1.0, utc(2024, 1, 1, 0, 0, 0));
        // EPSG:4326 is in the northing-first set: x carries northing.
        record.sampling_geometry = Some(Geometry::point_3d(CrsId::WGS84, 52.9, 7.65, 4.2));
        assert_eq!(
            render(&record, definitions::SAMPLING_GEOMETRY, &config, &schema),
            "52.9,7.65,4.2"
        );
    }

    #[test]
    fn geometry_components_follow_easting_first_crs() {
        let config = EncodingConfig::default();
        let schema = geometry_schema();
        let mut record = quantity_record("urn:temp", 1.0, utc(2024, 1, 1, 0, 0, 0));
        // EPSG:3857 is not in the set: x carries easting.
        record.sampling_geometry = Some(Geometry::point(CrsId(3857), 851_000.0, 6_950_000.0));
        assert_eq!(
            render(&record, definitions::SAMPLING_GEOMETRY, &config, &schema),
            "6950000,851000,noData"
        );
    }

    #[test]
    fn geometry_miss_renders_placeholder_per_component() {
        let config = EncodingConfig::default();
        let schema = geometry_schema();
        let record = quantity_record("urn:temp", 1.0, utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(
            render(&record, definitions::SAMPLING_GEOMETRY, &config, &schema),
            "noData,noData,noData"
        );
    }

    #[test]
    fn vector_without_components_is_a_schema_error() {
        let config = EncodingConfig::default();
        let schema = SchemaNode::Vector(VectorSchema {
            definition: Some(definitions::SAMPLING_GEOMETRY.into()),
            reference_frame: None,
            coordinates: vec![],
        });
        let policy = policy();
        let ctx = EncodeContext {
            policy: &policy,
            schema: &schema,
        };
        let record = quantity_record("urn:temp", 1.0, utc(2024, 1, 1, 0, 0, 0));
        let err = render_slot(&record, definitions::SAMPLING_GEOMETRY, &config, &ctx).unwrap_err();
        assert!(matches!(err, EncodeError::Schema(_)));
    }

    #[test]
    fn vector_slot_under_foreign_tag_is_unsupported() {
        let config = EncodingConfig::default();
        let schema = SchemaNode::Record(RecordSchema {
            definition: None,
            fields: vec![NamedNode {
                name: "wind".into(),
                node: SchemaNode::Vector(VectorSchema {
                    definition: Some("urn:wind-vector".into()),
                    reference_frame: None,
                    coordinates: vec![],
                }),
            }],
        });
        let policy = policy();
        let ctx = EncodeContext {
            policy: &policy,
            schema: &schema,
        };
        let record = quantity_record("urn:temp", 1.0, utc(2024, 1, 1, 0, 0, 0));
        let err = render_slot(&record, "urn:wind-vector", &config, &ctx).unwrap_err();
        assert_eq!(
            err,
            EncodeError::UnsupportedDefinition {
                definition: "urn:wind-vector".into()
            }
        );
    }

    // ── Parameter block ──────────────────────────────────────

    fn parameter_schema() -> SchemaNode {
        SchemaNode::Record(RecordSchema {
            definition: None,
            fields: vec![NamedNode {
                name: "parameters".into(),
                node: SchemaNode::Record(RecordSchema {
                    definition: Some(definitions::PARAMETERS.into()),
                    fields: vec![
                        NamedNode {
                            name: "from".into(),
                            node: SchemaNode::Field(SimpleField {
                                definition: Some("depth_from".into()),
                                unit: Some("m".into()),
                            }),
                        },
                        NamedNode {
                            name: "to".into(),
                            node: SchemaNode::Field(SimpleField {
                                definition: Some("depth_to".into()),
                                unit: Some("m".into()),
                            }),
                        },
                        NamedNode {
                            name: "quality".into(),
                            node: SchemaNode::Field(SimpleField {
                                definition: Some("quality".into()),
                                unit: None,
                            }),
                        },
                    ],
                }),
            }],
        })
    }

    #[test]
    fn parameter_lookup_hits_render_values() {
        let config = EncodingConfig::default();
        let schema = parameter_schema();
        let mut record = quantity_record("urn:temp", 1.0, utc(2024, 1, 1, 0, 0, 0));
        record
            .parameters
            .insert("depth_from".into(), ParameterValue::Quantity(0.5));
        record
            .parameters
            .insert("quality".into(), ParameterValue::Category("good".into()));
        assert_eq!(
            render(&record, definitions::PARAMETERS, &config, &schema),
            "0.5,,good"
        );
    }

    #[test]
    fn parameter_miss_falls_back_to_vertical_aliases() {
        let config = EncodingConfig::default();
        let schema = parameter_schema();
        let mut record = quantity_record("urn:temp", 1.0, utc(2024, 1, 1, 0, 0, 0));
        record.vertical = Some(VerticalExtent {
            from: 2.5,
            to: 10.0,
            from_name: "depth_from".into(),
            to_name: "depth_to".into(),
        });
        assert_eq!(
            render(&record, definitions::PARAMETERS, &config, &schema),
            "2.5,10,"
        );
    }

    // ── Default (observed property) ──────────────────────────

    #[test]
    fn matching_observed_property_formats_value() {
        let config = EncodingConfig::default();
        let schema = empty_schema();
        let record = quantity_record("urn:temp", 12.75, utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(render(&record, "urn:temp", &config, &schema), "12.75");
        assert_eq!(render(&record, "urn:other", &config, &schema), "");
    }

    #[test]
    fn complex_value_searched_depth_first() {
        let config = EncodingConfig::default();
        let schema = empty_schema();
        let mut outer = ObservationRecord::new(dataset("p", "f", "urn:composite"));
        outer.value = Some(ObservationValue::Complex(vec![
            quantity_record("urn:salinity", 35.2, utc(2024, 1, 1, 0, 0, 0)),
            quantity_record("urn:temp", 9.5, utc(2024, 1, 1, 0, 0, 0)),
        ]));
        assert_eq!(render(&outer, "urn:temp", &config, &schema), "9.5");
        assert_eq!(render(&outer, "urn:salinity", &config, &schema), "35.2");
        assert_eq!(render(&outer, "urn:missing", &config, &schema), "");
    }

    #[test]
    fn geometry_value_formats_as_wkt() {
        let config = EncodingConfig::default();
        let schema = empty_schema();
        let mut record = ObservationRecord::new(dataset("p", "f", "urn:footprint"));
        record.value = Some(ObservationValue::Geometry(Geometry::point(
            CrsId::WGS84,
            7.0,
            52.0,
        )));
        assert_eq!(
            render(&record, "urn:footprint", &config, &schema),
            "POINT (7 52)"
        );
    }
}
