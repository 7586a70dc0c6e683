//! Observation records: the read-only input to the result encoder.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::geometry::Geometry;
use crate::time::TimePeriod;

/// Identifiers of the dataset an observation belongs to.
///
/// All three may legitimately be empty strings; identifier slots render
/// an empty token in that case rather than the no-data placeholder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetRef {
    /// Identifier of the measuring procedure (sensor, simulation, ...).
    pub procedure: String,
    /// Identifier of the feature of interest.
    pub feature_of_interest: String,
    /// Identifier of the observed property this record measures.
    pub observed_property: String,
}

/// A named parameter value attached to a record.
///
/// Parameters are the scalar subset of observation values: anything
/// that renders as a single plain token in a parameter block.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterValue {
    /// A measured quantity.
    Quantity(f64),
    /// An integer count.
    Count(i64),
    /// A truth value.
    Boolean(bool),
    /// A classification term.
    Category(String),
    /// Free-form text.
    Text(String),
}

impl ParameterValue {
    /// Render the parameter as a plain token.
    pub fn render(&self) -> String {
        match self {
            Self::Quantity(v) => v.to_string(),
            Self::Count(v) => v.to_string(),
            Self::Boolean(v) => v.to_string(),
            Self::Category(v) | Self::Text(v) => v.clone(),
        }
    }
}

/// The typed result of one observation.
#[derive(Clone, Debug, PartialEq)]
pub enum ObservationValue {
    /// A measured quantity.
    Quantity(f64),
    /// An integer count.
    Count(i64),
    /// A truth value.
    Boolean(bool),
    /// A classification term.
    Category(String),
    /// Free-form text.
    Text(String),
    /// A spatial value.
    Geometry(Geometry),
    /// An opaque binary value.
    Blob(Vec<u8>),
    /// An array value, carried in its pre-serialized string form.
    Array(String),
    /// A composite value: sub-records each measuring their own
    /// observed property against the same sampling context.
    Complex(Vec<ObservationRecord>),
}

impl ObservationValue {
    /// Name of the value kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Quantity(_) => "Quantity",
            Self::Count(_) => "Count",
            Self::Boolean(_) => "Boolean",
            Self::Category(_) => "Category",
            Self::Text(_) => "Text",
            Self::Geometry(_) => "Geometry",
            Self::Blob(_) => "Blob",
            Self::Array(_) => "Array",
            Self::Complex(_) => "Complex",
        }
    }
}

/// Vertical extent of a record, with the per-dataset alias names its
/// bounds are published under.
///
/// When a parameter-block lookup misses and the slot definition equals
/// `from_name` or `to_name`, the encoder substitutes the corresponding
/// bound instead of emitting an empty token.
#[derive(Clone, Debug, PartialEq)]
pub struct VerticalExtent {
    /// Lower bound elevation.
    pub from: f64,
    /// Upper bound elevation.
    pub to: f64,
    /// Alias name the lower bound is published under.
    pub from_name: String,
    /// Alias name the upper bound is published under.
    pub to_name: String,
}

/// One measured observation, already materialized by the data-access
/// layer. Records are read-only to the encoder.
///
/// A record with a non-empty [`levels`](Self::levels) vector is a
/// *profile* observation: its value is the ordered sequence of child
/// records, e.g. along a vertical axis. An empty `levels` vector means
/// an ordinary scalar record.
#[derive(Clone, Debug, PartialEq)]
pub struct ObservationRecord {
    /// Owning dataset identifiers.
    pub dataset: DatasetRef,
    /// Sampling period.
    pub phenomenon_time: TimePeriod,
    /// Instant the result became available, if recorded.
    pub result_time: Option<DateTime<Utc>>,
    /// The typed result, if any.
    pub value: Option<ObservationValue>,
    /// Named parameters, in insertion order.
    pub parameters: IndexMap<String, ParameterValue>,
    /// Where the observation was taken, if spatially located.
    pub sampling_geometry: Option<Geometry>,
    /// Vertical extent with alias names, if the dataset declares one.
    pub vertical: Option<VerticalExtent>,
    /// Profile levels; empty for ordinary records.
    pub levels: Vec<ObservationRecord>,
}

impl ObservationRecord {
    /// An empty record for the given dataset. Every other attribute
    /// starts absent.
    pub fn new(dataset: DatasetRef) -> Self {
        Self {
            dataset,
            phenomenon_time: TimePeriod::default(),
            result_time: None,
            value: None,
            parameters: IndexMap::new(),
            sampling_geometry: None,
            vertical: None,
            levels: Vec::new(),
        }
    }

    /// Whether this record is a profile observation.
    pub fn is_profile(&self) -> bool {
        !self.levels.is_empty()
    }

    /// Look up a named parameter.
    pub fn parameter(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters.get(name)
    }
}
