//! The schema tree describing the structure of an encoded result.
//!
//! A schema is an owned, finite tree, acyclic by construction. Child
//! order is declaration order and drives the deterministic column
//! order produced by [`resolve`](crate::resolve::resolve).
//!
//! The surrounding protocol layer decodes schemas from its wire format;
//! this crate only consumes them.

use sonde_core::CrsId;

/// A named child of a record, vector, or array element.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedNode {
    /// Child name, unique within its parent record.
    pub name: String,
    /// The child schema.
    pub node: SchemaNode,
}

/// A scalar field: one column candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct SimpleField {
    /// Semantic definition tag; fields without one yield no column.
    pub definition: Option<String>,
    /// Unit of measure label, if declared.
    pub unit: Option<String>,
}

/// A spatial vector with named coordinate components.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorSchema {
    /// Semantic definition tag of the vector as a whole.
    pub definition: Option<String>,
    /// CRS the vector's reference frame declares, if any.
    pub reference_frame: Option<CrsId>,
    /// Coordinate components in declaration order.
    pub coordinates: Vec<NamedNode>,
}

/// An ordered group of named children.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordSchema {
    /// Semantic definition tag; the parameter-block tag changes how
    /// the resolver treats this record.
    pub definition: Option<String>,
    /// Children in declaration order.
    pub fields: Vec<NamedNode>,
}

/// A homogeneous sequence of elements.
#[derive(Clone, Debug, PartialEq)]
pub struct ArraySchema {
    /// Semantic definition tag of the array as a whole.
    pub definition: Option<String>,
    /// Schema of each element.
    pub element: Box<SchemaNode>,
}

/// One node of a schema tree.
///
/// # Examples
///
/// ```
/// use sonde_encode::schema::{NamedNode, RecordSchema, SchemaNode, SimpleField};
///
/// let schema = SchemaNode::Record(RecordSchema {
///     definition: None,
///     fields: vec![
///         NamedNode {
///             name: "temperature".into(),
///             node: SchemaNode::Field(SimpleField {
///                 definition: Some("http://example.org/property/temperature".into()),
///                 unit: Some("degC".into()),
///             }),
///         },
///     ],
/// });
/// assert!(schema.definition().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaNode {
    /// A scalar field.
    Field(SimpleField),
    /// A spatial vector.
    Vector(VectorSchema),
    /// An ordered group of named children.
    Record(RecordSchema),
    /// A homogeneous sequence.
    Array(ArraySchema),
}

impl SchemaNode {
    /// The node's own semantic definition tag, if any.
    pub fn definition(&self) -> Option<&str> {
        match self {
            Self::Field(f) => f.definition.as_deref(),
            Self::Vector(v) => v.definition.as_deref(),
            Self::Record(r) => r.definition.as_deref(),
            Self::Array(a) => a.definition.as_deref(),
        }
    }

    /// Depth-first search for the node carrying `definition`.
    ///
    /// Used by the parameter-block and geometry encoders to recover the
    /// sub-tree behind a slot. Declaration order decides ties.
    pub fn find_by_definition(&self, definition: &str) -> Option<&SchemaNode> {
        if self.definition() == Some(definition) {
            return Some(self);
        }
        match self {
            Self::Field(_) => None,
            Self::Vector(v) => v
                .coordinates
                .iter()
                .find_map(|c| c.node.find_by_definition(definition)),
            Self::Record(r) => r
                .fields
                .iter()
                .find_map(|c| c.node.find_by_definition(definition)),
            Self::Array(a) => a.element.find_by_definition(definition),
        }
    }
}
