//! The field-order resolver: schema tree in, ordered slot list out.
//!
//! Resolution is a pure depth-first walk over declaration order, so the
//! same schema always yields the same slot list. The rules:
//!
//! 1. A scalar field with a definition yields one slot; a field without
//!    one is skipped and consumes no position.
//! 2. A nested record tagged as a parameter block yields one slot for
//!    the tag itself and its children are not descended; the parameter
//!    encoder resolves them on demand with this same walk. Any other
//!    nested record is descended without consuming a position.
//! 3. A vector or array with a definition yields one slot for it; one
//!    without a definition is skipped entirely. Skipping is the single
//!    policy applied everywhere, including vector component resolution,
//!    and a skip is logged so dropped columns are visible.

use tracing::warn;

use sonde_core::SchemaError;

use crate::definitions;
use crate::schema::{NamedNode, RecordSchema, SchemaNode};

/// One ordered output column: a position and the semantic definition
/// rendered there.
///
/// Positions form a contiguous, strictly increasing sequence starting
/// at 0 in traversal order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Zero-based column position.
    pub position: usize,
    /// Semantic definition tag rendered in this column.
    pub definition: String,
}

/// Resolve a schema tree into its ordered slot list.
///
/// The root is the record (or array element type) describing one block;
/// its own definition tag is not a column. A non-container root is
/// resolved as a single child.
///
/// # Errors
///
/// [`SchemaError::DuplicateFieldName`] if any record declares two
/// children with the same name.
pub fn resolve(schema: &SchemaNode) -> Result<Vec<Slot>, SchemaError> {
    let mut slots = Vec::new();
    match schema {
        SchemaNode::Record(record) => {
            check_duplicate_names(record)?;
            visit_children(&record.fields, &mut slots)?;
        }
        SchemaNode::Array(array) => {
            return resolve(&array.element);
        }
        other => visit(other, &mut slots)?,
    }
    Ok(slots)
}

/// Resolve an ordered child list with the same rules as [`resolve`].
/// Used for parameter-block records and vector coordinates.
pub(crate) fn resolve_children(children: &[NamedNode]) -> Result<Vec<Slot>, SchemaError> {
    let mut slots = Vec::new();
    visit_children(children, &mut slots)?;
    Ok(slots)
}

fn visit_children(children: &[NamedNode], slots: &mut Vec<Slot>) -> Result<(), SchemaError> {
    for child in children {
        visit(&child.node, slots)?;
    }
    Ok(())
}

fn visit(node: &SchemaNode, slots: &mut Vec<Slot>) -> Result<(), SchemaError> {
    match node {
        SchemaNode::Field(field) => {
            if let Some(definition) = &field.definition {
                push_slot(slots, definition);
            }
        }
        SchemaNode::Record(record) => {
            check_duplicate_names(record)?;
            if record.definition.as_deref() == Some(definitions::PARAMETERS) {
                push_slot(slots, definitions::PARAMETERS);
            } else {
                visit_children(&record.fields, slots)?;
            }
        }
        SchemaNode::Vector(vector) => match &vector.definition {
            Some(definition) => push_slot(slots, definition),
            None => warn!("skipping vector without definition; no column emitted"),
        },
        SchemaNode::Array(array) => match &array.definition {
            Some(definition) => push_slot(slots, definition),
            None => warn!("skipping array without definition; no column emitted"),
        },
    }
    Ok(())
}

fn push_slot(slots: &mut Vec<Slot>, definition: &str) {
    slots.push(Slot {
        position: slots.len(),
        definition: definition.to_string(),
    });
}

fn check_duplicate_names(record: &RecordSchema) -> Result<(), SchemaError> {
    for (i, child) in record.fields.iter().enumerate() {
        if record.fields[..i].iter().any(|c| c.name == child.name) {
            return Err(SchemaError::DuplicateFieldName {
                record: record
                    .definition
                    .clone()
                    .unwrap_or_else(|| "<anonymous>".into()),
                name: child.name.clone(),
            });
        }
    }
    Ok(())
}
