//! The result encoder: orchestrates slot resolution, per-record
//! iteration, profile recursion, and separator assembly.

use tracing::debug;

use sonde_core::{EncodeError, ObservationRecord};
use sonde_geom::AxisOrderPolicy;

use crate::config::EncodingConfig;
use crate::encoders::{render_slot, EncodeContext};
use crate::resolve::{resolve, Slot};
use crate::schema::SchemaNode;

/// Maximum profile nesting depth.
///
/// The recursion is generalized to arbitrary depth; this bound exists
/// so malformed inputs fail with a coded error instead of exhausting
/// the stack.
pub const MAX_PROFILE_DEPTH: usize = 64;

/// Renders observation records into a delimiter-separated text matrix.
///
/// A single-pass fold over already-loaded, read-only input: no I/O, no
/// shared mutable state. One encoder may serve concurrent encode calls.
///
/// # Examples
///
/// ```
/// use sonde_core::CrsId;
/// use sonde_encode::{EncodingConfig, ResultEncoder};
/// use sonde_encode::schema::{RecordSchema, SchemaNode};
/// use sonde_geom::AxisOrderPolicy;
///
/// let encoder = ResultEncoder::new(AxisOrderPolicy::new([CrsId::WGS84], CrsId::WGS84, true));
/// let schema = SchemaNode::Record(RecordSchema { definition: None, fields: vec![] });
/// let out = encoder.encode(&[], &schema, &EncodingConfig::default()).unwrap();
/// assert_eq!(out, "");
/// ```
#[derive(Clone, Debug)]
pub struct ResultEncoder {
    policy: AxisOrderPolicy,
}

impl ResultEncoder {
    /// Build an encoder around the given axis-order policy.
    pub fn new(policy: AxisOrderPolicy) -> Self {
        Self { policy }
    }

    /// The policy spatial slots consult.
    pub fn policy(&self) -> &AxisOrderPolicy {
        &self.policy
    }

    /// Encode `records` against `schema` using `config`.
    ///
    /// An empty record collection returns an empty string before any
    /// schema work. Otherwise the slot order is resolved once and every
    /// record is rendered against it; profile records recurse over
    /// their levels with the count block suppressed.
    ///
    /// # Errors
    ///
    /// Structural failures abort the whole call and discard partial
    /// output: [`EncodeError::Schema`] for malformed schemas,
    /// [`EncodeError::UnsupportedDefinition`] for undispatchable slots,
    /// [`EncodeError::ProfileDepthExceeded`] for levels nested past
    /// [`MAX_PROFILE_DEPTH`], [`EncodeError::InvalidConfig`] for empty
    /// separators. Missing values never abort; they render as the
    /// placeholder or the empty token per slot kind.
    pub fn encode(
        &self,
        records: &[ObservationRecord],
        schema: &SchemaNode,
        config: &EncodingConfig,
    ) -> Result<String, EncodeError> {
        config.validate()?;
        if records.is_empty() {
            return Ok(String::new());
        }
        let slots = resolve(schema)?;
        debug!(
            records = records.len(),
            slots = slots.len(),
            "encoding observation result"
        );
        let ctx = EncodeContext {
            policy: &self.policy,
            schema,
        };
        encode_level(records, &slots, config, &ctx, config.emit_count, 0)
    }
}

/// Encode one level of records: the top-level collection, or the levels
/// of one profile record.
fn encode_level(
    records: &[ObservationRecord],
    slots: &[Slot],
    config: &EncodingConfig,
    ctx: &EncodeContext<'_>,
    emit_count: bool,
    depth: usize,
) -> Result<String, EncodeError> {
    if depth >= MAX_PROFILE_DEPTH {
        return Err(EncodeError::ProfileDepthExceeded {
            max: MAX_PROFILE_DEPTH,
        });
    }

    let mut out = String::new();
    if emit_count {
        out.push_str(&records.len().to_string());
        out.push_str(&config.block_separator);
    }

    for record in records {
        if record.is_profile() {
            // Levels reuse the already-resolved slot order; the count
            // block is only ever emitted at the top level.
            out.push_str(&encode_level(
                &record.levels,
                slots,
                config,
                ctx,
                false,
                depth + 1,
            )?);
            out.push_str(&config.block_separator);
        } else {
            for slot in slots {
                out.push_str(&render_slot(record, &slot.definition, config, ctx)?);
                out.push_str(&config.token_separator);
            }
            if !slots.is_empty() {
                strip_suffix(&mut out, &config.token_separator);
            }
            out.push_str(&config.block_separator);
        }
    }

    strip_suffix(&mut out, &config.block_separator);
    Ok(out)
}

fn strip_suffix(out: &mut String, suffix: &str) {
    if out.ends_with(suffix) {
        out.truncate(out.len() - suffix.len());
    }
}
