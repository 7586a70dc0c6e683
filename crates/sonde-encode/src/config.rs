//! Encoding configuration: separators, placeholder, count flag.

use sonde_core::EncodeError;

/// Configuration for one encode call.
///
/// The separators are exactly the characters negotiated by the outer
/// protocol's result-encoding parameters. Keeping them distinct from
/// characters appearing inside rendered tokens is the caller's
/// responsibility; emptiness is not, and is rejected here.
///
/// # Examples
///
/// ```
/// use sonde_encode::EncodingConfig;
///
/// let config = EncodingConfig::new(",", "@@", "noData", true).unwrap();
/// assert_eq!(config.block_separator, "@@");
/// assert!(EncodingConfig::new("", "@@", "noData", true).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodingConfig {
    /// Separator between slot values within one block.
    pub token_separator: String,
    /// Separator between blocks (per-record rows).
    pub block_separator: String,
    /// Placeholder emitted when a required value is absent.
    pub no_data: String,
    /// Whether a leading element-count block is emitted.
    pub emit_count: bool,
}

impl EncodingConfig {
    /// Build a validated configuration.
    ///
    /// # Errors
    ///
    /// [`EncodeError::InvalidConfig`] if either separator is empty.
    pub fn new(
        token_separator: &str,
        block_separator: &str,
        no_data: &str,
        emit_count: bool,
    ) -> Result<Self, EncodeError> {
        let config = Self {
            token_separator: token_separator.into(),
            block_separator: block_separator.into(),
            no_data: no_data.into(),
            emit_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the separator invariants without consuming the config.
    pub fn validate(&self) -> Result<(), EncodeError> {
        if self.token_separator.is_empty() {
            return Err(EncodeError::InvalidConfig {
                reason: "token separator is empty".into(),
            });
        }
        if self.block_separator.is_empty() {
            return Err(EncodeError::InvalidConfig {
                reason: "block separator is empty".into(),
            });
        }
        Ok(())
    }
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            token_separator: ",".into(),
            block_separator: ";".into(),
            no_data: "noData".into(),
            emit_count: true,
        }
    }
}
