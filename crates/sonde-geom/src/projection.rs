//! The projection seam: reprojection is an external capability.
//!
//! Sonde does not implement projection mathematics. Callers hand the
//! axis-order policy an implementor of [`CrsProjection`] (typically
//! backed by a real projection library on their side); tests use the
//! mock from `sonde-test-utils`.

use sonde_core::{CrsId, Geometry, TransformError};

/// Reprojects geometries between coordinate reference systems.
///
/// # Contract
///
/// A successful projection must return a geometry whose `crs` equals
/// `target`, with the same subtype and vertex count as the input, every
/// vertex within the implementation's stated tolerance of the
/// mathematically correct position, and elevations carried through
/// unchanged unless the target CRS redefines the vertical axis.
///
/// Implementations must not mutate shared state: the policy calls this
/// from concurrently running encode calls.
pub trait CrsProjection: Send + Sync {
    /// Reproject `geometry` into `target`.
    ///
    /// # Errors
    ///
    /// [`TransformError::UnknownCrs`] if either CRS is not supported,
    /// [`TransformError::ProjectionFailed`] for any other failure.
    fn project(&self, geometry: &Geometry, target: CrsId) -> Result<Geometry, TransformError>;
}
