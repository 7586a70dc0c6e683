//! Strongly-typed coordinate reference system identifiers.

use std::fmt;

/// Identifies a coordinate reference system by its numeric EPSG-style code.
///
/// `CrsId(4326)` is WGS 84 geographic coordinates. The encoder never
/// interprets the code itself; axis-order semantics come entirely from
/// the configured [`AxisOrderPolicy`] membership sets.
///
/// [`AxisOrderPolicy`]: https://docs.rs/sonde-geom
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CrsId(pub u32);

impl CrsId {
    /// WGS 84 geographic 2D (`EPSG:4326`).
    pub const WGS84: CrsId = CrsId(4326);
}

impl fmt::Display for CrsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

impl From<u32> for CrsId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
