use geo::{MultiPolygon, Polygon};

/// Coordinate reference system every district record is tagged with.
pub const CRS: &str = "EPSG:4326";

/// Assembled boundary geometry for one district.
///
/// A single closed ring stays a plain polygon; several rings are wrapped as
/// an unordered multi-polygon. No topological relationship between the
/// members is checked or implied.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryGeometry {
    Single(Polygon<f64>),
    Multi(MultiPolygon<f64>),
}

impl BoundaryGeometry {
    /// Number of polygon members in this geometry.
    pub fn polygon_count(&self) -> usize {
        match self {
            BoundaryGeometry::Single(_) => 1,
            BoundaryGeometry::Multi(mp) => mp.0.len(),
        }
    }
}

/// One row of output: a district name and its boundary geometry.
///
/// Constructed per fetch, serialized immediately, then dropped. Records are
/// never accumulated across districts.
#[derive(Debug, Clone)]
pub struct DistrictRecord {
    pub name: String,
    pub geometry: BoundaryGeometry,
}
