pub mod boundary;

pub use boundary::{BoundaryGeometry, CRS, DistrictRecord};
