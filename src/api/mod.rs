pub mod overpass;

pub use overpass::{Element, OverpassError, OverpassResponse, build_client, fetch_boundary};
