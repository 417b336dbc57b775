use crate::api::OverpassResponse;
use crate::domain::BoundaryGeometry;
use geo::{Coord, LineString, MultiPolygon, Polygon};
use std::collections::HashMap;

fn build_node_lookup(response: &OverpassResponse) -> HashMap<u64, (f64, f64)> {
    response
        .elements
        .iter()
        .filter(|e| e.type_ == "node")
        .filter_map(|e| {
            let lon = e.lon?;
            let lat = e.lat?;
            Some((e.id, (lon, lat)))
        })
        .collect()
}

fn resolve_way_to_coords(node_refs: &[u64], nodes: &HashMap<u64, (f64, f64)>) -> Vec<Coord<f64>> {
    node_refs
        .iter()
        .filter_map(|id| nodes.get(id).copied())
        .map(|(x, y)| Coord { x, y })
        .collect()
}

/// Assemble district boundary geometry from an Overpass response.
///
/// # Algorithm
/// 1. Build node_id → (lon, lat) lookup map from all node elements
/// 2. For each way element:
///    - Resolve node refs to coordinates, skipping ids missing from the
///      lookup (degrades the ring instead of failing)
///    - Keep the ring only if more than 2 points resolved
/// 3. One ring → single polygon; several → multi-polygon; none → `None`
pub fn assemble_boundary(response: &OverpassResponse) -> Option<BoundaryGeometry> {
    let nodes = build_node_lookup(response);

    let mut polygons = Vec::new();

    for element in &response.elements {
        if element.type_ != "way" {
            continue;
        }

        let node_refs = match &element.nodes {
            Some(n) => n,
            None => continue,
        };

        let coords = resolve_way_to_coords(node_refs, &nodes);

        if coords.len() <= 2 {
            continue;
        }

        polygons.push(Polygon::new(LineString::from(coords), vec![]));
    }

    match polygons.len() {
        0 => None,
        1 => Some(BoundaryGeometry::Single(polygons.remove(0))),
        _ => Some(BoundaryGeometry::Multi(MultiPolygon(polygons))),
    }
}
