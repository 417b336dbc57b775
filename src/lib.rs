//! kreisgrenzen - Fetch German district boundaries from OpenStreetMap and save them as GeoJSON

pub mod api;
pub mod config;
pub mod districts;
pub mod domain;
pub mod export;
pub mod fetcher;
pub mod osm;
