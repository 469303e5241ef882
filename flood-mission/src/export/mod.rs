//! Modules d'export (mission QGC, GeoJSON)

pub mod geojson;
pub mod waypoints;

pub use waypoints::export_mission;
