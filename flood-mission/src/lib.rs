//! # flood-mission
//!
//! Génération de missions de largage par drone à partir des contours de zones
//! inondées détectées sur une image.
//!
//! ## Features
//!
//! - Lecture des contours (JSON) avec filtrage par aire minimale
//! - Planification via `dropzone` (clusters, points de largage, trajet)
//! - Export de la mission au format QGC WPL 110
//! - Export GeoJSON du plan pour la visualisation
//! - Rapport console et JSON
//!
//! ## Usage CLI
//!
//! ```bash
//! # Mission depuis des contours, HOME choisi près du centre de l'image
//! flood-mission plan --input outlines.json --center 375,250 --output mission.waypoints
//!
//! # HOME imposé, trajet de référence ordonné, export GeoJSON
//! flood-mission plan -i outlines.json --home 10,20 --reference routed --geojson plan.geojson
//!
//! # Résumé des clusters seulement
//! flood-mission summarize --input outlines.json
//! ```

pub mod config;
pub mod export;
pub mod input;
pub mod planning;
pub mod report;

pub use config::Config;
pub use report::{PlanReport, PlanStatus};
