//! # dropzone
//!
//! Planification géométrique d'une mission de largage au-dessus de zones
//! inondées détectées sur une image.
//!
//! ## Pipeline
//!
//! 1. [`cluster`] : enveloppe convexe et centroïde de chaque contour
//! 2. [`drop_zone`] : point du bord le plus proche du trajet de référence
//! 3. [`route`] : ordre de visite glouton ancré sur HOME
//! 4. [`mission`] : séquence d'enregistrements QGC WPL 110
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dropzone::{plan, HomeSource, PlannerConfig};
//!
//! let plan = plan(&outlines, HomeSource::NearestDropPoint(image_center), &PlannerConfig::default())?;
//! println!("Ordre: {:?}", plan.route.order);
//!
//! let mut file = std::fs::File::create("mission.waypoints")?;
//! dropzone::mission::write_mission(&mut file, &plan.waypoints)?;
//! ```

pub mod cluster;
pub mod config;
pub mod drop_zone;
pub mod error;
pub mod mission;
pub mod route;
pub mod types;

pub use config::{ClusterConfig, DropZoneConfig, MissionConfig, PlannerConfig, ReferencePath};
pub use error::PlanError;
pub use mission::{Action, PixelProjection, Waypoint};
pub use types::{Cluster, DropPoint, Point2D, RawOutline, Route};

use tracing::info;

/// Origine du point HOME
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HomeSource {
    /// Point imposé par l'appelant
    Fixed(Point2D),

    /// Point de largage le plus proche de la cible (ex: centre de l'image)
    NearestDropPoint(Point2D),
}

impl HomeSource {
    /// Point servant d'ancre au trajet de référence
    ///
    /// Pour `NearestDropPoint`, c'est la cible : le HOME n'est connu qu'après
    /// le choix des points de largage.
    pub fn anchor(&self) -> Point2D {
        match *self {
            HomeSource::Fixed(p) | HomeSource::NearestDropPoint(p) => p,
        }
    }

    /// Résout le point HOME une fois les points de largage connus
    pub fn resolve(&self, drops: &[DropPoint]) -> Result<Point2D, PlanError> {
        match *self {
            HomeSource::Fixed(p) => Ok(p),
            HomeSource::NearestDropPoint(target) => {
                nearest_drop_point(drops, target).ok_or(PlanError::NoHomeCandidate)
            }
        }
    }
}

/// Point de largage le plus proche de `target` (plus petit index à égalité)
pub fn nearest_drop_point(drops: &[DropPoint], target: Point2D) -> Option<Point2D> {
    let mut best: Option<(Point2D, f64)> = None;
    for drop in drops {
        let d = types::distance(drop.position, target);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((drop.position, d));
        }
    }
    best.map(|(p, _)| p)
}

/// Résultat complet de la planification
#[derive(Debug, Clone)]
pub struct MissionPlan {
    /// Un cluster par contour, dans l'ordre d'entrée
    pub clusters: Vec<Cluster>,

    /// Polyligne utilisée pour le choix des points de largage
    pub reference: Vec<Point2D>,

    /// Un point de largage par cluster, dans l'ordre des clusters
    pub drop_points: Vec<DropPoint>,

    /// Point de décollage et d'atterrissage
    pub home: Point2D,

    /// Ordre de visite (index dans `drop_points`)
    pub route: Route,

    /// Enregistrements de la mission
    pub waypoints: Vec<Waypoint>,
}

/// Construit la polyligne de référence selon la stratégie configurée
pub fn reference_polyline(
    clusters: &[Cluster],
    reference: ReferencePath,
    anchor: Point2D,
) -> Vec<Point2D> {
    let centers = cluster::centers(clusters);
    match reference {
        ReferencePath::ClusterCenters => centers,
        ReferencePath::RoutedCenters => {
            route::nearest_neighbor_route(&centers, Some(anchor)).ordered_points()
        }
    }
}

/// Exécute le pipeline complet : clusters → points de largage → trajet → mission
///
/// # Errors
///
/// Retourne la première erreur rencontrée ; aucun résultat partiel n'est produit.
pub fn plan(
    outlines: &[RawOutline],
    home: HomeSource,
    config: &PlannerConfig,
) -> Result<MissionPlan, PlanError> {
    config.validate()?;

    // 1. Résumer les contours
    let clusters = cluster::summarize_clusters(outlines, &config.cluster)?;

    // 2. Choisir un point de largage par cluster
    let reference = reference_polyline(&clusters, config.drop_zone.reference, home.anchor());
    let order = drop_zone::identity_order(clusters.len());
    let drop_points =
        drop_zone::select_drop_points(&clusters, &order, &reference, config.drop_zone.parallel)?;

    // 3. Ordonner les largages depuis HOME
    let home = home.resolve(&drop_points)?;
    let positions: Vec<Point2D> = drop_points.iter().map(|d| d.position).collect();
    let route = route::nearest_neighbor_route(&positions, Some(home));

    // 4. Générer la mission
    let waypoints = mission::build_mission(&route.stops, home, &config.mission);

    info!(
        clusters = clusters.len(),
        home_x = home.x,
        home_y = home.y,
        route_length = route.length(),
        waypoints = waypoints.len(),
        "Mission planned"
    );

    Ok(MissionPlan {
        clusters,
        reference,
        drop_points,
        home,
        route,
        waypoints,
    })
}
