//! Résumé des contours détectés en clusters (enveloppe + centre)

pub mod centroid;
pub mod hull;

use geo::Coord;
use tracing::{debug, warn};

use crate::config::ClusterConfig;
use crate::types::{Cluster, Point2D, RawOutline};
use crate::PlanError;

/// Résume chaque contour en un cluster, dans l'ordre d'entrée
///
/// # Errors
///
/// Retourne `PlanError::EmptyOutline` si un contour est vide et
/// `PlanError::InvalidCoordinate` si un point n'est pas fini.
pub fn summarize_clusters(
    outlines: &[RawOutline],
    config: &ClusterConfig,
) -> Result<Vec<Cluster>, PlanError> {
    let clusters = outlines
        .iter()
        .enumerate()
        .map(|(index, outline)| summarize(index, outline, config))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(clusters = clusters.len(), "Outlines summarized");
    Ok(clusters)
}

/// Résume un contour unique
pub fn summarize(
    index: usize,
    outline: &[Point2D],
    config: &ClusterConfig,
) -> Result<Cluster, PlanError> {
    if outline.is_empty() {
        return Err(PlanError::EmptyOutline { index });
    }
    if let Some(p) = outline.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(PlanError::invalid_coordinate(
            index,
            format!("non-finite point ({}, {})", p.x, p.y),
        ));
    }

    let boundary = hull::convex_hull(outline);
    let first_vertex = boundary[0];

    let center = match centroid::area_centroid(outline) {
        Some(c) if config.snap_centers => Coord {
            x: c.x.trunc(),
            y: c.y.trunc(),
        },
        Some(c) => c,
        None => {
            warn!(
                outline = index,
                points = outline.len(),
                "Zero-area outline, using first hull vertex as center"
            );
            first_vertex
        }
    };

    Ok(Cluster { boundary, center })
}

/// Liste des centres, parallèle à la liste des clusters
pub fn centers(clusters: &[Cluster]) -> Vec<Point2D> {
    clusters.iter().map(|c| c.center).collect()
}
