//! Choix des points de largage au plus près du trajet de référence
//!
//! Pour chaque cluster, on retient le sommet de l'enveloppe le plus proche
//! d'une polyligne de référence (le trajet supposé du drone). En cas
//! d'égalité, le sommet de plus petit index l'emporte.

use geo::{EuclideanDistance, Line, Point};
use rayon::prelude::*;
use tracing::debug;

use crate::types::{distance, Cluster, DropPoint, Point2D};
use crate::PlanError;

/// Distance d'un point à un segment (projection orthogonale bornée)
///
/// Un segment de longueur nulle se ramène à la distance point-point.
pub fn distance_to_segment(p: Point2D, start: Point2D, end: Point2D) -> f64 {
    Point::from(p).euclidean_distance(&Line::new(start, end))
}

/// Distance minimale d'un point à une polyligne
///
/// Une polyligne à un seul point se ramène à la distance à ce point ;
/// une polyligne vide donne l'infini.
pub fn distance_to_polyline(p: Point2D, polyline: &[Point2D]) -> f64 {
    match polyline {
        [] => f64::INFINITY,
        [only] => distance(p, *only),
        _ => polyline
            .windows(2)
            .map(|w| distance_to_segment(p, w[0], w[1]))
            .fold(f64::INFINITY, f64::min),
    }
}

/// Choisit le sommet du bord le plus proche de la polyligne
pub fn select_drop_point(
    cluster: usize,
    boundary: &[Point2D],
    reference: &[Point2D],
) -> Result<DropPoint, PlanError> {
    let Some(&first) = boundary.first() else {
        return Err(PlanError::EmptyBoundary { cluster });
    };
    if reference.is_empty() {
        return Err(PlanError::EmptyReference);
    }

    let mut best = first;
    let mut best_dist = f64::INFINITY;
    for &vertex in boundary {
        let dist = distance_to_polyline(vertex, reference);
        // Strictement inférieur : le premier sommet rencontré garde l'égalité
        if dist < best_dist {
            best_dist = dist;
            best = vertex;
        }
    }

    debug!(
        cluster,
        x = best.x,
        y = best.y,
        distance = best_dist,
        "Drop point selected"
    );
    Ok(DropPoint {
        cluster,
        position: best,
    })
}

/// Choisit un point de largage par cluster, dans l'ordre de visite donné
///
/// # Arguments
///
/// * `clusters` - Clusters indexés
/// * `order` - Index des clusters à traiter (souvent l'identité)
/// * `reference` - Polyligne de référence
/// * `parallel` - Recherche en parallèle sur les clusters
///
/// # Errors
///
/// `ClusterOutOfRange` si l'ordre référence un cluster inexistant,
/// `EmptyBoundary` pour un cluster sans sommet, `EmptyReference` si la
/// polyligne est vide.
pub fn select_drop_points(
    clusters: &[Cluster],
    order: &[usize],
    reference: &[Point2D],
    parallel: bool,
) -> Result<Vec<DropPoint>, PlanError> {
    if reference.is_empty() && !order.is_empty() {
        return Err(PlanError::EmptyReference);
    }
    if let Some(&cluster) = order.iter().find(|&&i| i >= clusters.len()) {
        return Err(PlanError::ClusterOutOfRange {
            cluster,
            count: clusters.len(),
        });
    }

    let select = |&i: &usize| select_drop_point(i, &clusters[i].boundary, reference);

    if parallel {
        order.par_iter().map(select).collect()
    } else {
        order.iter().map(select).collect()
    }
}

/// Ordre identité `0..n`
pub fn identity_order(n: usize) -> Vec<usize> {
    (0..n).collect()
}
