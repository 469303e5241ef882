//! Enveloppe convexe des contours

use geo::{ConvexHull, Coord, MultiPoint, Point, Winding};

use crate::types::Point2D;

/// Calcule l'enveloppe convexe stricte d'un ensemble de points
///
/// Les sommets sont rendus sans fermeture, dans le sens anti-horaire (repère y vers
/// le haut), en partant du point de plus petit x puis plus petit y. Les points
/// colinéaires et les doublons sont éliminés : un ensemble colinéaire donne ses
/// deux extrémités, un point unique donne ce point.
pub fn convex_hull(points: &[Point2D]) -> Vec<Point2D> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    // Ensemble colinéaire : seules les extrémités du tri restent
    let (first, last) = (sorted[0], sorted[sorted.len() - 1]);
    if sorted.iter().all(|&p| cross(first, last, p) == 0.0) {
        return vec![first, last];
    }

    let multi_point: MultiPoint<f64> = sorted.into_iter().map(Point::from).collect();
    let (mut ring, _) = multi_point.convex_hull().into_inner();
    ring.make_ccw_winding();

    let mut vertices: Vec<Point2D> = ring.0;
    if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }
    vertices.dedup();

    normalize_ring(vertices)
}

/// Retire les sommets colinéaires et fait démarrer l'anneau au plus petit (x, y)
fn normalize_ring(vertices: Vec<Point2D>) -> Vec<Point2D> {
    let n = vertices.len();
    let mut strict: Vec<Point2D> = (0..n)
        .filter(|&i| {
            let prev = vertices[(i + n - 1) % n];
            let next = vertices[(i + 1) % n];
            cross(prev, vertices[i], next) != 0.0
        })
        .map(|i| vertices[i])
        .collect();

    let start = strict
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)))
        .map_or(0, |(i, _)| i);
    strict.rotate_left(start);
    strict
}

/// Produit vectoriel (a - o) x (b - o)
fn cross(o: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}
