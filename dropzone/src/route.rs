//! Ordonnancement des points de largage (plus proche voisin)
//!
//! Heuristique gloutonne en O(n²) : depuis HOME, on visite toujours le point
//! non visité le plus proche. Aucune garantie d'optimalité.

use tracing::debug;

use crate::types::{distance, Point2D, Route};

/// Calcule un trajet glouton partant de `home` et y revenant
///
/// Sans `home`, le départ se fait depuis le premier point. À distance égale,
/// le point de plus petit index est choisi.
pub fn nearest_neighbor_route(points: &[Point2D], home: Option<Point2D>) -> Route {
    let n = points.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    let mut current = match (home, points.first()) {
        (Some(h), _) => h,
        (None, Some(&first)) => first,
        (None, None) => return Route::default(),
    };

    for _ in 0..n {
        let mut best: Option<(usize, f64)> = None;
        for (i, &p) in points.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = distance(current, p);
            if best.map_or(true, |(_, best_d)| d < best_d) {
                best = Some((i, d));
            }
        }

        // n itérations pour n points : il reste toujours un point non visité
        let Some((idx, _)) = best else { break };
        visited[idx] = true;
        order.push(idx);
        current = points[idx];
    }

    let stops: Vec<Point2D> = order.iter().map(|&i| points[i]).collect();
    debug!(stops = stops.len(), order = ?order, "Route ordered");

    Route { order, stops, home }
}
