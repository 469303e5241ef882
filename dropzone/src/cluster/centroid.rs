//! Centroïde pondéré par l'aire d'un contour

use geo::{Area, Centroid, LineString, Polygon};

use crate::types::Point2D;

/// Aire signée en dessous de laquelle un contour est considéré dégénéré
const ZERO_AREA: f64 = 1e-12;

/// Centroïde par moments d'un contour fermé
///
/// Retourne `None` si le contour n'enferme aucune aire (point isolé,
/// segment, contour colinéaire).
pub fn area_centroid(outline: &[Point2D]) -> Option<Point2D> {
    if outline.len() < 3 {
        return None;
    }

    // Polygon::new ferme l'anneau si nécessaire
    let polygon = Polygon::new(LineString::from(outline.to_vec()), vec![]);
    if polygon.signed_area().abs() <= ZERO_AREA {
        return None;
    }

    polygon.centroid().map(|p| p.0)
}

/// Aire enfermée par un contour (valeur absolue)
pub fn outline_area(outline: &[Point2D]) -> f64 {
    if outline.len() < 3 {
        return 0.0;
    }
    Polygon::new(LineString::from(outline.to_vec()), vec![]).unsigned_area()
}
