//! Lecture des contours produits par la détection
//!
//! Format attendu : un tableau JSON de contours, chaque contour étant un
//! tableau de paires `[x, y]` en pixels.

use std::path::Path;

use anyhow::{Context, Result};
use dropzone::cluster::centroid::outline_area;
use dropzone::{Point2D, RawOutline};
use geo::Coord;
use tracing::{debug, info};

/// Charge les contours depuis un fichier JSON
pub fn load_outlines(path: &Path) -> Result<Vec<RawOutline>> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read outlines file: {}", path.display()))?;

    parse_outlines(&content).context(format!("Invalid outlines file: {}", path.display()))
}

/// Décode les contours depuis une chaîne JSON
pub fn parse_outlines(json: &str) -> Result<Vec<RawOutline>> {
    let raw: Vec<Vec<[f64; 2]>> =
        serde_json::from_str(json).context("Expected an array of [[x, y], ...] outlines")?;

    let outlines: Vec<RawOutline> = raw
        .into_iter()
        .map(|outline| outline.into_iter().map(|[x, y]| Coord { x, y }).collect())
        .collect();

    debug!(outlines = outlines.len(), "Outlines decoded");
    Ok(outlines)
}

/// Écarte les contours dont l'aire est inférieure à `min_area`
///
/// Les contours vides sont conservés : c'est au pipeline de les signaler.
/// Retourne les contours conservés et le nombre de contours écartés.
pub fn filter_by_area(outlines: Vec<RawOutline>, min_area: f64) -> (Vec<RawOutline>, usize) {
    let total = outlines.len();
    let kept: Vec<RawOutline> = outlines
        .into_iter()
        .filter(|o| o.is_empty() || outline_area(o) >= min_area)
        .collect();

    let filtered = total - kept.len();
    if filtered > 0 {
        info!(filtered, kept = kept.len(), min_area, "Small outlines filtered");
    }
    (kept, filtered)
}

/// Centre de la boîte englobante de tous les points
pub fn bounding_box_center(outlines: &[RawOutline]) -> Option<Point2D> {
    let mut points = outlines.iter().flatten();
    let first = points.next()?;

    let (mut min, mut max) = (*first, *first);
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    Some(Coord {
        x: (min.x + max.x) / 2.0,
        y: (min.y + max.y) / 2.0,
    })
}
