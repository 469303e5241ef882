//! Conversion pixel → coordonnées géographiques
//!
//! Transformation linéaire fixe, conservée telle quelle pour la compatibilité
//! des fichiers de mission existants. Ce n'est pas une projection géodésique.

use serde::{Deserialize, Serialize};

use crate::types::Point2D;

/// Transformation affine pixel → (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PixelProjection {
    /// Latitude du pixel (0, 0)
    pub lat0: f64,

    /// Longitude du pixel (0, 0)
    pub lon0: f64,

    /// Nombre de pixels par degré
    pub pixels_per_degree: f64,
}

impl Default for PixelProjection {
    fn default() -> Self {
        Self {
            lat0: 12.0,
            lon0: 77.0,
            pixels_per_degree: 10_000.0,
        }
    }
}

impl PixelProjection {
    /// Retourne `(lat, lon)` : y pilote la latitude, x la longitude
    pub fn to_geographic(&self, p: Point2D) -> (f64, f64) {
        let lat = self.lat0 + p.y / self.pixels_per_degree;
        let lon = self.lon0 + p.x / self.pixels_per_degree;
        (lat, lon)
    }
}
