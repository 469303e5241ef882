//! Paramètres de planification
//!
//! Toutes les constantes du pipeline (altitudes, temporisation, projection)
//! sont regroupées ici et passées explicitement à chaque composant.

use serde::{Deserialize, Serialize};

use crate::mission::PixelProjection;
use crate::PlanError;

/// Configuration complète du pipeline
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Résumé des contours
    pub cluster: ClusterConfig,

    /// Choix des points de largage
    pub drop_zone: DropZoneConfig,

    /// Génération de la mission
    pub mission: MissionConfig,
}

impl PlannerConfig {
    /// Vérifie la cohérence de l'ensemble des paramètres
    pub fn validate(&self) -> Result<(), PlanError> {
        self.mission.validate()
    }
}

/// Paramètres du résumé des contours
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Tronquer le centroïde aux coordonnées pixel entières
    pub snap_centers: bool,
}

/// Polyligne de référence pour le choix des points de largage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePath {
    /// Centres des clusters dans l'ordre d'entrée
    #[default]
    ClusterCenters,

    /// Centres ordonnés par plus proche voisin depuis l'ancre HOME, boucle fermée
    ///
    /// Avec `HomeSource::NearestDropPoint(cible)`, l'ancre est la cible et non le
    /// HOME retenu : cette polyligne n'est pas le trajet volé.
    RoutedCenters,
}

/// Paramètres du choix des points de largage
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DropZoneConfig {
    /// Polyligne servant de référence
    pub reference: ReferencePath,

    /// Recherche parallèle par cluster (rayon)
    pub parallel: bool,
}

/// Paramètres de la mission générée
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MissionConfig {
    /// Altitude de croisière (décollage, transit, remontée, retour)
    pub base_altitude: f64,

    /// Altitude de largage
    pub drop_altitude: f64,

    /// Durée de l'attente au-dessus de chaque point (secondes)
    pub loiter_seconds: f64,

    /// Impulsion servo envoyée pour déclencher le largage
    pub drop_pwm: f64,

    /// Conversion pixel → latitude/longitude
    pub projection: PixelProjection,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            base_altitude: 100.0,
            drop_altitude: 10.0,
            loiter_seconds: 5.0,
            drop_pwm: 2000.0,
            projection: PixelProjection::default(),
        }
    }
}

impl MissionConfig {
    pub fn validate(&self) -> Result<(), PlanError> {
        let values = [
            ("base_altitude", self.base_altitude),
            ("drop_altitude", self.drop_altitude),
            ("loiter_seconds", self.loiter_seconds),
            ("drop_pwm", self.drop_pwm),
            ("projection.lat0", self.projection.lat0),
            ("projection.lon0", self.projection.lon0),
            ("projection.pixels_per_degree", self.projection.pixels_per_degree),
        ];
        if let Some((name, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PlanError::invalid_config(format!("{} must be finite", name)));
        }

        if self.drop_altitude < 0.0 || self.drop_altitude > self.base_altitude {
            return Err(PlanError::invalid_config(format!(
                "drop_altitude ({}) must be within [0, base_altitude ({})]",
                self.drop_altitude, self.base_altitude
            )));
        }
        if self.loiter_seconds < 0.0 {
            return Err(PlanError::invalid_config("loiter_seconds must be >= 0"));
        }
        if self.projection.pixels_per_degree <= 0.0 {
            return Err(PlanError::invalid_config("pixels_per_degree must be > 0"));
        }

        Ok(())
    }
}
