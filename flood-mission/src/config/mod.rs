//! Configuration de l'outil

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dropzone::{PlannerConfig, ReferencePath};

/// Variable d'environnement donnant le chemin du fichier de configuration
pub const CONFIG_ENV: &str = "FLOOD_MISSION_CONFIG";

/// Configuration principale
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Paramètres du pipeline de planification
    pub planner: PlannerConfig,

    /// Filtrage des contours en entrée
    pub input: InputConfig,
}

/// Filtrage des contours fournis par la détection
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Aire minimale (pixels²) d'un contour pour être planifié
    pub min_area: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { min_area: 200.0 }
    }
}

/// Surcharges venant de la ligne de commande
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub reference: Option<ReferencePath>,
    pub min_area: Option<f64>,
    pub parallel: bool,
}

impl Config {
    /// Applique les surcharges de la ligne de commande
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(reference) = overrides.reference {
            self.planner.drop_zone.reference = reference;
        }
        if let Some(min_area) = overrides.min_area {
            self.input.min_area = min_area;
        }
        if overrides.parallel {
            self.planner.drop_zone.parallel = true;
        }
    }

    /// Charge une configuration depuis un fichier
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_json(&content)
    }

    /// Charge une configuration depuis une chaîne JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse config JSON")?;
        config
            .planner
            .validate()
            .context("Invalid planner configuration")?;
        Ok(config)
    }

    /// Fichier explicite, sinon variable d'environnement, sinon valeurs par défaut
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match path {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}
