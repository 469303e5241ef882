//! Types d'erreurs pour le crate dropzone

use thiserror::Error;

/// Erreurs pouvant survenir pendant la planification d'une mission
#[derive(Debug, Error)]
pub enum PlanError {
    /// Erreur d'I/O lors de l'écriture de la mission
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Contour vide fourni par la détection
    #[error("Outline {index} is empty")]
    EmptyOutline { index: usize },

    /// Coordonnée non finie (NaN, infini)
    #[error("Invalid coordinate in outline {index}: {reason}")]
    InvalidCoordinate { index: usize, reason: String },

    /// Cluster sans sommet de bord
    #[error("Cluster {cluster} has an empty boundary")]
    EmptyBoundary { cluster: usize },

    /// Index de cluster hors limites dans l'ordre de visite
    #[error("Cluster index {cluster} out of range ({count} clusters)")]
    ClusterOutOfRange { cluster: usize, count: usize },

    /// Polyligne de référence sans aucun point
    #[error("Reference polyline is empty")]
    EmptyReference,

    /// Aucun point de largage pour choisir le point HOME
    #[error("No drop point available to select a home position")]
    NoHomeCandidate,

    /// Configuration incohérente
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PlanError {
    /// Crée une erreur de coordonnée invalide avec contexte
    pub fn invalid_coordinate(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            index,
            reason: reason.into(),
        }
    }

    /// Crée une erreur de configuration
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig(reason.into())
    }
}
