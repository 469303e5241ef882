//! Rapport de planification
//!
//! Collecte les compteurs d'entrée, les points de largage retenus et le
//! trajet, pour affichage console ou sauvegarde JSON.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use dropzone::{MissionPlan, PixelProjection};
use serde::Serialize;

/// Statut global de la planification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlanStatus {
    /// Mission générée avec au moins un largage
    Success,
    /// Mission minimale (aucune zone à desservir)
    Empty,
    /// Planification échouée
    Failed,
}

/// Point de largage dans l'ordre de passage
#[derive(Debug, Clone, Serialize)]
pub struct DropSummary {
    /// Cluster d'origine
    pub cluster: usize,
    /// Coordonnées pixel
    pub x: f64,
    pub y: f64,
    /// Coordonnées géographiques de la mission
    pub lat: f64,
    pub lon: f64,
}

/// Rapport complet
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    /// Fichier de contours source
    pub input: String,
    /// Durée de la planification
    pub duration_secs: f64,
    /// Statut global
    pub status: PlanStatus,

    /// Nombre de contours lus
    pub outlines_read: usize,
    /// Nombre de contours écartés (aire trop faible)
    pub outlines_filtered: usize,
    /// Nombre de clusters planifiés
    pub clusters: usize,

    /// Point HOME en pixels
    pub home: Option<[f64; 2]>,
    /// Largages dans l'ordre de passage
    pub drops: Vec<DropSummary>,
    /// Ordre de visite (index de cluster)
    pub order: Vec<usize>,
    /// Longueur du trajet en pixels
    pub route_length: f64,
    /// Nombre d'enregistrements de la mission
    pub waypoints: usize,

    /// Erreurs
    pub errors: Vec<String>,
    /// Warnings
    pub warnings: Vec<String>,
}

impl PlanReport {
    /// Crée un rapport vide pour un fichier d'entrée
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            duration_secs: 0.0,
            status: PlanStatus::Empty,
            outlines_read: 0,
            outlines_filtered: 0,
            clusters: 0,
            home: None,
            drops: Vec::new(),
            order: Vec::new(),
            route_length: 0.0,
            waypoints: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Enregistre les compteurs de lecture
    pub fn record_input(&mut self, read: usize, filtered: usize) {
        self.outlines_read = read;
        self.outlines_filtered = filtered;
    }

    /// Enregistre le résultat de la planification
    pub fn record_plan(&mut self, plan: &MissionPlan, projection: &PixelProjection) {
        self.clusters = plan.clusters.len();
        self.home = Some([plan.home.x, plan.home.y]);
        self.order = plan
            .route
            .order
            .iter()
            .map(|&i| plan.drop_points[i].cluster)
            .collect();
        self.drops = plan
            .route
            .order
            .iter()
            .map(|&i| {
                let drop = &plan.drop_points[i];
                let (lat, lon) = projection.to_geographic(drop.position);
                DropSummary {
                    cluster: drop.cluster,
                    x: drop.position.x,
                    y: drop.position.y,
                    lat,
                    lon,
                }
            })
            .collect();
        self.route_length = plan.route.length();
        self.waypoints = plan.waypoints.len();
    }

    /// Enregistre un warning
    pub fn record_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Enregistre un échec
    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Définit la durée de la planification
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Détermine le statut final
    pub fn finalize(&mut self) {
        self.status = if !self.errors.is_empty() {
            PlanStatus::Failed
        } else if self.drops.is_empty() {
            PlanStatus::Empty
        } else {
            PlanStatus::Success
        };
    }

    /// Affiche le rapport sur la console
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("MISSION REPORT - {}", self.input);
        println!("{}", "=".repeat(60));

        println!("\nStatus: {:?}", self.status);
        println!("Duration: {:.3}s", self.duration_secs);

        println!("\n--- SUMMARY ---");
        println!(
            "Outlines: {} read, {} filtered, {} planned",
            self.outlines_read, self.outlines_filtered, self.clusters
        );
        if let Some([x, y]) = self.home {
            println!("Home: ({}, {})", x, y);
        }
        println!(
            "Route: {} drops, {:.1} px, {} waypoints",
            self.drops.len(),
            self.route_length,
            self.waypoints
        );

        if !self.drops.is_empty() {
            println!("\n--- DROPS ---");
            for (i, d) in self.drops.iter().enumerate() {
                println!(
                    "  #{} cluster {}: ({}, {}) -> {:.6}, {:.6}",
                    i + 1,
                    d.cluster,
                    d.x,
                    d.y,
                    d.lat,
                    d.lon
                );
            }
        }

        if !self.warnings.is_empty() {
            println!("\n--- WARNINGS ({}) ---", self.warnings.len());
            for w in self.warnings.iter().take(10) {
                println!("  {}", w);
            }
            if self.warnings.len() > 10 {
                println!("  ... and {} more", self.warnings.len() - 10);
            }
        }

        if !self.errors.is_empty() {
            println!("\n--- ERRORS ({}) ---", self.errors.len());
            for e in &self.errors {
                println!("  {}", e);
            }
        }

        println!("\n{}", "=".repeat(60));
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Affichage compact pour le résumé
    pub fn summary(&self) -> String {
        format!(
            "{}: {} drops, {:.1} px route, {} waypoints, {} errors",
            self.input,
            self.drops.len(),
            self.route_length,
            self.waypoints,
            self.errors.len()
        )
    }
}
