//! Orchestration de la commande `plan`
//!
//! Choix du point HOME et sortie anticipée quand aucune zone ne reste après
//! filtrage. Les contours vides sont transmis tels quels au pipeline, qui les
//! signale en erreur.

use anyhow::{Context, Result};
use dropzone::{HomeSource, MissionPlan, PlannerConfig, Point2D, RawOutline};
use geo::Coord;
use tracing::warn;

use crate::input;
use crate::report::PlanReport;

/// Origine du HOME demandée sur la ligne de commande
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeRequest {
    /// Position imposée (`--home`)
    pub home: Option<Point2D>,
    /// Cible du HOME (`--center`)
    pub center: Option<Point2D>,
}

/// Détermine la source du HOME
///
/// Sans `--home` ni `--center`, la cible est le centre de la boîte englobante
/// des contours. Si tous les contours sont vides, l'origine sert de cible et
/// le pipeline rapporte le contour vide.
pub fn home_source(
    request: HomeRequest,
    outlines: &[RawOutline],
    report: &mut PlanReport,
) -> HomeSource {
    match (request.home, request.center) {
        (Some(home), _) => HomeSource::Fixed(home),
        (None, Some(center)) => HomeSource::NearestDropPoint(center),
        (None, None) => {
            let center = input::bounding_box_center(outlines).unwrap_or_else(Coord::zero);
            report.record_warning(format!(
                "No home given, using drop point nearest to ({}, {})",
                center.x, center.y
            ));
            HomeSource::NearestDropPoint(center)
        }
    }
}

/// Planifie la mission pour des contours déjà filtrés
///
/// Retourne `None` quand aucun contour ne reste, quelle que soit l'origine du
/// HOME. Un échec est enregistré dans le rapport avant d'être propagé.
pub fn plan_outlines(
    outlines: &[RawOutline],
    request: HomeRequest,
    config: &PlannerConfig,
    report: &mut PlanReport,
) -> Result<Option<MissionPlan>> {
    if outlines.is_empty() {
        warn!("No significant flood areas detected");
        report.record_warning("No significant flood areas detected");
        report.finalize();
        return Ok(None);
    }

    let home = home_source(request, outlines, report);

    match dropzone::plan(outlines, home, config) {
        Ok(plan) => {
            report.record_plan(&plan, &config.mission.projection);
            report.finalize();
            Ok(Some(plan))
        }
        Err(e) => {
            report.record_failure(e.to_string());
            report.finalize();
            Err(e).context("Planning failed")
        }
    }
}
