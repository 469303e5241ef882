//! Définition et implémentation des commandes CLI
//!
//! - `plan`: contours → mission QGC WPL 110 (+ GeoJSON, rapport)
//! - `summarize`: contours → clusters (enveloppes, centres)

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use dropzone::{Point2D, ReferencePath};
use geo::Coord;
use tracing::info;

use flood_mission::config::{Config, Overrides};
use flood_mission::export::{self, geojson};
use flood_mission::input;
use flood_mission::planning::{self, HomeRequest};
use flood_mission::report::PlanReport;

#[derive(Subcommand)]
pub enum Commands {
    /// Plan a drop mission from detected flood outlines
    Plan(PlanArgs),

    /// Summarize outlines into clusters (hull + center) without planning
    Summarize {
        /// JSON file with outlines ([[[x, y], ...], ...])
        #[arg(short, long)]
        input: PathBuf,

        /// Config file (JSON); defaults to $FLOOD_MISSION_CONFIG
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write clusters as GeoJSON
        #[arg(long)]
        geojson: Option<PathBuf>,
    },
}

/// Arguments de la commande `plan`
#[derive(Args)]
pub struct PlanArgs {
    /// JSON file with outlines ([[[x, y], ...], ...])
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output mission file
    #[arg(short, long, default_value = "mission.waypoints")]
    pub output: PathBuf,

    /// Fixed home position in pixels ("x,y")
    #[arg(long, value_parser = parse_point, conflicts_with = "center")]
    pub home: Option<Point2D>,

    /// Pick home as the drop point nearest to this pixel ("x,y");
    /// defaults to the center of the outlines' bounding box
    #[arg(long, value_parser = parse_point)]
    pub center: Option<Point2D>,

    /// Config file (JSON); defaults to $FLOOD_MISSION_CONFIG
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reference path used to pick drop points
    #[arg(long, value_enum)]
    pub reference: Option<ReferenceArg>,

    /// Minimum outline area in pixels² (overrides config)
    #[arg(long)]
    pub min_area: Option<f64>,

    /// Search drop points in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Write the plan as GeoJSON (pixel coordinates)
    #[arg(long)]
    pub geojson: Option<PathBuf>,

    /// Write the JSON report
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Polyligne de référence côté CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReferenceArg {
    /// Cluster centers in input order
    Centers,
    /// Cluster centers ordered from home
    Routed,
}

impl From<ReferenceArg> for ReferencePath {
    fn from(arg: ReferenceArg) -> Self {
        match arg {
            ReferenceArg::Centers => ReferencePath::ClusterCenters,
            ReferenceArg::Routed => ReferencePath::RoutedCenters,
        }
    }
}

/// Exécute la commande plan
pub fn cmd_plan(args: &PlanArgs) -> Result<()> {
    let start = Instant::now();

    let mut config = Config::resolve(args.config.as_deref())?;
    config.apply(Overrides {
        reference: args.reference.map(ReferencePath::from),
        min_area: args.min_area,
        parallel: args.parallel,
    });

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        reference = ?config.planner.drop_zone.reference,
        min_area = config.input.min_area,
        "Starting planning"
    );

    let raw = input::load_outlines(&args.input)?;
    let read = raw.len();
    let (outlines, filtered) = input::filter_by_area(raw, config.input.min_area);

    let mut report = PlanReport::new(&args.input.display().to_string());
    report.record_input(read, filtered);

    let request = HomeRequest {
        home: args.home,
        center: args.center,
    };
    let result = planning::plan_outlines(&outlines, request, &config.planner, &mut report);
    report.set_duration(start.elapsed());

    let plan = match result {
        Ok(plan) => plan,
        Err(e) => {
            if let Some(path) = &args.report {
                report.save_to_file(path)?;
            }
            return Err(e);
        }
    };

    let Some(plan) = plan else {
        println!("No significant flood areas detected, nothing to plan.");
        if let Some(path) = &args.report {
            report.save_to_file(path)?;
        }
        return Ok(());
    };

    export::export_mission(&plan.waypoints, &args.output)?;

    if let Some(path) = &args.geojson {
        geojson::export_to_geojson(&geojson::plan_to_geojson(&plan), path)?;
        info!(path = %path.display(), "Plan GeoJSON written");
    }

    report.display();

    if let Some(path) = &args.report {
        report.save_to_file(path)?;
        println!("Report saved to {}", path.display());
    }

    info!("{}", report.summary());
    println!("Mission written to {}", args.output.display());
    Ok(())
}

/// Exécute la commande summarize
pub fn cmd_summarize(
    input_path: &Path,
    config: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let config = Config::resolve(config)?;

    let raw = input::load_outlines(input_path)?;
    let read = raw.len();
    let (outlines, filtered) = input::filter_by_area(raw, config.input.min_area);

    let clusters = dropzone::cluster::summarize_clusters(&outlines, &config.planner.cluster)
        .context("Failed to summarize outlines")?;

    println!("=== Clusters ({}) ===", input_path.display());
    println!("Outlines: {} read, {} filtered", read, filtered);
    for (i, cluster) in clusters.iter().enumerate() {
        println!(
            "  #{}: center ({:.1}, {:.1}), {} hull vertices",
            i,
            cluster.center.x,
            cluster.center.y,
            cluster.boundary.len()
        );
    }

    if let Some(path) = output {
        geojson::export_to_geojson(&geojson::clusters_to_geojson(&clusters), path)?;
        println!("GeoJSON written to {}", path.display());
    }

    Ok(())
}

/// Parse un point "x,y"
fn parse_point(s: &str) -> Result<Point2D, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("Expected \"x,y\", got \"{}\"", s))?;

    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("Invalid coordinate: \"{}\"", v.trim()))
    };

    Ok(Coord {
        x: parse(x)?,
        y: parse(y)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point_valid() {
        assert_eq!(parse_point("12,34").unwrap(), Coord { x: 12.0, y: 34.0 });
        assert_eq!(
            parse_point(" 1.5 , -2 ").unwrap(),
            Coord { x: 1.5, y: -2.0 }
        );
    }

    #[test]
    fn test_parse_point_invalid() {
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("1,inf").is_err());
    }

    #[test]
    fn test_reference_arg_mapping() {
        assert_eq!(
            ReferencePath::from(ReferenceArg::Routed),
            ReferencePath::RoutedCenters
        );
        assert_eq!(
            ReferencePath::from(ReferenceArg::Centers),
            ReferencePath::ClusterCenters
        );
    }
}
