//! Export GeoJSON du plan (coordonnées pixel), pour la visualisation

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use dropzone::{Cluster, MissionPlan, Point2D};
use geo::{LineString, Point, Polygon};
use geojson::{Feature, FeatureCollection, Geometry, Value};

/// Convertit le plan complet en FeatureCollection
///
/// Contient les enveloppes (`kind = hull`), les centres (`center`), les points
/// de largage (`drop`, avec leur rang de passage), HOME (`home`) et le trajet
/// (`route`).
pub fn plan_to_geojson(plan: &MissionPlan) -> FeatureCollection {
    let mut features = cluster_features(&plan.clusters);

    for (position, &stop) in plan.route.order.iter().enumerate() {
        let drop = &plan.drop_points[stop];
        let mut feature = point_feature(drop.position, "drop");
        feature.set_property("cluster", drop.cluster);
        feature.set_property("visit", position);
        features.push(feature);
    }

    features.push(point_feature(plan.home, "home"));

    let route = LineString::from(plan.route.ordered_points());
    let mut feature = Feature::from(Geometry::new(Value::from(&route)));
    feature.set_property("kind", "route");
    feature.set_property("length", plan.route.length());
    features.push(feature);

    collection(features)
}

/// Convertit les clusters seuls (enveloppes + centres)
pub fn clusters_to_geojson(clusters: &[Cluster]) -> FeatureCollection {
    collection(cluster_features(clusters))
}

/// Écrit une FeatureCollection dans un fichier
pub fn export_to_geojson(collection: &FeatureCollection, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer(&mut writer, collection)?;
    writer.flush()?;

    Ok(())
}

fn cluster_features(clusters: &[Cluster]) -> Vec<Feature> {
    let mut features = Vec::with_capacity(clusters.len() * 2);

    for (index, cluster) in clusters.iter().enumerate() {
        let mut hull = Feature::from(boundary_geometry(&cluster.boundary));
        hull.set_property("kind", "hull");
        hull.set_property("cluster", index);
        features.push(hull);

        let mut center = point_feature(cluster.center, "center");
        center.set_property("cluster", index);
        features.push(center);
    }

    features
}

/// Polygone, ou ligne/point pour une enveloppe dégénérée
fn boundary_geometry(boundary: &[Point2D]) -> Geometry {
    let value = match boundary {
        [only] => Value::from(&Point::from(*only)),
        [_, _] => Value::from(&LineString::from(boundary.to_vec())),
        _ => Value::from(&Polygon::new(LineString::from(boundary.to_vec()), vec![])),
    };
    Geometry::new(value)
}

fn point_feature(p: Point2D, kind: &str) -> Feature {
    let mut feature = Feature::from(Geometry::new(Value::from(&Point::from(p))));
    feature.set_property("kind", kind);
    feature
}

fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
