//! Tests d'intégration : fichier de contours → fichier de mission

use std::path::PathBuf;

use dropzone::{plan, HomeSource, ReferencePath};
use flood_mission::config::{Config, Overrides};
use flood_mission::export::{export_mission, geojson};
use flood_mission::input;
use flood_mission::planning::{plan_outlines, HomeRequest};
use flood_mission::report::{PlanReport, PlanStatus};
use geo::Coord;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("flood_mission_e2e_{}", name))
}

const OUTLINES: &str = r#"[
    [[0,0],[40,0],[40,40],[0,40]],
    [[200,0],[240,0],[240,40],[200,40]],
    [[100,150],[140,150],[140,190],[100,190]],
    [[500,500],[503,500],[503,503]]
]"#;

#[test]
fn test_outlines_file_to_mission_file() {
    let input_path = temp_path("outlines.json");
    let output_path = temp_path("mission.waypoints");
    std::fs::write(&input_path, OUTLINES).unwrap();

    let config = Config::default();
    let raw = input::load_outlines(&input_path).unwrap();
    let read = raw.len();
    let (outlines, filtered) = input::filter_by_area(raw, config.input.min_area);
    assert_eq!(read, 4);
    assert_eq!(filtered, 1);

    let result = plan(
        &outlines,
        HomeSource::Fixed(Coord { x: 0.0, y: 0.0 }),
        &config.planner,
    )
    .unwrap();
    export_mission(&result.waypoints, &output_path).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "QGC WPL 110");
    assert_eq!(lines.len(), 1 + 4 + 3 * 5);

    // Colonnes et numérotation
    for (i, line) in lines[1..].iter().enumerate() {
        let fields: Vec<&str> = line.split('\t').collect();
        assert_eq!(fields.len(), 12, "line {}: {}", i, line);
        assert_eq!(fields[0], i.to_string());
        assert_eq!(fields[1], if i == 0 { "1" } else { "0" });
        assert_eq!(fields[2], "3");
        assert_eq!(fields[11], "1");
    }

    let commands: Vec<&str> = lines[1..]
        .iter()
        .map(|l| l.split('\t').nth(3).unwrap())
        .collect();
    assert_eq!(&commands[..2], &["16", "22"]);
    assert_eq!(&commands[2..7], &["16", "19", "16", "183", "16"]);
    assert_eq!(&commands[commands.len() - 2..], &["20", "21"]);

    std::fs::remove_file(input_path).ok();
    std::fs::remove_file(output_path).ok();
}

#[test]
fn test_report_and_geojson_outputs() {
    let outlines = input::parse_outlines(OUTLINES).unwrap();
    let (outlines, filtered) = input::filter_by_area(outlines, 200.0);
    let center = input::bounding_box_center(&outlines).unwrap();

    let config = Config::default();
    let result = plan(&outlines, HomeSource::NearestDropPoint(center), &config.planner).unwrap();

    let mut report = PlanReport::new("outlines.json");
    report.record_input(4, filtered);
    report.record_plan(&result, &config.planner.mission.projection);
    report.finalize();
    assert_eq!(report.status, PlanStatus::Success);
    assert_eq!(report.drops.len(), 3);

    let geojson_path = temp_path("plan.geojson");
    geojson::export_to_geojson(&geojson::plan_to_geojson(&result), &geojson_path).unwrap();
    let content = std::fs::read_to_string(&geojson_path).unwrap();
    assert!(content.contains(r#""kind":"route""#));

    std::fs::remove_file(geojson_path).ok();
}

#[test]
fn test_empty_outline_reported_as_error() {
    let outlines = input::parse_outlines("[[[0,0],[100,0],[100,100]], []]").unwrap();
    let (outlines, _) = input::filter_by_area(outlines, 200.0);
    assert_eq!(outlines.len(), 2);

    let err = plan(
        &outlines,
        HomeSource::Fixed(Coord { x: 0.0, y: 0.0 }),
        &Config::default().planner,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Outline 1 is empty"));
}

#[test]
fn test_only_empty_outlines_is_an_error() {
    let outlines = input::parse_outlines("[[]]").unwrap();
    let (outlines, filtered) = input::filter_by_area(outlines, 200.0);
    assert_eq!(filtered, 0);

    let mut report = PlanReport::new("empty.json");
    let err = plan_outlines(
        &outlines,
        HomeRequest::default(),
        &Config::default().planner,
        &mut report,
    )
    .unwrap_err();

    assert!(format!("{:#}", err).contains("Outline 0 is empty"));
    assert_eq!(report.status, PlanStatus::Failed);
}

#[test]
fn test_all_filtered_is_nothing_to_plan_with_or_without_center() {
    let outlines = input::parse_outlines("[[[0,0],[2,0],[2,2]]]").unwrap();
    let (outlines, filtered) = input::filter_by_area(outlines, 200.0);
    assert_eq!(filtered, 1);

    let requests = [
        HomeRequest::default(),
        HomeRequest {
            home: None,
            center: Some(Coord { x: 1.0, y: 1.0 }),
        },
        HomeRequest {
            home: Some(Coord { x: 0.0, y: 0.0 }),
            center: None,
        },
    ];
    for request in requests {
        let mut report = PlanReport::new("small.json");
        let result =
            plan_outlines(&outlines, request, &Config::default().planner, &mut report).unwrap();

        assert!(result.is_none());
        assert_eq!(report.status, PlanStatus::Empty);
        assert!(report.errors.is_empty());
    }
}

#[test]
fn test_failed_plan_report_is_saved() {
    let outlines = input::parse_outlines("[[[0,0],[100,0],[100,100]], []]").unwrap();
    let mut report = PlanReport::new("broken.json");
    report.record_input(2, 0);

    let result = plan_outlines(
        &outlines,
        HomeRequest::default(),
        &Config::default().planner,
        &mut report,
    );
    assert!(result.is_err());

    let path = temp_path("failed_report.json");
    report.save_to_file(&path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["status"], "Failed");
    assert_eq!(value["errors"][0], "Outline 1 is empty");
    assert_eq!(value["outlines_read"], 2);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_overrides_flow_into_plan() {
    let outlines = input::parse_outlines(OUTLINES).unwrap();
    let mut config = Config::default();
    config.apply(Overrides {
        reference: Some(ReferencePath::RoutedCenters),
        min_area: Some(1.0),
        parallel: true,
    });

    let (outlines, filtered) = input::filter_by_area(outlines, config.input.min_area);
    assert_eq!(filtered, 0);

    let mut report = PlanReport::new("outlines.json");
    let result = plan_outlines(
        &outlines,
        HomeRequest {
            home: Some(Coord { x: 0.0, y: 0.0 }),
            center: None,
        },
        &config.planner,
        &mut report,
    )
    .unwrap()
    .unwrap();

    assert_eq!(result.drop_points.len(), 4);
    // Référence ordonnée et fermée sur HOME
    assert_eq!(result.reference.first(), Some(&Coord { x: 0.0, y: 0.0 }));
    assert_eq!(result.reference.last(), Some(&Coord { x: 0.0, y: 0.0 }));
    assert_eq!(report.status, PlanStatus::Success);
}
