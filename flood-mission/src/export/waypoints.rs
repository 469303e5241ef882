//! Export du fichier de mission QGC WPL 110

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use dropzone::mission::write_mission;
use dropzone::Waypoint;
use tracing::info;

/// Écrit la mission dans un fichier `.waypoints`
pub fn export_mission(waypoints: &[Waypoint], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    write_mission(&mut writer, waypoints)
        .context(format!("Failed to write mission: {}", output_path.display()))?;

    info!(
        path = %output_path.display(),
        records = waypoints.len(),
        "Mission file written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dropzone::mission::build_mission;
    use dropzone::MissionConfig;
    use geo::Coord;

    #[test]
    fn test_export_mission() {
        let waypoints = build_mission(
            &[Coord { x: 10.0, y: 20.0 }],
            Coord { x: 0.0, y: 0.0 },
            &MissionConfig::default(),
        );

        let output_path = std::env::temp_dir().join("test_export_mission.waypoints");
        export_mission(&waypoints, &output_path).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.starts_with("QGC WPL 110\n"));
        assert_eq!(content.lines().count(), 1 + 9);

        std::fs::remove_file(output_path).ok();
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let output_path = std::env::temp_dir()
            .join("flood_mission_missing_dir")
            .join("mission.waypoints");
        assert!(export_mission(&[], &output_path).is_err());
    }
}
