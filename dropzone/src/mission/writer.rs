//! Écriture au format texte QGC WPL 110

use std::io::Write;

use super::Waypoint;

/// Première ligne du fichier
pub const HEADER: &str = "QGC WPL 110";

/// Écrit l'en-tête puis un enregistrement par ligne
pub fn write_mission<W: Write>(writer: &mut W, waypoints: &[Waypoint]) -> std::io::Result<()> {
    writeln!(writer, "{}", HEADER)?;
    for waypoint in waypoints {
        writeln!(writer, "{}", format_record(waypoint))?;
    }
    writer.flush()
}

/// Formate un enregistrement (colonnes séparées par des tabulations)
///
/// `seq, current, frame, command, p1, p2, p3, p4, lat, lon, alt, autocontinue`.
/// Latitude et longitude gardent toujours leur partie décimale (`12.0`), les
/// paramètres et l'altitude entiers s'écrivent sans (`100`).
pub fn format_record(w: &Waypoint) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:?}\t{:?}\t{}\t{}",
        w.seq,
        u8::from(w.current),
        w.frame,
        w.command(),
        w.params[0],
        w.params[1],
        w.params[2],
        w.params[3],
        w.lat,
        w.lon,
        w.alt,
        u8::from(w.autocontinue)
    )
}
