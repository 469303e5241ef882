//! Génération de la mission de largage
//!
//! Séquence fixe : HOME, décollage, puis pour chaque point de largage
//! transit → attente → descente → largage → remontée, et enfin retour HOME
//! et atterrissage.

pub mod projection;
pub mod writer;

pub use projection::PixelProjection;
pub use writer::{write_mission, HEADER};

use std::io::Write;

use tracing::debug;

use crate::config::MissionConfig;
use crate::types::Point2D;
use crate::PlanError;

/// Repère MAVLink des altitudes (relatif au point de décollage)
pub const FRAME_GLOBAL_RELATIVE_ALT: u8 = 3;

/// Nombre d'enregistrements émis par point de largage
pub const RECORDS_PER_DROP: usize = 5;

/// Action élémentaire d'une mission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Déclaration du point HOME
    Home,
    /// Décollage jusqu'à l'altitude de croisière
    Takeoff,
    /// Transit vers le point de largage
    Navigate,
    /// Attente au-dessus du point
    Loiter,
    /// Descente à l'altitude de largage
    Descend,
    /// Déclenchement du servo de largage
    Drop,
    /// Remontée à l'altitude de croisière
    Ascend,
    /// Retour au point HOME
    ReturnHome,
    /// Atterrissage
    Land,
}

impl Action {
    /// Code de commande MAVLink
    pub fn command(self) -> u16 {
        match self {
            Action::Home | Action::Navigate | Action::Descend | Action::Ascend => 16,
            Action::Loiter => 19,
            Action::ReturnHome => 20,
            Action::Land => 21,
            Action::Takeoff => 22,
            Action::Drop => 183,
        }
    }
}

/// Un enregistrement de la mission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub seq: u32,
    pub current: bool,
    pub frame: u8,
    pub action: Action,
    pub params: [f64; 4],
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
    pub autocontinue: bool,
}

impl Waypoint {
    pub fn command(&self) -> u16 {
        self.action.command()
    }
}

/// Accumule les enregistrements en numérotant sans trou à partir de 0
struct MissionBuilder<'a> {
    config: &'a MissionConfig,
    waypoints: Vec<Waypoint>,
}

impl<'a> MissionBuilder<'a> {
    fn new(config: &'a MissionConfig, capacity: usize) -> Self {
        Self {
            config,
            waypoints: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, action: Action, at: Point2D, alt: f64, params: [f64; 4]) {
        let (lat, lon) = self.config.projection.to_geographic(at);
        let seq = self.waypoints.len() as u32;
        self.waypoints.push(Waypoint {
            seq,
            current: seq == 0,
            frame: FRAME_GLOBAL_RELATIVE_ALT,
            action,
            params,
            lat,
            lon,
            alt,
            autocontinue: true,
        });
    }

    fn finish(self) -> Vec<Waypoint> {
        self.waypoints
    }
}

/// Construit la liste des enregistrements de la mission
///
/// `drops` est la liste des points de largage dans l'ordre de vol, sans HOME.
pub fn build_mission(drops: &[Point2D], home: Point2D, config: &MissionConfig) -> Vec<Waypoint> {
    let base = config.base_altitude;
    let low = config.drop_altitude;
    let none = [0.0; 4];

    let mut builder = MissionBuilder::new(config, 4 + drops.len() * RECORDS_PER_DROP);

    builder.push(Action::Home, home, 0.0, none);
    builder.push(Action::Takeoff, home, base, none);

    for &drop in drops {
        builder.push(Action::Navigate, drop, base, none);
        builder.push(Action::Loiter, drop, base, [config.loiter_seconds, 0.0, 0.0, 0.0]);
        builder.push(Action::Descend, drop, low, none);
        builder.push(Action::Drop, drop, low, [0.0, 0.0, config.drop_pwm, 0.0]);
        builder.push(Action::Ascend, drop, base, none);
    }

    builder.push(Action::ReturnHome, home, base, none);
    builder.push(Action::Land, home, 0.0, none);

    let waypoints = builder.finish();
    debug!(drops = drops.len(), records = waypoints.len(), "Mission built");
    waypoints
}

/// Construit la mission et l'écrit dans `writer`
///
/// # Errors
///
/// `InvalidConfig` si les paramètres sont incohérents, `Io` si l'écriture échoue.
pub fn serialize_mission<W: Write>(
    writer: &mut W,
    drops: &[Point2D],
    home: Point2D,
    config: &MissionConfig,
) -> Result<Vec<Waypoint>, PlanError> {
    config.validate()?;
    let waypoints = build_mission(drops, home, config);
    write_mission(writer, &waypoints)?;
    Ok(waypoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;

    fn c(x: f64, y: f64) -> Point2D {
        Coord { x, y }
    }

    #[test]
    fn test_minimal_mission() {
        let waypoints = build_mission(&[], c(0.0, 0.0), &MissionConfig::default());

        let actions: Vec<Action> = waypoints.iter().map(|w| w.action).collect();
        assert_eq!(
            actions,
            vec![Action::Home, Action::Takeoff, Action::ReturnHome, Action::Land]
        );
        let seqs: Vec<u32> = waypoints.iter().map(|w| w.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_drop_block_order_and_altitudes() {
        let config = MissionConfig::default();
        let waypoints = build_mission(&[c(100.0, 200.0)], c(0.0, 0.0), &config);
        assert_eq!(waypoints.len(), 4 + RECORDS_PER_DROP);

        let block = &waypoints[2..7];
        let actions: Vec<Action> = block.iter().map(|w| w.action).collect();
        assert_eq!(
            actions,
            vec![
                Action::Navigate,
                Action::Loiter,
                Action::Descend,
                Action::Drop,
                Action::Ascend
            ]
        );
        let alts: Vec<f64> = block.iter().map(|w| w.alt).collect();
        assert_eq!(alts, vec![100.0, 100.0, 10.0, 10.0, 100.0]);

        assert_eq!(block[1].params[0], 5.0);
        assert_eq!(block[3].params[2], 2000.0);
        assert_eq!(block[3].command(), 183);
        for w in block {
            assert_eq!(w.lat, 12.0 + 200.0 / 10000.0);
            assert_eq!(w.lon, 77.0 + 100.0 / 10000.0);
        }
    }

    #[test]
    fn test_sequence_is_contiguous() {
        let drops: Vec<Point2D> = (0..7).map(|i| c(i as f64, 2.0 * i as f64)).collect();
        let waypoints = build_mission(&drops, c(1.0, 1.0), &MissionConfig::default());

        assert_eq!(waypoints.len(), 4 + 7 * RECORDS_PER_DROP);
        for (i, w) in waypoints.iter().enumerate() {
            assert_eq!(w.seq as usize, i);
            assert_eq!(w.current, i == 0);
            assert!(w.autocontinue);
            assert_eq!(w.frame, FRAME_GLOBAL_RELATIVE_ALT);
        }
    }

    #[test]
    fn test_home_records() {
        let home = c(30.0, 40.0);
        let waypoints = build_mission(&[c(1.0, 1.0)], home, &MissionConfig::default());
        let last = waypoints.len() - 1;

        assert_eq!(waypoints[0].alt, 0.0);
        assert_eq!(waypoints[1].alt, 100.0);
        assert_eq!(waypoints[last - 1].command(), 20);
        assert_eq!(waypoints[last].command(), 21);
        assert_eq!(waypoints[last].alt, 0.0);
        for w in [&waypoints[0], &waypoints[1], &waypoints[last]] {
            assert_eq!((w.lat, w.lon), (12.0 + 40.0 / 10000.0, 77.0 + 30.0 / 10000.0));
        }
    }

    #[test]
    fn test_serialize_rejects_bad_config() {
        let mut config = MissionConfig::default();
        config.drop_altitude = 500.0;

        let mut out = Vec::new();
        let err = serialize_mission(&mut out, &[], c(0.0, 0.0), &config).unwrap_err();
        assert!(matches!(err, PlanError::InvalidConfig(_)));
        assert!(out.is_empty());
    }
}
