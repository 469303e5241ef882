//! Types de données pour le crate dropzone

use geo::{Coord, EuclideanDistance, Point};

/// Point en coordonnées pixel de l'image (x vers la droite, y vers le bas)
pub type Point2D = Coord<f64>;

/// Contour brut d'une zone inondée, tel que produit par la détection
pub type RawOutline = Vec<Point2D>;

/// Résumé géométrique d'un contour
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Sommets de l'enveloppe convexe, dans l'ordre de parcours
    pub boundary: Vec<Point2D>,

    /// Centroïde pondéré par l'aire (ou premier sommet si aire nulle)
    pub center: Point2D,
}

/// Point de largage choisi sur le bord d'un cluster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropPoint {
    /// Index du cluster d'origine
    pub cluster: usize,

    /// Position du largage
    pub position: Point2D,
}

/// Ordre de visite des points de largage, ancré sur HOME
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    /// Permutation de `0..n` (index dans la liste d'entrée)
    pub order: Vec<usize>,

    /// Points dans l'ordre de visite, sans HOME
    pub stops: Vec<Point2D>,

    /// Point de départ et de retour
    pub home: Option<Point2D>,
}

impl Route {
    /// Points dans l'ordre de vol, HOME ajouté au début et à la fin s'il existe
    pub fn ordered_points(&self) -> Vec<Point2D> {
        let mut points = Vec::with_capacity(self.stops.len() + 2);
        points.extend(self.home);
        points.extend_from_slice(&self.stops);
        points.extend(self.home);
        points
    }

    /// Longueur totale du trajet en pixels
    pub fn length(&self) -> f64 {
        self.ordered_points()
            .windows(2)
            .map(|w| distance(w[0], w[1]))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Distance euclidienne entre deux points
pub fn distance(a: Point2D, b: Point2D) -> f64 {
    Point::from(a).euclidean_distance(&Point::from(b))
}
