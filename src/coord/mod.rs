use geo_types::{Coord, Point};

/// A WGS84 position that cells can be computed from.
///
/// Tuples are read as `(longitude, latitude)`, the same axis order as
/// `geo_types`, where x is longitude and y is latitude.
pub trait Coordinate {
    fn longitude(&self) -> f64;
    fn latitude(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn longitude(&self) -> f64 {
        self.0
    }
    fn latitude(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn longitude(&self) -> f64 {
        self.x()
    }
    fn latitude(&self) -> f64 {
        self.y()
    }
}

impl Coordinate for Coord<f64> {
    fn longitude(&self) -> f64 {
        self.x
    }
    fn latitude(&self) -> f64 {
        self.y
    }
}
