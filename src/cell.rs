use crate::coord::Coordinate;
use crate::error::ZcellError;
use crate::index::{
    BoundingBox, Direction, EdgePolicy, Interval, NeighborSet, Precision, decode_identifier,
    decode_with, encode_with, generate_identifier, neighbor_with, neighbors_with, storage_key,
};
use geo_types::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// A single Morton cell: a code together with the precision it belongs to.
///
/// # Example
///
/// ```
/// use zcell_rs::{EdgePolicy, GeoCell};
///
/// # fn main() -> Result<(), zcell_rs::ZcellError> {
/// // (lon, lat), like geo_types points
/// let cell = GeoCell::from_wgs84(&(-2.248, 53.481), 16)?;
/// println!("Cell ID: {}", cell.id());
/// println!("Bounds: {:?}", cell.bounds());
///
/// // Ranges to scan in an ordered store for everything in the 3x3 neighborhood
/// let ranges = cell.proximity_ranges(EdgePolicy::Wrap);
/// assert!(!ranges.is_empty() && ranges.len() <= 9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoCell {
    /// Interleaved cell code (latitude on even bits, longitude on odd bits)
    pub code: u64,
    /// Bits of quantization per axis
    pub precision: Precision,
}

impl GeoCell {
    pub(crate) fn new(code: u64, precision: Precision) -> Self {
        Self { code, precision }
    }

    /// Create a GeoCell from latitude and longitude, in that order.
    pub fn from_lat_lon(latitude: f64, longitude: f64, precision: u8) -> Result<Self, ZcellError> {
        let precision = Precision::new(precision)?;
        let code = encode_with(latitude, longitude, precision)?;
        Ok(Self::new(code, precision))
    }

    /// Create a GeoCell from WGS84 (lon/lat) coordinates
    ///
    /// # Example
    /// ```
    /// use zcell_rs::GeoCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), zcell_rs::ZcellError> {
    /// let from_tuple = GeoCell::from_wgs84(&(-2.248, 53.481), 12)?;
    /// let from_point = GeoCell::from_wgs84(&Point::new(-2.248, 53.481), 12)?;
    /// assert_eq!(from_tuple, from_point);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, precision: u8) -> Result<Self, ZcellError> {
        Self::from_lat_lon(coord.latitude(), coord.longitude(), precision)
    }

    /// Wrap an existing code. Fails if the code is wider than `2 * precision` bits.
    pub fn from_code(code: u64, precision: u8) -> Result<Self, ZcellError> {
        let precision = Precision::new(precision)?;
        if !precision.fits(code) {
            return Err(ZcellError::UnsupportedPrecision(precision.step()));
        }
        Ok(Self::new(code, precision))
    }

    /// Create a GeoCell from an encoded identifier
    ///
    /// # Example
    /// ```
    /// use zcell_rs::GeoCell;
    ///
    /// # fn main() -> Result<(), zcell_rs::ZcellError> {
    /// let cell = GeoCell::from_lat_lon(51.5, -0.12, 20)?;
    /// let restored = GeoCell::from_id(&cell.id())?;
    /// assert_eq!(cell, restored);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_id(id: &str) -> Result<Self, ZcellError> {
        let (code, precision) = decode_identifier(id)?;
        Ok(Self::new(code, precision))
    }

    /// Unique identifier for this cell (Base64 URL-safe)
    pub fn id(&self) -> String {
        generate_identifier(self.code, self.precision)
    }

    pub fn storage_key(&self) -> [u8; 8] {
        storage_key(self.code)
    }

    pub fn bounds(&self) -> BoundingBox {
        decode_with(self.code, self.precision)
    }

    /// Center of the cell as a `(lon, lat)` point.
    pub fn center(&self) -> Point<f64> {
        self.bounds().center()
    }

    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.bounds().contains(coord.latitude(), coord.longitude())
    }

    pub fn to_rect(&self) -> Rect<f64> {
        self.bounds().to_rect()
    }

    /// Converts this cell to a rectangular polygon in lon/lat.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.bounds().to_polygon()
    }

    pub fn neighbor(&self, direction: Direction, policy: EdgePolicy) -> GeoCell {
        Self::new(
            neighbor_with(self.code, direction, self.precision, policy),
            self.precision,
        )
    }

    pub fn neighbors(&self, policy: EdgePolicy) -> NeighborSet {
        neighbors_with(self.code, self.precision, policy)
    }

    /// Coalesced scan ranges for this cell and its eight neighbors.
    pub fn proximity_ranges(&self, policy: EdgePolicy) -> Vec<Interval> {
        self.neighbors(policy).intervals()
    }
}
