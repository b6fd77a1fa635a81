use crate::error::ZcellError;
use crate::index::constants::{LAT_RANGE, LON_RANGE};
use crate::index::interleave::{deinterleave, interleave};
use crate::index::precision::Precision;
use geo_types::{Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The exact lat/lon rectangle covered by one cell code at one precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Returns true if the point lies inside the box, edges included.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&latitude)
            && (self.lon_min..=self.lon_max).contains(&longitude)
    }

    /// Center of the box as a `(lon, lat)` point.
    pub fn center(&self) -> Point<f64> {
        Point::new(
            (self.lon_min + self.lon_max) / 2.0,
            (self.lat_min + self.lat_max) / 2.0,
        )
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.lon_min, y: self.lat_min },
            coord! { x: self.lon_max, y: self.lat_max },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

/// Quantizes one axis onto the `2^step` grid, truncating toward the lower cell edge.
///
/// The exact upper bound of the domain scales to `2^step`, one past the last
/// cell, so it is clamped onto the last cell.
fn quantize(value: f64, range: [f64; 2], precision: Precision) -> u32 {
    let offset = (value - range[0]) / (range[1] - range[0]);
    let scaled = (offset * precision.cells_per_axis() as f64) as u64;
    if scaled > u64::from(precision.max_index()) {
        trace!(value, step = precision.step(), "clamping upper domain bound onto last cell");
        return precision.max_index();
    }
    scaled as u32
}

fn dequantize(index: u32, range: [f64; 2], precision: Precision) -> (f64, f64) {
    let cells = precision.cells_per_axis() as f64;
    let span = range[1] - range[0];
    let min = range[0] + (f64::from(index) / cells) * span;
    let max = range[0] + ((f64::from(index) + 1.0) / cells) * span;
    (min, max)
}

/// Encodes a latitude/longitude pair into a Morton cell code.
///
/// Latitude occupies the even bits and longitude the odd bits of the low
/// `2 * precision` bits; everything above is zero.
pub fn encode(latitude: f64, longitude: f64, precision: u8) -> Result<u64, ZcellError> {
    let precision = Precision::new(precision)?;
    encode_with(latitude, longitude, precision)
}

pub(crate) fn encode_with(
    latitude: f64,
    longitude: f64,
    precision: Precision,
) -> Result<u64, ZcellError> {
    if !(LAT_RANGE[0]..=LAT_RANGE[1]).contains(&latitude)
        || !(LON_RANGE[0]..=LON_RANGE[1]).contains(&longitude)
    {
        return Err(ZcellError::OutOfRange {
            latitude,
            longitude,
        });
    }

    let ilat = quantize(latitude, LAT_RANGE, precision);
    let ilon = quantize(longitude, LON_RANGE, precision);

    Ok(interleave(ilat, ilon))
}

/// Decodes a cell code back into the bounding box of its cell.
///
/// Bits above `2 * precision` are ignored; a code must be decoded at the
/// precision it was encoded with for the result to mean anything.
pub fn decode(code: u64, precision: u8) -> Result<BoundingBox, ZcellError> {
    let precision = Precision::new(precision)?;
    Ok(decode_with(code, precision))
}

pub(crate) fn decode_with(code: u64, precision: Precision) -> BoundingBox {
    let (ilat, ilon) = cell_indices(code, precision);
    let (lat_min, lat_max) = dequantize(ilat, LAT_RANGE, precision);
    let (lon_min, lon_max) = dequantize(ilon, LON_RANGE, precision);

    BoundingBox {
        lat_min,
        lat_max,
        lon_min,
        lon_max,
    }
}

/// Per-axis `(lat_index, lon_index)` of a code on the `2^step` grid.
pub fn cell_indices(code: u64, precision: Precision) -> (u32, u32) {
    deinterleave(code & precision.active_mask())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_origin_is_grid_midpoint() -> Result<(), ZcellError> {
        let code = encode(0.0, 0.0, 10)?;
        assert_eq!(code, 786_432);
        assert_eq!(deinterleave(code), (512, 512));
        Ok(())
    }

    #[test]
    fn test_encode_lower_corner_is_zero() -> Result<(), ZcellError> {
        assert_eq!(encode(-90.0, -180.0, 5)?, 0);
        Ok(())
    }

    #[test]
    fn test_encode_upper_corner_clamps_to_last_cell() -> Result<(), ZcellError> {
        let code = encode(90.0, 180.0, 5)?;
        assert_eq!(deinterleave(code), (31, 31));
        assert_eq!(code, (1 << 10) - 1);

        let full = encode(90.0, 180.0, 32)?;
        assert_eq!(full, u64::MAX);
        Ok(())
    }

    #[test]
    fn test_encode_out_of_range() {
        assert_eq!(
            encode(91.0, 0.0, 10),
            Err(ZcellError::OutOfRange {
                latitude: 91.0,
                longitude: 0.0
            })
        );
        assert!(encode(0.0, -180.5, 10).is_err());
        assert!(encode(f64::NAN, 0.0, 10).is_err());
    }

    #[test]
    fn test_encode_unsupported_precision() {
        assert_eq!(
            encode(0.0, 0.0, 0),
            Err(ZcellError::UnsupportedPrecision(0))
        );
        assert_eq!(
            encode(0.0, 0.0, 33),
            Err(ZcellError::UnsupportedPrecision(33))
        );
    }

    #[test]
    fn test_high_bits_stay_clear() -> Result<(), ZcellError> {
        for step in 1..=31u8 {
            let code = encode(89.999, 179.999, step)?;
            assert_eq!(code >> (2 * u32::from(step)), 0);
        }
        Ok(())
    }

    #[test]
    fn test_decode_origin_cell() -> Result<(), ZcellError> {
        let bbox = decode(786_432, 10)?;
        assert_eq!(bbox.lat_min, 0.0);
        assert_eq!(bbox.lat_max, 0.17578125);
        assert_eq!(bbox.lon_min, 0.0);
        assert_eq!(bbox.lon_max, 0.3515625);
        Ok(())
    }

    #[test]
    fn test_decode_contains_encoded_point() -> Result<(), ZcellError> {
        let (lat, lon) = (53.48082746395233, -2.2479699500757597);
        for step in [1u8, 8, 16, 26, 32] {
            let bbox = decode(encode(lat, lon, step)?, step)?;
            assert!(bbox.contains(lat, lon), "step {step}: {bbox:?}");
        }
        Ok(())
    }

    #[test]
    fn test_decode_ignores_bits_above_precision() -> Result<(), ZcellError> {
        let code = encode(12.5, 45.0, 8)?;
        assert_eq!(decode(code | (1 << 40), 8)?, decode(code, 8)?);
        Ok(())
    }

    #[test]
    fn test_bounding_box_geometry() -> Result<(), ZcellError> {
        let bbox = decode(0, 1)?;
        assert_eq!(bbox.center(), Point::new(-90.0, -45.0));
        let polygon = bbox.to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 5);
        Ok(())
    }
}
