//! # zcell-rs
//!
//! Fixed-precision Morton (Z-order) cells over the lat/lon plane, built for
//! proximity scans against an ordered key-value index.
//!
//! There are currently three main entry points.
//!
//! ### 1. Free functions - the raw codec
//!
//! ```
//! use zcell_rs::{coalesce, decode, encode, neighbors};
//!
//! # fn main() -> Result<(), zcell_rs::ZcellError> {
//! let code = encode(53.481, -2.248, 16)?;
//! let bbox = decode(code, 16)?;
//! assert!(bbox.contains(53.481, -2.248));
//!
//! let ranges = coalesce(neighbors(code, 16)?.to_array());
//! assert!(ranges.len() <= 9);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GeoCell` - Single Cell Operations
//!
//! ```
//! use zcell_rs::{Direction, EdgePolicy, GeoCell};
//!
//! # fn main() -> Result<(), zcell_rs::ZcellError> {
//! let cell = GeoCell::from_wgs84(&(-2.248, 53.481), 16)?;
//! println!("{}", cell.id());
//! let north = cell.neighbor(Direction::North, EdgePolicy::Clamp);
//! let polygon = north.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `ProximityQuery` - Range Planning
//!
//! ```
//! use zcell_rs::{EdgePolicy, ProximityQuery};
//!
//! # fn main() -> Result<(), zcell_rs::ZcellError> {
//! let query = ProximityQuery::new(20)?.edge_policy(EdgePolicy::Clamp);
//! for range in query.ranges(51.5, -0.12)? {
//!     let (start, end_inclusive) = range.to_key_range();
//!     // store.range(start..=end_inclusive)
//! #   assert!(start <= end_inclusive);
//! }
//! # Ok(())
//! # }
//! ```
//!

pub mod cell;
pub mod coord;
pub mod error;
pub mod index;
pub mod query;

pub use cell::GeoCell;
pub use coord::Coordinate;
pub use error::ZcellError;
pub use index::{
    BoundingBox, Direction, EdgePolicy, IDENTIFIER_VERSION, Interval, LAT_RANGE, LON_RANGE,
    MAX_PRECISION, MIN_PRECISION, NeighborSet, Precision, cell_indices, coalesce, coalesce_codes,
    code_from_storage_key, decode, decode_identifier, deinterleave, encode, generate_identifier,
    interleave, neighbor, neighbors, neighbors_with_policy, storage_key,
};
pub use query::{ProximityQuery, encode_many};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), ZcellError> {
        let code = encode(0.0, 0.0, 10)?;
        assert_eq!(code, 786_432);

        let n = neighbors(code, 10)?;
        let ranges = coalesce(n.to_array());

        let covered: u64 = ranges.iter().map(Interval::count).sum();
        assert_eq!(covered, 9);
        for pair in ranges.windows(2) {
            assert!(pair[0].last() + 1 < pair[1].lo());
        }

        let bbox = decode(code, 10)?;
        assert!(bbox.contains(0.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_cell_and_free_functions_agree() -> Result<(), ZcellError> {
        let pt = point! { x: 139.6917, y: 35.6895 };
        let cell = GeoCell::from_wgs84(&pt, 22)?;

        assert_eq!(cell.code, encode(35.6895, 139.6917, 22)?);
        assert_eq!(cell.bounds(), decode(cell.code, 22)?);
        assert_eq!(
            cell.neighbors(EdgePolicy::Wrap),
            neighbors(cell.code, 22)?
        );
        assert_eq!(
            cell.proximity_ranges(EdgePolicy::Wrap),
            ProximityQuery::new(22)?.ranges_for(&pt)?
        );
        Ok(())
    }

    #[test]
    fn test_identifier_round_trip_through_query() -> Result<(), ZcellError> {
        let query = ProximityQuery::new(18)?;
        let cell = query.cell(-41.2865, 174.7762)?;
        let restored = GeoCell::from_id(&cell.id())?;
        assert_eq!(restored, cell);
        assert_eq!(code_from_storage_key(restored.storage_key()), cell.code);
        Ok(())
    }

    #[test]
    fn test_serde_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let cell = GeoCell::from_lat_lon(48.8566, 2.3522, 15)?;
        let json = serde_json::to_string(&cell)?;
        let back: GeoCell = serde_json::from_str(&json)?;
        assert_eq!(back, cell);

        let n = cell.neighbors(EdgePolicy::Clamp);
        let back: NeighborSet = serde_json::from_str(&serde_json::to_string(&n)?)?;
        assert_eq!(back, n);
        Ok(())
    }

    #[test]
    fn test_errors_surface_unchanged() {
        assert_eq!(
            encode(91.0, 0.0, 10),
            Err(ZcellError::OutOfRange {
                latitude: 91.0,
                longitude: 0.0
            })
        );
        assert_eq!(decode(0, 33), Err(ZcellError::UnsupportedPrecision(33)));
    }
}
