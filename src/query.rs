use crate::cell::GeoCell;
use crate::coord::Coordinate;
use crate::error::ZcellError;
use crate::index::{EdgePolicy, Interval, Precision, encode_with, neighbors_with};
use rayon::prelude::*;
use tracing::debug;

/// Configuration for proximity range planning.
///
/// # Example
/// ```
/// use zcell_rs::{EdgePolicy, ProximityQuery};
///
/// # fn main() -> Result<(), zcell_rs::ZcellError> {
/// let query = ProximityQuery::new(16)?.edge_policy(EdgePolicy::Clamp);
/// let ranges = query.ranges(53.481, -2.248)?;
/// for range in &ranges {
///     let (start, end_inclusive) = range.to_key_range();
///     println!("scan {:?}..={:?}", start, end_inclusive);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProximityQuery {
    pub precision: Precision,
    pub edge_policy: EdgePolicy,
}

impl ProximityQuery {
    pub fn new(precision: u8) -> Result<Self, ZcellError> {
        Ok(Self {
            precision: Precision::new(precision)?,
            edge_policy: EdgePolicy::default(),
        })
    }

    pub fn edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// The cell containing the given latitude/longitude.
    pub fn cell(&self, latitude: f64, longitude: f64) -> Result<GeoCell, ZcellError> {
        GeoCell::from_lat_lon(latitude, longitude, self.precision.step())
    }

    /// Ranges covering the 3x3 neighborhood around a latitude/longitude.
    pub fn ranges(&self, latitude: f64, longitude: f64) -> Result<Vec<Interval>, ZcellError> {
        let code = encode_with(latitude, longitude, self.precision)?;
        let intervals = neighbors_with(code, self.precision, self.edge_policy).intervals();
        debug!(
            code,
            step = self.precision.step(),
            intervals = intervals.len(),
            "planned proximity ranges"
        );
        Ok(intervals)
    }

    /// Same as [`ProximityQuery::ranges`] for a `(lon, lat)` coordinate.
    pub fn ranges_for(&self, coord: &impl Coordinate) -> Result<Vec<Interval>, ZcellError> {
        self.ranges(coord.latitude(), coord.longitude())
    }

    /// Plans ranges for many `(lat, lon)` pairs in parallel.
    ///
    /// Fails with the first error encountered; no partial result is returned.
    pub fn ranges_many(&self, points: &[(f64, f64)]) -> Result<Vec<Vec<Interval>>, ZcellError> {
        debug!(points = points.len(), "planning proximity ranges in batch");
        points
            .par_iter()
            .map(|&(lat, lon)| self.ranges(lat, lon))
            .collect()
    }
}

/// Encodes many `(lat, lon)` pairs in parallel at one precision.
pub fn encode_many(points: &[(f64, f64)], precision: u8) -> Result<Vec<u64>, ZcellError> {
    let precision = Precision::new(precision)?;
    debug!(points = points.len(), step = precision.step(), "encoding batch");
    points
        .par_iter()
        .map(|&(lat, lon)| encode_with(lat, lon, precision))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{coalesce, encode, neighbors};

    #[test]
    fn test_ranges_match_manual_pipeline() -> Result<(), ZcellError> {
        let query = ProximityQuery::new(12)?;
        let manual = coalesce(neighbors(encode(40.7128, -74.006, 12)?, 12)?.to_array());
        assert_eq!(query.ranges(40.7128, -74.006)?, manual);
        assert_eq!(query.ranges_for(&(-74.006, 40.7128))?, manual);
        Ok(())
    }

    #[test]
    fn test_clamp_policy_at_pole() -> Result<(), ZcellError> {
        let wrap = ProximityQuery::new(6)?;
        let clamp = wrap.edge_policy(EdgePolicy::Clamp);

        let clamped = clamp.ranges(90.0, 0.0)?;
        let wrapped = wrap.ranges(90.0, 0.0)?;

        let covered = |ranges: &[Interval]| ranges.iter().map(|r| r.count()).sum::<u64>();
        assert_eq!(covered(&clamped), 6);
        assert_eq!(covered(&wrapped), 9);
        Ok(())
    }

    #[test]
    fn test_corner_cell_range_reaches_top_code() -> Result<(), ZcellError> {
        let query = ProximityQuery::new(32)?.edge_policy(EdgePolicy::Clamp);
        let ranges = query.ranges(90.0, 180.0)?;

        let Some(&last) = ranges.last() else {
            panic!("no ranges planned for the corner cell");
        };
        assert!(last.contains(u64::MAX));
        assert_eq!(last.hi(), None);
        assert_eq!(*last.to_range_inclusive().end(), u64::MAX);
        for range in &ranges[..ranges.len() - 1] {
            assert!(range.hi().is_some());
        }
        Ok(())
    }

    #[test]
    fn test_invalid_precision() {
        assert_eq!(
            ProximityQuery::new(0),
            Err(ZcellError::UnsupportedPrecision(0))
        );
    }

    #[test]
    fn test_ranges_many_matches_sequential() -> Result<(), ZcellError> {
        let query = ProximityQuery::new(20)?;
        let points = vec![(0.0, 0.0), (51.5, -0.12), (-33.86, 151.2), (89.9, 179.9)];

        let batch = query.ranges_many(&points)?;
        assert_eq!(batch.len(), points.len());
        for (ranges, &(lat, lon)) in batch.iter().zip(&points) {
            assert_eq!(ranges, &query.ranges(lat, lon)?);
        }
        Ok(())
    }

    #[test]
    fn test_batch_fails_whole() {
        let points = vec![(0.0, 0.0), (95.0, 0.0)];
        assert!(encode_many(&points, 10).is_err());
        assert!(
            ProximityQuery::new(10)
                .map(|q| q.ranges_many(&points))
                .is_ok_and(|r| r.is_err())
        );
    }

    #[test]
    fn test_encode_many() -> Result<(), ZcellError> {
        let codes = encode_many(&[(0.0, 0.0), (-90.0, -180.0)], 10)?;
        assert_eq!(codes, vec![786_432, 0]);
        Ok(())
    }
}
