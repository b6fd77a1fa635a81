use crate::error::ZcellError;
use crate::index::constants::{LAT_PLANE, LON_PLANE, MAX_PRECISION, MIN_PRECISION};
use serde::{Deserialize, Serialize};

/// Bits of quantization per axis, validated to lie in `1..=32`.
///
/// A code only has meaning together with the precision it was produced at, so
/// every operation takes one explicitly. The masks below are all derived from
/// the step, which keeps it the single source of truth for the code width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Precision(u8);

impl Precision {
    pub fn new(step: u8) -> Result<Self, ZcellError> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&step) {
            return Err(ZcellError::UnsupportedPrecision(step));
        }
        Ok(Self(step))
    }

    pub fn step(self) -> u8 {
        self.0
    }

    /// Total width of a code in bits (`2 * step`).
    pub fn code_bits(self) -> u32 {
        2 * u32::from(self.0)
    }

    /// Number of cells along each axis (`2^step`).
    pub fn cells_per_axis(self) -> u64 {
        1u64 << self.0
    }

    /// Largest valid per-axis cell index.
    pub fn max_index(self) -> u32 {
        (self.cells_per_axis() - 1) as u32
    }

    /// All bits a code at this precision may occupy.
    pub fn active_mask(self) -> u64 {
        u64::MAX >> (64 - self.code_bits())
    }

    /// Latitude bit plane restricted to the active width.
    pub fn lat_mask(self) -> u64 {
        LAT_PLANE & self.active_mask()
    }

    /// Longitude bit plane restricted to the active width.
    pub fn lon_mask(self) -> u64 {
        LON_PLANE & self.active_mask()
    }

    /// Whether `code` fits inside the active width.
    pub fn fits(self, code: u64) -> bool {
        code & !self.active_mask() == 0
    }
}

impl TryFrom<u8> for Precision {
    type Error = ZcellError;

    fn try_from(step: u8) -> Result<Self, Self::Error> {
        Precision::new(step)
    }
}

impl From<Precision> for u8 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}
