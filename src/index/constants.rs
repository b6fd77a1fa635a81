/// Identifier version for encoding/decoding
pub const IDENTIFIER_VERSION: u8 = 1;

/// Latitude domain [min, max]
pub const LAT_RANGE: [f64; 2] = [-90.0, 90.0];

/// Longitude domain [min, max]
pub const LON_RANGE: [f64; 2] = [-180.0, 180.0];

/// Smallest supported precision (bits per axis)
pub const MIN_PRECISION: u8 = 1;

/// Largest supported precision; two axes of 32 bits fill a u64 code.
pub const MAX_PRECISION: u8 = 32;

/// Even bit positions of a code, which carry the latitude axis.
pub(crate) const LAT_PLANE: u64 = 0x5555_5555_5555_5555;

/// Odd bit positions of a code, which carry the longitude axis.
pub(crate) const LON_PLANE: u64 = 0xAAAA_AAAA_AAAA_AAAA;
