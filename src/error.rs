/// Error type for zcell-rs operations.
#[derive(Debug, PartialEq)]
pub enum ZcellError {
    /// The coordinate lies outside latitude [-90, 90] or longitude [-180, 180].
    OutOfRange { latitude: f64, longitude: f64 },
    /// The precision is outside the valid range (1-32 bits per axis), or a code
    /// is wider than the precision it was paired with.
    UnsupportedPrecision(u8),
    /// The cell identifier has an invalid length.
    InvalidIdentifierLength,
    /// The cell identifier checksum validation failed.
    InvalidChecksum,
    /// The identifier version is not supported.
    UnsupportedVersion(u8),
    /// Failed to decode Base64 identifier.
    Base64DecodeError,
}

impl std::fmt::Display for ZcellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZcellError::OutOfRange {
                latitude,
                longitude,
            } => write!(
                f,
                "Coordinate out of range: lat {}, lon {}",
                latitude, longitude
            ),
            ZcellError::UnsupportedPrecision(p) => write!(f, "Unsupported precision: {}", p),
            ZcellError::InvalidIdentifierLength => write!(f, "Invalid identifier length"),
            ZcellError::InvalidChecksum => write!(f, "Invalid checksum"),
            ZcellError::UnsupportedVersion(v) => write!(f, "Unsupported version: {}", v),
            ZcellError::Base64DecodeError => write!(f, "Base64 decode error"),
        }
    }
}

impl std::error::Error for ZcellError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ZcellError::OutOfRange {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert_eq!(err.to_string(), "Coordinate out of range: lat 91, lon 0");
        assert_eq!(
            ZcellError::UnsupportedPrecision(33).to_string(),
            "Unsupported precision: 33"
        );
    }
}
