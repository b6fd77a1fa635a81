use crate::error::ZcellError;
use crate::index::constants::IDENTIFIER_VERSION;
use crate::index::precision::Precision;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

const IDENTIFIER_BYTES: usize = 11;

/// Big-endian bytes of `code`; byte order matches numeric order in a sorted store.
pub fn storage_key(code: u64) -> [u8; 8] {
    code.to_be_bytes()
}

pub fn code_from_storage_key(key: [u8; 8]) -> u64 {
    u64::from_be_bytes(key)
}

/// Encodes a code and its precision as a URL-safe Base64 string.
///
/// Layout: version, precision, code (8 bytes, big-endian), checksum.
pub fn generate_identifier(code: u64, precision: Precision) -> String {
    let mut binary_data = Vec::with_capacity(IDENTIFIER_BYTES);
    binary_data.push(IDENTIFIER_VERSION);
    binary_data.push(precision.step());
    binary_data.extend_from_slice(&storage_key(code));

    let checksum: u8 = binary_data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    binary_data.push(checksum);

    URL_SAFE_NO_PAD.encode(&binary_data)
}

pub fn decode_identifier(identifier: &str) -> Result<(u64, Precision), ZcellError> {
    let binary_data = URL_SAFE_NO_PAD
        .decode(identifier)
        .map_err(|_| ZcellError::Base64DecodeError)?;

    if binary_data.len() != IDENTIFIER_BYTES {
        return Err(ZcellError::InvalidIdentifierLength);
    }

    let (data, checksum_bytes) = binary_data.split_at(IDENTIFIER_BYTES - 1);
    let checksum = checksum_bytes[0];

    let calculated_checksum: u8 = data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    if calculated_checksum != checksum {
        return Err(ZcellError::InvalidChecksum);
    }

    let version = data[0];
    if version != IDENTIFIER_VERSION {
        return Err(ZcellError::UnsupportedVersion(version));
    }

    let precision = Precision::new(data[1])?;
    let code_bytes: [u8; 8] = data[2..10]
        .try_into()
        .map_err(|_| ZcellError::InvalidIdentifierLength)?;
    let code = code_from_storage_key(code_bytes);

    if !precision.fits(code) {
        return Err(ZcellError::UnsupportedPrecision(precision.step()));
    }

    Ok((code, precision))
}
