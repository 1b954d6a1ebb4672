//! The hex envelope PostGIS uses to ship EWKB as SQL text.

use crate::error::Result;

/// Decode hex text into raw bytes. Upper and lower case digits are both accepted.
pub fn decode_hex(text: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

/// Encode raw bytes as lowercase hex text.
pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}
