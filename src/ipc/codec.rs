use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::ProtocolError;

/// Serialize `value` as one line, newline included.
pub fn encode_line<T: Serialize>(value: &T) -> Result<String, ProtocolError> {
    let mut line = serde_json::to_string(value).map_err(ProtocolError::Encode)?;
    line.push('\n');
    Ok(line)
}

/// Parse one line. Surrounding whitespace is ignored.
pub fn decode_line<T: DeserializeOwned>(line: &str) -> Result<T, ProtocolError> {
    serde_json::from_str(line.trim()).map_err(ProtocolError::Malformed)
}
