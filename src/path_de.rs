use serde::de::DeserializeOwned;

use crate::error::{GenerateError, Result};

/// Decode a fetched payload, naming the offending JSON path on failure
/// (e.g. `block_properties[3].type`).
pub fn decode_with_path<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| {
        let path = err.path().to_string();
        GenerateError::Decode(format!("at JSON path {path} → {}", err.into_inner()))
    })
}
