use crate::error::CoreResult;
use serde::Serialize;

// Output format of the written theme manifest:
// - UTF-8 JSON (no BOM)
// - two-space indentation, one key per line
// - keys in insertion order (serde_json `preserve_order`), never re-sorted
// - no trailing newline
pub fn to_pretty_bytes<T: Serialize>(value: &T) -> CoreResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(value)?)
}
