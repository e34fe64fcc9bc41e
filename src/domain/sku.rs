// src/domain/sku.rs

/// Builds the synthetic per-run identifier for one listing: a condition
/// letter from the status badge plus a zero-padded sequence number.
///
/// The numeric part is the enumeration index offset by the operator's
/// starting number, so it is deterministic within a run regardless of
/// which worker finishes first.
pub fn make_sku(status: &str, index: usize, start_num: u32) -> String {
    let suffix = if status.to_lowercase().contains("new") {
        "-N"
    } else {
        "-U"
    };
    let number = start_num as usize + index;
    format!("CFS{suffix}-{number:04}")
}
