//! Response status classification.

/// Status codes the key manager uses for a successful call.
pub const SUCCESS_STATUSES: [u16; 6] = [200, 201, 202, 203, 204, 206];

/// Returns true if `status` counts as success.
///
/// Only the codes in [`SUCCESS_STATUSES`] qualify. Notably 205 and 207 are
/// failures even though they sit in the 2xx range.
pub fn is_success(status: u16) -> bool {
    SUCCESS_STATUSES.contains(&status)
}
