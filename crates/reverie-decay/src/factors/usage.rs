/// Access boost: `min(cap, perAccess × accessCount)`.
///
/// Additive, unlike the decay factor. Frequently recalled memories stay
/// above their decayed importance.
pub fn calculate(access_count: u64, per_access: f64, cap: f64) -> f64 {
    (access_count as f64 * per_access).min(cap)
}
