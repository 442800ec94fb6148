const GIB: f64 = (1u64 << 30) as f64;

/// Convert a byte count to gibibytes, the unit every size on the dashboard uses.
pub fn gib(bytes: u64) -> f64 {
    bytes as f64 / GIB
}

/// Share of `total` not covered by `free`, as a percentage.
///
/// Returns `0.0` for an empty total (e.g. a mount that could not be found).
pub fn used_percent(total: u64, free: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    total.saturating_sub(free) as f64 / total as f64 * 100.0
}
