/// Rounds a monetary amount to 2 decimal places, half away from zero.
/// Applied at every output boundary so serialized results are stable.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
