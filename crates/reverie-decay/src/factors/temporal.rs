/// Temporal decay factor: `e^(-rate × ageDays / halfLife)`.
///
/// Range: 0.0 – 1.0. A non-positive half-life disables decay.
pub fn calculate(age_days: f64, half_life_days: f64, base_decay_rate: f64) -> f64 {
    if half_life_days <= 0.0 {
        return 1.0;
    }
    (-base_decay_rate * age_days.max(0.0) / half_life_days).exp()
}
