//! Confidence scoring and smoothing-factor bounds.

/// Smoothing factor used when the caller has no preference.
pub const DEFAULT_ALPHA: f64 = 0.3;
pub const MIN_ALPHA: f64 = 0.05;
pub const MAX_ALPHA: f64 = 0.9;

/// Confidence of a pattern seeded from a single observation.
pub const INITIAL_CONFIDENCE: f64 = 0.35;
/// Confidence of a suggestion derived without any pattern.
pub const COLD_START_CONFIDENCE: f64 = 0.25;
/// Factor applied when a suggestion had to be moved to respect rest.
pub const REST_PENALTY: f64 = 0.75;

pub const MIN_CONFIDENCE: f64 = 0.20;
pub const MAX_CONFIDENCE: f64 = 0.99;

/// Clamp `alpha` into `[0.05, 0.9]`. NaN falls back to the default.
pub fn clamp_alpha(alpha: f64) -> f64 {
    if alpha.is_nan() {
        return DEFAULT_ALPHA;
    }
    alpha.clamp(MIN_ALPHA, MAX_ALPHA)
}

/// Saturating confidence curve `1 - e^(-samples * alpha)`, clamped to
/// `[0.20, 0.99]`.
pub fn confidence_for(samples: u32, alpha: f64) -> f64 {
    let baseline = 1.0 - (-(f64::from(samples) * alpha)).exp();
    baseline.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

/// Round to two decimals for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
