// src/math_utils.rs
use statrs::distribution::{ContinuousCDF, Normal};

/// Quantile of the standard normal distribution
///
/// `normal_quantile(0.975)` is the 1.96 behind the familiar 95% band.
pub fn normal_quantile(p: f64) -> f64 {
    let standard_normal = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");
    standard_normal.inverse_cdf(p)
}

/// Two-sided band quantile for a confidence level, e.g. 0.95 -> 1.96
pub fn band_quantile(level: f64) -> f64 {
    normal_quantile(0.5 + level / 2.0)
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_quantile_95() {
        let q = band_quantile(0.95);
        assert!(
            (q - 1.959964).abs() < 1e-4,
            "95% band quantile should be ~1.96, got {}",
            q
        );
    }

    #[test]
    fn test_normal_quantile_median() {
        assert!(normal_quantile(0.5).abs() < 1e-10);
    }
}
