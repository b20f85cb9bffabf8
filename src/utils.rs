//! Utility functions for the leaderboard engine

use chrono::{DateTime, Utc};

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to six decimal places
pub fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(round1(33.333_333), 33.3);
        assert_eq!(round1(66.666_666), 66.7);
        assert_eq!(round2(16.454_9), 16.45);
        assert_eq!(round6(20.833_333_333_3), 20.833_333);
    }
}
