//! Decibel helpers for the driver's dry/wet output mix.

/// Any |dB| at or beyond this mutes the path outright.
pub const MUTE_THRESHOLD_DB: f64 = 128.0;

/// Convert a decibel figure to a linear multiplier.
///
/// Values at or beyond [`MUTE_THRESHOLD_DB`] in either direction return
/// exactly zero, so `--dry -128` is a hard mute rather than a very quiet
/// path.
pub fn db_to_gain(db: f64) -> f32 {
    if db.abs() >= MUTE_THRESHOLD_DB {
        0.0
    } else {
        10f64.powf(db / 20.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unity_and_common_points() {
        assert_eq!(db_to_gain(0.0), 1.0);
        assert!((db_to_gain(-6.0) - 0.501187).abs() < 1e-5);
        assert!((db_to_gain(-20.0) - 0.1).abs() < 1e-7);
        assert!((db_to_gain(6.0) - 1.995262).abs() < 1e-5);
    }

    #[test]
    fn test_mute_threshold() {
        assert_eq!(db_to_gain(128.0), 0.0);
        assert_eq!(db_to_gain(-128.0), 0.0);
        assert_eq!(db_to_gain(500.0), 0.0);
        assert!(db_to_gain(-127.9) > 0.0);
    }
}
