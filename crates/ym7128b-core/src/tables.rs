//! YM7128B hardware constants and decoding tables.
//!
//! The chip exposes all of its programmable state through 8-bit registers
//! whose fields are narrower than a byte: 6-bit sign-magnitude gain fields
//! and 5-bit delay-tap selectors. The tables here map raw register fields to
//! the quantities the signal flow actually consumes.

use crate::signal::{Fixed, FIXED_MAX};

/// Input (write) sample rate of the chip, in Hz.
pub const NATIVE_INPUT_RATE: u32 = 23_550;

/// Output sample rate of the oversampled engines (2x the input rate).
pub const NATIVE_OUTPUT_RATE: u32 = NATIVE_INPUT_RATE * 2;

/// Delay memory length at the native rate: 100 ms plus the head slot.
pub const NATIVE_BUFFER_LEN: usize = (NATIVE_INPUT_RATE / 10) as usize + 1;

/// Longest selectable tap delay, in samples at the native rate.
pub const MAX_TAP_DELAY: u16 = (NATIVE_BUFFER_LEN - 1) as u16;

/// Number of entries in a 5-bit selector table.
pub const TAP_VALUE_COUNT: usize = 32;

/// Sign bit of a 6-bit gain field (set = positive).
pub const GAIN_SIGN_BIT: u8 = 0x20;

/// Magnitude bits of a 6-bit gain field.
pub const GAIN_MAGNITUDE_MASK: u8 = 0x1F;

/// Valid bits per register address.
///
/// Addresses 0x00-0x15 carry 6-bit gain/coefficient fields, 0x16-0x1E carry
/// 5-bit tap selectors, and 0x1F is unassigned (reads back as zero).
pub const REG_MASK: [u8; 32] = [
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // GL1..GL8
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, // GR1..GR8
    0x3F, 0x3F, 0x3F, 0x3F, // VM, VC, VL, VR
    0x3F, 0x3F, // C0, C1
    0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, // T0..T8
    0x00, // unassigned
];

/// Gain magnitudes for the 5-bit magnitude index of a gain field.
///
/// Index 0 is silent; indices 1..=31 step from -60 dB to 0 dB in 2 dB
/// increments, the attenuation ladder of the chip's coefficient DAC.
pub const GAIN_LEVELS: [f32; 32] = [
    0.0,          // -inf
    0.001,        // -60 dB
    0.001_258_925_4,
    0.001_584_893_2,
    0.001_995_262_3,
    0.002_511_886_4,
    0.003_162_277_7,
    0.003_981_071_7,
    0.005_011_872_3,
    0.006_309_573_4,
    0.007_943_282_3,
    0.01,         // -40 dB
    0.012_589_254,
    0.015_848_932,
    0.019_952_623,
    0.025_118_864,
    0.031_622_777,
    0.039_810_717,
    0.050_118_723,
    0.063_095_734,
    0.079_432_823,
    0.1,          // -20 dB
    0.125_892_54,
    0.158_489_32,
    0.199_526_23,
    0.251_188_64,
    0.316_227_77,
    0.398_107_17,
    0.501_187_23,
    0.630_957_34,
    0.794_328_23,
    1.0,          // 0 dB
];

/// Fixed-point image of [`GAIN_LEVELS`]: magnitudes as fractions over 2^13,
/// with the unity entry clamped into the signed 14-bit range.
pub const GAIN_LEVELS_FIXED: [Fixed; 32] = [
    0, 8, 10, 13, 16, 21, 26, 33, 41, 52, 65, 82, 103, 130, 163, 206, //
    259, 326, 411, 517, 651, 819, 1031, 1298, 1635, 2058, 2591, 3261, //
    4106, 5169, 6507, FIXED_MAX,
];

/// Tap delays selectable by the 5-bit T registers, in samples at the
/// native rate. Index 0 reads the delay-line head; index 31 reads 100 ms
/// back.
pub const TAP_DELAYS: [u16; TAP_VALUE_COUNT] = [
    0, 75, 151, 227, 303, 379, 455, 531, //
    607, 683, 759, 835, 911, 987, 1063, 1139, //
    1215, 1291, 1367, 1443, 1519, 1595, 1671, 1747, //
    1823, 1899, 1975, 2051, 2127, 2203, 2279, 2355,
];

/// Decode a 6-bit sign-magnitude gain field to a float gain.
///
/// Bit 5 selects the polarity (set = positive); the low five bits index
/// [`GAIN_LEVELS`]. Both `0x00` and `0x20` decode to exactly zero.
#[inline]
pub fn decode_gain_f32(field: u8) -> f32 {
    let magnitude = GAIN_LEVELS[(field & GAIN_MAGNITUDE_MASK) as usize];
    if field & GAIN_SIGN_BIT != 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Decode a 6-bit sign-magnitude gain field to a signed 14-bit gain.
#[inline]
pub fn decode_gain_fixed(field: u8) -> Fixed {
    let magnitude = GAIN_LEVELS_FIXED[(field & GAIN_MAGNITUDE_MASK) as usize];
    if field & GAIN_SIGN_BIT != 0 {
        magnitude
    } else {
        -magnitude
    }
}

/// Decode a 5-bit tap selector to a delay in samples at the native rate.
#[inline]
pub fn tap_delay(field: u8) -> u16 {
    TAP_DELAYS[(field & 0x1F) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain_levels_monotonic() {
        for m in 1..GAIN_LEVELS.len() {
            assert!(
                GAIN_LEVELS[m] > GAIN_LEVELS[m - 1],
                "GAIN_LEVELS[{m}] not above predecessor"
            );
            assert!(
                GAIN_LEVELS_FIXED[m] > GAIN_LEVELS_FIXED[m - 1],
                "GAIN_LEVELS_FIXED[{m}] not above predecessor"
            );
        }
    }

    #[test]
    fn test_gain_levels_follow_two_db_ladder() {
        for m in 1..32 {
            let expected = 10.0f32.powf((2 * (m as i32 - 31)) as f32 / 20.0);
            let actual = GAIN_LEVELS[m];
            assert!(
                (actual - expected).abs() < 1e-6,
                "GAIN_LEVELS[{m}] = {actual}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_fixed_gains_match_float_ladder() {
        for m in 0..32 {
            let expected = ((GAIN_LEVELS[m] as f64 * 8192.0).round() as i32).min(FIXED_MAX as i32);
            assert_eq!(GAIN_LEVELS_FIXED[m] as i32, expected, "index {m}");
        }
    }

    #[test]
    fn test_negative_zero_collapses() {
        assert_eq!(decode_gain_f32(0x00), 0.0);
        assert_eq!(decode_gain_f32(0x20), 0.0);
        assert_eq!(decode_gain_fixed(0x00), 0);
        assert_eq!(decode_gain_fixed(0x20), 0);
    }

    #[test]
    fn test_gain_sign_convention() {
        // Sign bit set selects the positive branch; 0x3F is unity.
        assert_eq!(decode_gain_f32(0x3F), 1.0);
        assert_eq!(decode_gain_f32(0x1F), -1.0);
        assert_eq!(decode_gain_fixed(0x3F), FIXED_MAX);
        assert_eq!(decode_gain_fixed(0x1F), -FIXED_MAX);
    }

    #[test]
    fn test_gain_magnitude_symmetry() {
        for m in 0..32u8 {
            assert_eq!(decode_gain_f32(0x20 | m), -decode_gain_f32(m));
            assert_eq!(decode_gain_fixed(0x20 | m), -decode_gain_fixed(m));
        }
    }

    #[test]
    fn test_tap_delays_monotonic_and_bounded() {
        assert_eq!(TAP_DELAYS[0], 0);
        for i in 1..TAP_VALUE_COUNT {
            assert!(TAP_DELAYS[i] > TAP_DELAYS[i - 1]);
        }
        assert_eq!(TAP_DELAYS[31], MAX_TAP_DELAY);
        // Longest tap is 100 ms at the native rate.
        let ms = TAP_DELAYS[31] as f64 * 1000.0 / NATIVE_INPUT_RATE as f64;
        assert!((ms - 100.0).abs() < 0.05, "longest tap is {ms} ms");
    }

    #[test]
    fn test_reg_masks() {
        for addr in 0x00..=0x15 {
            assert_eq!(REG_MASK[addr], 0x3F, "gain field at {addr:#04x}");
        }
        for addr in 0x16..=0x1E {
            assert_eq!(REG_MASK[addr], 0x1F, "tap selector at {addr:#04x}");
        }
        assert_eq!(REG_MASK[0x1F], 0x00);
    }
}
