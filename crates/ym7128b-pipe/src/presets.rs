//! Named register configurations for `--preset`.
//!
//! Each preset is a complete 31-byte register image in address order:
//! GL1..GL8, GR1..GR8, VM, VC, VL, VR, C0, C1, T0..T8. Gain bytes are
//! sign-magnitude (bit 5 set = positive, low five bits = 2 dB steps up
//! from -60 dB); tap bytes select ~3.2 ms increments up to 100 ms.

use ym7128b::REGISTER_COUNT;

/// A named register image.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// Preset name as accepted by `--preset`.
    pub name: &'static str,
    /// Register values in address order.
    pub registers: [u8; REGISTER_COUNT],
}

/// Look up a preset by name.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

/// All built-in presets.
pub const PRESETS: [Preset; 19] = [
    // Everything silent: a scratchpad to build on with --reg options.
    Preset {
        name: "off",
        registers: [
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // GL
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // GR
            0x00, 0x00, 0x00, 0x00, // VM VC VL VR
            0x00, 0x00, // C0 C1
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // Straight through the zero-delay tap at 0 dB on both sides.
    Preset {
        name: "direct",
        registers: [
            0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // GL
            0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // GR
            0x3F, 0x00, 0x3F, 0x3F, // VM VC VL VR
            0x00, 0x00, // C0 C1
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // Dry plus a short offset copy on each side (19/29 ms).
    Preset {
        name: "doubling",
        registers: [
            0x3F, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // GL
            0x3F, 0x00, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, // GR
            0x3F, 0x00, 0x3E, 0x3E, // VM VC VL VR
            0x00, 0x00, // C0 C1
            0x00, 0x00, 0x06, 0x09, 0x00, 0x00, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // One hard echo at 80 ms, rockabilly style.
    Preset {
        name: "slapback",
        registers: [
            0x3F, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // GL
            0x3F, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // GR
            0x3F, 0x00, 0x3E, 0x3E, // VM VC VL VR
            0x00, 0x00, // C0 C1
            0x00, 0x00, 0x19, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // Decaying echo train down the centre, 39 ms apart.
    Preset {
        name: "mono-echo",
        registers: [
            0x3F, 0x3A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // GL
            0x3F, 0x3A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // GR
            0x3F, 0x3A, 0x3E, 0x3E, // VM VC VL VR
            0x3F, 0x00, // C0 C1
            0x0C, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // Echoes bouncing left then right off a 52 ms loop.
    Preset {
        name: "stereo-echo",
        registers: [
            0x3F, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // GL
            0x3F, 0x00, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, // GR
            0x3F, 0x38, 0x3E, 0x3E, // VM VC VL VR
            0x3F, 0x00, // C0 C1
            0x10, 0x00, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // First reflections only: six taps inside 23 ms, alternating sides
    // and polarities, no recirculation.
    Preset {
        name: "early-reflections",
        registers: [
            0x3F, 0x3A, 0x15, 0x38, 0x13, 0x35, 0x00, 0x00, // GL
            0x3F, 0x16, 0x39, 0x38, 0x36, 0x14, 0x00, 0x00, // GR
            0x3F, 0x00, 0x3E, 0x3E, // VM VC VL VR
            0x00, 0x00, // C0 C1
            0x00, 0x00, 0x01, 0x02, 0x03, 0x05, 0x07, 0x00, 0x00, // T0..T8
        ],
    },
    // Tight reflections with a lightly damped 16 ms loop.
    Preset {
        name: "small-room",
        registers: [
            0x3F, 0x3A, 0x17, 0x37, 0x00, 0x00, 0x00, 0x00, // GL
            0x3F, 0x18, 0x39, 0x37, 0x00, 0x00, 0x00, 0x00, // GR
            0x3F, 0x37, 0x3E, 0x3E, // VM VC VL VR
            0x3C, 0x38, // C0 C1
            0x05, 0x00, 0x03, 0x06, 0x09, 0x00, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // Reflections out to 48 ms and a longer recirculation path.
    Preset {
        name: "medium-room",
        registers: [
            0x3F, 0x39, 0x16, 0x36, 0x34, 0x00, 0x00, 0x00, // GL
            0x3F, 0x15, 0x38, 0x36, 0x13, 0x00, 0x00, 0x00, // GR
            0x3F, 0x39, 0x3E, 0x3E, // VM VC VL VR
            0x3D, 0x3A, // C0 C1
            0x08, 0x00, 0x04, 0x07, 0x0B, 0x0F, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // Sparse reflections out to 80 ms, wider and wetter.
    Preset {
        name: "large-room",
        registers: [
            0x3E, 0x3A, 0x17, 0x36, 0x14, 0x00, 0x00, 0x00, // GL
            0x3E, 0x16, 0x38, 0x34, 0x36, 0x00, 0x00, 0x00, // GR
            0x3F, 0x3A, 0x3E, 0x3E, // VM VC VL VR
            0x3D, 0x39, // C0 C1
            0x0D, 0x00, 0x06, 0x0B, 0x11, 0x19, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // All eight taps fanned from 13 to 97 ms over a damped 100 ms loop.
    Preset {
        name: "hall",
        registers: [
            0x3C, 0x1A, 0x39, 0x17, 0x36, 0x14, 0x33, 0x31, // GL
            0x1C, 0x3A, 0x19, 0x37, 0x16, 0x34, 0x13, 0x31, // GR
            0x3F, 0x3A, 0x3E, 0x3E, // VM VC VL VR
            0x3D, 0x39, // C0 C1
            0x1F, 0x04, 0x07, 0x0A, 0x0D, 0x11, 0x15, 0x19, 0x1E, // T0..T8
        ],
    },
    // The hall with the top rolled off hard in the feedback path.
    Preset {
        name: "dark-hall",
        registers: [
            0x3B, 0x19, 0x38, 0x16, 0x35, 0x13, 0x32, 0x30, // GL
            0x1B, 0x39, 0x18, 0x36, 0x15, 0x33, 0x12, 0x30, // GR
            0x3F, 0x3A, 0x3E, 0x3E, // VM VC VL VR
            0x39, 0x3C, // C0 C1
            0x1F, 0x04, 0x07, 0x0A, 0x0D, 0x11, 0x15, 0x19, 0x1E, // T0..T8
        ],
    },
    // Dense bright taps inside 58 ms, barely damped.
    Preset {
        name: "plate",
        registers: [
            0x3B, 0x19, 0x38, 0x16, 0x35, 0x13, 0x32, 0x30, // GL
            0x1B, 0x39, 0x18, 0x36, 0x15, 0x33, 0x12, 0x30, // GR
            0x3F, 0x39, 0x3E, 0x3E, // VM VC VL VR
            0x3E, 0x36, // C0 C1
            0x09, 0x01, 0x02, 0x03, 0x05, 0x08, 0x0B, 0x0E, 0x12, // T0..T8
        ],
    },
    // Slow 100 ms repeats that hang in the air.
    Preset {
        name: "cave",
        registers: [
            0x3E, 0x3A, 0x16, 0x34, 0x00, 0x00, 0x00, 0x00, // GL
            0x3E, 0x17, 0x39, 0x34, 0x00, 0x00, 0x00, 0x00, // GR
            0x3F, 0x3C, 0x3E, 0x3E, // VM VC VL VR
            0x3E, 0x00, // C0 C1
            0x1F, 0x00, 0x14, 0x1A, 0x1F, 0x00, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // Distant walls: two far slaps and a long dulled loop.
    Preset {
        name: "canyon",
        registers: [
            0x3E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // GL
            0x3E, 0x00, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, // GR
            0x3F, 0x3C, 0x3E, 0x3E, // VM VC VL VR
            0x3D, 0x36, // C0 C1
            0x1F, 0x00, 0x17, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // Regular 13 ms comb down a pipe, alternating polarity on the right.
    Preset {
        name: "tunnel",
        registers: [
            0x3D, 0x3A, 0x37, 0x34, 0x31, 0x2E, 0x2B, 0x28, // GL
            0x3D, 0x1A, 0x37, 0x14, 0x31, 0x0E, 0x2B, 0x08, // GR
            0x3F, 0x3B, 0x3E, 0x3E, // VM VC VL VR
            0x3E, 0x00, // C0 C1
            0x04, 0x00, 0x04, 0x08, 0x0C, 0x10, 0x14, 0x18, 0x1C, // T0..T8
        ],
    },
    // Stereo widener: antiphase copies a few milliseconds apart.
    Preset {
        name: "spread",
        registers: [
            0x3F, 0x3B, 0x1A, 0x00, 0x00, 0x00, 0x00, 0x00, // GL
            0x3F, 0x1B, 0x3A, 0x00, 0x00, 0x00, 0x00, 0x00, // GR
            0x3F, 0x00, 0x3E, 0x3E, // VM VC VL VR
            0x00, 0x00, // C0 C1
            0x00, 0x00, 0x01, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // A quiet 6 ms wash under the dry signal.
    Preset {
        name: "ambience",
        registers: [
            0x3F, 0x37, 0x14, 0x35, 0x00, 0x00, 0x00, 0x00, // GL
            0x3F, 0x17, 0x34, 0x35, 0x00, 0x00, 0x00, 0x00, // GR
            0x3F, 0x36, 0x3F, 0x3F, // VM VC VL VR
            0x3C, 0x3A, // C0 C1
            0x02, 0x00, 0x01, 0x03, 0x05, 0x00, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
    // Thickener around 16-23 ms with opposed polarities per side.
    Preset {
        name: "ensemble",
        registers: [
            0x3F, 0x3A, 0x18, 0x36, 0x00, 0x00, 0x00, 0x00, // GL
            0x3F, 0x1A, 0x38, 0x16, 0x00, 0x00, 0x00, 0x00, // GR
            0x3F, 0x00, 0x3E, 0x3E, // VM VC VL VR
            0x00, 0x00, // C0 C1
            0x00, 0x00, 0x05, 0x06, 0x07, 0x00, 0x00, 0x00, 0x00, // T0..T8
        ],
    },
];
