//! The four engine variants.
//!
//! All variants run the same signal-flow graph: feedback tap through the
//! one-pole low-pass into the delay-line head, eight mix taps into the
//! left/right accumulators, master gains on the way out. They differ in
//! numeric model and output rate:
//!
//! | Variant                  | Samples | Rate         | Output per tick |
//! |--------------------------|---------|--------------|-----------------|
//! | [`ChipFixed`]            | 14-bit  | native       | 2 (oversampled) |
//! | [`ChipFloat`]            | f32     | native       | 2 (oversampled) |
//! | [`ChipIdeal`]            | f32     | configurable | 1               |
//! | [`ChipIdealShort`]       | 14-bit  | configurable | 1               |

mod fixed;
mod float;
mod ideal;
mod short;

pub use fixed::ChipFixed;
pub use float::ChipFloat;
pub use ideal::ChipIdeal;
pub use short::ChipIdealShort;

/// Number of mix taps feeding the stereo accumulators.
pub(crate) const MIX_TAP_COUNT: usize = 8;

/// Total tap selectors: the feedback tap plus the eight mix taps.
pub(crate) const TAP_COUNT: usize = MIX_TAP_COUNT + 1;
