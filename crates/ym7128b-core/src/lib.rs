//! YM7128B Surround Processor emulator.
//!
//! A cycle-accurate emulator of the Yamaha YM7128B, the discrete-time DSP
//! that produced pseudo-surround stereo from a mono input on late-80s sound
//! hardware. The chip is a 100 ms delay line with nine programmable taps:
//! one feeds back through a one-pole low-pass filter, eight feed the
//! left/right output mixers through sign-magnitude gain DACs.
//!
//! # Engine variants
//!
//! - [`ChipFixed`] - bit-exact 14-bit saturating data path at the native
//!   23550 Hz rate, 2x oversampled output.
//! - [`ChipFloat`] - same flow and timing with f32 arithmetic.
//! - [`ChipIdeal`] - f32 at a caller-chosen rate, fractional taps with
//!   linear interpolation, single-rate output.
//! - [`ChipIdealShort`] - 14-bit saturating arithmetic at a caller-chosen
//!   rate, integer tap scaling.
//!
//! All variants implement [`SurroundProcessor`].
//!
//! # Quick start
//!
//! ```
//! use ym7128b::{ChipFixed, ProcessData, Reg, SurroundProcessor};
//!
//! let mut chip = ChipFixed::new();
//! chip.write(Reg::Vm.address(), 0x3F); // input gain 0 dB
//! chip.write(Reg::Gl1.address(), 0x3F); // tap 1 to the left mixer
//! chip.write(Reg::Gr1.address(), 0x3F); // and to the right mixer
//! chip.write(Reg::Vl.address(), 0x3F);
//! chip.write(Reg::Vr.address(), 0x3F);
//! chip.write(Reg::T1.address(), 0x08); // tap 1 about 26 ms back
//! chip.start();
//!
//! let mut data = ProcessData::new();
//! data.inputs = [4096, 4096];
//! chip.process(&mut data); // two stereo pairs per input sample
//! ```
//!
//! The register surface is total: writes mask invalid bits, unknown
//! addresses are ignored, and `process` never fails. Streaming drivers can
//! therefore run the engine without an error path, which is what the
//! companion `ym7128b-pipe` binary does.

#![warn(missing_docs)]

mod chip;
mod delay_line;
mod processor;
mod registers;
mod signal;
mod tables;

pub use chip::{ChipFixed, ChipFloat, ChipIdeal, ChipIdealShort};
pub use delay_line::DelayLine;
pub use processor::{ProcessData, SurroundProcessor, INPUT_CHANNELS, OUTPUT_CHANNELS};
pub use registers::{Reg, ADDRESS_COUNT, ALL_REGS, REGISTER_COUNT};
pub use signal::{add_sat, clamp_f32, mul_sat, saturate, Fixed, FIXED_MAX, FIXED_MIN, GAIN_SHIFT};
pub use tables::{
    decode_gain_f32, decode_gain_fixed, tap_delay, GAIN_LEVELS, GAIN_LEVELS_FIXED, MAX_TAP_DELAY,
    NATIVE_BUFFER_LEN, NATIVE_INPUT_RATE, NATIVE_OUTPUT_RATE, REG_MASK, TAP_DELAYS,
    TAP_VALUE_COUNT,
};
