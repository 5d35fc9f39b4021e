//! Bit-exact fixed-point engine at the chip's native rate.

use super::{MIX_TAP_COUNT, TAP_COUNT};
use crate::delay_line::DelayLine;
use crate::processor::{ProcessData, SurroundProcessor, OUTPUT_CHANNELS};
use crate::registers::{Reg, ADDRESS_COUNT};
use crate::signal::{add_sat, mul_sat, Fixed};
use crate::tables::{decode_gain_fixed, tap_delay, NATIVE_BUFFER_LEN, REG_MASK};

/// Decoded gain cache size: GL1..GL8, GR1..GR8, VM, VC, VL, VR.
const GAIN_COUNT: usize = 20;

/// Per-tick output frame of the oversampled engines.
pub type OversampledData = ProcessData<Fixed, 2>;

/// Cycle-accurate fixed-point YM7128B engine.
///
/// Reproduces the chip's 14-bit data path: every adder and coefficient
/// multiplier saturates, gains are fractions over 2^13 truncated toward
/// zero, and each input sample yields two output pairs (the tap mixer runs
/// at twice the write rate).
///
/// # Example
///
/// ```
/// use ym7128b::{ChipFixed, Reg, SurroundProcessor};
///
/// let mut chip = ChipFixed::new();
/// chip.write(Reg::Vm.address(), 0x3F); // input at 0 dB
/// chip.write(Reg::Gl1.address(), 0x3F);
/// chip.write(Reg::Gr1.address(), 0x3F);
/// chip.write(Reg::Vl.address(), 0x3F);
/// chip.write(Reg::Vr.address(), 0x3F);
/// chip.start();
///
/// let mut data = ym7128b::ProcessData::new();
/// data.inputs = [4096, 4096];
/// chip.process(&mut data);
/// assert!(data.outputs[0][0] > 4000);
/// ```
#[derive(Clone)]
pub struct ChipFixed {
    registers: [u8; ADDRESS_COUNT],
    gains: [Fixed; GAIN_COUNT],
    coeffs: [Fixed; 2],
    taps: [u16; TAP_COUNT],
    buffer: DelayLine<Fixed>,
    filter_state: Fixed,
    hold_left: Fixed,
    hold_right: Fixed,
    running: bool,
}

impl ChipFixed {
    /// Create an engine with zeroed registers and a stopped gate.
    pub fn new() -> Self {
        Self {
            registers: [0; ADDRESS_COUNT],
            gains: [0; GAIN_COUNT],
            coeffs: [0; 2],
            taps: [0; TAP_COUNT],
            buffer: DelayLine::new(NATIVE_BUFFER_LEN),
            filter_state: 0,
            hold_left: 0,
            hold_right: 0,
            running: false,
        }
    }

    /// Zero registers, decoded caches, delay memory, filter state and the
    /// oversampling holds. The gate keeps its current position.
    pub fn reset(&mut self) {
        self.registers = [0; ADDRESS_COUNT];
        self.gains = [0; GAIN_COUNT];
        self.coeffs = [0; 2];
        self.taps = [0; TAP_COUNT];
        self.buffer.reset();
        self.filter_state = 0;
        self.hold_left = 0;
        self.hold_right = 0;
    }

    /// Open the processing gate.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Close the processing gate.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Write a register, masking the value to its field width. Addresses
    /// outside the register file are ignored.
    pub fn write(&mut self, address: u8, value: u8) {
        let address = address as usize;
        if address >= ADDRESS_COUNT {
            return;
        }
        let value = value & REG_MASK[address];
        self.registers[address] = value;

        match address {
            0x00..=0x13 => self.gains[address] = decode_gain_fixed(value),
            0x14 | 0x15 => self.coeffs[address - Reg::C0.address() as usize] = decode_gain_fixed(value),
            0x16..=0x1E => self.taps[address - Reg::T0.address() as usize] = tap_delay(value),
            _ => {}
        }
    }

    /// Read back a register byte (zero for out-of-range addresses).
    pub fn read(&self, address: u8) -> u8 {
        self.registers
            .get(address as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Consume one input frame and produce two oversampled output pairs.
    ///
    /// While the gate is closed the outputs are zeroed and no state moves.
    pub fn process(&mut self, data: &mut OversampledData) {
        if !self.running {
            data.outputs = [[0; 2]; OUTPUT_CHANNELS];
            return;
        }

        let input = ((data.inputs[0] as i32 + data.inputs[1] as i32) / 2) as Fixed;

        // Feedback tap through the one-pole low-pass.
        let feedback = self.buffer.read(self.taps[0] as usize);
        let filtered = add_sat(
            mul_sat(feedback, self.coeffs[0]),
            mul_sat(self.filter_state, self.coeffs[1]),
        );
        self.filter_state = filtered;

        // New delay-line head: input gain plus filtered feedback.
        let head = add_sat(
            mul_sat(input, self.gains[Reg::Vm as usize]),
            mul_sat(filtered, self.gains[Reg::Vc as usize]),
        );
        self.buffer.write(head);

        // Mix the eight taps into the stereo accumulators.
        let mut left: Fixed = 0;
        let mut right: Fixed = 0;
        for k in 0..MIX_TAP_COUNT {
            let sample = self.buffer.read(self.taps[k + 1] as usize);
            left = add_sat(left, mul_sat(sample, self.gains[Reg::Gl1 as usize + k]));
            right = add_sat(right, mul_sat(sample, self.gains[Reg::Gr1 as usize + k]));
        }

        // Half-phase interpolation: the second output pair averages the
        // current accumulators with the previous tick's.
        let mid_left = ((left as i32 + self.hold_left as i32) / 2) as Fixed;
        let mid_right = ((right as i32 + self.hold_right as i32) / 2) as Fixed;
        self.hold_left = left;
        self.hold_right = right;

        let vl = self.gains[Reg::Vl as usize];
        let vr = self.gains[Reg::Vr as usize];
        data.outputs[0][0] = mul_sat(left, vl);
        data.outputs[0][1] = mul_sat(mid_left, vl);
        data.outputs[1][0] = mul_sat(right, vr);
        data.outputs[1][1] = mul_sat(mid_right, vr);
    }
}

impl Default for ChipFixed {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChipFixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChipFixed")
            .field("registers", &self.registers)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

impl SurroundProcessor for ChipFixed {
    type Sample = Fixed;
    type Data = OversampledData;
    const OVERSAMPLING: usize = 2;

    fn reset(&mut self) {
        ChipFixed::reset(self)
    }

    fn start(&mut self) {
        ChipFixed::start(self)
    }

    fn stop(&mut self) {
        ChipFixed::stop(self)
    }

    fn write(&mut self, address: u8, value: u8) {
        ChipFixed::write(self, address, value)
    }

    fn read(&self, address: u8) -> u8 {
        ChipFixed::read(self, address)
    }

    fn process(&mut self, data: &mut Self::Data) {
        ChipFixed::process(self, data)
    }
}
