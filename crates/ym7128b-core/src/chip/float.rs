//! Floating-point engine at the chip's native rate.

use super::{MIX_TAP_COUNT, TAP_COUNT};
use crate::delay_line::DelayLine;
use crate::processor::{ProcessData, SurroundProcessor, OUTPUT_CHANNELS};
use crate::registers::{Reg, ADDRESS_COUNT};
use crate::tables::{decode_gain_f32, tap_delay, NATIVE_BUFFER_LEN, REG_MASK};

/// Decoded gain cache size: GL1..GL8, GR1..GR8, VM, VC, VL, VR.
const GAIN_COUNT: usize = 20;

/// Per-tick output frame of the oversampled engines.
pub type OversampledData = ProcessData<f32, 2>;

/// Floating-point YM7128B engine.
///
/// Identical signal flow and timing to [`ChipFixed`](crate::ChipFixed),
/// but with f32 samples and exact table gains: no saturation, no
/// truncation. Useful as a numerically clean reference and about as fast.
#[derive(Clone)]
pub struct ChipFloat {
    registers: [u8; ADDRESS_COUNT],
    gains: [f32; GAIN_COUNT],
    coeffs: [f32; 2],
    taps: [u16; TAP_COUNT],
    buffer: DelayLine<f32>,
    filter_state: f32,
    hold_left: f32,
    hold_right: f32,
    running: bool,
}

impl ChipFloat {
    /// Create an engine with zeroed registers and a stopped gate.
    pub fn new() -> Self {
        Self {
            registers: [0; ADDRESS_COUNT],
            gains: [0.0; GAIN_COUNT],
            coeffs: [0.0; 2],
            taps: [0; TAP_COUNT],
            buffer: DelayLine::new(NATIVE_BUFFER_LEN),
            filter_state: 0.0,
            hold_left: 0.0,
            hold_right: 0.0,
            running: false,
        }
    }

    /// Zero all mutable state except the gate.
    pub fn reset(&mut self) {
        self.registers = [0; ADDRESS_COUNT];
        self.gains = [0.0; GAIN_COUNT];
        self.coeffs = [0.0; 2];
        self.taps = [0; TAP_COUNT];
        self.buffer.reset();
        self.filter_state = 0.0;
        self.hold_left = 0.0;
        self.hold_right = 0.0;
    }

    /// Open the processing gate.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Close the processing gate.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Write a register, masking the value to its field width.
    pub fn write(&mut self, address: u8, value: u8) {
        let address = address as usize;
        if address >= ADDRESS_COUNT {
            return;
        }
        let value = value & REG_MASK[address];
        self.registers[address] = value;

        match address {
            0x00..=0x13 => self.gains[address] = decode_gain_f32(value),
            0x14 | 0x15 => self.coeffs[address - Reg::C0.address() as usize] = decode_gain_f32(value),
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
    pub fn process(&mut self, data: &mut OversampledData) {
        if !self.running {
            data.outputs = [[0.0; 2]; OUTPUT_CHANNELS];
            return;
        }

        let input = (data.inputs[0] + data.inputs[1]) * 0.5;

        let feedback = self.buffer.read(self.taps[0] as usize);
        let filtered = feedback * self.coeffs[0] + self.filter_state * self.coeffs[1];
        self.filter_state = filtered;

        let head = input * self.gains[Reg::Vm as usize] + filtered * self.gains[Reg::Vc as usize];
        self.buffer.write(head);

        let mut left = 0.0f32;
        let mut right = 0.0f32;
        for k in 0..MIX_TAP_COUNT {
            let sample = self.buffer.read(self.taps[k + 1] as usize);
            left += sample * self.gains[Reg::Gl1 as usize + k];
            right += sample * self.gains[Reg::Gr1 as usize + k];
        }

        let mid_left = (left + self.hold_left) * 0.5;
        let mid_right = (right + self.hold_right) * 0.5;
        self.hold_left = left;
        self.hold_right = right;

        let vl = self.gains[Reg::Vl as usize];
        let vr = self.gains[Reg::Vr as usize];
        data.outputs[0][0] = left * vl;
        data.outputs[0][1] = mid_left * vl;
        data.outputs[1][0] = right * vr;
        data.outputs[1][1] = mid_right * vr;
    }
}

impl Default for ChipFloat {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChipFloat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChipFloat")
            .field("registers", &self.registers)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

impl SurroundProcessor for ChipFloat {
    type Sample = f32;
    type Data = OversampledData;
    const OVERSAMPLING: usize = 2;

    fn reset(&mut self) {
        ChipFloat::reset(self)
    }

    fn start(&mut self) {
        ChipFloat::start(self)
    }

    fn stop(&mut self) {
        ChipFloat::stop(self)
    }

    fn write(&mut self, address: u8, value: u8) {
        ChipFloat::write(self, address, value)
    }

    fn read(&self, address: u8) -> u8 {
        ChipFloat::read(self, address)
    }

    fn process(&mut self, data: &mut Self::Data) {
        ChipFloat::process(self, data)
    }
}
