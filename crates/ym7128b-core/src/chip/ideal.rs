//! Rate-flexible floating-point engine with fractional taps.

use super::{MIX_TAP_COUNT, TAP_COUNT};
use crate::delay_line::DelayLine;
use crate::processor::{ProcessData, SurroundProcessor, OUTPUT_CHANNELS};
use crate::registers::{Reg, ADDRESS_COUNT};
use crate::tables::{decode_gain_f32, tap_delay, NATIVE_INPUT_RATE, REG_MASK};

/// Decoded gain cache size: GL1..GL8, GR1..GR8, VM, VC, VL, VR.
const GAIN_COUNT: usize = 20;

/// Per-tick output frame of the single-rate engines.
pub type SingleRateData<S> = ProcessData<S, 1>;

/// Idealized YM7128B engine at a caller-chosen sample rate.
///
/// Instead of quantizing tap positions to whole samples of the native
/// 23550 Hz clock, this variant scales each tap to the configured rate and
/// keeps the fractional part, reading the delay line with linear
/// interpolation. There is no output oversampling: one stereo pair per
/// input sample.
///
/// Call [`set_sample_rate`](ChipIdeal::set_sample_rate) before streaming;
/// a freshly constructed engine runs at the native rate.
#[derive(Clone)]
pub struct ChipIdeal {
    registers: [u8; ADDRESS_COUNT],
    gains: [f32; GAIN_COUNT],
    coeffs: [f32; 2],
    taps: [f32; TAP_COUNT],
    buffer: DelayLine<f32>,
    filter_state: f32,
    sample_rate: u32,
    running: bool,
}

impl ChipIdeal {
    /// Create an engine at the native rate with zeroed registers and a
    /// stopped gate.
    pub fn new() -> Self {
        let sample_rate = NATIVE_INPUT_RATE;
        Self {
            registers: [0; ADDRESS_COUNT],
            gains: [0.0; GAIN_COUNT],
            coeffs: [0.0; 2],
            taps: [0.0; TAP_COUNT],
            buffer: DelayLine::new(Self::buffer_len(sample_rate)),
            filter_state: 0.0,
            sample_rate,
            running: false,
        }
    }

    /// Delay memory needed at `rate`: the 100 ms maximum tap plus the head
    /// slot and the interpolation neighbour.
    fn buffer_len(rate: u32) -> usize {
        (rate / 10) as usize + 2
    }

    /// Samples (possibly fractional) behind the cursor for a tap selector
    /// field at the current rate.
    fn scaled_tap(&self, field: u8) -> f32 {
        tap_delay(field) as f32 * self.sample_rate as f32 / NATIVE_INPUT_RATE as f32
    }

    /// Configured sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Change the operating rate, rescaling every cached tap position and
    /// reallocating (and clearing) the delay memory to span 100 ms at the
    /// new rate. Rates below 1 Hz are clamped to 1.
    pub fn set_sample_rate(&mut self, rate: u32) {
        self.sample_rate = rate.max(1);
        self.buffer = DelayLine::new(Self::buffer_len(self.sample_rate));
        self.filter_state = 0.0;
        for (k, tap) in self.taps.iter_mut().enumerate() {
            let field = self.registers[Reg::T0.address() as usize + k];
            *tap = tap_delay(field) as f32 * self.sample_rate as f32 / NATIVE_INPUT_RATE as f32;
        }
    }

    /// Zero all mutable state except the gate and the configured rate.
    pub fn reset(&mut self) {
        self.registers = [0; ADDRESS_COUNT];
        self.gains = [0.0; GAIN_COUNT];
        self.coeffs = [0.0; 2];
        self.taps = [0.0; TAP_COUNT];
        self.buffer.reset();
        self.filter_state = 0.0;
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
            0x16..=0x1E => self.taps[address - Reg::T0.address() as usize] = self.scaled_tap(value),
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

    /// Consume one input frame and produce one stereo pair.
    pub fn process(&mut self, data: &mut SingleRateData<f32>) {
        if !self.running {
            data.outputs = [[0.0; 1]; OUTPUT_CHANNELS];
            return;
        }

        let input = (data.inputs[0] + data.inputs[1]) * 0.5;

        let feedback = self.buffer.read_interpolated(self.taps[0]);
        let filtered = feedback * self.coeffs[0] + self.filter_state * self.coeffs[1];
        self.filter_state = filtered;

        let head = input * self.gains[Reg::Vm as usize] + filtered * self.gains[Reg::Vc as usize];
        self.buffer.write(head);

        let mut left = 0.0f32;
        let mut right = 0.0f32;
        for k in 0..MIX_TAP_COUNT {
            let sample = self.buffer.read_interpolated(self.taps[k + 1]);
            left += sample * self.gains[Reg::Gl1 as usize + k];
            right += sample * self.gains[Reg::Gr1 as usize + k];
        }

        data.outputs[0][0] = left * self.gains[Reg::Vl as usize];
        data.outputs[1][0] = right * self.gains[Reg::Vr as usize];
    }
}

impl Default for ChipIdeal {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChipIdeal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChipIdeal")
            .field("registers", &self.registers)
            .field("sample_rate", &self.sample_rate)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

impl SurroundProcessor for ChipIdeal {
    type Sample = f32;
    type Data = SingleRateData<f32>;
    const OVERSAMPLING: usize = 1;

    fn reset(&mut self) {
        ChipIdeal::reset(self)
    }

    fn start(&mut self) {
        ChipIdeal::start(self)
    }

    fn stop(&mut self) {
        ChipIdeal::stop(self)
    }

    fn write(&mut self, address: u8, value: u8) {
        ChipIdeal::write(self, address, value)
    }

    fn read(&self, address: u8) -> u8 {
        ChipIdeal::read(self, address)
    }

    fn process(&mut self, data: &mut Self::Data) {
        ChipIdeal::process(self, data)
    }
}
