//! Rate-flexible fixed-point engine with integer tap scaling.

use super::{MIX_TAP_COUNT, TAP_COUNT};
use crate::delay_line::DelayLine;
use crate::processor::{ProcessData, SurroundProcessor, OUTPUT_CHANNELS};
use crate::registers::{Reg, ADDRESS_COUNT};
use crate::signal::{add_sat, mul_sat, Fixed};
use crate::tables::{decode_gain_fixed, tap_delay, NATIVE_INPUT_RATE, REG_MASK};

/// Decoded gain cache size: GL1..GL8, GR1..GR8, VM, VC, VL, VR.
const GAIN_COUNT: usize = 20;

/// Per-tick output frame of this engine.
pub type SingleRateData = ProcessData<Fixed, 1>;

/// Rate-flexible engine with the fixed-point data path.
///
/// Keeps the saturating 14-bit arithmetic of [`ChipFixed`](crate::ChipFixed)
/// but runs at a caller-chosen rate like [`ChipIdeal`](crate::ChipIdeal).
/// Tap positions are scaled to the configured rate and rounded to whole
/// samples; there is no output oversampling and no interpolation, so the
/// output stays bit-exact and deterministic at any rate.
#[derive(Clone)]
pub struct ChipIdealShort {
    registers: [u8; ADDRESS_COUNT],
    gains: [Fixed; GAIN_COUNT],
    coeffs: [Fixed; 2],
    taps: [u32; TAP_COUNT],
    buffer: DelayLine<Fixed>,
    filter_state: Fixed,
    sample_rate: u32,
    running: bool,
}

impl ChipIdealShort {
    /// Create an engine at the native rate with zeroed registers and a
    /// stopped gate.
    pub fn new() -> Self {
        let sample_rate = NATIVE_INPUT_RATE;
        Self {
            registers: [0; ADDRESS_COUNT],
            gains: [0; GAIN_COUNT],
            coeffs: [0; 2],
            taps: [0; TAP_COUNT],
            buffer: DelayLine::new(Self::buffer_len(sample_rate)),
            filter_state: 0,
            sample_rate,
            running: false,
        }
    }

    fn buffer_len(rate: u32) -> usize {
        // Rounded tap scaling can land one sample past rate/10.
        (rate / 10) as usize + 2
    }

    /// Scale a tap selector to whole samples at the current rate, rounding
    /// to nearest.
    fn scaled_tap(&self, field: u8) -> u32 {
        let native = tap_delay(field) as u64;
        let rate = self.sample_rate as u64;
        ((native * rate + NATIVE_INPUT_RATE as u64 / 2) / NATIVE_INPUT_RATE as u64) as u32
    }

    /// Configured sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Change the operating rate; rescales cached taps and reallocates the
    /// delay memory. Rates below 1 Hz are clamped to 1.
    pub fn set_sample_rate(&mut self, rate: u32) {
        self.sample_rate = rate.max(1);
        self.buffer = DelayLine::new(Self::buffer_len(self.sample_rate));
        self.filter_state = 0;
        for k in 0..TAP_COUNT {
            let field = self.registers[Reg::T0.address() as usize + k];
            self.taps[k] = self.scaled_tap(field);
        }
    }

    /// Zero all mutable state except the gate and the configured rate.
    pub fn reset(&mut self) {
        self.registers = [0; ADDRESS_COUNT];
        self.gains = [0; GAIN_COUNT];
        self.coeffs = [0; 2];
        self.taps = [0; TAP_COUNT];
        self.buffer.reset();
        self.filter_state = 0;
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
            0x00..=0x13 => self.gains[address] = decode_gain_fixed(value),
            0x14 | 0x15 => self.coeffs[address - Reg::C0.address() as usize] = decode_gain_fixed(value),
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
    pub fn process(&mut self, data: &mut SingleRateData) {
        if !self.running {
            data.outputs = [[0; 1]; OUTPUT_CHANNELS];
            return;
        }

        let input = ((data.inputs[0] as i32 + data.inputs[1] as i32) / 2) as Fixed;

        let feedback = self.buffer.read(self.taps[0] as usize);
        let filtered = add_sat(
            mul_sat(feedback, self.coeffs[0]),
            mul_sat(self.filter_state, self.coeffs[1]),
        );
        self.filter_state = filtered;

        let head = add_sat(
            mul_sat(input, self.gains[Reg::Vm as usize]),
            mul_sat(filtered, self.gains[Reg::Vc as usize]),
        );
        self.buffer.write(head);

        let mut left: Fixed = 0;
        let mut right: Fixed = 0;
        for k in 0..MIX_TAP_COUNT {
            let sample = self.buffer.read(self.taps[k + 1] as usize);
            left = add_sat(left, mul_sat(sample, self.gains[Reg::Gl1 as usize + k]));
            right = add_sat(right, mul_sat(sample, self.gains[Reg::Gr1 as usize + k]));
        }

        data.outputs[0][0] = mul_sat(left, self.gains[Reg::Vl as usize]);
        data.outputs[1][0] = mul_sat(right, self.gains[Reg::Vr as usize]);
    }
}

impl Default for ChipIdealShort {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChipIdealShort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChipIdealShort")
            .field("registers", &self.registers)
            .field("sample_rate", &self.sample_rate)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

impl SurroundProcessor for ChipIdealShort {
    type Sample = Fixed;
    type Data = SingleRateData;
    const OVERSAMPLING: usize = 1;

    fn reset(&mut self) {
        ChipIdealShort::reset(self)
    }

    fn start(&mut self) {
        ChipIdealShort::start(self)
    }

    fn stop(&mut self) {
        ChipIdealShort::stop(self)
    }

    fn write(&mut self, address: u8, value: u8) {
        ChipIdealShort::write(self, address, value)
    }

    fn read(&self, address: u8) -> u8 {
        ChipIdealShort::read(self, address)
    }

    fn process(&mut self, data: &mut Self::Data) {
        ChipIdealShort::process(self, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::TAP_DELAYS;

    fn tick(chip: &mut ChipIdealShort, input: Fixed) -> [Fixed; 2] {
        let mut data = SingleRateData::new();
        data.inputs = [input, input];
        chip.process(&mut data);
        [data.outputs[0][0], data.outputs[1][0]]
    }

    #[test]
    fn test_tap_scaling_rounds_to_nearest() {
        let mut chip = ChipIdealShort::new();
        chip.set_sample_rate(44_100);
        // 75 native samples at 44.1 kHz: 75 * 44100 / 23550 = 140.44 -> 140.
        assert_eq!(chip.scaled_tap(0x01), 140);
        // 151 native samples: 282.75 -> 283.
        assert_eq!(chip.scaled_tap(0x02), 283);
    }

    #[test]
    fn test_delayed_impulse_is_bit_exact() {
        let run = |rate: u32| {
            let mut chip = ChipIdealShort::new();
            chip.set_sample_rate(rate);
            chip.write(Reg::Vm.address(), 0x3F);
            chip.write(Reg::Gl1.address(), 0x3F);
            chip.write(Reg::Gr1.address(), 0x3F);
            chip.write(Reg::Vl.address(), 0x3F);
            chip.write(Reg::Vr.address(), 0x3F);
            chip.write(Reg::T1.address(), 0x01);
            chip.start();

            let delay = chip.taps[1] as usize;
            let mut hits = Vec::new();
            for n in 0..delay * 2 {
                let out = tick(&mut chip, if n == 0 { 4096 } else { 0 });
                if out[0] != 0 {
                    hits.push((n, out[0]));
                }
            }
            (delay, hits)
        };

        let (delay, hits) = run(44_100);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0, delay);
        assert_eq!(hits, run(44_100).1);
    }

    #[test]
    fn test_native_rate_matches_tap_table() {
        let chip = ChipIdealShort::new();
        for field in 0..32u8 {
            assert_eq!(chip.scaled_tap(field), TAP_DELAYS[field as usize] as u32);
        }
    }

    #[test]
    fn test_stopped_engine_is_silent() {
        let mut chip = ChipIdealShort::new();
        chip.write(Reg::Vm.address(), 0x3F);
        chip.write(Reg::Gl1.address(), 0x3F);
        chip.write(Reg::Vl.address(), 0x3F);
        assert_eq!(tick(&mut chip, 4096), [0, 0]);

        chip.start();
        chip.stop();
        assert_eq!(tick(&mut chip, 4096), [0, 0]);
    }
}
