//! Common interface over the four chip engine variants.
//!
//! Every engine implements the same lifecycle and register surface; the
//! numeric sample type and the number of output samples per input tick are
//! what distinguish them. [`SurroundProcessor`] lets drivers and tests run
//! any variant through one code path.

/// Input channels consumed per `process` call. The chip is mono inside;
/// the two inputs are averaged.
pub const INPUT_CHANNELS: usize = 2;

/// Output channels produced per `process` call.
pub const OUTPUT_CHANNELS: usize = 2;

/// One processing tick: the input frame and the produced output frames.
///
/// `K` is the per-channel output count: 2 for the oversampled engines,
/// 1 for the ideal ones.
#[derive(Clone, Copy, Debug)]
pub struct ProcessData<S, const K: usize> {
    /// Input samples, one per input channel.
    pub inputs: [S; INPUT_CHANNELS],
    /// Output samples per channel, oversampled-first order.
    pub outputs: [[S; K]; OUTPUT_CHANNELS],
}

impl<S: Copy + Default, const K: usize> ProcessData<S, K> {
    /// A zeroed frame.
    pub fn new() -> Self {
        Self {
            inputs: [S::default(); INPUT_CHANNELS],
            outputs: [[S::default(); K]; OUTPUT_CHANNELS],
        }
    }
}

impl<S: Copy + Default, const K: usize> Default for ProcessData<S, K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Common interface for YM7128B engine variants.
///
/// Implementations are total: register writes mask invalid bits instead of
/// failing, out-of-range addresses are ignored, and `process` always
/// produces a frame (all zeros while the engine is stopped).
///
/// # Example
///
/// ```
/// use ym7128b::{ChipFloat, ProcessData, Reg, SurroundProcessor};
///
/// let mut chip = ChipFloat::new();
/// chip.write(Reg::Vm.address(), 0x3F);
/// chip.write(Reg::Gl1.address(), 0x3F);
/// chip.write(Reg::Gr1.address(), 0x3F);
/// chip.write(Reg::Vl.address(), 0x3F);
/// chip.write(Reg::Vr.address(), 0x3F);
/// chip.start();
///
/// let mut data = ProcessData::new();
/// data.inputs = [1.0, 1.0];
/// chip.process(&mut data);
/// assert!(data.outputs[0][0] > 0.9);
/// ```
pub trait SurroundProcessor {
    /// Sample type flowing through this engine.
    type Sample: Copy + Default;

    /// Process frame type (`ProcessData` with this engine's output count).
    type Data;

    /// Output samples per channel per input tick.
    const OVERSAMPLING: usize;

    /// Zero all mutable state, including the register file. The start/stop
    /// gate is unaffected.
    fn reset(&mut self);

    /// Open the processing gate.
    fn start(&mut self);

    /// Close the processing gate; subsequent frames are silent and do not
    /// advance engine state.
    fn stop(&mut self);

    /// Write a register. The value is masked to the field width of the
    /// address; addresses at or beyond the register file are ignored.
    fn write(&mut self, address: u8, value: u8);

    /// Read back a register byte (zero for out-of-range addresses).
    fn read(&self, address: u8) -> u8;

    /// Consume one input frame and produce this engine's output frames.
    fn process(&mut self, data: &mut Self::Data);
}
