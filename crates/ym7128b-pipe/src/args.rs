//! Command-line argument handling for the pipe driver.
//!
//! Arguments are evaluated in command-line order, so later options (a
//! `--reg-GL1` after a `--preset`, say) override earlier ones.

use crate::error::{PipeError, Result};
use crate::format::SampleFormat;
use crate::presets;
use crate::volume::db_to_gain;
use ym7128b::{Reg, ADDRESS_COUNT, NATIVE_INPUT_RATE, REGISTER_COUNT};

/// Help text printed for `-h`/`--help`.
pub const USAGE: &str = "\
ym7128b-pipe - Yamaha YM7128B Surround Processor emulator

Reads a sample stream from standard input, runs it through the emulated
chip, and writes the stereo result to standard output in the same sample
format. The fixed and float engines double the output rate (the chip
oversamples its output stage by 2); the ideal and short engines emit one
stereo pair per input sample.

USAGE:
  ym7128b-pipe [OPTION]...

OPTIONS (evaluated in command-line order):

  -f, --format FORMAT   Sample format name; default: U8.
                        One of: U8, S8, U16_LE, U16_BE, S16_LE, S16_BE,
                        U32_LE, U32_BE, S32_LE, S32_BE, FLOAT_LE, FLOAT_BE,
                        FLOAT64_LE, FLOAT64_BE, dummy.
  -e, --engine ENGINE   Engine variant; default: fixed.
                        fixed:  bit-exact 14-bit data path, native rate,
                                2x oversampled output.
                        float:  floating-point data path, native rate,
                                2x oversampled output.
                        ideal:  floating-point, --rate clock, interpolated
                                fractional delay taps.
                        short:  14-bit data path, --rate clock, integer
                                delay taps.
  -r, --rate HZ         Sample rate for the ideal/short engines; >= 1.
                        Default: 23550 (the chip's native rate).
  --reg-NAME HEX        Set one register to a hexadecimal byte, e.g.
                        --reg-GL1 3F. NAME is one of GL1..GL8, GR1..GR8,
                        VM, VC, VL, VR, C0, C1, T0..T8.
  --regdump HEX         Hex string of up to 32 bytes written to registers
                        0, 1, 2, ... in order, e.g. --regdump 3F003C.
  --preset NAME         Load a named register configuration. One of: off,
                        direct, doubling, slapback, mono-echo, stereo-echo,
                        early-reflections, small-room, medium-room,
                        large-room, hall, dark-hall, plate, cave, canyon,
                        tunnel, spread, ambience, ensemble.
  --dry DB              Input passed straight to the output mix, in dB;
                        |DB| >= 128 mutes it. Default: muted.
  --wet DB              Processed signal level in dB; |DB| >= 128 mutes
                        it. Default: 0.
  -h, --help            Print this help and exit.
";

/// Engine variant selected by `--engine`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    /// Bit-exact fixed-point engine at the native rate
    Fixed,
    /// Floating-point engine at the native rate
    Float,
    /// Floating-point engine at a configurable rate
    Ideal,
    /// Fixed-point engine at a configurable rate
    Short,
}

impl Engine {
    /// Parse an engine name from the command line.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "fixed" => Some(Engine::Fixed),
            "float" => Some(Engine::Float),
            "ideal" => Some(Engine::Ideal),
            "short" => Some(Engine::Short),
            _ => None,
        }
    }

    /// Engine name as it appears in the usage text.
    #[allow(dead_code)]
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Fixed => "fixed",
            Engine::Float => "float",
            Engine::Ideal => "ideal",
            Engine::Short => "short",
        }
    }
}

/// Parsed command-line configuration.
#[derive(Debug)]
pub struct PipeArgs {
    /// Stream sample format.
    pub format: SampleFormat,
    /// Selected engine variant.
    pub engine: Engine,
    /// Sample rate for the rate-flexible engines.
    pub rate: u32,
    /// Register image to program before streaming.
    pub registers: [u8; ADDRESS_COUNT],
    /// Linear dry gain in the output mix.
    pub dry: f32,
    /// Linear wet gain in the output mix.
    pub wet: f32,
    /// Whether help was requested.
    pub show_help: bool,
}

impl Default for PipeArgs {
    fn default() -> Self {
        Self {
            format: SampleFormat::U8,
            engine: Engine::Fixed,
            rate: NATIVE_INPUT_RATE,
            registers: [0; ADDRESS_COUNT],
            dry: 0.0,
            wet: 1.0,
            show_help: false,
        }
    }
}

impl PipeArgs {
    /// Parse arguments (without the program name).
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    parsed.show_help = true;
                    return Ok(parsed);
                }
                "-f" | "--format" => {
                    let value = expect_value(&mut iter, &arg)?;
                    parsed.format = SampleFormat::from_str(&value)
                        .ok_or_else(|| PipeError::Config(format!("Unknown format: {value}")))?;
                }
                "-e" | "--engine" => {
                    let value = expect_value(&mut iter, &arg)?;
                    parsed.engine = Engine::from_str(&value)
                        .ok_or_else(|| PipeError::Config(format!("Unknown engine: {value}")))?;
                }
                "-r" | "--rate" => {
                    let value = expect_value(&mut iter, &arg)?;
                    let rate: u32 = value
                        .parse()
                        .map_err(|_| PipeError::Config(format!("Invalid rate: {value}")))?;
                    if rate < 1 {
                        return Err(PipeError::Config(format!("Invalid rate: {value}")));
                    }
                    parsed.rate = rate;
                }
                "--regdump" => {
                    let value = expect_value(&mut iter, &arg)?;
                    apply_regdump(&mut parsed.registers, &value)?;
                }
                "--preset" => {
                    let value = expect_value(&mut iter, &arg)?;
                    let preset = presets::find(&value)
                        .ok_or_else(|| PipeError::Config(format!("Unknown preset: {value}")))?;
                    parsed.registers[..REGISTER_COUNT].copy_from_slice(&preset.registers);
                }
                "--dry" => {
                    let value = expect_value(&mut iter, &arg)?;
                    parsed.dry = parse_db(&value)?;
                }
                "--wet" => {
                    let value = expect_value(&mut iter, &arg)?;
                    parsed.wet = parse_db(&value)?;
                }
                _ if arg.starts_with("--reg-") => {
                    let name = &arg["--reg-".len()..];
                    let reg = Reg::from_name(name)
                        .ok_or_else(|| PipeError::Config(format!("Unknown register: {name}")))?;
                    let value = expect_value(&mut iter, &arg)?;
                    parsed.registers[reg.address() as usize] = parse_hex_byte(&value)?;
                }
                _ => {
                    return Err(PipeError::Config(format!("Unknown switch: {arg}")));
                }
            }
        }

        Ok(parsed)
    }
}

fn expect_value(iter: &mut impl Iterator<Item = String>, switch: &str) -> Result<String> {
    iter.next()
        .ok_or_else(|| PipeError::Config(format!("Expecting value after: {switch}")))
}

fn parse_hex_byte(text: &str) -> Result<u8> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u8::from_str_radix(digits, 16)
        .map_err(|_| PipeError::Config(format!("Invalid register value: {text}")))
}

fn parse_db(text: &str) -> Result<f32> {
    let db: f64 = text
        .parse()
        .map_err(|_| PipeError::Config(format!("Invalid decibel value: {text}")))?;
    Ok(db_to_gain(db))
}

/// Write a hex byte string into the register image from address 0 up.
fn apply_regdump(registers: &mut [u8; ADDRESS_COUNT], dump: &str) -> Result<()> {
    let digits = dump
        .strip_prefix("0x")
        .or_else(|| dump.strip_prefix("0X"))
        .unwrap_or(dump);
    if digits.is_empty() || digits.len() % 2 != 0 || !digits.is_ascii() {
        return Err(PipeError::Config(format!("Malformed register dump: {dump}")));
    }
    if digits.len() / 2 > ADDRESS_COUNT {
        return Err(PipeError::Config(format!(
            "Register dump longer than {ADDRESS_COUNT} bytes: {dump}"
        )));
    }
    for (address, pair) in digits.as_bytes().chunks(2).enumerate() {
        let pair = std::str::from_utf8(pair).expect("chunked ASCII hex");
        registers[address] = u8::from_str_radix(pair, 16)
            .map_err(|_| PipeError::Config(format!("Malformed register dump: {dump}")))?;
    }
    Ok(())
}
