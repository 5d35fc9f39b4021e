//! YM7128B surround processor stream driver.
//!
//! Reads interleaved two-channel samples from stdin, runs them through one
//! of the emulated chip variants, and writes interleaved stereo to stdout.
//! Register state comes from `--preset`, `--regdump` and `--reg-*` options,
//! evaluated in command-line order. Exit code is 0 on clean end of stream,
//! 1 on any configuration or I/O error.

mod args;
mod error;
mod format;
mod presets;
mod volume;

use std::env;
use std::io::{self, BufReader, BufWriter, Write};
use std::process;

use args::{Engine, PipeArgs, USAGE};
use error::Result;
use format::StreamSample;
use ym7128b::{
    ChipFixed, ChipFloat, ChipIdeal, ChipIdealShort, ProcessData, SurroundProcessor,
    INPUT_CHANNELS, OUTPUT_CHANNELS,
};

fn main() {
    let args = match PipeArgs::parse(env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    if args.show_help {
        println!("{USAGE}");
        return;
    }

    if let Err(err) = run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(args: &PipeArgs) -> Result<()> {
    match args.engine {
        Engine::Fixed => stream(ChipFixed::new(), args),
        Engine::Float => stream(ChipFloat::new(), args),
        Engine::Ideal => {
            let mut chip = ChipIdeal::new();
            chip.set_sample_rate(args.rate);
            stream(chip, args)
        }
        Engine::Short => {
            let mut chip = ChipIdealShort::new();
            chip.set_sample_rate(args.rate);
            stream(chip, args)
        }
    }
}

/// The read-process-write loop, generic over the engine variant.
///
/// A clean end of stream (zero bytes at a sample boundary) ends the loop
/// normally; a partial sample surfaces as an I/O error.
fn stream<P, S, const K: usize>(mut chip: P, args: &PipeArgs) -> Result<()>
where
    S: StreamSample,
    P: SurroundProcessor<Sample = S, Data = ProcessData<S, K>>,
{
    chip.reset();
    for (address, &value) in args.registers.iter().enumerate() {
        chip.write(address as u8, value);
    }
    chip.start();

    let mut reader = BufReader::new(io::stdin().lock());
    let mut writer = BufWriter::new(io::stdout().lock());
    let mut data: ProcessData<S, K> = ProcessData::new();

    'stream: loop {
        let mut dry_input = 0.0f32;
        for channel in 0..INPUT_CHANNELS {
            match args.format.read_sample(&mut reader)? {
                Some(value) => {
                    data.inputs[channel] = S::from_f32(value);
                    dry_input += value / INPUT_CHANNELS as f32;
                }
                None => break 'stream,
            }
        }

        chip.process(&mut data);

        for channel in 0..OUTPUT_CHANNELS {
            for phase in 0..K {
                let value = args.wet * data.outputs[channel][phase].to_f32() + args.dry * dry_input;
                args.format.write_sample(&mut writer, value)?;
            }
        }
    }

    writer.flush()?;
    chip.stop();
    Ok(())
}
