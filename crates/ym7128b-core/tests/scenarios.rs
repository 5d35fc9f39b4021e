//! End-to-end behavioural scenarios run against the public API.

use ym7128b::{
    ChipFixed, ChipFloat, ChipIdeal, ChipIdealShort, ProcessData, Reg, SurroundProcessor, Fixed,
    FIXED_MAX, FIXED_MIN, REG_MASK, TAP_DELAYS,
};

/// Registers for the straight-through path: input gain, tap 1 at the
/// delay-line head, both mixers and both masters at 0 dB.
const DIRECT: &[(Reg, u8)] = &[
    (Reg::Vm, 0x3F),
    (Reg::Gl1, 0x3F),
    (Reg::Gr1, 0x3F),
    (Reg::Vl, 0x3F),
    (Reg::Vr, 0x3F),
];

fn configure<P: SurroundProcessor>(chip: &mut P, regs: &[(Reg, u8)]) {
    chip.reset();
    for &(reg, value) in regs {
        chip.write(reg.address(), value);
    }
    chip.start();
}

fn tick_float(chip: &mut ChipFloat, input: f32) -> [[f32; 2]; 2] {
    let mut data = ProcessData::new();
    data.inputs = [input, input];
    chip.process(&mut data);
    data.outputs
}

fn tick_fixed(chip: &mut ChipFixed, input: Fixed) -> [[Fixed; 2]; 2] {
    let mut data = ProcessData::new();
    data.inputs = [input, input];
    chip.process(&mut data);
    data.outputs
}

#[test]
fn register_file_round_trips_through_masks() {
    let mut chip = ChipFixed::new();
    for address in 0..32u8 {
        for value in [0x00u8, 0x1F, 0x20, 0x3F, 0x7F, 0xFF] {
            chip.write(address, value);
            assert_eq!(
                chip.read(address),
                value & REG_MASK[address as usize],
                "address {address:#04x}, value {value:#04x}"
            );
        }
    }
}

#[test]
fn stopped_engines_do_not_advance_or_touch_registers() {
    fn check<P: SurroundProcessor>(mut chip: P, mut drive: impl FnMut(&mut P)) {
        configure(&mut chip, DIRECT);
        chip.stop();
        let snapshot: Vec<u8> = (0..32).map(|a| chip.read(a)).collect();

        drive(&mut chip);

        let after: Vec<u8> = (0..32).map(|a| chip.read(a)).collect();
        assert_eq!(snapshot, after);
    }

    check(ChipFixed::new(), |chip| {
        for _ in 0..100 {
            let mut data = ProcessData::new();
            data.inputs = [FIXED_MAX, FIXED_MAX];
            chip.process(&mut data);
            assert_eq!(data.outputs, [[0; 2]; 2]);
        }
    });
    check(ChipIdeal::new(), |chip| {
        for _ in 0..100 {
            let mut data = ProcessData::new();
            data.inputs = [1.0, 1.0];
            chip.process(&mut data);
            assert_eq!(data.outputs, [[0.0; 1]; 2]);
        }
    });
}

#[test]
fn passthrough_impulse_float() {
    let mut chip = ChipFloat::new();
    configure(&mut chip, DIRECT);

    let first = tick_float(&mut chip, 1.0);
    assert!((first[0][0] - 1.0).abs() < 1e-6);
    assert!((first[1][0] - 1.0).abs() < 1e-6);

    // Oversampled tail of the impulse, then silence.
    let second = tick_float(&mut chip, 0.0);
    assert!((second[0][1] - 0.5).abs() < 1e-6);
    for _ in 0..100 {
        let out = tick_float(&mut chip, 0.0);
        assert_eq!(out[0][0], 0.0);
        assert_eq!(out[1][0], 0.0);
    }
}

#[test]
fn single_tap_delays_impulse_bit_exactly() {
    let run = || {
        let mut chip = ChipFixed::new();
        configure(&mut chip, DIRECT);
        chip.write(Reg::T1.address(), 0x01);

        let delay = TAP_DELAYS[1] as usize;
        let mut first_hit = None;
        let mut trace = Vec::new();
        for n in 0..delay * 2 {
            let out = tick_fixed(&mut chip, if n == 0 { 4096 } else { 0 });
            trace.push(out);
            if out[0][0] != 0 && first_hit.is_none() {
                first_hit = Some(n);
            }
        }
        (first_hit, trace)
    };

    let (first_hit, trace) = run();
    assert_eq!(first_hit, Some(TAP_DELAYS[1] as usize));
    assert_eq!(trace, run().1, "fixed engine must be bit-exact across runs");
}

#[test]
fn unity_feedback_stays_bounded() {
    let mut chip = ChipFloat::new();
    configure(
        &mut chip,
        &[
            (Reg::Vm, 0x3F),
            (Reg::Vc, 0x3F),
            (Reg::T0, 0x01),
            (Reg::C0, 0x3F),
            (Reg::C1, 0x00),
            (Reg::Gl1, 0x3F),
            (Reg::Gr1, 0x3F),
            (Reg::Vl, 0x3F),
            (Reg::Vr, 0x3F),
        ],
    );

    for n in 0..20_000 {
        let out = tick_float(&mut chip, if n == 0 { 1.0 } else { 0.0 });
        for channel in out {
            for sample in channel {
                assert!(sample.abs() <= 1.0 + 1e-5, "sample {sample} at tick {n}");
            }
        }
    }
}

#[test]
fn reset_silences_the_tail() {
    let mut chip = ChipFixed::new();
    configure(&mut chip, DIRECT);
    chip.write(Reg::T1.address(), 0x1F);
    chip.write(Reg::Vc.address(), 0x3A);
    chip.write(Reg::T0.address(), 0x10);
    chip.write(Reg::C0.address(), 0x3F);

    for _ in 0..1000 {
        tick_fixed(&mut chip, 4096);
    }

    chip.reset();
    chip.write(Reg::Vl.address(), 0x3F);
    chip.write(Reg::Vr.address(), 0x3F);
    chip.write(Reg::Gl1.address(), 0x3F);
    chip.write(Reg::Gr1.address(), 0x3F);
    chip.write(Reg::T1.address(), 0x1F);

    // The longest tap plus one: nothing of the old excitation remains.
    for n in 0..=TAP_DELAYS[31] as usize + 1 {
        let out = tick_fixed(&mut chip, 0);
        assert_eq!(out, [[0; 2]; 2], "stale state at tick {n}");
    }
}

#[test]
fn direct_preset_passes_constant_input() {
    let mut chip = ChipFloat::new();
    configure(&mut chip, DIRECT);

    let mut last = [[0.0f32; 2]; 2];
    for _ in 0..4 {
        last = tick_float(&mut chip, 0.5);
    }
    for channel in last {
        for sample in channel {
            assert!((sample - 0.5).abs() < 1e-6);
        }
    }
}

#[test]
fn fixed_and_float_agree_within_quantization() {
    let regs: &[(Reg, u8)] = &[
        (Reg::Vm, 0x3F),
        (Reg::Gl1, 0x3F),
        (Reg::Gr1, 0x39),
        (Reg::Gl2, 0x1C),
        (Reg::Gr2, 0x3C),
        (Reg::T1, 0x01),
        (Reg::T2, 0x03),
        (Reg::Vl, 0x3F),
        (Reg::Vr, 0x3F),
    ];

    let mut fixed = ChipFixed::new();
    let mut float = ChipFloat::new();
    configure(&mut fixed, regs);
    configure(&mut float, regs);

    for n in 0..1000 {
        let f = tick_fixed(&mut fixed, if n == 0 { FIXED_MAX } else { 0 });
        let g = tick_float(&mut float, if n == 0 { 1.0 } else { 0.0 });

        for c in 0..2 {
            for s in 0..2 {
                let normalized = f[c][s] as f32 / FIXED_MAX as f32;
                let diff = (normalized - g[c][s]).abs();
                assert!(
                    diff < 2.5e-3,
                    "tick {n}, channel {c}, phase {s}: fixed {normalized} vs float {}",
                    g[c][s]
                );
            }
        }
    }
}

#[test]
fn fixed_outputs_never_leave_signal_range() {
    let mut chip = ChipFixed::new();
    chip.reset();
    // Worst case drive: every gain positive unity, every tap at the head.
    for address in 0x00..=0x15u8 {
        chip.write(address, 0x3F);
    }
    chip.start();

    for _ in 0..2000 {
        let out = tick_fixed(&mut chip, FIXED_MAX);
        for channel in out {
            for sample in channel {
                assert!((FIXED_MIN..=FIXED_MAX).contains(&sample));
            }
        }
    }
}

#[test]
fn all_engines_silent_with_zero_gains() {
    let taps: &[(Reg, u8)] = &[(Reg::T0, 0x04), (Reg::T1, 0x01), (Reg::T8, 0x1F)];

    let mut fixed = ChipFixed::new();
    configure(&mut fixed, taps);
    let mut float = ChipFloat::new();
    configure(&mut float, taps);
    let mut ideal = ChipIdeal::new();
    ideal.set_sample_rate(48_000);
    configure(&mut ideal, taps);
    let mut short = ChipIdealShort::new();
    short.set_sample_rate(48_000);
    configure(&mut short, taps);

    for _ in 0..500 {
        assert_eq!(tick_fixed(&mut fixed, FIXED_MAX), [[0; 2]; 2]);
        assert_eq!(tick_float(&mut float, 1.0), [[0.0; 2]; 2]);

        let mut data = ProcessData::new();
        data.inputs = [1.0f32, 1.0];
        ideal.process(&mut data);
        assert_eq!(data.outputs, [[0.0; 1]; 2]);

        let mut data = ProcessData::new();
        data.inputs = [FIXED_MAX, FIXED_MAX];
        short.process(&mut data);
        assert_eq!(data.outputs, [[0; 1]; 2]);
    }
}

#[test]
fn ideal_variants_agree_on_integral_scaling() {
    // At exactly 2x the native rate every scaled tap is integral, so the
    // interpolating and integer engines see the same delays.
    let regs: &[(Reg, u8)] = &[
        (Reg::Vm, 0x3F),
        (Reg::Gl1, 0x3F),
        (Reg::Gr1, 0x3F),
        (Reg::T1, 0x02),
        (Reg::Vl, 0x3F),
        (Reg::Vr, 0x3F),
    ];

    let mut ideal = ChipIdeal::new();
    ideal.set_sample_rate(47_100);
    configure(&mut ideal, regs);
    let mut short = ChipIdealShort::new();
    short.set_sample_rate(47_100);
    configure(&mut short, regs);

    for n in 0..1000 {
        let mut fdata = ProcessData::new();
        fdata.inputs = [if n == 0 { 1.0f32 } else { 0.0 }; 2];
        ideal.process(&mut fdata);

        let mut sdata = ProcessData::new();
        sdata.inputs = [if n == 0 { FIXED_MAX } else { 0 }; 2];
        short.process(&mut sdata);

        for c in 0..2 {
            let normalized = sdata.outputs[c][0] as f32 / FIXED_MAX as f32;
            assert!(
                (normalized - fdata.outputs[c][0]).abs() < 2.5e-3,
                "tick {n}, channel {c}"
            );
        }
    }
}
