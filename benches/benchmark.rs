//! Benchmarks for enigmacrypt machine operations.
//!
//! Measures machine assembly from a configuration, single-keystroke encode
//! throughput, text encode throughput and keystroke cost scaling across
//! different rotor counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigmacrypt::{Catalogue, Machine, MachineConfig, RotorSetting};

/// Message used consistently across the text benchmarks.
const BENCH_TEXT: &str = "thequickbrownfoxjumpsoverthelazydog";

/// Three-rotor M3 setup with a few plugs.
fn bench_config() -> MachineConfig {
    let mut config = MachineConfig::with_rotors(["I", "II", "III"], "UKW-B");
    config.rotors[0] = RotorSetting::new("I").with_dials(2, 'q');
    config.plugs = vec!["ab".to_string(), "oq".to_string(), "xz".to_string()];
    config
}

/// Benchmarks `MachineConfig::build()` against a prepared catalogue.
///
/// Covers preset lookup, rotor cloning and plugboard setup.
fn bench_machine_build(c: &mut Criterion) {
    let catalogue = Catalogue::historical();
    let config = bench_config();
    c.bench_function("machine_build", |b| {
        b.iter(|| config.build(black_box(&catalogue)).unwrap());
    });
}

/// Benchmarks single-keystroke `encode()` throughput on a three-rotor machine.
///
/// The machine is built once and rotors advance naturally between
/// iterations.
fn bench_encode(c: &mut Criterion) {
    let mut machine = bench_config().build(&Catalogue::historical()).unwrap();

    let mut group = c.benchmark_group("encode_keystroke");
    group.throughput(Throughput::Elements(1));

    group.bench_function("3_rotors", |b| {
        let mut signal = 0;
        b.iter(|| {
            signal = machine.encode(black_box(signal), false).unwrap();
        });
    });

    group.bench_function("3_rotors_skip_rotation", |b| {
        b.iter(|| machine.encode(black_box(7), true).unwrap());
    });

    group.finish();
}

/// Benchmarks `encode_text()` throughput including letter validation.
fn bench_encode_text(c: &mut Criterion) {
    let mut machine = bench_config().build(&Catalogue::historical()).unwrap();

    let mut group = c.benchmark_group("encode_text");
    group.throughput(Throughput::Elements(BENCH_TEXT.len() as u64));

    group.bench_function("pangram", |b| {
        b.iter(|| machine.encode_text(black_box(BENCH_TEXT)).unwrap());
    });

    group.finish();
}

/// Benchmarks `encode()` across different rotor counts.
///
/// Every rotor adds two substitutions per keystroke, so the cost should grow
/// linearly with the stack height.
fn bench_encode_rotor_scaling(c: &mut Criterion) {
    let rotor_counts: &[usize] = &[1, 3, 8, 16];
    let catalogue = Catalogue::historical();
    let ids: Vec<&str> = catalogue.rotor_ids().collect();

    let mut group = c.benchmark_group("encode_rotor_scaling");
    group.throughput(Throughput::Elements(1));

    for &num_rotors in rotor_counts {
        let mut machine = Machine::new();
        for i in 0..num_rotors {
            machine
                .add_rotor(catalogue.rotor(ids[i % ids.len()]).unwrap())
                .unwrap();
        }
        machine
            .set_reflector(catalogue.reflector("UKW-B").unwrap())
            .unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(num_rotors),
            &num_rotors,
            |b, _| {
                let mut signal = 0;
                b.iter(|| {
                    signal = machine.encode(black_box(signal), false).unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_machine_build,
    bench_encode,
    bench_encode_text,
    bench_encode_rotor_scaling,
);
criterion_main!(benches);
