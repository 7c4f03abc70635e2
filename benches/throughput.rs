//! Benchmarks for machine set-up and text encipherment.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use enigma::{Machine, MachineConfig};

fn bench_config() -> MachineConfig {
    MachineConfig::new(["II", "V", "III"], "B", [7, 4, 19], [12, 2, 20], "AFTVKOBLRW")
}

fn bench_construction(c: &mut Criterion) {
    let config = bench_config();
    c.bench_function("machine_new", |b| {
        b.iter(|| Machine::new(black_box(&config)));
    });
}

/// Text throughput for a few message lengths. The machine keeps stepping
/// across iterations, as it would over a long transmission.
fn bench_encipher_text(c: &mut Criterion) {
    let mut machine = Machine::new(&bench_config());

    let mut group = c.benchmark_group("encipher_text");
    for len in [26usize, 1024, 16 * 1024] {
        let text: String = (0..len).map(|i| (b'A' + (i % 26) as u8) as char).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| machine.encipher_text(black_box(text)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construction, bench_encipher_text);
criterion_main!(benches);
