//! XTS benchmark
use benches::{criterion_group_bench, Benchmarker};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use aes::{Aes128, Aes256};
use xts::{get_tweak_default, Xts};

const KB: usize = 1024;

fn bench_xts_aes128(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("xts-aes128");
    let xts = Xts::<Aes128>::new_from_slice(&[0x42; 32]).unwrap();
    let tweak = get_tweak_default(1);

    for size in &[512, KB, 4 * KB, 16 * KB] {
        let mut buf = vec![0u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_function(BenchmarkId::new("encrypt", size), |b| {
            b.iter(|| xts.encrypt_message(&tweak, &mut buf).unwrap());
        });
        group.bench_function(BenchmarkId::new("decrypt", size), |b| {
            b.iter(|| xts.decrypt_message(&tweak, &mut buf).unwrap());
        });
    }

    group.finish();
}

// Odd lengths exercise ciphertext stealing on every call.
fn bench_xts_aes256_stealing(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("xts-aes256-stealing");
    let xts = Xts::<Aes256>::new_from_slice(&[0x24; 64]).unwrap();
    let tweak = get_tweak_default(1);

    for size in &[17, 511, 4 * KB - 1] {
        let mut buf = vec![0u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_function(BenchmarkId::new("encrypt", size), |b| {
            b.iter(|| xts.encrypt_message(&tweak, &mut buf).unwrap());
        });
    }

    group.finish();
}

fn bench_xts_area(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("xts-aes128-area");
    let xts = Xts::<Aes128>::new_from_slice(&[0x42; 32]).unwrap();

    let size = 64 * KB;
    let mut buf = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("encrypt_area_512", |b| {
        b.iter(|| xts.encrypt_area(&mut buf, 512, 0, get_tweak_default).unwrap());
    });

    group.finish();
}

criterion_group_bench!(
    benches_xts,
    bench_xts_aes128,
    bench_xts_aes256_stealing,
    bench_xts_area
);

criterion_main!(benches_xts);
