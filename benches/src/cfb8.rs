//! CFB8 benchmark
use benches::{criterion_group_bench, Benchmarker};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use aes::Aes128;
use cfb8::Cfb8;

const KB: usize = 1024;

fn bench_cfb8(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("cfb8-aes128");

    for size in &[KB, 2 * KB, 4 * KB, 8 * KB, 16 * KB] {
        let mut buf = vec![0u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_function(BenchmarkId::new("encrypt", size), |b| {
            let key = Default::default();
            let iv = Default::default();
            let mut cipher = Cfb8::<Aes128>::new(&key, &iv);
            b.iter(|| cipher.encrypt(&mut buf));
        });
        group.bench_function(BenchmarkId::new("decrypt", size), |b| {
            let key = Default::default();
            let iv = Default::default();
            let mut cipher = Cfb8::<Aes128>::new(&key, &iv);
            b.iter(|| cipher.decrypt(&mut buf));
        });
    }

    group.finish();
}

criterion_group_bench!(benches_cfb8, bench_cfb8);

criterion_main!(benches_cfb8);
