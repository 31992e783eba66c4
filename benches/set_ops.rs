use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use addr::{any, IpSet};

// evenly spread /24 blocks, half of them shared between the two sets
fn sample_sets(blocks: u32) -> (IpSet, IpSet) {
    let lhs: IpSet = (0..blocks)
        .map(|i| any::Prefix::Ipv4(addr_block(i * 2)))
        .collect();
    let rhs: IpSet = (0..blocks)
        .map(|i| any::Prefix::Ipv4(addr_block(i * 3)))
        .collect();
    (lhs, rhs)
}

fn addr_block(index: u32) -> addr::Prefix<addr::Ipv4> {
    format!("10.{}.{}.0/24", (index >> 8) & 0xff, index & 0xff)
        .parse()
        .unwrap()
}

pub fn set_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("set-ops");
    for blocks in [16u32, 256, 1024] {
        let (lhs, rhs) = sample_sets(blocks);
        group.bench_with_input(
            BenchmarkId::new("union", blocks),
            &(lhs.clone(), rhs.clone()),
            |b, (lhs, rhs)| b.iter(|| lhs | rhs),
        );
        group.bench_with_input(
            BenchmarkId::new("intersection", blocks),
            &(lhs.clone(), rhs.clone()),
            |b, (lhs, rhs)| b.iter(|| lhs & rhs),
        );
        group.bench_with_input(
            BenchmarkId::new("difference", blocks),
            &(lhs, rhs),
            |b, (lhs, rhs)| b.iter(|| lhs - rhs),
        );
    }
    group.finish();
}

criterion_group!(benches, set_benchmark);
criterion_main!(benches);
