use core::str::FromStr;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use addr::{Address, Flags, Interface, Ipv4};

pub fn addr_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipv4-address");
    [
        "10.1.1.1",
        "172.16.0.255",
        "198.10.199.250",
        "240.130.10.10",
    ]
    .iter()
    .for_each(|addr| {
        group.bench_with_input(BenchmarkId::new("stdlib", addr), addr, |b, addr| {
            b.iter(|| std::net::Ipv4Addr::from_str(addr))
        });
        group.bench_with_input(BenchmarkId::new("strict", addr), addr, |b, addr| {
            b.iter(|| Address::<Ipv4>::parse_with(addr, Flags::INET_PTON))
        });
        group.bench_with_input(BenchmarkId::new("legacy", addr), addr, |b, addr| {
            b.iter(|| Address::<Ipv4>::from_str(addr))
        });
    });
    group.finish();
}

pub fn interface_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("ipv4-interface");
    [
        "10.1.1.1/32",
        "172.16.0.0/12",
        "198.10.199.250/31",
        "240.130.10.176/29",
    ]
    .iter()
    .for_each(|interface| {
        group.bench_with_input(
            BenchmarkId::new("crate", interface),
            interface,
            |b, interface| b.iter(|| Interface::<Ipv4>::from_str(interface)),
        );
    });
    group.finish();
}

criterion_group!(benches, addr_benchmark, interface_benchmark);
criterion_main!(benches);
