use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use namecheap_rs::domains::dns::host_params;
use namecheap_rs::domains::{HostEntry, RecordType};
use namecheap_rs::{Namecheap, NamecheapConfig};
use std::net::{IpAddr, Ipv4Addr};

fn client() -> Namecheap {
    let config = NamecheapConfig::new(
        "apiuser",
        "bench-key",
        "apiuser",
        IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)),
    )
    .sandbox();
    Namecheap::new(config).expect("valid config")
}

fn hosts(count: usize) -> Vec<HostEntry> {
    (0..count)
        .map(|i| {
            HostEntry::new(format!("host{}", i), RecordType::TXT, "v=spf1 include:_spf.example.com ~all")
                .with_ttl(1800)
        })
        .collect()
}

pub fn query_benchmark(c: &mut Criterion) {
    let client = client();
    let mut group = c.benchmark_group("query_building");

    for size in [1, 10, 100] {
        let records = hosts(size);
        group.bench_with_input(BenchmarkId::new("set_hosts_url", size), &records, |b, records| {
            b.iter(|| {
                client
                    .command("namecheap.domains.dns.setHosts")
                    .param("SLD", "example")
                    .param("TLD", "com")
                    .params(host_params(black_box(records)))
                    .url()
            })
        });
    }

    group.bench_function("single_param_url", |b| {
        b.iter(|| {
            client
                .command("namecheap.domains.getInfo")
                .param("DomainName", black_box("example.com"))
                .url()
        })
    });

    group.finish();
}

criterion_group!(benches, query_benchmark);
criterion_main!(benches);
