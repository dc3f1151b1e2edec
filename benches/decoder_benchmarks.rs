use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use namecheap_rs::domains::{AvailabilityResults, DnsHostResult, DomainListResult};
use namecheap_rs::utils::xml_extractor::decode_response;

fn envelope(command: &str, inner: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <RequestedCommand>{command}</RequestedCommand>
  <CommandResponse Type="{command}">{inner}</CommandResponse>
</ApiResponse>"#,
        command = command,
        inner = inner
    )
}

fn hosts_body(count: usize) -> String {
    let hosts: String = (0..count)
        .map(|i| {
            format!(
                r#"<host HostId="{i}" Name="host{i}" Type="A" Address="192.0.2.{octet}" MXPref="10" TTL="1800" IsActive="true" />"#,
                i = i,
                octet = i % 255
            )
        })
        .collect();
    envelope(
        "namecheap.domains.dns.getHosts",
        &format!(
            r#"<DomainDNSGetHostsResult Domain="example.com" IsUsingOurDNS="true">{}</DomainDNSGetHostsResult>"#,
            hosts
        ),
    )
}

fn check_body(count: usize) -> String {
    let results: String = (0..count)
        .map(|i| {
            format!(
                r#"<DomainCheckResult Domain="name{}.com" Available="{}" ErrorNo="0" Description="" IsPremiumName="false" PremiumRegistrationPrice="0" />"#,
                i,
                i % 2 == 0
            )
        })
        .collect();
    envelope("namecheap.domains.check", &results)
}

fn list_body(count: usize) -> String {
    let domains: String = (0..count)
        .map(|i| {
            format!(
                r#"<Domain ID="{i}" Name="name{i}.com" User="apiuser" Created="02/15/2016" Expires="02/15/2027" IsExpired="false" IsLocked="false" AutoRenew="true" WhoisGuard="ENABLED" IsPremium="false" IsOurDNS="true" />"#,
                i = i
            )
        })
        .collect();
    envelope(
        "namecheap.domains.getList",
        &format!(
            "<DomainGetListResult>{}</DomainGetListResult><Paging><TotalItems>{}</TotalItems><CurrentPage>1</CurrentPage><PageSize>100</PageSize></Paging>",
            domains, count
        ),
    )
}

pub fn decoder_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("xml_decoders");

    for size in [10, 100, 1000] {
        let body = hosts_body(size);
        group.bench_with_input(BenchmarkId::new("get_hosts", size), &body, |b, body| {
            b.iter(|| decode_response::<DnsHostResult>("namecheap.domains.dns.getHosts", black_box(body)))
        });
    }

    for size in [1, 10, 50] {
        let body = check_body(size);
        group.bench_with_input(BenchmarkId::new("check", size), &body, |b, body| {
            b.iter(|| decode_response::<AvailabilityResults>("namecheap.domains.check", black_box(body)))
        });
    }

    for size in [10, 100] {
        let body = list_body(size);
        group.bench_with_input(BenchmarkId::new("get_list", size), &body, |b, body| {
            b.iter(|| decode_response::<DomainListResult>("namecheap.domains.getList", black_box(body)))
        });
    }

    group.finish();
}

criterion_group!(benches, decoder_benchmark);
criterion_main!(benches);
