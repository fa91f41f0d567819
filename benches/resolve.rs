use std::net::Ipv4Addr;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fwresolve::{Aggregation, RenderOptions, Rule, RuleSetBuilder, Span, resolve};

/// Build `n` rules of alternating action, each a band of ports over a slice
/// of one /16, so that every rule conflicts with its neighbours.
fn banded_rules(n: usize) -> Vec<Rule> {
    (0..n)
        .map(|i| {
            let step = u16::try_from(i).unwrap_or(u16::MAX);
            let ports = Span::new(step * 50, step * 50 + 500);
            let third = u8::try_from(i % 200).unwrap_or(0);
            let addresses = Span::new(
                Ipv4Addr::new(172, 16, third, 1),
                Ipv4Addr::new(172, 16, third.saturating_add(20), 255),
            );
            Rule::new(format!("r{i}"), "TCP", i % 2 == 0, ports, addresses).with_origin(i)
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for &n in &[10, 50, 150] {
        let rules = banded_rules(n);
        for aggregation in [Aggregation::Port, Aggregation::Address] {
            group.bench_with_input(
                BenchmarkId::new(aggregation.to_string(), n),
                &rules,
                |b, rules| b.iter(|| resolve(black_box(rules.clone()), aggregation)),
            );
        }
    }

    group.finish();
}

fn bench_ruleset(c: &mut Criterion) {
    let ruleset = RuleSetBuilder::new()
        .rule("allow web", |r| {
            r.allow().protocol("TCP").ports("80,443,8080-8090").addresses("10.0.0.1-10.0.255.255")
        })
        .rule("allow ssh", |r| {
            r.allow().protocol("TCP").ports("22").addresses("10.0.1.1-10.0.1.50,10.0.7.1")
        })
        .rule("deny tcp", |r| r.protocol("TCP").ports("0-65535").addresses("10.0.0.1-10.0.255.255"))
        .build()
        .unwrap();

    c.bench_function("ruleset_resolve_and_render", |b| {
        b.iter(|| {
            black_box(&ruleset)
                .resolve(Aggregation::Address)
                .records(&RenderOptions::default())
        });
    });
}

criterion_group!(benches, bench_resolve, bench_ruleset);
criterion_main!(benches);
