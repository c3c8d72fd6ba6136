use std::{hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ot_langtags::{all_language_tags, by_identifier, by_tag, tag_from_bytes, with_iso3_code};

fn bench_by_tag(c: &mut Criterion) {
    let mut group = c.benchmark_group("by_tag");

    let test_cases = vec![
        (*b"ABA ", "first row"),
        (*b"ENG ", "English"),
        (*b"ZZA ", "last registry row"),
        (*b"tmh ", "lowercase font tag"),
        (*b"de  ", "two-letter font tag"),
        (*b"DFLT", "four-letter tag"),
        (*b"XXXX", "miss"),
        ([0, 0, 0, 0], "miss - non-printable"),
    ];

    for (bytes, label) in test_cases {
        let tag = tag_from_bytes(&bytes);
        group.bench_with_input(BenchmarkId::from_parameter(label), &tag, |b, &tag| {
            b.iter(|| black_box(by_tag(black_box(tag)).is_ok()))
        });
    }

    group.finish();
}

fn bench_linear_scan_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_scan");

    for (bytes, label) in [(*b"ABA ", "first row"), (*b"tmh ", "last row")] {
        let tag = tag_from_bytes(&bytes);
        group.bench_with_input(BenchmarkId::from_parameter(label), &tag, |b, &tag| {
            b.iter(|| {
                black_box(
                    all_language_tags()
                        .iter()
                        .find(|e| e.tag() == black_box(tag)),
                )
            })
        });
    }

    group.finish();
}

fn bench_other_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("other_lookups");

    group.bench_function("by_identifier", |b| {
        b.iter(|| black_box(by_identifier(black_box("KSW"))))
    });

    group.bench_function("with_iso3_code", |b| {
        b.iter(|| black_box(with_iso3_code(black_box("zho")).count()))
    });

    let ath = by_identifier("ATH");
    group.bench_function("iso3_codes/ATH", |b| {
        b.iter(|| black_box(ath.map(|e| e.iso3_codes().len())))
    });

    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(2))
        .warm_up_time(Duration::from_millis(500));
    targets = bench_by_tag, bench_linear_scan_baseline, bench_other_lookups
);
criterion_main!(benches);
