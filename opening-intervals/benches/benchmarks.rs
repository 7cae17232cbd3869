use opening_intervals::OpeningIntervals;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SCH_24_7: &str = "24/7";
const SCH_OVERRIDE: &str = "Su-We 10:00-18:00; Tu-Th 08:00-12:00,13:00-17:00; We off";
const SCH_HOLIDAY: &str = "Mo-Fr; PH 08:00-12:00";
const SCH_SEASON: &str = "Aug 01 - Oct 31 Mo-Sa 09:00-19:00; Aug 01 Su 10:00-12:00";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("24_7", |b| {
        b.iter(|| opening_intervals_syntax::parse(black_box(SCH_24_7)).unwrap())
    });

    group.bench_function("override", |b| {
        b.iter(|| opening_intervals_syntax::parse(black_box(SCH_OVERRIDE)).unwrap())
    });
}

fn bench_expand(c: &mut Criterion) {
    let expressions = [
        ("24_7", SCH_24_7),
        ("override", SCH_OVERRIDE),
        ("holiday", SCH_HOLIDAY),
        ("season", SCH_SEASON),
    ];

    {
        let mut group = c.benchmark_group("expand");

        for (slug, raw) in &expressions {
            let expr = opening_intervals_syntax::parse(raw).unwrap();

            group.bench_function(*slug, |b| {
                b.iter(|| OpeningIntervals::from_expression(black_box(&expr)))
            });
        }
    }

    {
        let mut group = c.benchmark_group("parse_and_expand");

        for (slug, raw) in &expressions {
            group.bench_function(*slug, |b| {
                b.iter(|| OpeningIntervals::parse(black_box(raw)).unwrap())
            });
        }
    }
}

criterion_group!(benches, bench_parse, bench_expand);
criterion_main!(benches);
