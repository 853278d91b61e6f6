use bazi_base::{
    Element, FourPillars, Pillar, build_histogram, classify_strength, relation_of,
    resolve_favorable_element, strength_score,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn sample_chart() -> FourPillars {
    FourPillars::from_labels(["甲子", "丙寅", "戊辰", "庚申"]).unwrap()
}

fn parse_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("pillar_hanzi", |b| b.iter(|| Pillar::parse(black_box("戊辰"))));
    group.bench_function("pillar_pinyin", |b| {
        b.iter(|| Pillar::parse(black_box("Wu-Chen")))
    });
    group.bench_function("four_pillars", |b| {
        b.iter(|| FourPillars::from_labels(black_box(["甲子", "丙寅", "戊辰", "庚申"])))
    });
    group.finish();
}

fn classify_bench(c: &mut Criterion) {
    let chart = sample_chart();
    let histogram = build_histogram(&chart);
    let dm = chart.day_master_element();

    let mut group = c.benchmark_group("classify");
    group.bench_function("build_histogram", |b| {
        b.iter(|| build_histogram(black_box(&chart)))
    });
    group.bench_function("classify_strength", |b| {
        b.iter(|| classify_strength(black_box(&histogram), black_box(dm)))
    });
    group.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let chart = black_box(&chart);
            let h = build_histogram(chart);
            let dm = chart.day_master_element();
            let s = classify_strength(&h, dm);
            let fav = resolve_favorable_element(s, dm, chart.month_element());
            strength_score(&h, dm, fav)
        })
    });
    group.finish();
}

fn relation_bench(c: &mut Criterion) {
    c.bench_function("relation_of", |b| {
        b.iter(|| relation_of(black_box(Element::Water), black_box(Element::Fire)))
    });
}

criterion_group!(benches, parse_bench, classify_bench, relation_bench);
criterion_main!(benches);
