use bazi_base::{
    BalanceConfig, Branch, FourPillars, GanZhi, Pillar, SolarTerm, Stem, analyze_balance,
    combine, decompose, hour_stem, month_stem,
};
use bazi_time::CivilTime;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn table_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tables");
    group.bench_function("combine", |b| {
        b.iter(|| combine(black_box(Stem::Ren), black_box(Branch::Shen)))
    });
    group.bench_function("decompose", |b| b.iter(|| decompose(black_box(47))));
    group.bench_function("month_stem", |b| {
        b.iter(|| month_stem(black_box(Stem::Ji), black_box(Branch::Hai)))
    });
    group.bench_function("hour_stem", |b| {
        b.iter(|| hour_stem(black_box(Stem::Gui), black_box(Branch::Wu)))
    });
    group.finish();
}

fn balance_bench(c: &mut Criterion) {
    let p = |i: i64| Pillar::from(GanZhi::from_offset(i));
    let Ok(birth) = CivilTime::from_ymd_hm(1984, 8, 8, 8, 30) else {
        return;
    };
    let pillars = FourPillars {
        year: p(0),
        month: p(8),
        day: p(10),
        hour: p(4),
        birth,
        solar_term: SolarTerm::LiQiu,
    };
    let config = BalanceConfig::default();

    let mut group = c.benchmark_group("balance");
    group.bench_function("analyze_balance", |b| {
        b.iter(|| analyze_balance(black_box(&pillars), &config))
    });
    group.finish();
}

criterion_group!(benches, table_bench, balance_bench);
criterion_main!(benches);
