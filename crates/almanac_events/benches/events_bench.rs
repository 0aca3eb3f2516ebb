use criterion::{Criterion, black_box, criterion_group, criterion_main};

use almanac_events::{
    RiseSetConfig, all_solar_events, moonrise, new_moon_at_or_after, phasis_on_or_after, sunrise,
};
use almanac_time::{JERUSALEM, MECCA, fixed_from_gregorian};

fn riseset_benches(c: &mut Criterion) {
    let date = fixed_from_gregorian(2024, 3, 20);
    let config = RiseSetConfig::default();

    let mut group = c.benchmark_group("riseset");
    group.bench_function("sunrise", |b| {
        b.iter(|| sunrise(black_box(date), &JERUSALEM))
    });
    group.bench_function("all_solar_events", |b| {
        b.iter(|| all_solar_events(black_box(date), &JERUSALEM, &config))
    });
    group.bench_function("moonrise", |b| {
        b.iter(|| moonrise(black_box(date), &JERUSALEM))
    });
    group.finish();
}

fn lunar_benches(c: &mut Criterion) {
    let date = fixed_from_gregorian(2024, 3, 5);

    let mut group = c.benchmark_group("lunar");
    group.sample_size(20);
    group.bench_function("new_moon_at_or_after", |b| {
        b.iter(|| new_moon_at_or_after(black_box(date as f64)))
    });
    group.bench_function("phasis_on_or_after", |b| {
        b.iter(|| phasis_on_or_after(black_box(date), &MECCA))
    });
    group.finish();
}

criterion_group!(benches, riseset_benches, lunar_benches);
criterion_main!(benches);
