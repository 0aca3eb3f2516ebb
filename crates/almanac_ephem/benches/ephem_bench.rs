use criterion::{Criterion, black_box, criterion_group, criterion_main};

use almanac_ephem::{lunar_longitude, new_moon_at_or_after, solar_longitude, solar_longitude_after};
use almanac_time::fixed_from_gregorian;

fn ephemeris_benches(c: &mut Criterion) {
    let t = fixed_from_gregorian(2024, 3, 20) as f64 + 0.5;

    let mut group = c.benchmark_group("ephemeris");
    group.bench_function("solar_longitude", |b| {
        b.iter(|| solar_longitude(black_box(t)))
    });
    group.bench_function("lunar_longitude", |b| {
        b.iter(|| lunar_longitude(black_box(t)))
    });
    group.finish();

    let mut group = c.benchmark_group("search");
    group.sample_size(20);
    group.bench_function("new_moon_at_or_after", |b| {
        b.iter(|| new_moon_at_or_after(black_box(t)))
    });
    group.bench_function("solar_longitude_after", |b| {
        b.iter(|| solar_longitude_after(black_box(90.0), black_box(t)))
    });
    group.finish();
}

criterion_group!(benches, ephemeris_benches);
criterion_main!(benches);
