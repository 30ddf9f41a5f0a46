use chrono::{DateTime, Duration, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use solar_day::{SolarDay, Sunrise, day_or_night, day_or_night_unix};
use std::hint::black_box;

fn benchmark_single_calculation(c: &mut Criterion) {
    let datetime = "2014-11-19T18:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let unix = datetime.timestamp();
    let lat = 32.9;
    let lon = -96.2;

    c.bench_function("solar_day_around", |b| {
        b.iter(|| SolarDay::around_unix(black_box(lat), black_box(lon), black_box(unix)))
    });

    c.bench_function("sunrise_sunset_chrono", |b| {
        b.iter(|| {
            let day = Sunrise::around(black_box(lat), black_box(lon), black_box(&datetime));
            (day.sunrise(), day.sunset())
        })
    });

    c.bench_function("day_or_night_unix", |b| {
        b.iter(|| day_or_night_unix(black_box(lat), black_box(lon), black_box(unix)))
    });

    c.bench_function("day_or_night_chrono", |b| {
        b.iter(|| day_or_night(black_box(lat), black_box(lon), black_box(&datetime)))
    });
}

fn benchmark_time_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series_fixed_location");
    let base = "2014-11-19T00:00:00Z".parse::<DateTime<Utc>>().unwrap();

    for count in [24_usize, 24 * 60, 24 * 365] {
        let times: Vec<DateTime<Utc>> = (0..count)
            .map(|i| base + Duration::minutes(i as i64 * 60))
            .collect();
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("day_or_night", count), &times, |b, times| {
            b.iter(|| {
                times
                    .iter()
                    .filter(|t| day_or_night(32.9, -96.2, black_box(*t)).is_day())
                    .count()
            })
        });
    }

    group.finish();
}

fn benchmark_day_stepping(c: &mut Criterion) {
    let mut group = c.benchmark_group("day_stepping");
    let anchor = SolarDay::around_unix(34.05, -118.25, 1_370_070_000);

    for days in [7_usize, 365] {
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::new("days_iterator", days), &days, |b, &days| {
            b.iter(|| {
                black_box(anchor)
                    .days()
                    .take(days)
                    .map(|d| d.day_length_seconds())
                    .sum::<i64>()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_time_series,
    benchmark_day_stepping
);
criterion_main!(benches);
