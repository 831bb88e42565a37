use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mvp_scorer_rust::{MvpScorer, PlayerSeasonRecord, StatLine};

const TEAMS: [&str; 6] = ["BOS", "DEN", "DAL", "MIL", "OKC", "PHI"];
const POSITIONS: [&str; 7] = ["PG", "SG", "SF", "PF", "C", "SG-SF", "PF-C"];

fn synthetic_population(size: usize) -> Vec<PlayerSeasonRecord> {
    (0..size)
        .map(|i| {
            let f = i as f64;
            let line = StatLine::new(
                5.0 + (f * 7.3) % 30.0,
                1.0 + (f * 3.1) % 10.0,
                2.0 + (f * 5.7) % 12.0,
                (f * 0.37) % 2.5,
                (f * 0.53) % 3.0,
            );
            PlayerSeasonRecord::new(
                &format!("Player {}", i),
                TEAMS[i % TEAMS.len()],
                POSITIONS[i % POSITIONS.len()],
                20.0 + (i % 62) as f64,
                line,
            )
            .with_shooting(10.0 + (f * 1.9) % 15.0, (f * 0.7) % 8.0, 1.0 + (f * 0.3) % 4.0)
        })
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let scorer = MvpScorer::default();
    let mut group = c.benchmark_group("score_population");

    for size in [500, 5_000, 50_000] {
        let records = synthetic_population(size);

        group.bench_with_input(BenchmarkId::new("sequential", size), &records, |b, records| {
            b.iter(|| scorer.score(black_box(records.clone())));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &records, |b, records| {
            b.iter(|| scorer.score_parallel(black_box(records.clone())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
