use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use queensearch::{
    board::{Board, BoardGeneration},
    evolution::{EvolutionLauncher, EvolutionOptions},
    harness::{run_batch, Algorithm, RunConfig},
    local_search::{HillClimbing, LocalSearch},
    rng::RandomNumberGenerator,
};

fn bench_hill_climbing(c: &mut Criterion) {
    let climber = HillClimbing::new().with_sideways_limit(20);
    let mut rng = RandomNumberGenerator::from_seed(10);

    let mut group = c.benchmark_group("hill_climbing");
    for size in [8, 16, 32].iter() {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let board = Board::random(*size, BoardGeneration::Permutation, &mut rng).unwrap();
                let result = climber.search(black_box(board), &mut rng);
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_genetic(c: &mut Criterion) {
    let launcher = EvolutionLauncher::genetic(1.0).unwrap();
    let options = EvolutionOptions::builder()
        .population_size(20)
        .max_generations(Some(10_000))
        .build()
        .unwrap();
    let mut rng = RandomNumberGenerator::from_seed(11);

    let mut group = c.benchmark_group("genetic");
    group.sample_size(20);
    for size in [4, 6].iter() {
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| launcher.evolve(black_box(&options), *size, &mut rng))
        });
    }
    group.finish();
}

fn bench_parallel_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(10);
    for workers in [1, 4].iter() {
        let config = RunConfig::builder()
            .board_size(8)
            .iterations(200)
            .algorithm(Algorithm::HillClimbing)
            .seed(Some(12))
            .workers(*workers)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::new("workers", workers), &config, |b, config| {
            b.iter(|| run_batch(black_box(config)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hill_climbing, bench_genetic, bench_parallel_batch);
criterion_main!(benches);
