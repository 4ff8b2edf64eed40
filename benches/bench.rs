use criterion::{criterion_group, criterion_main, Criterion};
use eca_lift::{LiftingTable, Row, Simulator, Transition};

fn bench_evolve_wide(c: &mut Criterion) {
    const N: usize = 1 << 16;
    let transition = Transition::from_indices(110, None).unwrap();
    let row = Row::random(N, Some(42));
    c.bench_function("evolve_wide", |b| b.iter(|| transition.evolve(&row)));
}

fn bench_table_build(c: &mut Criterion) {
    let transition = Transition::from_indices(30, Some(110)).unwrap();
    c.bench_function("table_build_16", |b| {
        b.iter(|| LiftingTable::build(transition, 16, 1 << 32).unwrap())
    });
}

fn bench_query_vs_direct(c: &mut Criterion) {
    const SIZE: usize = 16;
    const STEPS: u64 = 100_000;
    let transition = Transition::from_indices(110, None).unwrap();
    let table = LiftingTable::build(transition, SIZE, 1 << 32).unwrap();
    let simulator = Simulator::new(transition, SIZE).unwrap();
    let initial = Row::random(SIZE, Some(42));

    c.bench_function("query", |b| b.iter(|| table.query(&initial, STEPS).unwrap()));
    c.bench_function("direct", |b| {
        b.iter(|| simulator.advance(&initial, STEPS).unwrap())
    });
}

criterion_group!(
    benches,
    bench_evolve_wide,
    bench_table_build,
    bench_query_vs_direct,
);
criterion_main!(benches);
