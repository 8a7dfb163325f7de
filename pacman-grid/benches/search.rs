use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pacman_grid::{GridWorld, Layout};
use pacman_minimax::{
    CountingInstruments, EvaluatorKind, SearchAgent, SearchMode, SearchPlan,
};

fn create_world() -> GridWorld {
    let layout: Layout = include_str!("../layouts/small_classic.lay").parse().unwrap();

    GridWorld::from_layout(&layout)
}

fn bench_modes(c: &mut Criterion) {
    let world = create_world();

    for depth in 1..=3 {
        let mut group = c.benchmark_group(format!("Small Classic: Depth {depth}"));

        for mode in SearchMode::ALL {
            let plan = SearchPlan::new(EvaluatorKind::Better, depth).unwrap();
            let agent = SearchAgent::new(plan, mode, "bench");

            group.bench_with_input(BenchmarkId::new("search", mode), &world, |b, world| {
                b.iter(|| agent.best_action(black_box(world)).unwrap())
            });
        }

        group.finish();
    }
}

fn bench_pruning(c: &mut Criterion) {
    let world = create_world();
    let mut group = c.benchmark_group("Small Classic: Leaves at depth 3");

    for mode in [SearchMode::Minimax, SearchMode::AlphaBeta] {
        let plan = SearchPlan::new(EvaluatorKind::Better, 3).unwrap();
        let counts = CountingInstruments::new();
        let agent = SearchAgent::new(plan, mode, "bench").with_instruments(&counts);
        agent.search(&world).unwrap();
        println!("{mode} scored {} leaves", counts.leaves());

        group.bench_function(mode.to_string(), |b| {
            b.iter(|| agent.search(black_box(&world)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_modes, bench_pruning);
criterion_main!(benches);
