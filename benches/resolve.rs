use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use liars_dice::{Face, FaceSet, Game, Rules, Seat};

fn setup_table(players: usize, seed: u64) -> Game {
    let mut game = Game::with_seed(Rules::default(), seed);
    for i in 0..players {
        game.add(format!("p{i}")).expect("unique id");
    }
    game.start(Seat::new(0)).expect("enough players");
    game
}

fn resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for players in [2usize, 6, 20] {
        let table = setup_table(players, 42);
        let counted = FaceSet::single(Face::FIVE).union(table.rules().wilds);

        group.bench_function(BenchmarkId::new("count", players), |b| {
            b.iter(|| black_box(table.count(black_box(counted))))
        });

        group.bench_function(BenchmarkId::new("bid_then_liar", players), |b| {
            b.iter_batched(
                || setup_table(players, 42),
                |mut game| {
                    game.bid("p0", 2, 4).expect("opening bid");
                    black_box(game.liar("p1").expect("challenge"))
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn deal(c: &mut Criterion) {
    let mut group = c.benchmark_group("deal");
    for players in [2usize, 6, 20] {
        group.bench_function(BenchmarkId::new("start", players), |b| {
            b.iter_batched(
                || {
                    let mut game = Game::with_seed(Rules::default(), 7);
                    for i in 0..players {
                        game.add(format!("p{i}")).expect("unique id");
                    }
                    game
                },
                |mut game| {
                    game.start(Seat::new(0)).expect("enough players");
                    black_box(game.total_dice())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, resolve, deal);
criterion_main!(benches);
