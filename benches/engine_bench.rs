use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use gumshoe::board::grid::Grid;
use gumshoe::board::state::{GameState, PlayerId};
use gumshoe::board::tile::Direction;
use gumshoe::deal::deal;
use gumshoe::movement::{step, TurnVisits};

fn bench_standard_layout(c: &mut Criterion) {
    c.bench_function("grid_standard_layout", |b| {
        b.iter(|| black_box(Grid::standard()))
    });
}

fn bench_deal(c: &mut Criterion) {
    c.bench_function("deal_three_players", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        b.iter(|| black_box(deal(3, &mut rng)))
    });
}

fn bench_movement_walk(c: &mut Criterion) {
    let deal = deal(3, &mut SmallRng::seed_from_u64(2));
    let state = GameState::new(deal).unwrap();
    c.bench_function("movement_four_steps", |b| {
        b.iter(|| {
            let mut state = state.clone();
            let player = PlayerId::new(0);
            let mut visits = TurnVisits::starting_at(state.location(player));
            for dir in [
                Direction::Up,
                Direction::Up,
                Direction::Right,
                Direction::Right,
            ] {
                let _ = step(&mut state, player, dir, &mut visits);
            }
            black_box(state)
        })
    });
}

criterion_group!(
    benches,
    bench_standard_layout,
    bench_deal,
    bench_movement_walk
);
criterion_main!(benches);
