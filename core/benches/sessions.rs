use criterion::{Criterion, criterion_group, criterion_main};
use flipguess_core::{GameConfig, GameController, GameState, LayoutGenerator, RandomLayoutGenerator};
use std::hint::black_box;

fn bench_deal(c: &mut Criterion) {
    let config = GameConfig::classic();
    let mut seed = 0u64;
    c.bench_function("deal_classic", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(RandomLayoutGenerator::new(seed).generate(black_box(&config)))
        })
    });

    let full = GameConfig::new(100, 100, 20, 10);
    c.bench_function("deal_full_range", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(RandomLayoutGenerator::new(seed).generate(black_box(&full)))
        })
    });
}

fn bench_playthrough(c: &mut Criterion) {
    let config = GameConfig::classic();
    let state = GameState::start_session(&config, RandomLayoutGenerator::new(7));
    let pool = state.pool().to_vec();

    c.bench_function("flip_every_card", |b| {
        b.iter(|| {
            let mut state = state.clone();
            for &number in &pool {
                state = state.flip_card(black_box(number));
            }
            black_box(state)
        })
    });

    c.bench_function("controller_reset", |b| {
        let mut controller = GameController::new(config, 7);
        b.iter(|| black_box(controller.reset_session().target()))
    });
}

criterion_group!(benches, bench_deal, bench_playthrough);
criterion_main!(benches);
