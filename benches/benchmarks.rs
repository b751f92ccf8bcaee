use handodds::Arbitrary;
use handodds::cards::*;
use handodds::odds::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        grouping_random_hand,
        exhausting_turn_pairs,
        estimating_river,
        estimating_turn,
        estimating_flop,
}

fn grouping_random_hand(c: &mut criterion::Criterion) {
    c.bench_function("group ranks of a random Hand", |b| {
        let hand = Hand::random();
        b.iter(|| Groups::from(hand))
    });
}

fn exhausting_turn_pairs(c: &mut criterion::Criterion) {
    let pool = Vec::<Card>::from(Deck::new()).into_iter().take(45).collect::<Vec<Card>>();
    c.bench_function("exhaust 45 choose 2 Combinations", |b| {
        b.iter(|| Combinations::new(&pool, 2).map(|c| c.count()))
    });
}

fn estimating_river(c: &mut criterion::Criterion) {
    let hole = Hole::try_from("Ah Ks").unwrap();
    let board = Board::try_from("2c 6s As 5d").unwrap();
    c.bench_function("estimate with the river to come", |b| {
        b.iter(|| estimate_odds(hole, board, false))
    });
}

fn estimating_turn(c: &mut criterion::Criterion) {
    let hole = Hole::try_from("Ah Ks").unwrap();
    let board = Board::try_from("2c 6s 3s").unwrap();
    c.bench_function("estimate with turn and river to come", |b| {
        b.iter(|| estimate_odds(hole, board, false))
    });
}

fn estimating_flop(c: &mut criterion::Criterion) {
    let hole = Hole::try_from("Ah Ks").unwrap();
    let board = Board::empty();
    c.bench_function("estimate preflop", |b| {
        b.iter(|| estimate_odds(hole, board, true))
    });
}
