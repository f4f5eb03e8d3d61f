use divan::{black_box, Bencher};
use rand::{distributions::Uniform, prelude::Distribution as _, rngs::StdRng, Rng as _, SeedableRng as _};
use topbook::{BTreeLadder, BookConfig, BookMode, Event, OrderBookEngine, PriceLadder, Side, VecLadder};

const PRICE_LEVELS: i64 = 200;
const MID: i64 = 10_000;

fn main() {
    divan::main();
}

/// Signed mutations around a fixed mid; roughly a third of them remove quantity and one in ten
/// moves an order to a neighbouring price.
fn mutations(count: usize) -> Vec<Event<i64>> {
    let price_dist = Uniform::new(1, PRICE_LEVELS);
    let qty_dist = Uniform::new(1, 100);
    let mut rng = StdRng::from_seed([42; 32]);

    (0..count)
        .map(|_| {
            let side = if rng.gen_bool(0.5) { Side::Bid } else { Side::Ask };
            let offset = price_dist.sample(&mut rng);
            let price = if side.is_bid() { MID - offset } else { MID + offset };
            let qty = qty_dist.sample(&mut rng);
            match rng.gen_range(0..10) {
                0 => Event::modify(side, price, qty, price + 1, qty),
                1..=3 => Event::mutation(side, price, -qty),
                _ => Event::mutation(side, price, qty),
            }
        })
        .collect()
}

fn updates(count: usize) -> Vec<Event<i64>> {
    let price_dist = Uniform::new(1, PRICE_LEVELS);
    let mut rng = StdRng::from_seed([7; 32]);

    (0..count)
        .map(|_| {
            let side = if rng.gen_bool(0.5) { Side::Bid } else { Side::Ask };
            let offset = price_dist.sample(&mut rng);
            let price = if side.is_bid() { MID - offset } else { MID + offset };
            let qty = if rng.gen_bool(0.2) { 0 } else { rng.gen_range(1..1_000) };
            Event::update(side, price, qty)
        })
        .collect()
}

fn run<L: PriceLadder<i64>>(config: BookConfig, events: &[Event<i64>]) {
    let mut book: OrderBookEngine<i64, L> = OrderBookEngine::new(config).unwrap();
    for &event in events {
        black_box(book.apply(event).unwrap());
    }
}

#[divan::bench(name = "mutations/btree", args = [1, 5, 20])]
fn bench_btree_mutations(bencher: Bencher, depth: usize) {
    let events = mutations(10_000);
    bencher.bench_local(|| run::<BTreeLadder<i64>>(BookConfig::new(depth), &events));
}

#[divan::bench(name = "mutations/vec", args = [1, 5, 20])]
fn bench_vec_mutations(bencher: Bencher, depth: usize) {
    let events = mutations(10_000);
    bencher.bench_local(|| run::<VecLadder<i64>>(BookConfig::new(depth), &events));
}

#[divan::bench(name = "updates/btree", args = [1, 5, 20])]
fn bench_btree_updates(bencher: Bencher, depth: usize) {
    let events = updates(10_000);
    bencher.bench_local(|| run::<BTreeLadder<i64>>(BookConfig::new(depth).with_mode(BookMode::Update), &events));
}

#[divan::bench(name = "updates/vec", args = [1, 5, 20])]
fn bench_vec_updates(bencher: Bencher, depth: usize) {
    let events = updates(10_000);
    bencher.bench_local(|| run::<VecLadder<i64>>(BookConfig::new(depth).with_mode(BookMode::Update), &events));
}
