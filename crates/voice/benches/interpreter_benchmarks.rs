use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use pantry_core::{IdGenerator, SequentialIds};
use pantry_voice::{CanonicalUnit, InventoryItem, apply_actions, parse_voice_command};

const NAMES: &[&str] = &[
    "Tomato", "Onion", "Potato", "Olive Oil", "Basmati Rice", "Egg", "Milk", "Ginger",
    "Garlic", "Green Chilli", "Cumin Seed", "Flour",
];

fn inventory(size: usize) -> Vec<InventoryItem> {
    let mut ids = SequentialIds::default();
    (0..size)
        .map(|n| InventoryItem {
            id: ids.next_id(),
            name: format!("{} {}", NAMES[n % NAMES.len()], n / NAMES.len()),
            category: "Pantry".to_string(),
            unit_type: CanonicalUnit::Pcs,
            quantity: 5.0,
            low_stock_threshold: 1.0,
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_voice_command");

    for size in [10usize, 100, 1000] {
        let inv = inventory(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &inv, |b, inv| {
            b.iter(|| {
                parse_voice_command(
                    black_box("add 6 eggs and remove 1 bottle olive oil and set rice to 2 kg"),
                    inv,
                )
            });
        });
    }

    group.finish();
}

fn bench_parse_and_apply(c: &mut Criterion) {
    let inv = inventory(100);
    let utterance = "add 3 tomatoes and remove 2 onions and add 500 g saffron";
    let parsed = parse_voice_command(utterance, &inv);

    c.bench_function("apply_actions_100_items", |b| {
        b.iter(|| {
            let mut ids = SequentialIds::default();
            apply_actions(black_box(&inv), black_box(&parsed.actions), &mut ids)
        });
    });
}

criterion_group!(benches, bench_parse, bench_parse_and_apply);
criterion_main!(benches);
