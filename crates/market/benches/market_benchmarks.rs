use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use marketplace_inventory::{Item, Vendor};
use marketplace_market::Market;

/// Market with `vendors` vendors, each stocking the same `items` items.
fn build_market(vendors: usize, items: usize) -> (Market, Vec<Item>) {
    let catalog: Vec<Item> = (0..items)
        .map(|n| Item::new(format!("Item {n:04}"), "$1.25").unwrap())
        .collect();

    let mut market = Market::new("Bench Market");
    for v in 0..vendors {
        let mut vendor = Vendor::new(format!("Vendor {v}"));
        for item in &catalog {
            vendor.stock(item, 100);
        }
        market.add_vendor(vendor);
    }
    (market, catalog)
}

fn bench_total_inventory(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_inventory");
    for &(vendors, items) in &[(3, 10), (10, 100), (50, 200)] {
        let (market, _) = build_market(vendors, items);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{vendors}x{items}")),
            &market,
            |b, market| b.iter(|| black_box(market.total_inventory().len())),
        );
    }
    group.finish();
}

fn bench_sell_across_vendors(c: &mut Criterion) {
    let mut group = c.benchmark_group("sell");
    for &vendors in &[3usize, 10, 50] {
        let (market, catalog) = build_market(vendors, 20);
        let item = catalog[0].clone();
        // Spans every vendor but the last.
        let request = (vendors as i64 - 1) * 100 + 1;
        group.bench_with_input(BenchmarkId::from_parameter(vendors), &market, |b, market| {
            b.iter_batched(
                || market.clone(),
                |mut market| black_box(market.sell(&item, request)),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_total_inventory, bench_sell_across_vendors);
criterion_main!(benches);
