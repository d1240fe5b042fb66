use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use fund_ledger::ledger::Ledger;

fn build_sample_ledger(budget_count: usize, spends_per_budget: usize) -> Ledger {
    let mut ledger = Ledger::new((budget_count * 100) as f64);

    for idx in 0..budget_count {
        let name = format!("budget-{idx}");
        ledger.allocate(name.as_str(), 100.0).expect("allocate within pool");
        for spend in 0..spends_per_budget {
            ledger
                .record_spend(&name, (spend % 7) as f64 + 0.5)
                .expect("record spend");
        }
    }

    ledger
}

fn bench_allocation(c: &mut Criterion) {
    c.bench_function("allocate_1k_budgets", |b| {
        b.iter_batched(
            || Ledger::new(100_000.0),
            |mut ledger| {
                for idx in 0..1_000 {
                    ledger
                        .allocate(format!("budget-{idx}"), 100.0)
                        .expect("allocate within pool");
                }
                ledger
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_spending(c: &mut Criterion) {
    c.bench_function("record_spend_10k", |b| {
        b.iter_batched(
            || {
                let mut ledger = Ledger::new(1_000.0);
                ledger.allocate("turnover", 1_000.0).expect("allocate");
                ledger
            },
            |mut ledger| {
                for idx in 0..10_000 {
                    ledger
                        .record_spend("turnover", (idx % 13) as f64)
                        .expect("record spend");
                }
                ledger
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_summaries(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(1_000), 16);

    c.bench_function("summarize_1k_budgets", |b| {
        b.iter(|| {
            let report = ledger.summarize();
            black_box(report);
        })
    });
}

criterion_group!(benches, bench_allocation, bench_spending, bench_summaries);
criterion_main!(benches);
