//! Benchmarks for dataset loading and chart construction
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use econdash::chart::{build_activity_metric_chart, build_exchange_chart};
use econdash::choice::ActivityMetric;
use econdash::data::{load_table_str, ActivityIndexTable, ExchangeRateTable};

fn exchange_csv(rows: usize) -> String {
    let mut csv = String::from("Fecha,Compra,Venta\n");
    for i in 0..rows {
        csv.push_str(&format!("{},{:.4},{:.4}\n", i, 7.5 + i as f64 * 0.001, 7.6));
    }
    csv
}

fn activity_csv(rows: usize) -> String {
    let mut csv = String::from("Período,Var. % interanual,Var. % acumulada\n");
    for i in 0..rows {
        csv.push_str(&format!("{},{:.2},{:.2}\n", i, (i % 7) as f64 - 3.0, i as f64 * 0.1));
    }
    csv
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for rows in [100, 1000, 10000] {
        let csv = exchange_csv(rows);
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_function(format!("exchange_{}", rows), |b| {
            b.iter(|| load_table_str(black_box(&csv), "Fecha").unwrap())
        });
    }

    group.finish();
}

fn bench_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("charts");

    for rows in [100, 1000, 10000] {
        let exchange =
            ExchangeRateTable::from_table(load_table_str(&exchange_csv(rows), "Fecha").unwrap())
                .unwrap();
        let activity = ActivityIndexTable::from_table(
            load_table_str(&activity_csv(rows), "Período").unwrap(),
            "Var. % interanual",
            "Var. % acumulada",
        )
        .unwrap();

        group.throughput(Throughput::Elements(rows as u64));

        group.bench_function(format!("exchange_{}", rows), |b| {
            b.iter(|| build_exchange_chart(black_box(&exchange)))
        });

        group.bench_function(format!("activity_metric_{}", rows), |b| {
            b.iter(|| {
                build_activity_metric_chart(black_box(&activity), ActivityMetric::Accumulated)
                    .to_plotly()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load, bench_charts);
criterion_main!(benches);
