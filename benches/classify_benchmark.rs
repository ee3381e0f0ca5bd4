//! Table analysis benchmarks
//!
//! Column role inference, series cleaning and HTML table extraction on
//! synthetic tables of increasing size.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use autochart::io::read_html;
use autochart::{normalize, Cell, Column, ColumnClassifier, DataCleaner, Header, NormalizedTable, RawTable, ReadOptions};

/// Create a table with an index, a label and three value columns
fn create_table(n_rows: usize) -> NormalizedTable {
    // Simple LCG random generator for reproducibility
    let mut rng_state: u64 = 42;
    let mut rand_f64 = || -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (rng_state >> 33) as f64 / (u32::MAX as f64)
    };

    let mut columns = vec![
        Column::new(
            Header::from("Unnamed: 0"),
            (0..n_rows).map(|i| Cell::Number(i as f64)).collect(),
        ),
        Column::new(
            Header::from("Rank"),
            (1..=n_rows).map(|i| Cell::Number(i as f64)).collect(),
        ),
        Column::new(
            Header::from("Name"),
            (0..n_rows).map(|i| Cell::from(format!("item_{}", i))).collect(),
        ),
    ];
    for name in ["Population", "Area", "GDP"] {
        let cells = (0..n_rows)
            .map(|i| {
                if i % 7 == 0 {
                    Cell::from("n/a")
                } else {
                    Cell::Number(rand_f64() * 1e6)
                }
            })
            .collect();
        columns.push(Column::new(Header::from(name), cells));
    }

    normalize(RawTable::new(columns).unwrap())
}

fn create_html(n_rows: usize) -> String {
    let mut html = String::from("<table><tr><th>Name</th><th>Value</th></tr>");
    for i in 0..n_rows {
        html.push_str(&format!(
            "<tr><td>item_{}</td><td>{},{:03}</td></tr>",
            i,
            i % 1000,
            i % 997
        ));
    }
    html.push_str("</table>");
    html
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("Classify");
    let classifier = ColumnClassifier::default();

    for n_rows in [100, 1_000, 10_000].iter() {
        let table = create_table(*n_rows);
        group.bench_with_input(BenchmarkId::new("classify", n_rows), &table, |b, table| {
            b.iter(|| classifier.classify(black_box(table)));
        });
    }

    group.finish();
}

fn bench_clean(c: &mut Criterion) {
    let mut group = c.benchmark_group("Clean");
    let cleaner = DataCleaner::default();

    for n_rows in [100, 10_000].iter() {
        let table = create_table(*n_rows);
        group.bench_with_input(BenchmarkId::new("clean", n_rows), &table, |b, table| {
            b.iter(|| cleaner.clean(black_box(table), "Name", "GDP").unwrap());
        });
    }

    group.finish();
}

fn bench_read_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("Read HTML");
    let options = ReadOptions::default();

    for n_rows in [100, 1_000].iter() {
        let html = create_html(*n_rows);
        group.bench_with_input(BenchmarkId::new("read_html", n_rows), &html, |b, html| {
            b.iter(|| read_html(black_box(html), &options).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_clean, bench_read_html);
criterion_main!(benches);
