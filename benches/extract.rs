use std::fmt::Write;

use colstat::{extract_column, Operation};
use criterion::{criterion_group, criterion_main, Criterion};

fn make_csv(rows: usize) -> String {
    let mut body = String::from("IP Address,Requests,Response Time\n");
    for i in 0..rows {
        let _ = writeln!(body, "192.168.0.{},{},{}", i % 255, 1000 + i, 200 + (i % 50));
    }
    body
}

fn bench_extract_column(c: &mut Criterion) {
    let body = make_csv(10_000);
    c.bench_function("extract_column_10k", |b| {
        b.iter(|| {
            let data = extract_column(body.as_bytes(), 3).unwrap();
            Operation::Avg.reduce(&data)
        })
    });
}

criterion_group!(extract, bench_extract_column);
criterion_main!(extract);
