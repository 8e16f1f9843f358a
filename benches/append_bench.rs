//! Benchmarks for LogForge storage operations

use criterion::{criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

use logforge::{Level, LogStore, Metadata, NewRecord};

fn store_benchmarks(c: &mut Criterion) {
    // Append throughput against a file-backed store (WAL mode)
    c.bench_function("append_single_record", |b| {
        let temp_dir = TempDir::new().unwrap();
        let store = LogStore::open_path(&temp_dir.path().join("bench.db")).unwrap();

        let mut metadata = Metadata::new();
        metadata.insert("request_id".to_string(), serde_json::json!("bench"));
        let record = NewRecord::new(Level::Info, "benchmark record").with_metadata(metadata);

        b.iter(|| store.append(&record).unwrap());
    });

    // Full-page scan over a store holding several pages of records
    c.bench_function("page_scan_100_records", |b| {
        let temp_dir = TempDir::new().unwrap();
        let store = LogStore::open_path(&temp_dir.path().join("bench.db")).unwrap();

        for i in 0..300 {
            store
                .append(&NewRecord::new(Level::Info, format!("record {}", i)))
                .unwrap();
        }

        b.iter(|| store.page(1).unwrap());
    });
}

criterion_group!(benches, store_benchmarks);
criterion_main!(benches);
