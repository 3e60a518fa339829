//! Search throughput over the bundled dataset and a synthetic larger one.
//!
//! ```bash
//! cargo bench -p goshanta-core
//! cargo bench -p goshanta-core --features parallel
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use goshanta_core::prelude::*;
use std::hint::black_box;

const BUNDLED: &str = include_str!("../data/goshanta.json");

const QUERIES: &[&str] = &[
    "I want to visit Sylhet",
    "cheap historical museum trip for family",
    "luxury lake for couple",
    "nowhereville",
];

/// Repeat every spot and district `factor` times with suffixed names.
fn inflate(base: &TravelDb, factor: usize) -> TravelDb {
    let mut spots = Vec::new();
    let mut districts = Vec::new();
    for i in 0..factor {
        for spot in base.spots.documents() {
            let mut s = spot.clone();
            s.name = format!("{} {i}", s.name);
            spots.push(s);
        }
        for district in base.districts.documents() {
            districts.push(District::new(
                format!("{} {i}", district.name),
                district.division.clone(),
            ));
        }
    }
    TravelDb::new(spots, base.countries.documents().to_vec(), districts)
}

fn bench_interpret(c: &mut Criterion) {
    let db = TravelDb::default();
    let engine = QueryEngine::new(&db);
    c.bench_function("interpret", |b| {
        b.iter(|| {
            for q in QUERIES {
                black_box(engine.parse(black_box(q)));
            }
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let base = TravelDb::load_json_str(BUNDLED).expect("bundled dataset parses");
    let mut group = c.benchmark_group("search_spots_and_geo");

    for factor in [1usize, 100, 1000] {
        let db = inflate(&base, factor);
        group.throughput(Throughput::Elements(db.spots.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(factor), &db, |b, db| {
            b.iter(|| {
                for q in QUERIES {
                    black_box(db.search(black_box(q)).expect("in-memory search"));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_interpret, bench_search);
criterion_main!(benches);
