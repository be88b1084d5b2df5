// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use naiad::import::flatten_links;
use naiad::store::{ConfigFile, ItemStore, StripSettings};

mod fixtures;
mod profiler;

use fixtures::TempDir;

// Benchmark identity (keep stable):
// - Group names in this file: `store.config_file`, `store.import`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `save_small`, `roundtrip_large`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store.config_file");

    let strip_small = fixtures::strip_fixture(fixtures::Case::StripSmall);
    group.bench_function("save_small", move |b| {
        b.iter_batched_ref(
            || TempDir::new("store_save_small"),
            |tmp| {
                let config = ConfigFile::new(tmp.path().join("naiad.json"));
                config
                    .save(black_box(&strip_small), &StripSettings::default())
                    .expect("save");
                black_box(std::fs::metadata(config.path()).expect("config metadata").len())
            },
            BatchSize::SmallInput,
        )
    });

    let strip_large = fixtures::strip_fixture(fixtures::Case::StripLarge);
    group.bench_function("roundtrip_large", move |b| {
        b.iter_batched_ref(
            || {
                let tmp = TempDir::new("store_roundtrip_large");
                let config = ConfigFile::new(tmp.path().join("naiad.json"));
                config.save(&strip_large, &StripSettings::default()).expect("save");
                (tmp, config)
            },
            |(_tmp, config)| {
                let (strip, settings) = config.load().expect("load");
                black_box((strip.len(), settings.max_items))
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();

    let mut group = c.benchmark_group("store.import");

    let tree = fixtures::bookmark_tree(6, 8);
    let flatten_tree = tree.clone();
    group.bench_function("flatten_deep", move |b| {
        b.iter(|| black_box(flatten_links(black_box(&flatten_tree)).len()))
    });

    group.bench_function("import_deep", move |b| {
        b.iter_batched_ref(
            || {
                let tmp = TempDir::new("store_import_deep");
                let store = ItemStore::open(ConfigFile::new(tmp.path().join("naiad.json")))
                    .expect("open store");
                (tmp, store, tree.clone())
            },
            |(_tmp, store, tree)| {
                black_box(store.import_bookmarks(black_box(tree)).expect("import"))
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_store
}
criterion_main!(benches);
