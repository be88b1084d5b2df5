// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use naiad::render::{project_strip, ProjectionOptions};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `render.project_strip`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `small_defaults`, `large_wide`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.project_strip");

    let strip_small = fixtures::strip_fixture(fixtures::Case::StripSmall);
    let options_defaults = ProjectionOptions::default();
    group.bench_function("small_defaults", move |b| {
        b.iter(|| {
            black_box(project_strip(
                black_box(&strip_small),
                black_box(&options_defaults),
            ))
        })
    });

    let strip_large = fixtures::strip_fixture(fixtures::Case::StripLarge);
    let options_wide = ProjectionOptions {
        max_items: 64,
        ..ProjectionOptions::default()
    };
    group.bench_function("large_wide", move |b| {
        b.iter(|| {
            black_box(project_strip(
                black_box(&strip_large),
                black_box(&options_wide),
            ))
        })
    });

    let strip_large_icons_off = fixtures::strip_fixture(fixtures::Case::StripLarge);
    let options_plain = ProjectionOptions {
        max_items: 64,
        show_icons: false,
        show_titles: false,
    };
    group.bench_function("large_plain", move |b| {
        b.iter(|| {
            black_box(project_strip(
                black_box(&strip_large_icons_off),
                black_box(&options_plain),
            ))
        })
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
