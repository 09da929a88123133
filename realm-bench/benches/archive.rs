//! Realm archive benchmark suite.
//!
//! Hot paths a front end hits on every keystroke or click:
//!   filter_visible_10k ......... search + rarity + tag over 10k records
//!   facet_rebuild_10k .......... category switch with facet recompute
//!   parse_export_5k ............ tabular export → records
//!   session_select_category .... session round trip with no-op hooks
//!   memory_match_expert_game ... deal + perfect play on a 24-tile board

use std::fmt::Write as _;
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand::rngs::StdRng;

use realm_core::archive::placeholder_archive_with_rng;
use realm_core::catalog::CatalogEngine;
use realm_core::game::{Difficulty, MemoryMatch};
use realm_core::tabular;
use realm_core::types::{Category, Rarity, Record};
use realm_session::{NoopHooks, Session};

fn archive(per_category: usize) -> Vec<Record> {
    placeholder_archive_with_rng(per_category, &mut StdRng::seed_from_u64(7))
}

fn export_text(records: &[Record]) -> String {
    let mut out = String::from(
        "Category,Name,Nickname,Rarity,Main Image URL,Extra Image 1,Extra Image 2,Extra Image 3,Tags,Story\n",
    );
    for r in records {
        let rarity = r.rarity.map(|g| g.to_string()).unwrap_or_default();
        let extras: Vec<&str> = r.extra_images.iter().map(String::as_str).collect();
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{}",
            r.category,
            r.name,
            r.nickname.as_deref().unwrap_or_default(),
            rarity,
            r.main_image_url,
            extras.first().copied().unwrap_or_default(),
            extras.get(1).copied().unwrap_or_default(),
            extras.get(2).copied().unwrap_or_default(),
            r.tag_tokens().next().unwrap_or_default(),
            r.story,
        );
    }
    out
}

fn bench_filter(c: &mut Criterion) {
    let mut engine = CatalogEngine::new(archive(2000), Category::Monster);
    engine.set_search("legend 1");
    engine.toggle_rarity(Rarity::S);
    engine.toggle_tag("Power");

    c.bench_function("filter_visible_10k", |b| {
        b.iter(|| black_box(engine.visible_records().len()));
    });
}

fn bench_facets(c: &mut Criterion) {
    let mut engine = CatalogEngine::new(archive(2000), Category::Character);
    let mut next = Category::ALL.iter().copied().cycle();

    c.bench_function("facet_rebuild_10k", |b| {
        b.iter(|| {
            engine.set_category(next.next().unwrap_or_default());
            black_box(engine.facet_tags().len());
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    let text = export_text(&archive(1000));

    c.bench_function("parse_export_5k", |b| {
        b.iter(|| black_box(tabular::parse_records(black_box(&text)).len()));
    });
}

fn bench_session(c: &mut Criterion) {
    let mut session = Session::new(archive(500), Arc::new(NoopHooks));

    c.bench_function("session_select_category", |b| {
        b.iter(|| {
            session.select_category(black_box(Category::Magic));
            session.set_search("legend");
        });
    });
}

fn bench_game(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("memory_match_expert_game", |b| {
        b.iter(|| {
            let mut game = MemoryMatch::new();
            game.start_with_rng(Difficulty::Expert, &mut rng);
            for icon in 0..game.total_pairs() {
                let positions: Vec<usize> = game
                    .tiles()
                    .iter()
                    .filter(|t| t.icon.0 == icon)
                    .map(|t| t.position)
                    .collect();
                for p in positions {
                    let _ = game.flip_tile(p);
                }
            }
            black_box(game.phase());
        });
    });
}

criterion_group!(
    benches,
    bench_filter,
    bench_facets,
    bench_parse,
    bench_session,
    bench_game,
);
criterion_main!(benches);
