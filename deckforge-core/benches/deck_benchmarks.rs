//! Deck assembly and serialization benchmarks
//!
//! Run with: `cargo bench --bench deck_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use deckforge::deck::{self, Slide};
use deckforge::text::layout::wrap_line;
use deckforge::{Palette, TextStyle};

fn benchmark_assembly(c: &mut Criterion) {
    let slides = deck::reference_slides();

    c.bench_function("assemble_reference_deck", |b| {
        b.iter(|| deck::assemble(black_box(&slides)))
    });

    let mut group = c.benchmark_group("render_slide");
    for (index, slide) in slides.iter().enumerate() {
        let id = BenchmarkId::new(slide.kind(), index + 1);
        group.bench_with_input(id, slide, |b, slide: &Slide| {
            b.iter(|| {
                let mut page = deckforge::Document::widescreen().new_page();
                slide.render(&mut page);
                page
            })
        });
    }
    group.finish();
}

fn benchmark_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_reference_deck");
    for compress in [false, true] {
        let Ok(mut doc) = deck::build_reference_deck() else {
            return;
        };
        doc.set_compress(compress);
        let label = if compress { "compressed" } else { "plain" };
        group.bench_function(label, |b| {
            b.iter(|| {
                let mut buffer = Vec::with_capacity(256 * 1024);
                let _ = doc.write(black_box(&mut buffer));
                buffer
            })
        });
    }
    group.finish();
}

fn benchmark_wrapping(c: &mut Criterion) {
    let style = TextStyle::new(13.0, Palette::TextLight);
    let mixed = "紙本名冊、Excel 表格散落各處 學員資料不統一，查詢耗時 NFC 刷卡點名（1秒完成）";

    c.bench_function("wrap_mixed_script_line", |b| {
        b.iter(|| wrap_line(black_box(mixed), &style, black_box(230.0)))
    });
}

criterion_group!(
    benches,
    benchmark_assembly,
    benchmark_serialization,
    benchmark_wrapping
);
criterion_main!(benches);
