//! Benchmarks for the card pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cards::render::wrap_lines;
use cards::{encode, BuiltinTemplates, CardGenerationData, CardRenderer, RecordingRenderer, TemplateKind};

fn card() -> CardGenerationData {
    CardGenerationData::new("First $500 Saved for the Family Camping Trip!")
        .with_subtitle("Family Vacation Fund")
        .with_description("Three months of small deposits added up. Next stop: the lake house in July.")
        .with_custom_text("Proud of you all")
        .with_progress(62.5)
        .with_members(4)
}

// -- Composition benchmarks --

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let data = card();

    for kind in TemplateKind::ALL {
        let template = BuiltinTemplates::for_kind(kind);
        group.bench_function(kind.id(), |b| {
            b.iter(|| {
                let mut rec = RecordingRenderer::new();
                CardRenderer::compose_into(&mut rec, black_box(&data), &template);
                rec.into_calls()
            })
        });
    }

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let renderer = CardRenderer::without_fonts();
    let data = card();

    for kind in TemplateKind::ALL {
        let template = BuiltinTemplates::for_kind(kind);
        group.bench_function(kind.id(), |b| {
            b.iter(|| renderer.render_surface(black_box(&data), &template).unwrap())
        });
    }

    let surface = renderer
        .render_surface(&data, &BuiltinTemplates::for_kind(TemplateKind::Progress))
        .unwrap();
    group.bench_function("encode_png", |b| b.iter(|| encode(black_box(&surface)).unwrap()));

    group.finish();
}

// -- Layout benchmarks --

fn bench_wrap(c: &mut Criterion) {
    let text = card().description.unwrap_or_default().repeat(8);

    c.bench_function("wrap_lines", |b| {
        b.iter(|| wrap_lines(black_box(&text), 320.0, |s| s.chars().count() as f32 * 9.6))
    });
}

criterion_group!(benches, bench_compose, bench_rendering, bench_wrap);
criterion_main!(benches);
