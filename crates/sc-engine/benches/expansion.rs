//! Benchmarks for shortcode expansion throughput.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sc_engine::{EngineConfig, SequentialIds, ShortcodeEngine};

/// Generate content with `sections` sections, each holding one of every kind.
fn generate_content(sections: usize) -> String {
    let mut text = String::with_capacity(sections * 700);
    for i in 0..sections {
        text.push_str(&format!("<h2>Section {i}</h2>\n<p>Some introductory prose.</p>\n"));
        text.push_str(&format!(
            "[button url=\"/docs/{i}\" style=\"success\"]Read part {i}[/button]\n"
        ));
        text.push_str("[alert type=\"warning\"]Mind the <em>gap</em>.[/alert]\n");
        text.push_str("[gallery images=\"1,2,3\" columns=\"3\"]\n");
        text.push_str(
            "[tabs][tab title=\"One\"]first[/tab][tab title=\"Two\"]second[/tab][/tabs]\n",
        );
        text.push_str("[accordion][item title=\"Q\"]A[/item][/accordion]\n");
        text.push_str("[countdown date=\"2030-01-01\"]\n");
    }
    text.push_str("[contact_form email=\"team@example.com\"]\n");
    text
}

fn engine() -> ShortcodeEngine {
    ShortcodeEngine::new(EngineConfig::default()).with_id_generator(SequentialIds::new())
}

fn bench_plain_text(c: &mut Criterion) {
    let engine = engine();
    let text = "Plain paragraph without any tags. ".repeat(200);

    c.bench_function("render_plain_text", |b| {
        b.iter(|| engine.render(&text));
    });
}

fn bench_single_button(c: &mut Criterion) {
    let engine = engine();

    c.bench_function("render_single_button", |b| {
        b.iter(|| engine.render(r#"[button url="/signup" style="primary"]Join[/button]"#));
    });
}

fn bench_varying_sizes(c: &mut Criterion) {
    let engine = engine();
    let mut group = c.benchmark_group("render_by_size");

    for sections in [1, 10, 50] {
        let text = generate_content(sections);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("sections", sections),
            &text,
            |b, text| b.iter(|| engine.render(text)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_plain_text,
    bench_single_button,
    bench_varying_sizes
);
criterion_main!(benches);
