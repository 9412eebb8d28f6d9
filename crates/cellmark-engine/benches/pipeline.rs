use cellmark_engine::{
    MemoryDocument, RenderOptions, convert_or_plain, parse_markdown, tokenize_inline,
    write_blocks,
};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("markdown");
    group.sample_size(10);

    let content = common::generate_markdown_cell(100);
    group.bench_function("parse_markdown", |b| {
        b.iter(|| std::hint::black_box(parse_markdown(std::hint::black_box(&content))));
    });

    let line = "Some **bold**, *italic*, ~~gone~~, `code` and [a link](https://example.com). "
        .repeat(20);
    group.bench_function("tokenize_inline", |b| {
        b.iter(|| std::hint::black_box(tokenize_inline(std::hint::black_box(&line))));
    });

    group.finish();
}

fn bench_convert_and_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(10);

    let options = RenderOptions::default();
    for (name, cell) in [
        ("markdown", common::generate_markdown_cell(50)),
        ("html", common::generate_html_cell(50)),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let blocks = convert_or_plain(std::hint::black_box(&cell));
                let mut doc = MemoryDocument::new();
                write_blocks(&blocks, &mut doc, &options);
                std::hint::black_box(doc);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_markdown, bench_convert_and_write);
criterion_main!(benches);
