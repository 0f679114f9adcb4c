//! Benchmarks for course parsing and page rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use corsite::{parse_str, HtmlRenderer, PageAssembler};

fn synthetic_course(modules: usize) -> String {
    let mut doc = String::from("# Corso di prova\n\n");
    for n in 1..=modules {
        doc.push_str(&format!("## Modulo {}: Argomento {}\n\n", n, n));
        doc.push_str("Riga introduttiva del modulo con un [link](https://example.com).\n\n");
        doc.push_str("### Scheda rapida del modulo\n- concetto uno\n- concetto due\n\n");
        doc.push_str("| Voce | Valore |\n| --- | --- |\n| a | 1 |\n| b | 2 |\n\n");
        doc.push_str("1. primo passo\n2. secondo passo\n\n");
        doc.push_str("![schema](img/schema.png)\n*Didascalia*\n\n");
    }
    doc.push_str("## Labs\n\n- esercitazione\n\n## Bibliografia\n\nUn testo.\n");
    doc
}

fn bench_parse(c: &mut Criterion) {
    let doc = synthetic_course(8);
    c.bench_function("parse_course", |b| {
        b.iter(|| parse_str(black_box(&doc)).unwrap())
    });
}

fn bench_render_body(c: &mut Criterion) {
    let doc = synthetic_course(8);
    let course = parse_str(&doc).unwrap();
    let renderer = HtmlRenderer::new();
    c.bench_function("render_module_body", |b| {
        b.iter(|| renderer.render_body(black_box(&course.modules[0].body)))
    });
}

fn bench_assemble_pages(c: &mut Criterion) {
    let doc = synthetic_course(8);
    let course = parse_str(&doc).unwrap();
    let assembler = PageAssembler::new();
    c.bench_function("assemble_all_pages", |b| {
        b.iter(|| {
            let mut pages = vec![assembler.home_page(black_box(&course))];
            for idx in 0..course.module_count() {
                pages.push(assembler.module_page(&course, idx));
            }
            pages
        })
    });
}

criterion_group!(benches, bench_parse, bench_render_body, bench_assemble_pages);
criterion_main!(benches);
