//! Performance benchmarks for rs-jparser.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Small synthetic HTML (~1KB) for microbenchmarks
//! - Table-heavy and link-heavy pages that stress the linearizer and pruning
//! - Real-world HTML files, when present, for realistic performance

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_jparser::{extract, Extractor, Options};
use std::fs;

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article - Example News</title>
    <style>body { font-family: serif; }</style>
    <script>window.tracker = true;</script>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample Article</h1>
        <p>This is the first paragraph of the article. It contains some <strong>meaningful</strong>
        content that should be extracted by the linearizer.</p>
        <p>Here is a second paragraph with a <a href="/related">related link</a> and more content.
        The extraction should preserve the text while removing navigation.</p>
        <img data-original="/images/lead.jpg" src="/images/placeholder.gif">
        <table><tr><th>Year</th><th>Sales</th></tr><tr><td>2023</td><td>12</td></tr></table>
        <div style="display:none">Hidden tracking pixel text</div>
    </article>
    <section>
        <h3>Related Articles</h3>
        <ul>
            <li><a href="/one">Related article 1</a></li>
            <li><a href="/two">Related article 2</a></li>
        </ul>
    </section>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

/// A page of `rows` link-heavy paragraphs followed by a data table.
fn synthetic_page(rows: usize) -> String {
    let mut html = String::from("<html><head><title>Synthetic</title></head><body><div id=\"content\">");
    for i in 0..rows {
        html.push_str(&format!(
            "<p>Paragraph {i} with plenty of ordinary prose and <a href=\"/p/{i}\">a link</a>.</p>\
             <ul><li><a href=\"/nav/{i}\">Nav {i}</a></li></ul>"
        ));
    }
    html.push_str("<table>");
    for i in 0..rows {
        html.push_str(&format!("<tr><td>{i}</td><td>value {i}</td></tr>"));
    }
    html.push_str("</table></div></body></html>");
    html
}

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_reused_extractor(c: &mut Criterion) {
    let options = Options {
        url: Some("https://example.com/news/".to_string()),
        ..Options::default()
    };
    let Ok(extractor) = Extractor::new(options) else {
        return;
    };

    c.bench_function("extractor_with_base_url", |b| {
        b.iter(|| extractor.extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_synthetic_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthetic");
    for rows in [10, 100, 500] {
        let html = synthetic_page(rows);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", rows), &html, |b, html| {
            b.iter(|| extract(black_box(html)));
        });
    }
    group.finish();
}

/// Benchmark with real-world HTML files of varying sizes
fn bench_real_world_html(c: &mut Criterion) {
    let html_dir = "../data/html_files";

    // Try to load sample files of different sizes
    let sample_files = ["0001.html", "0010.html", "0100.html"];

    let mut group = c.benchmark_group("real_world");

    for filename in &sample_files {
        let path = format!("{html_dir}/{filename}");
        if let Ok(html) = fs::read_to_string(&path) {
            let size_kb = html.len() / 1024;
            group.throughput(Throughput::Bytes(html.len() as u64));
            group.bench_with_input(
                BenchmarkId::new("extract", format!("{filename} ({size_kb}KB)")),
                &html,
                |b, html| {
                    b.iter(|| extract(black_box(html)));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_reused_extractor,
    bench_synthetic_sizes,
    bench_real_world_html
);
criterion_main!(benches);
