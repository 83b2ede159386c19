// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use jar_scrape::core::html::flatten;
use jar_scrape::scrape;

// Synthetic page in the shape of the real jar page: a lot of markup
// noise around one small stats block.
fn sample_page() -> String {
    let mut html = String::from("<!DOCTYPE html><html><head><title>Збір на CASE-31</title>");
    for i in 0..200 {
        html.push_str(&format!(
            "<meta name=\"x{i}\" content=\"lorem ipsum dolor sit amet\">"
        ));
    }
    html.push_str("</head><body>");
    for i in 0..500 {
        html.push_str(&format!("<div class=\"filler\"><span>block {i}</span></div>"));
    }
    html.push_str(
        "<div class=\"stats\">Зібрано <b>50&nbsp;000</b> грн з <b>115 000</b> грн</div>",
    );
    html.push_str("</body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let doc = sample_page();

    c.bench_function("flatten", |b| {
        b.iter(|| black_box(flatten(black_box(&doc))).len())
    });

    c.bench_function("extract", |b| {
        b.iter(|| {
            let snap = scrape::extract(black_box(&doc)).unwrap();
            black_box(snap.balance)
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
