use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lab_catalog::FilterCriteria;
use lab_catalog::catalog::{Facets, group_by_year, run_pipeline};
use lab_catalog::models::{Author, Paper};

const AUTHORS: [&str; 5] = ["Jane Doe", "John Roe*", "Ann Lee", "Bo Kim", "Carol Chen"];
const MONTHS: [&str; 5] = ["January", "March-Workshop", "July", "December", "Spring"];

fn catalog(size: usize) -> Vec<Paper> {
    (0..size)
        .map(|i| Paper {
            authors: vec![Author::new(AUTHORS[i % 5]), Author::new(AUTHORS[(i + 2) % 5])],
            public_at: Some(format!("Conference {}", i % 7)),
            year: (i % 11 != 0).then(|| (2000 + i % 25).to_string()),
            month: Some(MONTHS[i % 5].to_string()),
            ..Paper::new(format!("Paper {i} on graph neural networks"))
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let papers = catalog(500);

    c.bench_function("pipeline_unfiltered", |b| {
        b.iter(|| run_pipeline(black_box(&papers), &FilterCriteria::new()))
    });

    let criteria = FilterCriteria::new().with_author("Ann Lee").with_search("conference [1-3]");
    c.bench_function("pipeline_author_and_search", |b| {
        b.iter(|| run_pipeline(black_box(&papers), black_box(&criteria)))
    });

    c.bench_function("group_by_year", |b| b.iter(|| group_by_year(black_box(papers.clone()))));

    c.bench_function("facets_from_papers", |b| b.iter(|| Facets::from_papers(black_box(&papers))));
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
