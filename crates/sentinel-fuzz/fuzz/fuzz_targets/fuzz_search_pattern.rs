#![no_main]

use lab_catalog::FilterCriteria;
use lab_catalog::catalog::run_pipeline;
use lab_catalog::models::{Author, Paper};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|pattern: &str| {
    let papers = vec![
        Paper {
            authors: vec![Author::new("Jane Doe*")],
            public_at: Some("ICML".into()),
            year: Some("2021".into()),
            month: Some("July".into()),
            ..Paper::new("Neural Networks at Scale")
        },
        Paper { month: Some(pattern.to_string()), ..Paper::new(pattern) },
    ];

    // Invalid patterns must surface as errors, never panics
    let _ = run_pipeline(&papers, &FilterCriteria::new().with_search(pattern));
});
