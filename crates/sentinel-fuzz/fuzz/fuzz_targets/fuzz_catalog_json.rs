#![no_main]

use lab_catalog::FilterCriteria;
use lab_catalog::catalog::run_pipeline;
use lab_catalog::models::{Paper, Person};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = serde_json::from_value::<Person>(json.clone());
        let _ = serde_json::from_value::<FilterCriteria>(json.clone());

        // Whatever decodes must survive the full pipeline
        if let Ok(papers) = serde_json::from_value::<Vec<Paper>>(json) {
            let _ = run_pipeline(&papers, &FilterCriteria::new());
        }
    }
});
