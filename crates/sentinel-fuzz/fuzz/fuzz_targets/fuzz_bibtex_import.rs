#![no_main]

use lab_catalog::bibtex::{ImportOptions, import_bibtex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|source: &str| {
    let _ = import_bibtex(source, &ImportOptions::default());
});
