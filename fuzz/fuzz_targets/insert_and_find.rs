#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, i32)>, String)| {
    let mut tree = routrie::Tree::new();

    for (pattern, payload) in data.0 {
        if tree.add(&pattern, payload).is_err() {
            return;
        }
    }

    // lookups are total; they must never panic
    let _ = tree.find(&data.1).found();
});
