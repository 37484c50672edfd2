// SPDX-License-Identifier: MIT OR Apache-2.0

//! Start, payload, sub-handle and done lines end to end.

use statlog::style::PlainStyler;
use statlog::{Factory, InMemorySink, OutputConfig};
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;
#[cfg(target_arch = "wasm32")]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn harness() -> (Arc<InMemorySink>, Factory) {
    let sink = Arc::new(InMemorySink::new());
    let factory = Factory::new(sink.clone())
        .with_config(Arc::new(OutputConfig::new()))
        .with_styler(Arc::new(PlainStyler));
    (sink, factory)
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn create_error_done() {
    let (sink, factory) = harness();

    let stat = statlog::stat!(in factory, statlog::fields! { "user" => "alice" });
    let start = sink.take_lines();
    assert_eq!(start.len(), 1);
    assert!(start[0].contains("user[alice]"));
    assert!(start[0].contains(" start "));

    statlog::error!(stat, "failed: {}", 42);
    let error = sink.take_lines();
    assert_eq!(error.len(), 1);
    assert!(error[0].ends_with("failed: 42"));

    stat.done_with([None::<std::io::Error>]);
    let done = sink.take_lines();
    assert_eq!(done.len(), 1);
    assert!(done[0].contains(" done user[alice]: time["));
    assert!(!done[0].contains("failure"));
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn lines_name_the_creating_function() {
    let (sink, factory) = harness();
    let stat = statlog::stat!(in factory);
    statlog::info!(stat);
    for line in sink.take_lines() {
        assert!(line.starts_with("lifecycle.rs:"), "{line}");
        assert!(line.contains(" : lifecycle::lines_name_the_creating_function "), "{line}");
    }
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn bare_events_have_no_payload_section() {
    let (sink, factory) = harness();
    let stat = factory.create("main", Some(&statlog::fields! { "a" => 1 }));
    statlog::info!(stat);
    statlog::warn!(stat);
    statlog::error!(stat);
    let lines = sink.take_lines();
    assert_eq!(lines.len(), 4);
    for (line, label) in lines.iter().zip(["start", "info", "warn", "error"]) {
        assert!(line.ends_with(&format!(" : main {label} a[1]")), "{line}");
    }
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn line_numbers_point_at_the_call() {
    let (sink, factory) = harness();
    let stat = factory.create("main", None);
    sink.take_lines();
    let line = line!() + 1;
    statlog::warn!(stat, "here");
    assert_eq!(
        sink.take_lines(),
        vec![format!("lifecycle.rs:{line} : main warn: here")]
    );
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn sub_handles_nest_names() {
    let (sink, factory) = harness();
    let root = factory.create("main", Some(&statlog::fields! { "req" => 9 }));
    let worker = root.sub("worker", Some(&statlog::fields! { "shard" => 2 }));
    let step = worker.sub("step", None);
    assert_eq!(worker.caller(), "main(worker)");
    assert_eq!(step.caller(), "main(worker)(step)");
    assert!(worker.begin_time() >= root.begin_time());

    let lines = sink.take_lines();
    assert!(lines[1].ends_with(" : main(worker) start shard[2]"));
    assert!(lines[2].ends_with(" : main(worker)(step) start"));

    statlog::info!(root, "parent unaffected");
    assert!(sink.take_lines()[0].ends_with(" : main info req[9]: parent unaffected"));
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn failure_lines_point_at_done() {
    let (sink, factory) = harness();
    let stat = factory.create("main", None);
    sink.take_lines();
    let line = line!() + 1;
    stat.done_with([Some("disk full")]);
    let lines = sink.take_lines();
    assert_eq!(lines[0], format!("lifecycle.rs:{line} : main error: failure: disk full"));
    assert!(lines[1].starts_with(&format!("lifecycle.rs:{line} : main done: time[")));
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn repeated_done_keeps_reporting() {
    let (sink, factory) = harness();
    let stat = factory.create("main", None);
    sink.take_lines();
    stat.done();
    std::thread::sleep(std::time::Duration::from_millis(2));
    stat.done();
    statlog::info!(stat, "still usable");
    let lines = sink.take_lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].ends_with("still usable"));
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn handles_share_a_sink_across_threads() {
    let (sink, factory) = harness();
    let workers: Vec<_> = (0..4)
        .map(|i| {
            let factory = factory.clone();
            std::thread::spawn(move || {
                let stat = factory.create("worker", Some(&statlog::fields! { "id" => i }));
                stat.done();
            })
        })
        .collect();
    for worker in workers {
        worker.join().expect("worker should finish");
    }
    assert_eq!(sink.take_lines().len(), 8);
}
