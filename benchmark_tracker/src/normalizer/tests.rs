//!
//! The measurement normalizer tests.
//!

use chrono::DateTime;
use chrono::Utc;

use crate::model::commit::identity::Identity;
use crate::model::commit::CommitRef;
use crate::model::entry::Entry;
use crate::model::history::SuiteHistory;
use crate::model::measurement::Measurement;

use super::error::Error;
use super::tool::Tool;

const CARGO_OUTPUT: &str = r#"
   Compiling irc-rust v0.3.0
    Finished bench [optimized] target(s) in 12.34s
     Running target/release/deps/bench-4a4c0b9e

running 3 tests
test bench::bench_params_create ... bench:         283 ns/iter (+/- 49)
test bench::bench_parse         ... bench:       1,168 ns/iter (+/- 3)
test bench::bench_tag_index     ... bench:         152.50 ns/iter (+/- 4.25)

test result: ok. 0 passed; 0 failed; 0 ignored; 3 measured; 0 filtered out
"#;

const GO_OUTPUT: &str = r#"
goos: linux
goarch: amd64
BenchmarkFib10-8   	 5000000	       325 ns/op	      16 B/op	       1 allocs/op
BenchmarkFib20     	   30000	     40537 ns/op
PASS
ok  	github.com/example/fib	3.011s
"#;

const BENCHMARKJS_OUTPUT: &str = r#"
fib(10) x 1,431,759 ops/sec ±0.50% (93 runs sampled)
fib(20) x 12,000 ops/sec ±1.00% (1 run sampled)
Fastest is fib(10)
"#;

#[test]
fn cargo() {
    let benches = super::normalize(Tool::Cargo, CARGO_OUTPUT).expect("Failed to normalize");

    assert_eq!(
        benches.keys().collect::<Vec<_>>(),
        vec![
            "bench__bench_params_create",
            "bench__bench_parse",
            "bench__bench_tag_index"
        ]
    );
    assert_eq!(
        benches["bench__bench_parse"],
        Measurement::new(1168.0, 3.0, "ns/iter").expect("Always valid")
    );
    assert_eq!(benches["bench__bench_tag_index"].value, 152.5);
    assert_eq!(benches["bench__bench_tag_index"].dispersion, 4.25);
}

#[test]
fn cargo_malformed_result_line() {
    let raw = "test bench::broken ... bench: lots ns/iter (+/- 3)";
    assert!(matches!(
        super::normalize(Tool::Cargo, raw),
        Err(Error::MalformedOutput {
            tool: Tool::Cargo,
            ..
        })
    ));
}

#[test]
fn cargo_without_benchmarks() {
    let raw = "running 0 tests\n\ntest result: ok. 0 passed; 0 failed";
    assert_eq!(
        super::normalize(Tool::Cargo, raw),
        Err(Error::EmptyResult { tool: Tool::Cargo })
    );
}

#[test]
fn cargo_duplicate_name() {
    let raw = "test a ... bench: 1 ns/iter (+/- 0)\ntest a ... bench: 2 ns/iter (+/- 0)";
    assert_eq!(
        super::normalize(Tool::Cargo, raw),
        Err(Error::DuplicateBenchmark("a".to_owned()))
    );
}

#[test]
fn go() {
    let benches = super::normalize(Tool::Go, GO_OUTPUT).expect("Failed to normalize");

    assert_eq!(
        benches.keys().collect::<Vec<_>>(),
        vec![
            "BenchmarkFib10",
            "BenchmarkFib10 - B/op",
            "BenchmarkFib10 - allocs/op",
            "BenchmarkFib20"
        ]
    );
    let fib10 = &benches["BenchmarkFib10"];
    assert_eq!(fib10.value, 325.0);
    assert_eq!(fib10.dispersion, 0.0);
    assert_eq!(fib10.unit, "ns/op");
    assert_eq!(fib10.extra.as_deref(), Some("5000000 times\n8 procs"));
    assert_eq!(benches["BenchmarkFib20"].extra.as_deref(), Some("30000 times"));
}

#[test]
fn go_unpaired_metric() {
    let raw = "BenchmarkFib10-8   5000000   325 ns/op 16";
    assert!(matches!(
        super::normalize(Tool::Go, raw),
        Err(Error::MalformedOutput { tool: Tool::Go, .. })
    ));
}

#[test]
fn benchmarkjs() {
    let benches =
        super::normalize(Tool::BenchmarkJs, BENCHMARKJS_OUTPUT).expect("Failed to normalize");

    assert_eq!(benches.len(), 2);
    let fib10 = &benches["fib(10)"];
    assert_eq!(fib10.value, 1_431_759.0);
    assert!((fib10.dispersion - 7158.795).abs() < 1e-6);
    assert_eq!(fib10.unit, "ops/sec");
    assert_eq!(fib10.extra.as_deref(), Some("93 samples"));
    assert_eq!(benches["fib(20)"].dispersion, 120.0);
}

#[test]
fn custom() {
    let raw = r#"[
        { "name": "parse", "unit": "ms", "value": 12.5, "range": "± 0.5" },
        { "name": "throughput", "unit": "MB/s", "value": 200, "range": "±10%", "extra": "3 runs" },
        { "name": "plain", "unit": "ms", "value": 1 }
    ]"#;
    let benches = super::normalize(Tool::CustomBiggerIsBetter, raw).expect("Failed to normalize");

    assert_eq!(benches["parse"].dispersion, 0.5);
    assert_eq!(benches["throughput"].dispersion, 20.0);
    assert_eq!(benches["throughput"].extra.as_deref(), Some("3 runs"));
    assert_eq!(benches["plain"].dispersion, 0.0);
}

#[test]
fn custom_malformed() {
    for raw in [
        "not json",
        r#"{ "name": "parse" }"#,
        r#"[{ "name": "parse", "unit": "ms", "value": -1 }]"#,
        r#"[{ "name": "parse", "unit": "ms", "value": 1, "range": "± much" }]"#,
    ] {
        assert!(
            matches!(
                super::normalize(Tool::CustomSmallerIsBetter, raw),
                Err(Error::MalformedOutput { .. })
            ),
            "{raw}"
        );
    }
    assert_eq!(
        super::normalize(Tool::CustomSmallerIsBetter, "[]"),
        Err(Error::EmptyResult {
            tool: Tool::CustomSmallerIsBetter
        })
    );
}

#[test]
fn normalize_all_combines_outputs() {
    let first = "test a ... bench: 1 ns/iter (+/- 0)";
    let second = "test b ... bench: 2 ns/iter (+/- 0)";
    let benches = super::normalize_all(Tool::Cargo, [first, second]).expect("Failed to normalize");
    assert_eq!(benches.keys().collect::<Vec<_>>(), vec!["a", "b"]);

    assert_eq!(
        super::normalize_all(Tool::Cargo, [first, first]),
        Err(Error::DuplicateBenchmark("a".to_owned()))
    );
    assert_eq!(
        super::normalize_all(Tool::Cargo, [first, "nothing here"]),
        Err(Error::EmptyResult { tool: Tool::Cargo })
    );
}

#[test]
fn ensure_units() {
    let mut history = SuiteHistory::new();
    let benches = super::normalize(Tool::Cargo, "test a ... bench: 1 ns/iter (+/- 0)")
        .expect("Failed to normalize");
    history.push(Entry::new(
        CommitRef::new(
            "c1",
            Identity::new("a", "a@example.com"),
            "first",
            DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").expect("Always valid"),
        ),
        Utc::now(),
        Tool::Cargo.to_string(),
        benches,
    ));

    let same = super::normalize(Tool::Cargo, "test a ... bench: 2 ns/iter (+/- 0)\ntest b ... bench: 2 us/iter (+/- 0)")
        .expect("Failed to normalize");
    assert_eq!(super::ensure_units(&history, &same), Ok(()));

    let changed = super::normalize(Tool::Go, "BenchmarkA 10 2 ns/op").expect("Failed to normalize");
    assert_eq!(super::ensure_units(&history, &changed), Ok(()));

    let changed = super::normalize(Tool::Cargo, "test a ... bench: 2 ms/iter (+/- 0)")
        .expect("Failed to normalize");
    assert_eq!(
        super::ensure_units(&history, &changed),
        Err(Error::UnitMismatch {
            name: "a".to_owned(),
            expected: "ns/iter".to_owned(),
            found: "ms/iter".to_owned(),
        })
    );
}

#[test]
fn tool_names() {
    for tool in Tool::ALL {
        assert_eq!(tool.to_string().parse::<Tool>().expect("Always valid"), tool);
    }
    assert!("criterion".parse::<Tool>().is_err());
}
