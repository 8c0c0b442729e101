//! Golden file tests for the quantity engine.
//!
//! Test cases are individual JSON files in `fixtures/quantities/`, one
//! subdirectory per operation:
//! - `parsing/` - `parse_quantity`
//! - `conversion/` - `convert`
//! - `combining/` - `combine`
//! - `scaling/` - `scale`
//!
//! Test format:
//! ```json
//! { "op": "combine", "a": "200 g", "b": "300 g", "ingredient": "harina", "expected": "500 g" }
//! ```

use alacena_core::{combine, convert, parse_quantity, scale, ConversionResult, Quantity};
use glob::glob;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum TestCase {
    Parse {
        raw: String,
        expected: Quantity,
    },
    Convert {
        amount: f64,
        from: String,
        to: String,
        ingredient: Option<String>,
        expected: ConversionResult,
    },
    Combine {
        a: String,
        b: String,
        ingredient: String,
        expected: String,
    },
    Scale {
        raw: String,
        multiplier: f64,
        expected: String,
    },
}

impl TestCase {
    /// Run the case, returning (expected, actual) rendered for comparison.
    fn run(&self) -> Option<(String, String)> {
        let (expected, actual) = match self {
            TestCase::Parse { raw, expected } => {
                let actual = parse_quantity(raw);
                (format!("{expected:?}"), format!("{actual:?}"))
            }
            TestCase::Convert {
                amount,
                from,
                to,
                ingredient,
                expected,
            } => {
                let actual = convert(*amount, from, to, ingredient.as_deref());
                (format!("{expected:?}"), format!("{actual:?}"))
            }
            TestCase::Combine {
                a,
                b,
                ingredient,
                expected,
            } => (expected.clone(), combine(a, b, ingredient)),
            TestCase::Scale {
                raw,
                multiplier,
                expected,
            } => (expected.clone(), scale(raw, *multiplier)),
        };

        if expected == actual {
            None
        } else {
            Some((expected, actual))
        }
    }
}

/// Load all test cases under the fixtures directory
fn load_test_cases() -> Vec<(String, TestCase)> {
    let fixtures_dir =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/quantities");

    let mut cases = Vec::new();

    for subdir in ["parsing", "conversion", "combining", "scaling"] {
        let pattern = fixtures_dir.join(subdir).join("*.json");
        let pattern_str = pattern.to_string_lossy();

        for entry in glob(&pattern_str).expect("Failed to read glob pattern") {
            let path = entry.expect("Failed to read directory entry");
            let name = format!("{}/{}", subdir, path.file_stem().unwrap().to_string_lossy());
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            let case: TestCase = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
            cases.push((name, case));
        }
    }

    // Sort by name for deterministic ordering
    cases.sort_by(|a, b| a.0.cmp(&b.0));

    cases
}

#[test]
fn test_quantity_golden_files() {
    let cases = load_test_cases();
    assert!(!cases.is_empty(), "No quantity fixtures found");

    let failures: Vec<_> = cases
        .iter()
        .filter_map(|(name, case)| case.run().map(|(e, a)| (name, e, a)))
        .collect();

    if !failures.is_empty() {
        let mut msg = format!(
            "\n{} failures across {} tests:\n",
            failures.len(),
            cases.len()
        );

        for (name, expected, actual) in &failures {
            msg.push_str(&format!("\n=== {} ===\n", name));
            msg.push_str(&format!("Expected: {}\n", expected));
            msg.push_str(&format!("Actual:   {}\n", actual));
        }

        panic!("{}", msg);
    }

    println!("All {} quantity golden tests passed!", cases.len());
}
