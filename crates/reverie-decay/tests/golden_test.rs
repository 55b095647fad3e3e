//! Saliency golden scenarios from `golden/saliency/`.

use reverie_core::memory::{parse_timestamp, Memory};
use reverie_decay::calculate_memory_saliency;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SaliencyCase {
    name: String,
    now: String,
    memory: Memory,
    expected_saliency: f64,
    #[serde(default = "default_tolerance")]
    tolerance: f64,
}

fn default_tolerance() -> f64 {
    1e-6
}

#[test]
fn golden_saliency_scenarios() {
    assert!(test_fixtures::fixture_exists("golden/saliency/scenarios.json"));
    let cases: Vec<SaliencyCase> = test_fixtures::load_fixture("golden/saliency/scenarios.json");
    assert!(!cases.is_empty());

    for case in cases {
        let now = parse_timestamp(&case.now)
            .unwrap_or_else(|| panic!("{}: bad reference time {}", case.name, case.now));
        let saliency = calculate_memory_saliency(&case.memory, now);
        assert!(
            (saliency - case.expected_saliency).abs() <= case.tolerance,
            "{}: expected {}, got {}",
            case.name,
            case.expected_saliency,
            saliency
        );
    }
}
