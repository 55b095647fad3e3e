use std::collections::HashMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use reverie_core::config::DecayConfig;
use reverie_core::memory::{Memory, MemoryType};
use reverie_core::traits::ISaliencyScorer;
use reverie_decay::formula::compute_breakdown;
use reverie_decay::{
    calculate_memory_saliency, calculate_memory_saliency_now, saliency_breakdown, SaliencyEngine,
};

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn make_memory(memory_type: MemoryType, importance: f64, age_days: i64, access_count: u64) -> Memory {
    Memory::new("The caravan arrived late", memory_type)
        .with_importance(importance)
        .with_created_at(reference_now() - Duration::days(age_days))
        .with_access_count(access_count)
}

// ── Monotonic decay ──────────────────────────────────────────────────────

#[test]
fn saliency_never_increases_with_age() {
    let now = reference_now();
    let mut prev = f64::INFINITY;
    for days in [0, 1, 10, 30, 90, 365, 1000] {
        let s = calculate_memory_saliency(&make_memory(MemoryType::Regular, 0.9, days, 0), now);
        assert!(s <= prev + f64::EPSILON, "not monotonic at day {days}: {s} > {prev}");
        prev = s;
    }
}

#[test]
fn saliency_at_zero_ten_and_thousand_days() {
    let now = reference_now();
    let s0 = calculate_memory_saliency(&make_memory(MemoryType::Regular, 0.9, 0, 0), now);
    let s10 = calculate_memory_saliency(&make_memory(MemoryType::Regular, 0.9, 10, 0), now);
    let s1000 = calculate_memory_saliency(&make_memory(MemoryType::Regular, 0.9, 1000, 0), now);
    assert!(s0 >= s10);
    assert!(s10 >= s1000);
    assert!((s0 - 0.9).abs() < 1e-9);
}

// ── Half-life ordering ───────────────────────────────────────────────────

#[test]
fn slower_types_stay_more_salient_at_100_days() {
    let now = reference_now();
    let scores: Vec<f64> = MemoryType::ALL
        .iter()
        .map(|&mt| calculate_memory_saliency(&make_memory(mt, 0.8, 100, 0), now))
        .collect();
    for (pair, types) in scores.windows(2).zip(MemoryType::ALL.windows(2)) {
        assert!(
            pair[0] > pair[1],
            "{} ({}) should exceed {} ({})",
            types[0],
            pair[0],
            types[1],
            pair[1]
        );
    }
}

#[test]
fn categories_override_declared_type() {
    let now = reference_now();
    let plain = make_memory(MemoryType::Regular, 0.8, 100, 0);
    let core_tagged = plain.clone().with_categories(["Core"]);
    let mundane_tagged = plain.clone().with_categories(["mundane"]);

    let s_plain = calculate_memory_saliency(&plain, now);
    let s_core = calculate_memory_saliency(&core_tagged, now);
    let s_mundane = calculate_memory_saliency(&mundane_tagged, now);

    let core_expected =
        calculate_memory_saliency(&make_memory(MemoryType::Core, 0.8, 100, 0), now);
    assert!((s_core - core_expected).abs() < 1e-12);
    assert!(s_core > s_plain);
    assert!(s_mundane < s_plain);
}

// ── Concrete values ──────────────────────────────────────────────────────

#[test]
fn core_memory_after_one_half_life() {
    let memory = make_memory(MemoryType::Core, 0.9, 3650, 0);
    let s = calculate_memory_saliency(&memory, reference_now());
    let expected = 0.9 * (-0.05f64).exp();
    assert!((s - expected).abs() < 1e-9, "got {s}");
    assert!((s - 0.856).abs() < 1e-3);
}

#[test]
fn decayed_below_floor_is_clamped_to_floor() {
    let memory = make_memory(MemoryType::Mundane, 0.3, 365, 0);
    assert_eq!(calculate_memory_saliency(&memory, reference_now()), 0.2);
}

// ── Access boost ─────────────────────────────────────────────────────────

#[test]
fn access_boost_adds_two_hundredths_per_access() {
    let now = reference_now();
    let base = calculate_memory_saliency(&make_memory(MemoryType::Regular, 0.5, 0, 0), now);
    let boosted = calculate_memory_saliency(&make_memory(MemoryType::Regular, 0.5, 0, 5), now);
    assert!((boosted - base - 0.1).abs() < 1e-9);
}

#[test]
fn access_boost_capped_at_point_two() {
    let now = reference_now();
    let none = compute_breakdown(&make_memory(MemoryType::Regular, 0.5, 0, 0), now, &DecayConfig::default());
    let many = compute_breakdown(&make_memory(MemoryType::Regular, 0.5, 0, 50), now, &DecayConfig::default());
    assert_eq!(many.access_boost, 0.2);
    assert!(many.raw_saliency - none.raw_saliency <= 0.2 + 1e-12);
}

// ── Fail-soft inputs ─────────────────────────────────────────────────────

#[test]
fn unknown_creation_time_means_no_decay() {
    let memory = Memory::new("Heard a rumor", MemoryType::Mundane).with_importance(0.7);
    assert!((calculate_memory_saliency(&memory, reference_now()) - 0.7).abs() < 1e-12);
}

#[test]
fn unparseable_timestamp_from_json_means_no_decay() {
    let memory: Memory = serde_json::from_str(r#"{"importance": 0.7, "created_at": "not-a-date"}"#).unwrap();
    assert!((calculate_memory_saliency(&memory, reference_now()) - 0.7).abs() < 1e-12);
}

#[test]
fn missing_importance_decays_from_one_half() {
    let memory: Memory = serde_json::from_str(r#"{"memory_type": "core"}"#).unwrap();
    assert!((calculate_memory_saliency(&memory, reference_now()) - 0.5).abs() < 1e-12);
}

#[test]
fn future_creation_time_does_not_inflate_saliency() {
    let memory = make_memory(MemoryType::Regular, 0.6, -30, 0);
    assert!((calculate_memory_saliency(&memory, reference_now()) - 0.6).abs() < 1e-12);
}

#[test]
fn wall_clock_variant_scores_fresh_memory_at_its_importance() {
    let memory = Memory::new("Just now", MemoryType::Regular)
        .with_importance(0.6)
        .with_created_at(Utc::now());
    let s = calculate_memory_saliency_now(&memory);
    assert!((s - 0.6).abs() < 1e-3);
}

// ── Engine ───────────────────────────────────────────────────────────────

#[test]
fn engine_matches_free_function_with_default_config() {
    let engine = SaliencyEngine::new();
    let now = reference_now();
    for mt in MemoryType::ALL {
        let memory = make_memory(mt, 0.7, 45, 2);
        assert_eq!(engine.saliency_at(&memory, now), calculate_memory_saliency(&memory, now));
    }
}

#[test]
fn engine_honors_half_life_overrides() {
    let config = DecayConfig {
        half_life_overrides: HashMap::from([("regular".to_string(), 1)]),
        ..Default::default()
    };
    let engine = SaliencyEngine::with_config(config);
    let now = reference_now();
    let memory = make_memory(MemoryType::Regular, 0.9, 10, 0);

    let default_score = calculate_memory_saliency(&memory, now);
    let fast_score = engine.saliency_at(&memory, now);
    assert!(fast_score < default_score);
    assert!((fast_score - 0.9 * (-0.5f64).exp()).abs() < 1e-9);
}

#[test]
fn breakdown_factors_compose_to_result() {
    let engine = SaliencyEngine::new();
    let memory = make_memory(MemoryType::Accomplishment, 0.8, 73, 3)
        .with_categories(["relationship"]);
    let b = engine.calculate_breakdown(&memory, reference_now());

    assert_eq!(b.effective_type, MemoryType::Relationship);
    assert_eq!(b.half_life_days, 180.0);
    assert!((b.age_days - 73.0).abs() < 1e-9);
    assert!((b.access_boost - 0.06).abs() < 1e-12);
    assert!((b.raw_saliency - (b.importance * b.decay_factor + b.access_boost)).abs() < 1e-12);
    assert_eq!(b.saliency, b.raw_saliency.clamp(0.2, 0.95));
}

#[test]
fn free_breakdown_matches_default_saliency() {
    let now = reference_now();
    let memory = make_memory(MemoryType::Core, 0.9, 3650, 0);
    let b = saliency_breakdown(&memory, now);
    assert_eq!(b.effective_type, MemoryType::Core);
    assert_eq!(b.half_life_days, 3650.0);
    assert_eq!(b.saliency, calculate_memory_saliency(&memory, now));
    assert!((b.saliency - 0.856).abs() < 1e-3);
}

#[test]
fn batch_preserves_input_order() {
    let engine = SaliencyEngine::new();
    let now = reference_now();
    let memories = vec![
        make_memory(MemoryType::Mundane, 0.9, 30, 0),
        make_memory(MemoryType::Core, 0.9, 30, 0),
    ];
    let scores = engine.process_batch(&memories, now);
    assert_eq!(scores.len(), 2);
    assert!(scores[0] < scores[1]);
    assert_eq!(scores[1], engine.saliency_at(&memories[1], now));
}
