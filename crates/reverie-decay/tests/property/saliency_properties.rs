use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use reverie_core::constants::{MAX_IMPORTANCE, MIN_IMPORTANCE};
use reverie_core::memory::{Memory, MemoryType};
use reverie_decay::formula::compute_breakdown;
use reverie_decay::{calculate_initial_importance, calculate_memory_saliency};

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn arb_memory_type() -> impl Strategy<Value = MemoryType> {
    prop::sample::select(MemoryType::ALL.to_vec())
}

fn arb_categories() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec![
            "core", "trauma", "accomplishment", "relationship", "identity", "mundane", "quest",
            "tavern",
        ])
        .prop_map(String::from),
        0..5,
    )
}

// ── Bounded saliency ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn saliency_bounded(
        memory_type in arb_memory_type(),
        categories in arb_categories(),
        importance in -1.0f64..2.0,
        age_days in 0i64..100_000,
        access_count in 0u64..10_000,
    ) {
        let memory = Memory::new("x", memory_type)
            .with_categories(categories)
            .with_importance(importance)
            .with_created_at(reference_now() - Duration::days(age_days))
            .with_access_count(access_count);
        let s = calculate_memory_saliency(&memory, reference_now());
        prop_assert!((MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&s), "out of bounds: {}", s);
    }
}

// ── Monotonic decay ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn saliency_monotonic_in_age(
        memory_type in arb_memory_type(),
        importance in 0.0f64..1.0,
        younger in 0i64..5_000,
        extra in 0i64..5_000,
    ) {
        let now = reference_now();
        let young = Memory::new("x", memory_type)
            .with_importance(importance)
            .with_created_at(now - Duration::days(younger));
        let old = young.clone().with_created_at(now - Duration::days(younger + extra));
        let s_young = calculate_memory_saliency(&young, now);
        let s_old = calculate_memory_saliency(&old, now);
        prop_assert!(s_old <= s_young + f64::EPSILON, "{} > {}", s_old, s_young);
    }
}

// ── Access boost cap ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn access_boost_never_exceeds_cap(
        importance in 0.0f64..1.0,
        age_days in 0i64..1_000,
        access_count in 0u64..1_000_000,
    ) {
        let now = reference_now();
        let memory = Memory::new("x", MemoryType::Regular)
            .with_importance(importance)
            .with_created_at(now - Duration::days(age_days));
        let config = Default::default();
        let base = compute_breakdown(&memory, now, &config);
        let boosted = compute_breakdown(&memory.with_access_count(access_count), now, &config);
        prop_assert!(boosted.raw_saliency - base.raw_saliency <= 0.2 + 1e-12);
        prop_assert!(boosted.raw_saliency >= base.raw_saliency);
    }
}

// ── Bounded importance ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn initial_importance_bounded(
        content in "\\PC{0,80}",
        memory_type in arb_memory_type(),
        categories in arb_categories(),
    ) {
        let importance = calculate_initial_importance(&content, memory_type, categories.as_slice());
        prop_assert!((MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&importance));
    }
}
