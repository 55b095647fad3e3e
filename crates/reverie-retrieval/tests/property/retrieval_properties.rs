use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use reverie_core::memory::{Memory, MemoryType};
use reverie_retrieval::{calculate_memory_relevance, rank_memories_at};

const VOCAB: [&str; 10] = [
    "dragon", "sword", "cave", "mayor", "bread", "the", "attack", "river", "king", "ale",
];

fn arb_sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB.to_vec()), 0..8).prop_map(|w| w.join(" "))
}

fn arb_categories() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(VOCAB.to_vec()), 1..3).prop_map(|w| w.join("_")),
        0..3,
    )
}

fn arb_memory() -> impl Strategy<Value = Memory> {
    (
        arb_sentence(),
        arb_categories(),
        prop::sample::select(MemoryType::ALL.to_vec()),
        0.0f64..1.0,
        0i64..2_000,
        0u64..20,
    )
        .prop_map(|(content, categories, mt, importance, age, access)| {
            let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
            Memory::new(content, mt)
                .with_categories(categories)
                .with_importance(importance)
                .with_created_at(now - Duration::days(age))
                .with_access_count(access)
        })
}

proptest! {
    #[test]
    fn relevance_bounded(
        query in "\\PC{0,60}",
        content in "\\PC{0,60}",
        categories in arb_categories(),
    ) {
        let r = calculate_memory_relevance(&query, &content, categories.as_slice());
        prop_assert!((0.0..=1.0).contains(&r), "out of bounds: {}", r);
    }

    #[test]
    fn ranking_sorted_descending_and_complete(
        query in arb_sentence(),
        memories in prop::collection::vec(arb_memory(), 0..12),
        consider_saliency in any::<bool>(),
    ) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let ranked = rank_memories_at(&query, &memories, consider_saliency, now);
        prop_assert_eq!(ranked.len(), memories.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn ranking_stable_for_equal_scores(
        query in arb_sentence(),
        memory in arb_memory(),
        copies in 2usize..6,
    ) {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let memories: Vec<Memory> = (0..copies)
            .map(|i| memory.clone().with_id(format!("copy-{i}")))
            .collect();
        let ranked = rank_memories_at(&query, &memories, true, now);
        let order: Vec<String> = ranked.iter().map(|(m, _)| m.id.clone()).collect();
        let expected: Vec<String> = (0..copies).map(|i| format!("copy-{i}")).collect();
        prop_assert_eq!(order, expected);
    }
}
