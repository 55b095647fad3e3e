use super::types::MemoryType;

/// Half-life in days for each memory type.
///
/// Core memories last a decade; mundane ones fade within a week.
pub fn half_life_days(memory_type: MemoryType) -> u32 {
    match memory_type {
        MemoryType::Core => 3650,
        MemoryType::Trauma => 1825,
        MemoryType::Accomplishment => 365,
        MemoryType::Relationship => 180,
        MemoryType::Regular => 30,
        MemoryType::Mundane => 7,
    }
}

/// Resolve the type whose half-life governs a memory.
///
/// Categories win over the declared type in the order
/// core > trauma > accomplishment > relationship, so a category can also
/// demote a declared type (a `core` memory tagged `relationship` decays as a
/// relationship). A `mundane` category only demotes memories declared
/// `regular`.
pub fn effective_type<S: AsRef<str>>(memory_type: MemoryType, categories: &[S]) -> MemoryType {
    let has = |tag: MemoryType| {
        categories
            .iter()
            .any(|c| c.as_ref().trim().eq_ignore_ascii_case(tag.as_str()))
    };

    for tag in [
        MemoryType::Core,
        MemoryType::Trauma,
        MemoryType::Accomplishment,
        MemoryType::Relationship,
    ] {
        if has(tag) {
            return tag;
        }
    }

    if memory_type == MemoryType::Regular && has(MemoryType::Mundane) {
        return MemoryType::Mundane;
    }

    memory_type
}
