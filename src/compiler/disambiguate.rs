//! Disambiguation of repeated exercise instances.

use crate::config::Config;
use crate::fragment::{Exercise, Resolvable};
use std::collections::BTreeMap;

/// Assign disambiguation suffixes in a single pass over the expanded list.
///
/// Instances of a name configured with count 1 stay unsuffixed. For a name
/// with a count above 1, a per-name running counter starting at 1 suffixes
/// every instance, the first one included, so the suffixes of one name form
/// the contiguous sequence `1..count` in traversal order.
pub(super) fn assign_suffixes(exercises: &mut [Exercise], config: &Config) {
    let mut counters: BTreeMap<String, u32> = BTreeMap::new();

    for exercise in exercises.iter_mut() {
        if config.exercise_count(exercise.name()) > 1 {
            let counter = counters.entry(exercise.name().to_string()).or_insert(1);
            exercise.set_disambiguation_suffix(*counter);
            *counter += 1;
        }
    }
}
