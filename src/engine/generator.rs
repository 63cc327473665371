use super::SearchOptions;
use crate::model::{Coalition, Party};
use itertools::Itertools;

/// Enumerate every coalition that reaches the majority threshold.
///
/// Candidates are k-element combinations of the roster (no repetition,
/// order-independent), optionally forced to include one required party.
/// An unknown required-party name yields an empty result: no coalition can
/// satisfy the constraint.
///
/// Output order follows enumeration (small coalitions first); it carries no
/// meaning and callers re-sort by score.
pub fn generate_majority_coalitions(
    roster: &[Party],
    required_party: Option<&str>,
    options: &SearchOptions,
) -> Vec<Coalition> {
    let required: Option<&Party> = match required_party {
        Some(name) => match roster.iter().find(|p| p.name == name) {
            Some(party) => Some(party),
            None => return Vec::new(),
        },
        None => None,
    };

    let available: Vec<&Party> = roster
        .iter()
        .filter(|p| required.map_or(true, |r| r.name != p.name))
        .collect();

    let reserved = if required.is_some() { 1 } else { 0 };
    // Without a required party the smallest coalition is a single party;
    // with one, `min_additional_parties` decides whether it may stand alone.
    let min_k = if required.is_some() {
        options.min_additional_parties
    } else {
        1
    };
    let max_k = options
        .max_coalition_size
        .saturating_sub(reserved)
        .min(available.len());

    let mut coalitions = Vec::new();
    for k in min_k..=max_k {
        for subset in available.iter().copied().combinations(k) {
            let mut parties = Vec::with_capacity(reserved + k);
            if let Some(party) = required {
                parties.push(party.clone());
            }
            parties.extend(subset.into_iter().cloned());

            let coalition = Coalition::new(parties);
            if coalition.seats() >= options.majority_threshold {
                coalitions.push(coalition);
            }
        }
    }

    coalitions
}
