pub mod generator;
pub mod pairwise;
pub mod scorer;

use crate::model::{Coalition, Party, Statement};
use crate::util::round_dp;
use serde::Serialize;

/// Seats in the Tweede Kamer.
pub const CHAMBER_SEATS: u32 = 150;

/// Minimum seat total for a viable coalition: floor(150 / 2) + 1.
pub const MAJORITY_THRESHOLD: u32 = 76;

/// Knobs for the majority search.
///
/// Subset enumeration is combinatorial, so `max_coalition_size` is a hard
/// cap that keeps the candidate space tractable for interactive use.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub majority_threshold: u32,
    pub max_coalition_size: usize,
    /// Minimum number of parties drawn from outside the required party.
    /// At 0, a required party that clears the threshold on its own stands
    /// as a one-party coalition.
    pub min_additional_parties: usize,
    pub top_n: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            majority_threshold: MAJORITY_THRESHOLD,
            max_coalition_size: 5,
            min_additional_parties: 0,
            top_n: 5,
        }
    }
}

/// Knobs for the agreement scorer.
#[derive(Debug, Clone)]
pub struct ScoringOptions {
    /// Deduction from the average agreement per coalition party beyond two.
    pub size_penalty_per_party: f64,
    /// Majority fraction at or above which a statement counts as unified.
    pub unified_threshold: f64,
    /// Majority fraction at or above which a statement counts as moderate.
    pub moderate_threshold: f64,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            size_penalty_per_party: 0.05,
            unified_threshold: 0.80,
            moderate_threshold: 0.60,
        }
    }
}

impl ScoringOptions {
    pub fn size_penalty(&self, coalition_size: usize) -> f64 {
        (coalition_size.saturating_sub(2)) as f64 * self.size_penalty_per_party
    }
}

/// Harmony score for one coalition. A pure projection of the coalition and
/// the statement set; recomputed on demand, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoalitionScore {
    /// Penalty-adjusted agreement as a percentage, one decimal.
    pub agreement_rate: f64,
    /// Mean per-statement agreement before the size penalty, three decimals.
    pub average_agreement: f64,
    /// Mean per-statement agreement after the size penalty, three decimals.
    pub adjusted_agreement: f64,
    pub coalition_size: usize,
    pub total_statements: usize,
    pub seats: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedCoalition {
    pub coalition: Coalition,
    pub score: CoalitionScore,
}

/// Full search: enumerate majority coalitions, score each, rank by
/// agreement rate descending, return the top N.
///
/// Ties keep enumeration order (stable sort), so at equal scores smaller
/// coalitions come first.
pub fn find_best_coalitions(
    roster: &[Party],
    statements: &[Statement],
    required_party: Option<&str>,
    search: &SearchOptions,
    scoring: &ScoringOptions,
) -> Vec<RankedCoalition> {
    let candidates = generator::generate_majority_coalitions(roster, required_party, search);

    let mut ranked: Vec<RankedCoalition> = candidates
        .into_iter()
        .map(|coalition| {
            let score = scorer::score_coalition(&coalition, statements, scoring);
            RankedCoalition { coalition, score }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.agreement_rate.total_cmp(&a.score.agreement_rate));
    ranked.truncate(search.top_n);
    ranked
}

pub(crate) fn round1(value: f64) -> f64 {
    round_dp(value, 1)
}

pub(crate) fn round3(value: f64) -> f64 {
    round_dp(value, 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Party, Stance, Statement};
    use std::collections::HashMap;

    fn statement(id: &str, positions: &[(&str, Stance)]) -> Statement {
        Statement {
            id: id.to_string(),
            text: format!("statement {}", id),
            positions: positions
                .iter()
                .map(|(name, stance)| (name.to_string(), *stance))
                .collect::<HashMap<_, _>>(),
        }
    }

    fn roster() -> Vec<Party> {
        vec![
            Party::new("A", 76),
            Party::new("B", 40),
            Party::new("C", 34),
        ]
    }

    #[test]
    fn ranks_by_agreement_rate_descending() {
        // No single party reaches majority. A and B agree throughout while
        // C opposes both, so {A, B} outranks every mix that includes C.
        let roster = vec![
            Party::new("A", 50),
            Party::new("B", 40),
            Party::new("C", 34),
        ];
        let statements = vec![
            statement("t01", &[("A", Stance::Agree), ("B", Stance::Agree), ("C", Stance::Disagree)]),
            statement("t02", &[("A", Stance::Disagree), ("B", Stance::Disagree), ("C", Stance::Agree)]),
        ];

        let ranked = find_best_coalitions(
            &roster,
            &statements,
            None,
            &SearchOptions::default(),
            &ScoringOptions::default(),
        );

        assert!(!ranked.is_empty());
        assert_eq!(ranked[0].coalition.to_string(), "A + B");
        assert_eq!(ranked[0].score.agreement_rate, 100.0);
        for window in ranked.windows(2) {
            assert!(window[0].score.agreement_rate >= window[1].score.agreement_rate);
        }
    }

    #[test]
    fn truncates_to_top_n() {
        let statements = vec![statement("t01", &[("A", Stance::Agree)])];
        let search = SearchOptions {
            top_n: 2,
            ..SearchOptions::default()
        };
        let ranked = find_best_coalitions(
            &roster(),
            &statements,
            None,
            &search,
            &ScoringOptions::default(),
        );
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn ties_keep_enumeration_order() {
        // No statements: every coalition scores 0 after the guard, except
        // that the size penalty only bites below zero and is clamped, so
        // all candidates tie at 0.0 and smaller coalitions stay first.
        let ranked = find_best_coalitions(
            &roster(),
            &[],
            None,
            &SearchOptions::default(),
            &ScoringOptions::default(),
        );
        assert!(!ranked.is_empty());
        assert_eq!(ranked[0].coalition.to_string(), "A");
        for entry in &ranked {
            assert_eq!(entry.score.agreement_rate, 0.0);
        }
    }

    #[test]
    fn scores_are_idempotent() {
        let statements = vec![statement(
            "t01",
            &[("A", Stance::Agree), ("B", Stance::Disagree)],
        )];
        let coalition = crate::model::Coalition::new(roster());
        let first = scorer::score_coalition(&coalition, &statements, &ScoringOptions::default());
        let second = scorer::score_coalition(&coalition, &statements, &ScoringOptions::default());
        assert_eq!(first, second);
    }
}
