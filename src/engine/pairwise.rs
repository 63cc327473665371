use crate::model::{Party, Stance, Statement};
use crate::util::round_dp;
use serde::Serialize;

/// Head-to-head agreement between two parties over the statement set.
///
/// A statement counts as an agreement only when both stances are recorded
/// and equal, and as a disagreement only when the stances are opposite
/// signs. Neutral-versus-signed pairs and statements with a missing stance
/// land in neither tally, but the rate always divides by the full
/// statement count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseAgreement {
    pub total_statements: usize,
    pub agreements: usize,
    pub disagreements: usize,
    /// Percentage of statements both parties answered identically, two
    /// decimals.
    pub agreement_rate: f64,
}

pub fn pairwise_agreement(
    party_a: &str,
    party_b: &str,
    statements: &[Statement],
) -> PairwiseAgreement {
    let mut agreements = 0;
    let mut disagreements = 0;

    for statement in statements {
        match (statement.stance_of(party_a), statement.stance_of(party_b)) {
            (Some(a), Some(b)) if a == b => agreements += 1,
            (Some(Stance::Agree), Some(Stance::Disagree))
            | (Some(Stance::Disagree), Some(Stance::Agree)) => disagreements += 1,
            _ => {}
        }
    }

    let total_statements = statements.len();
    let rate = if total_statements == 0 {
        0.0
    } else {
        agreements as f64 / total_statements as f64 * 100.0
    };

    PairwiseAgreement {
        total_statements,
        agreements,
        disagreements,
        agreement_rate: round_dp(rate, 2),
    }
}

/// Pairwise agreement rates between every roster party, 100.0 on the
/// diagonal. Row-major over roster order.
#[derive(Debug, Clone, Serialize)]
pub struct AgreementMatrix {
    parties: Vec<String>,
    rates: Vec<f64>,
}

impl AgreementMatrix {
    pub fn compute(roster: &[Party], statements: &[Statement]) -> AgreementMatrix {
        let parties: Vec<String> = roster.iter().map(|p| p.name.clone()).collect();
        let n = parties.len();
        let mut rates = vec![0.0; n * n];

        for i in 0..n {
            for j in 0..n {
                rates[i * n + j] = if i == j {
                    100.0
                } else {
                    pairwise_agreement(&parties[i], &parties[j], statements).agreement_rate
                };
            }
        }

        AgreementMatrix { parties, rates }
    }

    pub fn parties(&self) -> &[String] {
        &self.parties
    }

    pub fn rate(&self, row: usize, col: usize) -> f64 {
        self.rates[row * self.parties.len() + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn statement(id: &str, positions: &[(&str, i64)]) -> Statement {
        Statement {
            id: id.to_string(),
            text: format!("statement {}", id),
            positions: positions
                .iter()
                .filter_map(|(name, value)| {
                    Stance::from_value(*value).map(|s| (name.to_string(), s))
                })
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn counts_agreements_and_disagreements() {
        let statements = vec![
            statement("t01", &[("A", 1), ("B", 1)]),   // agreement
            statement("t02", &[("A", 1), ("B", -1)]),  // disagreement
            statement("t03", &[("A", 0), ("B", 1)]),   // neither
            statement("t04", &[("A", -1), ("B", -1)]), // agreement
        ];

        let result = pairwise_agreement("A", "B", &statements);
        assert_eq!(result.agreements, 2);
        assert_eq!(result.disagreements, 1);
        assert_eq!(result.total_statements, 4);
        assert_eq!(result.agreement_rate, 50.0);
    }

    #[test]
    fn missing_stances_count_toward_neither_tally() {
        let statements = vec![
            statement("t01", &[("A", 1)]),
            statement("t02", &[("B", -1)]),
            statement("t03", &[("A", 1), ("B", 1)]),
        ];

        let result = pairwise_agreement("A", "B", &statements);
        assert_eq!(result.agreements, 1);
        assert_eq!(result.disagreements, 0);
        // The denominator still spans all three statements.
        assert_eq!(result.agreement_rate, 33.33);
    }

    #[test]
    fn pairwise_is_symmetric() {
        let statements = vec![
            statement("t01", &[("A", 1), ("B", -1)]),
            statement("t02", &[("A", -1), ("B", -1)]),
        ];
        let ab = pairwise_agreement("A", "B", &statements);
        let ba = pairwise_agreement("B", "A", &statements);
        assert_eq!(ab, ba);
    }

    #[test]
    fn empty_statement_set_has_zero_rate() {
        let result = pairwise_agreement("A", "B", &[]);
        assert_eq!(result.agreement_rate, 0.0);
        assert_eq!(result.total_statements, 0);
    }

    #[test]
    fn matrix_diagonal_is_full_agreement() {
        let roster = vec![Party::new("A", 10), Party::new("B", 20)];
        let statements = vec![statement("t01", &[("A", 1), ("B", -1)])];
        let matrix = AgreementMatrix::compute(&roster, &statements);

        assert_eq!(matrix.parties(), &["A".to_string(), "B".to_string()]);
        assert_eq!(matrix.rate(0, 0), 100.0);
        assert_eq!(matrix.rate(1, 1), 100.0);
        assert_eq!(matrix.rate(0, 1), 0.0);
        assert_eq!(matrix.rate(0, 1), matrix.rate(1, 0));
    }
}
