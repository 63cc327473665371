use super::{round1, round3, CoalitionScore, ScoringOptions};
use crate::model::{Coalition, Party, Stance, Statement};
use serde::Serialize;

/// Seat-weighted stance tally for one statement over a set of parties.
///
/// Parties without a recorded stance contribute to no bucket, so the three
/// fields may sum to less than the set's seat total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StanceTally {
    pub agree_seats: u32,
    pub neutral_seats: u32,
    pub disagree_seats: u32,
}

impl StanceTally {
    pub fn count(statement: &Statement, parties: &[Party]) -> StanceTally {
        let mut tally = StanceTally::default();
        for party in parties {
            match statement.stance_of(&party.name) {
                Some(Stance::Agree) => tally.agree_seats += party.seats,
                Some(Stance::Neutral) => tally.neutral_seats += party.seats,
                Some(Stance::Disagree) => tally.disagree_seats += party.seats,
                None => {}
            }
        }
        tally
    }

    pub fn total_seats(&self) -> u32 {
        self.agree_seats + self.neutral_seats + self.disagree_seats
    }

    pub fn majority_seats(&self) -> u32 {
        self.agree_seats
            .max(self.neutral_seats)
            .max(self.disagree_seats)
    }

    /// Largest same-stance bucket over all tallied seats. `None` when no
    /// party in the set has a recorded stance.
    pub fn majority_fraction(&self) -> Option<f64> {
        let total = self.total_seats();
        if total == 0 {
            None
        } else {
            Some(self.majority_seats() as f64 / total as f64)
        }
    }
}

/// Rescaled per-statement agreement: 0 at an even 50/50 split, 1 at
/// unanimity. The clamp guards degenerate fractions below one half.
/// A statement nobody in the set has a stance on contributes 0.
fn statement_agreement(tally: &StanceTally) -> f64 {
    match tally.majority_fraction() {
        Some(fraction) => ((fraction - 0.5) / 0.5).max(0.0),
        None => 0.0,
    }
}

/// Score a coalition against the statement set (continuous-weighted
/// variant, used for ranking).
///
/// The average divides by the full statement count, including statements
/// with no tallied seats. Larger coalitions pay a flat per-party penalty
/// beyond two; the result is clamped at zero so rates stay in [0, 100].
pub fn score_coalition(
    coalition: &Coalition,
    statements: &[Statement],
    options: &ScoringOptions,
) -> CoalitionScore {
    let total_statements = statements.len();

    let agreement_sum: f64 = statements
        .iter()
        .map(|statement| statement_agreement(&StanceTally::count(statement, coalition.parties())))
        .sum();

    let average_agreement = if total_statements == 0 {
        0.0
    } else {
        agreement_sum / total_statements as f64
    };

    let penalty = options.size_penalty(coalition.len());
    let adjusted_agreement = (average_agreement - penalty).max(0.0);

    CoalitionScore {
        agreement_rate: round1(adjusted_agreement * 100.0),
        average_agreement: round3(average_agreement),
        adjusted_agreement: round3(adjusted_agreement),
        coalition_size: coalition.len(),
        total_statements,
        seats: coalition.seats(),
    }
}

/// Discrete cohesion bucket (binary variant). Used for per-statement
/// badges and summary counts, never for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cohesion {
    Unified,
    Moderate,
    Divided,
}

impl Cohesion {
    pub fn label(self) -> &'static str {
        match self {
            Cohesion::Unified => "unified",
            Cohesion::Moderate => "moderate",
            Cohesion::Divided => "divided",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Cohesion::Unified => "🟢",
            Cohesion::Moderate => "🟡",
            Cohesion::Divided => "🔴",
        }
    }
}

/// Classify one statement tally by its majority fraction. A tally with no
/// recorded stances counts as divided.
pub fn classify(tally: &StanceTally, options: &ScoringOptions) -> Cohesion {
    match tally.majority_fraction() {
        Some(fraction) if fraction >= options.unified_threshold => Cohesion::Unified,
        Some(fraction) if fraction >= options.moderate_threshold => Cohesion::Moderate,
        _ => Cohesion::Divided,
    }
}

/// Per-statement view for a set of parties: the coalition under
/// construction, or the full roster for the chamber baseline.
#[derive(Debug, Clone, Serialize)]
pub struct StatementBreakdown {
    pub statement_id: String,
    pub tally: StanceTally,
    pub cohesion: Cohesion,
}

pub fn statement_breakdowns(
    parties: &[Party],
    statements: &[Statement],
    options: &ScoringOptions,
) -> Vec<StatementBreakdown> {
    statements
        .iter()
        .map(|statement| {
            let tally = StanceTally::count(statement, parties);
            StatementBreakdown {
                statement_id: statement.id.clone(),
                cohesion: classify(&tally, options),
                tally,
            }
        })
        .collect()
}

/// Statement counts per cohesion bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CohesionSummary {
    pub unified: usize,
    pub moderate: usize,
    pub divided: usize,
}

impl CohesionSummary {
    pub fn from_breakdowns(breakdowns: &[StatementBreakdown]) -> CohesionSummary {
        let mut summary = CohesionSummary::default();
        for breakdown in breakdowns {
            match breakdown.cohesion {
                Cohesion::Unified => summary.unified += 1,
                Cohesion::Moderate => summary.moderate += 1,
                Cohesion::Divided => summary.divided += 1,
            }
        }
        summary
    }
}
