use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A party's recorded position on a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stance {
    Agree,
    Neutral,
    Disagree,
}

impl Stance {
    /// Decode a raw stance value from the statement dataset.
    ///
    /// Anything outside {-1, 0, 1} is unusable and must be dropped by the
    /// caller, never folded into one of the three buckets.
    pub fn from_value(value: i64) -> Option<Stance> {
        match value {
            1 => Some(Stance::Agree),
            0 => Some(Stance::Neutral),
            -1 => Some(Stance::Disagree),
            _ => None,
        }
    }

    pub fn value(self) -> i64 {
        match self {
            Stance::Agree => 1,
            Stance::Neutral => 0,
            Stance::Disagree => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stance::Agree => "Agree",
            Stance::Neutral => "Neutral",
            Stance::Disagree => "Disagree",
        }
    }
}

/// A party holding seats in the chamber. The name is the stable identifier
/// every stance lookup keys on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    pub seats: u32,
}

impl Party {
    pub fn new(name: impl Into<String>, seats: u32) -> Party {
        Party {
            name: name.into(),
            seats,
        }
    }
}

/// A policy statement with per-party stances.
///
/// A party absent from `positions` has no recorded stance on this statement
/// and contributes no seats to its tally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub id: String,
    pub text: String,
    pub positions: HashMap<String, Stance>,
}

impl Statement {
    pub fn stance_of(&self, party: &str) -> Option<Stance> {
        self.positions.get(party).copied()
    }
}

/// A set of distinct parties, kept in the order they were assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coalition {
    parties: Vec<Party>,
}

impl Coalition {
    pub fn new(parties: Vec<Party>) -> Coalition {
        Coalition { parties }
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn seats(&self) -> u32 {
        self.parties.iter().map(|p| p.seats).sum()
    }

    pub fn len(&self) -> usize {
        self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parties.iter().any(|p| p.name == name)
    }
}

impl fmt::Display for Coalition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, party) in self.parties.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", party.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stance_decoding() {
        assert_eq!(Stance::from_value(1), Some(Stance::Agree));
        assert_eq!(Stance::from_value(0), Some(Stance::Neutral));
        assert_eq!(Stance::from_value(-1), Some(Stance::Disagree));
        assert_eq!(Stance::from_value(2), None);
        assert_eq!(Stance::from_value(-7), None);
    }

    #[test]
    fn stance_round_trip_and_labels() {
        for stance in [Stance::Agree, Stance::Neutral, Stance::Disagree] {
            assert_eq!(Stance::from_value(stance.value()), Some(stance));
        }
        assert_eq!(Stance::Neutral.label(), "Neutral");
    }

    #[test]
    fn coalition_seats_and_display() {
        let coalition = Coalition::new(vec![Party::new("PVV", 26), Party::new("VVD", 22)]);
        assert_eq!(coalition.seats(), 48);
        assert_eq!(coalition.len(), 2);
        assert!(coalition.contains("VVD"));
        assert!(!coalition.contains("CDA"));
        assert_eq!(coalition.to_string(), "PVV + VVD");
    }
}
