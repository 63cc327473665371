use super::{DatasetError, Result};
use crate::model::Party;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// On-disk layout of the seat file (NOS final-results export).
#[derive(Debug, Deserialize)]
struct SeatsFile {
    #[serde(default)]
    metadata: SeatsMetadata,
    parties: Vec<SeatRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatsMetadata {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub election: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub turnout_percentage: Option<f64>,
    #[serde(default)]
    pub total_seats: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SeatRecord {
    party: String,
    seats: u32,
    #[serde(default)]
    votes: Option<u64>,
}

/// The party roster: every party that won at least one seat, sorted by
/// seats descending, then votes descending.
#[derive(Debug)]
pub struct SeatDataset {
    pub metadata: SeatsMetadata,
    parties: Vec<Party>,
}

impl SeatDataset {
    pub fn load(path: &Path) -> Result<SeatDataset> {
        let raw = fs::read_to_string(path)?;
        SeatDataset::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<SeatDataset> {
        let file: SeatsFile = serde_json::from_str(raw)?;

        let mut records: Vec<SeatRecord> = file
            .parties
            .into_iter()
            .filter(|r| r.seats > 0)
            .collect();

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.party.clone()) {
                return Err(DatasetError::DuplicateParty(record.party.clone()));
            }
        }

        records.sort_by(|a, b| b.seats.cmp(&a.seats).then(b.votes.cmp(&a.votes)));

        let parties = records
            .into_iter()
            .map(|r| Party::new(r.party, r.seats))
            .collect();

        Ok(SeatDataset {
            metadata: file.metadata,
            parties,
        })
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn party(&self, name: &str) -> Option<&Party> {
        self.parties.iter().find(|p| p.name == name)
    }

    /// Seats summed over the whole roster. Should equal the chamber size
    /// once results are final.
    pub fn total_seats(&self) -> u32 {
        self.parties.iter().map(|p| p.seats).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_sorts_roster() {
        let dataset = SeatDataset::from_json(
            r#"{
                "metadata": {
                    "source": "NOS VoteFlow API",
                    "election": "Tweede Kamer 2025",
                    "date": "2025-10-30",
                    "status": "Eindstand",
                    "total_seats": 150
                },
                "parties": [
                    {"party": "VVD", "seats": 22, "votes": 1500000},
                    {"party": "PVV", "seats": 26, "votes": 2400000},
                    {"party": "D66", "seats": 26, "votes": 2450000}
                ]
            }"#,
        )
        .unwrap();

        // Seats descending, votes break the 26-seat tie.
        let names: Vec<&str> = dataset.parties().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["D66", "PVV", "VVD"]);
        assert_eq!(dataset.total_seats(), 74);
        assert_eq!(dataset.metadata.election.as_deref(), Some("Tweede Kamer 2025"));
        assert_eq!(
            dataset.metadata.date,
            NaiveDate::from_ymd_opt(2025, 10, 30)
        );
    }

    #[test]
    fn drops_zero_seat_parties() {
        let dataset = SeatDataset::from_json(
            r#"{"parties": [
                {"party": "A", "seats": 80},
                {"party": "Splinter", "seats": 0, "votes": 12000}
            ]}"#,
        )
        .unwrap();
        assert_eq!(dataset.parties().len(), 1);
        assert!(dataset.party("Splinter").is_none());
    }

    #[test]
    fn rejects_duplicate_party() {
        let err = SeatDataset::from_json(
            r#"{"parties": [
                {"party": "A", "seats": 80},
                {"party": "A", "seats": 3}
            ]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateParty(name) if name == "A"));
    }

    #[test]
    fn votes_are_optional() {
        let dataset = SeatDataset::from_json(
            r#"{"parties": [{"party": "A", "seats": 10}, {"party": "B", "seats": 10, "votes": 5}]}"#,
        )
        .unwrap();
        // A known vote count sorts ahead of an unknown one at equal seats.
        assert_eq!(dataset.parties()[0].name, "B");
    }
}
