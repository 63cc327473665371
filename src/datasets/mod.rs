pub mod seats;
pub mod statements;

use crate::model::{Coalition, Party, Statement};
use std::path::Path;

pub use seats::SeatDataset;
pub use statements::StatementDataset;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate party in seat data: {0}")]
    DuplicateParty(String),
    #[error("duplicate statement id: {0}")]
    DuplicateStatement(String),
    #[error("unknown party: {0}")]
    UnknownParty(String),
}

pub type Result<T> = std::result::Result<T, DatasetError>;

/// The two datasets the engine runs against: the seat roster and the
/// statement set. Loaded once at startup; read-only afterwards.
pub struct DatasetBundle {
    pub seats: SeatDataset,
    pub statements: StatementDataset,
}

impl DatasetBundle {
    pub fn load(seats_path: &Path, statements_path: &Path) -> Result<DatasetBundle> {
        let seats = SeatDataset::load(seats_path)?;
        let statements = StatementDataset::load(statements_path)?;
        Ok(DatasetBundle { seats, statements })
    }

    pub fn roster(&self) -> &[Party] {
        self.seats.parties()
    }

    pub fn statements(&self) -> &[Statement] {
        self.statements.statements()
    }

    pub fn party(&self, name: &str) -> Option<&Party> {
        self.seats.party(name)
    }

    /// Resolve a list of party names against the roster, preserving order.
    pub fn resolve(&self, names: &[String]) -> Result<Coalition> {
        let mut parties = Vec::with_capacity(names.len());
        for name in names {
            match self.party(name) {
                Some(party) => parties.push(party.clone()),
                None => return Err(DatasetError::UnknownParty(name.clone())),
            }
        }
        Ok(Coalition::new(parties))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle() -> DatasetBundle {
        let seats = SeatDataset::from_json(
            r#"{"parties": [{"party": "A", "seats": 76}, {"party": "B", "seats": 40}]}"#,
        )
        .unwrap();
        let statements = StatementDataset::from_json(r#"{"statements": []}"#).unwrap();
        DatasetBundle { seats, statements }
    }

    #[test]
    fn resolve_known_parties() {
        let coalition = bundle().resolve(&["B".to_string(), "A".to_string()]).unwrap();
        assert_eq!(coalition.seats(), 116);
        // Caller order is preserved, not roster order.
        assert_eq!(coalition.parties()[0].name, "B");
    }

    #[test]
    fn resolve_unknown_party() {
        let err = bundle().resolve(&["Nope".to_string()]).unwrap_err();
        assert!(matches!(err, DatasetError::UnknownParty(name) if name == "Nope"));
    }
}
