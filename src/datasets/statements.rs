use super::{DatasetError, Result};
use crate::model::{Stance, Statement};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

/// On-disk layout of the statement file (structured StemWijzer export).
#[derive(Debug, Deserialize)]
struct StatementsFile {
    #[serde(default)]
    metadata: StatementsMetadata,
    #[serde(default)]
    parties: Vec<String>,
    statements: Vec<StatementRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatementsMetadata {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub total_statements: Option<usize>,
    #[serde(default)]
    pub total_parties: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct StatementRecord {
    id: String,
    text: String,
    /// Raw stance values as exported; validated into `Stance` on load.
    #[serde(default)]
    positions: BTreeMap<String, i64>,
}

#[derive(Debug)]
pub struct StatementDataset {
    pub metadata: StatementsMetadata,
    /// Party names as listed by the source, in source order.
    pub parties: Vec<String>,
    statements: Vec<Statement>,
}

impl StatementDataset {
    pub fn load(path: &Path) -> Result<StatementDataset> {
        let raw = fs::read_to_string(path)?;
        StatementDataset::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<StatementDataset> {
        let file: StatementsFile = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        let mut statements = Vec::with_capacity(file.statements.len());

        for record in file.statements {
            if !seen.insert(record.id.clone()) {
                return Err(DatasetError::DuplicateStatement(record.id));
            }

            let mut positions = HashMap::new();
            for (party, value) in record.positions {
                match Stance::from_value(value) {
                    Some(stance) => {
                        positions.insert(party, stance);
                    }
                    // An out-of-range stance excludes the party from this
                    // statement's tally. It is never coerced to a bucket.
                    None => {
                        eprintln!(
                            "Skipping unusable stance {} for {} on statement {}",
                            value, party, record.id
                        );
                    }
                }
            }

            statements.push(Statement {
                id: record.id,
                text: record.text,
                positions,
            });
        }

        Ok(StatementDataset {
            metadata: file.metadata,
            parties: file.parties,
            statements,
        })
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
