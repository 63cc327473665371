use crate::datasets::{DatasetError, Result};
use crate::model::{Coalition, Party};

/// Owner of the user's current coalition pick.
///
/// UI events go through these methods; the generator and scorer only ever
/// see an immutable snapshot and never touch this state themselves.
/// Insertion order is preserved so a reordered selection renders the way
/// the user arranged it.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    pub fn new() -> Selection {
        Selection::default()
    }

    /// Add a party. Returns false when it was already selected.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove a party. Returns false when it was not selected.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Flip a party in or out. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.remove(name) {
            false
        } else {
            self.names.push(name.to_string());
            true
        }
    }

    /// Replace the whole selection, dropping repeated names.
    pub fn replace<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.clear();
        for name in names {
            let name = name.into();
            if !self.contains(&name) {
                self.names.push(name);
            }
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve the selection against the roster into a scoreable snapshot.
    pub fn snapshot(&self, roster: &[Party]) -> Result<Coalition> {
        let mut parties = Vec::with_capacity(self.names.len());
        for name in &self.names {
            match roster.iter().find(|p| &p.name == name) {
                Some(party) => parties.push(party.clone()),
                None => return Err(DatasetError::UnknownParty(name.clone())),
            }
        }
        Ok(Coalition::new(parties))
    }
}
