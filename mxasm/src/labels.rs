use crate::error::Error;
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Data,
    Code,
    Extern,
    Entry,
}

#[derive(Debug, Clone)]
pub struct Label {
    pub address: u16,
    pub kind: Kind,
}

/// Insertion-ordered symbol table; iteration order is what the `.ent` and
/// `.ext` writers rely on.
#[derive(Debug, Default)]
pub struct Labels {
    map: IndexMap<String, Label>,
}

impl Labels {
    pub fn new() -> Self {
        Labels {
            map: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, address: u16, kind: Kind) -> Result<(), Error> {
        if self.map.contains_key(name) {
            return Err(Error::LabelAlreadyExists(name.to_string()));
        }
        self.map.insert(name.to_string(), Label { address, kind });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Label> {
        self.map.get(name)
    }

    /// Promote a defined label to Entry, keeping its address. External
    /// labels have no local definition to export.
    pub fn mark_entry(&mut self, name: &str) -> Result<(), Error> {
        match self.map.get_mut(name) {
            None => Err(Error::CantFindLabelToEntry(name.to_string())),
            Some(label) if label.kind == Kind::Extern => {
                Err(Error::EntryCantBeExtern(name.to_string()))
            }
            Some(label) => {
                label.kind = Kind::Entry;
                Ok(())
            }
        }
    }

    /// Shift every Data label behind the instruction image. Called once, at
    /// the end of an error-free first pass.
    pub fn relocate_data(&mut self, ic_final: u16) {
        for label in self.map.values_mut() {
            if label.kind == Kind::Data {
                label.address += ic_final;
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Label)> {
        self.map.iter().map(|(name, label)| (name.as_str(), label))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Label)> {
        self.iter().filter(|(_, label)| label.kind == Kind::Entry)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
