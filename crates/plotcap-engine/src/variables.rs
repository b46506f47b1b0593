//! The engine-owned named-value table.
//!
//! The original engine keeps user variables in an ordered list with the
//! built-in names at the front; the user region starts immediately after
//! the last built-in. Only the value kinds the capture layer touches are
//! modeled here — datablocks and the empty placeholder a freshly created
//! name holds.

use log::debug;

/// A value held by a named engine variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarValue {
    /// Freshly created name with no value assigned yet.
    Empty,
    /// A datablock: an ordered list of literal data lines.
    Datablock(Vec<String>),
}

/// Ordered name → value table with a builtin/user region split.
#[derive(Debug, Default)]
pub struct VariableTable {
    entries: Vec<(String, VarValue)>,
    user_start: usize,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the variable with the given name.
    ///
    /// A created entry starts as [`VarValue::Empty`]. Insertion order is
    /// preserved; creation before [`mark_user_start`](Self::mark_user_start)
    /// places the name in the builtin region.
    pub fn add(&mut self, name: &str) -> &mut VarValue {
        if let Some(idx) = self.entries.iter().position(|(n, _)| n == name) {
            return &mut self.entries[idx].1;
        }
        debug!("creating engine variable {name:?}");
        let idx = self.entries.len();
        self.entries.push((name.to_string(), VarValue::Empty));
        &mut self.entries[idx].1
    }

    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Mark the boundary after the last built-in: names added from now on
    /// belong to the user region.
    pub fn mark_user_start(&mut self) {
        self.user_start = self.entries.len();
    }

    /// Number of names in the builtin region.
    pub fn builtin_count(&self) -> usize {
        self.user_start
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
