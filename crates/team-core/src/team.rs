//! Team roster with identity-based deduplication

use crate::error::{Result, TeamError};
use crate::member::Member;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Outcome of a lenient [`Team::add_all`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddAllReport {
    /// Members inserted by this call
    pub added: usize,
    /// Members skipped because they were already on the team
    pub skipped: usize,
}

/// A set of unique members kept in insertion order.
///
/// Members are compared by identity (see [`Member`]). The team only grows:
/// there is no removal, lookup or size operation. Snapshots are taken with
/// [`Team::to_vec`].
pub struct Team<T> {
    /// Members in insertion order
    order: Vec<Member<T>>,
    /// Identity index: member -> position in `order`
    index: HashMap<Member<T>, usize>,
}

impl<T> Team<T> {
    /// Create an empty team
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a single member.
    ///
    /// # Errors
    ///
    /// Returns [`TeamError::DuplicateMember`] if the member is already on the
    /// team. The team is left unchanged in that case.
    pub fn add(&mut self, member: Member<T>) -> Result<()> {
        if let Some(&position) = self.index.get(&member) {
            return Err(TeamError::DuplicateMember { position });
        }
        self.insert(member);
        Ok(())
    }

    /// Add members in order, skipping any that are already on the team.
    ///
    /// Duplicates never fail the call; each one is logged at `WARN` and
    /// counted in the returned report. A member repeated within `members`
    /// is inserted once, at its first position.
    pub fn add_all<I>(&mut self, members: I) -> AddAllReport
    where
        I: IntoIterator<Item = Member<T>>,
    {
        let mut report = AddAllReport::default();
        for (input_position, member) in members.into_iter().enumerate() {
            if let Some(&team_position) = self.index.get(&member) {
                tracing::warn!(input_position, team_position, "skipping duplicate team member");
                report.skipped += 1;
            } else {
                self.insert(member);
                report.added += 1;
            }
        }
        report
    }

    /// Snapshot of all members in insertion order.
    ///
    /// Each call returns a fresh vector; mutating it does not affect the team.
    pub fn to_vec(&self) -> Vec<Member<T>> {
        self.order.clone()
    }

    /// Iterate over members in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Member<T>> {
        self.order.iter()
    }

    fn insert(&mut self, member: Member<T>) {
        self.index.insert(member.clone(), self.order.len());
        self.order.push(member);
    }
}

impl<T> Clone for Team<T> {
    fn clone(&self) -> Self {
        Self {
            order: self.order.clone(),
            index: self.index.clone(),
        }
    }
}

impl<T> Default for Team<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Member<T>> for Team<T> {
    fn extend<I: IntoIterator<Item = Member<T>>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T> IntoIterator for &'a Team<T> {
    type Item = &'a Member<T>;
    type IntoIter = std::slice::Iter<'a, Member<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Team<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.order.iter()).finish()
    }
}

impl<T: Serialize> Serialize for Team<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.order.len()))?;
        for member in &self.order {
            seq.serialize_element(member)?;
        }
        seq.end()
    }
}
