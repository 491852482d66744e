//! Visit store and admissions index
//!
//! The `VisitStore` is the single owner of every visit record. Both the
//! admissions log and each patient's history refer to records by `VisitId`,
//! so the two views can never disagree about a visit's content.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::models::{VisitId, VisitKey, VisitRecord};

/// Authoritative storage of visit records
#[derive(Debug, Clone, Default)]
pub struct VisitStore {
    records: Vec<VisitRecord>,
    by_key: FxHashMap<VisitKey, VisitId>,
}

impl VisitStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record, returning its id and whether it was new
    ///
    /// A record whose key is already stored is not added again; the id of
    /// the existing record is returned instead.
    pub fn insert(&mut self, record: VisitRecord) -> (VisitId, bool) {
        if let Some(&existing) = self.by_key.get(&record.key()) {
            return (existing, false);
        }

        let id = VisitId(self.records.len());
        self.by_key.insert(record.key(), id);
        self.records.push(record);
        (id, true)
    }

    #[must_use]
    pub fn get(&self, id: VisitId) -> Option<&VisitRecord> {
        self.records.get(id.index())
    }

    /// Id of the record with the given key
    #[must_use]
    pub fn find(&self, key: &VisitKey) -> Option<VisitId> {
        self.by_key.get(key).copied()
    }

    /// All records with their ids, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (VisitId, &VisitRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (VisitId(i), record))
    }

    /// Earliest and latest visit dates
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Daily index of admitted visits
#[derive(Debug, Clone, Default)]
pub struct AdmissionsLog {
    by_day: BTreeMap<NaiveDate, Vec<VisitId>>,
}

impl AdmissionsLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Visits admitted on `date`; empty for unseen dates
    ///
    /// Reading never creates an entry.
    #[must_use]
    pub fn on(&self, date: NaiveDate) -> &[VisitId] {
        self.by_day.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Visits admitted on `date`, creating the day if it is missing
    pub(crate) fn entry(&mut self, date: NaiveDate) -> &mut Vec<VisitId> {
        self.by_day.entry(date).or_default()
    }

    /// Days with at least one admission, in chronological order
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_day.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[VisitId])> {
        self.by_day.iter().map(|(day, ids)| (*day, ids.as_slice()))
    }

    /// Number of admitted visits across all days
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_day.values().map(Vec::len).sum()
    }
}
