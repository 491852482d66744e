//! Patient entity model
//!
//! A patient's history is an ordered list of ids into the hospital's visit
//! store. Queries over that history go through [`PatientHistory`], a
//! borrowed view pairing the patient with the store it points into.

use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::collections::VisitStore;
use crate::models::traits::Entity;
use crate::models::types::{Month, PatientId, VisitId};
use crate::models::visit::VisitRecord;

/// Medical history owner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Name in the form 'Firstname Lastname'
    pub name: String,
    /// Unique identification number
    pub id: PatientId,
    history: Vec<VisitId>,
}

impl Patient {
    /// Create a new patient with an empty history
    #[must_use]
    pub fn new(name: impl Into<String>, id: PatientId) -> Self {
        Self {
            name: name.into(),
            id,
            history: Vec::new(),
        }
    }

    /// Ids of this patient's visits, in the order they were recorded
    #[must_use]
    pub fn visit_ids(&self) -> &[VisitId] {
        &self.history
    }

    /// Number of recorded visits
    #[must_use]
    pub fn visit_count(&self) -> usize {
        self.history.len()
    }

    pub(crate) fn push_visit(&mut self, visit: VisitId) {
        self.history.push(visit);
    }
}

impl Entity for Patient {
    type Id = PatientId;

    fn id(&self) -> PatientId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A patient's visits resolved against the visit store
#[derive(Debug, Clone, Copy)]
pub struct PatientHistory<'a> {
    patient: &'a Patient,
    store: &'a VisitStore,
}

impl<'a> PatientHistory<'a> {
    /// Pair a patient with the store holding its visits
    #[must_use]
    pub const fn new(patient: &'a Patient, store: &'a VisitStore) -> Self {
        Self { patient, store }
    }

    #[must_use]
    pub const fn patient(&self) -> &'a Patient {
        self.patient
    }

    /// Visits in history order
    pub fn visits(&self) -> impl Iterator<Item = &'a VisitRecord> + use<'a> {
        let store = self.store;
        self.patient
            .history
            .iter()
            .filter_map(move |&id| store.get(id))
    }

    /// Whether `medication` was prescribed during any visit
    #[must_use]
    pub fn is_prescribed(&self, medication: &str) -> bool {
        self.visits().any(|visit| visit.prescribes(medication))
    }

    /// Follow-up dates falling in `month`, in history order
    #[must_use]
    pub fn followups(&self, month: Month) -> Vec<NaiveDate> {
        self.visits()
            .filter_map(|visit| visit.followup_date)
            .filter(|followup| followup.month0() as usize == month.index())
            .collect()
    }

    /// Medications prescribed at visits strictly after `date`
    ///
    /// Duplicates are kept when a medication was prescribed more than once.
    #[must_use]
    pub fn prescribed_after(&self, date: NaiveDate) -> Vec<&'a str> {
        self.visits()
            .filter(|visit| date < visit.date)
            .filter_map(|visit| visit.prescribed_medication.as_deref())
            .collect()
    }

    /// Number of `(missed, kept)` follow-ups
    ///
    /// A follow-up is kept only if exactly one visit falls on its date, so
    /// two visits on the same day count as a missed follow-up.
    #[must_use]
    pub fn missed_followups(&self) -> (usize, usize) {
        let mut visits_per_day: FxHashMap<NaiveDate, usize> = FxHashMap::default();
        for visit in self.visits() {
            *visits_per_day.entry(visit.date).or_insert(0) += 1;
        }

        self.visits()
            .filter_map(|visit| visit.followup_date)
            .fold((0, 0), |(missed, kept), followup| {
                if visits_per_day.get(&followup) == Some(&1) {
                    (missed, kept + 1)
                } else {
                    (missed + 1, kept)
                }
            })
    }
}
