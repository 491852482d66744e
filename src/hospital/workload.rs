//! Visit-driven queries: follow-up reminders and doctor workload.

use chrono::{Days, NaiveDate};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use super::Hospital;
use crate::models::{Doctor, Entity, Patient};

impl Hospital {
    /// Patients with a follow-up in `[date, date + delta days]`
    ///
    /// A patient is listed once per qualifying visit, so patients with
    /// several follow-ups in the window appear several times.
    #[must_use]
    pub fn reminders(&self, date: NaiveDate, delta: u32) -> Vec<&Patient> {
        let until = date
            .checked_add_days(Days::new(u64::from(delta)))
            .unwrap_or(NaiveDate::MAX);

        self.all_visits()
            .filter(|(_, visit)| {
                visit
                    .followup_date
                    .is_some_and(|followup| date <= followup && followup <= until)
            })
            .map(|(patient, _)| patient)
            .collect()
    }

    /// Number of unique patients who visited `doctor` in `[start, end]`
    #[must_use]
    pub fn patients_seen(&self, doctor: &Doctor, start: NaiveDate, end: NaiveDate) -> usize {
        self.all_visits()
            .filter(|(_, visit)| visit.doctor_id == doctor.id && visit.within(start, end))
            .map(|(patient, _)| patient.id())
            .collect::<FxHashSet<_>>()
            .len()
    }

    /// Doctors with the most visits in `[start, end]`
    ///
    /// Visits are counted, not unique patients. Every doctor tied at the
    /// maximum is returned in hiring order; when no visit falls in the range
    /// all doctors tie at zero.
    #[must_use]
    pub fn busiest_doctors(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Doctor> {
        let mut visit_counts: FxHashMap<_, usize> = FxHashMap::default();
        for (_, visit) in self.all_visits().filter(|(_, v)| v.within(start, end)) {
            *visit_counts.entry(visit.doctor_id).or_insert(0) += 1;
        }

        self.doctors()
            .iter()
            .max_set_by_key(|doctor| visit_counts.get(&doctor.id).copied().unwrap_or(0))
    }

    /// Unique doctors who attended to `patient`, in hiring order
    #[must_use]
    pub fn attended_to(&self, patient: &Patient) -> Vec<&Doctor> {
        let seen_by: FxHashSet<_> = self
            .history(patient)
            .visits()
            .map(|visit| visit.doctor_id)
            .collect();

        self.doctors()
            .iter()
            .filter(|doctor| seen_by.contains(&doctor.id))
            .unique_by(|doctor| doctor.id())
            .collect()
    }
}
