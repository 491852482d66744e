//! Hospital aggregate
//!
//! The `Hospital` owns every doctor, patient and visit of a snapshot plus
//! the daily attendance and admissions logs. The query engine is split over
//! the submodules by concern; every query is a read-only scan whose output
//! follows doctor/patient insertion order and chronological day order.

mod expenses;
mod prescriptions;
mod staffing;
mod workload;

use std::fmt;

use chrono::NaiveDate;

use crate::collections::{
    AdmissionsLog, AttendanceLog, EntityCollection, ModelCollection, VisitStore,
};
use crate::models::{Doctor, DoctorId, Patient, PatientHistory, PatientId, VisitId, VisitRecord};

/// Daily operation records of a hospital
#[derive(Debug, Clone, Default)]
pub struct Hospital {
    address: String,
    doctors: EntityCollection<Doctor>,
    patients: EntityCollection<Patient>,
    visits: VisitStore,
    attendance: AttendanceLog,
    admissions: AdmissionsLog,
}

impl Hospital {
    /// Create an empty hospital at `address`
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Add `patient` to the hospital's patients
    ///
    /// No de-duplication is performed; callers avoid repeating ids.
    pub fn admit_patient(&mut self, patient: Patient) {
        self.patients.add(patient);
    }

    /// Add `doctor` to the hospital's doctors
    ///
    /// No de-duplication is performed; callers avoid repeating ids.
    pub fn hire_doctor(&mut self, doctor: Doctor) {
        self.doctors.add(doctor);
    }

    /// Record a visit in the admissions log and the patient's history
    ///
    /// Returns `None` when no patient has the visit's patient id; such a
    /// visit is not stored. Recording a visit whose key is already stored
    /// returns the existing id and changes nothing.
    pub fn record_visit(&mut self, visit: VisitRecord) -> Option<VisitId> {
        let Some(patient) = self.patients.get_mut(visit.patient_id) else {
            log::warn!(
                "Skipping visit on {} for unknown patient {}",
                visit.date,
                visit.patient_id
            );
            return None;
        };

        let date = visit.date;
        let (id, inserted) = self.visits.insert(visit);
        if inserted {
            patient.push_visit(id);
            self.admissions.entry(date).push(id);
        } else {
            log::debug!("Visit on {date} already recorded as {id:?}");
        }
        Some(id)
    }

    /// Replace the attendance roster for `date`
    pub fn set_attendance(&mut self, date: NaiveDate, names: impl IntoIterator<Item = String>) {
        self.attendance.set(date, names);
    }

    /// Doctors in the order they were hired
    #[must_use]
    pub fn doctors(&self) -> &[Doctor] {
        self.doctors.all()
    }

    /// Patients in the order they were admitted
    #[must_use]
    pub fn patients(&self) -> &[Patient] {
        self.patients.all()
    }

    #[must_use]
    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.get(id)
    }

    #[must_use]
    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.get(id)
    }

    /// First doctor with the given name
    #[must_use]
    pub fn doctor_by_name(&self, name: &str) -> Option<&Doctor> {
        self.doctors.find_by_name(name)
    }

    pub fn doctor_mut(&mut self, id: DoctorId) -> Option<&mut Doctor> {
        self.doctors.get_mut(id)
    }

    pub(crate) fn doctor_by_name_mut(&mut self, name: &str) -> Option<&mut Doctor> {
        self.doctors.find_by_name_mut(name)
    }

    pub(crate) fn has_doctor(&self, id: DoctorId) -> bool {
        self.doctors.contains(id)
    }

    pub(crate) fn has_patient(&self, id: PatientId) -> bool {
        self.patients.contains(id)
    }

    #[must_use]
    pub fn visit(&self, id: VisitId) -> Option<&VisitRecord> {
        self.visits.get(id)
    }

    #[must_use]
    pub const fn visits(&self) -> &VisitStore {
        &self.visits
    }

    /// Visits admitted on `date`
    pub fn admissions_on(&self, date: NaiveDate) -> impl Iterator<Item = &VisitRecord> {
        self.admissions
            .on(date)
            .iter()
            .filter_map(|&id| self.visits.get(id))
    }

    #[must_use]
    pub const fn admissions(&self) -> &AdmissionsLog {
        &self.admissions
    }

    #[must_use]
    pub const fn attendance(&self) -> &AttendanceLog {
        &self.attendance
    }

    /// Names of the doctors present on `date`, if the day was recorded
    #[must_use]
    pub fn roster(&self, date: NaiveDate) -> Option<&[String]> {
        self.attendance.roster(date)
    }

    /// The visit history of `patient`
    #[must_use]
    pub fn history<'a>(&'a self, patient: &'a Patient) -> PatientHistory<'a> {
        PatientHistory::new(patient, &self.visits)
    }

    /// Every recorded visit, patient by patient in admission order
    pub(crate) fn all_visits(&self) -> impl Iterator<Item = (&Patient, &VisitRecord)> {
        self.patients.iter().flat_map(move |patient| {
            self.history(patient).visits().map(move |visit| (patient, visit))
        })
    }
}

impl fmt::Display for Hospital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hospital on {}", self.address)
    }
}
