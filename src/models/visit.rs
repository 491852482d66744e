//! Visit record model
//!
//! A `VisitRecord` is one dated encounter between a doctor and a patient.
//! Records are immutable once created and live in the hospital's visit store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{HospitalError, Result};
use crate::models::types::{DoctorId, PatientId};

/// Equality key of a visit: a doctor sees a given patient at most once per day
pub type VisitKey = (NaiveDate, DoctorId, PatientId);

/// Record of a single patient visit to the hospital
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitRecord {
    /// Date of the visit
    pub date: NaiveDate,
    /// Doctor who delivered care during this visit
    pub doctor_id: DoctorId,
    /// Patient associated with this visit
    pub patient_id: PatientId,
    /// Human-readable diagnosis (assigned ailment)
    pub diagnosis: String,
    /// Human-readable prognosis (assigned outcome)
    pub prognosis: String,
    /// Medication prescribed during this visit, if any
    pub prescribed_medication: Option<String>,
    /// Date the patient should come back, if any
    pub followup_date: Option<NaiveDate>,
}

impl VisitRecord {
    /// Create a new visit record
    ///
    /// Fails when the follow-up date is not strictly after the visit date.
    pub fn new(
        date: NaiveDate,
        doctor_id: DoctorId,
        patient_id: PatientId,
        diagnosis: impl Into<String>,
        prognosis: impl Into<String>,
        prescribed_medication: Option<String>,
        followup_date: Option<NaiveDate>,
    ) -> Result<Self> {
        if let Some(followup) = followup_date {
            if followup <= date {
                return Err(HospitalError::InvalidVisit(format!(
                    "follow-up {followup} is not after visit date {date}"
                )));
            }
        }

        Ok(Self {
            date,
            doctor_id,
            patient_id,
            diagnosis: diagnosis.into(),
            prognosis: prognosis.into(),
            prescribed_medication,
            followup_date,
        })
    }

    /// Identity of this visit
    #[must_use]
    pub fn key(&self) -> VisitKey {
        (self.date, self.doctor_id, self.patient_id)
    }

    /// Whether two records describe the same visit
    #[must_use]
    pub fn same_visit(&self, other: &Self) -> bool {
        self.key() == other.key()
    }

    /// Whether the visit date lies in `[start, end]`
    #[must_use]
    pub fn within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }

    /// Whether this visit prescribed exactly `medication`
    #[must_use]
    pub fn prescribes(&self, medication: &str) -> bool {
        self.prescribed_medication.as_deref() == Some(medication)
    }
}
