//! Prescription rates per doctor.

use super::Hospital;
use crate::error::{HospitalError, Result};
use crate::models::Doctor;

impl Hospital {
    /// Percentage of `doctor`'s prescribing visits that prescribed `medication`
    ///
    /// The denominator counts every visit by the doctor that prescribed any
    /// medication. A doctor who never prescribed anything has no rate and
    /// yields [`HospitalError::NoPrescriptions`].
    pub fn prescribed_rate(&self, doctor: &Doctor, medication: &str) -> Result<f64> {
        let (matching, prescribing) = self
            .all_visits()
            .filter(|(_, visit)| visit.doctor_id == doctor.id)
            .filter_map(|(_, visit)| visit.prescribed_medication.as_deref())
            .fold((0_usize, 0_usize), |(matching, prescribing), prescribed| {
                (matching + usize::from(prescribed == medication), prescribing + 1)
            });

        if prescribing == 0 {
            return Err(HospitalError::NoPrescriptions { doctor: doctor.id });
        }

        Ok(matching as f64 / prescribing as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::error::HospitalError;
    use crate::hospital::Hospital;
    use crate::models::{Doctor, DoctorId, Patient, PatientId, VisitRecord};

    fn visit(day: u32, doctor: u64, patient: u64, medication: Option<&str>) -> VisitRecord {
        VisitRecord::new(
            NaiveDate::from_ymd_opt(2020, 3, day).unwrap(),
            DoctorId(doctor),
            PatientId(patient),
            "Flu",
            "good",
            medication.map(str::to_string),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_rate_over_prescribing_visits() {
        let mut hospital = Hospital::new("123 Fake St.");
        hospital.hire_doctor(Doctor::new("Alice Liddle", DoctorId(1), 100.0));
        hospital.admit_patient(Patient::new("Ann", PatientId(10)));
        hospital.admit_patient(Patient::new("Ben", PatientId(11)));
        hospital.record_visit(visit(1, 1, 10, Some("A")));
        hospital.record_visit(visit(2, 1, 11, Some("B")));
        hospital.record_visit(visit(3, 1, 11, None));
        hospital.record_visit(visit(4, 2, 11, Some("A")));

        let alice = hospital.doctor(DoctorId(1)).unwrap();
        assert!((hospital.prescribed_rate(alice, "A").unwrap() - 50.0).abs() < 1e-9);
        assert_eq!(hospital.prescribed_rate(alice, "C").unwrap(), 0.0);
    }

    #[test]
    fn test_rate_without_prescriptions_is_an_error() {
        let mut hospital = Hospital::new("123 Fake St.");
        let doctor = Doctor::new("Bob Loot", DoctorId(2), 100.0);
        hospital.hire_doctor(doctor.clone());
        hospital.admit_patient(Patient::new("Ann", PatientId(10)));
        hospital.record_visit(visit(1, 2, 10, None));

        let err = hospital.prescribed_rate(&doctor, "A").unwrap_err();
        assert!(matches!(err, HospitalError::NoPrescriptions { doctor } if doctor == DoctorId(2)));
    }
}
