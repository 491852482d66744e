//! Synthetic hospital snapshots
//!
//! Generates a random but internally consistent hospital: doctors with
//! schedules, an attendance log with absences and cover shifts, and patient
//! visits with prescriptions and follow-ups. Used by the command line tool
//! when no data directory is given, and by tests with a fixed seed.

use chrono::{Datelike, Days, NaiveDate};
use rand::prelude::*;
use rand::seq::index::sample;
use serde::{Deserialize, Serialize};

use crate::error::{HospitalError, Result};
use crate::hospital::Hospital;
use crate::models::{Doctor, DoctorId, Patient, PatientId, VisitRecord};

const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bob", "Carol", "Dan", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Judy",
];
const LAST_NAMES: [&str; 10] = [
    "Liddle", "Loot", "Bitter", "Hazlett", "Varshavski", "Okafor", "Lindqvist", "Moreau", "Tanaka",
    "Silva",
];
const DIAGNOSES: [&str; 6] = [
    "Dengue Fever",
    "Influenza",
    "Pneumonia",
    "Migraine",
    "Fractured Wrist",
    "Hypertension",
];
const PROGNOSES: [&str; 5] = ["very poor", "poor", "fair", "good", "excellent"];
const MEDICATIONS: [&str; 7] = [
    "Sucralfate",
    "Lidocaine",
    "Docusate Sodium",
    "Acetaminophen",
    "Levofloxacin",
    "Morphine Sulfate",
    "Spironolactone",
];

/// Parameters of a synthetic snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Seed for reproducible snapshots; `None` draws from the OS
    pub seed: Option<u64>,
    pub doctors: usize,
    pub patients: usize,
    /// Calendar year all dates fall in
    pub year: i32,
    pub workdays_per_doctor: usize,
    pub visits_per_patient: usize,
    /// Probability a scheduled doctor shows up
    pub attendance_rate: f64,
    /// Probability a doctor absent from the schedule covers a day anyway
    pub cover_rate: f64,
    pub prescription_rate: f64,
    pub followup_rate: f64,
    /// Probability a follow-up is kept with a visit on that day
    pub followup_kept_rate: f64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            seed: None,
            doctors: 12,
            patients: 80,
            year: 2017,
            workdays_per_doctor: 120,
            visits_per_patient: 4,
            attendance_rate: 0.92,
            cover_rate: 0.1,
            prescription_rate: 0.7,
            followup_rate: 0.5,
            followup_kept_rate: 0.6,
        }
    }
}

impl SyntheticConfig {
    /// Use a fixed seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<()> {
        let capacity = FIRST_NAMES.len() * LAST_NAMES.len();
        if self.doctors > capacity {
            return Err(HospitalError::Config(format!(
                "at most {capacity} synthetic doctors can have distinct names"
            )));
        }
        let rates = [
            self.attendance_rate,
            self.cover_rate,
            self.prescription_rate,
            self.followup_rate,
            self.followup_kept_rate,
        ];
        if rates.iter().any(|rate| !(0.0..=1.0).contains(rate)) {
            return Err(HospitalError::Config("rates must lie in [0, 1]".to_string()));
        }
        Ok(())
    }
}

/// Generate a synthetic hospital snapshot
pub fn generate(address: &str, config: &SyntheticConfig) -> Result<Hospital> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let year_start = NaiveDate::from_ymd_opt(config.year, 1, 1)
        .ok_or_else(|| HospitalError::Config(format!("invalid year {}", config.year)))?;
    let year_days: Vec<NaiveDate> = year_start
        .iter_days()
        .take_while(|day| day.year() == config.year)
        .collect();

    let mut hospital = Hospital::new(address);

    for i in 0..config.doctors {
        let name = format!(
            "{} {}",
            FIRST_NAMES[i % FIRST_NAMES.len()],
            LAST_NAMES[(i / FIRST_NAMES.len() + i) % LAST_NAMES.len()]
        );
        let salary = (rng.random_range(800.0..1500.0_f64) * 100.0).round() / 100.0;
        let amount = config.workdays_per_doctor.min(year_days.len());
        let mut workdays: Vec<NaiveDate> = sample(&mut rng, year_days.len(), amount)
            .into_iter()
            .map(|index| year_days[index])
            .collect();
        workdays.sort_unstable();

        hospital.hire_doctor(
            Doctor::new(name, DoctorId(99_000_000 + i as u64), salary).with_workdays(workdays),
        );
    }

    for day in &year_days {
        let mut roster = Vec::new();
        for doctor in hospital.doctors() {
            let present = if doctor.schedule.contains(*day) {
                rng.random_bool(config.attendance_rate)
            } else {
                rng.random_bool(config.cover_rate)
            };
            if present {
                roster.push(doctor.name.clone());
            }
        }
        if !roster.is_empty() {
            hospital.set_attendance(*day, roster);
        }
    }

    let doctor_ids: Vec<DoctorId> = hospital.doctors().iter().map(|d| d.id).collect();
    for i in 0..config.patients {
        let id = PatientId(44_000_000 + i as u64);
        let name = format!(
            "{} {}",
            FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Pat"),
            LAST_NAMES.choose(&mut rng).copied().unwrap_or("Doe")
        );
        hospital.admit_patient(Patient::new(name, id));

        let Some(&date) = year_days.choose(&mut rng) else {
            continue;
        };
        let mut next = Some(date);
        for _ in 0..config.visits_per_patient {
            let (Some(date), Some(&doctor)) = (next, doctor_ids.choose(&mut rng)) else {
                break;
            };

            let medication = rng
                .random_bool(config.prescription_rate)
                .then(|| MEDICATIONS.choose(&mut rng).copied().unwrap_or(MEDICATIONS[0]).to_string());
            let followup = if rng.random_bool(config.followup_rate) {
                date.checked_add_days(Days::new(rng.random_range(1..=30)))
            } else {
                None
            };

            let visit = VisitRecord::new(
                date,
                doctor,
                id,
                DIAGNOSES.choose(&mut rng).copied().unwrap_or(DIAGNOSES[0]),
                PROGNOSES.choose(&mut rng).copied().unwrap_or(PROGNOSES[0]),
                medication,
                followup,
            )?;
            hospital.record_visit(visit);

            next = match followup {
                Some(day) if rng.random_bool(config.followup_kept_rate) => Some(day),
                _ => date.checked_add_days(Days::new(rng.random_range(31..=90))),
            };
        }
    }

    Ok(hospital)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = SyntheticConfig::default().with_seed(7);
        let a = generate("1 Test Rd.", &config).unwrap();
        let b = generate("1 Test Rd.", &config).unwrap();

        assert_eq!(a.doctors().len(), config.doctors);
        assert_eq!(a.patients().len(), config.patients);
        assert_eq!(a.visits().len(), b.visits().len());
        assert_eq!(a.projected_expenses(), b.projected_expenses());
        assert_eq!(a.actual_expenses(), b.actual_expenses());
    }

    #[test]
    fn test_generated_doctors_have_unique_names() {
        let config = SyntheticConfig {
            doctors: 30,
            ..SyntheticConfig::default().with_seed(1)
        };
        let hospital = generate("1 Test Rd.", &config).unwrap();
        let mut names: Vec<_> = hospital.doctors().iter().map(|d| d.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 30);
    }

    #[test]
    fn test_invalid_rates_are_rejected() {
        let config = SyntheticConfig {
            attendance_rate: 1.5,
            ..SyntheticConfig::default()
        };
        assert!(matches!(generate("x", &config), Err(HospitalError::Config(_))));
    }
}
