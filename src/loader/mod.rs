//! Hospital file loading
//!
//! Loaders read one input file each and apply it to a `Hospital`.
//! `read_hospital` loads a whole data directory: the files are parsed in
//! parallel and then applied in dependency order (doctors, patients,
//! schedules, attendance, admissions).

pub mod parse;

pub use parse::{
    AttendanceRecord, DoctorRecord, DoctorSchedule, PatientRecord, ScheduleBlock,
    parse_admissions, parse_attendance, parse_doctors, parse_patients, parse_schedules,
    resolve_schedules,
};

use std::io::BufReader;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::config::HospitalConfig;
use crate::error::Result;
use crate::error::util::{safe_open_file, validate_directory};
use crate::hospital::Hospital;
use crate::models::{Doctor, Patient, VisitRecord};
use crate::utils::logging::{LoadStep, log_skipped_input};

/// Counts of what a directory load added to a hospital
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub doctors: usize,
    pub patients: usize,
    pub schedules: usize,
    pub attendance_days: usize,
    pub visits: usize,
}

/// File name used in parse errors for `path`
fn source_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

/// Open `path` and run `parser` over its contents
fn parse_file<T>(
    path: &Path,
    config: &HospitalConfig,
    parser: fn(BufReader<std::fs::File>, &str, &HospitalConfig) -> Result<Vec<T>>,
) -> Result<Vec<T>> {
    let file = safe_open_file(path, "loading hospital records")?;
    parser(BufReader::new(file), &source_name(path), config)
}

/// Run two closures, on the rayon pool when `parallel` is set
fn join<A, B, RA, RB>(parallel: bool, a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if parallel {
        rayon::join(a, b)
    } else {
        (a(), b())
    }
}

/// Add parsed doctors, skipping ids already present
pub fn apply_doctors(hospital: &mut Hospital, records: Vec<DoctorRecord>) -> usize {
    let mut added = 0;
    for record in records {
        if hospital.has_doctor(record.id) {
            log::debug!("Doctor {} already present, skipping", record.id);
            continue;
        }
        hospital.hire_doctor(Doctor::new(record.name, record.id, record.salary));
        added += 1;
    }
    added
}

/// Add parsed patients, skipping ids already present
pub fn apply_patients(hospital: &mut Hospital, records: Vec<PatientRecord>) -> usize {
    let mut added = 0;
    for record in records {
        if hospital.has_patient(record.id) {
            log::debug!("Patient {} already present, skipping", record.id);
            continue;
        }
        hospital.admit_patient(Patient::new(record.name, record.id));
        added += 1;
    }
    added
}

/// Replace the schedules of the doctors named in `schedules`
///
/// A matched doctor's previous schedule is cleared once, then every block
/// under their name is added.
pub fn apply_schedules(hospital: &mut Hospital, schedules: Vec<DoctorSchedule>) -> usize {
    let mut reset: FxHashSet<String> = FxHashSet::default();
    let mut matched = 0;

    for schedule in schedules {
        let Some(doctor) = hospital.doctor_by_name_mut(&schedule.name) else {
            continue;
        };
        if reset.insert(schedule.name) {
            doctor.schedule.clear();
        }
        for day in schedule.days {
            doctor.schedule.add(day);
        }
        matched += 1;
    }
    matched
}

/// Set the attendance roster of every parsed day
pub fn apply_attendance(hospital: &mut Hospital, records: Vec<AttendanceRecord>) -> usize {
    let days = records.len();
    for record in records {
        hospital.set_attendance(record.date, record.names);
    }
    days
}

/// Record parsed visits; returns how many were recorded
pub fn apply_admissions(hospital: &mut Hospital, visits: Vec<VisitRecord>) -> usize {
    visits
        .into_iter()
        .filter_map(|visit| hospital.record_visit(visit))
        .count()
}

/// Load doctors from `path` into `hospital`
pub fn load_doctors(hospital: &mut Hospital, path: &Path, config: &HospitalConfig) -> Result<usize> {
    load_with(hospital, path, config, "doctors", parse_doctors, apply_doctors)
}

/// Load patients from `path` into `hospital`
pub fn load_patients(hospital: &mut Hospital, path: &Path, config: &HospitalConfig) -> Result<usize> {
    load_with(hospital, path, config, "patients", parse_patients, apply_patients)
}

/// Replace doctor schedules from `path`
///
/// Blocks naming no hired doctor are ignored without parsing their workdays.
pub fn load_schedules(hospital: &mut Hospital, path: &Path, config: &HospitalConfig) -> Result<usize> {
    let step = LoadStep::begin("schedules", path);
    let blocks = parse_file(path, config, parse_schedules)?;
    let schedules = resolve_schedules(blocks, &source_name(path), config, |name| {
        hospital.doctor_by_name(name).is_some()
    })?;
    let matched = apply_schedules(hospital, schedules);
    step.finish(matched);
    Ok(matched)
}

/// Load attendance rosters from `path`
pub fn load_attendance(hospital: &mut Hospital, path: &Path, config: &HospitalConfig) -> Result<usize> {
    load_with(hospital, path, config, "attendance days", parse_attendance, apply_attendance)
}

/// Load visits from `path` into the admissions log and patient histories
pub fn load_admissions(hospital: &mut Hospital, path: &Path, config: &HospitalConfig) -> Result<usize> {
    load_with(hospital, path, config, "visits", parse_admissions, apply_admissions)
}

fn load_with<T>(
    hospital: &mut Hospital,
    path: &Path,
    config: &HospitalConfig,
    what: &'static str,
    parser: fn(BufReader<std::fs::File>, &str, &HospitalConfig) -> Result<Vec<T>>,
    apply: fn(&mut Hospital, Vec<T>) -> usize,
) -> Result<usize> {
    let step = LoadStep::begin(what, path);
    let records = parse_file(path, config, parser)?;
    let applied = apply(hospital, records);
    step.finish(applied);
    Ok(applied)
}

/// Load every hospital file found in `directory`
///
/// All files are parsed, and the schedule blocks of known doctors resolved,
/// before the hospital is touched, so a malformed file leaves `hospital`
/// unchanged. The patients file is optional.
pub fn read_hospital(
    hospital: &mut Hospital,
    directory: &Path,
    config: &HospitalConfig,
) -> Result<LoadSummary> {
    validate_directory(directory, "reading a hospital data directory")?;
    config.validate()?;
    let step = LoadStep::begin("hospital records", directory);

    let patients_path = directory.join(&config.patients_file);
    let parallel = config.parallel_parse;

    let ((doctors, patients), (schedules, (attendance, visits))) = join(
        parallel,
        || {
            join(
                parallel,
                || parse_file(&directory.join(&config.doctors_file), config, parse_doctors),
                || {
                    if patients_path.exists() {
                        parse_file(&patients_path, config, parse_patients).map(Some)
                    } else {
                        Ok(None)
                    }
                },
            )
        },
        || {
            join(
                parallel,
                || parse_file(&directory.join(&config.schedules_file), config, parse_schedules),
                || {
                    join(
                        parallel,
                        || parse_file(&directory.join(&config.attendance_file), config, parse_attendance),
                        || parse_file(&directory.join(&config.admissions_file), config, parse_admissions),
                    )
                },
            )
        },
    );

    let (doctors, patients, blocks, attendance, visits) =
        (doctors?, patients?, schedules?, attendance?, visits?);

    // Doctors on staff once the parsed records are hired
    let schedules = {
        let mut new_ids = FxHashSet::default();
        let known: FxHashSet<&str> = hospital
            .doctors()
            .iter()
            .map(|doctor| doctor.name.as_str())
            .chain(
                doctors
                    .iter()
                    .filter(|record| !hospital.has_doctor(record.id) && new_ids.insert(record.id))
                    .map(|record| record.name.as_str()),
            )
            .collect();
        let source = source_name(&directory.join(&config.schedules_file));
        resolve_schedules(blocks, &source, config, |name| known.contains(name))?
    };

    if patients.is_none() {
        log_skipped_input("no patients file, continuing without a patient roster", &patients_path);
    }

    let summary = LoadSummary {
        doctors: apply_doctors(hospital, doctors),
        patients: patients.map_or(0, |records| apply_patients(hospital, records)),
        schedules: apply_schedules(hospital, schedules),
        attendance_days: apply_attendance(hospital, attendance),
        visits: apply_admissions(hospital, visits),
    };

    step.finish(summary.visits);
    Ok(summary)
}
