//! Record parsers for the hospital input files
//!
//! Each parser reads a whole source into records before anything touches a
//! `Hospital`, so a malformed line fails the file without partial effects.

use std::io::BufRead;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::HospitalConfig;
use crate::error::{HospitalError, Result};
use crate::models::{DoctorId, PatientId, VisitRecord};

/// A doctor row: `id,name,salary`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorRecord {
    pub id: DoctorId,
    pub name: String,
    pub salary: f64,
}

/// A patient row: `id,name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientRecord {
    pub id: PatientId,
    pub name: String,
}

/// A schedule block as read: the name line and its raw workday lines
///
/// Workdays stay unparsed until the name is matched to a doctor, so blocks
/// for unknown doctors are skipped without looking at their contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleBlock {
    pub name: String,
    /// Workday lines with their 1-based line numbers
    pub lines: Vec<(usize, String)>,
}

/// The parsed workdays of a known doctor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorSchedule {
    pub name: String,
    pub days: Vec<NaiveDate>,
}

/// The doctors present on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub names: Vec<String>,
}

/// Lines of a source with their 1-based numbers, trimmed, blanks kept
fn numbered_lines<R: BufRead>(reader: R, source: &str) -> impl Iterator<Item = Result<(usize, String)>> {
    let source = source.to_string();
    reader.lines().enumerate().map(move |(i, line)| {
        line.map(|l| (i + 1, l.trim().to_string()))
            .map_err(|e| HospitalError::parse(source.clone(), i + 1, e.to_string()))
    })
}

/// Split a CSV line into trimmed fields
fn fields(line: &str, delimiter: char) -> Vec<&str> {
    line.split(delimiter).map(str::trim).collect()
}

fn parse_date(value: &str, format: &str, source: &str, line: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, format).map_err(|e| {
        HospitalError::parse(source, line, format!("invalid date {value:?} (expected {format}): {e}"))
    })
}

fn optional(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Parse `id,name,salary` doctor rows
pub fn parse_doctors<R: BufRead>(
    reader: R,
    source: &str,
    config: &HospitalConfig,
) -> Result<Vec<DoctorRecord>> {
    let mut records = Vec::new();
    for entry in numbered_lines(reader, source) {
        let (line_no, line) = entry?;
        if line.is_empty() {
            continue;
        }

        let parts = fields(&line, config.delimiter);
        let [id, name, salary] = parts.as_slice() else {
            return Err(HospitalError::parse(
                source,
                line_no,
                format!("expected 3 fields, found {}", parts.len()),
            ));
        };

        let id = id
            .parse::<DoctorId>()
            .map_err(|e| HospitalError::parse(source, line_no, format!("invalid doctor id {id:?}: {e}")))?;
        let salary = salary
            .parse::<f64>()
            .map_err(|e| HospitalError::parse(source, line_no, format!("invalid salary {salary:?}: {e}")))?;
        if !salary.is_finite() || salary < 0.0 {
            return Err(HospitalError::parse(source, line_no, format!("invalid salary {salary}")));
        }

        records.push(DoctorRecord {
            id,
            name: (*name).to_string(),
            salary,
        });
    }
    Ok(records)
}

/// Parse `id,name` patient rows; trailing fields are ignored
pub fn parse_patients<R: BufRead>(
    reader: R,
    source: &str,
    config: &HospitalConfig,
) -> Result<Vec<PatientRecord>> {
    let mut records = Vec::new();
    for entry in numbered_lines(reader, source) {
        let (line_no, line) = entry?;
        if line.is_empty() {
            continue;
        }

        let parts = fields(&line, config.delimiter);
        if parts.len() < 2 {
            return Err(HospitalError::parse(
                source,
                line_no,
                format!("expected at least 2 fields, found {}", parts.len()),
            ));
        }

        let id = parts[0].parse::<PatientId>().map_err(|e| {
            HospitalError::parse(source, line_no, format!("invalid patient id {:?}: {e}", parts[0]))
        })?;

        records.push(PatientRecord {
            id,
            name: parts[1].to_string(),
        });
    }
    Ok(records)
}

/// Split a schedules source into blocks
///
/// A block is a doctor's name on its own line followed by one workday per
/// line; a blank line ends the block. Workdays are parsed later by
/// [`resolve_schedules`].
pub fn parse_schedules<R: BufRead>(
    reader: R,
    source: &str,
    _config: &HospitalConfig,
) -> Result<Vec<ScheduleBlock>> {
    let mut blocks = Vec::new();
    let mut current: Option<ScheduleBlock> = None;

    for entry in numbered_lines(reader, source) {
        let (line_no, line) = entry?;
        if line.is_empty() {
            blocks.extend(current.take());
            continue;
        }

        match current.as_mut() {
            None => {
                current = Some(ScheduleBlock {
                    name: line,
                    lines: Vec::new(),
                });
            }
            Some(block) => block.lines.push((line_no, line)),
        }
    }
    blocks.extend(current);

    Ok(blocks)
}

/// Parse the workdays of every block whose name `is_known`
///
/// Blocks for unknown names are dropped unparsed. A malformed workday in a
/// known block fails the whole source.
pub fn resolve_schedules(
    blocks: Vec<ScheduleBlock>,
    source: &str,
    config: &HospitalConfig,
    is_known: impl Fn(&str) -> bool,
) -> Result<Vec<DoctorSchedule>> {
    let mut schedules = Vec::with_capacity(blocks.len());
    for block in blocks {
        if !is_known(&block.name) {
            log::debug!("No doctor named {:?}, ignoring schedule", block.name);
            continue;
        }

        let days = block
            .lines
            .iter()
            .map(|(line_no, line)| parse_date(line, &config.schedule_date_format, source, *line_no))
            .collect::<Result<Vec<_>>>()?;
        schedules.push(DoctorSchedule {
            name: block.name,
            days,
        });
    }
    Ok(schedules)
}

/// Parse `date,name,name,...` attendance rows
pub fn parse_attendance<R: BufRead>(
    reader: R,
    source: &str,
    config: &HospitalConfig,
) -> Result<Vec<AttendanceRecord>> {
    let mut records = Vec::new();
    for entry in numbered_lines(reader, source) {
        let (line_no, line) = entry?;
        if line.is_empty() {
            continue;
        }

        let parts = fields(&line, config.delimiter);
        let date = parse_date(parts[0], &config.attendance_date_format, source, line_no)?;
        let names = parts[1..]
            .iter()
            .filter(|name| !name.is_empty())
            .map(|name| (*name).to_string())
            .collect();

        records.push(AttendanceRecord { date, names });
    }
    Ok(records)
}

/// Parse visit rows
///
/// `date,doctor id,patient id,diagnosis,prognosis,medication,followup` where
/// medication and follow-up may be empty.
pub fn parse_admissions<R: BufRead>(
    reader: R,
    source: &str,
    config: &HospitalConfig,
) -> Result<Vec<VisitRecord>> {
    let format = config.admissions_date_format.as_str();
    let mut records = Vec::new();

    for entry in numbered_lines(reader, source) {
        let (line_no, line) = entry?;
        if line.is_empty() {
            continue;
        }

        let parts = fields(&line, config.delimiter);
        let [date, doctor_id, patient_id, diagnosis, prognosis, medication, followup] =
            parts.as_slice()
        else {
            return Err(HospitalError::parse(
                source,
                line_no,
                format!("expected 7 fields, found {}", parts.len()),
            ));
        };

        let date = parse_date(date, format, source, line_no)?;
        let doctor_id = doctor_id.parse::<DoctorId>().map_err(|e| {
            HospitalError::parse(source, line_no, format!("invalid doctor id {doctor_id:?}: {e}"))
        })?;
        let patient_id = patient_id.parse::<PatientId>().map_err(|e| {
            HospitalError::parse(source, line_no, format!("invalid patient id {patient_id:?}: {e}"))
        })?;
        let followup = optional(followup)
            .map(|value| parse_date(value, format, source, line_no))
            .transpose()?;

        let visit = VisitRecord::new(
            date,
            doctor_id,
            patient_id,
            *diagnosis,
            *prognosis,
            optional(medication).map(str::to_string),
            followup,
        )
        .map_err(|e| HospitalError::parse(source, line_no, e.to_string()))?;

        records.push(visit);
    }
    Ok(records)
}
