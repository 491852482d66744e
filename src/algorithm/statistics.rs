//! Hospital statistics and summaries
//!
//! This module condenses a hospital snapshot into headline figures and
//! renders them as a human-readable summary.

use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;

use crate::hospital::Hospital;

/// Functions for hospital statistics and summaries
pub struct HospitalStatistics;

impl HospitalStatistics {
    /// Calculate headline statistics for a hospital snapshot
    #[must_use]
    pub fn calculate(hospital: &Hospital) -> HospitalStats {
        let (followups_missed, followups_kept) = hospital
            .patients()
            .iter()
            .map(|patient| hospital.history(patient).missed_followups())
            .fold((0, 0), |(missed, kept), (m, k)| (missed + m, kept + k));

        let prescribing_visits = hospital
            .visits()
            .iter()
            .filter(|(_, visit)| visit.prescribed_medication.is_some())
            .count();

        let distinct_medications = hospital
            .visits()
            .iter()
            .filter_map(|(_, visit)| visit.prescribed_medication.as_deref())
            .unique()
            .count();

        let (first_visit, last_visit) = hospital
            .visits()
            .date_range()
            .map_or((None, None), |(first, last)| (Some(first), Some(last)));

        HospitalStats {
            doctor_count: hospital.doctors().len(),
            patient_count: hospital.patients().len(),
            visit_count: hospital.visits().len(),
            attendance_days: hospital.attendance().len(),
            scheduled_days: hospital
                .doctors()
                .iter()
                .map(|doctor| doctor.schedule.total_days())
                .sum(),
            projected_expenses: hospital.projected_expenses(),
            actual_expenses: hospital.actual_expenses(),
            followups_kept,
            followups_missed,
            prescribing_visits,
            distinct_medications,
            first_visit,
            last_visit,
        }
    }

    /// Render statistics as a multi-line summary
    #[must_use]
    pub fn generate_summary(stats: &HospitalStats, address: &str) -> String {
        let mut summary = String::new();
        summary.push_str(&format!("Hospital Summary: {address}\n"));
        summary.push_str(&format!("  Doctors: {}\n", stats.doctor_count));
        summary.push_str(&format!("  Patients: {}\n", stats.patient_count));
        summary.push_str(&format!("  Visits: {}\n", stats.visit_count));
        if let (Some(first), Some(last)) = (stats.first_visit, stats.last_visit) {
            summary.push_str(&format!("  Visit Period: {first} to {last}\n"));
        }
        summary.push_str(&format!("  Attendance Days: {}\n", stats.attendance_days));
        summary.push_str(&format!("  Scheduled Doctor-Days: {}\n", stats.scheduled_days));

        summary.push_str("\nExpenses:\n");
        summary.push_str(&format!("  Projected: {:.2}\n", stats.projected_expenses));
        summary.push_str(&format!("  Actual: {:.2}\n", stats.actual_expenses));
        summary.push_str(&format!(
            "  Difference: {:.2}\n",
            stats.actual_expenses - stats.projected_expenses
        ));

        let followups = stats.followups_kept + stats.followups_missed;
        summary.push_str("\nFollow-ups:\n");
        summary.push_str(&format!("  Kept: {}\n", stats.followups_kept));
        summary.push_str(&format!("  Missed: {}\n", stats.followups_missed));
        if followups > 0 {
            let compliance = stats.followups_kept as f64 / followups as f64 * 100.0;
            summary.push_str(&format!("  Compliance: {compliance:.1}%\n"));
        }

        summary.push_str("\nPrescriptions:\n");
        summary.push_str(&format!("  Prescribing Visits: {}\n", stats.prescribing_visits));
        summary.push_str(&format!("  Distinct Medications: {}\n", stats.distinct_medications));

        summary
    }
}

/// Headline figures of a hospital snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HospitalStats {
    /// Number of doctors on staff
    pub doctor_count: usize,
    /// Number of admitted patients
    pub patient_count: usize,
    /// Number of recorded visits
    pub visit_count: usize,
    /// Number of days with an attendance entry
    pub attendance_days: usize,
    /// Scheduled workdays summed over all doctors
    pub scheduled_days: usize,
    /// Salary cost according to the schedules
    pub projected_expenses: f64,
    /// Salary cost according to attendance
    pub actual_expenses: f64,
    /// Follow-ups kept, summed over patients
    pub followups_kept: usize,
    /// Follow-ups missed, summed over patients
    pub followups_missed: usize,
    /// Visits that prescribed a medication
    pub prescribing_visits: usize,
    /// Number of different medications prescribed
    pub distinct_medications: usize,
    /// Date of the earliest visit
    pub first_visit: Option<NaiveDate>,
    /// Date of the latest visit
    pub last_visit: Option<NaiveDate>,
}
