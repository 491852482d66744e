//! Console output utilities
//!
//! Formatted printing of query results for the command line tool.

use chrono::NaiveDate;

use crate::models::{Doctor, Patient};

/// Print a titled list of doctors as `Did: <id> (<name>)`
pub fn print_doctors(title: &str, doctors: &[&Doctor]) {
    println!("{title} ({}):", doctors.len());
    for doctor in doctors {
        println!("  - {} ({})", doctor.id, doctor.name);
    }
}

/// Print a titled list of patients as `Pid: <id> (<name>)`
pub fn print_patients(title: &str, patients: &[&Patient]) {
    println!("{title} ({}):", patients.len());
    for patient in patients {
        println!("  - {} ({})", patient.id, patient.name);
    }
}

/// Print a titled list of dates on one line
pub fn print_dates(title: &str, dates: &[NaiveDate]) {
    let rendered: Vec<String> = dates.iter().map(NaiveDate::to_string).collect();
    println!("{title}: [{}]", rendered.join(", "));
}
