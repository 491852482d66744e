//! A Rust library for modelling a hospital's operational records (doctors,
//! patients, visits, schedules and attendance) and answering analytical
//! queries over a loaded snapshot.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod error;
pub mod hospital;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::HospitalConfig;
pub use error::{HospitalError, Result};
pub use hospital::Hospital;

// Entity models
pub use models::{
    Doctor, DoctorId, Entity, Month, Patient, PatientHistory, PatientId, Schedule, VisitId,
    VisitRecord,
};

// Loading
pub use loader::{
    LoadSummary, load_admissions, load_attendance, load_doctors, load_patients, load_schedules,
    read_hospital,
};

// Statistics
pub use algorithm::{HospitalStatistics, HospitalStats};
