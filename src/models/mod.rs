//! Domain models for hospital operations
//!
//! This module contains the entity models: visits, doctors and patients,
//! together with the identifier types and traits they share.

pub mod doctor;
pub mod patient;
pub mod traits;
pub mod types;
pub mod visit;

// Re-export commonly used types
pub use doctor::{Doctor, Schedule};
pub use patient::{Patient, PatientHistory};
pub use traits::Entity;
pub use types::{DoctorId, Month, PatientId, VisitId};
pub use visit::{VisitKey, VisitRecord};
