//! Configuration for loading a hospital snapshot from disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{HospitalError, Result};

/// Configuration for the hospital loaders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HospitalConfig {
    /// File with `id,name,salary` doctor records
    pub doctors_file: String,
    /// File with `id,name` patient records; optional in a data directory
    pub patients_file: String,
    /// File with doctor schedule blocks
    pub schedules_file: String,
    /// File with `date,name,name,...` attendance records
    pub attendance_file: String,
    /// File with visit records
    pub admissions_file: String,
    /// Date format of the workdays in the schedules file
    pub schedule_date_format: String,
    /// Date format of the attendance file
    pub attendance_date_format: String,
    /// Date format of the visit and follow-up dates in the admissions file
    pub admissions_date_format: String,
    /// Field delimiter of the CSV files
    pub delimiter: char,
    /// Parse the files of a data directory in parallel
    pub parallel_parse: bool,
}

impl Default for HospitalConfig {
    fn default() -> Self {
        Self {
            doctors_file: "doctors.csv".to_string(),
            patients_file: "patients.csv".to_string(),
            schedules_file: "schedule.dat".to_string(),
            attendance_file: "attendance.dat".to_string(),
            admissions_file: "admissions.csv".to_string(),
            schedule_date_format: "%m/%d/%Y".to_string(),
            attendance_date_format: "%d/%m/%Y".to_string(),
            admissions_date_format: "%m/%d/%Y".to_string(),
            delimiter: ',',
            parallel_parse: true,
        }
    }
}

impl HospitalConfig {
    /// Create a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            HospitalError::file_access_with_source(path, "failed to read configuration", e)
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        let files = [
            &self.doctors_file,
            &self.patients_file,
            &self.schedules_file,
            &self.attendance_file,
            &self.admissions_file,
        ];
        if files.iter().any(|name| name.trim().is_empty()) {
            return Err(HospitalError::Config("file names must not be empty".to_string()));
        }
        if self.delimiter.is_alphanumeric() || self.delimiter == '/' {
            return Err(HospitalError::Config(format!(
                "delimiter {:?} would clash with names or dates",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// Set the field delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the date format used by the attendance file
    #[must_use]
    pub fn with_attendance_date_format(mut self, format: impl Into<String>) -> Self {
        self.attendance_date_format = format.into();
        self
    }

    /// Set the date format used by the schedules file
    #[must_use]
    pub fn with_schedule_date_format(mut self, format: impl Into<String>) -> Self {
        self.schedule_date_format = format.into();
        self
    }

    /// Set the date format used by the admissions file
    #[must_use]
    pub fn with_admissions_date_format(mut self, format: impl Into<String>) -> Self {
        self.admissions_date_format = format.into();
        self
    }

    /// Enable or disable parallel parsing
    #[must_use]
    pub const fn with_parallel_parse(mut self, parallel: bool) -> Self {
        self.parallel_parse = parallel;
        self
    }
}
