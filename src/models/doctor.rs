//! Doctor entity model
//!
//! A doctor carries employment data: a daily salary and a schedule of the
//! days they are expected to work, grouped by calendar month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::traits::Entity;
use crate::models::types::{DoctorId, Month};

/// Workdays of a doctor, one bucket per calendar month
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    months: [Vec<NaiveDate>; 12],
}

impl Schedule {
    /// Create an empty schedule
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a workday, filed under the month it falls in
    pub fn add(&mut self, day: NaiveDate) {
        self.months[Month::of(day).index()].push(day);
    }

    /// Reset all twelve months
    pub fn clear(&mut self) {
        for days in &mut self.months {
            days.clear();
        }
    }

    /// Workdays scheduled in `month`
    #[must_use]
    pub fn days_in(&self, month: Month) -> &[NaiveDate] {
        &self.months[month.index()]
    }

    /// All workdays, months in calendar order
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.months.iter().flatten().copied()
    }

    /// Whether `day` is a scheduled workday
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.days_in(Month::of(day)).contains(&day)
    }

    /// How many times `day` appears in the schedule
    #[must_use]
    pub fn occurrences(&self, day: NaiveDate) -> usize {
        self.days_in(Month::of(day))
            .iter()
            .filter(|&&d| d == day)
            .count()
    }

    /// Number of scheduled workdays across all months
    #[must_use]
    pub fn total_days(&self) -> usize {
        self.months.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_days() == 0
    }
}

/// Employment data for a medical doctor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    /// Name in the form 'Firstname Lastname'
    pub name: String,
    /// Unique identification number
    pub id: DoctorId,
    /// Pay for one day of work
    pub salary: f64,
    /// Days this doctor is expected to work
    pub schedule: Schedule,
}

impl Doctor {
    /// Create a new doctor with an empty schedule
    #[must_use]
    pub fn new(name: impl Into<String>, id: DoctorId, salary: f64) -> Self {
        Self {
            name: name.into(),
            id,
            salary,
            schedule: Schedule::new(),
        }
    }

    /// Add scheduled workdays
    #[must_use]
    pub fn with_workdays(mut self, days: impl IntoIterator<Item = NaiveDate>) -> Self {
        for day in days {
            self.schedule.add(day);
        }
        self
    }

    /// Cost of working every scheduled day
    #[must_use]
    pub fn scheduled_cost(&self) -> f64 {
        self.salary * self.schedule.total_days() as f64
    }
}

impl Entity for Doctor {
    type Id = DoctorId;

    fn id(&self) -> DoctorId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
