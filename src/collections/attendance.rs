//! Daily attendance log
//!
//! Records which doctors, by name, showed up for work on each day. Days are
//! kept in chronological order so scans over the log are deterministic.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use smallvec::SmallVec;

/// Names of the doctors present on one day
pub type Roster = SmallVec<[String; 8]>;

/// Attendance by day
#[derive(Debug, Clone, Default)]
pub struct AttendanceLog {
    by_day: BTreeMap<NaiveDate, Roster>,
}

impl AttendanceLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster for `date`
    pub fn set(&mut self, date: NaiveDate, names: impl IntoIterator<Item = String>) {
        self.by_day.insert(date, names.into_iter().collect());
    }

    /// Roster for `date`, if the day was recorded
    #[must_use]
    pub fn roster(&self, date: NaiveDate) -> Option<&[String]> {
        self.by_day.get(&date).map(SmallVec::as_slice)
    }

    /// Whether `name` is on the roster for `date`
    #[must_use]
    pub fn was_present(&self, date: NaiveDate, name: &str) -> bool {
        self.roster(date)
            .is_some_and(|roster| roster.iter().any(|n| n == name))
    }

    /// Whether the day has an attendance entry at all
    #[must_use]
    pub fn has_day(&self, date: NaiveDate) -> bool {
        self.by_day.contains_key(&date)
    }

    /// Days with their rosters, in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[String])> {
        self.by_day.iter().map(|(day, roster)| (*day, roster.as_slice()))
    }

    /// Number of recorded days
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_lookup() {
        let mut log = AttendanceLog::new();
        let day = NaiveDate::from_ymd_opt(2019, 8, 1).unwrap();
        let other = NaiveDate::from_ymd_opt(2019, 8, 2).unwrap();
        log.set(day, vec!["Alice Liddle".to_string(), "Bob Loot".to_string()]);

        assert!(log.was_present(day, "Bob Loot"));
        assert!(!log.was_present(day, "Carol Bitter"));
        assert!(!log.was_present(other, "Bob Loot"));
        assert!(log.has_day(day));
        assert!(!log.has_day(other));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_set_replaces_roster() {
        let mut log = AttendanceLog::new();
        let day = NaiveDate::from_ymd_opt(2019, 8, 1).unwrap();
        log.set(day, vec!["Alice Liddle".to_string()]);
        log.set(day, vec!["Carol Bitter".to_string()]);

        assert_eq!(log.roster(day).unwrap(), &["Carol Bitter".to_string()]);
    }
}
