//! Schedule versus attendance reconciliation: sick days and coverage.

use chrono::NaiveDate;

use super::Hospital;
use crate::models::Doctor;

impl Hospital {
    /// Days `doctor` was scheduled but missing from the attendance roll
    ///
    /// Only days with an attendance entry are considered; a scheduled day
    /// that was never recorded at all is not a sick day. Days are returned in
    /// schedule order (calendar month, then the order they were scheduled).
    #[must_use]
    pub fn sick_days(&self, doctor: &Doctor) -> Vec<NaiveDate> {
        doctor
            .schedule
            .iter()
            .filter(|&day| {
                self.attendance().has_day(day) && !self.attendance().was_present(day, &doctor.name)
            })
            .collect()
    }

    /// Days `bob` covered for `alice`
    ///
    /// `bob` covered a day when `bob` was not scheduled but is on that day's
    /// attendance roll, while `alice` was scheduled and is absent from it.
    /// Each day appears at most once, in chronological order.
    #[must_use]
    pub fn coverage(&self, bob: &Doctor, alice: &Doctor) -> Vec<NaiveDate> {
        self.attendance()
            .iter()
            .filter(|&(day, roster)| {
                let bob_present = roster.iter().any(|name| *name == bob.name);
                let alice_present = roster.iter().any(|name| *name == alice.name);
                bob_present
                    && !alice_present
                    && !bob.schedule.contains(day)
                    && alice.schedule.contains(day)
            })
            .map(|(day, _)| day)
            .collect()
    }
}
