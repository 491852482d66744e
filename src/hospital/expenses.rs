//! Salary expenses: projected from schedules, actual from attendance.

use super::Hospital;

impl Hospital {
    /// Total pay if every doctor worked every scheduled day
    #[must_use]
    pub fn projected_expenses(&self) -> f64 {
        self.doctors().iter().map(|doctor| doctor.scheduled_cost()).sum()
    }

    /// Total pay for the days doctors actually attended
    ///
    /// Each `(day, name)` pair on the attendance log pays the daily salary of
    /// every doctor with that name. Names matching no doctor cost nothing.
    #[must_use]
    pub fn actual_expenses(&self) -> f64 {
        self.attendance()
            .iter()
            .flat_map(|(_, roster)| roster.iter())
            .map(|name| {
                self.doctors()
                    .iter()
                    .filter(|doctor| doctor.name == *name)
                    .map(|doctor| doctor.salary)
                    .sum::<f64>()
            })
            .sum()
    }
}
