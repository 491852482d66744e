#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hospital_ops::models::*;
    use hospital_ops::Hospital;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn visit(
        on: NaiveDate,
        patient: u64,
        medication: Option<&str>,
        followup: Option<NaiveDate>,
    ) -> VisitRecord {
        VisitRecord::new(
            on,
            DoctorId(99722708),
            PatientId(patient),
            "Dengue Fever",
            "very poor",
            medication.map(str::to_string),
            followup,
        )
        .unwrap()
    }

    /// A hospital holding one patient with the given visits
    fn with_visits(visits: Vec<VisitRecord>) -> Hospital {
        let mut hospital = Hospital::new("123 Fake St.");
        hospital.admit_patient(Patient::new("Jane Doe", PatientId(44021721)));
        for v in visits {
            hospital.record_visit(v);
        }
        hospital
    }

    fn jane(hospital: &Hospital) -> PatientHistory<'_> {
        hospital.history(hospital.patient(PatientId(44021721)).unwrap())
    }

    #[test]
    fn test_is_prescribed() {
        let hospital = with_visits(vec![
            visit(date(2017, 10, 23), 44021721, Some("Sucralfate"), Some(date(2017, 11, 30))),
            visit(date(2017, 11, 30), 44021721, None, None),
        ]);
        let history = jane(&hospital);

        assert!(history.is_prescribed("Sucralfate"));
        assert!(!history.is_prescribed("Lidocaine"));
        assert!(!history.is_prescribed(""));
    }

    #[test]
    fn test_followups_by_month() {
        let hospital = with_visits(vec![
            visit(date(1997, 8, 20), 44021721, None, Some(date(1997, 9, 2))),
            visit(date(1997, 8, 21), 44021721, None, Some(date(1997, 9, 20))),
            visit(date(1997, 8, 22), 44021721, None, Some(date(1997, 10, 1))),
            visit(date(1997, 8, 23), 44021721, None, None),
        ]);
        let history = jane(&hospital);

        assert_eq!(
            history.followups(Month::Sep),
            vec![date(1997, 9, 2), date(1997, 9, 20)]
        );
        assert_eq!(history.followups(Month::Oct), vec![date(1997, 10, 1)]);
        assert!(history.followups(Month::Nov).is_empty());

        for month in Month::ALL {
            for followup in history.followups(month) {
                assert_eq!(Month::of(followup), month);
            }
        }
    }

    #[test]
    fn test_prescribed_after_is_strict() {
        let hospital = with_visits(vec![
            visit(date(2017, 10, 23), 44021721, Some("Sucralfate"), None),
            visit(date(2017, 10, 24), 44021721, Some("Lidocaine"), None),
            visit(date(2017, 10, 25), 44021721, None, None),
            visit(date(2017, 10, 26), 44021721, Some("Lidocaine"), None),
        ]);
        let history = jane(&hospital);

        assert_eq!(history.prescribed_after(date(2017, 10, 22)).len(), 3);
        assert_eq!(
            history.prescribed_after(date(2017, 10, 23)),
            vec!["Lidocaine", "Lidocaine"]
        );
        assert!(history.prescribed_after(date(2017, 10, 26)).is_empty());
    }

    #[test]
    fn test_kept_followup() {
        let hospital = with_visits(vec![
            visit(date(2020, 1, 10), 44021721, Some("X"), Some(date(2020, 1, 20))),
            visit(date(2020, 1, 20), 44021721, None, None),
        ]);

        assert_eq!(jane(&hospital).missed_followups(), (0, 1));
    }

    #[test]
    fn test_missed_and_kept_followups() {
        let hospital = with_visits(vec![
            visit(date(2017, 10, 23), 44021721, Some("Sucralfate"), Some(date(2017, 11, 30))),
            visit(date(2017, 11, 30), 44021721, Some("Sucralfate"), Some(date(2017, 12, 2))),
        ]);

        // Nov 30 was kept, Dec 2 never happened
        assert_eq!(jane(&hospital).missed_followups(), (1, 1));
    }

    #[test]
    fn test_two_visits_on_followup_day_count_as_missed() {
        let mut hospital = with_visits(vec![visit(
            date(2020, 1, 10),
            44021721,
            None,
            Some(date(2020, 1, 20)),
        )]);
        hospital.record_visit(visit(date(2020, 1, 20), 44021721, None, None));
        hospital.record_visit(
            VisitRecord::new(
                date(2020, 1, 20),
                DoctorId(1),
                PatientId(44021721),
                "Flu",
                "good",
                None,
                None,
            )
            .unwrap(),
        );

        assert_eq!(jane(&hospital).missed_followups(), (1, 0));
    }

    #[test]
    fn test_followup_partition() {
        let hospital = with_visits(vec![
            visit(date(2020, 1, 1), 44021721, None, Some(date(2020, 1, 5))),
            visit(date(2020, 1, 5), 44021721, None, Some(date(2020, 2, 5))),
            visit(date(2020, 1, 6), 44021721, None, Some(date(2020, 1, 9))),
            visit(date(2020, 1, 7), 44021721, None, None),
        ]);
        let history = jane(&hospital);
        let (missed, kept) = history.missed_followups();
        let with_followup = history.visits().filter(|v| v.followup_date.is_some()).count();

        assert_eq!(missed + kept, with_followup);
        assert_eq!((missed, kept), (2, 1));
    }

    #[test]
    fn test_new_patient_has_empty_history() {
        let hospital = with_visits(Vec::new());
        let history = jane(&hospital);

        assert_eq!(history.patient().visit_count(), 0);
        assert!(!history.is_prescribed("X"));
        assert_eq!(history.missed_followups(), (0, 0));
    }
}
