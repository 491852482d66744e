mod utils;

#[cfg(test)]
mod tests {
    use super::utils::{fixture_dir, scratch_dir, write_file};
    use chrono::NaiveDate;
    use hospital_ops::models::{DoctorId, PatientId};
    use hospital_ops::{
        Hospital, HospitalConfig, HospitalError, LoadSummary, load_doctors, load_schedules,
        read_hospital,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn read(dir: &std::path::Path, config: &HospitalConfig) -> (Hospital, LoadSummary) {
        let mut hospital = Hospital::new("123 Fake St.");
        let summary = read_hospital(&mut hospital, dir, config).unwrap();
        (hospital, summary)
    }

    #[test]
    fn test_read_hospital_directory() {
        let dir = fixture_dir("read_directory");
        let (hospital, summary) = read(&dir, &HospitalConfig::default());

        assert_eq!(
            summary,
            LoadSummary {
                doctors: 3,
                patients: 2,
                schedules: 2,
                attendance_days: 3,
                visits: 3,
            }
        );

        let alice = hospital.doctor_by_name("Alice Liddle").unwrap();
        let brian = hospital.doctor(DoctorId(99064054)).unwrap();
        let mikhail = hospital.doctor(DoctorId(99722708)).unwrap();
        assert_eq!(alice.schedule.total_days(), 3);

        // Jan 4 has an attendance entry with nobody present
        assert_eq!(hospital.sick_days(alice), vec![date(2017, 1, 4)]);
        assert_eq!(hospital.sick_days(brian), vec![date(2017, 1, 3)]);
        assert_eq!(hospital.coverage(mikhail, brian), vec![date(2017, 1, 3)]);

        assert!((hospital.projected_expenses() - 3640.66).abs() < 1e-6);
        assert!((hospital.actual_expenses() - 2200.5).abs() < 1e-6);

        assert_eq!(hospital.admissions_on(date(2017, 1, 3)).count(), 2);
        assert_eq!(hospital.admissions_on(date(2017, 1, 21)).count(), 0);

        let jane = hospital.patient(PatientId(44021721)).unwrap();
        assert_eq!(hospital.history(jane).missed_followups(), (0, 1));
        let attended: Vec<DoctorId> = hospital.attended_to(jane).iter().map(|d| d.id).collect();
        assert_eq!(attended, vec![alice.id]);
    }

    #[test]
    fn test_malformed_file_leaves_hospital_unchanged() {
        let dir = fixture_dir("malformed");
        write_file(
            &dir,
            "admissions.csv",
            "01/03/2017,99021721,44021721,Dengue Fever,very poor,,\n13/45/2017,1,2,Flu,good,,\n",
        );

        let mut hospital = Hospital::new("123 Fake St.");
        let err = read_hospital(&mut hospital, &dir, &HospitalConfig::default()).unwrap_err();

        assert!(matches!(err, HospitalError::Parse { line: 2, .. }));
        assert!(hospital.doctors().is_empty());
        assert!(hospital.patients().is_empty());
        assert!(hospital.attendance().is_empty());
        assert!(hospital.visits().is_empty());
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let dir = fixture_dir("missing_required");
        std::fs::remove_file(dir.join("schedule.dat")).unwrap();

        let mut hospital = Hospital::new("123 Fake St.");
        let result = read_hospital(&mut hospital, &dir, &HospitalConfig::default());

        assert!(matches!(result, Err(HospitalError::FileAccess { .. })));
        assert!(hospital.doctors().is_empty());
    }

    #[test]
    fn test_missing_patients_file_is_tolerated() {
        let dir = fixture_dir("missing_patients");
        std::fs::remove_file(dir.join("patients.csv")).unwrap();
        let (hospital, summary) = read(&dir, &HospitalConfig::default());

        assert_eq!(summary.doctors, 3);
        assert_eq!(summary.patients, 0);
        // visits of unknown patients are skipped
        assert_eq!(summary.visits, 0);
        assert!(hospital.admissions().iter().next().is_none());
    }

    #[test]
    fn test_load_schedules_replaces_previous_schedule() {
        let dir = fixture_dir("replace_schedules");
        let config = HospitalConfig::default();
        let (mut hospital, _) = read(&dir, &config);

        let path = write_file(
            &dir,
            "schedules_v2.txt",
            "Alice Liddle\n02/01/2017\n\nAlice Liddle\n02/02/2017\n",
        );
        let matched = load_schedules(&mut hospital, &path, &config).unwrap();
        assert_eq!(matched, 2);

        let alice = hospital.doctor_by_name("Alice Liddle").unwrap();
        assert_eq!(alice.schedule.total_days(), 2);
        assert!(!alice.schedule.contains(date(2017, 1, 2)));
        assert!(alice.schedule.contains(date(2017, 2, 2)));

        // doctors not named in the file keep their schedules
        let brian = hospital.doctor_by_name("Brian Hazlett").unwrap();
        assert_eq!(brian.schedule.total_days(), 2);
    }

    #[test]
    fn test_duplicate_doctor_ids_are_skipped() {
        let dir = scratch_dir("duplicate_doctors");
        let path = write_file(
            &dir,
            "doctors.csv",
            "1,Alice Liddle,100\n1,Alice Again,200\n2,Bob Loot,300\n",
        );
        let config = HospitalConfig::default();
        let mut hospital = Hospital::new("123 Fake St.");

        assert_eq!(load_doctors(&mut hospital, &path, &config).unwrap(), 2);
        assert_eq!(load_doctors(&mut hospital, &path, &config).unwrap(), 0);
        assert_eq!(hospital.doctors().len(), 2);
        assert_eq!(hospital.doctor(DoctorId(1)).unwrap().name, "Alice Liddle");
    }

    #[test]
    fn test_sequential_and_parallel_parse_agree() {
        let dir = fixture_dir("parallel_parse");
        let (parallel, parallel_summary) = read(&dir, &HospitalConfig::default());
        let (sequential, sequential_summary) =
            read(&dir, &HospitalConfig::default().with_parallel_parse(false));

        assert_eq!(parallel_summary, sequential_summary);
        assert!((parallel.actual_expenses() - sequential.actual_expenses()).abs() < 1e-9);
        assert!((parallel.projected_expenses() - sequential.projected_expenses()).abs() < 1e-9);
        assert_eq!(parallel.visits().len(), sequential.visits().len());
    }

    #[test]
    fn test_config_file_changes_date_format() {
        let dir = fixture_dir("config_file");
        write_file(&dir, "attendance.dat", "01/02/2017,Alice Liddle\n");
        let config_path = write_file(
            &dir,
            "config.json",
            r#"{ "attendance_date_format": "%m/%d/%Y", "parallel_parse": false }"#,
        );

        let config = HospitalConfig::from_json_file(&config_path).unwrap();
        let (hospital, _) = read(&dir, &config);

        assert!(hospital.roster(date(2017, 1, 2)).is_some());
        assert!(hospital.roster(date(2017, 2, 1)).is_none());
    }

    #[test]
    fn test_malformed_block_for_unknown_doctor_is_ignored() {
        let dir = scratch_dir("unknown_schedule_block");
        let doctors = write_file(&dir, "doctors.csv", "1,Alice Liddle,100\n");
        let schedules = write_file(
            &dir,
            "s.txt",
            "Alice Liddle\n01/16/2017\n\nRetired Doc\nsee HR\n",
        );
        let config = HospitalConfig::default();
        let mut hospital = Hospital::new("123 Fake St.");
        load_doctors(&mut hospital, &doctors, &config).unwrap();

        assert_eq!(load_schedules(&mut hospital, &schedules, &config).unwrap(), 1);
        let alice = hospital.doctor_by_name("Alice Liddle").unwrap();
        assert_eq!(alice.schedule.total_days(), 1);
        assert!(alice.schedule.contains(date(2017, 1, 16)));
    }

    #[test]
    fn test_read_hospital_ignores_malformed_unknown_block() {
        let dir = fixture_dir("unknown_block_directory");
        write_file(
            &dir,
            "schedule.dat",
            "Alice Liddle\n01/02/2017\n\nRetired Doc\nsee HR\n",
        );
        let (hospital, summary) = read(&dir, &HospitalConfig::default());

        assert_eq!(summary.schedules, 1);
        assert_eq!(hospital.doctor_by_name("Alice Liddle").unwrap().schedule.total_days(), 1);
    }

    #[test]
    fn test_malformed_block_for_known_doctor_fails_directory() {
        let dir = fixture_dir("known_block_malformed");
        write_file(&dir, "schedule.dat", "Alice Liddle\n01/02/2017\nsee HR\n");

        let mut hospital = Hospital::new("123 Fake St.");
        let err = read_hospital(&mut hospital, &dir, &HospitalConfig::default()).unwrap_err();

        assert!(matches!(err, HospitalError::Parse { line: 3, .. }));
        assert!(hospital.doctors().is_empty());
    }
}
