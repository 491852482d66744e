use std::fs;
use std::path::{Path, PathBuf};

/// Doctors file of the fixture directory
pub const DOCTORS: &str = "\
99064054,Brian Hazlett,1070.33
99021721,Alice Liddle,500
99722708,Mikhail Varshavski,1200.5
";

pub const PATIENTS: &str = "\
44021721,Jane Doe
44123123,John Roe
";

pub const SCHEDULES: &str = "\
Alice Liddle
01/02/2017
01/03/2017
01/04/2017

Brian Hazlett
01/03/2017
02/10/2017

Nobody Known
01/05/2017
";

/// Attendance uses day-first dates
pub const ATTENDANCE: &str = "\
02/01/2017,Alice Liddle
03/01/2017,Alice Liddle,Mikhail Varshavski
04/01/2017
";

pub const ADMISSIONS: &str = "\
01/03/2017,99021721,44021721,Dengue Fever,very poor,Sucralfate,01/20/2017
01/03/2017,99722708,44123123,Influenza,good,,
01/20/2017,99021721,44021721,Dengue Fever,fair,Lidocaine,
01/21/2017,99021721,55555555,Migraine,good,,
";

/// A fresh scratch directory unique to `name`
#[must_use]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hospital_ops_{}_{name}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write `contents` to `dir/file`
pub fn write_file(dir: &Path, file: &str, contents: &str) -> PathBuf {
    let path = dir.join(file);
    fs::write(&path, contents).unwrap();
    path
}

/// A scratch directory holding the complete fixture data set
#[must_use]
pub fn fixture_dir(name: &str) -> PathBuf {
    let dir = scratch_dir(name);
    write_file(&dir, "doctors.csv", DOCTORS);
    write_file(&dir, "patients.csv", PATIENTS);
    write_file(&dir, "schedule.dat", SCHEDULES);
    write_file(&dir, "attendance.dat", ATTENDANCE);
    write_file(&dir, "admissions.csv", ADMISSIONS);
    dir
}
