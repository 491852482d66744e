use anyhow::Context;
use clap::Parser;
use hospital_ops::algorithm::{SyntheticConfig, generate};
use hospital_ops::utils::logging::console::{print_dates, print_doctors, print_patients};
use hospital_ops::utils::logging::{create_progress_bar, create_spinner, finish_progress_bar};
use hospital_ops::{Hospital, HospitalConfig, HospitalError, HospitalStatistics, read_hospital};
use log::{info, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Hospital operations analytics over a data directory or a synthetic snapshot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Options {
    /// Directory holding the hospital data files; a synthetic hospital is generated when omitted
    #[arg(value_name = "DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// JSON file overriding the loader configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the synthetic hospital
    #[arg(long)]
    seed: Option<u64>,

    /// Print the statistics as JSON instead of running the queries
    #[arg(long)]
    json: bool,
}

fn load(options: &Options) -> anyhow::Result<Hospital> {
    let start = Instant::now();

    let hospital = match &options.data_dir {
        Some(dir) => {
            let config = match &options.config {
                Some(path) => HospitalConfig::from_json_file(path)
                    .with_context(|| format!("Failed to load configuration {}", path.display()))?,
                None => HospitalConfig::default(),
            };
            let spinner = create_spinner(Some("Reading hospital records..."));
            let mut hospital = Hospital::new(dir.display().to_string());
            let summary = read_hospital(&mut hospital, dir, &config)
                .with_context(|| format!("Failed to read hospital data from {}", dir.display()))?;
            finish_progress_bar(&spinner, Some("Hospital records loaded"));
            info!("Loaded {summary:?}");
            hospital
        }
        None => {
            info!("No data directory given, generating a synthetic hospital");
            let config = SyntheticConfig {
                seed: options.seed,
                ..SyntheticConfig::default()
            };
            let spinner = create_spinner(Some("Generating synthetic hospital..."));
            let hospital = generate("123 Synthetic Ave.", &config)
                .context("Failed to generate a synthetic hospital")?;
            finish_progress_bar(&spinner, Some("Synthetic hospital generated"));
            hospital
        }
    };

    info!("Prepared {} in {:?}", hospital, start.elapsed());
    Ok(hospital)
}

fn run_queries(hospital: &Hospital) {
    let Some((first, last)) = hospital.visits().date_range() else {
        warn!("No visits recorded, skipping visit queries");
        return;
    };

    print_doctors("Busiest doctors", &hospital.busiest_doctors(first, last));
    print_patients("Follow-up reminders for the first week", &hospital.reminders(first, 7));

    if let Some(patient) = hospital.patients().first() {
        let history = hospital.history(patient);
        let (missed, kept) = history.missed_followups();
        println!("{} follow-ups: {missed} missed, {kept} kept", patient.id);
        print_doctors("Attended to by", &hospital.attended_to(patient));
    }

    let pb = create_progress_bar(hospital.doctors().len() as u64, Some("Computing doctor workload"));
    let mut workload = Vec::with_capacity(hospital.doctors().len());
    for doctor in hospital.doctors() {
        workload.push((doctor, hospital.patients_seen(doctor, first, last), hospital.sick_days(doctor)));
        pb.inc(1);
    }
    finish_progress_bar(&pb, None);
    workload.sort_by(|a, b| b.1.cmp(&a.1));

    for (doctor, seen, sick_days) in workload.into_iter().take(3) {
        println!("{} ({}) saw {seen} patients", doctor.id, doctor.name);
        print_dates("  Sick days", &sick_days);

        let medication = hospital
            .visits()
            .iter()
            .find(|(_, visit)| visit.doctor_id == doctor.id)
            .and_then(|(_, visit)| visit.prescribed_medication.clone());
        if let Some(medication) = medication {
            match hospital.prescribed_rate(doctor, &medication) {
                Ok(rate) => println!("  Prescribed {medication} at a rate of {rate:.2}%"),
                Err(HospitalError::NoPrescriptions { .. }) => println!("  No prescriptions"),
                Err(e) => warn!("Prescription rate failed: {e}"),
            }
        }
    }

    if let [bob, alice, ..] = hospital.doctors() {
        print_dates(
            &format!("Days {} covered for {}", bob.name, alice.name),
            &hospital.coverage(bob, alice),
        );
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse();
    let hospital = load(&options)?;
    let stats = HospitalStatistics::calculate(&hospital);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&stats).context("Failed to render statistics")?);
        return Ok(());
    }

    println!("{}", HospitalStatistics::generate_summary(&stats, hospital.address()));
    run_queries(&hospital);

    info!("Self-test completed successfully");
    Ok(())
}
