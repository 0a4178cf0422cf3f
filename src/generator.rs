//! Synthetic staff roster.
//!
//! The generator samples from the [`crate::catalog`] pools through an injected
//! random source, so a seeded [`rand::rngs::StdRng`] always reproduces the
//! same roster.

use chrono::NaiveDate;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Rank, EMAIL_DOMAIN, FIRST_NAMES, LAST_NAMES, STATE_COMMANDS, TRAINING_COURSES};
use crate::config::DirectoryConfig;
use crate::staff_model::{
    service_number, Gender, StaffRecord, StaffStatus, TrainingEntry, TrainingStatus,
    RETIREMENT_THRESHOLD_YEARS,
};

const ON_LEAVE_PROBABILITY: f64 = 0.15;
const COMPLETED_PROBABILITY: f64 = 0.9;
const MALE_PROBABILITY: f64 = 0.6;
const YEARS_PER_RANK_STEP: f64 = 2.2;
const MIN_TRAININGS: usize = 2;
const MAX_TRAININGS: usize = 6;
const BIRTH_YEAR_START: i32 = 1960;
const BIRTH_YEAR_SPAN: i32 = 25;

/// Generates `config.record_count` records with ids `1..=record_count`.
pub fn generate_staff<R: Rng + ?Sized>(rng: &mut R, config: &DirectoryConfig) -> Vec<StaffRecord> {
    let records: Vec<StaffRecord> = (1..=config.record_count)
        .map(|id| generate_record(rng, config, id))
        .collect();
    debug!("Generated {} synthetic staff records", records.len());
    records
}

fn generate_record<R: Rng + ?Sized>(rng: &mut R, config: &DirectoryConfig, id: u32) -> StaffRecord {
    let first_name = pick(rng, &FIRST_NAMES);
    let last_name = pick(rng, &LAST_NAMES);
    let hire_year = config
        .hire_year_start
        .saturating_add(rng.gen_range(0..config.hire_year_span.max(1)));
    let years_in_service = config.reference_year.saturating_sub(hire_year).max(0) as u32;

    let status = if years_in_service >= RETIREMENT_THRESHOLD_YEARS {
        StaffStatus::RetiredSoon
    } else if rng.gen_bool(ON_LEAVE_PROBABILITY) {
        StaffStatus::OnLeave
    } else {
        StaffStatus::Active
    };

    let training = generate_training(rng, hire_year, years_in_service);
    let state_command = pick(rng, &STATE_COMMANDS);
    let birth_year = BIRTH_YEAR_START + rng.gen_range(0..BIRTH_YEAR_SPAN);
    let date_of_birth = sample_date(rng, birth_year);
    let date_of_enlistment = sample_date(rng, hire_year);
    let phone = format!(
        "+234 {} {:07}",
        800 + rng.gen_range(0..100),
        rng.gen_range(0..10_000_000)
    );
    let gender = if rng.gen_bool(MALE_PROBABILITY) {
        Gender::Male
    } else {
        Gender::Female
    };

    StaffRecord {
        id,
        name: format!("{first_name} {last_name}"),
        email: format!(
            "{}.{}@{EMAIL_DOMAIN}",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        rank: rank_for_service(years_in_service),
        state_command: state_command.to_string(),
        years_in_service,
        status,
        date_of_birth: date_of_birth.format("%Y-%m-%d").to_string(),
        date_of_enlistment,
        service_number: service_number(hire_year, id),
        phone,
        gender,
        training,
    }
}

/// Maps years of service to a rank: every 2.2 years moves one step up from
/// the most junior rank, clamped to the rank list.
pub fn rank_for_service(years_in_service: u32) -> Rank {
    let junior = Rank::ALL.len() - 1;
    let steps = (f64::from(years_in_service) / YEARS_PER_RANK_STEP).floor() as usize;
    Rank::ALL[junior.saturating_sub(steps)]
}

fn generate_training<R: Rng + ?Sized>(rng: &mut R, hire_year: i32, years_in_service: u32) -> Vec<TrainingEntry> {
    let count = rng.gen_range(MIN_TRAININGS..=MAX_TRAININGS);
    let mut courses = TRAINING_COURSES.to_vec();
    courses.shuffle(rng);

    courses
        .into_iter()
        .take(count)
        .map(|course| {
            let year = if years_in_service == 0 {
                hire_year
            } else {
                hire_year.saturating_add(rng.gen_range(0..years_in_service as i32))
            };
            let status = if rng.gen_bool(COMPLETED_PROBABILITY) {
                TrainingStatus::Completed
            } else {
                TrainingStatus::InProgress
            };
            TrainingEntry {
                course: course.to_string(),
                year,
                status,
            }
        })
        .collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

// Days stop at 28 so every month is valid.
fn sample_date<R: Rng + ?Sized>(rng: &mut R, year: i32) -> NaiveDate {
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
