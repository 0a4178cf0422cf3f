//! Data model definitions for the personnel directory.
//!
//! The primary model is [`StaffRecord`], one entry per officer. Records are
//! created either by the synthetic generator or from a [`NewStaffInput`]
//! submitted by the add-staff form, and are never edited afterwards.
//!
//! All types serialize as camelCase JSON with enumerations written as their
//! display strings, which is the shape the UI layer consumes.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::app_response::AppResponse;
use crate::catalog::Rank;

/// Years of service at which a generated record is marked [`StaffStatus::RetiredSoon`].
pub const RETIREMENT_THRESHOLD_YEARS: u32 = 30;

/// Employment status of an officer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    #[serde(rename = "Retired Soon")]
    RetiredSoon,
}

impl StaffStatus {
    pub const ALL: [StaffStatus; 3] = [
        StaffStatus::Active,
        StaffStatus::OnLeave,
        StaffStatus::RetiredSoon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "Active",
            StaffStatus::OnLeave => "On Leave",
            StaffStatus::RetiredSoon => "Retired Soon",
        }
    }
}

impl Display for StaffStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaffStatus {
    type Err = AppResponse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StaffStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppResponse::InvalidInput(format!("Unknown status: {s}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

/// A course an officer has attended or is attending.
///
/// `year` always falls inside the officer's service window, i.e. between the
/// enlistment year and `enlistment year + years_in_service`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEntry {
    pub course: String,
    pub year: i32,
    pub status: TrainingStatus,
}

/// A single personnel entry.
///
/// # Structure
///
/// - **id**: assigned as `count + 1` when the record is created, never reused
/// - **name**: derived `"{first_name} {last_name}"`
/// - **years_in_service**: reference year minus enlistment year, never negative
/// - **service_number**: `NIS/{yy}/{nnnn}` from the enlistment year and the
///   insertion sequence
///
/// # Examples
///
/// ```rust
/// use staff_directory_core::staff_model::StaffRecord;
///
/// let json = r#"{
///     "id": 7,
///     "firstName": "Chioma",
///     "lastName": "Eze",
///     "name": "Chioma Eze",
///     "rank": "Inspector of Immigration",
///     "stateCommand": "Lagos",
///     "yearsInService": 4,
///     "status": "On Leave",
///     "dateOfBirth": "1984-03-12",
///     "dateOfEnlistment": "2022-07-01",
///     "serviceNumber": "NIS/22/0007",
///     "email": "chioma.eze@nis.gov.ng",
///     "phone": "+234 803 1234567",
///     "gender": "Female",
///     "training": []
/// }"#;
///
/// let record: StaffRecord = serde_json::from_str(json)?;
/// assert_eq!(record.enlistment_year(), 2022);
/// assert_eq!(record.rank.title(), "Inspector of Immigration");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRecord {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub rank: Rank,
    pub state_command: String,
    pub years_in_service: u32,
    pub status: StaffStatus,
    /// Kept as supplied; the generator always writes `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub date_of_enlistment: NaiveDate,
    pub service_number: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
    pub training: Vec<TrainingEntry>,
}

impl StaffRecord {
    pub fn enlistment_year(&self) -> i32 {
        use chrono::Datelike;
        self.date_of_enlistment.year()
    }
}

/// Fields captured by the add-staff form.
///
/// The form layer has already checked these for presence and email format.
/// [`crate::staff_store::StaffStore::append`] derives the remaining
/// [`StaffRecord`] fields from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStaffInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Gender,
    pub date_of_birth: String,
    pub date_of_enlistment: String,
    pub rank: Rank,
    pub state_command: String,
    #[serde(default = "default_new_status")]
    pub status: StaffStatus,
}

fn default_new_status() -> StaffStatus {
    StaffStatus::Active
}

/// Formats a service number from an enlistment year and insertion sequence.
pub fn service_number(enlistment_year: i32, sequence: u32) -> String {
    format!("NIS/{:02}/{:04}", enlistment_year.rem_euclid(100), sequence)
}
