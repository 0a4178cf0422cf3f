use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Datelike, NaiveDate};
use log::{debug, info, warn};

use crate::app_response::AppResponse;
use crate::config::DirectoryConfig;
use crate::generator::generate_staff;
use crate::staff_model::{service_number, NewStaffInput, StaffRecord, RETIREMENT_THRESHOLD_YEARS};

/// Authoritative in-memory holder of all staff records.
///
/// The collection is append-only: [`StaffStore::append`] is the single
/// mutator and every read issued after it returns observes the new record.
/// Reads hand out owned snapshots, so callers never hold the lock.
pub struct StaffStore {
    records: RwLock<Vec<StaffRecord>>,
    reference_year: i32,
}

impl StaffStore {
    /// Builds a store populated with a synthetic roster.
    pub fn init(config: &DirectoryConfig) -> Self {
        let mut rng = config.rng();
        let records = generate_staff(&mut rng, config);
        info!(
            "Staff store initialized with {} generated records (reference year {})",
            records.len(),
            config.reference_year
        );
        Self::with_records(records, config.reference_year)
    }

    /// Wraps an existing roster.
    ///
    /// `records` must carry ids `1..=records.len()` in order: [`StaffStore::append`]
    /// assigns `len() + 1` and would otherwise hand out a duplicate id.
    pub fn with_records(records: Vec<StaffRecord>, reference_year: i32) -> Self {
        debug_assert!(
            records.iter().enumerate().all(|(index, record)| record.id as usize == index + 1),
            "staff record ids must be 1..=n in insertion order"
        );
        Self {
            records: RwLock::new(records),
            reference_year,
        }
    }

    pub fn empty(reference_year: i32) -> Self {
        Self::with_records(Vec::new(), reference_year)
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn list(&self) -> Vec<StaffRecord> {
        self.read().clone()
    }

    pub fn get_by_id(&self, id: u32) -> Option<StaffRecord> {
        let found = self.read().iter().find(|record| record.id == id).cloned();
        if found.is_none() {
            debug!("No staff record found with id {}", id);
        }
        found
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Appends a record built from form input and returns it.
    ///
    /// Derived fields: `id = count + 1`, full name, years in service against
    /// the store's reference year, service number and an empty training list.
    /// The supplied status is kept even for long-serving officers.
    ///
    /// # Errors
    ///
    /// [`AppResponse::InvalidInput`] when the enlistment date has no parseable
    /// year.
    pub fn append(&self, input: NewStaffInput) -> Result<StaffRecord, AppResponse> {
        let enlisted = parse_enlistment_date(&input.date_of_enlistment).ok_or_else(|| {
            warn!("Rejected new staff input: unparseable enlistment date {:?}", input.date_of_enlistment);
            AppResponse::InvalidInput(format!(
                "dateOfEnlistment '{}' is not a valid date",
                input.date_of_enlistment
            ))
        })?;

        let mut records = self.write();
        let id = records.len() as u32 + 1;
        let years_in_service = self.reference_year.saturating_sub(enlisted.year()).max(0) as u32;
        if years_in_service >= RETIREMENT_THRESHOLD_YEARS {
            debug!(
                "Appending staff id {} with {} years of service and status {}",
                id, years_in_service, input.status
            );
        }

        let record = StaffRecord {
            id,
            name: format!("{} {}", input.first_name, input.last_name),
            first_name: input.first_name,
            last_name: input.last_name,
            rank: input.rank,
            state_command: input.state_command,
            years_in_service,
            status: input.status,
            date_of_birth: input.date_of_birth,
            date_of_enlistment: enlisted,
            service_number: service_number(enlisted.year(), id),
            email: input.email,
            phone: input.phone,
            gender: input.gender,
            training: Vec::new(),
        };
        records.push(record.clone());
        info!("Appended staff record {} ({})", record.id, record.service_number);
        Ok(record)
    }

    // The collection is always left consistent, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<StaffRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<StaffRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_enlistment_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
