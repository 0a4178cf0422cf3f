//! # Staff Directory Core
//!
//! The data layer of a personnel-directory dashboard: a synthetic staff
//! roster, an append-only in-memory store, simulated-latency queries and the
//! derivations behind the staff list and summary dashboard.
//!
//! ## Features
//!
//! - **Reproducible roster**: records are generated from a seedable random source
//! - **Append-only store**: one mutator, reads always see the latest append
//! - **Stale-while-revalidate queries**: cached value now, fresh value after latency
//! - **Pure derivations**: search filter, pagination, counts, rank distribution
//! - **C ABI**: JSON-in/JSON-out functions for UI hosts written in other languages
//!
//! ## Quick Start
//!
//! ```rust
//! use staff_directory_core::config::DirectoryConfig;
//! use staff_directory_core::derivations::{aggregate_counts, filter, paginate, StatusFilter};
//! use staff_directory_core::directory::DirectoryState;
//!
//! let config = DirectoryConfig { seed: Some(7), ..DirectoryConfig::default() };
//! let directory = DirectoryState::init(config)?;
//!
//! let records = directory.store().list();
//! let counts = aggregate_counts(&records);
//! assert_eq!(counts.total, 50);
//!
//! let everyone = filter(&records, "", &StatusFilter::All);
//! let first_page = paginate(&everyone, 1, 10);
//! assert_eq!(first_page.total_pages, 5);
//! # Ok::<(), staff_directory_core::app_response::AppResponse>(())
//! ```
//!
//! ## FFI Functions
//!
//! Every function returns a JSON-serialized [`AppResponse`] that must be
//! released with [`free_response`]:
//!
//! - [`create_directory`] - Initialize a directory instance
//! - [`get_all`] - Retrieve all records
//! - [`get_by_id`] - Retrieve one record
//! - [`push_staff`] - Append a new record (alias: `post_staff`)
//! - [`query_staff`] - Filtered, paginated staff list
//! - [`get_dashboard_summary`] - Counts, rank distribution and recent staff
//! - [`close_directory`] - Release the instance

pub mod app_response;
pub mod catalog;
pub mod config;
pub mod derivations;
pub mod directory;
pub mod generator;
pub mod query;
pub mod staff_model;
pub mod staff_store;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use log::{info, warn};

use crate::app_response::AppResponse;
use crate::config::DirectoryConfig;
use crate::directory::{DirectoryState, ListRequest};
use crate::staff_model::NewStaffInput;

/// Creates a new directory instance populated with a synthetic roster.
///
/// # Parameters
///
/// * `config_toml` - Null-terminated TOML configuration, or null for defaults
///
/// # Returns
///
/// A pointer to the [`DirectoryState`], or null when the configuration is not
/// valid UTF-8, not valid TOML, or fails validation. Release it with
/// [`close_directory`].
///
/// # Examples
///
/// ```no_run
/// use std::ffi::CString;
/// use staff_directory_core::create_directory;
///
/// let config = CString::new("seed = 42").unwrap();
/// let directory = create_directory(config.as_ptr());
/// assert!(!directory.is_null());
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn create_directory(config_toml: *const c_char) -> *mut DirectoryState {
    let config = if config_toml.is_null() {
        DirectoryConfig::default()
    } else {
        let source = match unsafe { CStr::from_ptr(config_toml).to_str() } {
            Ok(s) => s,
            Err(e) => {
                warn!("Invalid UTF-8 in configuration: {e}");
                return std::ptr::null_mut();
            }
        };
        match DirectoryConfig::from_toml_str(source) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load directory configuration: {e}");
                return std::ptr::null_mut();
            }
        }
    };

    let state = match DirectoryState::init(config) {
        Ok(state) => state,
        Err(e) => {
            warn!("Rejected directory configuration: {e}");
            return std::ptr::null_mut();
        }
    };
    info!("Directory created with {} records", state.store().len());
    Box::into_raw(Box::new(state))
}

/// Retrieves every record in insertion order as a JSON array.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_all(state: *mut DirectoryState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to get_all"),
    };

    response_to_c_string(&AppResponse::json(&state.store().list()))
}

/// Retrieves a record by its numeric id.
///
/// Responds with `NotFound` when no record carries `id`.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_by_id(state: *mut DirectoryState, id: u32) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to get_by_id"),
    };

    match state.store().get_by_id(id) {
        Some(record) => response_to_c_string(&AppResponse::json(&record)),
        None => {
            let error = AppResponse::NotFound(format!("No staff record found with id: {id}"));
            response_to_c_string(&error)
        }
    }
}

/// Appends a new staff record built from a JSON `NewStaffInput`.
///
/// # JSON Format
///
/// ```json
/// {
///   "firstName": "Amina",
///   "lastName": "Garba",
///   "email": "amina.garba@nis.gov.ng",
///   "phone": "+234 805 1234567",
///   "gender": "Female",
///   "dateOfBirth": "1990-02-14",
///   "dateOfEnlistment": "2020-05-01",
///   "rank": "Inspector of Immigration",
///   "stateCommand": "Kano",
///   "status": "Active"
/// }
/// ```
///
/// Responds with the created record, `SerializationError` for malformed JSON
/// or `InvalidInput` for an unparseable enlistment date.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn push_staff(state: *mut DirectoryState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to push_staff"),
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(err) => return err,
    };

    let input: NewStaffInput = match serde_json::from_str(&json_str) {
        Ok(input) => input,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid staff JSON: {e}"));
            return response_to_c_string(&error);
        }
    };

    match state.store().append(input) {
        Ok(record) => response_to_c_string(&AppResponse::json(&record)),
        Err(e) => response_to_c_string(&e),
    }
}

/// Appends a new staff record (HTTP-style naming).
///
/// Alias for [`push_staff`].
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn post_staff(state: *mut DirectoryState, json_ptr: *const c_char) -> *const c_char {
    push_staff(state, json_ptr)
}

/// Returns one page of the filtered staff list.
///
/// The request is a JSON [`ListRequest`]; every field is optional:
///
/// ```json
/// { "searchTerm": "lagos", "statusFilter": "On Leave", "page": 1, "pageSize": 10 }
/// ```
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn query_staff(state: *mut DirectoryState, json_ptr: *const c_char) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to query_staff"),
    };

    let json_str = match c_ptr_to_string(json_ptr, "JSON") {
        Ok(json) => json,
        Err(err) => return err,
    };

    let request: ListRequest = match serde_json::from_str(&json_str) {
        Ok(request) => request,
        Err(e) => {
            let error = AppResponse::SerializationError(format!("Invalid list request: {e}"));
            return response_to_c_string(&error);
        }
    };

    response_to_c_string(&AppResponse::json(&state.list_page(&request)))
}

/// Returns the dashboard counts, rank distribution and most recent staff.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn get_dashboard_summary(state: *mut DirectoryState) -> *const c_char {
    let state = match unsafe { state.as_ref() } {
        Some(s) => s,
        None => return bad_request("Null state pointer passed to get_dashboard_summary"),
    };

    response_to_c_string(&AppResponse::json(&state.dashboard()))
}

/// Releases a directory created by [`create_directory`].
///
/// The pointer must not be used afterwards. All records are lost.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn close_directory(state: *mut DirectoryState) -> *const c_char {
    if state.is_null() {
        return bad_request("Null state pointer passed to close_directory");
    }

    let state = unsafe { Box::from_raw(state) };
    let released = state.store().len();
    drop(state);
    info!("Directory closed; {} records released", released);
    response_to_c_string(&AppResponse::success("Directory closed successfully"))
}

/// Frees a response string returned by any function of this library.
#[no_mangle]
#[allow(clippy::not_unsafe_ptr_arg_deref)]
pub extern "C" fn free_response(ptr: *const c_char) {
    if ptr.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(ptr as *mut c_char) });
}

fn bad_request(msg: &str) -> *const c_char {
    warn!("{msg}");
    response_to_c_string(&AppResponse::BadRequest(msg.to_string()))
}

/// Serializes an [`AppResponse`] into a heap C string owned by the caller.
///
/// Returns null if serialization or C string creation fails.
fn response_to_c_string(response: &AppResponse) -> *const c_char {
    let json = match serde_json::to_string(response) {
        Ok(j) => j,
        Err(e) => {
            warn!("Error serializing response: {e}");
            return std::ptr::null();
        }
    };

    match CString::new(json) {
        Ok(c_str) => c_str.into_raw(),
        Err(e) => {
            warn!("Error creating CString: {e}");
            std::ptr::null()
        }
    }
}

/// Converts a C string pointer to a Rust `String`.
///
/// On failure the `Err` carries a ready-to-return `BadRequest` response.
fn c_ptr_to_string(ptr: *const c_char, field_name: &str) -> Result<String, *const c_char> {
    if ptr.is_null() {
        return Err(bad_request(&format!("Null {field_name} pointer")));
    }

    match unsafe { CStr::from_ptr(ptr).to_str() } {
        Ok(s) => Ok(s.to_string()),
        Err(e) => {
            let error = AppResponse::BadRequest(format!("Invalid UTF-8 in {field_name}: {e}"));
            Err(response_to_c_string(&error))
        }
    }
}
