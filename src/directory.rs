use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::app_response::AppResponse;
use crate::config::DirectoryConfig;
use crate::derivations::{self, DashboardSummary, Page, StatusFilter};
use crate::query::StaffQueries;
use crate::staff_model::StaffRecord;
use crate::staff_store::StaffStore;

/// A store together with the settings the UI layer reads from.
///
/// This is the object handed to the UI host (directly, or as an opaque
/// pointer through the C ABI). Each instance owns an independent roster.
pub struct DirectoryState {
    store: Arc<StaffStore>,
    config: DirectoryConfig,
}

impl DirectoryState {
    /// Validates `config` and builds a directory over a generated roster.
    pub fn init(config: DirectoryConfig) -> Result<Self, AppResponse> {
        config.validate()?;
        let store = Arc::new(StaffStore::init(&config));
        Ok(Self { store, config })
    }

    pub fn with_store(store: Arc<StaffStore>, config: DirectoryConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Arc<StaffStore> {
        &self.store
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    pub fn queries(&self) -> StaffQueries {
        StaffQueries::new(Arc::clone(&self.store), self.config.query_latency())
    }

    /// Filters the current roster and returns the requested page.
    pub fn list_page(&self, request: &ListRequest) -> Page<StaffRecord> {
        let records = self.store.list();
        let filtered: Vec<StaffRecord> = derivations::filter(&records, &request.search_term, &request.status_filter)
            .into_iter()
            .cloned()
            .collect();
        let page_size = request.page_size.unwrap_or(self.config.page_size);
        derivations::paginate(&filtered, request.page, page_size)
    }

    pub fn dashboard(&self) -> DashboardSummary {
        derivations::dashboard_summary(&self.store.list(), self.config.recent_count)
    }
}

/// Search, status and page state of the staff list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListRequest {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub page: usize,
    /// Falls back to the configured page size.
    pub page_size: Option<usize>,
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filter: StatusFilter::All,
            page: 1,
            page_size: None,
        }
    }
}
