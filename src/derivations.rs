//! Pure read-only computations over a record collection: search filtering,
//! pagination and the dashboard aggregates.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app_response::AppResponse;
use crate::staff_model::{StaffRecord, StaffStatus};

/// Status selector of the staff list: everything, or one exact status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(StaffStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: StaffStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AppResponse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => write!(f, "{status}"),
        }
    }
}

impl Serialize for StatusFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Records whose name, rank, state command or service number contains
/// `search_term` (case-insensitive) and whose status passes `status_filter`.
/// Input order is preserved.
pub fn filter<'a>(
    records: &'a [StaffRecord],
    search_term: &str,
    status_filter: &StatusFilter,
) -> Vec<&'a StaffRecord> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| status_filter.matches(record.status) && matches_search(record, &needle))
        .collect()
}

fn matches_search(record: &StaffRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        record.name.as_str(),
        record.rank.title(),
        record.state_command.as_str(),
        record.service_number.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// One page of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based position of the first item shown; 0 for an empty page.
    pub first_index: usize,
    /// 1-based position of the last item shown; 0 for an empty page.
    pub last_index: usize,
}

/// Returns the 1-indexed `page` of `items`. An out-of-range page, including
/// page 0, is empty rather than an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    let page_items: Vec<T> = if page == 0 || page > total_pages {
        Vec::new()
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total_items);
        items[start..end].to_vec()
    };

    let (first_index, last_index) = if page_items.is_empty() {
        (0, 0)
    } else {
        let start = (page - 1) * page_size;
        (start + 1, start + page_items.len())
    };

    Page {
        items: page_items,
        page,
        page_size,
        total_pages,
        total_items,
        first_index,
        last_index,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCounts {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
    pub near_retirement: usize,
}

pub fn aggregate_counts(records: &[StaffRecord]) -> StaffCounts {
    records.iter().fold(
        StaffCounts {
            total: records.len(),
            ..StaffCounts::default()
        },
        |mut counts, record| {
            match record.status {
                StaffStatus::Active => counts.active += 1,
                StaffStatus::OnLeave => counts.on_leave += 1,
                StaffStatus::RetiredSoon => counts.near_retirement += 1,
            }
            counts
        },
    )
}

/// Coarse seniority class derived from a rank title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RankGroup {
    #[serde(rename = "Senior Officers")]
    Senior,
    #[serde(rename = "Mid-Level Officers")]
    MidLevel,
    #[serde(rename = "Junior Officers")]
    Junior,
}

impl RankGroup {
    pub fn label(&self) -> &'static str {
        match self {
            RankGroup::Senior => "Senior Officers",
            RankGroup::MidLevel => "Mid-Level Officers",
            RankGroup::Junior => "Junior Officers",
        }
    }

    pub fn classify(rank_title: &str) -> RankGroup {
        let comptroller = rank_title.contains("Comptroller");
        let superintendent = rank_title.contains("Superintendent");
        if comptroller && !superintendent {
            RankGroup::Senior
        } else if superintendent {
            RankGroup::MidLevel
        } else {
            RankGroup::Junior
        }
    }
}

impl Display for RankGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Head count per rank group. Groups with no members are absent.
pub fn rank_groups(records: &[StaffRecord]) -> BTreeMap<RankGroup, usize> {
    let mut groups = BTreeMap::new();
    for record in records {
        *groups.entry(RankGroup::classify(record.rank.title())).or_insert(0) += 1;
    }
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankShare {
    pub group: RankGroup,
    pub count: usize,
    /// Rounded share of the whole collection, 0..=100.
    pub percent: u32,
}

pub fn rank_distribution(records: &[StaffRecord]) -> Vec<RankShare> {
    let total = records.len();
    rank_groups(records)
        .into_iter()
        .map(|(group, count)| RankShare {
            group,
            count,
            percent: percent_of(count, total),
        })
        .collect()
}

fn percent_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

/// The last `count` records, newest first.
pub fn recent_staff(records: &[StaffRecord], count: usize) -> Vec<&StaffRecord> {
    records.iter().rev().take(count).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub counts: StaffCounts,
    pub rank_distribution: Vec<RankShare>,
    pub recent_staff: Vec<StaffRecord>,
}

pub fn dashboard_summary(records: &[StaffRecord], recent_count: usize) -> DashboardSummary {
    DashboardSummary {
        counts: aggregate_counts(records),
        rank_distribution: rank_distribution(records),
        recent_staff: recent_staff(records, recent_count).into_iter().cloned().collect(),
    }
}
