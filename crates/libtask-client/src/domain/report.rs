//! Report Payloads
//!
//! Shapes of the `/reports/*` responses. The same types are produced by the
//! local aggregator in `crate::reports`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::wire;

/// Date window echoed back by every report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilters {
    #[serde(default, with = "wire::calendar_day")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "wire::calendar_day")]
    pub end_date: Option<NaiveDate>,
}

impl ReportFilters {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self { start_date, end_date }
    }

    /// Inclusive on both bounds; a missing bound is open on that side.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start_date.map_or(true, |start| day >= start)
            && self.end_date.map_or(true, |end| day <= end)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksSummary {
    pub generated_at: String,
    #[serde(default)]
    pub filters: ReportFilters,
    pub total_tasks: u64,
    pub open_tasks: u64,
    pub closed_tasks: u64,
    #[serde(default)]
    pub by_status: Vec<StatusCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffSummaryRow {
    pub staff_id: String,
    pub total_tasks: u64,
    pub open_tasks: u64,
    pub closed_tasks: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffSummary {
    pub generated_at: String,
    #[serde(default)]
    pub filters: ReportFilters,
    #[serde(default)]
    pub items: Vec<StaffSummaryRow>,
}

impl StaffSummary {
    pub fn row(&self, staff_id: &str) -> Option<&StaffSummaryRow> {
        self.items.iter().find(|row| row.staff_id == staff_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSummaryRow {
    pub tag: String,
    pub total_tasks: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagSummary {
    pub generated_at: String,
    #[serde(default)]
    pub filters: ReportFilters,
    #[serde(default)]
    pub items: Vec<TagSummaryRow>,
}
