//! Report Endpoints

use futures::try_join;

use super::{query_string, ApiClient};
use crate::domain::{ReportFilters, StaffSummary, TagSummary, TasksSummary};
use crate::error::ApiResult;

/// The three summaries for one filter window, assigned to view state together
#[derive(Debug, Clone, PartialEq)]
pub struct ReportBundle {
    pub filters: ReportFilters,
    pub tasks: TasksSummary,
    pub staff: StaffSummary,
    pub tags: TagSummary,
}

fn report_query(filters: &ReportFilters) -> String {
    let day = |d: Option<chrono::NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string());
    query_string(&[
        ("start_date", day(filters.start_date)),
        ("end_date", day(filters.end_date)),
    ])
}

impl ApiClient {
    /// `GET /reports/tasks-summary`
    pub async fn tasks_summary(&self, filters: &ReportFilters) -> ApiResult<TasksSummary> {
        self.get(&format!("/reports/tasks-summary{}", report_query(filters)))
            .await
    }

    /// `GET /reports/staff-summary`
    pub async fn staff_summary(&self, filters: &ReportFilters) -> ApiResult<StaffSummary> {
        self.get(&format!("/reports/staff-summary{}", report_query(filters)))
            .await
    }

    /// `GET /reports/tag-summary`
    pub async fn tag_summary(&self, filters: &ReportFilters) -> ApiResult<TagSummary> {
        self.get(&format!("/reports/tag-summary{}", report_query(filters)))
            .await
    }

    /// Fetch all three summaries concurrently; any failure fails the bundle.
    pub async fn load_reports(&self, filters: ReportFilters) -> ApiResult<ReportBundle> {
        let (tasks, staff, tags) = try_join!(
            self.tasks_summary(&filters),
            self.staff_summary(&filters),
            self.tag_summary(&filters)
        )?;
        Ok(ReportBundle {
            filters,
            tasks,
            staff,
            tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_report_query() {
        assert_eq!(report_query(&ReportFilters::default()), "");
        let filters = ReportFilters::new(NaiveDate::from_ymd_opt(2026, 2, 1), None);
        assert_eq!(report_query(&filters), "?start_date=2026-02-01");
        let filters = ReportFilters::new(
            NaiveDate::from_ymd_opt(2026, 2, 1),
            NaiveDate::from_ymd_opt(2026, 2, 28),
        );
        assert_eq!(
            report_query(&filters),
            "?start_date=2026-02-01&end_date=2026-02-28"
        );
    }
}
