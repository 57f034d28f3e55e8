//! Report Aggregation
//!
//! Local equivalents of the `/reports/*` endpoints. Every summary splits
//! tasks into open and closed with the same rule (`TaskStatus::is_closed`),
//! so `open + closed == total` for every row.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::Utc;

use crate::api::ReportBundle;
use crate::domain::{
    ReportFilters, StaffSummary, StaffSummaryRow, StatusCount, TagSummary, TagSummaryRow, Task,
    TaskStatus, TasksSummary, CANONICAL_STATUSES,
};

fn generated_at() -> String {
    Utc::now().to_rfc3339()
}

/// Whether a task falls in the window, judged by its creation day.
///
/// With any bound set, tasks without a creation date are left out.
pub fn in_window(task: &Task, filters: &ReportFilters) -> bool {
    if filters.is_unbounded() {
        return true;
    }
    task.created_on().is_some_and(|day| filters.contains(day))
}

fn windowed<'a>(tasks: &'a [Task], filters: &'a ReportFilters) -> impl Iterator<Item = &'a Task> {
    tasks.iter().filter(move |task| in_window(task, filters))
}

pub fn summarize_tasks(tasks: &[Task], filters: &ReportFilters) -> TasksSummary {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut closed_tasks = 0;

    for task in windowed(tasks, filters) {
        let label = TaskStatus::label_of(task.status.as_ref()).to_string();
        *counts.entry(label).or_default() += 1;
        if task.is_closed() {
            closed_tasks += 1;
        }
    }

    // Canonical statuses always appear, in order; anything else follows alphabetically.
    let mut by_status: Vec<StatusCount> = CANONICAL_STATUSES
        .iter()
        .map(|status| StatusCount {
            label: status.as_str().to_string(),
            count: counts.remove(status.as_str()).unwrap_or(0),
        })
        .collect();
    by_status.extend(
        counts
            .into_iter()
            .map(|(label, count)| StatusCount { label, count }),
    );

    let total_tasks: u64 = by_status.iter().map(|row| row.count).sum();

    TasksSummary {
        generated_at: generated_at(),
        filters: *filters,
        total_tasks,
        open_tasks: total_tasks - closed_tasks,
        closed_tasks,
        by_status,
    }
}

/// Per-assignee counts. Unassigned tasks are skipped, so the rows need not
/// add up to the global total.
pub fn summarize_by_staff(tasks: &[Task], filters: &ReportFilters) -> StaffSummary {
    let mut rows: HashMap<&str, StaffSummaryRow> = HashMap::new();

    for task in windowed(tasks, filters) {
        let staff_id = task.assigned_to.trim();
        if staff_id.is_empty() {
            continue;
        }
        let row = rows.entry(staff_id).or_insert_with(|| StaffSummaryRow {
            staff_id: staff_id.to_string(),
            total_tasks: 0,
            open_tasks: 0,
            closed_tasks: 0,
        });
        row.total_tasks += 1;
        if task.is_closed() {
            row.closed_tasks += 1;
        } else {
            row.open_tasks += 1;
        }
    }

    let mut items: Vec<StaffSummaryRow> = rows.into_values().collect();
    items.sort_by(|a, b| {
        b.total_tasks
            .cmp(&a.total_tasks)
            .then_with(|| a.staff_id.cmp(&b.staff_id))
    });

    StaffSummary {
        generated_at: generated_at(),
        filters: *filters,
        items,
    }
}

/// Number of tasks carrying each tag. A tag repeated on one task counts once.
pub fn summarize_by_tag(tasks: &[Task], filters: &ReportFilters) -> TagSummary {
    let mut counts: HashMap<&str, u64> = HashMap::new();

    for task in windowed(tasks, filters) {
        let distinct: BTreeSet<&str> = task
            .tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .collect();
        for tag in distinct {
            *counts.entry(tag).or_default() += 1;
        }
    }

    let mut items: Vec<TagSummaryRow> = counts
        .into_iter()
        .map(|(tag, total_tasks)| TagSummaryRow {
            tag: tag.to_string(),
            total_tasks,
        })
        .collect();
    items.sort_by(|a, b| b.total_tasks.cmp(&a.total_tasks).then_with(|| a.tag.cmp(&b.tag)));

    TagSummary {
        generated_at: generated_at(),
        filters: *filters,
        items,
    }
}

/// All three summaries for one window
pub fn summarize_all(tasks: &[Task], filters: ReportFilters) -> ReportBundle {
    ReportBundle {
        filters,
        tasks: summarize_tasks(tasks, &filters),
        staff: summarize_by_staff(tasks, &filters),
        tags: summarize_by_tag(tasks, &filters),
    }
}
