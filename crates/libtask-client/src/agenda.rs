//! Agenda Utilities
//!
//! Helper functions for the task list and calendar views.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::{Task, TaskStatus};

pub const NO_DUE_DATE_LABEL: &str = "No due date";

/// Tasks sharing one due day, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub day: Option<NaiveDate>,
    pub label: String,
    pub tasks: Vec<Task>,
}

/// Case-insensitive search over id, title and description, optionally
/// narrowed to one status.
pub fn filter_tasks(tasks: &[Task], query: &str, status: Option<&TaskStatus>) -> Vec<Task> {
    let needle = query.trim().to_lowercase();
    tasks
        .iter()
        .filter(|task| status.map_or(true, |s| task.status.as_ref() == Some(s)))
        .filter(|task| {
            needle.is_empty()
                || task.id.to_lowercase().contains(&needle)
                || task.title.to_lowercase().contains(&needle)
                || task
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// "Tuesday - February 3, 2026"
pub fn day_label(day: NaiveDate) -> String {
    day.format("%A - %B %-d, %Y").to_string()
}

/// Group by due day ascending; undated tasks come last.
pub fn group_by_due_day(tasks: &[Task]) -> Vec<DayGroup> {
    let mut dated: BTreeMap<NaiveDate, Vec<Task>> = BTreeMap::new();
    let mut undated = Vec::new();
    for task in tasks {
        match task.due_date {
            Some(day) => dated.entry(day).or_default().push(task.clone()),
            None => undated.push(task.clone()),
        }
    }

    let mut groups: Vec<DayGroup> = dated
        .into_iter()
        .map(|(day, tasks)| DayGroup {
            day: Some(day),
            label: day_label(day),
            tasks,
        })
        .collect();
    if !undated.is_empty() {
        groups.push(DayGroup {
            day: None,
            label: NO_DUE_DATE_LABEL.to_string(),
            tasks: undated,
        });
    }
    groups
}

pub fn tasks_due_on(tasks: &[Task], day: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.due_date == Some(day))
        .cloned()
        .collect()
}

/// Calendar cells for a month, Sunday-first weeks.
/// Leading and trailing padding cells are `None`.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let lead = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
    let mut day = first;
    while day.month() == month {
        cells.push(Some(day));
        day += Duration::days(1);
    }
    while cells.len() % 7 != 0 {
        cells.push(None);
    }
    cells
}

/// `(year, month)` shifted by `delta` months
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + delta;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, title: &str, status: &str, due: Option<(u32, u32)>) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: Some(format!("Notes for {}", title)),
            assigned_to: "staff-1".to_string(),
            due_date: due.and_then(|(m, d)| NaiveDate::from_ymd_opt(2026, m, d)),
            status: Some(TaskStatus::parse(status)),
            created_by: None,
            created_at: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_filter_tasks() {
        let tasks = vec![
            make_task(1, "Shelve returns", "assigned", Some((2, 6))),
            make_task(2, "Catalogue donations", "completed", Some((2, 3))),
            make_task(3, "Repair SHELF labels", "in_progress", None),
        ];

        let hits = filter_tasks(&tasks, "shel", None);
        assert_eq!(hits.len(), 2);

        let hits = filter_tasks(&tasks, "shel", Some(&TaskStatus::InProgress));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");

        // description and id are searched too
        assert_eq!(filter_tasks(&tasks, "notes for catalogue", None).len(), 1);
        assert_eq!(filter_tasks(&tasks, "2", None)[0].id, "2");
        assert_eq!(filter_tasks(&tasks, "  ", None).len(), 3);
    }

    #[test]
    fn test_group_by_due_day() {
        let tasks = vec![
            make_task(1, "A", "assigned", Some((2, 6))),
            make_task(2, "B", "assigned", None),
            make_task(3, "C", "assigned", Some((2, 3))),
            make_task(4, "D", "assigned", Some((2, 6))),
        ];

        let groups = group_by_due_day(&tasks);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].label, "Tuesday - February 3, 2026");
        assert_eq!(groups[1].tasks.len(), 2);
        assert_eq!(groups[2].day, None);
        assert_eq!(groups[2].label, NO_DUE_DATE_LABEL);
    }

    #[test]
    fn test_month_grid() {
        // February 2026 starts on a Sunday and has 28 days
        let grid = month_grid(2026, 2);
        assert_eq!(grid.len(), 28);
        assert_eq!(grid[0], NaiveDate::from_ymd_opt(2026, 2, 1));

        // March 2026 starts on a Sunday too; 31 days pad to 35 cells
        let grid = month_grid(2026, 3);
        assert_eq!(grid.len(), 35);
        assert_eq!(grid[34], None);

        // January 2026 starts on a Thursday
        let grid = month_grid(2026, 1);
        assert_eq!(&grid[..4], &[None, None, None, None]);
        assert_eq!(grid[4], NaiveDate::from_ymd_opt(2026, 1, 1));

        assert!(month_grid(2026, 13).is_empty());
    }

    #[test]
    fn test_shift_month() {
        assert_eq!(shift_month(2026, 1, -1), (2025, 12));
        assert_eq!(shift_month(2026, 12, 1), (2027, 1));
        assert_eq!(shift_month(2026, 2, 0), (2026, 2));
    }
}
