//! Pie Breakdown
//!
//! Percentages and a CSS `conic-gradient` for the per-staff open/closed
//! chart. A zero total is its own state and never reaches a division.

use crate::domain::StaffSummary;

pub const PIE_PALETTE: [&str; 5] = ["#60a5fa", "#34d399", "#fbbf24", "#f87171", "#a78bfa"];
pub const EMPTY_COLOR: &str = "#e5e7eb";

pub const SELECT_STAFF_LABEL: &str = "Select staff";
pub const NO_DATA_LABEL: &str = "No data";

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    pub percent: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PieChart {
    /// Nothing to draw; `label` says why.
    Empty { label: String },
    Slices { total: u64, slices: Vec<PieSlice> },
}

impl PieChart {
    /// Build from labelled values; an all-zero input is `Empty(NO_DATA_LABEL)`.
    pub fn from_values(values: &[(&str, u64)]) -> Self {
        let total: u64 = values.iter().map(|(_, value)| value).sum();
        if total == 0 {
            return PieChart::Empty {
                label: NO_DATA_LABEL.to_string(),
            };
        }

        let slices = values
            .iter()
            .enumerate()
            .map(|(i, (label, value))| PieSlice {
                label: label.to_string(),
                value: *value,
                percent: *value as f64 * 100.0 / total as f64,
                color: PIE_PALETTE[i % PIE_PALETTE.len()],
            })
            .collect();
        PieChart::Slices { total, slices }
    }

    /// Open vs closed for the selected staff member.
    pub fn for_staff(selected: Option<&str>, summary: Option<&StaffSummary>) -> Self {
        let Some(staff_id) = selected.filter(|id| !id.is_empty()) else {
            return PieChart::Empty {
                label: SELECT_STAFF_LABEL.to_string(),
            };
        };
        match summary.and_then(|s| s.row(staff_id)) {
            Some(row) => {
                PieChart::from_values(&[("Open", row.open_tasks), ("Closed", row.closed_tasks)])
            }
            None => PieChart::Empty {
                label: NO_DATA_LABEL.to_string(),
            },
        }
    }

    pub fn total(&self) -> u64 {
        match self {
            PieChart::Empty { .. } => 0,
            PieChart::Slices { total, .. } => *total,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PieChart::Empty { .. })
    }

    pub fn slices(&self) -> &[PieSlice] {
        match self {
            PieChart::Empty { .. } => &[],
            PieChart::Slices { slices, .. } => slices,
        }
    }

    /// CSS background for the chart disc
    pub fn gradient(&self) -> String {
        let PieChart::Slices { total, slices } = self else {
            return format!("conic-gradient({} 0 100%)", EMPTY_COLOR);
        };

        let mut running = 0u64;
        let stops: Vec<String> = slices
            .iter()
            .map(|slice| {
                let start = running as f64 * 100.0 / *total as f64;
                running += slice.value;
                let end = running as f64 * 100.0 / *total as f64;
                format!("{} {:.2}% {:.2}%", slice.color, start, end)
            })
            .collect();
        format!("conic-gradient({})", stops.join(", "))
    }
}
