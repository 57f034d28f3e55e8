//! Reports
//!
//! Summaries over the task collection, the per-staff pie breakdown, and
//! sequencing for report reloads.

mod aggregate;
mod pie;
mod sequence;

pub use aggregate::{in_window, summarize_all, summarize_by_staff, summarize_by_tag, summarize_tasks};
pub use pie::{PieChart, PieSlice, EMPTY_COLOR, NO_DATA_LABEL, PIE_PALETTE, SELECT_STAFF_LABEL};
pub use sequence::{RequestSequence, Ticket};
