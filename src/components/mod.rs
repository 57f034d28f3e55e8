//! UI Components
//!
//! Reusable Leptos components.

mod area_layout;
mod error_banner;
mod new_task_form;
mod pie_breakdown;
mod require_role;
mod status_history;
mod status_selector;
mod task_card;

pub use area_layout::{AreaLayout, NavLink};
pub use error_banner::ErrorBanner;
pub use new_task_form::NewTaskForm;
pub use pie_breakdown::PieBreakdown;
pub use require_role::{replace_history, RequireRole};
pub use status_history::StatusHistory;
pub use status_selector::StatusSelector;
pub use task_card::TaskCard;
