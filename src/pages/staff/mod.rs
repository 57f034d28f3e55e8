//! Staff Area

mod dashboard;
mod task_detail;
mod tasks;

pub use dashboard::StaffDashboard;
pub use task_detail::StaffTaskDetail;
pub use tasks::StaffTasks;

use crate::components::NavLink;

pub const STAFF_LINKS: &[NavLink] = &[
    ("/staff/dashboard", "Dashboard"),
    ("/staff/tasks", "My tasks"),
];
