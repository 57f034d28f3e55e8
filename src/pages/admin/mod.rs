//! Admin Area

mod audit_trail;
mod calendar;
mod create_task;
mod dashboard;
mod reports;
mod tasks;

pub use audit_trail::AuditTrail;
pub use calendar::AdminCalendar;
pub use create_task::CreateTaskPage;
pub use dashboard::AdminDashboard;
pub use reports::ReportsPage;
pub use tasks::AdminTasks;

use crate::components::NavLink;

pub const ADMIN_LINKS: &[NavLink] = &[
    ("/admin/dashboard", "Dashboard"),
    ("/admin/tasks", "Tasks"),
    ("/admin/create-tasks", "Create tasks"),
    ("/admin/calendar", "Calendar"),
    ("/admin/audit-trail", "Audit trail"),
    ("/admin/reports", "Reports"),
];
