//! Domain Layer
//!
//! Entities exchanged with the LibTask backend and the rules attached to
//! them. Nothing in here performs I/O.

mod entity;
mod role;
mod status;
mod task;
mod staff;
mod tag;
mod profile;
mod report;
pub(crate) mod wire;

pub use entity::{find_by_id, upsert, Entity};
pub use role::Role;
pub use status::{StatusUpdate, TaskStatus, CANONICAL_STATUSES, STATUS_UPDATE_LABELS};
pub use task::{NewTask, Task};
pub use staff::{staff_name, StaffProfile};
pub use tag::Tag;
pub use profile::{LoginResponse, Me};
pub use report::{
    ReportFilters, StaffSummary, StaffSummaryRow, StatusCount, TagSummary, TagSummaryRow,
    TasksSummary,
};
