pub mod applications;
pub mod connection;
pub mod status;

pub use status::{
    correction_required_statuses, is_correction_required_status, WorkflowStatus,
    CORRECTION_REQUIRED_STATUSES,
};
