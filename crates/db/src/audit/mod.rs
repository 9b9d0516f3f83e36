pub mod models;
pub mod recorder;

pub use models::{AuditAction, AuditEntity};
pub use recorder::record;
