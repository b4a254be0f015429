mod audit_logs;
mod cases;
mod common;
mod customers;
mod documents;
mod engagements;
mod reports;
mod users;

pub use audit_logs::SqliteAuditLogRepo;
pub use cases::SqliteCaseRepo;
pub use customers::SqliteCustomerRepo;
pub use documents::SqliteDocumentRepo;
pub use engagements::SqliteEngagementRepo;
pub use reports::SqliteReportsRepo;
pub use users::SqliteUserRepo;
