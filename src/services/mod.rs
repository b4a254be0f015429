mod audit_logs;
mod cases;
mod customers;
mod documents;
mod engagements;
mod reports;
mod users;

use std::sync::Arc;

pub use audit_logs::AuditLogService;
pub use cases::CaseService;
pub use customers::CustomerService;
pub use documents::DocumentService;
pub use engagements::EngagementService;
pub use reports::ReportService;
pub use users::UserService;

use crate::db::DbPool;

/// Container for all services.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub customers: CustomerService,
    pub cases: CaseService,
    pub engagements: EngagementService,
    pub documents: DocumentService,
    pub audit_logs: AuditLogService,
    pub reports: ReportService,
}

impl Services {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self {
            users: UserService::new(db.clone()),
            customers: CustomerService::new(db.clone()),
            cases: CaseService::new(db.clone()),
            engagements: EngagementService::new(db.clone()),
            documents: DocumentService::new(db.clone()),
            audit_logs: AuditLogService::new(db.clone()),
            reports: ReportService::new(db),
        }
    }
}
