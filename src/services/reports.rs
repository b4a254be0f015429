use std::sync::Arc;

use crate::{
    db::{DbPool, DbResult},
    models::{
        CaseReport, CaseReportQuery, DashboardStats, EngagementReport, EngagementReportQuery,
    },
};

/// Service layer for the read-only reporting views. Nothing here writes to
/// the audit trail.
#[derive(Clone)]
pub struct ReportService {
    db: Arc<DbPool>,
}

impl ReportService {
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    pub async fn dashboard_stats(&self) -> DbResult<DashboardStats> {
        self.db.reports().dashboard_stats().await
    }

    pub async fn case_report(&self, query: CaseReportQuery) -> DbResult<CaseReport> {
        self.db.reports().case_report(query).await
    }

    pub async fn engagement_report(
        &self,
        query: EngagementReportQuery,
    ) -> DbResult<EngagementReport> {
        self.db.reports().engagement_report(query).await
    }
}
