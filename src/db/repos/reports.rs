use async_trait::async_trait;

use crate::{
    db::error::DbResult,
    models::{
        CaseReport, CaseReportQuery, DashboardStats, EngagementReport, EngagementReportQuery,
    },
};

/// Read-only grouped and summarized views over the entity stores. Nothing
/// here writes, and nothing here touches the audit trail.
#[async_trait]
pub trait ReportsRepo: Send + Sync {
    /// Headline counts, upcoming hearings, and recent activity for the
    /// dashboard.
    async fn dashboard_stats(&self) -> DbResult<DashboardStats>;

    /// Case report rows plus status summary and per-attorney workload.
    async fn case_report(&self, query: CaseReportQuery) -> DbResult<CaseReport>;

    /// Engagement report rows plus type/channel/outcome summaries and top
    /// clients.
    async fn engagement_report(&self, query: EngagementReportQuery)
    -> DbResult<EngagementReport>;
}
