//! Read-only aggregate shapes for the dashboard and report endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Case;

/// Headline counts plus recent context for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub customers: CustomerTotals,
    pub cases: CaseTotals,
    pub engagements: EngagementTotals,
    /// Cases with a hearing in the next 30 days, soonest first.
    pub upcoming_hearings: Vec<Case>,
    pub cases_by_status: Vec<StatusCount>,
    /// Most recently created rows across customers, cases, and engagements.
    pub recent_activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerTotals {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseTotals {
    pub total: i64,
    pub active: i64,
    pub closed: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementTotals {
    pub total: i64,
    pub this_month: i64,
}

/// Count of cases grouped by status string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub case_status: String,
    pub count: i64,
}

/// One recently created entity, identified by its business id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    /// "customer", "case", or "engagement".
    pub kind: String,
    pub ref_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Filters for the case report. All are optional and combine with AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseReportQuery {
    /// Inclusive start of the filing-date range.
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of the filing-date range.
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub attorney: Option<Uuid>,
    pub case_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    pub cases: Vec<CaseReportRow>,
    pub summary: Vec<CaseStatusSummary>,
    pub attorney_workload: Vec<AttorneyWorkload>,
}

/// One case in the report, enriched with customer and attorney context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReportRow {
    pub id: Uuid,
    pub case_id: String,
    pub case_title: String,
    pub case_type: String,
    pub case_status: String,
    pub filing_date: Option<NaiveDate>,
    pub hearing_date: Option<NaiveDate>,
    pub court_name: String,
    pub customer_name: Option<String>,
    pub industry_type: Option<String>,
    pub attorney_name: Option<String>,
    /// Engagements recorded for the case's customer.
    pub engagement_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStatusSummary {
    pub case_status: String,
    pub count: i64,
    pub with_hearings: i64,
}

/// Per-attorney case load, busiest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttorneyWorkload {
    pub id: Uuid,
    pub name: String,
    pub total_cases: i64,
    pub active_cases: i64,
}

/// Filters for the engagement report. All are optional and combine with AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngagementReportQuery {
    /// Inclusive start of the engagement-date range.
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of the engagement-date range.
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub engagement_type: Option<String>,
    pub channel: Option<String>,
    pub client: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementReport {
    pub engagements: Vec<EngagementReportRow>,
    pub summary_by_type: Vec<NameCount>,
    pub summary_by_channel: Vec<NameCount>,
    /// Outcome summary; rows with an empty outcome are excluded.
    pub summary_by_outcome: Vec<NameCount>,
    pub top_clients: Vec<TopClient>,
}

/// One engagement in the report, enriched with customer and recorder context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementReportRow {
    pub id: Uuid,
    pub engagement_id: String,
    pub engagement_type: String,
    pub engagement_channel: String,
    pub engagement_date: NaiveDate,
    pub engagement_outcome: String,
    pub customer_name: Option<String>,
    pub industry_type: Option<String>,
    pub recorder_name: Option<String>,
}

/// Generic label/count pair for grouped summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: i64,
}

/// Customer ranked by engagement volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopClient {
    pub id: Uuid,
    pub customer_name: String,
    pub engagement_count: i64,
}
