//! Aggregate queries backing the dashboard and report endpoints.
//!
//! All reads; the audit trail is never touched from here.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use super::{cases::case_from_row, common::parse_uuid};
use crate::{
    db::{error::DbResult, repos::ReportsRepo},
    models::{
        ActivityItem, AttorneyWorkload, CaseReport, CaseReportQuery, CaseReportRow,
        CaseStatusSummary, CaseTotals, CustomerTotals, DashboardStats, EngagementReport,
        EngagementReportQuery, EngagementReportRow, EngagementTotals, NameCount, StatusCount,
        TopClient,
    },
};

/// Hearings horizon for the dashboard, in days.
const UPCOMING_HEARING_DAYS: &str = "+30 days";

/// Row caps for the dashboard context lists.
const UPCOMING_HEARINGS_LIMIT: i64 = 10;
const RECENT_ACTIVITY_LIMIT: i64 = 10;

/// Row cap for the top-clients ranking.
const TOP_CLIENTS_LIMIT: i64 = 10;

pub struct SqliteReportsRepo {
    pool: SqlitePool,
}

impl SqliteReportsRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn scalar(&self, sql: &str) -> DbResult<i64> {
        let row = sqlx::query(sql).fetch_one(&self.pool).await?;
        Ok(row.get::<i64, _>("count"))
    }
}

#[async_trait]
impl ReportsRepo for SqliteReportsRepo {
    async fn dashboard_stats(&self) -> DbResult<DashboardStats> {
        let total_customers = self
            .scalar("SELECT COUNT(*) AS count FROM customers")
            .await?;
        let active_customers = self
            .scalar("SELECT COUNT(*) AS count FROM customers WHERE customer_status = 'Active'")
            .await?;

        let total_cases = self.scalar("SELECT COUNT(*) AS count FROM cases").await?;
        let active_cases = self
            .scalar(
                "SELECT COUNT(*) AS count FROM cases \
                 WHERE case_status IN ('New', 'Open', 'In Progress', 'Pending')",
            )
            .await?;
        let closed_cases = self
            .scalar(
                "SELECT COUNT(*) AS count FROM cases \
                 WHERE case_status IN ('Closed', 'Dismissed')",
            )
            .await?;

        let total_engagements = self
            .scalar("SELECT COUNT(*) AS count FROM client_engagements")
            .await?;
        let this_month_engagements = self
            .scalar(
                "SELECT COUNT(*) AS count FROM client_engagements \
                 WHERE strftime('%Y-%m', engagement_date) = strftime('%Y-%m', 'now')",
            )
            .await?;

        let upcoming_rows = sqlx::query(&format!(
            "SELECT c.id, c.case_id, c.case_title, c.client_id, c.case_type, \
             c.case_status, c.assigned_attorney, c.filing_date, c.court_name, \
             c.hearing_date, c.created_by, c.created_at, c.updated_at, \
             cu.customer_name AS customer_name, u.name AS attorney_name \
             FROM cases c \
             LEFT JOIN customers cu ON c.client_id = cu.id \
             LEFT JOIN users u ON c.assigned_attorney = u.id \
             WHERE c.hearing_date IS NOT NULL \
               AND c.hearing_date >= date('now') \
               AND c.hearing_date <= date('now', '{UPCOMING_HEARING_DAYS}') \
             ORDER BY c.hearing_date ASC \
             LIMIT ?"
        ))
        .bind(UPCOMING_HEARINGS_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        let upcoming_hearings = upcoming_rows
            .iter()
            .map(case_from_row)
            .collect::<DbResult<Vec<_>>>()?;

        let status_rows = sqlx::query(
            "SELECT case_status, COUNT(*) AS count FROM cases \
             GROUP BY case_status ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        let cases_by_status = status_rows
            .iter()
            .map(|row| StatusCount {
                case_status: row.get("case_status"),
                count: row.get("count"),
            })
            .collect();

        let activity_rows = sqlx::query(
            "SELECT kind, ref_id, title, created_at FROM ( \
                 SELECT 'customer' AS kind, customer_id AS ref_id, \
                        customer_name AS title, created_at FROM customers \
                 UNION ALL \
                 SELECT 'case', case_id, case_title, created_at FROM cases \
                 UNION ALL \
                 SELECT 'engagement', engagement_id, engagement_type, created_at \
                 FROM client_engagements \
             ) \
             ORDER BY created_at DESC \
             LIMIT ?",
        )
        .bind(RECENT_ACTIVITY_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        let recent_activity = activity_rows
            .iter()
            .map(|row| ActivityItem {
                kind: row.get("kind"),
                ref_id: row.get("ref_id"),
                title: row.get("title"),
                created_at: row.get("created_at"),
            })
            .collect();

        Ok(DashboardStats {
            customers: CustomerTotals {
                total: total_customers,
                active: active_customers,
                inactive: total_customers - active_customers,
            },
            cases: CaseTotals {
                total: total_cases,
                active: active_cases,
                closed: closed_cases,
            },
            engagements: EngagementTotals {
                total: total_engagements,
                this_month: this_month_engagements,
            },
            upcoming_hearings,
            cases_by_status,
            recent_activity,
        })
    }

    async fn case_report(&self, query: CaseReportQuery) -> DbResult<CaseReport> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(start) = &query.start_date {
            conditions.push("c.filing_date >= ?");
            params.push(start.to_string());
        }
        if let Some(end) = &query.end_date {
            conditions.push("c.filing_date <= ?");
            params.push(end.to_string());
        }
        if let Some(status) = &query.status {
            conditions.push("c.case_status = ?");
            params.push(status.clone());
        }
        if let Some(attorney) = &query.attorney {
            conditions.push("c.assigned_attorney = ?");
            params.push(attorney.to_string());
        }
        if let Some(case_type) = &query.case_type {
            conditions.push("c.case_type = ?");
            params.push(case_type.clone());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT c.id, c.case_id, c.case_title, c.case_type, c.case_status, \
             c.filing_date, c.hearing_date, c.court_name, \
             cu.customer_name AS customer_name, cu.industry_type AS industry_type, \
             u.name AS attorney_name, \
             (SELECT COUNT(*) FROM client_engagements e \
              WHERE e.client_id = c.client_id) AS engagement_count \
             FROM cases c \
             LEFT JOIN customers cu ON c.client_id = cu.id \
             LEFT JOIN users u ON c.assigned_attorney = u.id \
             {where_clause} \
             ORDER BY c.filing_date DESC"
        );

        let mut query_builder = sqlx::query(&sql);
        for param in &params {
            query_builder = query_builder.bind(param);
        }
        let rows = query_builder.fetch_all(&self.pool).await?;
        let cases = rows
            .iter()
            .map(case_report_row)
            .collect::<DbResult<Vec<_>>>()?;

        // The status summary honors only the date-range filters.
        let mut summary_conditions: Vec<&str> = Vec::new();
        let mut summary_params: Vec<String> = Vec::new();
        if let Some(start) = &query.start_date {
            summary_conditions.push("filing_date >= ?");
            summary_params.push(start.to_string());
        }
        if let Some(end) = &query.end_date {
            summary_conditions.push("filing_date <= ?");
            summary_params.push(end.to_string());
        }
        let summary_where = if summary_conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", summary_conditions.join(" AND "))
        };

        let summary_sql = format!(
            "SELECT case_status, COUNT(*) AS count, \
             SUM(CASE WHEN hearing_date IS NOT NULL THEN 1 ELSE 0 END) AS with_hearings \
             FROM cases {summary_where} \
             GROUP BY case_status"
        );
        let mut summary_builder = sqlx::query(&summary_sql);
        for param in &summary_params {
            summary_builder = summary_builder.bind(param);
        }
        let summary = summary_builder
            .fetch_all(&self.pool)
            .await?
            .iter()
            .map(|row| CaseStatusSummary {
                case_status: row.get("case_status"),
                count: row.get("count"),
                with_hearings: row.get::<Option<i64>, _>("with_hearings").unwrap_or(0),
            })
            .collect();

        let workload_rows = sqlx::query(
            "SELECT u.id, u.name, COUNT(c.id) AS total_cases, \
             SUM(CASE WHEN c.case_status NOT IN ('Closed', 'Dismissed') \
                 THEN 1 ELSE 0 END) AS active_cases \
             FROM users u \
             LEFT JOIN cases c ON c.assigned_attorney = u.id \
             WHERE u.role = 'Attorney' \
             GROUP BY u.id, u.name \
             ORDER BY active_cases DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        let attorney_workload = workload_rows
            .iter()
            .map(|row| {
                Ok(AttorneyWorkload {
                    id: parse_uuid(&row.get::<String, _>("id"))?,
                    name: row.get("name"),
                    total_cases: row.get("total_cases"),
                    active_cases: row.get::<Option<i64>, _>("active_cases").unwrap_or(0),
                })
            })
            .collect::<DbResult<Vec<_>>>()?;

        Ok(CaseReport {
            cases,
            summary,
            attorney_workload,
        })
    }

    async fn engagement_report(
        &self,
        query: EngagementReportQuery,
    ) -> DbResult<EngagementReport> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(start) = &query.start_date {
            conditions.push("e.engagement_date >= ?");
            params.push(start.to_string());
        }
        if let Some(end) = &query.end_date {
            conditions.push("e.engagement_date <= ?");
            params.push(end.to_string());
        }
        if let Some(engagement_type) = &query.engagement_type {
            conditions.push("e.engagement_type = ?");
            params.push(engagement_type.clone());
        }
        if let Some(channel) = &query.channel {
            conditions.push("e.engagement_channel = ?");
            params.push(channel.clone());
        }
        if let Some(client) = &query.client {
            conditions.push("e.client_id = ?");
            params.push(client.to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT e.id, e.engagement_id, e.engagement_type, e.engagement_channel, \
             e.engagement_date, e.engagement_outcome, \
             cu.customer_name AS customer_name, cu.industry_type AS industry_type, \
             u.name AS recorder_name \
             FROM client_engagements e \
             LEFT JOIN customers cu ON e.client_id = cu.id \
             LEFT JOIN users u ON e.recorded_by = u.id \
             {where_clause} \
             ORDER BY e.engagement_date DESC, e.created_at DESC"
        );

        let mut query_builder = sqlx::query(&sql);
        for param in &params {
            query_builder = query_builder.bind(param);
        }
        let rows = query_builder.fetch_all(&self.pool).await?;
        let engagements = rows
            .iter()
            .map(engagement_report_row)
            .collect::<DbResult<Vec<_>>>()?;

        // Grouped summaries honor only the date-range filters.
        let mut range_conditions: Vec<String> = Vec::new();
        let mut range_params: Vec<String> = Vec::new();
        if let Some(start) = &query.start_date {
            range_conditions.push("engagement_date >= ?".to_string());
            range_params.push(start.to_string());
        }
        if let Some(end) = &query.end_date {
            range_conditions.push("engagement_date <= ?".to_string());
            range_params.push(end.to_string());
        }

        let summary_by_type = self
            .grouped_counts("engagement_type", &range_conditions, &range_params)
            .await?;
        let summary_by_channel = self
            .grouped_counts("engagement_channel", &range_conditions, &range_params)
            .await?;

        let mut outcome_conditions = range_conditions.clone();
        outcome_conditions.push("engagement_outcome != ''".to_string());
        let summary_by_outcome = self
            .grouped_counts("engagement_outcome", &outcome_conditions, &range_params)
            .await?;

        // Date filters live in the join condition so customers without
        // engagements in range still rank (with a zero count).
        let mut join_extra = String::new();
        let mut top_params: Vec<String> = Vec::new();
        if let Some(start) = &query.start_date {
            join_extra.push_str(" AND e.engagement_date >= ?");
            top_params.push(start.to_string());
        }
        if let Some(end) = &query.end_date {
            join_extra.push_str(" AND e.engagement_date <= ?");
            top_params.push(end.to_string());
        }

        let top_sql = format!(
            "SELECT cu.id, cu.customer_name, COUNT(e.id) AS engagement_count \
             FROM customers cu \
             LEFT JOIN client_engagements e ON e.client_id = cu.id{join_extra} \
             GROUP BY cu.id, cu.customer_name \
             ORDER BY engagement_count DESC \
             LIMIT ?"
        );
        let mut top_builder = sqlx::query(&top_sql);
        for param in &top_params {
            top_builder = top_builder.bind(param);
        }
        top_builder = top_builder.bind(TOP_CLIENTS_LIMIT);
        let top_clients = top_builder
            .fetch_all(&self.pool)
            .await?
            .iter()
            .map(|row| {
                Ok(TopClient {
                    id: parse_uuid(&row.get::<String, _>("id"))?,
                    customer_name: row.get("customer_name"),
                    engagement_count: row.get("engagement_count"),
                })
            })
            .collect::<DbResult<Vec<_>>>()?;

        Ok(EngagementReport {
            engagements,
            summary_by_type,
            summary_by_channel,
            summary_by_outcome,
            top_clients,
        })
    }
}

impl SqliteReportsRepo {
    async fn grouped_counts(
        &self,
        column: &str,
        conditions: &[String],
        params: &[String],
    ) -> DbResult<Vec<NameCount>> {
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT {column} AS name, COUNT(*) AS count \
             FROM client_engagements {where_clause} \
             GROUP BY {column} \
             ORDER BY count DESC"
        );

        let mut query_builder = sqlx::query(&sql);
        for param in params {
            query_builder = query_builder.bind(param);
        }
        let rows = query_builder.fetch_all(&self.pool).await?;

        Ok(rows
            .iter()
            .map(|row| NameCount {
                name: row.get("name"),
                count: row.get("count"),
            })
            .collect())
    }
}

fn case_report_row(row: &SqliteRow) -> DbResult<CaseReportRow> {
    Ok(CaseReportRow {
        id: parse_uuid(&row.get::<String, _>("id"))?,
        case_id: row.get("case_id"),
        case_title: row.get("case_title"),
        case_type: row.get("case_type"),
        case_status: row.get("case_status"),
        filing_date: row.get("filing_date"),
        hearing_date: row.get("hearing_date"),
        court_name: row.get("court_name"),
        customer_name: row.get("customer_name"),
        industry_type: row.get("industry_type"),
        attorney_name: row.get("attorney_name"),
        engagement_count: row.get("engagement_count"),
    })
}

fn engagement_report_row(row: &SqliteRow) -> DbResult<EngagementReportRow> {
    Ok(EngagementReportRow {
        id: parse_uuid(&row.get::<String, _>("id"))?,
        engagement_id: row.get("engagement_id"),
        engagement_type: row.get("engagement_type"),
        engagement_channel: row.get("engagement_channel"),
        engagement_date: row.get("engagement_date"),
        engagement_outcome: row.get("engagement_outcome"),
        customer_name: row.get("customer_name"),
        industry_type: row.get("industry_type"),
        recorder_name: row.get("recorder_name"),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::{
        db::{DbPool, test_pool},
        models::{
            CaseInput, CaseStatus, CustomerInput, CustomerStatus, EngagementChannel,
            EngagementInput, EngagementType, NewUser, Role,
        },
    };

    async fn seed_customer(db: &DbPool, business_id: &str, name: &str) -> Uuid {
        db.customers()
            .create(
                business_id,
                CustomerInput {
                    customer_name: name.to_string(),
                    contact_person: "Contact".to_string(),
                    contact_number: "+1 555 010 0000".to_string(),
                    email_address: "contact@co.example".to_string(),
                    industry_type: "Maritime".to_string(),
                    registration_date: NaiveDate::from_ymd_opt(2023, 1, 1)
                        .expect("valid date"),
                    customer_status: CustomerStatus::Active,
                    address_line: String::new(),
                },
                Uuid::new_v4(),
            )
            .await
            .expect("Failed to seed customer")
            .id
    }

    async fn seed_attorney(db: &DbPool, email: &str, name: &str) -> Uuid {
        db.users()
            .create(NewUser {
                email: email.to_string(),
                name: name.to_string(),
                password_hash: "$argon2id$stub".to_string(),
                role: Role::Attorney,
                customer_id: None,
            })
            .await
            .expect("Failed to seed attorney")
            .id
    }

    async fn seed_case(
        db: &DbPool,
        business_id: &str,
        client_id: Uuid,
        status: CaseStatus,
        attorney: Option<Uuid>,
        hearing_date: Option<NaiveDate>,
    ) {
        db.cases()
            .create(
                business_id,
                CaseInput {
                    case_title: format!("{business_id} title"),
                    client_id,
                    case_type: "Civil".to_string(),
                    case_status: status,
                    assigned_attorney: attorney,
                    filing_date: NaiveDate::from_ymd_opt(2024, 1, 15),
                    court_name: String::new(),
                    hearing_date,
                },
                Uuid::new_v4(),
            )
            .await
            .expect("Failed to seed case");
    }

    async fn seed_engagement(
        db: &DbPool,
        business_id: &str,
        client_id: Uuid,
        engagement_type: EngagementType,
        date: NaiveDate,
    ) {
        db.engagements()
            .create(
                business_id,
                EngagementInput {
                    client_id,
                    engagement_type,
                    engagement_date: date,
                    engagement_outcome: "Resolved".to_string(),
                    contact_person: String::new(),
                    engagement_channel: EngagementChannel::Phone,
                    engagement_notes: String::new(),
                },
                Uuid::new_v4(),
            )
            .await
            .expect("Failed to seed engagement");
    }

    #[tokio::test]
    async fn test_dashboard_counts_and_hearings() {
        let db = test_pool().await;
        let client = seed_customer(&db, "CUST-R1", "Meridian Shipping").await;
        let today = Utc::now().date_naive();

        seed_case(&db, "CASE-R1", client, CaseStatus::Open, None, Some(today + Duration::days(7))).await;
        seed_case(&db, "CASE-R2", client, CaseStatus::Closed, None, None).await;
        seed_case(
            &db,
            "CASE-R3",
            client,
            CaseStatus::Pending,
            None,
            Some(today + Duration::days(90)),
        )
        .await;
        seed_engagement(&db, "ENG-R1", client, EngagementType::Call, today).await;

        let stats = db
            .reports()
            .dashboard_stats()
            .await
            .expect("Stats should succeed");

        assert_eq!(stats.customers.total, 1);
        assert_eq!(stats.customers.active, 1);
        assert_eq!(stats.customers.inactive, 0);
        assert_eq!(stats.cases.total, 3);
        assert_eq!(stats.cases.active, 2);
        assert_eq!(stats.cases.closed, 1);
        assert_eq!(stats.engagements.total, 1);
        assert_eq!(stats.engagements.this_month, 1);

        // Only the hearing within 30 days shows up.
        assert_eq!(stats.upcoming_hearings.len(), 1);
        assert_eq!(stats.upcoming_hearings[0].case_id, "CASE-R1");

        assert!(!stats.cases_by_status.is_empty());
        assert_eq!(stats.recent_activity.len(), 5);
    }

    #[tokio::test]
    async fn test_recent_activity_capped_and_newest_first() {
        let db = test_pool().await;
        let client = seed_customer(&db, "CUST-R2", "Skyline Air").await;

        for i in 0..12 {
            seed_engagement(
                &db,
                &format!("ENG-ACT-{i}"),
                client,
                EngagementType::Email,
                NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            )
            .await;
            tokio::time::sleep(tokio::time::Duration::from_millis(3)).await;
        }

        let stats = db
            .reports()
            .dashboard_stats()
            .await
            .expect("Stats should succeed");
        assert_eq!(stats.recent_activity.len(), 10);
        for pair in stats.recent_activity.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_case_report_rows_and_workload() {
        let db = test_pool().await;
        let client = seed_customer(&db, "CUST-R3", "Meridian Shipping").await;
        let busy = seed_attorney(&db, "busy@firm.example", "Busy Attorney").await;
        let idle = seed_attorney(&db, "idle@firm.example", "Idle Attorney").await;

        seed_case(&db, "CASE-W1", client, CaseStatus::Open, Some(busy), None).await;
        seed_case(&db, "CASE-W2", client, CaseStatus::InProgress, Some(busy), None).await;
        seed_case(&db, "CASE-W3", client, CaseStatus::Closed, Some(busy), None).await;
        seed_engagement(
            &db,
            "ENG-W1",
            client,
            EngagementType::Meeting,
            NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date"),
        )
        .await;

        let report = db
            .reports()
            .case_report(CaseReportQuery::default())
            .await
            .expect("Report should succeed");

        assert_eq!(report.cases.len(), 3);
        assert!(
            report
                .cases
                .iter()
                .all(|c| c.customer_name.as_deref() == Some("Meridian Shipping"))
        );
        assert!(report.cases.iter().all(|c| c.engagement_count == 1));

        let workload: Vec<_> = report
            .attorney_workload
            .iter()
            .map(|w| (w.id, w.total_cases, w.active_cases))
            .collect();
        assert!(workload.contains(&(busy, 3, 2)));
        assert!(workload.contains(&(idle, 0, 0)));
        // Busiest attorney ranks first.
        assert_eq!(report.attorney_workload[0].id, busy);
    }

    #[tokio::test]
    async fn test_case_report_status_filter() {
        let db = test_pool().await;
        let client = seed_customer(&db, "CUST-R4", "Skyline Air").await;

        seed_case(&db, "CASE-F1", client, CaseStatus::Open, None, None).await;
        seed_case(&db, "CASE-F2", client, CaseStatus::Closed, None, None).await;

        let report = db
            .reports()
            .case_report(CaseReportQuery {
                status: Some("Open".to_string()),
                ..Default::default()
            })
            .await
            .expect("Report should succeed");

        assert_eq!(report.cases.len(), 1);
        assert_eq!(report.cases[0].case_id, "CASE-F1");
        // Status summary ignores the status filter.
        assert_eq!(report.summary.len(), 2);
    }

    #[tokio::test]
    async fn test_engagement_report_summaries() {
        let db = test_pool().await;
        let client_a = seed_customer(&db, "CUST-R5", "Meridian Shipping").await;
        let client_b = seed_customer(&db, "CUST-R6", "Skyline Air").await;
        let date = NaiveDate::from_ymd_opt(2024, 4, 10).expect("valid date");

        seed_engagement(&db, "ENG-S1", client_a, EngagementType::Call, date).await;
        seed_engagement(&db, "ENG-S2", client_a, EngagementType::Call, date).await;
        seed_engagement(&db, "ENG-S3", client_b, EngagementType::Meeting, date).await;

        let report = db
            .reports()
            .engagement_report(EngagementReportQuery::default())
            .await
            .expect("Report should succeed");

        assert_eq!(report.engagements.len(), 3);

        let calls = report
            .summary_by_type
            .iter()
            .find(|c| c.name == "Call")
            .expect("Call summary present");
        assert_eq!(calls.count, 2);

        // All seeded engagements share one channel and one outcome.
        assert_eq!(report.summary_by_channel.len(), 1);
        assert_eq!(report.summary_by_outcome.len(), 1);
        assert_eq!(report.summary_by_outcome[0].count, 3);

        assert_eq!(report.top_clients.len(), 2);
        assert_eq!(report.top_clients[0].id, client_a);
        assert_eq!(report.top_clients[0].engagement_count, 2);
    }

    #[tokio::test]
    async fn test_engagement_report_date_range() {
        let db = test_pool().await;
        let client = seed_customer(&db, "CUST-R7", "Meridian Shipping").await;

        seed_engagement(
            &db,
            "ENG-D1",
            client,
            EngagementType::Email,
            NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date"),
        )
        .await;
        seed_engagement(
            &db,
            "ENG-D2",
            client,
            EngagementType::Email,
            NaiveDate::from_ymd_opt(2024, 5, 5).expect("valid date"),
        )
        .await;

        let report = db
            .reports()
            .engagement_report(EngagementReportQuery {
                start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
                end_date: NaiveDate::from_ymd_opt(2024, 6, 1),
                ..Default::default()
            })
            .await
            .expect("Report should succeed");

        assert_eq!(report.engagements.len(), 1);
        assert_eq!(report.engagements[0].engagement_id, "ENG-D2");
        assert_eq!(report.summary_by_type.len(), 1);
        assert_eq!(report.summary_by_type[0].count, 1);
    }
}
