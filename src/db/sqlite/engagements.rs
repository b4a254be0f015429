use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

use super::common::parse_uuid;
use crate::{
    db::{
        error::{DbError, DbResult},
        repos::EngagementRepo,
    },
    models::{Engagement, EngagementChannel, EngagementInput, EngagementQuery, EngagementType},
};

pub struct SqliteEngagementRepo {
    pool: SqlitePool,
}

impl SqliteEngagementRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const ENGAGEMENT_SELECT: &str = "SELECT e.id, e.engagement_id, e.client_id, e.engagement_type, \
     e.engagement_date, e.engagement_outcome, e.contact_person, e.recorded_by, \
     e.engagement_channel, e.engagement_notes, e.created_at, e.updated_at, \
     cu.customer_name AS customer_name, u.name AS recorder_name \
     FROM client_engagements e \
     LEFT JOIN customers cu ON e.client_id = cu.id \
     LEFT JOIN users u ON e.recorded_by = u.id";

fn engagement_from_row(row: &SqliteRow) -> DbResult<Engagement> {
    let type_raw: String = row.get("engagement_type");
    let engagement_type = EngagementType::parse(&type_raw).ok_or_else(|| {
        DbError::Internal(format!("Invalid engagement type in database: {}", type_raw))
    })?;

    let channel_raw: String = row.get("engagement_channel");
    let engagement_channel = EngagementChannel::parse(&channel_raw).ok_or_else(|| {
        DbError::Internal(format!(
            "Invalid engagement channel in database: {}",
            channel_raw
        ))
    })?;

    Ok(Engagement {
        id: parse_uuid(&row.get::<String, _>("id"))?,
        engagement_id: row.get("engagement_id"),
        client_id: parse_uuid(&row.get::<String, _>("client_id"))?,
        engagement_type,
        engagement_date: row.get("engagement_date"),
        engagement_outcome: row.get("engagement_outcome"),
        contact_person: row.get("contact_person"),
        recorded_by: parse_uuid(&row.get::<String, _>("recorded_by"))?,
        engagement_channel,
        engagement_notes: row.get("engagement_notes"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        customer_name: row.get("customer_name"),
        recorder_name: row.get("recorder_name"),
    })
}

#[async_trait]
impl EngagementRepo for SqliteEngagementRepo {
    async fn list(&self, query: EngagementQuery) -> DbResult<Vec<Engagement>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if let Some(client) = &query.client {
            conditions.push("e.client_id = ?");
            params.push(client.to_string());
        }
        if let Some(engagement_type) = &query.engagement_type {
            conditions.push("e.engagement_type = ?");
            params.push(engagement_type.clone());
        }
        if let Some(channel) = &query.channel {
            conditions.push("e.engagement_channel = ?");
            params.push(channel.clone());
        }
        if let Some(start) = &query.start_date {
            conditions.push("e.engagement_date >= ?");
            params.push(start.to_string());
        }
        if let Some(end) = &query.end_date {
            conditions.push("e.engagement_date <= ?");
            params.push(end.to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "{ENGAGEMENT_SELECT} {where_clause} \
             ORDER BY e.engagement_date DESC, e.created_at DESC"
        );

        let mut query_builder = sqlx::query(&sql);
        for param in &params {
            query_builder = query_builder.bind(param);
        }

        let rows = query_builder.fetch_all(&self.pool).await?;
        rows.iter().map(engagement_from_row).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> DbResult<Option<Engagement>> {
        let row = sqlx::query(&format!("{ENGAGEMENT_SELECT} WHERE e.id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(engagement_from_row).transpose()
    }

    async fn business_id_exists(&self, business_id: &str) -> DbResult<bool> {
        let row = sqlx::query("SELECT 1 FROM client_engagements WHERE engagement_id = ?")
            .bind(business_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn create(
        &self,
        business_id: &str,
        input: EngagementInput,
        recorded_by: Uuid,
    ) -> DbResult<Engagement> {
        let id = Uuid::new_v4();
        let now = chrono::Utc::now();

        sqlx::query(
            r#"
            INSERT INTO client_engagements (
                id, engagement_id, client_id, engagement_type, engagement_date,
                engagement_outcome, contact_person, recorded_by, engagement_channel,
                engagement_notes, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(business_id)
        .bind(input.client_id.to_string())
        .bind(input.engagement_type.as_str())
        .bind(input.engagement_date)
        .bind(&input.engagement_outcome)
        .bind(&input.contact_person)
        .bind(recorded_by.to_string())
        .bind(input.engagement_channel.as_str())
        .bind(&input.engagement_notes)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        // Re-select to pick up the joined customer and recorder names.
        self.get_by_id(id).await?.ok_or(DbError::NotFound)
    }

    async fn update(&self, id: Uuid, input: EngagementInput) -> DbResult<Engagement> {
        let now = chrono::Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE client_engagements SET
                client_id = ?,
                engagement_type = ?,
                engagement_date = ?,
                engagement_outcome = ?,
                contact_person = ?,
                engagement_channel = ?,
                engagement_notes = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(input.client_id.to_string())
        .bind(input.engagement_type.as_str())
        .bind(input.engagement_date)
        .bind(&input.engagement_outcome)
        .bind(&input.contact_person)
        .bind(input.engagement_channel.as_str())
        .bind(&input.engagement_notes)
        .bind(now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }

        self.get_by_id(id).await?.ok_or(DbError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM client_engagements WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        db::{DbPool, test_pool},
        models::{CustomerInput, CustomerStatus},
    };

    async fn seed_customer(db: &DbPool, business_id: &str) -> Uuid {
        db.customers()
            .create(
                business_id,
                CustomerInput {
                    customer_name: "Meridian Shipping".to_string(),
                    contact_person: "Dana Voss".to_string(),
                    contact_number: "+1 555 010 7788".to_string(),
                    email_address: "dana@meridian.example".to_string(),
                    industry_type: "Maritime".to_string(),
                    registration_date: NaiveDate::from_ymd_opt(2023, 11, 2)
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

    fn input(client_id: Uuid, date: NaiveDate) -> EngagementInput {
        EngagementInput {
            client_id,
            engagement_type: EngagementType::Meeting,
            engagement_date: date,
            engagement_outcome: "Retainer signed".to_string(),
            contact_person: "Dana Voss".to_string(),
            engagement_channel: EngagementChannel::InPerson,
            engagement_notes: String::new(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = test_pool().await;
        let client_id = seed_customer(&db, "CUST-E1").await;

        let engagement = db
            .engagements()
            .create("ENG-TEST-0001", input(client_id, date(2024, 5, 20)), Uuid::new_v4())
            .await
            .expect("Failed to create engagement");

        assert_eq!(engagement.engagement_type, EngagementType::Meeting);
        assert_eq!(
            engagement.customer_name.as_deref(),
            Some("Meridian Shipping")
        );
    }

    #[tokio::test]
    async fn test_list_ordered_by_engagement_date_desc() {
        let db = test_pool().await;
        let client_id = seed_customer(&db, "CUST-E2").await;
        let repo = db.engagements();
        let recorder = Uuid::new_v4();

        for (i, day) in [10u32, 25, 3].into_iter().enumerate() {
            repo.create(
                &format!("ENG-ORD-{i}"),
                input(client_id, date(2024, 6, day)),
                recorder,
            )
            .await
            .expect("Failed to create");
        }

        let listed = repo
            .list(EngagementQuery::default())
            .await
            .expect("Failed to list");
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].engagement_date, date(2024, 6, 25));
        assert_eq!(listed[2].engagement_date, date(2024, 6, 3));
    }

    #[tokio::test]
    async fn test_list_filters() {
        let db = test_pool().await;
        let client_a = seed_customer(&db, "CUST-E3").await;
        let client_b = seed_customer(&db, "CUST-E4").await;
        let repo = db.engagements();
        let recorder = Uuid::new_v4();

        repo.create("ENG-A", input(client_a, date(2024, 6, 1)), recorder)
            .await
            .expect("Failed to create");
        repo.create(
            "ENG-B",
            EngagementInput {
                engagement_type: EngagementType::Call,
                engagement_channel: EngagementChannel::Phone,
                ..input(client_b, date(2024, 7, 1))
            },
            recorder,
        )
        .await
        .expect("Failed to create");

        let by_client = repo
            .list(EngagementQuery {
                client: Some(client_a),
                ..Default::default()
            })
            .await
            .expect("Failed to list");
        assert_eq!(by_client.len(), 1);
        assert_eq!(by_client[0].engagement_id, "ENG-A");

        let by_type = repo
            .list(EngagementQuery {
                engagement_type: Some("Call".to_string()),
                ..Default::default()
            })
            .await
            .expect("Failed to list");
        assert_eq!(by_type.len(), 1);
        assert_eq!(by_type[0].engagement_id, "ENG-B");

        let by_range = repo
            .list(EngagementQuery {
                start_date: Some(date(2024, 6, 15)),
                end_date: Some(date(2024, 7, 15)),
                ..Default::default()
            })
            .await
            .expect("Failed to list");
        assert_eq!(by_range.len(), 1);
        assert_eq!(by_range[0].engagement_id, "ENG-B");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let db = test_pool().await;
        let client_id = seed_customer(&db, "CUST-E5").await;
        let repo = db.engagements();

        let engagement = repo
            .create("ENG-UD", input(client_id, date(2024, 5, 1)), Uuid::new_v4())
            .await
            .expect("Failed to create");

        let updated = repo
            .update(
                engagement.id,
                EngagementInput {
                    engagement_outcome: "Follow-up scheduled".to_string(),
                    ..input(client_id, date(2024, 5, 2))
                },
            )
            .await
            .expect("Failed to update");
        assert_eq!(updated.engagement_outcome, "Follow-up scheduled");
        assert_eq!(updated.engagement_date, date(2024, 5, 2));

        assert!(
            repo.delete(engagement.id)
                .await
                .expect("Delete should succeed")
        );
        assert!(
            !repo
                .delete(engagement.id)
                .await
                .expect("Delete should succeed")
        );
    }
}
