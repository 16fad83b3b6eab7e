use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use crate::audit::{
    domain::model::{
        entities::audit_record::{AuditRecord, AuditRecordParts},
        enums::{
            audit_action::AuditAction, audit_domain_error::AuditDomainError,
            audit_outcome::AuditOutcome,
        },
        value_objects::audit_record_id::AuditRecordId,
    },
    infrastructure::persistence::repositories::audit_record_repository::{
        AuditRecordCriteria, AuditRecordRepository,
    },
};

pub struct SqlxAuditRecordRepositoryImpl {
    pool: PgPool,
}

impl SqlxAuditRecordRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_criteria(builder: &mut QueryBuilder<'_, Postgres>, criteria: &AuditRecordCriteria) {
        builder.push(" WHERE TRUE");

        if let Some(actor_user_id) = criteria.actor_user_id {
            builder.push(" AND actor_user_id = ").push_bind(actor_user_id);
        }
        if let Some(bucket_name) = &criteria.bucket_name {
            builder.push(" AND bucket_name = ").push_bind(bucket_name.clone());
        }
        if !criteria.actions.is_empty() {
            let actions = criteria
                .actions
                .iter()
                .map(|action| action.as_str().to_string())
                .collect::<Vec<_>>();
            builder.push(" AND action = ANY(").push_bind(actions).push(")");
        }
        if let Some(outcome) = criteria.outcome {
            builder.push(" AND outcome = ").push_bind(outcome.as_str());
        }
        if let Some(recorded_since) = criteria.recorded_since {
            builder.push(" AND recorded_at >= ").push_bind(recorded_since);
        }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<AuditRecord, AuditDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let action: String = row.try_get("action").map_err(map_infra_error)?;
        let outcome: String = row.try_get("outcome").map_err(map_infra_error)?;
        let context_metadata: Option<Value> =
            row.try_get("context_metadata").map_err(map_infra_error)?;
        let recorded_at: DateTime<Utc> = row.try_get("recorded_at").map_err(map_infra_error)?;

        Ok(AuditRecord::restore(
            AuditRecordId::from_uuid(id),
            AuditRecordParts {
                actor_user_id: row.try_get("actor_user_id").map_err(map_infra_error)?,
                action: action.parse::<AuditAction>()?,
                bucket_name: row.try_get("bucket_name").map_err(map_infra_error)?,
                object_key: row.try_get("object_key").map_err(map_infra_error)?,
                outcome: outcome.parse::<AuditOutcome>()?,
                source_address: row.try_get("source_address").map_err(map_infra_error)?,
                user_agent: row.try_get("user_agent").map_err(map_infra_error)?,
                context_metadata,
                error_detail: row.try_get("error_detail").map_err(map_infra_error)?,
            },
            recorded_at,
        ))
    }
}

#[async_trait]
impl AuditRecordRepository for SqlxAuditRecordRepositoryImpl {
    async fn append(&self, record: &AuditRecord) -> Result<(), AuditDomainError> {
        let statement = r#"
            INSERT INTO audit_records (
                id,
                actor_user_id,
                action,
                bucket_name,
                object_key,
                outcome,
                source_address,
                user_agent,
                context_metadata,
                error_detail,
                recorded_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#;

        sqlx::query(statement)
            .bind(record.id().value())
            .bind(record.actor_user_id())
            .bind(record.action().as_str())
            .bind(record.bucket_name())
            .bind(record.object_key())
            .bind(record.outcome().as_str())
            .bind(record.source_address())
            .bind(record.user_agent())
            .bind(record.context_metadata())
            .bind(record.error_detail())
            .bind(record.recorded_at())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn find(
        &self,
        criteria: &AuditRecordCriteria,
        limit: u32,
        skip: u64,
    ) -> Result<Vec<AuditRecord>, AuditDomainError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            r#"
            SELECT id, actor_user_id, action, bucket_name, object_key, outcome, source_address,
                   user_agent, context_metadata, error_detail, recorded_at
            FROM audit_records
            "#,
        );
        Self::push_criteria(&mut builder, criteria);
        builder
            .push(" ORDER BY recorded_at DESC, id DESC LIMIT ")
            .push_bind(i64::from(limit))
            .push(" OFFSET ")
            .push_bind(i64::try_from(skip).unwrap_or(i64::MAX));

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn count(&self, criteria: &AuditRecordCriteria) -> Result<u64, AuditDomainError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM audit_records");
        Self::push_criteria(&mut builder, criteria);

        let (total,) = builder
            .build_query_as::<(i64,)>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(total.max(0) as u64)
    }
}

fn map_infra_error(error: sqlx::Error) -> AuditDomainError {
    AuditDomainError::LedgerUnavailable(error.to_string())
}
