use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::access_control::{
    domain::{
        model::{
            entities::access_grant::{AccessGrant, AccessGrantRestoreParts, AccessGrantRights},
            enums::access_control_domain_error::AccessControlDomainError,
            value_objects::{
                bucket_name::BucketName, grant_id::GrantId, object_prefix::ObjectPrefix,
                storage_backend_id::StorageBackendId, user_id::UserId,
            },
        },
        services::access_grant_query_service::GrantStatistics,
    },
    infrastructure::persistence::repositories::access_grant_repository::AccessGrantRepository,
};

const SELECT_GRANT_COLUMNS: &str = r#"
    SELECT id, owner_user_id, bucket_name, prefix, can_read, can_write, can_delete, can_list,
           storage_backend_id, description, created_at, updated_at
    FROM access_grants
"#;

pub struct SqlxAccessGrantRepositoryImpl {
    pool: PgPool,
}

impl SqlxAccessGrantRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<AccessGrant, AccessControlDomainError> {
        let id: Uuid = row.try_get("id").map_err(map_infra_error)?;
        let owner_user_id: Uuid = row.try_get("owner_user_id").map_err(map_infra_error)?;
        let bucket_name: String = row.try_get("bucket_name").map_err(map_infra_error)?;
        let prefix: String = row.try_get("prefix").map_err(map_infra_error)?;
        let storage_backend_id: Option<Uuid> =
            row.try_get("storage_backend_id").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;
        let updated_at: Option<DateTime<Utc>> =
            row.try_get("updated_at").map_err(map_infra_error)?;

        Ok(AccessGrant::restore(AccessGrantRestoreParts {
            id: GrantId::from_uuid(id),
            owner_user_id: UserId::from_uuid(owner_user_id),
            bucket_name: BucketName::new(bucket_name).map_err(|_| {
                AccessControlDomainError::GrantStoreUnavailable(
                    "invalid bucket name stored".to_string(),
                )
            })?,
            prefix: ObjectPrefix::new(prefix),
            rights: AccessGrantRights {
                can_read: row.try_get("can_read").map_err(map_infra_error)?,
                can_write: row.try_get("can_write").map_err(map_infra_error)?,
                can_delete: row.try_get("can_delete").map_err(map_infra_error)?,
                can_list: row.try_get("can_list").map_err(map_infra_error)?,
            },
            storage_backend_id: storage_backend_id.map(StorageBackendId::from_uuid),
            description: row.try_get("description").map_err(map_infra_error)?,
            created_at,
            updated_at,
        }))
    }
}

#[async_trait]
impl AccessGrantRepository for SqlxAccessGrantRepositoryImpl {
    async fn save(&self, grant: &AccessGrant) -> Result<(), AccessControlDomainError> {
        let statement = r#"
            INSERT INTO access_grants (
                id,
                owner_user_id,
                bucket_name,
                prefix,
                can_read,
                can_write,
                can_delete,
                can_list,
                storage_backend_id,
                description,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id)
            DO UPDATE SET
                bucket_name = EXCLUDED.bucket_name,
                prefix = EXCLUDED.prefix,
                can_read = EXCLUDED.can_read,
                can_write = EXCLUDED.can_write,
                can_delete = EXCLUDED.can_delete,
                can_list = EXCLUDED.can_list,
                storage_backend_id = EXCLUDED.storage_backend_id,
                description = EXCLUDED.description,
                updated_at = EXCLUDED.updated_at
        "#;

        let rights = grant.rights();
        sqlx::query(statement)
            .bind(grant.id().value())
            .bind(grant.owner_user_id().value())
            .bind(grant.bucket_name().value())
            .bind(grant.prefix().value())
            .bind(rights.can_read)
            .bind(rights.can_write)
            .bind(rights.can_delete)
            .bind(rights.can_list)
            .bind(grant.storage_backend_id().map(StorageBackendId::value))
            .bind(grant.description())
            .bind(grant.created_at())
            .bind(grant.updated_at())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn update(&self, grant: &AccessGrant) -> Result<bool, AccessControlDomainError> {
        let statement = r#"
            UPDATE access_grants
            SET
                bucket_name = $2,
                prefix = $3,
                can_read = $4,
                can_write = $5,
                can_delete = $6,
                can_list = $7,
                storage_backend_id = $8,
                description = $9,
                updated_at = $10
            WHERE id = $1
        "#;

        let rights = grant.rights();
        let result = sqlx::query(statement)
            .bind(grant.id().value())
            .bind(grant.bucket_name().value())
            .bind(grant.prefix().value())
            .bind(rights.can_read)
            .bind(rights.can_write)
            .bind(rights.can_delete)
            .bind(rights.can_list)
            .bind(grant.storage_backend_id().map(StorageBackendId::value))
            .bind(grant.description())
            .bind(grant.updated_at())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(
        &self,
        grant_id: &GrantId,
    ) -> Result<Option<AccessGrant>, AccessControlDomainError> {
        let statement = format!("{SELECT_GRANT_COLUMNS} WHERE id = $1");

        let row = sqlx::query(&statement)
            .bind(grant_id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_infra_error)?;

        row.map(Self::row_to_entity).transpose()
    }

    async fn find_by_user_and_bucket(
        &self,
        user_id: &UserId,
        bucket_name: &BucketName,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        let statement = format!(
            "{SELECT_GRANT_COLUMNS} WHERE owner_user_id = $1 AND bucket_name = $2 ORDER BY created_at, id"
        );

        let rows = sqlx::query(&statement)
            .bind(user_id.value())
            .bind(bucket_name.value())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        let statement =
            format!("{SELECT_GRANT_COLUMNS} WHERE owner_user_id = $1 ORDER BY created_at, id");

        let rows = sqlx::query(&statement)
            .bind(user_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn find_all(&self) -> Result<Vec<AccessGrant>, AccessControlDomainError> {
        let statement = format!("{SELECT_GRANT_COLUMNS} ORDER BY created_at, id");

        let rows = sqlx::query(&statement)
            .fetch_all(&self.pool)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn delete(&self, grant_id: &GrantId) -> Result<bool, AccessControlDomainError> {
        let result = sqlx::query("DELETE FROM access_grants WHERE id = $1")
            .bind(grant_id.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_user(&self, user_id: &UserId) -> Result<u64, AccessControlDomainError> {
        let result = sqlx::query("DELETE FROM access_grants WHERE owner_user_id = $1")
            .bind(user_id.value())
            .execute(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(result.rows_affected())
    }

    async fn statistics(&self) -> Result<GrantStatistics, AccessControlDomainError> {
        let statement = r#"
            SELECT COUNT(*) AS total_grants, COUNT(DISTINCT bucket_name) AS distinct_buckets
            FROM access_grants
        "#;

        let (total_grants, distinct_buckets) = sqlx::query_as::<_, (i64, i64)>(statement)
            .fetch_one(&self.pool)
            .await
            .map_err(map_infra_error)?;

        Ok(GrantStatistics {
            total_grants: total_grants.max(0) as u64,
            distinct_buckets: distinct_buckets.max(0) as u64,
        })
    }
}

fn map_infra_error(error: sqlx::Error) -> AccessControlDomainError {
    AccessControlDomainError::GrantStoreUnavailable(error.to_string())
}
