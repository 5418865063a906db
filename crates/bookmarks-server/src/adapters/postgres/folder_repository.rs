//! PostgreSQL implementation of FolderRepository

use async_trait::async_trait;
use sqlx::PgPool;

use bookmarks::{DomainError, Folder, FolderRepository, FolderWithCount, NewFolder};

use super::{is_foreign_key_violation, is_unique_violation, like_pattern, repository_error};

/// PostgreSQL implementation of FolderRepository
pub struct PgFolderRepository {
    pool: PgPool,
}

impl PgFolderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The unique index on `name` backstops the service-level duplicate check
    fn write_error(e: sqlx::Error, name: &str) -> DomainError {
        if is_unique_violation(&e) {
            DomainError::duplicate_folder_name(name)
        } else {
            repository_error(e)
        }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct FolderRow {
    id: i64,
    name: String,
    description: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<FolderRow> for Folder {
    fn from(row: FolderRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct FolderCountRow {
    #[sqlx(flatten)]
    folder: FolderRow,
    bookmark_count: i64,
}

impl From<FolderCountRow> for FolderWithCount {
    fn from(row: FolderCountRow) -> Self {
        Self {
            folder: row.folder.into(),
            bookmark_count: row.bookmark_count,
        }
    }
}

#[async_trait]
impl FolderRepository for PgFolderRepository {
    async fn find_all_ordered_by_name(&self) -> Result<Vec<Folder>, DomainError> {
        let rows = sqlx::query_as::<_, FolderRow>("SELECT * FROM folders ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Folder>, DomainError> {
        let row = sqlx::query_as::<_, FolderRow>("SELECT * FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM folders WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM folders WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }

    async fn insert(&self, folder: &NewFolder) -> Result<Folder, DomainError> {
        let row = sqlx::query_as::<_, FolderRow>(
            r#"
            INSERT INTO folders (name, description)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&folder.name)
        .bind(&folder.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::write_error(e, &folder.name))?;

        Ok(row.into())
    }

    async fn update(&self, folder: &Folder) -> Result<Folder, DomainError> {
        let row = sqlx::query_as::<_, FolderRow>(
            r#"
            UPDATE folders
            SET name = $2, description = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(folder.id)
        .bind(&folder.name)
        .bind(&folder.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::write_error(e, &folder.name))?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // ON DELETE RESTRICT fired: a bookmark slipped in after the count check
                if is_foreign_key_violation(&e) {
                    DomainError::folder_not_empty()
                } else {
                    repository_error(e)
                }
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, term: &str) -> Result<Vec<Folder>, DomainError> {
        let rows = sqlx::query_as::<_, FolderRow>(
            r#"
            SELECT * FROM folders
            WHERE name ILIKE $1 ESCAPE '\' OR description ILIKE $1 ESCAPE '\'
            ORDER BY name ASC
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_all_with_bookmark_count(&self) -> Result<Vec<FolderWithCount>, DomainError> {
        let rows = sqlx::query_as::<_, FolderCountRow>(
            r#"
            SELECT f.*, COUNT(b.id) AS bookmark_count
            FROM folders f
            LEFT JOIN bookmarks b ON f.id = b.folder_id
            GROUP BY f.id
            ORDER BY f.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
