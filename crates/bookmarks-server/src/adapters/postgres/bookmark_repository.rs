//! PostgreSQL implementation of BookmarkRepository

use async_trait::async_trait;
use sqlx::PgPool;

use bookmarks::{Bookmark, BookmarkRepository, DomainError, NewBookmark, Page, PageRequest};

use super::{is_foreign_key_violation, like_pattern, repository_error};

const SEARCH_PREDICATE: &str =
    "title ILIKE $1 ESCAPE '\\' OR description ILIKE $1 ESCAPE '\\'";

/// PostgreSQL implementation of BookmarkRepository
pub struct PgBookmarkRepository {
    pool: PgPool,
}

impl PgBookmarkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Map a write failure, turning a dangling folder reference into a clean error
    fn write_error(e: sqlx::Error, folder_id: Option<i64>) -> DomainError {
        match folder_id {
            Some(id) if is_foreign_key_violation(&e) => DomainError::folder_not_found(id),
            _ => repository_error(e),
        }
    }
}

/// ORDER BY / LIMIT / OFFSET clause for a page request.
/// Column names come from a closed enum, never from caller input.
fn page_clause(page: &PageRequest) -> String {
    format!(
        "ORDER BY {} {}, id ASC LIMIT {} OFFSET {}",
        page.sort_by.column(),
        page.direction.keyword(),
        page.size,
        page.offset()
    )
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct BookmarkRow {
    id: i64,
    title: String,
    description: Option<String>,
    url: String,
    folder_id: Option<i64>,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<BookmarkRow> for Bookmark {
    fn from(row: BookmarkRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            url: row.url,
            folder_id: row.folder_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl BookmarkRepository for PgBookmarkRepository {
    async fn find_all(&self) -> Result<Vec<Bookmark>, DomainError> {
        let rows = sqlx::query_as::<_, BookmarkRow>("SELECT * FROM bookmarks ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Bookmark>, DomainError> {
        let row = sqlx::query_as::<_, BookmarkRow>("SELECT * FROM bookmarks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_folder_id(&self, folder_id: i64) -> Result<Vec<Bookmark>, DomainError> {
        let rows = sqlx::query_as::<_, BookmarkRow>(
            "SELECT * FROM bookmarks WHERE folder_id = $1 ORDER BY id",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_page_by_folder_id(
        &self,
        folder_id: i64,
        page: &PageRequest,
    ) -> Result<Page<Bookmark>, DomainError> {
        let total = self.count_by_folder_id(folder_id).await?;

        let sql = format!(
            "SELECT * FROM bookmarks WHERE folder_id = $1 {}",
            page_clause(page)
        );
        let rows = sqlx::query_as::<_, BookmarkRow>(&sql)
            .bind(folder_id)
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(Page::new(
            rows.into_iter().map(Into::into).collect(),
            page,
            total.max(0) as u64,
        ))
    }

    async fn insert(&self, bookmark: &NewBookmark) -> Result<Bookmark, DomainError> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
            INSERT INTO bookmarks (title, description, url, folder_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&bookmark.title)
        .bind(&bookmark.description)
        .bind(&bookmark.url)
        .bind(bookmark.folder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::write_error(e, bookmark.folder_id))?;

        Ok(row.into())
    }

    async fn update(&self, bookmark: &Bookmark) -> Result<Bookmark, DomainError> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
            UPDATE bookmarks
            SET title = $2, description = $3, url = $4, folder_id = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(bookmark.id)
        .bind(&bookmark.title)
        .bind(&bookmark.description)
        .bind(&bookmark.url)
        .bind(bookmark.folder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::write_error(e, bookmark.folder_id))?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all_by_id(&self, ids: &[i64]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = sqlx::query("DELETE FROM bookmarks WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected())
    }

    async fn count_by_folder_id(&self, folder_id: i64) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookmarks WHERE folder_id = $1")
            .bind(folder_id)
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }

    async fn search(&self, term: &str) -> Result<Vec<Bookmark>, DomainError> {
        let sql = format!("SELECT * FROM bookmarks WHERE {SEARCH_PREDICATE} ORDER BY id");
        let rows = sqlx::query_as::<_, BookmarkRow>(&sql)
            .bind(like_pattern(term))
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search_page(
        &self,
        term: &str,
        page: &PageRequest,
    ) -> Result<Page<Bookmark>, DomainError> {
        let pattern = like_pattern(term);

        let count_sql = format!("SELECT COUNT(*) FROM bookmarks WHERE {SEARCH_PREDICATE}");
        let total = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(&pattern)
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)?;

        let sql = format!(
            "SELECT * FROM bookmarks WHERE {SEARCH_PREDICATE} {}",
            page_clause(page)
        );
        let rows = sqlx::query_as::<_, BookmarkRow>(&sql)
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(Page::new(
            rows.into_iter().map(Into::into).collect(),
            page,
            total.max(0) as u64,
        ))
    }
}
