use super::map_sqlx;
use crate::domain::content::{
    ContentBlock, ContentBlockId, ContentBlockRepository, ContentBlockUpdate, NewContentBlock,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::value_objects::DisplayName;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, title, slug, body, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresContentBlockRepository {
    pool: PgPool,
}

impl PostgresContentBlockRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContentBlockRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ContentBlockRow> for ContentBlock {
    type Error = DomainError;

    fn try_from(row: ContentBlockRow) -> Result<Self, Self::Error> {
        Ok(ContentBlock {
            id: ContentBlockId::new(row.id)?,
            title: DisplayName::new(row.title)?,
            slug: Slug::new(row.slug)?,
            body: row.body,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ContentBlockRepository for PostgresContentBlockRepository {
    async fn insert(&self, block: NewContentBlock) -> DomainResult<ContentBlock> {
        let sql = format!(
            "INSERT INTO content_blocks (title, slug, body, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContentBlockRow>(&sql)
            .bind(block.title.as_str())
            .bind(block.slug.as_str())
            .bind(&block.body)
            .bind(block.created_at)
            .bind(block.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        ContentBlock::try_from(row)
    }

    async fn update(&self, update: ContentBlockUpdate) -> DomainResult<ContentBlock> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE content_blocks SET updated_at = ");
        builder.push_bind(update.updated_at);

        if let Some(title) = update.title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = update.slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(body) = update.body {
            builder.push(", body = ");
            builder.push_bind(body);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(update.id));
        builder.push(" RETURNING ");
        builder.push(COLUMNS);

        let row = builder
            .build_query_as::<ContentBlockRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("content block not found".into()))?;

        ContentBlock::try_from(row)
    }

    async fn delete(&self, id: ContentBlockId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM content_blocks WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("content block not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: ContentBlockId) -> DomainResult<Option<ContentBlock>> {
        let sql = format!("SELECT {COLUMNS} FROM content_blocks WHERE id = $1");
        let row = sqlx::query_as::<_, ContentBlockRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ContentBlock::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<ContentBlock>> {
        let sql = format!("SELECT {COLUMNS} FROM content_blocks WHERE slug = $1");
        let row = sqlx::query_as::<_, ContentBlockRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(ContentBlock::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<ContentBlock>> {
        let sql = format!("SELECT {COLUMNS} FROM content_blocks ORDER BY slug");
        let rows = sqlx::query_as::<_, ContentBlockRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ContentBlock::try_from).collect()
    }
}
