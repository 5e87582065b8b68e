//! Postgres-backed product store.
//!
//! ## Error Mapping
//!
//! | SQLx Error | PostgreSQL Error Code | StoreError | Scenario |
//! |------------|----------------------|------------|----------|
//! | Database (unique violation) | `23505` | `DuplicateName` | Concurrent writers raced past the catalog's name check |
//! | Database (check constraint violation) | `23514` | `Backend` | Negative price slipped past validation (should not occur) |
//! | Database (other) | Any other | `Backend` | Other database errors |
//! | Other | N/A | `Backend` | Pool closed, network errors, decoding failures |
//!
//! ## Thread Safety
//!
//! `PostgresProductStore` is `Send + Sync` and cheap to clone; all operations go
//! through the SQLx connection pool.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};
use tracing::instrument;

use productapi_core::ProductId;
use productapi_products::{Price, Product, ProductDraft};

use super::{ProductStore, StoreError};

/// Table definition. `UNIQUE (name)` is the backstop for the catalog's
/// check-then-act name check.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id          BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    name        TEXT NOT NULL,
    description TEXT,
    price       DOUBLE PRECISION NOT NULL CHECK (price >= 0),
    created_at  TIMESTAMPTZ NOT NULL,
    updated_at  TIMESTAMPTZ NOT NULL,
    CONSTRAINT products_name_key UNIQUE (name)
)
"#;

const COLUMNS: &str = "id, name, description, price, created_at, updated_at";

type ExistsQuery<'q> = sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>;

#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: Arc<PgPool>,
}

impl PostgresProductStore {
    /// Create a new PostgresProductStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Connect to `database_url` and make sure the `products` table exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    #[instrument(skip(self), err)]
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }

    async fn exists(&self, operation: &str, query: ExistsQuery<'_>) -> Result<bool, StoreError> {
        let row = query
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error(operation, e))?;
        row.try_get::<bool, _>(0)
            .map_err(|e| map_sqlx_error(operation, e))
    }
}

#[async_trait::async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self, draft), fields(name = %draft.name()), err)]
    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let row: ProductRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO products (name, description, price, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING {COLUMNS}
            "#
        ))
        .bind(draft.name())
        .bind(draft.description())
        .bind(draft.price().amount())
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("create", e))?;

        row.try_into()
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row: Option<ProductRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM products WHERE id = $1"))
                .bind(id.get())
                .fetch_optional(&*self.pool)
                .await
                .map_err(|e| map_sqlx_error("find_by_id", e))?;

        row.map(Product::try_from).transpose()
    }

    #[instrument(skip(self), err)]
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> =
            sqlx::query_as(&format!("SELECT {COLUMNS} FROM products ORDER BY id ASC"))
                .fetch_all(&*self.pool)
                .await
                .map_err(|e| map_sqlx_error("find_all", e))?;

        rows.into_iter().map(Product::try_from).collect()
    }

    #[instrument(skip(self, draft), fields(id = %id, name = %draft.name()), err)]
    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Option<Product>, StoreError> {
        // updated_at must strictly advance even if two updates share a NOW().
        let row: Option<ProductRow> = sqlx::query_as(&format!(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id.get())
        .bind(draft.name())
        .bind(draft.description())
        .bind(draft.price().amount())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("update", e))?;

        row.map(Product::try_from).transpose()
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn delete(&self, id: ProductId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.get())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, StoreError> {
        self.exists(
            "exists_by_id",
            sqlx::query("SELECT EXISTS (SELECT 1 FROM products WHERE id = $1)").bind(id.get()),
        )
        .await
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, StoreError> {
        self.exists(
            "exists_by_name",
            sqlx::query("SELECT EXISTS (SELECT 1 FROM products WHERE name = $1)").bind(name.to_string()),
        )
        .await
    }

    async fn exists_by_name_excluding(&self, name: &str, id: ProductId) -> Result<bool, StoreError> {
        self.exists(
            "exists_by_name_excluding",
            sqlx::query("SELECT EXISTS (SELECT 1 FROM products WHERE name = $1 AND id <> $2)")
                .bind(name.to_string())
                .bind(id.get()),
        )
        .await
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            if db_err.code().as_deref() == Some("23505") {
                // Only the name column carries a unique constraint besides the PK.
                StoreError::DuplicateName(db_err.message().to_string())
            } else {
                StoreError::Backend(format!("database error in {}: {}", operation, db_err.message()))
            }
        }
        sqlx::Error::PoolClosed => {
            StoreError::Backend(format!("connection pool closed in {}", operation))
        }
        _ => StoreError::Backend(format!("sqlx error in {}: {}", operation, err)),
    }
}

// SQLx row types

#[derive(Debug)]
struct ProductRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'r> sqlx::FromRow<'r, PgRow> for ProductRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(ProductRow {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = StoreError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = Price::new(row.price)
            .map_err(|e| StoreError::Backend(format!("row {} has invalid price: {e}", row.id)))?;
        Ok(Product::from_parts(
            ProductId::new(row.id),
            row.name,
            row.description,
            price,
            row.created_at,
            row.updated_at,
        ))
    }
}
