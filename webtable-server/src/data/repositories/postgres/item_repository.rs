use async_trait::async_trait;
use sqlx::PgPool;

use crate::data::item_repository::ItemRepository;
use crate::domain::error::DomainError;
use crate::domain::item::{Item, NewItem};

#[derive(Debug, Clone)]
pub(crate) struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    value: String,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            value: row.value,
        }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create_item(&self, input: NewItem) -> Result<Item, DomainError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (name, value)
            VALUES ($1, $2)
            RETURNING id, name, value
            "#,
        )
        .bind(&input.name)
        .bind(&input.value)
        .fetch_one(&self.pool)
        .await
        .map_err(map_item_db_error)?;

        Ok(row.into())
    }

    async fn list_items(&self) -> Result<Vec<Item>, DomainError> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT id, name, value
            FROM items
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_item_db_error)?;

        Ok(rows.into_iter().map(Item::from).collect())
    }
}

fn map_item_db_error(err: sqlx::Error) -> DomainError {
    DomainError::Unexpected(err.to_string())
}
