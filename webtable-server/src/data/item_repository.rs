use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::item::{Item, NewItem};

#[async_trait]
pub(crate) trait ItemRepository: Send + Sync {
    async fn create_item(&self, input: NewItem) -> Result<Item, DomainError>;

    /// All items, ordered by id ascending. No pagination.
    async fn list_items(&self) -> Result<Vec<Item>, DomainError>;
}
