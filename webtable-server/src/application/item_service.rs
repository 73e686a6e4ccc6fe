use crate::data::item_repository::ItemRepository;
use crate::domain::error::DomainError;
use crate::domain::item::{Item, NewItem};

pub(crate) struct ItemService<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn add_item(&self, req: NewItem) -> Result<Item, DomainError> {
        self.repo.create_item(req).await
    }

    pub(crate) async fn list_items(&self) -> Result<Vec<Item>, DomainError> {
        self.repo.list_items().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::ItemService;
    use crate::data::item_repository::ItemRepository;
    use crate::domain::error::DomainError;
    use crate::domain::item::{Item, NewItem};

    #[derive(Clone, Default)]
    struct FakeItemRepo {
        items: Arc<Mutex<Vec<Item>>>,
    }

    #[async_trait]
    impl ItemRepository for FakeItemRepo {
        async fn create_item(&self, input: NewItem) -> Result<Item, DomainError> {
            let mut items = self.items.lock().expect("items mutex poisoned");
            let item = Item {
                id: items.len() as i64 + 1,
                name: input.name,
                value: input.value,
            };
            items.push(item.clone());
            Ok(item)
        }

        async fn list_items(&self) -> Result<Vec<Item>, DomainError> {
            Ok(self.items.lock().expect("items mutex poisoned").clone())
        }
    }

    #[tokio::test]
    async fn added_item_appears_last_in_ascending_order() {
        let service = ItemService::new(FakeItemRepo::default());

        service
            .add_item(NewItem {
                name: "ruler".to_string(),
                value: "1".to_string(),
            })
            .await
            .expect("add must succeed");
        let pencil = service
            .add_item(NewItem {
                name: "pencil".to_string(),
                value: "12".to_string(),
            })
            .await
            .expect("add must succeed");

        let items = service.list_items().await.expect("list must succeed");
        assert_eq!(items.len(), 2);
        assert!(items.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(items.last().expect("must not be empty").id, pencil.id);
        assert_eq!(items.last().expect("must not be empty").name, "pencil");
    }
}
