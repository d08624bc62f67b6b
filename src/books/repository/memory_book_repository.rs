use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// MemoryBookRepository owns every catalog entry for the lifetime of the process.
// Entries keep the position of the first save for their id.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<IndexMap<String, BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn save(&self, entity: &BookEntity) -> LibraryResult<usize> {
        self.books.write().await.insert(entity.book_id.clone(), entity.clone());
        Ok(1)
    }

    async fn find_by_id(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        Ok(self.books.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.values().cloned().collect())
    }
}
