//! In-memory Book Repository
//!
//! Process-local implementation of the BookRepository trait. Contents are
//! lost on restart; used by tests and by `storage.backend = "memory"`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Book, BookDetails, BookId, BookRepository};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct Store {
    books: BTreeMap<BookId, Book>,
    last_id: BookId,
}

/// In-memory book repository.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    store: RwLock<Store>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with the given books.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let mut store = Store::default();
        for book in books {
            store.last_id = store.last_id.max(book.id);
            store.books.insert(book.id, book);
        }
        Self {
            store: RwLock::new(store),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, AppError> {
        Ok(self.store.read().await.books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, AppError> {
        Ok(self.store.read().await.books.get(&id).cloned())
    }

    async fn save(&self, book: &Book) -> Result<Book, AppError> {
        let mut store = self.store.write().await;
        store.last_id = store.last_id.max(book.id);
        store.books.insert(book.id, book.clone());
        Ok(book.clone())
    }

    async fn insert(&self, details: &BookDetails) -> Result<Book, AppError> {
        let mut store = self.store.write().await;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("book id space exhausted".into()))?;
        store.last_id = id;

        let book = Book::from_details(id, details.clone());
        store.books.insert(id, book.clone());
        Ok(book)
    }

    async fn delete_by_id(&self, id: BookId) -> Result<bool, AppError> {
        Ok(self.store.write().await.books.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.store.read().await.books.len() as i64)
    }

    async fn exists_by_id(&self, id: BookId) -> Result<bool, AppError> {
        Ok(self.store.read().await.books.contains_key(&id))
    }
}
