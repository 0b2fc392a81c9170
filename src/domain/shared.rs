use super::*;
use super::manager::ContactBook;
use std::sync::{Arc, Mutex};

/// Thread-safe handle over a `ContactBook`.
///
/// `add` runs its duplicate check, append and write under one lock, so two
/// threads adding the same email can never both succeed. Reads hand out
/// owned snapshots so no lock outlives the call.
#[derive(Clone)]
pub struct SharedContactBook {
    inner: Arc<Mutex<ContactBook>>,
}

impl SharedContactBook {
    pub fn new(book: ContactBook) -> Self {
        Self {
            inner: Arc::new(Mutex::new(book)),
        }
    }

    pub fn load(&self) -> Result<Vec<Contact>, AppError> {
        let mut book = self.inner.lock()?;
        Ok(book.load()?.to_vec())
    }

    /// Returns the number of contacts after the insert.
    pub fn add(&self, candidate: Contact) -> Result<usize, AppError> {
        let mut book = self.inner.lock()?;
        Ok(book.add(candidate)?.len())
    }

    pub fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        let book = self.inner.lock()?;
        Ok(book.list_all().to_vec())
    }

    pub fn list_favorites(&self) -> Result<Vec<Contact>, AppError> {
        let book = self.inner.lock()?;
        Ok(book.list_favorites().into_iter().cloned().collect())
    }
}
