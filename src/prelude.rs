pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{self, Contact},
    manager::{CONTACTS_KEY, ContactBook},
    shared::SharedContactBook,
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, KeyValueStore, StorageMediums, memory::MemoryStorage, parse_storage_type,
    stores::FileStorage,
};
