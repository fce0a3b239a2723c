mod storage;

pub use storage::{IStorageService, InMemoryStorageService, ObjectStorageService, StoredObject};
