pub mod object_storage;

pub use object_storage::{object_key, ObjectStorage, StorageError};
