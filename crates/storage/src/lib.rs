#![forbid(unsafe_code)]

pub mod file;
pub mod records;
pub mod repository;

pub use file::FileStore;
pub use records::{decode_flag, decode_flags, encode_flag, encode_flags, SCHEMA_VERSION};
pub use repository::{InMemoryStore, ProgressStore, StorageError, StoreKey};
