//! Infrastructure layer: persistent key-value storage and path management.

pub mod kv_store;
pub mod paths;
pub mod preference_repository;
pub mod token_repository;

pub use kv_store::{JsonKvStore, KvStoreError};
pub use paths::{AppPaths, PathError};
pub use preference_repository::JsonPreferenceRepository;
pub use token_repository::JsonTokenRepository;
