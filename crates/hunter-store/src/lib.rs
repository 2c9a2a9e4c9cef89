//! hunter-store
//!
//! Persistence collaborator for Hunter Evolution. The device store is a
//! generic string-keyed key-value store with JSON payloads; this crate
//! defines the trait boundary, an in-memory implementation, the key
//! constants, and typed snapshot load/save with default recovery on
//! malformed payloads.

pub mod error;
pub mod keys;
pub mod kv;
pub mod snapshot;

pub use error::StoreError;
pub use kv::{KeyValueStore, MemoryStore};
pub use snapshot::{load_or_default, save, SystemSnapshot};
