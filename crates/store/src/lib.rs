//! Flat-file JSON key/value store.
//!
//! Stand-alone persistence helper: it is not wired into the web layer, and is
//! driven either programmatically or through the `shelfstock-store` binary.

pub mod file_store;

pub use file_store::{FileStore, Records, StoreError, StoreResult};
