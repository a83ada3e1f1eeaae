//! Core record types and stores for tally.
//!
//! This crate provides the pieces shared by the server and its configuration:
//!
//! - [`Asset`] and [`Task`] — The two resources exposed over HTTP
//! - [`AssetId`] and [`TaskId`] — Identifier types with by-value comparison
//! - [`Resource`] — What a record type must provide to live in a store
//! - [`Store`] and [`MemoryStore`] — Injected record storage
//! - [`StoreError`] and [`ValidationError`] — Error types
//!
//! # Example
//!
//! ```rust,ignore
//! use tally_core::{Lookup, MemoryStore, NewTask, Store, Task, TaskId};
//!
//! let store: MemoryStore<Task> = MemoryStore::new();
//! let task = store
//!     .insert(NewTask {
//!         title: "Write docs".into(),
//!         description: "Document the store".into(),
//!         completed: false,
//!     })
//!     .await?;
//!
//! assert_eq!(task.id, TaskId(1));
//! assert!(store.get(Lookup::Id(&TaskId(1))).await.is_some());
//! ```

mod asset;
mod error;
mod store;
mod task;
pub mod validate;

pub use asset::{Asset, AssetId, AssetPatch, NewAsset};
pub use error::{StoreError, ValidationError};
pub use store::{Lookup, MemoryStore, RecordId, Resource, Store};
pub use task::{NewTask, Task, TaskId, TaskPatch};
