//! Record storage behind an injectable trait.
//!
//! Handlers receive an `Arc<dyn Store<R>>`; the server wires in
//! [`MemoryStore`], tests can wire in anything else.

use std::fmt;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::StoreError;

/// Identifier of a stored record.
///
/// Stores hand out ids from a numeric sequence, so every id type must be
/// constructible from a sequence number and report the number it holds (if any).
pub trait RecordId: Clone + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Builds the id for the given sequence number.
    fn from_sequence(seq: u64) -> Self;

    /// Returns the numeric value of this id, if it has one.
    fn sequence(&self) -> Option<u64>;
}

/// A record type that can be kept in a [`Store`].
pub trait Resource: Clone + Send + Sync + 'static {
    type Id: RecordId;
    /// Validated input for creating a record.
    type Draft: Send + 'static;
    /// Validated partial update.
    type Patch: Send + 'static;

    /// Name used in log lines and error messages.
    const KIND: &'static str;

    /// Name of the secondary unique key, if the resource has one.
    const SECONDARY_KEY: Option<&'static str> = None;

    fn id(&self) -> &Self::Id;

    fn secondary_key(&self) -> Option<&str> {
        None
    }

    /// Builds a record from a draft and its assigned id.
    fn create(id: Self::Id, draft: Self::Draft) -> Self;

    /// Merges the supplied fields of a patch into this record.
    fn apply(&mut self, patch: Self::Patch);
}

/// Key used to find a single record.
#[derive(Debug, Clone)]
pub enum Lookup<'a, I> {
    Id(&'a I),
    SecondaryKey(&'a str),
}

impl<I: RecordId> Lookup<'_, I> {
    fn matches<R: Resource<Id = I>>(&self, record: &R) -> bool {
        match self {
            Lookup::Id(id) => record.id() == *id,
            Lookup::SecondaryKey(key) => record.secondary_key() == Some(*key),
        }
    }
}

/// Storage for one resource type.
///
/// Every operation is atomic with respect to the others: a failed `insert`
/// or `update` leaves the stored records untouched.
#[async_trait]
pub trait Store<R: Resource>: Send + Sync {
    /// Returns every record in insertion order.
    async fn all(&self) -> Vec<R>;

    /// Finds a record by id or secondary key.
    async fn get(&self, key: Lookup<'_, R::Id>) -> Option<R>;

    /// Stores a new record under the next id in the sequence.
    async fn insert(&self, draft: R::Draft) -> Result<R, StoreError>;

    /// Applies a partial update and returns the updated record.
    async fn update(&self, id: &R::Id, patch: R::Patch) -> Result<R, StoreError>;

    /// Removes a record, returning it.
    async fn delete(&self, id: &R::Id) -> Result<R, StoreError>;
}

struct Inner<R> {
    records: Vec<R>,
    next_seq: u64,
}

/// In-process store holding records in a `Vec` behind a lock.
pub struct MemoryStore<R> {
    inner: RwLock<Inner<R>>,
}

impl<R: Resource> MemoryStore<R> {
    /// Creates an empty store whose sequence starts at 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Vec::new(),
                next_seq: 1,
            }),
        }
    }

    /// Creates a store pre-filled with `records`.
    ///
    /// The sequence continues after the highest numeric seed id. Duplicate
    /// ids or secondary keys are rejected, as is a seed id at `u64::MAX`.
    pub fn seeded(records: Vec<R>) -> Result<Self, StoreError> {
        let mut kept: Vec<R> = Vec::with_capacity(records.len());
        for record in records {
            check_unique(&kept, &record, None)?;
            kept.push(record);
        }

        let next_seq = match kept.iter().filter_map(|r| r.id().sequence()).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or(StoreError::SequenceExhausted { kind: R::KIND })?,
            None => 1,
        };

        Ok(Self {
            inner: RwLock::new(Inner {
                records: kept,
                next_seq,
            }),
        })
    }
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks `candidate` against every record except the one at `skip`.
fn check_unique<R: Resource>(
    records: &[R],
    candidate: &R,
    skip: Option<usize>,
) -> Result<(), StoreError> {
    let others = records
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != skip)
        .map(|(_, r)| r);

    for other in others {
        if other.id() == candidate.id() {
            return Err(StoreError::conflict(R::KIND, "id", candidate.id().to_string()));
        }
        if let (Some(field), Some(key)) = (R::SECONDARY_KEY, candidate.secondary_key()) {
            if other.secondary_key() == Some(key) {
                return Err(StoreError::conflict(R::KIND, field, key));
            }
        }
    }
    Ok(())
}

#[async_trait]
impl<R: Resource> Store<R> for MemoryStore<R> {
    async fn all(&self) -> Vec<R> {
        self.inner.read().await.records.clone()
    }

    async fn get(&self, key: Lookup<'_, R::Id>) -> Option<R> {
        let inner = self.inner.read().await;
        inner.records.iter().find(|r| key.matches(*r)).cloned()
    }

    async fn insert(&self, draft: R::Draft) -> Result<R, StoreError> {
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        let next_seq = seq
            .checked_add(1)
            .ok_or(StoreError::SequenceExhausted { kind: R::KIND })?;

        let record = R::create(R::Id::from_sequence(seq), draft);
        check_unique(&inner.records, &record, None)?;

        inner.next_seq = next_seq;
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &R::Id, patch: R::Patch) -> Result<R, StoreError> {
        let mut inner = self.inner.write().await;
        let idx = inner
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(R::KIND, id))?;

        let mut updated = inner.records[idx].clone();
        updated.apply(patch);
        check_unique(&inner.records, &updated, Some(idx))?;

        inner.records[idx] = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: &R::Id) -> Result<R, StoreError> {
        let mut inner = self.inner.write().await;
        let idx = inner
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(R::KIND, id))?;
        Ok(inner.records.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Asset, AssetId, AssetPatch, NewAsset, NewTask, Task, TaskId, TaskPatch};
    use serde_json::Number;

    fn new_asset(slug: &str) -> NewAsset {
        NewAsset {
            name: format!("Asset {}", slug),
            price: Number::from(100),
            slug: slug.to_string(),
            image: "https://via.placeholder.com/150".to_string(),
        }
    }

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: format!("{} description", title),
            completed: false,
        }
    }

    fn seed_asset(id: &str, slug: &str) -> Asset {
        Asset::create(AssetId::from(id), new_asset(slug))
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids_in_order() {
        let store: MemoryStore<Task> = MemoryStore::new();
        let first = store.insert(new_task("one")).await.unwrap();
        let second = store.insert(new_task("two")).await.unwrap();

        assert_eq!(first.id, TaskId(1));
        assert_eq!(second.id, TaskId(2));

        let titles: Vec<_> = store.all().await.into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn seeded_store_continues_after_highest_id() {
        let store = MemoryStore::seeded(vec![seed_asset("1", "a"), seed_asset("7", "b")]).unwrap();
        let created = store.insert(new_asset("c")).await.unwrap();
        assert_eq!(created.id, AssetId::from("8"));
    }

    #[tokio::test]
    async fn seeded_rejects_id_at_end_of_sequence() {
        let seed = Task::create(TaskId(u64::MAX), new_task("last"));
        let result = MemoryStore::seeded(vec![seed]);
        assert!(matches!(
            result,
            Err(StoreError::SequenceExhausted { kind: "task" })
        ));
    }

    #[tokio::test]
    async fn insert_fails_once_sequence_is_exhausted() {
        let seed = Task::create(TaskId(u64::MAX - 1), new_task("almost"));
        let store = MemoryStore::seeded(vec![seed]).unwrap();

        let err = store.insert(new_task("overflow")).await.unwrap_err();
        assert_eq!(err, StoreError::SequenceExhausted { kind: "task" });
        assert_eq!(store.all().await.len(), 1);
    }

    #[tokio::test]
    async fn seeded_rejects_duplicate_slugs() {
        let result = MemoryStore::seeded(vec![seed_asset("1", "dup"), seed_asset("2", "dup")]);
        assert!(matches!(
            result,
            Err(StoreError::Conflict { field: "slug", .. })
        ));
    }

    #[tokio::test]
    async fn text_seed_ids_do_not_advance_sequence() {
        let store = MemoryStore::seeded(vec![seed_asset("hero", "hero")]).unwrap();
        let created = store.insert(new_asset("next")).await.unwrap();
        assert_eq!(created.id, AssetId::from("1"));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store: MemoryStore<Task> = MemoryStore::new();
        let first = store.insert(new_task("one")).await.unwrap();
        store.delete(&first.id).await.unwrap();

        let second = store.insert(new_task("two")).await.unwrap();
        assert_eq!(second.id, TaskId(2));
    }

    #[tokio::test]
    async fn get_by_secondary_key_matches_get_by_id() {
        let store: MemoryStore<Asset> = MemoryStore::new();
        let created = store.insert(new_asset("widget")).await.unwrap();

        let by_id = store.get(Lookup::Id(&created.id)).await.unwrap();
        let by_slug = store.get(Lookup::SecondaryKey("widget")).await.unwrap();
        assert_eq!(by_id, by_slug);
        assert_eq!(by_id, created);
    }

    #[tokio::test]
    async fn tasks_have_no_secondary_key() {
        let store: MemoryStore<Task> = MemoryStore::new();
        store.insert(new_task("one")).await.unwrap();
        assert!(store.get(Lookup::SecondaryKey("one")).await.is_none());
    }

    #[tokio::test]
    async fn insert_with_taken_slug_is_rejected_and_not_stored() {
        let store: MemoryStore<Asset> = MemoryStore::new();
        store.insert(new_asset("widget")).await.unwrap();

        let err = store.insert(new_asset("widget")).await.unwrap_err();
        assert_eq!(err, StoreError::conflict("asset", "slug", "widget"));
        assert_eq!(store.all().await.len(), 1);
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let store: MemoryStore<Task> = MemoryStore::new();
        let task = store.insert(new_task("one")).await.unwrap();

        let updated = store
            .update(
                &task.id,
                TaskPatch {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "one");
        assert_eq!(updated.description, "one description");
    }

    #[tokio::test]
    async fn update_with_conflicting_slug_leaves_record_unchanged() {
        let store = MemoryStore::seeded(vec![seed_asset("1", "a"), seed_asset("2", "b")]).unwrap();
        let patch = AssetPatch {
            name: Some("Renamed".into()),
            slug: Some("b".into()),
            ..Default::default()
        };

        let err = store.update(&AssetId::from("1"), patch).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict { field: "slug", .. }));

        let unchanged = store.get(Lookup::Id(&AssetId::from("1"))).await.unwrap();
        assert_eq!(unchanged.name, "Asset a");
        assert_eq!(unchanged.slug, "a");
    }

    #[tokio::test]
    async fn update_may_keep_its_own_slug() {
        let store = MemoryStore::seeded(vec![seed_asset("1", "a")]).unwrap();
        let patch = AssetPatch {
            slug: Some("a".into()),
            ..Default::default()
        };
        assert!(store.update(&AssetId::from("1"), patch).await.is_ok());
    }

    #[tokio::test]
    async fn update_and_delete_unknown_id_are_not_found() {
        let store: MemoryStore<Task> = MemoryStore::new();
        assert_eq!(
            store.update(&TaskId(999), TaskPatch::default()).await.unwrap_err(),
            StoreError::not_found("task", 999)
        );
        assert_eq!(
            store.delete(&TaskId(999)).await.unwrap_err(),
            StoreError::not_found("task", 999)
        );
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store: MemoryStore<Task> = MemoryStore::new();
        let task = store.insert(new_task("one")).await.unwrap();

        let removed = store.delete(&task.id).await.unwrap();
        assert_eq!(removed, task);
        assert!(store.get(Lookup::Id(&task.id)).await.is_none());
    }
}
