//! Id projection and lookup over entity sequences.
//!
//! Two ways in:
//!
//! - The free functions ([`project_ids`], [`contains_id`], [`find_by_id`])
//!   accept any `IntoIterator` of entities, wrapped in `Option` so callers
//!   holding a possibly-absent sequence don't need a guard of their own.
//!   They make a single pass and preallocate from the iterator's
//!   `size_hint()`.
//! - The [`EntityIdExt`] methods on concrete containers are the fast
//!   tiers: contiguous storage fills an exact-capacity buffer by index,
//!   counted storage preallocates exactly and fills through its iterator.
//!
//! Every tier returns identical results for identical logical input; the
//! tiers differ only in allocation and iteration cost. Nothing here
//! mutates the sequence or its elements, and a single-pass sequence is
//! consumed at most once. Iterator state is released by drop on every exit
//! path, including early return on a match and unwinding out of a faulty
//! sequence.

use std::collections::VecDeque;

use crate::entity::Identified;

/// Collects the ids of `entities`, in sequence order.
///
/// Duplicates are preserved and nothing is sorted; an absent sequence
/// yields an empty vec. Exact-size sequences (slices, the std collections)
/// report their length through `size_hint()` and get a single
/// exact-capacity allocation; anything else starts from the hint's lower
/// bound and grows as needed.
pub fn project_ids<I>(entities: Option<I>) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Identified,
{
    let Some(entities) = entities else {
        return Vec::new();
    };

    let iter = entities.into_iter();
    let mut ids = Vec::with_capacity(match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => upper,
        (lower, _) => lower,
    });
    for entity in iter {
        ids.push(entity.id().to_owned());
    }
    ids
}

/// Tests whether `entities` contains an element whose id equals `id`.
///
/// Comparison is ordinal `str` equality: byte-exact and case-sensitive.
/// Returns false without traversal when the sequence is absent, when `id`
/// is empty, or when the sequence reports a size of zero. Otherwise stops
/// at the first match.
pub fn contains_id<I>(entities: Option<I>, id: &str) -> bool
where
    I: IntoIterator,
    I::Item: Identified,
{
    find_by_id(entities, id).is_some()
}

/// Returns the first element of `entities` whose id equals `id`.
///
/// Same traversal policy as [`contains_id`]: absent sequence, empty `id`,
/// or a reported size of zero short-circuit to `None` before the sequence
/// is touched. A zero size report is taken at its word even for sequences
/// that would still yield elements.
pub fn find_by_id<I>(entities: Option<I>, id: &str) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: Identified,
{
    if id.is_empty() {
        return None;
    }

    let mut iter = entities?.into_iter();
    if iter.size_hint().1 == Some(0) {
        return None;
    }
    iter.find(|entity| entity.id() == id)
}

/// Extension methods over in-memory entity containers.
///
/// These are the fast tiers of the free functions above, for callers that
/// already hold a concrete container. The `[T]` impl covers arrays,
/// slices, `Vec` and boxed slices through deref; `VecDeque` gets its own
/// impl because its storage may wrap.
pub trait EntityIdExt {
    /// Element type of the container.
    type Entity: Identified;

    /// Ordered ids, duplicates preserved.
    fn ids(&self) -> Vec<String>;

    /// Ordinal membership test by id. Empty containers and an empty `id`
    /// are false without scanning.
    fn has_id(&self, id: &str) -> bool;

    /// First element with a matching id, if any.
    fn find_by_id(&self, id: &str) -> Option<&Self::Entity>;
}

impl<T: Identified> EntityIdExt for [T] {
    type Entity = T;

    fn ids(&self) -> Vec<String> {
        // Contiguous storage: exact capacity up front, index loop instead
        // of iterator state.
        let mut ids = Vec::with_capacity(self.len());
        for idx in 0..self.len() {
            ids.push(self[idx].id().to_owned());
        }
        ids
    }

    fn has_id(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    fn find_by_id(&self, id: &str) -> Option<&T> {
        if id.is_empty() || self.is_empty() {
            return None;
        }
        for idx in 0..self.len() {
            if self[idx].id() == id {
                return Some(&self[idx]);
            }
        }
        None
    }
}

impl<T: Identified> EntityIdExt for VecDeque<T> {
    type Entity = T;

    fn ids(&self) -> Vec<String> {
        // len() is known without traversal, but the ring buffer may wrap,
        // so fill through the iterator.
        let mut ids = Vec::with_capacity(self.len());
        for entity in self {
            ids.push(entity.id().to_owned());
        }
        ids
    }

    fn has_id(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    fn find_by_id(&self, id: &str) -> Option<&T> {
        if id.is_empty() || self.is_empty() {
            return None;
        }
        self.iter().find(|entity| entity.id() == id)
    }
}
