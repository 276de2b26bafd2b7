use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{type_name, Any};

use crate::buffer::FixedBuffer;
use crate::error::IndexedVecError;
use crate::iter::{Cursor, IntoIter, Iter, Values};

/// Capacity used by [`IndexedVec::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// Target of [`IndexedVec::set_at`]: either the next free slot or an explicit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Append after the last live slot, like `push`
    Append,
    /// Write at the given index, widening the vector if needed
    At(usize),
}

impl From<usize> for Position {
    fn from(index: usize) -> Self {
        Position::At(index)
    }
}

impl From<Option<usize>> for Position {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Position::Append, Position::At)
    }
}

/// A growable vector on top of a fixed-capacity slot buffer
#[derive(Debug, Clone)]
pub struct IndexedVec<T> {
    buffer: FixedBuffer<T>,
    capacity: usize,
    len: usize,
}

impl<T> IndexedVec<T> {
    /// Creates an empty `IndexedVec` with the default capacity (8).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `IndexedVec` backed by `capacity` empty slots.
    ///
    /// A capacity of 0 is allowed; the first push grows it to 1.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: FixedBuffer::new(capacity),
            capacity,
            len: 0,
        }
    }

    /// Creates a dense `IndexedVec` from an ordered sequence.
    ///
    /// Capacity and length both equal the number of values.
    pub fn from_sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_slots(values.into_iter().map(Some))
    }

    /// Creates an `IndexedVec` from slots that may be empty.
    ///
    /// This is the inverse of [`IndexedVec::to_sequence`].
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Self::from_buffer(slots.into_iter().collect())
    }

    /// Creates an `IndexedVec` that keeps the keys of `entries` as indices.
    ///
    /// Length and capacity are the largest key plus one; keys that are missing
    /// become empty slots. When a key repeats, the last value wins.
    ///
    /// # Errors
    ///
    /// Returns `IndexedVecError::InvalidInput` if `entries` is empty or the largest
    /// key is `usize::MAX`.
    pub fn from_keyed<I>(entries: I) -> Result<Self, IndexedVecError>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let entries: Vec<(usize, T)> = entries.into_iter().collect();
        let max_key = entries
            .iter()
            .map(|(key, _)| *key)
            .max()
            .ok_or(IndexedVecError::InvalidInput {
                reason: "cannot derive a length from an empty keyed sequence",
            })?;
        let len = max_key.checked_add(1).ok_or(IndexedVecError::InvalidInput {
            reason: "key is too large to be an index",
        })?;

        let mut slots: Vec<Option<T>> = Vec::with_capacity(len);
        slots.resize_with(len, || None);
        for (key, value) in entries {
            if let Some(slot) = slots.get_mut(key) {
                *slot = Some(value);
            }
        }
        Ok(Self::from_slots(slots))
    }

    /// Wraps an existing buffer; every slot of it becomes live.
    #[must_use]
    pub fn from_buffer(buffer: FixedBuffer<T>) -> Self {
        let capacity = buffer.len();
        Self {
            buffer,
            capacity,
            len: capacity,
        }
    }

    /// Wraps a type-erased buffer.
    ///
    /// # Errors
    ///
    /// Returns `IndexedVecError::TypeMismatch` if `value` is not a
    /// `FixedBuffer<T>`.
    pub fn from_any(value: Box<dyn Any>) -> Result<Self, IndexedVecError>
    where
        T: 'static,
    {
        value
            .downcast::<FixedBuffer<T>>()
            .map(|buffer| Self::from_buffer(*buffer))
            .map_err(|_| IndexedVecError::TypeMismatch {
                expected: type_name::<FixedBuffer<T>>(),
            })
    }

    #[inline]
    fn assert_invariants(&self) {
        debug_assert!(self.len <= self.capacity);
        debug_assert_eq!(self.capacity, self.buffer.len());
    }

    /// Number of live slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The backing buffer, stale slots included.
    #[must_use]
    pub fn buffer(&self) -> &FixedBuffer<T> {
        &self.buffer
    }

    #[must_use]
    pub fn into_buffer(self) -> FixedBuffer<T> {
        self.buffer
    }

    pub(crate) fn live_slots(&self) -> &[Option<T>] {
        self.buffer.as_slots().get(..self.len).unwrap_or(&[])
    }

    // Doubling is the only automatic growth path.
    fn grow_for_one(&mut self) {
        if self.len + 1 > self.capacity {
            self.capacity = if self.capacity == 0 {
                1
            } else {
                self.capacity << 1
            };
            self.buffer.resize(self.capacity);
        }
    }

    fn resize_exact(&mut self, len: usize) {
        self.capacity = len;
        self.len = len;
        self.buffer.resize(len);
    }

    #[allow(clippy::expect_used)]
    fn write_slot(&mut self, index: usize, value: T) -> Option<T> {
        self.buffer
            .set(index, value)
            .expect("Slot index checked against capacity")
    }

    /// Makes room for at least `additional` more elements with a single
    /// reallocation, doubling the capacity until it fits.
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len.saturating_add(additional);
        if required <= self.capacity {
            return;
        }

        let mut capacity = self.capacity.max(1);
        while capacity < required {
            capacity = capacity.saturating_mul(2);
        }
        self.capacity = capacity;
        self.buffer.resize(capacity);
        self.assert_invariants();
    }

    /// Drops stale slots so that capacity equals length.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity != self.len {
            self.capacity = self.len;
            self.buffer.resize(self.len);
        }
        self.assert_invariants();
    }

    /// Appends a value, doubling the capacity when the buffer is full.
    pub fn push(&mut self, value: T) {
        self.grow_for_one();
        self.write_slot(self.len, value);
        self.len += 1;
        self.assert_invariants();
    }

    /// Removes and returns the last value.
    ///
    /// Returns `None` if the vector is empty or the last slot is empty. The
    /// capacity never shrinks.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let value = self.buffer.take(self.len);
        self.assert_invariants();
        value
    }

    /// Removes and returns the first value, moving the rest one slot down.
    ///
    /// The buffer is rebuilt with exactly the remaining number of slots, so this
    /// is O(n) where `pop` is O(1).
    pub fn shift(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let len = self.len;
        let mut first = None;
        self.buffer.rebuild(|slots| {
            slots.truncate(len);
            first = slots.remove(0);
        });
        self.len -= 1;
        self.capacity = self.len;
        self.assert_invariants();
        first
    }

    /// Inserts a value in front of the first one. O(n).
    pub fn unshift(&mut self, value: T) {
        self.grow_for_one();

        let len = self.len;
        let capacity = self.capacity;
        self.buffer.rebuild(|slots| {
            slots.truncate(len);
            slots.insert(0, Some(value));
            slots.resize_with(capacity, || None);
        });
        self.len += 1;
        self.assert_invariants();
    }

    /// Whether `index` is a live slot. Holes left by `unset` count as live.
    #[must_use]
    pub fn has(&self, index: usize) -> bool {
        index < self.len
    }

    /// Returns the value at `index`.
    ///
    /// Returns `None` if `index` is beyond the length or the slot is empty.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buffer.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        self.buffer.get_mut(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Writes `value` at `index` and returns the value it replaced.
    ///
    /// An index at or beyond the length widens the vector to `index + 1` with one
    /// exact reallocation; the slots in between are empty. Any other index
    /// overwrites the live slot.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.len {
            self.resize_exact(index + 1);
        }
        let previous = self.write_slot(index, value);
        self.assert_invariants();
        previous
    }

    /// Like [`IndexedVec::set`], but `Position::Append` behaves like `push`.
    pub fn set_at(&mut self, position: Position, value: T) -> Option<T> {
        match position {
            Position::Append => {
                self.push(value);
                None
            }
            Position::At(index) => self.set(index, value),
        }
    }

    /// Empties the slot at `index` without changing the length.
    ///
    /// The slot stays live, so `has(index)` is still true while `get(index)` is
    /// `None`. Indices beyond the length are ignored.
    pub fn unset(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.buffer.take(index)
    }

    /// Removes every value, keeping the capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.len = 0;
        self.assert_invariants();
    }

    /// Returns an iterator over the live slots, `None` for holes.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.live_slots())
    }

    /// Returns an iterator over present values, skipping holes.
    #[must_use]
    pub fn values(&self) -> Values<'_, T> {
        Values::new(self.iter())
    }

    /// Returns a cursor positioned at index 0.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Copies the live slots into a vector, holes included.
    #[must_use]
    pub fn to_sequence(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        self.live_slots().to_vec()
    }

    /// Copies the present values into a vector, holes skipped.
    #[must_use]
    pub fn to_values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values().cloned().collect()
    }

    /// Returns a new dense `IndexedVec` keeping the first occurrence of every
    /// value. Equality is `PartialEq`; all holes count as one value.
    #[must_use]
    pub fn unique(&self) -> Self
    where
        T: PartialEq + Clone,
    {
        self.unique_by(|a, b| a == b)
    }

    /// Like [`IndexedVec::unique`] with a caller-provided equality.
    #[must_use]
    pub fn unique_by<F>(&self, mut eq: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let mut kept: Vec<Option<T>> = Vec::with_capacity(self.len);
        for slot in self.iter() {
            let seen = kept.iter().any(|existing| match (existing, slot) {
                (Some(a), Some(b)) => eq(a, b),
                (None, None) => true,
                _ => false,
            });
            if !seen {
                kept.push(slot.cloned());
            }
        }
        Self::from_slots(kept)
    }

    /// Index of the first value equal to `target`. Holes never match.
    #[must_use]
    pub fn search(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.search_by(|value, _| value == target)
    }

    /// Index of the first value for which `predicate(value, index)` holds.
    /// Holes are skipped.
    pub fn search_by<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T, usize) -> bool,
    {
        for (index, slot) in self.iter().enumerate() {
            if let Some(value) = slot {
                if predicate(value, index) {
                    return Some(index);
                }
            }
        }
        None
    }

    /// Returns a new `IndexedVec` with `f` applied to every value in order.
    ///
    /// Holes stay holes. The capacity of the result equals the length of `self`.
    #[must_use]
    pub fn transform<U, F>(&self, mut f: F) -> IndexedVec<U>
    where
        F: FnMut(&T) -> U,
    {
        IndexedVec::from_slots(self.iter().map(|slot| slot.map(&mut f)))
    }

    /// Applies `f` to every value in place.
    pub fn transform_in_place<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        for index in 0..self.len {
            if let Some(value) = self.buffer.get_mut(index) {
                f(value);
            }
        }
    }

    /// Returns a new `IndexedVec` with the live slots in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        Self::from_slots(self.iter().rev().map(|slot| slot.cloned()))
    }

    /// Returns a new `IndexedVec` holding the slots of `self` followed by those
    /// of `other`.
    ///
    /// The result is allocated once with capacity `self.len() + other.len()`.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        let mut slots = Vec::with_capacity(self.len + other.len);
        slots.extend_from_slice(self.live_slots());
        slots.extend_from_slice(other.live_slots());
        Self::from_buffer(FixedBuffer::from(slots))
    }
}

impl<T> Default for IndexedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Two vectors are equal when their live slots are equal; capacity is ignored.
impl<T: PartialEq> PartialEq for IndexedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.live_slots() == other.live_slots()
    }
}

impl<T: Eq> Eq for IndexedVec<T> {}

impl<T> Extend<T> for IndexedVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for IndexedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T> From<Vec<T>> for IndexedVec<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_sequence(values)
    }
}

impl<T, const N: usize> From<[T; N]> for IndexedVec<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_sequence(values)
    }
}

impl<T> From<FixedBuffer<T>> for IndexedVec<T> {
    fn from(buffer: FixedBuffer<T>) -> Self {
        Self::from_buffer(buffer)
    }
}

impl<T> IntoIterator for IndexedVec<T> {
    type Item = Option<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let len = self.len;
        let mut slots = self.buffer.into_slots();
        slots.truncate(len);
        IntoIter::new(slots)
    }
}

impl<'a, T> IntoIterator for &'a IndexedVec<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
