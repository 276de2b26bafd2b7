use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::core::IndexedVec;

/// Iterator over the live slots of an `IndexedVec`
///
/// Yields `None` for holes left by `unset`. This iterator implements `Clone`.
pub struct Iter<'a, T> {
    slots: core::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().map(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over the values of an `IndexedVec`, skipping holes
pub struct Values<'a, T> {
    iter: Iter<'a, T>,
}

impl<'a, T> Values<'a, T> {
    pub(crate) fn new(iter: Iter<'a, T>) -> Self {
        Self { iter }
    }
}

impl<T> Clone for Values<'_, T> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.find_map(|slot| slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Holes are only known once visited
        (0, self.iter.size_hint().1)
    }
}

impl<T> DoubleEndedIterator for Values<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.iter.next_back() {
            if slot.is_some() {
                return slot;
            }
        }
        None
    }
}

impl<T> FusedIterator for Values<'_, T> {}

/// Owning iterator over the live slots of an `IndexedVec`
pub struct IntoIter<T> {
    slots: alloc::vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Vec<Option<T>>) -> Self {
        Self {
            slots: slots.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = Option<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Restartable cursor over an `IndexedVec`
///
/// The cursor owns its position, so several cursors can walk the same vector at
/// once. It stays valid while the position is below the vector length.
///
/// ```
/// use indexed_vec::IndexedVec;
///
/// let v = IndexedVec::from_sequence(["a", "b"]);
/// let mut cursor = v.cursor();
///
/// let mut seen = Vec::new();
/// while cursor.is_valid() {
///     seen.push(*cursor.current().unwrap());
///     cursor.advance();
/// }
/// assert_eq!(seen, ["a", "b"]);
///
/// cursor.reset();
/// assert_eq!(cursor.current(), Some(&"a"));
/// ```
pub struct Cursor<'a, T> {
    vec: &'a IndexedVec<T>,
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(vec: &'a IndexedVec<T>) -> Self {
        Self { vec, position: 0 }
    }

    /// Value under the cursor; `None` for a hole or when the cursor is past the end.
    #[must_use]
    pub fn current(&self) -> Option<&'a T> {
        self.vec.get(self.position)
    }

    pub fn advance(&mut self) {
        self.position = self.position.saturating_add(1);
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.vec.has(self.position)
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            vec: self.vec,
            position: self.position,
        }
    }
}
