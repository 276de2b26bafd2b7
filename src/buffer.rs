use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::IndexedVecError;

/// Fixed-length array of slots, each holding a value or empty.
///
/// The length only changes through [`FixedBuffer::resize`], which reallocates and
/// keeps slots `0..min(old, new)` in place. New slots start empty, trailing slots
/// are dropped on shrink. The buffer counts its reallocations so that callers can
/// observe how often storage was rebuilt.
#[derive(Debug, Clone)]
pub struct FixedBuffer<T> {
    slots: Box<[Option<T>]>,
    reallocations: usize,
}

impl<T> FixedBuffer<T> {
    /// Creates a buffer of `len` empty slots.
    ///
    /// ```
    /// use indexed_vec::FixedBuffer;
    ///
    /// let buffer = FixedBuffer::<u32>::new(4);
    /// assert_eq!(buffer.len(), 4);
    /// assert_eq!(buffer.get(0), None);
    /// ```
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: core::iter::repeat_with(|| None).take(len).collect(),
            reallocations: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of times the slot storage was reallocated since construction.
    #[must_use]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Returns the value in slot `index`.
    ///
    /// Returns `None` if the slot is empty or `index` is past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index)?.as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index)?.as_mut()
    }

    /// Stores `value` in slot `index`, returning the previous content.
    ///
    /// # Errors
    ///
    /// Returns `IndexedVecError::IndexOutOfBounds` if `index` is not below the
    /// buffer length.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, IndexedVecError> {
        let length = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(IndexedVecError::IndexOutOfBounds { index, length })?;
        Ok(slot.replace(value))
    }

    /// Empties slot `index` and returns what it held.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index)?.take()
    }

    /// Empties every slot, keeping the length.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Reallocates the buffer to `new_len` slots.
    ///
    /// A resize to the current length is a no-op and does not count as a
    /// reallocation.
    pub fn resize(&mut self, new_len: usize) {
        if new_len == self.slots.len() {
            return;
        }
        self.rebuild(|slots| slots.resize_with(new_len, || None));
    }

    /// Moves the slots into a plain vector, lets `f` rearrange them, and
    /// reallocates the buffer from the result.
    pub(crate) fn rebuild<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<Option<T>>),
    {
        let mut slots = core::mem::take(&mut self.slots).into_vec();
        f(&mut slots);
        self.slots = slots.into_boxed_slice();
        self.reallocations += 1;
    }

    #[must_use]
    pub fn as_slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Copies the slots out into a vector, empty slots included.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Option<T>>
    where
        T: Clone,
    {
        self.slots.to_vec()
    }

    #[must_use]
    pub fn into_slots(self) -> Vec<Option<T>> {
        self.slots.into_vec()
    }
}

impl<T> From<Vec<Option<T>>> for FixedBuffer<T> {
    fn from(slots: Vec<Option<T>>) -> Self {
        Self {
            slots: slots.into_boxed_slice(),
            reallocations: 0,
        }
    }
}

impl<T> FromIterator<Option<T>> for FixedBuffer<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
            reallocations: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = FixedBuffer::<u8>::new(3);
        assert_eq!(buffer.len(), 3);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.to_vec(), vec![None, None, None]);
        assert_eq!(buffer.reallocations(), 0);
    }

    #[test]
    fn test_set_and_take() {
        let mut buffer = FixedBuffer::new(2);

        assert_eq!(buffer.set(1, "b"), Ok(None));
        assert_eq!(buffer.set(1, "c"), Ok(Some("b")));
        assert_eq!(buffer.get(1), Some(&"c"));

        assert_eq!(buffer.take(1), Some("c"));
        assert_eq!(buffer.get(1), None);
        assert_eq!(buffer.take(1), None);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut buffer = FixedBuffer::new(2);
        assert_eq!(
            buffer.set(2, 7),
            Err(IndexedVecError::IndexOutOfBounds {
                index: 2,
                length: 2
            })
        );
        assert_eq!(buffer.get(2), None);
        assert_eq!(buffer.take(5), None);
    }

    #[test]
    fn test_grow_preserves_slots() {
        let mut buffer = FixedBuffer::from(vec![Some(1), None, Some(3)]);
        buffer.resize(5);

        assert_eq!(buffer.to_vec(), vec![Some(1), None, Some(3), None, None]);
        assert_eq!(buffer.reallocations(), 1);
    }

    #[test]
    fn test_shrink_drops_trailing_slots() {
        let mut buffer = FixedBuffer::from(vec![Some(1), Some(2), Some(3)]);
        buffer.resize(1);

        assert_eq!(buffer.into_slots(), vec![Some(1)]);
    }

    #[test]
    fn test_resize_to_same_length_is_free() {
        let mut buffer = FixedBuffer::<u8>::new(4);
        buffer.resize(4);
        assert_eq!(buffer.reallocations(), 0);
    }

    #[test]
    fn test_clear_keeps_length() {
        let mut buffer: FixedBuffer<_> = [Some('a'), Some('b')].into_iter().collect();
        buffer.clear();

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.as_slots(), &[None, None]);
    }
}
