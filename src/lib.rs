#![no_std]

//! `IndexedVec`: a growable, randomly-indexable vector on top of a fixed-capacity slot buffer.
//!
//! `IndexedVec` provides vector, stack and queue interfaces over a single
//! [`FixedBuffer`], a boxed array of slots that only changes size when it is
//! explicitly reallocated. The vector tracks a logical length separately from the
//! buffer capacity and grows the buffer geometrically.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! Buffer layout: [live slots `0..len`][stale slots `len..capacity`]
//! Stale slots are always empty and never visible through the public API.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `push()`: amortized O(1), the capacity doubles when full
//! - `pop()`, `get()`, `set()` within the length, `unset()`: O(1)
//! - `set()` beyond the length: O(n), one exact reallocation
//! - `shift()`, `unshift()`: O(n), the buffer is rebuilt
//! - `merge()`, `reverse()`, `transform()`: O(n), one allocation for the result
//! - `unique()`, `unique_by()`: O(n²), only equality is required of the values
//!
//! ## Growth
//! - Pushing N values into an empty vector reallocates O(log N) times
//! - A capacity of 0 grows to 1 on the first push
//! - Removing values never shrinks the capacity; use `shrink_to_fit()`
//!
//! ## `no_std` Compatibility
//!
//! The `std` feature is enabled by default. Without it the crate uses only
//! `core` and `alloc`:
//! ```toml
//! [dependencies]
//! indexed_vec = { version = "0.1", default-features = false }
//! ```
//!
//! # Stack Interface
//!
//! ```
//! # use indexed_vec::IndexedVec;
//! let mut v = IndexedVec::with_capacity(3);
//!
//! v.push("char1");
//! v.push("char2");
//! v.push("char3");
//! v.push("char4"); // capacity doubles to 6
//!
//! assert_eq!(v.len(), 4);
//! assert_eq!(v.capacity(), 6);
//! assert_eq!(v.pop(), Some("char4"));
//! assert_eq!(v.pop(), Some("char3"));
//!
//! // An empty vector pops `None`
//! v.clear();
//! assert_eq!(v.pop(), None);
//! ```
//!
//! # Queue Interface
//!
//! `shift()` and `unshift()` work on the head of the vector. They rebuild the
//! buffer and are O(n):
//!
//! ```
//! # use indexed_vec::IndexedVec;
//! let mut v = IndexedVec::from_sequence([2, 3]);
//! v.unshift(1);
//!
//! assert_eq!(v.shift(), Some(1));
//! assert_eq!(v.shift(), Some(2));
//! assert_eq!(v.len(), 1);
//! ```
//!
//! # Indexed Access
//!
//! Reads are bounded by the logical length. Writing beyond the length widens the
//! vector; `unset()` leaves a hole without changing the length:
//!
//! ```
//! # use indexed_vec::{IndexedVec, Position};
//! let mut v = IndexedVec::new();
//!
//! v.set_at(Position::Append, 'a'); // same as push
//! v.set(3, 'd');                   // widens to length 4
//!
//! assert_eq!(v.len(), 4);
//! assert!(v.has(2));
//! assert_eq!(v.get(2), None); // live but empty
//! assert_eq!(v.get(4), None); // beyond the length
//!
//! v.unset(0);
//! assert_eq!(v.len(), 4);
//! assert_eq!(v.to_sequence(), vec![None, None, None, Some('d')]);
//! ```
//!
//! Sparse input keeps its keys as indices:
//!
//! ```
//! # use indexed_vec::IndexedVec;
//! let v = IndexedVec::from_keyed([(2, "c"), (0, "a")]).unwrap();
//! assert_eq!(v.to_sequence(), vec![Some("a"), None, Some("c")]);
//!
//! assert!(IndexedVec::<&str>::from_keyed([]).is_err());
//! ```
//!
//! # Bulk Operations
//!
//! `unique()`, `transform()`, `reverse()` and `merge()` return new vectors and
//! leave their inputs untouched:
//!
//! ```
//! # use indexed_vec::IndexedVec;
//! let a = IndexedVec::from_sequence([1, 3, 5]);
//! let b = IndexedVec::from_sequence([5, 1]);
//!
//! let merged = a.merge(&b);
//! assert_eq!(merged.to_values(), vec![1, 3, 5, 5, 1]);
//! assert_eq!(merged.unique().to_values(), vec![1, 3, 5]);
//! assert_eq!(a.transform(|x| x * x).to_values(), vec![1, 9, 25]);
//! assert_eq!(a.reverse().to_values(), vec![5, 3, 1]);
//!
//! assert_eq!(merged.search(&5), Some(2));
//! assert_eq!(merged.search_by(|x, index| *x == 1 && index > 0), Some(4));
//! assert_eq!(merged.search(&7), None);
//! ```
//!
//! # Iterator Support
//!
//! ```
//! # use indexed_vec::IndexedVec;
//! let mut v = IndexedVec::from_sequence(["hello", "world", "!"]);
//! v.unset(2);
//!
//! // Slots, with `None` for holes
//! for slot in &v {
//!     println!("{:?}", slot);
//! }
//!
//! // Values only
//! let collected: Vec<_> = v.values().collect();
//! assert_eq!(collected, vec![&"hello", &"world"]);
//! ```
//!
//! # Serialization
//!
//! `IndexedVec<T: Serialize>` serializes as a sequence of its live slots, and
//! `Display` prints the JSON text:
//!
//! ```
//! # use indexed_vec::IndexedVec;
//! let v = IndexedVec::from_sequence([1, 2, 3]);
//! assert_eq!(v.to_json().unwrap(), "[1,2,3]");
//! assert_eq!(v.to_string(), "[1,2,3]");
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod buffer;
mod core;
mod error;
mod iter;
mod json;

// Re-export public types and traits
pub use crate::buffer::FixedBuffer;
pub use crate::core::{IndexedVec, Position, DEFAULT_CAPACITY};
pub use crate::error::IndexedVecError;
pub use crate::iter::{Cursor, IntoIter, Iter, Values};
