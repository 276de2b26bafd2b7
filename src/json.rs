use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::IndexedVec;

/// Serializes the live slots as a sequence; holes become `null`.
impl<T: Serialize> Serialize for IndexedVec<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Reads a sequence; `null` entries become holes.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for IndexedVec<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Option<T>>::deserialize(deserializer).map(IndexedVec::from_slots)
    }
}

impl<T: Serialize> IndexedVec<T> {
    /// Encodes the live slots as a compact JSON array.
    ///
    /// # Errors
    ///
    /// Returns the error of the element serializer, for example a map with
    /// non-string keys.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Encodes the live slots as an indented JSON array.
    ///
    /// # Errors
    ///
    /// Same as [`IndexedVec::to_json`].
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<T: Serialize> fmt::Display for IndexedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
