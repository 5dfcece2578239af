//! Flat key-value container handed to the search engine.
//!
//! Values are either a 32-bit integer or an ordered list of strings. The
//! binary form is postcard prefixed with a single format version byte.

use crate::error::BundleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const BUNDLE_FORMAT_VERSION: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BundleValue {
    Int(i32),
    StringList(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    entries: BTreeMap<String, BundleValue>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an integer, replacing any previous value under `key`.
    pub fn put_int(&mut self, key: impl Into<String>, value: i32) {
        self.entries.insert(key.into(), BundleValue::Int(value));
    }

    /// Stores a string list, replacing any previous value under `key`.
    pub fn put_string_list(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.entries.insert(key.into(), BundleValue::StringList(values));
    }

    /// Returns `Ok(None)` if `key` is absent and an error if it holds a list.
    pub fn get_int(&self, key: &str) -> Result<Option<i32>, BundleError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(BundleValue::Int(value)) => Ok(Some(*value)),
            Some(BundleValue::StringList(_)) => Err(BundleError::TypeMismatch {
                key: key.to_string(),
                expected: "an int",
            }),
        }
    }

    /// Returns `Ok(None)` if `key` is absent and an error if it holds an int.
    pub fn get_string_list(&self, key: &str) -> Result<Option<&[String]>, BundleError> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(BundleValue::StringList(values)) => Ok(Some(values.as_slice())),
            Some(BundleValue::Int(_)) => Err(BundleError::TypeMismatch {
                key: key.to_string(),
                expected: "a string list",
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&BundleValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, BundleError> {
        Ok(postcard::to_extend(self, vec![BUNDLE_FORMAT_VERSION])?)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, BundleError> {
        let (version, data) = data.split_first().ok_or(BundleError::Empty)?;
        match *version {
            BUNDLE_FORMAT_VERSION => Ok(postcard::from_bytes(data)?),
            version => Err(BundleError::UnsupportedVersion(version)),
        }
    }
}
