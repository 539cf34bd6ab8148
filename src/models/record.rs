//! Schemaless entity record
//!
//! Equipment, teams and requests are stored as JSON objects: the fields the
//! server understands are listed in [`fields`], anything else a client sends
//! is kept verbatim.

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Wire names of the fields the server reads or writes
pub mod fields {
    pub const ID: &str = "id";
    pub const CREATED_AT: &str = "createdAt";
    pub const NAME: &str = "name";
    pub const CATEGORY: &str = "category";
    pub const TEAM_ID: &str = "teamId";
    pub const MEMBERS: &str = "members";
    pub const SUBJECT: &str = "subject";
    pub const TYPE: &str = "type";
    pub const STAGE: &str = "stage";
    pub const EQUIPMENT_ID: &str = "equipmentId";
    pub const SCHEDULED_DATE: &str = "scheduledDate";
    pub const ASSIGNED_TO: &str = "assignedTo";
}

/// A stored entity: an insertion-ordered JSON object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the stored form of a freshly inserted payload.
    ///
    /// `id` comes first and `createdAt` last; a payload cannot supply either.
    pub fn stamped(id: String, payload: Record, created_at: DateTime<Utc>) -> Self {
        let mut map = IndexMap::with_capacity(payload.0.len() + 2);
        map.insert(fields::ID.to_string(), Value::String(id));
        for (key, value) in payload.0 {
            if key != fields::ID && key != fields::CREATED_AT {
                map.insert(key, value);
            }
        }
        map.insert(
            fields::CREATED_AT.to_string(),
            Value::String(created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        Self(map)
    }

    /// Shallow merge: every key of `patch` overwrites, every other key is kept.
    ///
    /// Existing keys keep their position, new keys are appended. The
    /// identifier is never replaced.
    pub fn merge(&mut self, patch: Record) {
        for (key, value) in patch.0 {
            if key == fields::ID {
                continue;
            }
            self.0.insert(key, value);
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.get_str(fields::ID)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field value when it is a JSON string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn insert(&mut self, key: &str, value: Value) -> Option<Value> {
        self.0.insert(key.to_string(), value)
    }

    /// Remove a field, keeping the order of the remaining ones
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
