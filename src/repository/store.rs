//! In-memory entity collections

use chrono::Utc;
use indexmap::IndexMap;
use snowflaked::Generator;

use crate::{
    error::{AppError, AppResult},
    models::Record,
};

/// The three entity collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Equipment,
    Teams,
    Requests,
}

impl Collection {
    /// Singular entity name used in messages
    pub fn entity_name(&self) -> &'static str {
        match self {
            Collection::Equipment => "Equipment",
            Collection::Teams => "Team",
            Collection::Requests => "Request",
        }
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound(format!("{} not found", self.entity_name()))
    }
}

/// Records keyed by identifier, kept in insertion order
type Table = IndexMap<String, Record>;

/// Owner of all entity state
pub struct Store {
    equipment: Table,
    teams: Table,
    requests: Table,
    ids: Generator,
}

impl Store {
    /// Create an empty store; `instance` is stamped into every identifier
    pub fn new(instance: u16) -> Self {
        Self {
            equipment: Table::new(),
            teams: Table::new(),
            requests: Table::new(),
            ids: Generator::new(instance),
        }
    }

    fn table(&self, collection: Collection) -> &Table {
        match collection {
            Collection::Equipment => &self.equipment,
            Collection::Teams => &self.teams,
            Collection::Requests => &self.requests,
        }
    }

    fn table_mut(&mut self, collection: Collection) -> &mut Table {
        match collection {
            Collection::Equipment => &mut self.equipment,
            Collection::Teams => &mut self.teams,
            Collection::Requests => &mut self.requests,
        }
    }

    /// Assign an identifier and creation timestamp, then append
    pub fn insert(&mut self, collection: Collection, payload: Record) -> Record {
        let id = self.ids.generate::<u64>().to_string();
        let record = Record::stamped(id.clone(), payload, Utc::now());
        self.table_mut(collection).insert(id, record.clone());
        record
    }

    /// All records of a collection, oldest first
    pub fn records(&self, collection: Collection) -> impl Iterator<Item = &Record> {
        self.table(collection).values()
    }

    pub fn list(&self, collection: Collection) -> Vec<Record> {
        self.records(collection).cloned().collect()
    }

    pub fn get(&self, collection: Collection, id: &str) -> AppResult<&Record> {
        self.find(collection, id).ok_or_else(|| collection.not_found())
    }

    /// Lookup that treats absence as a normal outcome
    pub fn find(&self, collection: Collection, id: &str) -> Option<&Record> {
        self.table(collection).get(id)
    }

    /// Shallow-merge `patch` onto the stored record
    pub fn update(&mut self, collection: Collection, id: &str, patch: Record) -> AppResult<Record> {
        let record = self
            .table_mut(collection)
            .get_mut(id)
            .ok_or_else(|| collection.not_found())?;
        record.merge(patch);
        Ok(record.clone())
    }

    /// Remove a record, keeping the others in insertion order
    pub fn remove(&mut self, collection: Collection, id: &str) -> AppResult<Record> {
        self.table_mut(collection)
            .shift_remove(id)
            .ok_or_else(|| collection.not_found())
    }

    /// Records whose `field` holds the string `value`
    pub fn filter_by_foreign_key(&self, collection: Collection, field: &str, value: &str) -> Vec<Record> {
        self.records(collection)
            .filter(|record| record.get_str(field) == Some(value))
            .cloned()
            .collect()
    }

    pub fn count(&self, collection: Collection) -> usize {
        self.table(collection).len()
    }
}
