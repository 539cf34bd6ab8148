//! Equipment lookups for requests: the one-time copy of equipment fields at
//! creation, and the equipment label shown on a card

use crate::{
    models::{fields, Record},
    repository::{Collection, Store},
};

/// Label shown for a request whose equipment cannot be resolved
pub const UNKNOWN_EQUIPMENT: &str = "Unknown Equipment";

/// Fields copied from equipment onto a new request
const DERIVED_FIELDS: [&str; 2] = [fields::CATEGORY, fields::TEAM_ID];

/// Resolves request-to-equipment references against a borrowed store
pub struct EnrichmentResolver<'a> {
    store: &'a Store,
}

impl<'a> EnrichmentResolver<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Equipment named by the request's `equipmentId`, if it still exists
    pub fn equipment_for(&self, request: &Record) -> Option<&'a Record> {
        let equipment_id = request.get_str(fields::EQUIPMENT_ID)?;
        self.store.find(Collection::Equipment, equipment_id)
    }

    /// Copy category and team from the referenced equipment onto a request
    /// about to be inserted.
    ///
    /// A missing or dangling `equipmentId` leaves the payload untouched.
    pub fn enrich(&self, mut payload: Record) -> Record {
        let Some(equipment) = self.equipment_for(&payload) else {
            if let Some(equipment_id) = payload.get_str(fields::EQUIPMENT_ID) {
                tracing::warn!("Equipment {} not found, request created without category/team", equipment_id);
            }
            return payload;
        };

        for field in DERIVED_FIELDS {
            match equipment.get(field) {
                Some(value) => {
                    payload.insert(field, value.clone());
                }
                None => {
                    payload.remove(field);
                }
            }
        }
        payload
    }

    /// Name of the request's equipment, or [`UNKNOWN_EQUIPMENT`]
    pub fn equipment_label(&self, request: &Record) -> &'a str {
        self.equipment_for(request)
            .and_then(|equipment| equipment.get_str(fields::NAME))
            .unwrap_or(UNKNOWN_EQUIPMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    fn store_with_pump() -> (Store, String) {
        let mut store = Store::new(0);
        let pump = store.insert(
            Collection::Equipment,
            record(json!({ "name": "Feed Pump", "category": "Pump", "teamId": "T1" })),
        );
        let id = pump.id().unwrap().to_string();
        (store, id)
    }

    #[test]
    fn test_enrich_copies_category_and_team() {
        let (store, pump_id) = store_with_pump();
        let resolver = EnrichmentResolver::new(&store);

        let enriched = resolver.enrich(record(json!({ "subject": "Leak", "equipmentId": pump_id })));
        assert_eq!(enriched.get_str(fields::CATEGORY), Some("Pump"));
        assert_eq!(enriched.get_str(fields::TEAM_ID), Some("T1"));
        assert_eq!(enriched.get_str(fields::SUBJECT), Some("Leak"));
    }

    #[test]
    fn test_enrich_unknown_equipment_is_silent() {
        let (store, _) = store_with_pump();
        let resolver = EnrichmentResolver::new(&store);

        let payload = record(json!({ "subject": "Noise", "equipmentId": "missing" }));
        let enriched = resolver.enrich(payload.clone());
        assert_eq!(enriched, payload);
        assert!(!enriched.contains_key(fields::CATEGORY));
        assert!(!enriched.contains_key(fields::TEAM_ID));
    }

    #[test]
    fn test_enrich_equipment_wins_over_payload() {
        let mut store = Store::new(0);
        let lathe = store.insert(Collection::Equipment, record(json!({ "name": "Lathe", "category": "Machining" })));
        let resolver = EnrichmentResolver::new(&store);

        let enriched = resolver.enrich(record(json!({
            "equipmentId": lathe.id().unwrap(),
            "category": "Guess",
            "teamId": "T9",
        })));
        assert_eq!(enriched.get_str(fields::CATEGORY), Some("Machining"));
        // Lathe has no team, so neither does the request
        assert!(!enriched.contains_key(fields::TEAM_ID));
    }

    #[test]
    fn test_equipment_label() {
        let (store, pump_id) = store_with_pump();
        let resolver = EnrichmentResolver::new(&store);

        assert_eq!(resolver.equipment_label(&record(json!({ "equipmentId": pump_id }))), "Feed Pump");
        assert_eq!(resolver.equipment_label(&record(json!({ "equipmentId": "gone" }))), UNKNOWN_EQUIPMENT);
        assert_eq!(resolver.equipment_label(&Record::new()), UNKNOWN_EQUIPMENT);
    }
}
