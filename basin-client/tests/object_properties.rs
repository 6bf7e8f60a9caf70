//! Property-based tests for payload hydration.
//!
//! These verify the construction laws over arbitrary payloads:
//! - every non-reserved key lands in the field map, unchanged
//! - reserved keys are always hoisted into their typed slots
//! - the update timestamp defaults to the creation timestamp exactly when
//!   the payload carries `createdAt` and no `updatedAt`
//! - hydration always marks the instance as persisted

use basin_client::{Class, Object, Pointer};
use proptest::prelude::*;
use serde_json::{Map, Value};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

const RESERVED_KEYS: [&str; 3] = ["objectId", "createdAt", "updatedAt"];

fn field_key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,12}"
        .prop_filter("reserved keys are hoisted, not stored", |key| {
            !RESERVED_KEYS.contains(&key.as_str())
        })
}

fn field_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::from),
    ]
}

fn payload_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(field_key_strategy(), field_value_strategy(), 0..8)
        .prop_map(|map| map.into_iter().collect())
}

fn object_id_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]{8,12}"
}

// =============================================================================
// HYDRATION PROPERTY TESTS
// =============================================================================

mod hydration_properties {
    use super::*;

    proptest! {
        /// Every payload key that is not reserved is stored verbatim.
        #[test]
        fn fields_are_copied_verbatim(payload in payload_strategy()) {
            let object = Object::from_response(Class::new("Item"), payload.clone());

            prop_assert!(object.exists_on_server());
            prop_assert_eq!(object.fields().len(), payload.len());
            for (key, value) in &payload {
                prop_assert_eq!(object.get(key), Some(value));
            }
        }

        /// Reserved keys never leak into the field map.
        #[test]
        fn reserved_keys_are_hoisted(
            payload in payload_strategy(),
            id in object_id_strategy(),
        ) {
            let mut payload = payload;
            payload.insert("objectId".to_string(), Value::from(id.clone()));
            payload.insert("createdAt".to_string(), Value::from("2024-01-01T00:00:00Z"));
            payload.insert("updatedAt".to_string(), Value::from("2024-01-02T00:00:00Z"));

            let object = Object::from_response(Class::new("Item"), payload);

            prop_assert_eq!(object.id(), Some(id.as_str()));
            for key in RESERVED_KEYS {
                prop_assert!(object.get(key).is_none());
            }
        }

        /// Without `updatedAt`, the update timestamp mirrors the creation
        /// timestamp; without either, both stay unset.
        #[test]
        fn update_timestamp_defaults_to_creation(payload in payload_strategy()) {
            let bare = Object::from_response(Class::new("Item"), payload.clone());
            prop_assert_eq!(bare.created_at(), None);
            prop_assert_eq!(bare.updated_at(), None);

            let mut with_created = payload;
            with_created.insert("createdAt".to_string(), Value::from("2024-01-01T00:00:00Z"));
            let object = Object::from_response(Class::new("Item"), with_created);
            prop_assert!(object.created_at().is_some());
            prop_assert_eq!(object.updated_at(), object.created_at());
        }

        /// Hydrating the same payload twice changes nothing.
        #[test]
        fn hydration_is_idempotent(
            payload in payload_strategy(),
            id in object_id_strategy(),
        ) {
            let mut payload = payload;
            payload.insert("objectId".to_string(), Value::from(id));
            payload.insert("createdAt".to_string(), Value::from("2024-01-01T00:00:00Z"));

            let mut object = Object::from_response(Class::new("Item"), payload.clone());
            let before_fields = object.fields().clone();
            let before_created = object.created_at().map(str::to_string);
            let before_updated = object.updated_at().map(str::to_string);

            object.hydrate(payload);

            prop_assert_eq!(object.fields(), &before_fields);
            prop_assert_eq!(object.created_at().map(str::to_string), before_created);
            prop_assert_eq!(object.updated_at().map(str::to_string), before_updated);
        }
    }
}

// =============================================================================
// POINTER PROPERTY TESTS
// =============================================================================

mod pointer_properties {
    use super::*;

    proptest! {
        /// A persisted object's pointer survives serialization unchanged.
        #[test]
        fn pointer_roundtrips_through_json(
            id in object_id_strategy(),
            class_name in "[A-Z][a-zA-Z]{0,15}",
        ) {
            let mut payload = Map::new();
            payload.insert("objectId".to_string(), Value::from(id.clone()));
            let object = Object::from_response(Class::new(class_name.clone()), payload);

            let pointer = object.to_pointer().unwrap();
            prop_assert_eq!(&pointer.class_name, &class_name);
            prop_assert_eq!(&pointer.object_id, &id);

            let value = serde_json::to_value(&pointer).unwrap();
            let back = Pointer::from_value(&value).unwrap();
            prop_assert_eq!(back, pointer);
        }

        /// Fresh objects can never be referenced, whatever their fields.
        #[test]
        fn unpersisted_objects_have_no_pointer(payload in payload_strategy()) {
            let mut object = Object::new(Class::new("Item"));
            for (key, value) in payload {
                object.set(key, value);
            }
            prop_assert!(object.to_pointer().is_err());
        }
    }
}
