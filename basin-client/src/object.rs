//! The generic object record.

use crate::class::Class;
use crate::error::{ClientError, ClientResult};
use basin_types::{Pointer, date};
use serde_json::{Map, Value};

/// Wire name of the server-assigned object id.
pub(crate) const KEY_OBJECT_ID: &str = "objectId";
/// Wire name of the server-assigned creation timestamp.
pub(crate) const KEY_CREATED_AT: &str = "createdAt";
/// Wire name of the server-assigned update timestamp.
pub(crate) const KEY_UPDATED_AT: &str = "updatedAt";

/// A record in one class of the object store.
///
/// An object is an open map of JSON fields plus the server-assigned
/// bookkeeping: id, creation and update timestamps, and whether this
/// instance has ever been persisted. Fresh instances start empty and
/// unpersisted; [`Client::save`](crate::Client::save) re-hydrates them in
/// place from the server's response.
///
/// Timestamps are kept in display form (`YYYY-MM-DD HH:MM:SS`, UTC), not
/// the RFC 3339 the wire carries.
#[derive(Debug, Clone)]
pub struct Object {
    class: Class,
    id: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
    exists_on_server: bool,
    fields: Map<String, Value>,
}

impl Object {
    /// A fresh, unpersisted instance of `class` with no fields set.
    #[must_use]
    pub fn new(class: Class) -> Self {
        Self {
            class,
            id: None,
            created_at: None,
            updated_at: None,
            exists_on_server: false,
            fields: Map::new(),
        }
    }

    /// Hydrates an instance directly from a raw server payload.
    #[must_use]
    pub fn from_response(class: Class, payload: Map<String, Value>) -> Self {
        let mut object = Self::new(class);
        object.hydrate(payload);
        object
    }

    /// Merges a server payload into this instance.
    ///
    /// Reserved keys are hoisted into their typed slots (`objectId` into
    /// the id, timestamps reformatted for display); every other key lands
    /// in the field map, overwriting what was there. Keys the payload does
    /// not mention keep their current values, which is what makes the thin
    /// create response (`objectId` + `createdAt`) and update response
    /// (`updatedAt` only) sufficient. When no update timestamp is known
    /// the creation timestamp stands in for it. Afterwards the instance
    /// counts as persisted.
    pub fn hydrate(&mut self, payload: Map<String, Value>) {
        for (key, value) in payload {
            if key == KEY_OBJECT_ID {
                self.id = Some(raw_string(&value));
            } else if key == KEY_CREATED_AT {
                self.created_at = Some(display_string(&value));
            } else if key == KEY_UPDATED_AT {
                self.updated_at = Some(display_string(&value));
            } else {
                self.fields.insert(key, value);
            }
        }

        if self.updated_at.is_none() {
            self.updated_at = self.created_at.clone();
        }

        self.exists_on_server = true;
    }

    /// The class this object belongs to.
    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Server-assigned id, once persisted.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Creation timestamp in display form, once persisted.
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    /// Update timestamp in display form, once persisted.
    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    /// Whether this instance reflects a record that exists on the server.
    pub fn exists_on_server(&self) -> bool {
        self.exists_on_server
    }

    /// Sets a field to any JSON value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Sets a field to a pointer at `other`.
    ///
    /// Relations are always stored as pointers, never as inlined objects,
    /// so `other` must already be persisted.
    pub fn set_reference(&mut self, key: impl Into<String>, other: &Object) -> ClientResult<()> {
        let pointer = other.to_pointer()?;
        self.fields.insert(key.into(), pointer.into());
        Ok(())
    }

    /// Removes a field, returning its previous value.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    /// Raw field value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Extract a string field value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }

    /// Extract a boolean field value.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.fields.get(key).and_then(|v| v.as_bool())
    }

    /// Extract a numeric field value.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(|v| v.as_f64())
    }

    /// Extract a pointer field value, when the field holds one.
    pub fn get_pointer(&self, key: &str) -> Option<Pointer> {
        self.fields.get(key).and_then(Pointer::from_value)
    }

    /// All application fields. Reserved wire keys never appear here; they
    /// are hoisted out during hydration.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// A pointer to this object, for storing relations on other objects.
    ///
    /// Fails with [`ClientError::NotPersisted`] when the object has never
    /// been saved; an unpersisted object has no id to point at.
    pub fn to_pointer(&self) -> ClientResult<Pointer> {
        if !self.exists_on_server {
            return Err(ClientError::NotPersisted(format!(
                "cannot reference an unsaved {} object",
                self.class.name()
            )));
        }
        match &self.id {
            Some(id) => Ok(Pointer::new(self.class.name(), id.clone())),
            None => Err(ClientError::NotPersisted(format!(
                "{} object has no id",
                self.class.name()
            ))),
        }
    }
}

/// The id as a string, however the server spelled it.
fn raw_string(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

/// Timestamp values reformatted for display; non-string values fall back
/// to their JSON rendering.
fn display_string(value: &Value) -> String {
    match value.as_str() {
        Some(s) => date::display_timestamp(s),
        None => value.to_string(),
    }
}
