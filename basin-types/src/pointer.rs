//! Cross-references between stored objects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A compact reference to another stored object.
///
/// Relation fields never inline the referenced object; they carry this
/// shape instead, byte-for-byte what the API expects:
///
/// ```json
/// {"__type": "Pointer", "className": "Question", "objectId": "xWMyZ4YEGZ"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    #[serde(rename = "__type")]
    tag: PointerTag,
    /// Class (collection) name of the referenced object.
    #[serde(rename = "className")]
    pub class_name: String,
    /// Server-assigned id of the referenced object.
    #[serde(rename = "objectId")]
    pub object_id: String,
}

/// The `__type` discriminant. A unit enum rather than a plain string so
/// that deserializing some other tagged value (a `Date`, a `File`) fails
/// instead of silently producing a pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum PointerTag {
    Pointer,
}

impl Pointer {
    /// Creates a pointer to the object with the given class name and id.
    #[must_use]
    pub fn new(class_name: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            tag: PointerTag::Pointer,
            class_name: class_name.into(),
            object_id: object_id.into(),
        }
    }

    /// Reads a pointer out of a JSON field value, if the value is one.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}

impl From<Pointer> for Value {
    fn from(pointer: Pointer) -> Self {
        serde_json::json!({
            "__type": "Pointer",
            "className": pointer.class_name,
            "objectId": pointer.object_id,
        })
    }
}
