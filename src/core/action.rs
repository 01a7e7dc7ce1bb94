//! Action descriptors dispatched to reducers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An immutable request for a state transition.
///
/// The `tag` names the kind of transition. The payload type is generic so
/// typed pipelines never downcast; it defaults to [`serde_json::Value`] for
/// dynamic ones. `meta` is carried along for the embedding application and
/// never inspected here.
///
/// # Example
///
/// ```rust
/// use reducer_enhancers::core::Action;
/// use serde_json::json;
///
/// let action = Action::new("ADD_TODO").with_payload(json!({ "id": 1 }));
/// assert!(action.is("ADD_TODO"));
/// assert!(!action.error);
///
/// let encoded = serde_json::to_value(&action).unwrap();
/// assert_eq!(encoded, json!({ "type": "ADD_TODO", "payload": { "id": 1 } }));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action<P = Value> {
    /// The transition kind
    #[serde(rename = "type")]
    pub tag: String,
    /// Caller-defined data for the transition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<P>,
    /// Caller-defined annotations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    /// Set on error-class actions only
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
}

impl<P> Action<P> {
    /// Create an action with only a tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            payload: None,
            meta: None,
            error: false,
        }
    }

    /// Return a copy of this action carrying `payload`.
    pub fn with_payload(self, payload: P) -> Self {
        Self {
            payload: Some(payload),
            ..self
        }
    }

    /// Return a copy of this action carrying `meta`.
    pub fn with_meta(self, meta: Value) -> Self {
        Self {
            meta: Some(meta),
            ..self
        }
    }

    /// Return a copy of this action flagged as an error.
    pub fn failed(self) -> Self {
        Self {
            error: true,
            ..self
        }
    }

    /// Check whether this action carries the given tag.
    pub fn is(&self, tag: &str) -> bool {
        self.tag == tag
    }
}

impl<P> From<&str> for Action<P> {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_action_has_no_payload_or_flags() {
        let action: Action = Action::new("CLEAR_TODOS");

        assert_eq!(action.tag, "CLEAR_TODOS");
        assert!(action.payload.is_none());
        assert!(action.meta.is_none());
        assert!(!action.error);
    }

    #[test]
    fn builders_override_single_fields() {
        let action: Action<u32> = Action::new("REMOVE_TODO")
            .with_payload(7)
            .with_meta(json!({ "source": "ui" }))
            .failed();

        assert_eq!(action.payload, Some(7));
        assert_eq!(action.meta, Some(json!({ "source": "ui" })));
        assert!(action.error);
        assert!(action.is("REMOVE_TODO"));
        assert!(!action.is("ADD_TODO"));
    }

    #[test]
    fn error_flag_is_omitted_when_false() {
        let action: Action = Action::new("SAVE");
        let encoded = serde_json::to_value(&action).unwrap();

        assert_eq!(encoded, json!({ "type": "SAVE" }));
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let action: Action = serde_json::from_value(json!({
            "type": "SAVE_ERROR",
            "payload": "boom",
            "error": true
        }))
        .unwrap();

        assert_eq!(action.tag, "SAVE_ERROR");
        assert_eq!(action.payload, Some(json!("boom")));
        assert!(action.error);
    }

    #[test]
    fn converts_from_tag() {
        let action: Action = "RESET".into();
        assert!(action.is("RESET"));
    }
}
