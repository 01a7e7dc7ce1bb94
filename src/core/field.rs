//! Access to the part of a state an enhancer manages.

use super::error::ReduceError;
use serde_json::Value;
use std::fmt;

/// Mutable access to one named field of a state.
///
/// Typed states use [`Lens`]. Dynamic `serde_json::Value` states use
/// [`JsonField`] and [`JsonArrayField`], which report a missing or mistyped
/// field as a [`ReduceError`].
pub trait Field<S>: Send + Sync {
    type Value;

    /// Field name, for diagnostics.
    fn name(&self) -> &str;

    fn get_mut<'a>(&self, state: &'a mut S) -> Result<&'a mut Self::Value, ReduceError>;
}

/// Field accessor for a typed state.
///
/// # Example
///
/// ```rust
/// use reducer_enhancers::core::{Field, Lens};
///
/// struct TodoState {
///     todos: Vec<String>,
/// }
///
/// let todos = Lens::new("todos", |state: &mut TodoState| &mut state.todos);
/// let mut state = TodoState { todos: Vec::new() };
///
/// todos.get_mut(&mut state).unwrap().push("write docs".to_string());
/// assert_eq!(state.todos, vec!["write docs".to_string()]);
/// assert_eq!(todos.name(), "todos");
/// ```
pub struct Lens<S, V> {
    name: &'static str,
    access: fn(&mut S) -> &mut V,
}

impl<S, V> Lens<S, V> {
    pub const fn new(name: &'static str, access: fn(&mut S) -> &mut V) -> Self {
        Self { name, access }
    }
}

impl<S, V> Clone for Lens<S, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, V> Copy for Lens<S, V> {}

impl<S, V> fmt::Debug for Lens<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Lens").field(&self.name).finish()
    }
}

impl<S, V> Field<S> for Lens<S, V> {
    type Value = V;

    fn name(&self) -> &str {
        self.name
    }

    fn get_mut<'a>(&self, state: &'a mut S) -> Result<&'a mut V, ReduceError> {
        Ok((self.access)(state))
    }
}

/// Named member of a JSON object state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonField {
    name: String,
}

impl JsonField {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// View the same member as an array.
    pub fn array(self) -> JsonArrayField {
        JsonArrayField { name: self.name }
    }
}

impl Field<Value> for JsonField {
    type Value = Value;

    fn name(&self) -> &str {
        &self.name
    }

    fn get_mut<'a>(&self, state: &'a mut Value) -> Result<&'a mut Value, ReduceError> {
        state
            .get_mut(self.name.as_str())
            .ok_or_else(|| ReduceError::MissingField {
                field: self.name.clone(),
            })
    }
}

/// Array-valued member of a JSON object state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonArrayField {
    name: String,
}

impl JsonArrayField {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Field<Value> for JsonArrayField {
    type Value = Vec<Value>;

    fn name(&self) -> &str {
        &self.name
    }

    fn get_mut<'a>(&self, state: &'a mut Value) -> Result<&'a mut Vec<Value>, ReduceError> {
        let value = state
            .get_mut(self.name.as_str())
            .ok_or_else(|| ReduceError::MissingField {
                field: self.name.clone(),
            })?;

        value.as_array_mut().ok_or_else(|| ReduceError::FieldType {
            field: self.name.clone(),
            expected: "an array",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Parent {
        label: String,
        count: u32,
    }

    #[test]
    fn lens_reaches_typed_field() {
        let count = Lens::new("count", |parent: &mut Parent| &mut parent.count);
        let mut parent = Parent {
            label: "a".to_string(),
            count: 1,
        };

        *count.get_mut(&mut parent).unwrap() += 1;

        assert_eq!(parent.count, 2);
        assert_eq!(parent.label, "a");
        assert_eq!(format!("{count:?}"), "Lens(\"count\")");
    }

    #[test]
    fn json_field_reaches_member() {
        let field = JsonField::new("nested");
        let mut state = json!({ "nested": { "c": 0 }, "a": "" });

        *field.get_mut(&mut state).unwrap() = json!({ "c": 1 });

        assert_eq!(state, json!({ "nested": { "c": 1 }, "a": "" }));
    }

    #[test]
    fn json_field_reports_missing_member() {
        let field = JsonField::new("nested");
        let mut state = json!({ "a": "" });

        assert_eq!(
            field.get_mut(&mut state),
            Err(ReduceError::MissingField {
                field: "nested".to_string()
            })
        );
    }

    #[test]
    fn json_array_field_requires_array() {
        let field = JsonField::new("todos").array();
        let mut state = json!({ "todos": {} });

        assert_eq!(
            field.get_mut(&mut state),
            Err(ReduceError::FieldType {
                field: "todos".to_string(),
                expected: "an array",
            })
        );
    }

    #[test]
    fn json_array_field_on_non_object_state_is_missing() {
        let field = JsonArrayField::new("todos");
        let mut state = json!([1, 2, 3]);

        assert!(matches!(
            field.get_mut(&mut state),
            Err(ReduceError::MissingField { .. })
        ));
    }
}
