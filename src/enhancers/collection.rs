//! Set/add/remove/edit/clear semantics for one sequence-valued field.

use crate::config::{CollectionActionTypes, CollectionOp};
use crate::core::{enhance_with_step, Action, DynReducer, Enhancer, Field, JsonArrayField, Lens, ReduceError, Reducer};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Items with a natural identity.
pub trait Identifiable {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;
}

/// How the collection enhancer reads an item's identity.
pub trait Identity<T>: Send + Sync {
    type Key: PartialEq;

    /// Identity name, for diagnostics.
    fn name(&self) -> &str;

    /// Identity of `item`, or `None` when the item has none.
    fn key<'a>(&self, item: &'a T) -> Option<&'a Self::Key>;

    /// Whether `item` carries the identity `key`.
    fn matches(&self, item: &T, key: &Self::Key) -> bool {
        self.key(item).is_some_and(|own| own == key)
    }
}

/// Identity given by [`Identifiable::id`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ById;

impl<T: Identifiable> Identity<T> for ById {
    type Key = T::Id;

    fn name(&self) -> &str {
        "id"
    }

    fn key<'a>(&self, item: &'a T) -> Option<&'a T::Id> {
        Some(item.id())
    }
}

/// Identity read through an accessor function.
pub struct KeyFn<T, K> {
    name: &'static str,
    key: fn(&T) -> &K,
}

impl<T, K> KeyFn<T, K> {
    pub const fn new(name: &'static str, key: fn(&T) -> &K) -> Self {
        Self { name, key }
    }
}

impl<T, K> Clone for KeyFn<T, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, K> Copy for KeyFn<T, K> {}

impl<T, K> fmt::Debug for KeyFn<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyFn").field(&self.name).finish()
    }
}

impl<T, K: PartialEq> Identity<T> for KeyFn<T, K> {
    type Key = K;

    fn name(&self) -> &str {
        self.name
    }

    fn key<'a>(&self, item: &'a T) -> Option<&'a K> {
        Some((self.key)(item))
    }
}

/// Identity stored under a member of JSON object items.
///
/// Items without the member have no identity. Numeric identities match by
/// value, so `1` and `1.0` name the same item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonKey {
    name: String,
}

impl JsonKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for JsonKey {
    fn default() -> Self {
        Self::new("id")
    }
}

impl Identity<Value> for JsonKey {
    type Key = Value;

    fn name(&self) -> &str {
        &self.name
    }

    fn key<'a>(&self, item: &'a Value) -> Option<&'a Value> {
        item.get(self.name.as_str())
    }

    fn matches(&self, item: &Value, key: &Value) -> bool {
        match (self.key(item), key) {
            (Some(Value::Number(own)), Value::Number(key)) => own.as_f64() == key.as_f64(),
            (Some(own), key) => own == key,
            (None, _) => false,
        }
    }
}

/// Payload shapes the collection enhancer decodes.
///
/// Implemented for `serde_json::Value` payloads through serde. Typed payload
/// enums implement it by returning the matching variant.
pub trait CollectionPayload<T, K> {
    /// Payload of a set action.
    fn items(&self) -> Option<Vec<T>>;

    /// Payload of an add or edit action.
    fn item(&self) -> Option<T>;

    /// Payload of a remove action.
    fn key(&self) -> Option<K>;
}

impl<T, K> CollectionPayload<T, K> for Value
where
    T: DeserializeOwned,
    K: DeserializeOwned,
{
    fn items(&self) -> Option<Vec<T>> {
        serde_json::from_value(self.clone()).ok()
    }

    fn item(&self) -> Option<T> {
        serde_json::from_value(self.clone()).ok()
    }

    fn key(&self) -> Option<K> {
        serde_json::from_value(self.clone()).ok()
    }
}

/// Enhancer managing one sequence field of the state.
///
/// Each action whose tag is bound in the [`CollectionActionTypes`] table
/// updates the field; every other action leaves it alone. Remove and edit
/// act on every item whose identity matches, not only the first.
///
/// # Example
///
/// ```rust
/// use reducer_enhancers::config::CollectionActionTypes;
/// use reducer_enhancers::core::{Action, Lens, Reducer};
/// use reducer_enhancers::enhancers::{Identifiable, WithCollection};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Clone, Debug, PartialEq, Deserialize)]
/// struct Todo {
///     id: u32,
///     note: String,
/// }
///
/// impl Identifiable for Todo {
///     type Id = u32;
///
///     fn id(&self) -> &u32 {
///         &self.id
///     }
/// }
///
/// struct TodoState {
///     todos: Vec<Todo>,
/// }
///
/// let todos = WithCollection::by_id(
///     Lens::new("todos", |state: &mut TodoState| &mut state.todos),
///     &CollectionActionTypes::new().add("ADD_TODO").remove("REMOVE_TODO"),
/// );
/// let reducer = todos.wrap(|state: TodoState, _: &Action| state);
///
/// let state = TodoState { todos: Vec::new() };
/// let state = reducer.reduce(
///     state,
///     &Action::new("ADD_TODO").with_payload(json!({ "id": 1, "note": "write docs" })),
/// );
/// assert_eq!(state.todos.len(), 1);
///
/// let state = reducer.reduce(state, &Action::new("REMOVE_TODO").with_payload(json!(1)));
/// assert!(state.todos.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct WithCollection<F, I> {
    field: F,
    identity: I,
    operations: HashMap<String, CollectionOp>,
}

impl<F, I> WithCollection<F, I> {
    pub fn new(field: F, identity: I, action_types: &CollectionActionTypes) -> Self {
        Self {
            field,
            identity,
            operations: action_types.table(),
        }
    }

    /// Operation bound to `tag`, if any.
    pub fn operation(&self, tag: &str) -> Option<CollectionOp> {
        self.operations.get(tag).copied()
    }
}

impl<S, T> WithCollection<Lens<S, Vec<T>>, ById> {
    /// Collection of [`Identifiable`] items.
    pub fn by_id(field: Lens<S, Vec<T>>, action_types: &CollectionActionTypes) -> Self {
        Self::new(field, ById, action_types)
    }
}

impl WithCollection<JsonArrayField, JsonKey> {
    /// Collection stored in a member of a JSON object state.
    pub fn json(
        field: impl Into<String>,
        identity: impl Into<String>,
        action_types: &CollectionActionTypes,
    ) -> Self {
        Self::new(
            JsonArrayField::new(field),
            JsonKey::new(identity),
            action_types,
        )
    }
}

impl<S, P, T, F, I> Reducer<S, Action<P>> for WithCollection<F, I>
where
    F: Field<S, Value = Vec<T>>,
    I: Identity<T>,
    T: Clone,
    P: CollectionPayload<T, I::Key>,
{
    fn try_reduce(&self, mut state: S, action: &Action<P>) -> Result<S, ReduceError> {
        let Some(op) = self.operation(&action.tag) else {
            return Ok(state);
        };

        tracing::trace!(
            tag = %action.tag,
            operation = op.key(),
            field = self.field.name(),
            "updating collection"
        );

        let items = self.field.get_mut(&mut state)?;
        match op {
            CollectionOp::Set => {
                let replacement = <P as CollectionPayload<T, I::Key>>::items(payload(action)?)
                    .ok_or_else(|| malformed(action, "a sequence of items"))?;
                *items = replacement;
            }
            CollectionOp::Add => {
                let item = <P as CollectionPayload<T, I::Key>>::item(payload(action)?)
                    .ok_or_else(|| malformed(action, "an item"))?;
                items.push(item);
            }
            CollectionOp::Remove => {
                let key = <P as CollectionPayload<T, I::Key>>::key(payload(action)?)
                    .ok_or_else(|| malformed(action, "an item identity"))?;
                items.retain(|item| !self.identity.matches(item, &key));
            }
            CollectionOp::Edit => {
                let replacement = <P as CollectionPayload<T, I::Key>>::item(payload(action)?)
                    .ok_or_else(|| malformed(action, "an item"))?;
                let key = self.identity.key(&replacement).ok_or_else(|| {
                    ReduceError::MissingIdentity {
                        tag: action.tag.clone(),
                        identity: self.identity.name().to_string(),
                    }
                })?;
                for item in items.iter_mut() {
                    if self.identity.matches(item, key) {
                        *item = replacement.clone();
                    }
                }
            }
            CollectionOp::Clear => items.clear(),
        }

        Ok(state)
    }
}

impl<S, A, F, I> Enhancer<S, A> for WithCollection<F, I>
where
    Self: Reducer<S, A> + Clone + 'static,
    S: 'static,
    A: 'static,
{
    fn enhance(&self, base: DynReducer<S, A>) -> DynReducer<S, A> {
        enhance_with_step(self, base)
    }
}

fn payload<P>(action: &Action<P>) -> Result<&P, ReduceError> {
    action
        .payload
        .as_ref()
        .ok_or_else(|| ReduceError::MissingPayload {
            tag: action.tag.clone(),
        })
}

fn malformed<P>(action: &Action<P>, expected: &'static str) -> ReduceError {
    ReduceError::MalformedPayload {
        tag: action.tag.clone(),
        expected,
    }
}
