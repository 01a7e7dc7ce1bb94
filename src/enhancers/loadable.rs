//! Loading / success / error status flags.

use crate::config::{LoadableActionTypes, LoadableOp};
use crate::core::{enhance_with_step, Action, DynReducer, Enhancer, ReduceError, Reducer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// The three status flags.
///
/// At most one flag is raised at a time. `error` holds the payload of the
/// error action verbatim, so it doubles as the error detail; `None` means no
/// error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadableState<E = Value> {
    pub is_loading: bool,
    pub success: bool,
    pub error: Option<E>,
}

impl<E> LoadableState<E> {
    /// All flags lowered.
    pub const fn new() -> Self {
        Self {
            is_loading: false,
            success: false,
            error: None,
        }
    }

    pub const fn loading() -> Self {
        Self {
            is_loading: true,
            success: false,
            error: None,
        }
    }

    pub const fn succeeded() -> Self {
        Self {
            is_loading: false,
            success: true,
            error: None,
        }
    }

    pub fn failed(detail: Option<E>) -> Self {
        Self {
            is_loading: false,
            success: false,
            error: detail,
        }
    }

    /// Whether the error slot holds a detail.
    ///
    /// This reports presence only: an error action whose payload is `null` or
    /// `false` still fills the slot. JSON consumers that read the slot as a
    /// truthy flag use [`LoadableState::is_failed`].
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

impl LoadableState<Value> {
    /// Whether the error detail is truthy: not `null`, `false`, `0` or `""`.
    pub fn is_failed(&self) -> bool {
        match &self.error {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(detail)) => !detail.is_empty(),
            Some(Value::Array(_) | Value::Object(_)) => true,
        }
    }
}

impl<E> Default for LoadableState<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// States that carry the status flags.
pub trait Loadable<E> {
    fn set_loadable(&mut self, status: LoadableState<E>) -> Result<(), ReduceError>;
}

impl<E> Loadable<E> for LoadableState<E> {
    fn set_loadable(&mut self, status: LoadableState<E>) -> Result<(), ReduceError> {
        *self = status;
        Ok(())
    }
}

/// JSON object states keep the flags as top-level members. A lowered error
/// flag is written as `false`.
impl Loadable<Value> for Value {
    fn set_loadable(&mut self, status: LoadableState<Value>) -> Result<(), ReduceError> {
        let object: &mut Map<String, Value> =
            self.as_object_mut().ok_or_else(|| ReduceError::FieldType {
                field: "state".to_string(),
                expected: "an object",
            })?;

        object.insert("isLoading".to_string(), Value::Bool(status.is_loading));
        object.insert("success".to_string(), Value::Bool(status.success));
        object.insert(
            "error".to_string(),
            status.error.unwrap_or(Value::Bool(false)),
        );
        Ok(())
    }
}

/// Enhancer toggling the status flags on three action tags.
///
/// # Example
///
/// ```rust
/// use reducer_enhancers::config::LoadableActionTypes;
/// use reducer_enhancers::core::{Action, Reducer};
/// use reducer_enhancers::enhancers::{LoadableState, WithLoadable};
/// use serde_json::json;
///
/// let status = WithLoadable::new(&LoadableActionTypes::new(
///     "SAVE_TODOS",
///     "SAVE_TODOS_SUCCESS",
///     "SAVE_TODOS_ERROR",
/// ));
///
/// let state = status.reduce(LoadableState::new(), &Action::new("SAVE_TODOS").with_payload(json!(null)));
/// assert!(state.is_loading);
///
/// let state = status.reduce(state, &Action::new("SAVE_TODOS_ERROR").with_payload(json!("boom")));
/// assert!(!state.is_loading);
/// assert_eq!(state.error, Some(json!("boom")));
/// ```
#[derive(Clone, Debug)]
pub struct WithLoadable {
    operations: HashMap<String, LoadableOp>,
}

impl WithLoadable {
    pub fn new(action_types: &LoadableActionTypes) -> Self {
        Self {
            operations: action_types.table(),
        }
    }

    /// Operation bound to `tag`, if any.
    pub fn operation(&self, tag: &str) -> Option<LoadableOp> {
        self.operations.get(tag).copied()
    }
}

impl<S, P> Reducer<S, Action<P>> for WithLoadable
where
    S: Loadable<P>,
    P: Clone,
{
    fn try_reduce(&self, mut state: S, action: &Action<P>) -> Result<S, ReduceError> {
        let Some(op) = self.operation(&action.tag) else {
            return Ok(state);
        };

        tracing::trace!(tag = %action.tag, operation = op.key(), "updating loadable flags");

        let status = match op {
            LoadableOp::Loading => LoadableState::loading(),
            LoadableOp::Success => LoadableState::succeeded(),
            LoadableOp::Error => LoadableState::failed(action.payload.clone()),
        };
        state.set_loadable(status)?;

        Ok(state)
    }
}

impl<S, A> Enhancer<S, A> for WithLoadable
where
    Self: Reducer<S, A> + Clone + 'static,
    S: 'static,
    A: 'static,
{
    fn enhance(&self, base: DynReducer<S, A>) -> DynReducer<S, A> {
        enhance_with_step(self, base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq)]
    struct TodoState {
        todos: Vec<String>,
        status: LoadableState,
    }

    impl Loadable<Value> for TodoState {
        fn set_loadable(&mut self, status: LoadableState) -> Result<(), ReduceError> {
            self.status.set_loadable(status)
        }
    }

    fn initial() -> TodoState {
        TodoState {
            todos: vec!["keep me".to_string()],
            status: LoadableState::new(),
        }
    }

    fn status() -> WithLoadable {
        WithLoadable::new(&LoadableActionTypes::new(
            "SAVE_TODOS",
            "SAVE_TODOS_SUCCESS",
            "SAVE_TODOS_ERROR",
        ))
    }

    fn bare(tag: &str) -> Action {
        Action::new(tag)
    }

    #[test]
    fn loading_action_raises_only_loading() {
        let next = status().reduce(initial(), &bare("SAVE_TODOS"));

        assert_eq!(
            next,
            TodoState {
                status: LoadableState {
                    is_loading: true,
                    success: false,
                    error: None,
                },
                ..initial()
            }
        );
    }

    #[test]
    fn success_action_raises_only_success() {
        let next = status().reduce(initial(), &bare("SAVE_TODOS_SUCCESS"));

        assert_eq!(next.status, LoadableState::succeeded());
        assert_eq!(next.todos, initial().todos);
    }

    #[test]
    fn error_action_stores_payload_verbatim() {
        let action = Action::new("SAVE_TODOS_ERROR").with_payload(json!("boom"));

        let next = status().reduce(initial(), &action);

        assert_eq!(
            next.status,
            LoadableState {
                is_loading: false,
                success: false,
                error: Some(json!("boom")),
            }
        );
        assert!(next.status.has_error());
    }

    #[test]
    fn error_action_without_payload_leaves_error_empty() {
        let loading = status().reduce(initial(), &bare("SAVE_TODOS"));

        let next = status().reduce(loading, &bare("SAVE_TODOS_ERROR"));

        assert_eq!(next.status, LoadableState::failed(None));
        assert!(!next.status.has_error());
    }

    #[test]
    fn falsy_error_payloads_fill_the_slot_but_are_not_failures() {
        for payload in [json!(null), json!(false), json!(0), json!("")] {
            let action = Action::new("SAVE_TODOS_ERROR").with_payload(payload.clone());

            let next = status().reduce(initial(), &action);

            assert!(next.status.has_error(), "{payload} should fill the slot");
            assert!(!next.status.is_failed(), "{payload} should be falsy");
        }

        for payload in [json!("boom"), json!(true), json!(503), json!({}), json!([])] {
            let action = Action::new("SAVE_TODOS_ERROR").with_payload(payload.clone());

            let next = status().reduce(initial(), &action);

            assert!(next.status.is_failed(), "{payload} should be truthy");
        }

        assert!(!LoadableState::<Value>::new().is_failed());
    }

    #[test]
    fn loading_clears_previous_error() {
        let failed = status().reduce(
            initial(),
            &Action::new("SAVE_TODOS_ERROR").with_payload(json!({ "code": 500 })),
        );

        let next = status().reduce(failed, &bare("SAVE_TODOS"));

        assert_eq!(next.status, LoadableState::loading());
    }

    #[test]
    fn unrelated_action_leaves_flags_untouched() {
        let next = status().reduce(initial(), &bare("SOME_OTHER_ACTION"));
        assert_eq!(next, initial());
    }

    #[test]
    fn typed_error_payloads_are_kept() {
        let action: Action<u16> = Action::new("SAVE_TODOS_ERROR").with_payload(503);

        let next = status().reduce(LoadableState::<u16>::new(), &action);

        assert_eq!(next.error, Some(503));
    }

    #[test]
    fn json_state_gets_top_level_flags() {
        let state = json!({ "todos": [], "isLoading": false, "success": false, "error": false });

        let loading = status().reduce(state, &bare("SAVE_TODOS"));
        assert_eq!(
            loading,
            json!({ "todos": [], "isLoading": true, "success": false, "error": false })
        );

        let failed = status().reduce(
            loading,
            &Action::new("SAVE_TODOS_ERROR").with_payload(json!("boom")),
        );
        assert_eq!(
            failed,
            json!({ "todos": [], "isLoading": false, "success": false, "error": "boom" })
        );
    }

    #[test]
    fn json_state_must_be_object() {
        let result = status().try_reduce(json!([]), &bare("SAVE_TODOS"));

        assert!(matches!(result, Err(ReduceError::FieldType { .. })));
    }

    #[test]
    fn loadable_state_serializes_camel_case() {
        let encoded = serde_json::to_value(LoadableState::<Value>::loading()).unwrap();

        assert_eq!(
            encoded,
            json!({ "isLoading": true, "success": false, "error": null })
        );
    }
}
