//! Reducer enhancers: composable building blocks for pure state reducers.
//!
//! A reducer is a pure `(state, action) -> state` function. An enhancer wraps
//! a reducer, computes an intermediate state for the actions it recognizes,
//! and then always hands that state to the wrapped reducer together with the
//! original action. Common reducer patterns become one-line configurations:
//!
//! - [`WithCollection`]: set, add, remove, edit and clear items of a list field
//! - [`WithLoadable`]: loading / success / error status flags
//! - [`WithNestedReducer`]: delegate a sub-state to an independent reducer
//! - [`WithResetState`]: reset everything to a captured initial state
//!
//! [`Pipe`] composes enhancers left-to-right around a base reducer.
//!
//! # Example
//!
//! ```rust
//! use reducer_enhancers::config::{CollectionActionTypes, LoadableActionTypes};
//! use reducer_enhancers::enhancers::{Identifiable, Loadable, LoadableState};
//! use reducer_enhancers::{lens, pipe, Action, ReduceError, Reducer};
//! use reducer_enhancers::{WithCollection, WithLoadable, WithResetState};
//! use serde::Deserialize;
//! use serde_json::json;
//!
//! #[derive(Clone, Debug, PartialEq, Deserialize)]
//! struct Todo {
//!     id: u32,
//!     note: String,
//! }
//!
//! impl Identifiable for Todo {
//!     type Id = u32;
//!
//!     fn id(&self) -> &u32 {
//!         &self.id
//!     }
//! }
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct TodoState {
//!     todos: Vec<Todo>,
//!     status: LoadableState,
//! }
//!
//! impl Loadable<serde_json::Value> for TodoState {
//!     fn set_loadable(&mut self, status: LoadableState) -> Result<(), ReduceError> {
//!         self.status = status;
//!         Ok(())
//!     }
//! }
//!
//! let todos = CollectionActionTypes::default()
//!     .set("FETCH_TODOS_SUCCESS")
//!     .add("ADD_TODO")
//!     .remove("REMOVE_TODO");
//! let fetch = LoadableActionTypes::new("FETCH_TODOS", "FETCH_TODOS_SUCCESS", "FETCH_TODOS_ERROR");
//!
//! let reducer = pipe![
//!     WithCollection::by_id(lens!(TodoState, todos), &todos),
//!     WithLoadable::new(&fetch),
//!     WithResetState::new("RESET", TodoState::default()),
//! ]
//! .apply(|state: TodoState, _: &Action| state);
//!
//! let state = reducer.reduce(TodoState::default(), &Action::new("FETCH_TODOS"));
//! assert!(state.status.is_loading);
//!
//! let loaded = Action::new("FETCH_TODOS_SUCCESS")
//!     .with_payload(json!([{ "id": 1, "note": "write docs" }]));
//! let state = reducer.reduce(state, &loaded);
//! assert!(state.status.success);
//! assert_eq!(state.todos.len(), 1);
//!
//! let state = reducer.reduce(state, &Action::new("RESET"));
//! assert_eq!(state, TodoState::default());
//! ```

pub mod config;
pub mod core;
pub mod enhancers;
pub mod pipe;

// Re-export commonly used types
pub use crate::config::{CollectionActionTypes, ConfigError, LoadableActionTypes};
pub use crate::core::{Action, DynReducer, Enhancer, Lens, ReduceError, Reducer};
pub use crate::enhancers::{WithCollection, WithLoadable, WithNestedReducer, WithResetState};
pub use crate::pipe::{pipe, Pipe};
