//! Todo List
//!
//! This example assembles a typed todo-list reducer from enhancers.
//!
//! Key concepts:
//! - Collection operations on a `Vec` field through a lens
//! - Loading flags driven by fetch actions
//! - A nested filter reducer owning its own sub-state
//! - Resetting everything to the initial state
//!
//! Run with: RUST_LOG=trace cargo run --example todo_list

use reducer_enhancers::config::{CollectionActionTypes, LoadableActionTypes};
use reducer_enhancers::enhancers::{Identifiable, Loadable, LoadableState};
use reducer_enhancers::{
    lens, pipe, Action, ReduceError, Reducer, WithCollection, WithLoadable, WithNestedReducer,
    WithResetState,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct Todo {
    id: u32,
    note: String,
    #[serde(default)]
    done: bool,
}

impl Identifiable for Todo {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Visibility {
    #[default]
    All,
    Active,
    Done,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct TodoState {
    todos: Vec<Todo>,
    status: LoadableState,
    visibility: Visibility,
}

impl Loadable<Value> for TodoState {
    fn set_loadable(&mut self, status: LoadableState) -> Result<(), ReduceError> {
        self.status = status;
        Ok(())
    }
}

impl TodoState {
    fn visible(&self) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|todo| match self.visibility {
                Visibility::All => true,
                Visibility::Active => !todo.done,
                Visibility::Done => todo.done,
            })
            .collect()
    }
}

// Nested reducer for the filter sub-state
fn visibility(state: Visibility, action: &Action) -> Visibility {
    match action.tag.as_str() {
        "SHOW_ALL" => Visibility::All,
        "SHOW_ACTIVE" => Visibility::Active,
        "SHOW_DONE" => Visibility::Done,
        _ => state,
    }
}

// Base reducer: everything the enhancers don't cover
fn todo_reducer(state: TodoState, _action: &Action) -> TodoState {
    state
}

fn print_state(label: &str, state: &TodoState) {
    println!("{label}");
    println!(
        "  loading: {}, success: {}, error: {:?}",
        state.status.is_loading, state.status.success, state.status.error
    );
    println!("  visibility: {:?}", state.visibility);
    for todo in state.visible() {
        let mark = if todo.done { "x" } else { " " };
        println!("  [{mark}] #{} {}", todo.id, todo.note);
    }
    println!();
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Todo List Example ===\n");

    let collection = CollectionActionTypes::new()
        .set("FETCH_TODOS_SUCCESS")
        .add("ADD_TODO")
        .remove("REMOVE_TODO")
        .edit("EDIT_TODO")
        .clear("CLEAR_TODOS");
    let fetch = LoadableActionTypes::new("FETCH_TODOS", "FETCH_TODOS_SUCCESS", "FETCH_TODOS_ERROR");

    let reducer = pipe![
        WithCollection::by_id(lens!(TodoState, todos), &collection),
        WithLoadable::new(&fetch),
        WithNestedReducer::new(lens!(TodoState, visibility), visibility),
        WithResetState::new("RESET", TodoState::default()),
    ]
    .apply(todo_reducer);

    let actions = vec![
        Action::new("FETCH_TODOS"),
        Action::new("FETCH_TODOS_SUCCESS").with_payload(json!([
            { "id": 1, "note": "Write the docs" },
            { "id": 2, "note": "Review the pull request" },
        ])),
        Action::new("ADD_TODO").with_payload(json!({ "id": 3, "note": "Cut a release" })),
        Action::new("EDIT_TODO")
            .with_payload(json!({ "id": 1, "note": "Write the docs", "done": true })),
        Action::new("SHOW_ACTIVE"),
        Action::new("REMOVE_TODO").with_payload(json!(2)),
        Action::new("FETCH_TODOS"),
        Action::new("FETCH_TODOS_ERROR").with_payload(json!("server unavailable")),
        Action::new("RESET"),
    ];

    let mut state = TodoState::default();
    for action in &actions {
        state = match reducer.try_reduce(state.clone(), action) {
            Ok(next) => next,
            Err(err) => {
                println!("  ✗ {}: {err}\n", action.tag);
                state
            }
        };
        print_state(&format!("After {}:", action.tag), &state);
    }

    // A malformed action is reported instead of corrupting the state
    let malformed = Action::new("ADD_TODO").with_payload(json!("not a todo"));
    if let Err(err) = reducer.try_reduce(state, &malformed) {
        println!("Rejected malformed action: {err}");
    }
}
