//! JSON State
//!
//! This example drives a dynamically typed `serde_json::Value` state with
//! action-type tables loaded from JSON, the way a store fed by a network
//! client would.
//!
//! Key concepts:
//! - Action-type tables deserialized and validated before use
//! - Custom identity key for collection items
//! - Actions decoded from their wire format (`type`, `payload`, `error`)
//!
//! Run with: RUST_LOG=debug cargo run --example json_state

use reducer_enhancers::config::{CollectionActionTypes, LoadableActionTypes};
use reducer_enhancers::core::JsonField;
use reducer_enhancers::{
    pipe, Action, Reducer, WithCollection, WithLoadable, WithNestedReducer, WithResetState,
};
use serde_json::{json, Value};
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

const TABLES: &str = r#"{
    "users": {
        "setCollection": "FETCH_USERS_SUCCESS",
        "addToCollection": "USER_JOINED",
        "removeFromCollection": "USER_LEFT",
        "editItemInCollection": "USER_UPDATED"
    },
    "fetch": {
        "isLoadingAction": "FETCH_USERS",
        "successAction": "FETCH_USERS_SUCCESS",
        "errorAction": "FETCH_USERS_ERROR"
    }
}"#;

const DISPATCHED: &str = r#"[
    { "type": "FETCH_USERS" },
    { "type": "FETCH_USERS_SUCCESS", "payload": [
        { "userId": "u1", "name": "Ada", "online": true },
        { "userId": "u2", "name": "Grace", "online": false }
    ] },
    { "type": "USER_JOINED", "payload": { "userId": "u3", "name": "Linus", "online": true } },
    { "type": "USER_UPDATED", "payload": { "userId": "u2", "name": "Grace", "online": true } },
    { "type": "SELECT_USER", "payload": "u3" },
    { "type": "USER_LEFT", "payload": "u1" },
    { "type": "FETCH_USERS" },
    { "type": "FETCH_USERS_ERROR", "payload": { "status": 503 }, "error": true },
    { "type": "LOGOUT" }
]"#;

fn initial_state() -> Value {
    json!({
        "users": [],
        "isLoading": false,
        "success": false,
        "error": false,
        "selection": { "userId": null }
    })
}

// Nested reducer for the selection sub-state
fn selection(state: Value, action: &Action) -> Value {
    match (action.tag.as_str(), &action.payload) {
        ("SELECT_USER", Some(user_id)) => json!({ "userId": user_id }),
        ("USER_LEFT", Some(user_id)) if state["userId"] == *user_id => json!({ "userId": null }),
        _ => state,
    }
}

fn report<T>(name: &str, validation: Validation<(), T>) -> bool
where
    T: std::fmt::Debug,
{
    match validation {
        Validation::Success(_) => {
            println!("  ✓ {name} table is valid");
            true
        }
        Validation::Failure(errors) => {
            println!("  ✗ {name} table is invalid: {errors:?}");
            false
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== JSON State Example ===\n");

    let mut tables: Value = serde_json::from_str(TABLES)?;
    let users: CollectionActionTypes = serde_json::from_value(tables["users"].take())?;
    let fetch: LoadableActionTypes = serde_json::from_value(tables["fetch"].take())?;

    println!("Validating action tables");
    let valid = report("users", users.validate()) & report("fetch", fetch.validate());
    if !valid {
        return Ok(());
    }
    println!();

    let reducer = pipe![
        WithCollection::json("users", "userId", &users),
        WithLoadable::new(&fetch),
        WithNestedReducer::new(JsonField::new("selection"), selection),
        WithResetState::new("LOGOUT", initial_state()),
    ]
    .reducer();

    let actions: Vec<Action> = serde_json::from_str(DISPATCHED)?;

    let mut state = initial_state();
    for action in &actions {
        state = reducer.try_reduce(state, action)?;
        println!("After {}:", action.tag);
        println!("{}\n", serde_json::to_string_pretty(&state)?);
    }

    Ok(())
}
