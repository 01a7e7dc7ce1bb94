//! Action-type tables binding operations to action tags.
//!
//! Tables are plain serde values, so they can be written in code with the
//! fluent setters or loaded from any serde format. Keys use camelCase:
//!
//! ```rust
//! use reducer_enhancers::config::{CollectionActionTypes, CollectionOp};
//!
//! let types: CollectionActionTypes = serde_json::from_str(r#"{
//!     "setCollection": "SET_TODOS",
//!     "addToCollection": "ADD_TODO",
//!     "removeFromCollection": "REMOVE_TODO"
//! }"#).unwrap();
//!
//! assert_eq!(types.tag(CollectionOp::Add), Some("ADD_TODO"));
//! assert_eq!(types.tag(CollectionOp::Clear), None);
//! assert!(types.validate().is_success());
//! ```
//!
//! Validation accumulates every problem in a table rather than stopping at
//! the first one. Tables that fail validation are still usable: a duplicate
//! tag resolves to the operation registered last.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::ConfigError;

/// Operations handled by the collection enhancer, in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionOp {
    Set,
    Add,
    Remove,
    Edit,
    Clear,
}

impl CollectionOp {
    pub const ALL: [CollectionOp; 5] = [
        CollectionOp::Set,
        CollectionOp::Add,
        CollectionOp::Remove,
        CollectionOp::Edit,
        CollectionOp::Clear,
    ];

    /// Table key of this operation.
    pub fn key(self) -> &'static str {
        match self {
            Self::Set => "setCollection",
            Self::Add => "addToCollection",
            Self::Remove => "removeFromCollection",
            Self::Edit => "editItemInCollection",
            Self::Clear => "clearCollection",
        }
    }
}

/// Operations handled by the loadable enhancer, in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadableOp {
    Loading,
    Success,
    Error,
}

impl LoadableOp {
    pub const ALL: [LoadableOp; 3] = [
        LoadableOp::Loading,
        LoadableOp::Success,
        LoadableOp::Error,
    ];

    /// Table key of this operation.
    pub fn key(self) -> &'static str {
        match self {
            Self::Loading => "isLoadingAction",
            Self::Success => "successAction",
            Self::Error => "errorAction",
        }
    }
}

/// Action tags for the five collection operations.
///
/// Operations left unset never match an action.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionActionTypes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_to_collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_from_collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_item_in_collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_collection: Option<String>,
}

impl CollectionActionTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, tag: impl Into<String>) -> Self {
        self.set_collection = Some(tag.into());
        self
    }

    pub fn add(mut self, tag: impl Into<String>) -> Self {
        self.add_to_collection = Some(tag.into());
        self
    }

    pub fn remove(mut self, tag: impl Into<String>) -> Self {
        self.remove_from_collection = Some(tag.into());
        self
    }

    pub fn edit(mut self, tag: impl Into<String>) -> Self {
        self.edit_item_in_collection = Some(tag.into());
        self
    }

    pub fn clear(mut self, tag: impl Into<String>) -> Self {
        self.clear_collection = Some(tag.into());
        self
    }

    /// Tag bound to `op`, if any.
    pub fn tag(&self, op: CollectionOp) -> Option<&str> {
        let tag = match op {
            CollectionOp::Set => &self.set_collection,
            CollectionOp::Add => &self.add_to_collection,
            CollectionOp::Remove => &self.remove_from_collection,
            CollectionOp::Edit => &self.edit_item_in_collection,
            CollectionOp::Clear => &self.clear_collection,
        };
        tag.as_deref()
    }

    /// Build the tag-to-operation lookup table.
    ///
    /// Later operations overwrite earlier ones sharing a tag.
    pub fn table(&self) -> HashMap<String, CollectionOp> {
        build_table(
            CollectionOp::ALL
                .iter()
                .filter_map(|op| self.tag(*op).map(|tag| (tag, *op))),
            CollectionOp::key,
        )
    }

    /// Check the table, accumulating every problem found.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let entries: Vec<(&str, &'static str)> = CollectionOp::ALL
            .iter()
            .filter_map(|op| self.tag(*op).map(|tag| (tag, op.key())))
            .collect();

        let mut checks = Vec::new();
        if entries.is_empty() {
            checks.push(Validation::fail(ConfigError::NoOperations {
                table: "collection",
            }));
        }
        checks.extend(check_tags(&entries));

        Validation::all_vec(checks).map(|_| ())
    }
}

/// Action tags for the three loading-status operations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadableActionTypes {
    pub is_loading_action: String,
    pub success_action: String,
    pub error_action: String,
}

impl LoadableActionTypes {
    pub fn new(
        loading: impl Into<String>,
        success: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            is_loading_action: loading.into(),
            success_action: success.into(),
            error_action: error.into(),
        }
    }

    pub fn tag(&self, op: LoadableOp) -> &str {
        match op {
            LoadableOp::Loading => &self.is_loading_action,
            LoadableOp::Success => &self.success_action,
            LoadableOp::Error => &self.error_action,
        }
    }

    /// Build the tag-to-operation lookup table.
    ///
    /// Later operations overwrite earlier ones sharing a tag.
    pub fn table(&self) -> HashMap<String, LoadableOp> {
        build_table(
            LoadableOp::ALL.iter().map(|op| (self.tag(*op), *op)),
            LoadableOp::key,
        )
    }

    /// Check the table, accumulating every problem found.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let entries: Vec<(&str, &'static str)> = LoadableOp::ALL
            .iter()
            .map(|op| (self.tag(*op), op.key()))
            .collect();

        Validation::all_vec(check_tags(&entries)).map(|_| ())
    }
}

fn build_table<'a, Op>(
    entries: impl Iterator<Item = (&'a str, Op)>,
    key: fn(Op) -> &'static str,
) -> HashMap<String, Op>
where
    Op: Copy,
{
    let mut table = HashMap::new();
    for (tag, op) in entries {
        if let Some(previous) = table.insert(tag.to_string(), op) {
            tracing::warn!(
                tag,
                replaced = key(previous),
                by = key(op),
                "action tag registered twice; last registration wins"
            );
        }
    }
    table
}

fn check_tags(entries: &[(&str, &'static str)]) -> Vec<Validation<(), NonEmptyVec<ConfigError>>> {
    let mut checks = Vec::new();

    for (index, &(tag, operation)) in entries.iter().enumerate() {
        if tag.is_empty() {
            checks.push(Validation::fail(ConfigError::EmptyTag { operation }));
        }

        if let Some(&(_, first)) = entries[..index].iter().find(|(other, _)| *other == tag) {
            checks.push(Validation::fail(ConfigError::DuplicateTag {
                tag: tag.to_string(),
                first,
                second: operation,
            }));
        }
    }

    checks
}
