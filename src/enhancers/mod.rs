//! Ready-made reducer enhancers.
//!
//! Each enhancer is itself a [`Reducer`](crate::core::Reducer) that computes an
//! intermediate state for the actions it recognizes and passes everything else
//! through untouched. Chain it in front of a base reducer with
//! [`Reducer::wrap`](crate::core::Reducer::wrap), or hand it to a
//! [`Pipe`](crate::pipe::Pipe) as an [`Enhancer`](crate::core::Enhancer).

pub mod collection;
pub mod loadable;
pub mod nested;
pub mod reset;

pub use collection::{
    ById, CollectionPayload, Identifiable, Identity, JsonKey, KeyFn, WithCollection,
};
pub use loadable::{Loadable, LoadableState, WithLoadable};
pub use nested::WithNestedReducer;
pub use reset::WithResetState;
