//! The transition contract shared by every enhancer.
//!
//! - Action descriptors via [`Action`]
//! - Pure transition functions via the [`Reducer`] trait
//! - Reducer-to-reducer functions via the [`Enhancer`] trait
//! - Field access into caller-defined states via [`Field`]
//!
//! Nothing in this module holds state between calls.

mod action;
mod error;
mod field;
mod reducer;

pub use action::Action;
pub use error::ReduceError;
pub use field::{Field, JsonArrayField, JsonField, Lens};
pub use reducer::{
    enhancer_fn, step, DynReducer, Enhanced, Enhancer, FnEnhancer, Noop, Reducer, Step,
};
pub(crate) use reducer::enhance_with_step;
