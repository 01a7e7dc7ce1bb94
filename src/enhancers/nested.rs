//! Delegation of a sub-state to an independent reducer.

use crate::core::{enhance_with_step, DynReducer, Enhancer, Field, ReduceError, Reducer};
use std::mem;

/// Enhancer that runs a nested reducer over one field of the state.
///
/// The nested reducer sees every action, whatever its tag, and is expected to
/// return its input for tags it does not handle. Only the managed field is
/// touched; sibling fields pass through as they were.
///
/// The sub-state is moved out of the parent for the duration of the nested
/// call, leaving `Default::default()` in its place.
///
/// # Example
///
/// ```rust
/// use reducer_enhancers::core::{Action, Lens, Reducer};
/// use reducer_enhancers::enhancers::WithNestedReducer;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Counter {
///     clicks: u32,
/// }
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Page {
///     title: String,
///     counter: Counter,
/// }
///
/// fn counter(state: Counter, action: &Action) -> Counter {
///     if action.is("CLICK") {
///         Counter { clicks: state.clicks + 1 }
///     } else {
///         state
///     }
/// }
///
/// let page = WithNestedReducer::new(
///     Lens::new("counter", |page: &mut Page| &mut page.counter),
///     counter,
/// );
///
/// let state = page.reduce(Page::default(), &Action::new("CLICK"));
/// assert_eq!(state.counter.clicks, 1);
/// ```
#[derive(Clone, Debug)]
pub struct WithNestedReducer<F, R> {
    field: F,
    nested: R,
}

impl<F, R> WithNestedReducer<F, R> {
    pub fn new(field: F, nested: R) -> Self {
        Self { field, nested }
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn nested(&self) -> &R {
        &self.nested
    }
}

impl<S, A, F, R> Reducer<S, A> for WithNestedReducer<F, R>
where
    F: Field<S>,
    F::Value: Default,
    R: Reducer<F::Value, A>,
{
    fn try_reduce(&self, mut state: S, action: &A) -> Result<S, ReduceError> {
        let slot = self.field.get_mut(&mut state)?;

        tracing::trace!(field = self.field.name(), "delegating to nested reducer");

        let sub_state = mem::take(slot);
        *slot = self.nested.try_reduce(sub_state, action)?;

        Ok(state)
    }
}

impl<S, A, F, R> Enhancer<S, A> for WithNestedReducer<F, R>
where
    Self: Reducer<S, A> + Clone + 'static,
    S: 'static,
    A: 'static,
{
    fn enhance(&self, base: DynReducer<S, A>) -> DynReducer<S, A> {
        enhance_with_step(self, base)
    }
}
