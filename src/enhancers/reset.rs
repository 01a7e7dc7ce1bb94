//! Reset to a snapshot captured at construction.

use crate::core::{enhance_with_step, Action, DynReducer, Enhancer, ReduceError, Reducer};
use std::sync::Arc;

/// Enhancer that swaps the whole state for a captured initial snapshot.
///
/// On the reset tag the state is replaced by a fresh clone of the snapshot.
/// The snapshot itself is shared between clones of the enhancer and never
/// handed out, so changes made to a reset state cannot leak back into it.
///
/// # Example
///
/// ```rust
/// use reducer_enhancers::core::{Action, Reducer};
/// use reducer_enhancers::enhancers::WithResetState;
///
/// let reset = WithResetState::new("RESET", vec!["seed".to_string()]);
/// let action: Action = Action::new("RESET");
///
/// let state = reset.reduce(Vec::new(), &action);
/// assert_eq!(state, vec!["seed".to_string()]);
/// ```
#[derive(Debug)]
pub struct WithResetState<S> {
    tag: String,
    initial: Arc<S>,
}

impl<S> WithResetState<S> {
    pub fn new(tag: impl Into<String>, initial: S) -> Self {
        Self {
            tag: tag.into(),
            initial: Arc::new(initial),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The captured snapshot.
    pub fn initial(&self) -> &S {
        &self.initial
    }
}

impl<S> Clone for WithResetState<S> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            initial: Arc::clone(&self.initial),
        }
    }
}

impl<S, P> Reducer<S, Action<P>> for WithResetState<S>
where
    S: Clone + Send + Sync,
{
    fn try_reduce(&self, state: S, action: &Action<P>) -> Result<S, ReduceError> {
        if action.tag != self.tag {
            return Ok(state);
        }

        tracing::debug!(tag = %action.tag, "resetting state to initial snapshot");
        Ok(S::clone(&self.initial))
    }
}

impl<S, A, T> Enhancer<S, A> for WithResetState<T>
where
    Self: Reducer<S, A> + Clone + 'static,
    S: 'static,
    A: 'static,
{
    fn enhance(&self, base: DynReducer<S, A>) -> DynReducer<S, A> {
        enhance_with_step(self, base)
    }
}
