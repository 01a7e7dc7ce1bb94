//! The reducer and enhancer contracts.
//!
//! A reducer maps a state and an action to the next state. An enhancer turns
//! one reducer into another. Every enhancer in this crate follows the same
//! shape: compute an intermediate state, then hand it to the wrapped reducer
//! together with the original action. [`Enhanced`] is that shape.

use super::error::ReduceError;
use std::fmt;
use std::sync::Arc;

/// Pure state transition function.
///
/// State is taken by value. A reducer that does not recognize an action
/// returns the state it was given without copying it; one that does updates
/// its own copy in place. Callers that need the previous state keep a clone.
///
/// Any `Fn(S, &A) -> S + Send + Sync` closure is a reducer.
///
/// # Example
///
/// ```rust
/// use reducer_enhancers::core::{Action, Reducer};
///
/// let counter = |count: u32, action: &Action| {
///     if action.is("INCREMENT") {
///         count + 1
///     } else {
///         count
///     }
/// };
///
/// assert_eq!(counter.reduce(1, &Action::new("INCREMENT")), 2);
/// assert_eq!(counter.reduce(1, &Action::new("UNRELATED")), 1);
/// ```
pub trait Reducer<S, A>: Send + Sync {
    /// Compute the next state, reporting contract violations.
    fn try_reduce(&self, state: S, action: &A) -> Result<S, ReduceError>;

    /// Compute the next state.
    ///
    /// # Panics
    ///
    /// Panics when the state or action violates the shape the reducer was
    /// configured for (see [`ReduceError`]). Use [`Reducer::try_reduce`] to
    /// handle those cases instead.
    fn reduce(&self, state: S, action: &A) -> S {
        match self.try_reduce(state, action) {
            Ok(next) => next,
            Err(err) => {
                tracing::error!(error = %err, "reducer contract violated");
                panic!("reducer contract violated: {err}");
            }
        }
    }

    /// Chain this reducer in front of `base` without boxing.
    ///
    /// The result runs `self` first and feeds its output to `base`.
    fn wrap<R>(self, base: R) -> Enhanced<Self, R>
    where
        Self: Sized,
        R: Reducer<S, A>,
    {
        Enhanced::new(self, base)
    }
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(S, &A) -> S + Send + Sync,
{
    fn try_reduce(&self, state: S, action: &A) -> Result<S, ReduceError> {
        Ok(self(state, action))
    }
}

/// Reducer that returns its input unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Noop;

impl<S, A> Reducer<S, A> for Noop {
    fn try_reduce(&self, state: S, _action: &A) -> Result<S, ReduceError> {
        Ok(state)
    }
}

/// A step reducer chained in front of a base reducer.
///
/// `step` always runs first; its output and the original action then go to
/// `base`, whose result is final. The order never changes.
#[derive(Clone, Debug)]
pub struct Enhanced<E, R> {
    step: E,
    base: R,
}

impl<E, R> Enhanced<E, R> {
    pub fn new(step: E, base: R) -> Self {
        Self { step, base }
    }

    pub fn step(&self) -> &E {
        &self.step
    }

    pub fn base(&self) -> &R {
        &self.base
    }
}

impl<S, A, E, R> Reducer<S, A> for Enhanced<E, R>
where
    E: Reducer<S, A>,
    R: Reducer<S, A>,
{
    fn try_reduce(&self, state: S, action: &A) -> Result<S, ReduceError> {
        let intermediate = self.step.try_reduce(state, action)?;
        self.base.try_reduce(intermediate, action)
    }
}

/// Type-erased, cheaply clonable reducer.
pub struct DynReducer<S, A>(Arc<dyn Reducer<S, A>>);

impl<S, A> DynReducer<S, A> {
    pub fn new<R>(reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self(Arc::new(reducer))
    }
}

impl<S, A> Clone for DynReducer<S, A> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<S, A> fmt::Debug for DynReducer<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DynReducer")
    }
}

impl<S, A> Reducer<S, A> for DynReducer<S, A> {
    fn try_reduce(&self, state: S, action: &A) -> Result<S, ReduceError> {
        self.0.try_reduce(state, action)
    }
}

/// Turns a reducer into a new reducer.
///
/// The enhancers in this crate implement it by running their own logic as a
/// step before the wrapped reducer. Plain reducers become enhancers through
/// [`step`], and functions that need full control over the wrapped reducer
/// through [`enhancer_fn`].
pub trait Enhancer<S, A>: Send + Sync {
    fn enhance(&self, base: DynReducer<S, A>) -> DynReducer<S, A>;
}

/// Chain a clone of `step` in front of `base`.
pub(crate) fn enhance_with_step<S, A, E>(step: &E, base: DynReducer<S, A>) -> DynReducer<S, A>
where
    E: Reducer<S, A> + Clone + 'static,
    S: 'static,
    A: 'static,
{
    DynReducer::new(Enhanced::new(step.clone(), base))
}

impl<S, A, E, R> Enhancer<S, A> for Enhanced<E, R>
where
    Self: Reducer<S, A> + Clone + 'static,
    S: 'static,
    A: 'static,
{
    fn enhance(&self, base: DynReducer<S, A>) -> DynReducer<S, A> {
        enhance_with_step(self, base)
    }
}

impl<S, A> Enhancer<S, A> for DynReducer<S, A>
where
    S: 'static,
    A: 'static,
{
    fn enhance(&self, base: DynReducer<S, A>) -> DynReducer<S, A> {
        enhance_with_step(self, base)
    }
}

/// A reducer used as an enhancer step.
#[derive(Clone, Copy, Debug)]
pub struct Step<R>(R);

/// Use any clonable reducer, typically a closure or a function, as an
/// [`Enhancer`]. It runs before the reducer it wraps.
///
/// # Example
///
/// ```rust
/// use reducer_enhancers::core::{step, Action, DynReducer, Enhancer, Reducer};
///
/// let set_to_ten = step(|_: u32, _: &Action| 10);
/// let reducer = set_to_ten.enhance(DynReducer::new(|count: u32, _: &Action| count + 1));
///
/// assert_eq!(reducer.reduce(0, &Action::new("ANY")), 11);
/// ```
pub fn step<R>(reducer: R) -> Step<R> {
    Step(reducer)
}

impl<R> Step<R> {
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<S, A, R> Enhancer<S, A> for Step<R>
where
    R: Reducer<S, A> + Clone + 'static,
    S: 'static,
    A: 'static,
{
    fn enhance(&self, base: DynReducer<S, A>) -> DynReducer<S, A> {
        enhance_with_step(&self.0, base)
    }
}

/// Enhancer backed by a reducer-to-reducer function.
#[derive(Clone, Copy)]
pub struct FnEnhancer<F>(F);

/// Wrap a reducer-to-reducer function as an [`Enhancer`].
///
/// # Example
///
/// ```rust
/// use reducer_enhancers::core::{enhancer_fn, Action, DynReducer, Enhancer, Reducer};
///
/// // Doubles whatever the wrapped reducer produces.
/// let doubling = enhancer_fn(|base: DynReducer<u32, Action>| {
///     DynReducer::new(move |count: u32, action: &Action| base.reduce(count, action) * 2)
/// });
///
/// let reducer = doubling.enhance(DynReducer::new(|count: u32, _: &Action| count + 1));
/// assert_eq!(reducer.reduce(1, &Action::new("ANY")), 4);
/// ```
pub fn enhancer_fn<S, A, F>(f: F) -> FnEnhancer<F>
where
    F: Fn(DynReducer<S, A>) -> DynReducer<S, A> + Send + Sync,
{
    FnEnhancer(f)
}

impl<S, A, F> Enhancer<S, A> for FnEnhancer<F>
where
    F: Fn(DynReducer<S, A>) -> DynReducer<S, A> + Send + Sync,
{
    fn enhance(&self, base: DynReducer<S, A>) -> DynReducer<S, A> {
        (self.0)(base)
    }
}
