//! Left-to-right composition of enhancers.
//!
//! A pipe starts from the base reducer and applies each enhancer in turn to
//! the reducer built so far. The first enhancer therefore wraps the base most
//! tightly, and the last one is outermost: its own step runs first when the
//! assembled reducer is called.
//!
//! For compile-time chaining without boxing use
//! [`Reducer::wrap`](crate::core::Reducer::wrap) instead.

pub mod macros;

use crate::core::{DynReducer, Enhancer, Noop, Reducer};
use std::fmt;

/// Ordered list of boxed enhancers.
///
/// # Example
///
/// ```rust
/// use reducer_enhancers::core::{step, Action, Reducer};
/// use reducer_enhancers::pipe::Pipe;
///
/// let add_one = |count: u32, _: &Action| count + 1;
/// let double = |count: u32, _: &Action| count * 2;
///
/// // `double` is outermost, so it runs before `add_one`.
/// let reducer = Pipe::new().then(step(add_one)).then(step(double)).reducer();
///
/// assert_eq!(reducer.reduce(3, &Action::new("ANY")), 7);
/// ```
pub struct Pipe<S, A> {
    enhancers: Vec<Box<dyn Enhancer<S, A>>>,
}

impl<S, A> Pipe<S, A> {
    /// The identity pipe.
    pub fn new() -> Self {
        Self {
            enhancers: Vec::new(),
        }
    }

    /// Append an enhancer. It becomes the new outermost layer.
    pub fn then<E>(mut self, enhancer: E) -> Self
    where
        E: Enhancer<S, A> + 'static,
    {
        self.enhancers.push(Box::new(enhancer));
        self
    }

    pub fn len(&self) -> usize {
        self.enhancers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enhancers.is_empty()
    }

    /// Assemble the pipe around `base`.
    pub fn apply<R>(&self, base: R) -> DynReducer<S, A>
    where
        R: Reducer<S, A> + 'static,
    {
        self.enhance(DynReducer::new(base))
    }

    /// Assemble the pipe around the identity reducer.
    pub fn reducer(&self) -> DynReducer<S, A>
    where
        S: 'static,
        A: 'static,
    {
        self.apply(Noop)
    }
}

impl<S, A> Default for Pipe<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> fmt::Debug for Pipe<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipe")
            .field("enhancers", &self.enhancers.len())
            .finish()
    }
}

impl<S, A> Enhancer<S, A> for Pipe<S, A> {
    fn enhance(&self, base: DynReducer<S, A>) -> DynReducer<S, A> {
        tracing::debug!(enhancers = self.enhancers.len(), "assembling reducer pipeline");

        self.enhancers
            .iter()
            .fold(base, |reducer, enhancer| enhancer.enhance(reducer))
    }
}

/// Build a pipe from an ordered list of enhancers.
pub fn pipe<S, A>(enhancers: Vec<Box<dyn Enhancer<S, A>>>) -> Pipe<S, A> {
    Pipe { enhancers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{enhancer_fn, step, Action};

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Marks {
        x: i32,
        seen: Option<i32>,
    }

    fn set_x(state: Marks, _: &Action) -> Marks {
        Marks { x: 1, ..state }
    }

    fn read_x(state: Marks, _: &Action) -> Marks {
        Marks {
            seen: Some(state.x),
            ..state
        }
    }

    fn bump(state: Marks, action: &Action) -> Marks {
        if action.is("BUMP") {
            Marks {
                x: state.x + 10,
                ..state
            }
        } else {
            state
        }
    }

    #[test]
    fn empty_pipe_is_identity() {
        let pipeline: Pipe<Marks, Action> = Pipe::new();
        let reducer = pipeline.apply(bump);

        assert!(pipeline.is_empty());
        for tag in ["BUMP", "OTHER"] {
            let action = Action::new(tag);
            assert_eq!(
                reducer.reduce(Marks::default(), &action),
                bump(Marks::default(), &action)
            );
        }
    }

    #[test]
    fn last_enhancer_runs_first() {
        let reducer = Pipe::new().then(step(set_x)).then(step(read_x)).reducer();

        let next = reducer.reduce(Marks::default(), &Action::new("ANY"));

        assert_eq!(next, Marks { x: 1, seen: Some(0) });
    }

    #[test]
    fn first_enhancer_wraps_base_most_tightly() {
        let reducer = Pipe::new().then(step(read_x)).then(step(set_x)).reducer();

        let next = reducer.reduce(Marks::default(), &Action::new("ANY"));

        assert_eq!(next, Marks { x: 1, seen: Some(1) });
    }

    #[test]
    fn base_runs_last() {
        let reducer = Pipe::new().then(step(set_x)).apply(read_x);

        let next = reducer.reduce(Marks::default(), &Action::new("ANY"));

        assert_eq!(next.seen, Some(1));
    }

    #[test]
    fn pipes_nest() {
        let inner = Pipe::new().then(step(set_x));
        let outer = Pipe::new().then(inner).then(step(read_x));

        let next = outer.reducer().reduce(Marks::default(), &Action::new("ANY"));

        assert_eq!(outer.len(), 2);
        assert_eq!(next, Marks { x: 1, seen: Some(0) });
    }

    #[test]
    fn pipe_from_vec_keeps_order() {
        let mut enhancers: Vec<Box<dyn Enhancer<Marks, Action>>> = Vec::new();
        enhancers.push(Box::new(step(read_x)));
        enhancers.push(Box::new(step(set_x)));
        let reducer = pipe(enhancers).reducer();

        let next = reducer.reduce(Marks::default(), &Action::new("ANY"));

        assert_eq!(next.seen, Some(1));
    }

    #[test]
    fn mixes_closure_steps_and_fn_enhancers() {
        let record_x = |state: Marks, _: &Action| Marks {
            seen: Some(state.x * 100),
            ..state
        };
        let doubling = enhancer_fn(|base: DynReducer<Marks, Action>| {
            DynReducer::new(move |state: Marks, action: &Action| {
                let next = base.reduce(state, action);
                Marks {
                    x: next.x * 2,
                    ..next
                }
            })
        });
        let reducer = Pipe::new()
            .then(step(record_x))
            .then(doubling)
            .then(step(set_x))
            .apply(bump);

        let next = reducer.reduce(Marks::default(), &Action::new("BUMP"));

        // set_x, then the doubled (record_x, bump) chain.
        assert_eq!(next, Marks { x: 22, seen: Some(100) });
    }

    #[test]
    fn accepts_fn_enhancers() {
        let skip_base = enhancer_fn(|_base: DynReducer<Marks, Action>| DynReducer::new(Noop));
        let reducer = Pipe::new().then(skip_base).then(step(set_x)).apply(bump);

        let next = reducer.reduce(Marks::default(), &Action::new("BUMP"));

        assert_eq!(next.x, 1);
    }

    #[test]
    fn debug_shows_enhancer_count() {
        let pipeline: Pipe<Marks, Action> = Pipe::new().then(step(set_x));
        assert_eq!(format!("{pipeline:?}"), "Pipe { enhancers: 1 }");
    }
}
