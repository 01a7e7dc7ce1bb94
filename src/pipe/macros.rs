//! Macros for assembling pipelines with less ceremony.

/// Build a [`Pipe`](crate::pipe::Pipe) from enhancers listed in wrap order.
///
/// `pipe![e1, e2, e3]` is `Pipe::new().then(e1).then(e2).then(e3)`.
///
/// # Example
///
/// ```
/// use reducer_enhancers::config::LoadableActionTypes;
/// use reducer_enhancers::core::{Action, Reducer};
/// use reducer_enhancers::enhancers::{LoadableState, WithLoadable, WithResetState};
/// use reducer_enhancers::pipe;
///
/// let pipeline = pipe![
///     WithLoadable::new(&LoadableActionTypes::new("LOAD", "LOAD_OK", "LOAD_FAILED")),
///     WithResetState::new("RESET", LoadableState::new()),
/// ];
/// let reducer = pipeline.apply(|state: LoadableState, _: &Action| state);
///
/// let state = reducer.reduce(LoadableState::new(), &Action::new("LOAD"));
/// assert!(state.is_loading);
///
/// let state = reducer.reduce(state, &Action::new("RESET"));
/// assert_eq!(state, LoadableState::new());
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::pipe::Pipe::new()
    };
    ($($enhancer:expr),+ $(,)?) => {
        $crate::pipe::Pipe::new()$(.then($enhancer))+
    };
}

/// Build a [`Lens`](crate::core::Lens) onto a named field of a struct.
///
/// # Example
///
/// ```
/// use reducer_enhancers::core::Field;
/// use reducer_enhancers::lens;
///
/// struct TodoState {
///     todos: Vec<String>,
/// }
///
/// let todos = lens!(TodoState, todos);
/// let mut state = TodoState { todos: Vec::new() };
///
/// todos.get_mut(&mut state).unwrap().push("ship it".to_string());
/// assert_eq!(todos.name(), "todos");
/// assert_eq!(state.todos.len(), 1);
/// ```
#[macro_export]
macro_rules! lens {
    ($state:ty, $field:ident) => {
        $crate::core::Lens::new(stringify!($field), |state: &mut $state| &mut state.$field)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{step, Action, Field, Reducer};
    use crate::pipe::Pipe;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Counters {
        hits: u32,
        log: Vec<&'static str>,
    }

    fn first(mut state: Counters, _: &Action) -> Counters {
        state.log.push("first");
        state
    }

    fn second(mut state: Counters, _: &Action) -> Counters {
        state.log.push("second");
        state
    }

    #[test]
    fn empty_pipe_macro() {
        let pipeline: Pipe<Counters, Action> = pipe![];
        assert!(pipeline.is_empty());
    }

    #[test]
    fn pipe_macro_keeps_wrap_order() {
        let pipeline = pipe![step(first), step(second),];
        let reducer = pipeline.reducer();

        let next = reducer.reduce(Counters::default(), &Action::new("ANY"));

        assert_eq!(pipeline.len(), 2);
        assert_eq!(next.log, vec!["second", "first"]);
    }

    #[test]
    fn lens_macro_names_field() {
        let hits = lens!(Counters, hits);
        let mut state = Counters::default();

        *hits.get_mut(&mut state).unwrap() += 2;

        assert_eq!(hits.name(), "hits");
        assert_eq!(state.hits, 2);
    }
}
